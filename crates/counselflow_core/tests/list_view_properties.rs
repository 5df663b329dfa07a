use chrono::{Duration, NaiveDate};
use counselflow_core::model::common::RiskLevel;
use counselflow_core::model::contract::{Contract, ContractKind, ContractStatus};
use counselflow_core::view::{ContractFilter, ContractSort};
use counselflow_core::{apply_list_view, ListQuery, Listable, Selection};
use proptest::prelude::*;
use std::fmt::Debug;

fn contract_strategy() -> impl Strategy<Value = Contract> {
    (
        "[a-cA-C ]{0,8}",
        "[a-cA-C ]{0,8}",
        prop::sample::select(ContractKind::ALL.to_vec()),
        0u64..5_000_000,
        0i64..2_000,
        prop::sample::select(ContractStatus::ALL.to_vec()),
        prop::sample::select(RiskLevel::ALL.to_vec()),
    )
        .prop_map(
            |(title, counterparty, kind, value, offset, status, risk_level)| {
                let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
                Contract {
                    id: format!("{title}-{offset}"),
                    title,
                    counterparty,
                    kind,
                    value,
                    start_date,
                    end_date: start_date + Duration::days(offset),
                    status,
                    risk_level,
                    renewal_terms: String::new(),
                    assigned_attorney: String::new(),
                    tags: Vec::new(),
                }
            },
        )
}

fn selection<T: Clone + Debug + 'static>(values: &'static [T]) -> impl Strategy<Value = Selection<T>> {
    prop_oneof![
        Just(Selection::All),
        prop::sample::select(values.to_vec()).prop_map(Selection::Only),
    ]
}

fn filter_strategy() -> impl Strategy<Value = ContractFilter> {
    (
        selection(ContractStatus::ALL),
        selection(RiskLevel::ALL),
        selection(ContractKind::ALL),
    )
        .prop_map(|(status, risk_level, kind)| ContractFilter {
            status,
            risk_level,
            kind,
        })
}

fn query_strategy() -> impl Strategy<Value = ListQuery<ContractFilter, ContractSort>> {
    (
        "[a-cA-C]{0,2}",
        filter_strategy(),
        prop::option::of(prop::sample::select(ContractSort::ALL.to_vec())),
    )
        .prop_map(|(search, filter, sort)| ListQuery {
            search,
            filter,
            sort,
        })
}

proptest! {
    #[test]
    fn visible_records_are_a_subset_of_the_input(
        contracts in prop::collection::vec(contract_strategy(), 0..24),
        query in query_strategy(),
    ) {
        let visible = apply_list_view(&contracts, &query);

        prop_assert!(visible.len() <= contracts.len());
        for (index, shown) in visible.iter().enumerate() {
            prop_assert!(contracts.iter().any(|c| std::ptr::eq(*shown, c)));
            prop_assert!(!visible[..index].iter().any(|earlier| std::ptr::eq(*earlier, *shown)));
        }
    }

    #[test]
    fn visible_records_satisfy_search_and_filter(
        contracts in prop::collection::vec(contract_strategy(), 0..24),
        query in query_strategy(),
    ) {
        for shown in apply_list_view(&contracts, &query) {
            prop_assert!(shown.matches_search(&query.search));
            prop_assert!(shown.matches_filter(&query.filter));
        }
    }

    #[test]
    fn open_query_returns_every_record(
        contracts in prop::collection::vec(contract_strategy(), 0..24),
        sort in prop::option::of(prop::sample::select(ContractSort::ALL.to_vec())),
    ) {
        let query = ListQuery {
            search: String::new(),
            filter: ContractFilter::default(),
            sort,
        };
        let visible = apply_list_view(&contracts, &query);

        prop_assert_eq!(visible.len(), contracts.len());
        if sort.is_none() {
            for (shown, original) in visible.iter().zip(&contracts) {
                prop_assert!(std::ptr::eq(*shown, original));
            }
        }
    }

    #[test]
    fn reapplying_a_query_changes_nothing(
        contracts in prop::collection::vec(contract_strategy(), 0..24),
        query in query_strategy(),
    ) {
        let once: Vec<Contract> = apply_list_view(&contracts, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Contract> = apply_list_view(&once, &query)
            .into_iter()
            .cloned()
            .collect();

        prop_assert_eq!(once, twice);
    }
}
