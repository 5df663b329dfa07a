use super::{
    compare_text, parse_selection, unknown_field, Domain, Listable, Selection, SortDirection,
    ViewResult,
};
use crate::model::common::RiskLevel;
use crate::model::contract::{Contract, ContractKind, ContractStatus};
use std::cmp::Ordering;

labeled_enum! {
    pub enum ContractSort {
        Value => "value",
        Expiry => "expiry",
        Risk => "risk",
        Status => "status",
        Title => "title",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractFilter {
    pub status: Selection<ContractStatus>,
    pub risk_level: Selection<RiskLevel>,
    pub kind: Selection<ContractKind>,
}

impl Listable for Contract {
    type Filter = ContractFilter;
    type SortKey = ContractSort;

    const DOMAIN: Domain = Domain::Contracts;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "risk", "type"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.counterparty.as_str()]
    }

    fn matches_filter(&self, filter: &ContractFilter) -> bool {
        filter.status.admits(&self.status)
            && filter.risk_level.admits(&self.risk_level)
            && filter.kind.admits(&self.kind)
    }

    fn compare_by(&self, other: &Self, key: ContractSort) -> Ordering {
        match key {
            ContractSort::Value => self.value.cmp(&other.value),
            ContractSort::Expiry => self.end_date.cmp(&other.end_date),
            ContractSort::Risk => self.risk_level.cmp(&other.risk_level),
            ContractSort::Status => compare_text(self.status.as_str(), other.status.as_str()),
            ContractSort::Title => compare_text(&self.title, &other.title),
        }
    }

    fn sort_keys() -> &'static [ContractSort] {
        ContractSort::ALL
    }

    fn direction(key: ContractSort) -> SortDirection {
        match key {
            ContractSort::Value | ContractSort::Risk => SortDirection::Descending,
            ContractSort::Expiry | ContractSort::Status | ContractSort::Title => {
                SortDirection::Ascending
            }
        }
    }

    fn default_sort() -> Option<ContractSort> {
        None
    }

    fn sort_key_label(key: ContractSort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut ContractFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "status" => {
                filter.status = parse_selection(Self::DOMAIN, "status", value, ContractStatus::parse)?
            }
            "risk" | "risk_level" => {
                filter.risk_level = parse_selection(Self::DOMAIN, "risk", value, RiskLevel::parse)?
            }
            "type" | "kind" => {
                filter.kind = parse_selection(Self::DOMAIN, "type", value, ContractKind::parse)?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "status" => vec![self.status.as_str()],
            "risk" => vec![self.risk_level.as_str()],
            "type" => vec![self.kind.as_str()],
            _ => Vec::new(),
        }
    }
}
