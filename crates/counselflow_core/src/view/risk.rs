use super::{
    parse_selection, unknown_field, Domain, Listable, Selection, SortDirection, ViewResult,
};
use crate::model::risk::{Risk, RiskCategory, RiskStatus};
use std::cmp::Ordering;

labeled_enum! {
    pub enum RiskSort {
        /// Residual risk.
        Risk => "risk",
        Impact => "impact",
        Probability => "probability",
        /// Review date.
        Date => "date",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskFilter {
    pub category: Selection<RiskCategory>,
    pub status: Selection<RiskStatus>,
}

impl Listable for Risk {
    type Filter = RiskFilter;
    type SortKey = RiskSort;

    const DOMAIN: Domain = Domain::Risks;
    const FILTER_FIELDS: &'static [&'static str] = &["category", "status"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.owner.as_str()]
    }

    fn matches_filter(&self, filter: &RiskFilter) -> bool {
        filter.category.admits(&self.category) && filter.status.admits(&self.status)
    }

    fn compare_by(&self, other: &Self, key: RiskSort) -> Ordering {
        match key {
            RiskSort::Risk => self.residual_risk.cmp(&other.residual_risk),
            RiskSort::Impact => self.impact_score.cmp(&other.impact_score),
            RiskSort::Probability => self.probability_score.cmp(&other.probability_score),
            RiskSort::Date => self.review_date.cmp(&other.review_date),
        }
    }

    fn sort_keys() -> &'static [RiskSort] {
        RiskSort::ALL
    }

    fn direction(_key: RiskSort) -> SortDirection {
        SortDirection::Descending
    }

    fn default_sort() -> Option<RiskSort> {
        Some(RiskSort::Risk)
    }

    fn sort_key_label(key: RiskSort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut RiskFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "category" => {
                filter.category =
                    parse_selection(Self::DOMAIN, "category", value, RiskCategory::parse)?
            }
            "status" => {
                filter.status = parse_selection(Self::DOMAIN, "status", value, RiskStatus::parse)?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "category" => vec![self.category.as_str()],
            "status" => vec![self.status.as_str()],
            _ => Vec::new(),
        }
    }
}
