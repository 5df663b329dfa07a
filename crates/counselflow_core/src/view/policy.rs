use super::{
    compare_text, parse_selection, unknown_field, Domain, Listable, Selection, SortDirection,
    ViewResult,
};
use crate::model::policy::{Policy, PolicyCategory, PolicyStatus};
use std::cmp::Ordering;

labeled_enum! {
    pub enum PolicySort {
        /// Last update.
        Date => "date",
        Category => "category",
        Risk => "risk",
        Name => "name",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyFilter {
    pub category: Selection<PolicyCategory>,
    pub status: Selection<PolicyStatus>,
}

impl Listable for Policy {
    type Filter = PolicyFilter;
    type SortKey = PolicySort;

    const DOMAIN: Domain = Domain::Policies;
    const FILTER_FIELDS: &'static [&'static str] = &["category", "status"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.owner.as_str()]
    }

    fn matches_filter(&self, filter: &PolicyFilter) -> bool {
        filter.category.admits(&self.category) && filter.status.admits(&self.status)
    }

    fn compare_by(&self, other: &Self, key: PolicySort) -> Ordering {
        match key {
            PolicySort::Date => self.last_updated.cmp(&other.last_updated),
            PolicySort::Category => {
                compare_text(self.category.as_str(), other.category.as_str())
            }
            PolicySort::Risk => self.risk_level.cmp(&other.risk_level),
            PolicySort::Name => compare_text(&self.title, &other.title),
        }
    }

    fn sort_keys() -> &'static [PolicySort] {
        PolicySort::ALL
    }

    fn direction(key: PolicySort) -> SortDirection {
        match key {
            PolicySort::Date | PolicySort::Risk => SortDirection::Descending,
            PolicySort::Category | PolicySort::Name => SortDirection::Ascending,
        }
    }

    fn default_sort() -> Option<PolicySort> {
        Some(PolicySort::Date)
    }

    fn sort_key_label(key: PolicySort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut PolicyFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "category" => {
                filter.category =
                    parse_selection(Self::DOMAIN, "category", value, PolicyCategory::parse)?
            }
            "status" => {
                filter.status = parse_selection(Self::DOMAIN, "status", value, PolicyStatus::parse)?
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
