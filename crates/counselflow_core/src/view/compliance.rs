use super::{
    parse_selection, unknown_field, Domain, Listable, Selection, SortDirection, ViewResult,
};
use crate::model::compliance::{ComplianceCategory, ComplianceItem, ComplianceStatus};
use std::cmp::Ordering;

labeled_enum! {
    pub enum ComplianceSort {
        Due => "due",
        Score => "score",
        Priority => "priority",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceFilter {
    pub status: Selection<ComplianceStatus>,
    pub category: Selection<ComplianceCategory>,
}

impl Listable for ComplianceItem {
    type Filter = ComplianceFilter;
    type SortKey = ComplianceSort;

    const DOMAIN: Domain = Domain::Compliance;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "category"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn matches_filter(&self, filter: &ComplianceFilter) -> bool {
        filter.status.admits(&self.status) && filter.category.admits(&self.category)
    }

    fn compare_by(&self, other: &Self, key: ComplianceSort) -> Ordering {
        match key {
            ComplianceSort::Due => self.due_date.cmp(&other.due_date),
            ComplianceSort::Score => self.compliance_score.cmp(&other.compliance_score),
            ComplianceSort::Priority => self.priority.cmp(&other.priority),
        }
    }

    fn sort_keys() -> &'static [ComplianceSort] {
        ComplianceSort::ALL
    }

    fn direction(_key: ComplianceSort) -> SortDirection {
        SortDirection::Descending
    }

    fn default_sort() -> Option<ComplianceSort> {
        None
    }

    fn sort_key_label(key: ComplianceSort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut ComplianceFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "status" => {
                filter.status =
                    parse_selection(Self::DOMAIN, "status", value, ComplianceStatus::parse)?
            }
            "category" => {
                filter.category =
                    parse_selection(Self::DOMAIN, "category", value, ComplianceCategory::parse)?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "status" => vec![self.status.as_str()],
            "category" => vec![self.category.as_str()],
            _ => Vec::new(),
        }
    }
}
