use super::{
    compare_text, parse_selection, unknown_field, Domain, Listable, Selection, SortDirection,
    ViewResult,
};
use crate::model::dispute::{Dispute, DisputeKind, DisputeStatus};
use std::cmp::Ordering;

labeled_enum! {
    pub enum DisputeSort {
        /// Estimated value.
        Value => "value",
        /// Filing date.
        Date => "date",
        Risk => "risk",
        Status => "status",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisputeFilter {
    pub status: Selection<DisputeStatus>,
    pub kind: Selection<DisputeKind>,
}

impl Listable for Dispute {
    type Filter = DisputeFilter;
    type SortKey = DisputeSort;

    const DOMAIN: Domain = Domain::Disputes;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "type"];

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.plaintiff.as_str(),
            self.defendant.as_str(),
            self.assigned_counsel.as_str(),
        ]
    }

    fn matches_filter(&self, filter: &DisputeFilter) -> bool {
        filter.status.admits(&self.status) && filter.kind.admits(&self.kind)
    }

    fn compare_by(&self, other: &Self, key: DisputeSort) -> Ordering {
        match key {
            DisputeSort::Value => self.estimated_value.cmp(&other.estimated_value),
            DisputeSort::Date => self.filing_date.cmp(&other.filing_date),
            DisputeSort::Risk => self.risk_score.cmp(&other.risk_score),
            DisputeSort::Status => compare_text(self.status.as_str(), other.status.as_str()),
        }
    }

    fn sort_keys() -> &'static [DisputeSort] {
        DisputeSort::ALL
    }

    fn direction(key: DisputeSort) -> SortDirection {
        match key {
            DisputeSort::Status => SortDirection::Ascending,
            DisputeSort::Value | DisputeSort::Date | DisputeSort::Risk => {
                SortDirection::Descending
            }
        }
    }

    fn default_sort() -> Option<DisputeSort> {
        Some(DisputeSort::Value)
    }

    fn sort_key_label(key: DisputeSort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut DisputeFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "status" => {
                filter.status =
                    parse_selection(Self::DOMAIN, "status", value, DisputeStatus::parse)?
            }
            "type" | "kind" => {
                filter.kind = parse_selection(Self::DOMAIN, "type", value, DisputeKind::parse)?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "status" => vec![self.status.as_str()],
            "type" => vec![self.kind.as_str()],
            _ => Vec::new(),
        }
    }
}
