use super::{
    compare_text, parse_selection, unknown_field, Domain, Listable, Selection, SortDirection,
    ViewResult,
};
use crate::model::matter::{Matter, MatterStatus, MatterType};
use std::cmp::Ordering;

labeled_enum! {
    pub enum MatterSort {
        Date => "date",
        Budget => "budget",
        Risk => "risk",
        Status => "status",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatterFilter {
    pub status: Selection<MatterStatus>,
    pub matter_type: Selection<MatterType>,
}

impl Listable for Matter {
    type Filter = MatterFilter;
    type SortKey = MatterSort;

    const DOMAIN: Domain = Domain::Matters;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "type"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client.as_str(), self.lead_attorney.as_str()]
    }

    fn matches_filter(&self, filter: &MatterFilter) -> bool {
        filter.status.admits(&self.status) && filter.matter_type.admits(&self.matter_type)
    }

    fn compare_by(&self, other: &Self, key: MatterSort) -> Ordering {
        match key {
            MatterSort::Date => self.start_date.cmp(&other.start_date),
            MatterSort::Budget => self.budget.cmp(&other.budget),
            MatterSort::Risk => self.risk_score.cmp(&other.risk_score),
            MatterSort::Status => compare_text(self.status.as_str(), other.status.as_str()),
        }
    }

    fn sort_keys() -> &'static [MatterSort] {
        MatterSort::ALL
    }

    fn direction(key: MatterSort) -> SortDirection {
        match key {
            MatterSort::Status => SortDirection::Ascending,
            MatterSort::Date | MatterSort::Budget | MatterSort::Risk => SortDirection::Descending,
        }
    }

    fn default_sort() -> Option<MatterSort> {
        Some(MatterSort::Date)
    }

    fn sort_key_label(key: MatterSort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut MatterFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "status" => {
                filter.status = parse_selection(Self::DOMAIN, "status", value, MatterStatus::parse)?
            }
            "type" | "matter_type" => {
                filter.matter_type =
                    parse_selection(Self::DOMAIN, "type", value, MatterType::parse)?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "status" => vec![self.status.as_str()],
            "type" => vec![self.matter_type.as_str()],
            _ => Vec::new(),
        }
    }
}
