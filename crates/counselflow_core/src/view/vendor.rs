use super::{
    compare_text, parse_selection, unknown_field, Domain, Listable, Selection, SortDirection,
    ViewResult,
};
use crate::model::vendor::{Vendor, VendorRelationship};
use std::cmp::Ordering;

labeled_enum! {
    pub enum VendorSort {
        Spend => "spend",
        Performance => "performance",
        Budget => "budget",
        Name => "name",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorFilter {
    pub relationship: Selection<VendorRelationship>,
    /// Admits a vendor when any practice area contains this text.
    pub practice_area: Selection<String>,
}

impl Listable for Vendor {
    type Filter = VendorFilter;
    type SortKey = VendorSort;

    const DOMAIN: Domain = Domain::Vendors;
    const FILTER_FIELDS: &'static [&'static str] = &["relationship", "practice_area"];

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.practice_areas.iter().map(String::as_str));
        fields
    }

    fn matches_filter(&self, filter: &VendorFilter) -> bool {
        let area_matches = match &filter.practice_area {
            Selection::All => true,
            Selection::Only(area) => self
                .practice_areas
                .iter()
                .any(|candidate| candidate.contains(area.as_str())),
        };
        filter.relationship.admits(&self.relationship) && area_matches
    }

    fn compare_by(&self, other: &Self, key: VendorSort) -> Ordering {
        match key {
            VendorSort::Spend => self.total_spend.cmp(&other.total_spend),
            VendorSort::Performance => self
                .performance_rating
                .total_cmp(&other.performance_rating),
            VendorSort::Budget => self.annual_budget.cmp(&other.annual_budget),
            VendorSort::Name => compare_text(&self.name, &other.name),
        }
    }

    fn sort_keys() -> &'static [VendorSort] {
        VendorSort::ALL
    }

    fn direction(key: VendorSort) -> SortDirection {
        match key {
            VendorSort::Name => SortDirection::Ascending,
            VendorSort::Spend | VendorSort::Performance | VendorSort::Budget => {
                SortDirection::Descending
            }
        }
    }

    fn default_sort() -> Option<VendorSort> {
        Some(VendorSort::Spend)
    }

    fn sort_key_label(key: VendorSort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut VendorFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "relationship" => {
                filter.relationship =
                    parse_selection(Self::DOMAIN, "relationship", value, VendorRelationship::parse)?
            }
            "practice_area" | "practice-area" | "area" => {
                filter.practice_area =
                    parse_selection(Self::DOMAIN, "practice_area", value, |text| {
                        let text = text.trim();
                        (!text.is_empty()).then(|| text.to_string())
                    })?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "relationship" => vec![self.relationship.as_str()],
            "practice_area" => self.practice_areas.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
