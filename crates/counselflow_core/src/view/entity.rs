use super::{
    compare_text, parse_selection, unknown_field, Domain, Listable, Selection, SortDirection,
    ViewResult,
};
use crate::model::entity::{Entity, EntityKind, EntityStatus};
use std::cmp::Ordering;

labeled_enum! {
    pub enum EntitySort {
        Name => "name",
        Compliance => "compliance",
        Formed => "formed",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityFilter {
    pub kind: Selection<EntityKind>,
    pub status: Selection<EntityStatus>,
}

impl Listable for Entity {
    type Filter = EntityFilter;
    type SortKey = EntitySort;

    const DOMAIN: Domain = Domain::Entities;
    const FILTER_FIELDS: &'static [&'static str] = &["type", "status"];

    /// Only the primary jurisdiction is searched.
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.primary_jurisdiction());
        fields
    }

    fn matches_filter(&self, filter: &EntityFilter) -> bool {
        filter.kind.admits(&self.kind) && filter.status.admits(&self.status)
    }

    fn compare_by(&self, other: &Self, key: EntitySort) -> Ordering {
        match key {
            EntitySort::Name => compare_text(&self.name, &other.name),
            EntitySort::Compliance => self.compliance_score.cmp(&other.compliance_score),
            EntitySort::Formed => self.formation_date.cmp(&other.formation_date),
        }
    }

    fn sort_keys() -> &'static [EntitySort] {
        EntitySort::ALL
    }

    fn direction(key: EntitySort) -> SortDirection {
        match key {
            EntitySort::Name => SortDirection::Ascending,
            EntitySort::Compliance | EntitySort::Formed => SortDirection::Descending,
        }
    }

    fn default_sort() -> Option<EntitySort> {
        None
    }

    fn sort_key_label(key: EntitySort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut EntityFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "type" | "kind" => {
                filter.kind = parse_selection(Self::DOMAIN, "type", value, EntityKind::parse)?
            }
            "status" => {
                filter.status = parse_selection(Self::DOMAIN, "status", value, EntityStatus::parse)?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "type" => vec![self.kind.as_str()],
            "status" => vec![self.status.as_str()],
            _ => Vec::new(),
        }
    }
}
