//! Corporate entity records for the company secretarial pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum EntityKind {
        Corporation => "Corporation",
        Llc => "LLC",
        Partnership => "Partnership",
        Branch => "Branch",
    }
}

labeled_enum! {
    pub enum EntityStatus {
        Active => "Active",
        Inactive => "Inactive",
        Dissolved => "Dissolved",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Ordered list; the first entry is the primary jurisdiction.
    #[serde(rename = "jurisdiction")]
    pub jurisdictions: Vec<String>,
    pub formation_date: NaiveDate,
    pub status: EntityStatus,
    /// Id of the parent entity. Not checked against the entity list.
    #[serde(default)]
    pub parent_entity: Option<String>,
    pub compliance_score: u8,
    pub registered_agent: String,
}

impl Entity {
    /// First listed jurisdiction, if any.
    pub fn primary_jurisdiction(&self) -> Option<&str> {
        self.jurisdictions.first().map(String::as_str)
    }
}
