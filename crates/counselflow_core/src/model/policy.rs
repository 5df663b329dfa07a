//! Internal policy library records.

use super::common::RiskLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum PolicyCategory {
        Legal => "Legal",
        Compliance => "Compliance",
        Hr => "HR",
        Security => "Security",
        Operations => "Operations",
        Finance => "Finance",
    }
}

labeled_enum! {
    pub enum PolicyStatus {
        Draft => "Draft",
        Review => "Review",
        Approved => "Approved",
        Published => "Published",
        Archived => "Archived",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub category: PolicyCategory,
    pub version: String,
    pub status: PolicyStatus,
    pub owner: String,
    pub approver: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub effective_date: NaiveDate,
    pub review_date: NaiveDate,
    pub last_updated: NaiveDate,
}
