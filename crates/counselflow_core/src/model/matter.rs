//! Legal matter records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum MatterType {
        Litigation => "Litigation",
        MergersAndAcquisitions => "M&A",
        Employment => "Employment",
        Ip => "IP",
        Regulatory => "Regulatory",
    }
}

labeled_enum! {
    pub enum MatterStatus {
        Active => "Active",
        OnHold => "On Hold",
        Closed => "Closed",
        Pending => "Pending",
    }
}

/// A matter handled by the legal team, with budget tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matter {
    pub id: String,
    pub title: String,
    pub client: String,
    pub matter_type: MatterType,
    pub lead_attorney: String,
    pub budget: u64,
    pub actual_spend: u64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub target_close_date: Option<NaiveDate>,
    pub status: MatterStatus,
    /// Numeric 0-100 score; fixture key is `riskLevel`.
    #[serde(rename = "riskLevel")]
    pub risk_score: u8,
    pub description: String,
    pub billable_hours: u32,
}
