//! Dispute and litigation records.

use super::common::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum DisputeKind {
        Contract => "Contract",
        Employment => "Employment",
        Ip => "IP",
        Regulatory => "Regulatory",
        Commercial => "Commercial",
        ProductLiability => "Product Liability",
    }
}

labeled_enum! {
    pub enum DisputeStatus {
        Investigation => "Investigation",
        Mediation => "Mediation",
        Arbitration => "Arbitration",
        Litigation => "Litigation",
        Settled => "Settled",
        Closed => "Closed",
    }
}

impl DisputeStatus {
    /// Settled and closed disputes are no longer active.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Settled | Self::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: String,
    pub title: String,
    pub plaintiff: String,
    pub defendant: String,
    #[serde(rename = "type")]
    pub kind: DisputeKind,
    pub status: DisputeStatus,
    pub priority: Priority,
    pub assigned_counsel: String,
    pub filing_date: NaiveDate,
    #[serde(default)]
    pub next_hearing: Option<NaiveDate>,
    pub estimated_value: u64,
    pub actual_cost: u64,
    pub description: String,
    pub risk_score: u8,
    pub resolution_probability: u8,
    pub jurisdiction: String,
}
