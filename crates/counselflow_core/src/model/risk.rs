//! Enterprise risk register records.

use super::common::RiskLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum RiskCategory {
        Contractual => "Contractual",
        Regulatory => "Regulatory",
        Litigation => "Litigation",
        Ip => "IP",
        Operational => "Operational",
        Financial => "Financial",
    }
}

labeled_enum! {
    pub enum RiskStatus {
        Open => "Open",
        Mitigated => "Mitigated",
        Closed => "Closed",
    }
}

labeled_enum! {
    pub enum Likelihood {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

labeled_enum! {
    pub enum Impact {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        VeryHigh => "Very High",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub title: String,
    pub category: RiskCategory,
    pub probability: Likelihood,
    pub impact: Impact,
    /// Assessed rating; independent of `residual_risk`.
    pub overall_level: RiskLevel,
    pub description: String,
    pub mitigation: String,
    pub owner: String,
    pub review_date: NaiveDate,
    pub status: RiskStatus,
    /// 1-10.
    pub probability_score: u8,
    /// 1-10.
    pub impact_score: u8,
    /// 1-100.
    pub residual_risk: u8,
}
