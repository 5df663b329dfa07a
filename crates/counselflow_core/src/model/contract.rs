//! Contract register records.

use super::common::RiskLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Agreement family.
    pub enum ContractKind {
        Msa => "MSA",
        Nda => "NDA",
        Employment => "Employment",
        Lease => "Lease",
        License => "License",
    }
}

labeled_enum! {
    /// Contract lifecycle state.
    pub enum ContractStatus {
        Active => "Active",
        Pending => "Pending",
        Expired => "Expired",
        Terminated => "Terminated",
    }
}

/// One contract in the register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub counterparty: String,
    /// Serialized as `type` to match fixture naming.
    #[serde(rename = "type")]
    pub kind: ContractKind,
    /// Total contract value in whole currency units.
    pub value: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
    pub risk_level: RiskLevel,
    pub renewal_terms: String,
    pub assigned_attorney: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Contract {
    /// Whole days from `as_of` until `end_date`; negative once expired.
    pub fn days_to_expiry(&self, as_of: NaiveDate) -> i64 {
        (self.end_date - as_of).num_days()
    }
}
