//! Outside counsel (vendor) spend records.

use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum VendorRelationship {
        Preferred => "Preferred",
        Panel => "Panel",
        Specialty => "Specialty",
        Occasional => "Occasional",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub practice_areas: Vec<String>,
    pub total_spend: u64,
    /// 0.0-5.0 client rating.
    pub performance_rating: f64,
    pub relationship: VendorRelationship,
    pub annual_budget: u64,
    pub ytd_spend: u64,
    /// Invoice payment terms in days; fixture key is `paymentTerms`.
    #[serde(rename = "paymentTerms")]
    pub payment_terms_days: u32,
}
