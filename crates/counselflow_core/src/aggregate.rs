//! Summary figures shown on each page's cards.
//!
//! # Responsibility
//! - Provide small generic fold helpers (count, sum, mean, share).
//! - Compute one summary per domain over the unfiltered collection.
//!
//! # Invariants
//! - Means over empty input are `None`, never NaN.
//! - Distributions keep first-seen key order so card order is stable.

use crate::model::common::{Priority, RiskLevel};
use crate::model::compliance::{
    AuditStatus, ComplianceAudit, ComplianceItem, ComplianceStatus, RegulatoryUpdate, UpdateStatus,
};
use crate::model::contract::{Contract, ContractKind, ContractStatus};
use crate::model::dispute::{Dispute, DisputeStatus};
use crate::model::entity::{Entity, EntityKind, EntityStatus};
use crate::model::matter::{Matter, MatterStatus, MatterType};
use crate::model::policy::{Policy, PolicyCategory, PolicyStatus};
use crate::model::risk::{Risk, RiskCategory, RiskStatus};
use crate::model::task::{Task, TaskStatus};
use crate::model::vendor::{Vendor, VendorRelationship};
use chrono::NaiveDate;
use serde::Serialize;

/// Contracts ending within this many days count as expiring.
pub const EXPIRY_WINDOW_DAYS: i64 = 90;

/// Counts records per key, in first-seen key order.
pub fn count_by<R, K: PartialEq>(records: &[R], key: impl Fn(&R) -> K) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    for record in records {
        let value = key(record);
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Sums `value` per key, in first-seen key order.
pub fn sum_by<R, K: PartialEq>(
    records: &[R],
    key: impl Fn(&R) -> K,
    value: impl Fn(&R) -> u64,
) -> Vec<(K, u64)> {
    let mut sums: Vec<(K, u64)> = Vec::new();
    for record in records {
        let group = key(record);
        let amount = value(record);
        match sums.iter_mut().find(|(seen, _)| *seen == group) {
            Some((_, total)) => *total += amount,
            None => sums.push((group, amount)),
        }
    }
    sums
}

/// Arithmetic mean of `value`, or `None` for an empty slice.
pub fn mean_by<R>(records: &[R], value: impl Fn(&R) -> f64) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.iter().map(value).sum();
    Some(total / records.len() as f64)
}

/// `part` as a whole-number percentage of `whole`; zero when `whole` is zero.
pub fn share_percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (part as f64 / whole as f64 * 100.0).round();
    percent.clamp(0.0, 255.0) as u8
}

/// One label/value pair rendered as a summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
}

impl SummaryCard {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:.1}"),
        None => "n/a".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractSummary {
    pub total: usize,
    pub total_value: u64,
    pub active: usize,
    /// Ending after `as_of` and within [`EXPIRY_WINDOW_DAYS`].
    pub expiring_soon: usize,
    pub high_risk: usize,
    pub value_by_kind: Vec<(ContractKind, u64)>,
    pub by_status: Vec<(ContractStatus, usize)>,
    pub by_risk: Vec<(RiskLevel, usize)>,
}

impl ContractSummary {
    pub fn compute(contracts: &[Contract], as_of: NaiveDate) -> Self {
        Self {
            total: contracts.len(),
            total_value: contracts.iter().map(|contract| contract.value).sum(),
            active: contracts
                .iter()
                .filter(|contract| contract.status == ContractStatus::Active)
                .count(),
            expiring_soon: contracts
                .iter()
                .filter(|contract| {
                    let days = contract.days_to_expiry(as_of);
                    days > 0 && days <= EXPIRY_WINDOW_DAYS
                })
                .count(),
            high_risk: contracts
                .iter()
                .filter(|contract| contract.risk_level.is_elevated())
                .count(),
            value_by_kind: sum_by(contracts, |contract| contract.kind, |contract| contract.value),
            by_status: count_by(contracts, |contract| contract.status),
            by_risk: count_by(contracts, |contract| contract.risk_level),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Total contracts", self.total),
            SummaryCard::new("Total value", self.total_value),
            SummaryCard::new("Active", self.active),
            SummaryCard::new("Expiring in 90 days", self.expiring_soon),
            SummaryCard::new("High risk", self.high_risk),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatterSummary {
    pub total: usize,
    pub total_budget: u64,
    pub total_spend: u64,
    pub budget_utilisation: u8,
    pub active: usize,
    pub average_risk: Option<f64>,
    pub by_type: Vec<(MatterType, usize)>,
}

impl MatterSummary {
    pub fn compute(matters: &[Matter]) -> Self {
        let total_budget: u64 = matters.iter().map(|matter| matter.budget).sum();
        let total_spend: u64 = matters.iter().map(|matter| matter.actual_spend).sum();
        Self {
            total: matters.len(),
            total_budget,
            total_spend,
            budget_utilisation: share_percent(total_spend, total_budget),
            active: matters
                .iter()
                .filter(|matter| matter.status == MatterStatus::Active)
                .count(),
            average_risk: mean_by(matters, |matter| f64::from(matter.risk_score)),
            by_type: count_by(matters, |matter| matter.matter_type),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Active matters", self.active),
            SummaryCard::new("Total budget", self.total_budget),
            SummaryCard::new("Total spend", self.total_spend),
            SummaryCard::new("Budget used %", self.budget_utilisation),
            SummaryCard::new("Average risk", format_mean(self.average_risk)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisputeSummary {
    pub total: usize,
    pub active: usize,
    pub total_exposure: u64,
    pub total_cost: u64,
    pub average_risk: Option<f64>,
    pub average_resolution_probability: Option<f64>,
    pub by_status: Vec<(DisputeStatus, usize)>,
}

impl DisputeSummary {
    pub fn compute(disputes: &[Dispute]) -> Self {
        Self {
            total: disputes.len(),
            active: disputes
                .iter()
                .filter(|dispute| dispute.status.is_active())
                .count(),
            total_exposure: disputes.iter().map(|dispute| dispute.estimated_value).sum(),
            total_cost: disputes.iter().map(|dispute| dispute.actual_cost).sum(),
            average_risk: mean_by(disputes, |dispute| f64::from(dispute.risk_score)),
            average_resolution_probability: mean_by(disputes, |dispute| {
                f64::from(dispute.resolution_probability)
            }),
            by_status: count_by(disputes, |dispute| dispute.status),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Active disputes", self.active),
            SummaryCard::new("Total exposure", self.total_exposure),
            SummaryCard::new("Total cost", self.total_cost),
            SummaryCard::new("Average risk", format_mean(self.average_risk)),
            SummaryCard::new(
                "Resolution probability",
                format_mean(self.average_resolution_probability),
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub total: usize,
    pub open: usize,
    /// Overall level `Critical`.
    pub critical: usize,
    pub average_residual: Option<f64>,
    pub by_category: Vec<(RiskCategory, usize)>,
}

impl RiskSummary {
    pub fn compute(risks: &[Risk]) -> Self {
        Self {
            total: risks.len(),
            open: risks
                .iter()
                .filter(|risk| risk.status == RiskStatus::Open)
                .count(),
            critical: risks
                .iter()
                .filter(|risk| risk.overall_level == RiskLevel::Critical)
                .count(),
            average_residual: mean_by(risks, |risk| f64::from(risk.residual_risk)),
            by_category: count_by(risks, |risk| risk.category),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Total risks", self.total),
            SummaryCard::new("Open", self.open),
            SummaryCard::new("Critical", self.critical),
            SummaryCard::new("Average residual", format_mean(self.average_residual)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicySummary {
    pub total: usize,
    pub published: usize,
    pub under_review: usize,
    /// Review date strictly before `as_of`.
    pub review_due: usize,
    pub by_category: Vec<(PolicyCategory, usize)>,
}

impl PolicySummary {
    pub fn compute(policies: &[Policy], as_of: NaiveDate) -> Self {
        Self {
            total: policies.len(),
            published: policies
                .iter()
                .filter(|policy| policy.status == PolicyStatus::Published)
                .count(),
            under_review: policies
                .iter()
                .filter(|policy| policy.status == PolicyStatus::Review)
                .count(),
            review_due: policies
                .iter()
                .filter(|policy| policy.review_date < as_of)
                .count(),
            by_category: count_by(policies, |policy| policy.category),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Total policies", self.total),
            SummaryCard::new("Published", self.published),
            SummaryCard::new("Under review", self.under_review),
            SummaryCard::new("Review overdue", self.review_due),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorSummary {
    pub total: usize,
    pub total_spend: u64,
    pub total_budget: u64,
    pub ytd_spend: u64,
    pub average_rating: Option<f64>,
    pub by_relationship: Vec<(VendorRelationship, usize)>,
}

impl VendorSummary {
    pub fn compute(vendors: &[Vendor]) -> Self {
        Self {
            total: vendors.len(),
            total_spend: vendors.iter().map(|vendor| vendor.total_spend).sum(),
            total_budget: vendors.iter().map(|vendor| vendor.annual_budget).sum(),
            ytd_spend: vendors.iter().map(|vendor| vendor.ytd_spend).sum(),
            average_rating: mean_by(vendors, |vendor| vendor.performance_rating),
            by_relationship: count_by(vendors, |vendor| vendor.relationship),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Total spend", self.total_spend),
            SummaryCard::new("Annual budget", self.total_budget),
            SummaryCard::new("YTD spend", self.ytd_spend),
            SummaryCard::new("Average rating", format_mean(self.average_rating)),
            SummaryCard::new("Firms", self.total),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceSummary {
    pub total: usize,
    pub compliant_percent: u8,
    pub non_compliant: usize,
    pub overdue: usize,
    pub average_score: Option<f64>,
    pub critical: usize,
    /// Audits with status `Scheduled`.
    pub upcoming_audits: usize,
    /// Regulatory updates with status `New`.
    pub new_updates: usize,
    pub by_status: Vec<(ComplianceStatus, usize)>,
}

impl ComplianceSummary {
    pub fn compute(
        items: &[ComplianceItem],
        audits: &[ComplianceAudit],
        updates: &[RegulatoryUpdate],
    ) -> Self {
        let compliant = items
            .iter()
            .filter(|item| item.status == ComplianceStatus::Compliant)
            .count();
        Self {
            total: items.len(),
            compliant_percent: share_percent(compliant as u64, items.len() as u64),
            non_compliant: items
                .iter()
                .filter(|item| item.status == ComplianceStatus::NonCompliant)
                .count(),
            overdue: items
                .iter()
                .filter(|item| item.status == ComplianceStatus::Overdue)
                .count(),
            average_score: mean_by(items, |item| f64::from(item.compliance_score)),
            critical: items
                .iter()
                .filter(|item| item.priority == Priority::Critical)
                .count(),
            upcoming_audits: audits
                .iter()
                .filter(|audit| audit.status == AuditStatus::Scheduled)
                .count(),
            new_updates: updates
                .iter()
                .filter(|update| update.status == UpdateStatus::New)
                .count(),
            by_status: count_by(items, |item| item.status),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Requirements", self.total),
            SummaryCard::new("Compliant %", self.compliant_percent),
            SummaryCard::new("Non-compliant", self.non_compliant),
            SummaryCard::new("Overdue", self.overdue),
            SummaryCard::new("Average score", format_mean(self.average_score)),
            SummaryCard::new("Upcoming audits", self.upcoming_audits),
            SummaryCard::new("New updates", self.new_updates),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySummary {
    pub total: usize,
    pub active: usize,
    pub average_compliance: Option<f64>,
    pub subsidiaries: usize,
    pub by_kind: Vec<(EntityKind, usize)>,
}

impl EntitySummary {
    pub fn compute(entities: &[Entity]) -> Self {
        Self {
            total: entities.len(),
            active: entities
                .iter()
                .filter(|entity| entity.status == EntityStatus::Active)
                .count(),
            average_compliance: mean_by(entities, |entity| f64::from(entity.compliance_score)),
            subsidiaries: entities
                .iter()
                .filter(|entity| entity.parent_entity.is_some())
                .count(),
            by_kind: count_by(entities, |entity| entity.kind),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Entities", self.total),
            SummaryCard::new("Active", self.active),
            SummaryCard::new("Subsidiaries", self.subsidiaries),
            SummaryCard::new("Average compliance", format_mean(self.average_compliance)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskSummary {
    pub total: usize,
    pub open: usize,
    /// Not completed and due strictly before `as_of`.
    pub overdue: usize,
    pub average_progress: Option<f64>,
    pub by_status: Vec<(TaskStatus, usize)>,
}

impl TaskSummary {
    pub fn compute(tasks: &[Task], as_of: NaiveDate) -> Self {
        Self {
            total: tasks.len(),
            open: tasks
                .iter()
                .filter(|task| task.status != TaskStatus::Completed)
                .count(),
            overdue: tasks
                .iter()
                .filter(|task| task.status != TaskStatus::Completed && task.due_date < as_of)
                .count(),
            average_progress: mean_by(tasks, |task| f64::from(task.progress)),
            by_status: count_by(tasks, |task| task.status),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::new("Open tasks", self.open),
            SummaryCard::new("Overdue", self.overdue),
            SummaryCard::new("Average progress", format_mean(self.average_progress)),
            SummaryCard::new("Total", self.total),
        ]
    }
}
