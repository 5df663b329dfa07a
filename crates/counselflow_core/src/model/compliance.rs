//! Compliance records: the local compliance register plus the framework and
//! alert rows read from the compliance store.
//!
//! # Invariants
//! - `ComplianceFramework::score` and `ComplianceItem::compliance_score` are 0-100.
//! - Framework/alert identity is the store's UUID, never reassigned.

use super::common::{Priority, RiskLevel};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labeled_enum! {
    pub enum ComplianceCategory {
        DataProtection => "Data Protection",
        Financial => "Financial",
        Environmental => "Environmental",
        HealthAndSafety => "Health & Safety",
        Employment => "Employment",
        Securities => "Securities",
        AntiCorruption => "Anti-Corruption",
        Trade => "Trade",
    }
}

labeled_enum! {
    pub enum ComplianceStatus {
        Compliant => "Compliant",
        NonCompliant => "Non-Compliant",
        PendingReview => "Pending Review",
        InProgress => "In Progress",
        Overdue => "Overdue",
    }
}

/// One obligation tracked in the regulatory compliance register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceItem {
    pub id: String,
    pub title: String,
    pub category: ComplianceCategory,
    pub status: ComplianceStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    pub assignee: String,
    pub reviewer: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub regulatory_body: String,
    pub next_audit_date: NaiveDate,
    pub compliance_score: u8,
}

labeled_enum! {
    pub enum UpdateStatus {
        New => "New",
        UnderReview => "Under Review",
        AssessmentComplete => "Assessment Complete",
        ImplementationRequired => "Implementation Required",
        Implemented => "Implemented",
    }
}

/// Published regulation change the compliance team must assess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub effective_date: NaiveDate,
    pub published_date: NaiveDate,
    pub impact: RiskLevel,
    pub status: UpdateStatus,
    pub category: ComplianceCategory,
    pub regulatory_body: String,
    pub affected_areas: Vec<String>,
    pub estimated_cost: u64,
    pub implementation_deadline: NaiveDate,
    pub assigned_to: String,
    /// Ids of the `ComplianceItem`s this update touches.
    pub related_compliance: Vec<String>,
}

labeled_enum! {
    pub enum AuditKind {
        Internal => "Internal",
        External => "External",
        Regulatory => "Regulatory",
    }
}

labeled_enum! {
    pub enum AuditStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Complete => "Complete",
        FindingsPending => "Findings Pending",
    }
}

labeled_enum! {
    /// Declared from worst to best.
    pub enum AuditRating {
        Inadequate => "Inadequate",
        NeedsImprovement => "Needs Improvement",
        Satisfactory => "Satisfactory",
        Good => "Good",
        Excellent => "Excellent",
    }
}

labeled_enum! {
    pub enum FindingStatus {
        Open => "Open",
        InProgress => "In Progress",
        Resolved => "Resolved",
        AcceptedRisk => "Accepted Risk",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    pub id: String,
    pub severity: RiskLevel,
    pub category: String,
    pub description: String,
    pub recommendation: String,
    pub status: FindingStatus,
    pub due_date: NaiveDate,
    pub assignee: String,
}

/// Internal, external or regulator-led compliance audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAudit {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AuditKind,
    pub status: AuditStatus,
    pub auditor: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub scope: Vec<String>,
    #[serde(default)]
    pub findings: Vec<AuditFinding>,
    pub overall_rating: AuditRating,
    pub compliance_areas: Vec<String>,
    pub cost: u64,
}

impl ComplianceAudit {
    /// Findings not yet resolved or accepted.
    pub fn open_findings(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| {
                matches!(finding.status, FindingStatus::Open | FindingStatus::InProgress)
            })
            .count()
    }
}

labeled_enum! {
    /// Storage labels are lowercase, as written by the compliance store.
    pub enum FrameworkStatus {
        Compliant => "compliant",
        Partial => "partial",
        NonCompliant => "non-compliant",
        Pending => "pending",
    }
}

labeled_enum! {
    pub enum RequirementStatus {
        Met => "met",
        Partial => "partial",
        NotMet => "not-met",
        Pending => "pending",
    }
}

labeled_enum! {
    /// Severity/priority scale used by the compliance store.
    pub enum Severity {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

labeled_enum! {
    pub enum AlertKind {
        Deadline => "deadline",
        RegulatoryChange => "regulatory_change",
        NonCompliance => "non_compliance",
        ReviewRequired => "review_required",
    }
}

impl Severity {
    /// `High` and `Critical` alerts require immediate attention.
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl RequirementStatus {
    /// Pending and not-met requirements are still outstanding.
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Pending | Self::NotMet)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRequirement {
    pub id: String,
    pub title: String,
    pub status: RequirementStatus,
    pub priority: Severity,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<String>,
}

/// Regulatory framework with its assessed score and requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFramework {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: FrameworkStatus,
    pub score: u8,
    pub jurisdiction: String,
    pub category: String,
    pub last_assessment: NaiveDate,
    pub next_review: NaiveDate,
    pub requirements: Vec<ComplianceRequirement>,
}

impl ComplianceFramework {
    /// Number of requirements still pending or not met.
    pub fn outstanding_requirements(&self) -> usize {
        self.requirements
            .iter()
            .filter(|requirement| requirement.status.is_outstanding())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceAlert {
    pub id: Uuid,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Name of the framework the alert concerns.
    pub framework: String,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub acknowledged: bool,
}
