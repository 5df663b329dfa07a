//! Badge tone for categorical values.
//!
//! Every status, priority and severity enum maps to a [`Tone`] through an
//! exhaustive `match`, so adding a variant without choosing its tone does not
//! compile. Front ends pick colours per tone.

use crate::model::common::{Priority, RiskLevel};
use crate::model::compliance::{ComplianceStatus, FrameworkStatus, RequirementStatus, Severity};
use crate::model::contract::ContractStatus;
use crate::model::dispute::DisputeStatus;
use crate::model::entity::EntityStatus;
use crate::model::matter::MatterStatus;
use crate::model::policy::PolicyStatus;
use crate::model::risk::RiskStatus;
use crate::model::task::TaskStatus;
use crate::model::vendor::VendorRelationship;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    /// Secondary informational accent (review stages, specialty tiers).
    Accent,
    Warning,
    Danger,
    Critical,
    Neutral,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Accent => "accent",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Critical => "critical",
            Self::Neutral => "neutral",
        }
    }
}

/// A value rendered as a toned badge.
pub trait Toned {
    fn tone(&self) -> Tone;
}

impl Toned for RiskLevel {
    fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Medium => Tone::Warning,
            Self::High => Tone::Danger,
            Self::Critical => Tone::Critical,
        }
    }
}

impl Toned for Priority {
    fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Medium => Tone::Warning,
            Self::High => Tone::Danger,
            Self::Critical => Tone::Critical,
        }
    }
}

impl Toned for ContractStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Pending => Tone::Warning,
            Self::Expired => Tone::Danger,
            Self::Terminated => Tone::Neutral,
        }
    }
}

impl Toned for MatterStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::OnHold => Tone::Warning,
            Self::Closed => Tone::Neutral,
            Self::Pending => Tone::Info,
        }
    }
}

impl Toned for EntityStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Inactive => Tone::Warning,
            Self::Dissolved => Tone::Danger,
        }
    }
}

impl Toned for TaskStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::NotStarted => Tone::Neutral,
            Self::InProgress => Tone::Info,
            Self::Review => Tone::Accent,
            Self::Completed => Tone::Success,
        }
    }
}

impl Toned for RiskStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Open => Tone::Danger,
            Self::Mitigated => Tone::Warning,
            Self::Closed => Tone::Success,
        }
    }
}

impl Toned for DisputeStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Investigation => Tone::Info,
            Self::Mediation => Tone::Warning,
            Self::Arbitration => Tone::Accent,
            Self::Litigation => Tone::Danger,
            Self::Settled => Tone::Success,
            Self::Closed => Tone::Neutral,
        }
    }
}

impl Toned for PolicyStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Draft => Tone::Neutral,
            Self::Review => Tone::Warning,
            Self::Approved => Tone::Info,
            Self::Published => Tone::Success,
            Self::Archived => Tone::Danger,
        }
    }
}

impl Toned for VendorRelationship {
    fn tone(&self) -> Tone {
        match self {
            Self::Preferred => Tone::Success,
            Self::Panel => Tone::Info,
            Self::Specialty => Tone::Accent,
            Self::Occasional => Tone::Neutral,
        }
    }
}

impl Toned for ComplianceStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Compliant => Tone::Success,
            Self::NonCompliant => Tone::Danger,
            Self::PendingReview => Tone::Warning,
            Self::InProgress => Tone::Info,
            Self::Overdue => Tone::Critical,
        }
    }
}

impl Toned for FrameworkStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Compliant => Tone::Success,
            Self::Partial => Tone::Warning,
            Self::NonCompliant => Tone::Danger,
            Self::Pending => Tone::Info,
        }
    }
}

impl Toned for RequirementStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Met => Tone::Success,
            Self::Partial => Tone::Warning,
            Self::NotMet => Tone::Danger,
            Self::Pending => Tone::Neutral,
        }
    }
}

impl Toned for Severity {
    fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Info,
            Self::Medium => Tone::Warning,
            Self::High => Tone::Danger,
            Self::Critical => Tone::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tone, Toned};
    use crate::model::common::RiskLevel;
    use crate::model::task::TaskStatus;

    #[test]
    fn risk_levels_escalate() {
        let tones: Vec<Tone> = RiskLevel::ALL.iter().map(Toned::tone).collect();
        assert_eq!(
            tones,
            vec![Tone::Success, Tone::Warning, Tone::Danger, Tone::Critical]
        );
    }

    #[test]
    fn completed_tasks_read_as_success() {
        assert_eq!(TaskStatus::Completed.tone(), Tone::Success);
        assert_eq!(TaskStatus::NotStarted.tone().as_str(), "neutral");
    }
}
