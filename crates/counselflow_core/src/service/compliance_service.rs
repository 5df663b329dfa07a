//! Compliance monitor use-case service.
//!
//! # Responsibility
//! - Issue the frameworks and alerts queries once and shape the outcome into a
//!   view the front end can render without further branching.
//! - Derive the monitor's headline figures from loaded rows.
//!
//! # Invariants
//! - Both queries are always issued, even when the first one fails.
//! - A frameworks failure takes precedence over an alerts failure.
//! - A failed view carries no partial data.
//! - An empty but successful load is `Loaded`, never `Failed`.

use crate::model::compliance::{ComplianceAlert, ComplianceFramework, Severity};
use crate::repo::compliance_repo::{ComplianceSource, RepoError};
use crate::view::Selection;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

/// Message shown in place of the monitor when frameworks cannot be loaded.
pub const FRAMEWORKS_LOAD_FAILED: &str = "Failed to load compliance frameworks.";
/// Message shown in place of the monitor when alerts cannot be loaded.
pub const ALERTS_LOAD_FAILED: &str = "Failed to load compliance alerts.";

/// Which of the two queries made the load fail.
#[derive(Debug)]
pub enum ComplianceLoadFailure {
    Frameworks(RepoError),
    Alerts(RepoError),
}

impl ComplianceLoadFailure {
    /// User-facing message; deliberately does not expose the cause.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Frameworks(_) => FRAMEWORKS_LOAD_FAILED,
            Self::Alerts(_) => ALERTS_LOAD_FAILED,
        }
    }

    pub fn cause(&self) -> &RepoError {
        match self {
            Self::Frameworks(err) | Self::Alerts(err) => err,
        }
    }
}

impl Display for ComplianceLoadFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ComplianceLoadFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause())
    }
}

/// Outcome of one compliance monitor load.
#[derive(Debug)]
pub enum ComplianceView {
    Loaded(ComplianceDashboard),
    Failed(ComplianceLoadFailure),
}

impl ComplianceView {
    /// Dashboard data, or `None` when the load failed.
    pub fn dashboard(&self) -> Option<&ComplianceDashboard> {
        match self {
            Self::Loaded(dashboard) => Some(dashboard),
            Self::Failed(_) => None,
        }
    }

    /// Error message rendered in place of the whole view.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(failure) => Some(failure.message()),
        }
    }
}

/// Alert counts per severity bucket shown on the monitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    /// High and critical together, as the monitor groups them.
    pub urgent: usize,
    pub medium: usize,
    pub low: usize,
}

/// Frameworks and alerts loaded from the compliance store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceDashboard {
    pub frameworks: Vec<ComplianceFramework>,
    pub alerts: Vec<ComplianceAlert>,
}

impl ComplianceDashboard {
    /// Mean framework score rounded to the nearest integer.
    ///
    /// Returns `None` when no frameworks are loaded.
    pub fn overall_score(&self) -> Option<u8> {
        if self.frameworks.is_empty() {
            return None;
        }
        let total: u32 = self
            .frameworks
            .iter()
            .map(|framework| u32::from(framework.score))
            .sum();
        let mean = f64::from(total) / self.frameworks.len() as f64;
        Some(mean.round() as u8)
    }

    /// Alerts with high or critical severity.
    pub fn critical_alerts(&self) -> usize {
        self.alerts
            .iter()
            .filter(|alert| alert.severity.is_urgent())
            .count()
    }

    /// High or critical alerts nobody has acknowledged yet.
    pub fn unacknowledged_critical(&self) -> usize {
        self.alerts
            .iter()
            .filter(|alert| !alert.acknowledged && alert.severity.is_urgent())
            .count()
    }

    /// Alerts of any severity not yet acknowledged.
    pub fn unacknowledged(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.acknowledged).count()
    }

    /// Requirements across all frameworks that are pending or not met.
    pub fn pending_requirements(&self) -> usize {
        self.frameworks
            .iter()
            .map(ComplianceFramework::outstanding_requirements)
            .sum()
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        self.alerts
            .iter()
            .fold(SeverityCounts::default(), |mut counts, alert| {
                match alert.severity {
                    Severity::Critical | Severity::High => counts.urgent += 1,
                    Severity::Medium => counts.medium += 1,
                    Severity::Low => counts.low += 1,
                }
                counts
            })
    }

    /// Resolves selector text: `all`, a framework id, or a framework name.
    pub fn select_framework(&self, value: &str) -> Option<Selection<Uuid>> {
        Selection::parse_with(value, |text| {
            let text = text.trim();
            self.frameworks
                .iter()
                .find(|framework| {
                    framework.id.to_string().eq_ignore_ascii_case(text)
                        || framework.name.eq_ignore_ascii_case(text)
                })
                .map(|framework| framework.id)
        })
    }

    /// Frameworks shown by the framework selector.
    pub fn frameworks_for(&self, selection: &Selection<Uuid>) -> Vec<&ComplianceFramework> {
        self.frameworks
            .iter()
            .filter(|framework| selection.admits(&framework.id))
            .collect()
    }
}

/// Compliance monitor over any [`ComplianceSource`].
pub struct ComplianceMonitor<S: ComplianceSource> {
    source: S,
}

impl<S: ComplianceSource> ComplianceMonitor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads frameworks and alerts once.
    ///
    /// # Contract
    /// - Both queries are issued regardless of the first result.
    /// - No retry is attempted.
    pub fn load(&self) -> ComplianceView {
        let started_at = Instant::now();
        info!("event=compliance_load module=service status=start");

        let frameworks = self.source.fetch_frameworks();
        let alerts = self.source.fetch_alerts();

        let view = match (frameworks, alerts) {
            (Err(err), _) => ComplianceView::Failed(ComplianceLoadFailure::Frameworks(err)),
            (Ok(_), Err(err)) => ComplianceView::Failed(ComplianceLoadFailure::Alerts(err)),
            (Ok(frameworks), Ok(alerts)) => {
                ComplianceView::Loaded(ComplianceDashboard { frameworks, alerts })
            }
        };

        match &view {
            ComplianceView::Loaded(dashboard) => info!(
                "event=compliance_load module=service status=ok duration_ms={} frameworks={} alerts={}",
                started_at.elapsed().as_millis(),
                dashboard.frameworks.len(),
                dashboard.alerts.len()
            ),
            ComplianceView::Failed(failure) => error!(
                "event=compliance_load module=service status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                failure_code(failure),
                failure.cause()
            ),
        }

        view
    }
}

fn failure_code(failure: &ComplianceLoadFailure) -> &'static str {
    match failure {
        ComplianceLoadFailure::Frameworks(_) => "frameworks_query_failed",
        ComplianceLoadFailure::Alerts(_) => "alerts_query_failed",
    }
}

#[cfg(test)]
mod tests {
    use super::{ComplianceDashboard, ComplianceMonitor, ComplianceView};
    use crate::model::compliance::{
        ComplianceAlert, ComplianceFramework, ComplianceRequirement, FrameworkStatus,
        RequirementStatus, Severity,
    };
    use crate::repo::compliance_repo::{ComplianceSource, RepoError, RepoResult};
    use crate::view::Selection;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use uuid::Uuid;

    struct StubSource {
        frameworks_fail: bool,
        alerts_fail: bool,
        alerts_calls: Cell<u32>,
    }

    impl StubSource {
        fn new(frameworks_fail: bool, alerts_fail: bool) -> Self {
            Self {
                frameworks_fail,
                alerts_fail,
                alerts_calls: Cell::new(0),
            }
        }
    }

    impl ComplianceSource for StubSource {
        fn fetch_frameworks(&self) -> RepoResult<Vec<ComplianceFramework>> {
            if self.frameworks_fail {
                return Err(RepoError::InvalidData("frameworks offline".to_string()));
            }
            Ok(vec![framework("GDPR", 90), framework("CCPA", 75)])
        }

        fn fetch_alerts(&self) -> RepoResult<Vec<ComplianceAlert>> {
            self.alerts_calls.set(self.alerts_calls.get() + 1);
            if self.alerts_fail {
                return Err(RepoError::InvalidData("alerts offline".to_string()));
            }
            Ok(Vec::new())
        }
    }

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn framework(name: &str, score: u8) -> ComplianceFramework {
        ComplianceFramework {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            status: FrameworkStatus::Partial,
            score,
            jurisdiction: "Global".to_string(),
            category: "Data Protection".to_string(),
            last_assessment: day("2024-01-01"),
            next_review: day("2024-07-01"),
            requirements: vec![
                requirement(RequirementStatus::Met),
                requirement(RequirementStatus::NotMet),
                requirement(RequirementStatus::Pending),
            ],
        }
    }

    fn requirement(status: RequirementStatus) -> ComplianceRequirement {
        ComplianceRequirement {
            id: Uuid::new_v4().to_string(),
            title: "requirement".to_string(),
            status,
            priority: Severity::Medium,
            due_date: None,
            assignee: None,
        }
    }

    #[test]
    fn frameworks_failure_wins_and_alerts_are_still_queried() {
        let source = StubSource::new(true, true);
        let monitor = ComplianceMonitor::new(source);
        let view = monitor.load();

        assert_eq!(
            view.error_message(),
            Some("Failed to load compliance frameworks.")
        );
        assert!(view.dashboard().is_none());
        assert_eq!(monitor.source.alerts_calls.get(), 1);
    }

    #[test]
    fn alerts_failure_reports_alerts_message() {
        let view = ComplianceMonitor::new(StubSource::new(false, true)).load();
        assert_eq!(
            view.error_message(),
            Some("Failed to load compliance alerts.")
        );
    }

    #[test]
    fn successful_load_derives_headline_figures() {
        let view = ComplianceMonitor::new(StubSource::new(false, false)).load();
        let ComplianceView::Loaded(dashboard) = view else {
            panic!("expected loaded view");
        };
        assert_eq!(dashboard.overall_score(), Some(83));
        assert_eq!(dashboard.pending_requirements(), 4);
        assert_eq!(dashboard.critical_alerts(), 0);
    }

    #[test]
    fn empty_dashboard_has_no_overall_score() {
        let dashboard = ComplianceDashboard::default();
        assert_eq!(dashboard.overall_score(), None);
        assert_eq!(dashboard.pending_requirements(), 0);
    }

    #[test]
    fn framework_selection_narrows_grid() {
        let dashboard = ComplianceDashboard {
            frameworks: vec![framework("GDPR", 90), framework("CCPA", 75)],
            alerts: Vec::new(),
        };
        let target = dashboard.frameworks[1].id;

        assert_eq!(dashboard.frameworks_for(&Selection::All).len(), 2);
        let selected = dashboard.frameworks_for(&Selection::Only(target));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "CCPA");
    }

    #[test]
    fn selector_accepts_all_id_or_name() {
        let dashboard = ComplianceDashboard {
            frameworks: vec![framework("GDPR", 90)],
            alerts: Vec::new(),
        };
        let id = dashboard.frameworks[0].id;

        assert_eq!(dashboard.select_framework("All"), Some(Selection::All));
        assert_eq!(dashboard.select_framework("gdpr"), Some(Selection::Only(id)));
        assert_eq!(
            dashboard.select_framework(&id.to_string()),
            Some(Selection::Only(id))
        );
        assert_eq!(dashboard.select_framework("HIPAA"), None);
    }
}
