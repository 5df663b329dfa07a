//! Core domain logic for the CounselFlow legal-operations dashboard.
//! Front ends render what this crate computes and hold no business rules.

#[macro_use]
pub mod model;

pub mod aggregate;
pub mod config;
pub mod context;
pub mod db;
pub mod fixtures;
pub mod logging;
pub mod repo;
pub mod routes;
pub mod service;
pub mod style;
pub mod view;

pub use config::{AppConfig, ConfigError, Language, Theme};
pub use context::AppContext;
pub use fixtures::{load_demo_data, seed_compliance_demo, DemoData, FixtureError};
pub use logging::{
    default_log_level, init_logging, logging_status, LogTarget, STDERR_DEFAULT_LEVEL,
};
pub use repo::compliance_repo::{ComplianceSource, RepoError, RepoResult, SqliteComplianceSource};
pub use routes::{resolve_route, Page, RouteResolution};
pub use service::compliance_service::{
    ComplianceDashboard, ComplianceLoadFailure, ComplianceMonitor, ComplianceView,
};
pub use style::{Tone, Toned};
pub use view::{
    apply_list_view, facet_values, parse_query, Domain, ListQuery, Listable, QueryFor, Selection,
    SortDirection, ViewError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
