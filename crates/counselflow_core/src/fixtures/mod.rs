//! Embedded demo data set.
//!
//! # Responsibility
//! - Parse the static demo records compiled into the binary.
//! - Seed a compliance store with demo frameworks and alerts.
//!
//! # Invariants
//! - Parsing never panics; malformed documents surface as `FixtureError`.
//! - Record order matches document order.

use crate::db::DbResult;
use crate::model::compliance::{ComplianceAudit, ComplianceItem, RegulatoryUpdate};
use crate::model::contract::Contract;
use crate::model::dispute::Dispute;
use crate::model::entity::Entity;
use crate::model::matter::Matter;
use crate::model::policy::Policy;
use crate::model::risk::Risk;
use crate::model::task::Task;
use crate::model::vendor::Vendor;
use log::{error, info};
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTRACTS_JSON: &str = include_str!("data/contracts.json");
const MATTERS_JSON: &str = include_str!("data/matters.json");
const ENTITIES_JSON: &str = include_str!("data/entities.json");
const TASKS_JSON: &str = include_str!("data/tasks.json");
const RISKS_JSON: &str = include_str!("data/risks.json");
const DISPUTES_JSON: &str = include_str!("data/disputes.json");
const POLICIES_JSON: &str = include_str!("data/policies.json");
const VENDORS_JSON: &str = include_str!("data/vendors.json");
const COMPLIANCE_JSON: &str = include_str!("data/compliance.json");
const REGULATORY_UPDATES_JSON: &str = include_str!("data/regulatory_updates.json");
const COMPLIANCE_AUDITS_JSON: &str = include_str!("data/compliance_audits.json");
const COMPLIANCE_SEED_SQL: &str = include_str!("data/compliance_seed.sql");

pub type FixtureResult<T> = Result<T, FixtureError>;

#[derive(Debug)]
pub enum FixtureError {
    /// A fixture document did not match its record shape.
    Parse {
        document: &'static str,
        source: serde_json::Error,
    },
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { document, source } => {
                write!(f, "failed to parse demo fixture `{document}`: {source}")
            }
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Every demo collection shown by the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoData {
    pub contracts: Vec<Contract>,
    pub matters: Vec<Matter>,
    pub entities: Vec<Entity>,
    pub tasks: Vec<Task>,
    pub risks: Vec<Risk>,
    pub disputes: Vec<Dispute>,
    pub policies: Vec<Policy>,
    pub vendors: Vec<Vendor>,
    pub compliance: Vec<ComplianceItem>,
    /// Shown beside the compliance register; not a list page of its own.
    pub regulatory_updates: Vec<RegulatoryUpdate>,
    pub compliance_audits: Vec<ComplianceAudit>,
}

impl DemoData {
    /// Records across the nine list pages.
    pub fn record_count(&self) -> usize {
        self.contracts.len()
            + self.matters.len()
            + self.entities.len()
            + self.tasks.len()
            + self.risks.len()
            + self.disputes.len()
            + self.policies.len()
            + self.vendors.len()
            + self.compliance.len()
    }
}

/// Parses the embedded demo data set.
///
/// # Errors
/// - Returns `FixtureError::Parse` naming the first document that fails.
pub fn load_demo_data() -> FixtureResult<DemoData> {
    let result = parse_all();
    match &result {
        Ok(data) => info!(
            "event=fixtures_load module=fixtures status=ok records={}",
            data.record_count()
        ),
        Err(err) => error!(
            "event=fixtures_load module=fixtures status=error error_code=fixture_parse_failed error={err}"
        ),
    }
    result
}

fn parse_all() -> FixtureResult<DemoData> {
    Ok(DemoData {
        contracts: parse_document("contracts", CONTRACTS_JSON)?,
        matters: parse_document("matters", MATTERS_JSON)?,
        entities: parse_document("entities", ENTITIES_JSON)?,
        tasks: parse_document("tasks", TASKS_JSON)?,
        risks: parse_document("risks", RISKS_JSON)?,
        disputes: parse_document("disputes", DISPUTES_JSON)?,
        policies: parse_document("policies", POLICIES_JSON)?,
        vendors: parse_document("vendors", VENDORS_JSON)?,
        compliance: parse_document("compliance", COMPLIANCE_JSON)?,
        regulatory_updates: parse_document("regulatory_updates", REGULATORY_UPDATES_JSON)?,
        compliance_audits: parse_document("compliance_audits", COMPLIANCE_AUDITS_JSON)?,
    })
}

pub(crate) fn parse_document<T: DeserializeOwned>(
    document: &'static str,
    text: &str,
) -> FixtureResult<Vec<T>> {
    serde_json::from_str(text).map_err(|source| FixtureError::Parse { document, source })
}

/// Inserts the demo frameworks, requirements and alerts into `conn`.
///
/// The connection must already be migrated (see [`crate::db::open_db`]).
/// Runs in one transaction; a partial seed is rolled back.
pub fn seed_compliance_demo(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(COMPLIANCE_SEED_SQL)?;
    tx.commit()?;
    info!("event=compliance_seed module=fixtures status=ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_document, FixtureError};
    use crate::model::contract::Contract;

    #[test]
    fn malformed_document_reports_its_name() {
        let err = parse_document::<Contract>("contracts", "[{\"id\": 1}]")
            .expect_err("bad shape should fail");
        let FixtureError::Parse { document, .. } = &err;
        assert_eq!(*document, "contracts");
        assert!(err.to_string().contains("contracts"));
    }

    #[test]
    fn empty_document_parses_to_empty_list() {
        let contracts = parse_document::<Contract>("contracts", "[]").unwrap();
        assert!(contracts.is_empty());
    }
}
