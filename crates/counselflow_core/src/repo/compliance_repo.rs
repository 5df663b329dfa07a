//! Compliance data source contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the two read-only queries the compliance monitor issues:
//!   `compliance_frameworks` (with requirements) and `compliance_alerts`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Read paths reject invalid stored state instead of masking it.
//! - Nothing in this module writes to the store.

use crate::db::DbError;
use crate::model::compliance::{
    AlertKind, ComplianceAlert, ComplianceFramework, ComplianceRequirement, FrameworkStatus,
    RequirementStatus, Severity,
};
use rusqlite::{Connection, Row};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const FRAMEWORK_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    status,
    score,
    jurisdiction,
    category,
    last_assessment,
    next_review
FROM compliance_frameworks
ORDER BY name ASC, id ASC;";

const REQUIREMENT_SELECT_SQL: &str = "SELECT
    id,
    framework_id,
    title,
    status,
    priority,
    due_date,
    assignee
FROM compliance_requirements
ORDER BY framework_id ASC, position ASC, id ASC;";

const ALERT_SELECT_SQL: &str = "SELECT
    id,
    type,
    title,
    description,
    severity,
    framework,
    due_date,
    created_at,
    acknowledged
FROM compliance_alerts
ORDER BY created_at DESC, id ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for compliance store queries and row decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored compliance data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read-only source of compliance frameworks and alerts.
pub trait ComplianceSource {
    fn fetch_frameworks(&self) -> RepoResult<Vec<ComplianceFramework>>;
    fn fetch_alerts(&self) -> RepoResult<Vec<ComplianceAlert>>;
}

/// SQLite-backed compliance source.
pub struct SqliteComplianceSource<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteComplianceSource<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn fetch_requirements(&self) -> RepoResult<HashMap<Uuid, Vec<ComplianceRequirement>>> {
        let mut stmt = self.conn.prepare(REQUIREMENT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut grouped: HashMap<Uuid, Vec<ComplianceRequirement>> = HashMap::new();

        while let Some(row) = rows.next()? {
            let framework_id = parse_uuid(row, "compliance_requirements", "framework_id")?;
            grouped
                .entry(framework_id)
                .or_default()
                .push(parse_requirement_row(row)?);
        }

        Ok(grouped)
    }
}

impl ComplianceSource for SqliteComplianceSource<'_> {
    fn fetch_frameworks(&self) -> RepoResult<Vec<ComplianceFramework>> {
        let mut requirements = self.fetch_requirements()?;
        let mut stmt = self.conn.prepare(FRAMEWORK_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut frameworks = Vec::new();

        while let Some(row) = rows.next()? {
            let mut framework = parse_framework_row(row)?;
            framework.requirements = requirements.remove(&framework.id).unwrap_or_default();
            frameworks.push(framework);
        }

        if let Some((framework_id, orphaned)) = requirements.iter().next() {
            return Err(RepoError::InvalidData(format!(
                "{} compliance_requirements row(s) reference missing framework `{framework_id}`",
                orphaned.len()
            )));
        }

        Ok(frameworks)
    }

    fn fetch_alerts(&self) -> RepoResult<Vec<ComplianceAlert>> {
        let mut stmt = self.conn.prepare(ALERT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut alerts = Vec::new();

        while let Some(row) = rows.next()? {
            alerts.push(parse_alert_row(row)?);
        }

        Ok(alerts)
    }
}

fn parse_framework_row(row: &Row<'_>) -> RepoResult<ComplianceFramework> {
    let id = parse_uuid(row, "compliance_frameworks", "id")?;
    let status_text: String = row.get("status")?;
    let status = FrameworkStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid framework status `{status_text}` in compliance_frameworks.status"
        ))
    })?;

    let score: i64 = row.get("score")?;
    let score = u8::try_from(score)
        .ok()
        .filter(|value| *value <= 100)
        .ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid score `{score}` in compliance_frameworks.score"
            ))
        })?;

    Ok(ComplianceFramework {
        id,
        name: row.get("name")?,
        description: row.get("description")?,
        status,
        score,
        jurisdiction: row.get("jurisdiction")?,
        category: row.get("category")?,
        last_assessment: row.get("last_assessment")?,
        next_review: row.get("next_review")?,
        requirements: Vec::new(),
    })
}

fn parse_requirement_row(row: &Row<'_>) -> RepoResult<ComplianceRequirement> {
    let status_text: String = row.get("status")?;
    let status = RequirementStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid requirement status `{status_text}` in compliance_requirements.status"
        ))
    })?;

    let priority_text: String = row.get("priority")?;
    let priority = Severity::parse(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in compliance_requirements.priority"
        ))
    })?;

    Ok(ComplianceRequirement {
        id: row.get("id")?,
        title: row.get("title")?,
        status,
        priority,
        due_date: row.get("due_date")?,
        assignee: row.get("assignee")?,
    })
}

fn parse_alert_row(row: &Row<'_>) -> RepoResult<ComplianceAlert> {
    let id = parse_uuid(row, "compliance_alerts", "id")?;

    let kind_text: String = row.get("type")?;
    let kind = AlertKind::parse(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid alert type `{kind_text}` in compliance_alerts.type"
        ))
    })?;

    let severity_text: String = row.get("severity")?;
    let severity = Severity::parse(&severity_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid severity `{severity_text}` in compliance_alerts.severity"
        ))
    })?;

    let acknowledged = match row.get::<_, i64>("acknowledged")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid acknowledged value `{other}` in compliance_alerts.acknowledged"
            )));
        }
    };

    Ok(ComplianceAlert {
        id,
        kind,
        title: row.get("title")?,
        description: row.get("description")?,
        severity,
        framework: row.get("framework")?,
        due_date: row.get("due_date")?,
        created_at: row.get("created_at")?,
        acknowledged,
    })
}

fn parse_uuid(row: &Row<'_>, table: &str, column: &str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{text}` in {table}.{column}"))
    })
}
