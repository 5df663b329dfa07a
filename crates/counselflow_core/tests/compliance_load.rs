use counselflow_core::db::{open_db, open_db_in_memory};
use counselflow_core::model::compliance::Severity;
use counselflow_core::{
    seed_compliance_demo, ComplianceLoadFailure, ComplianceMonitor, ComplianceSource,
    ComplianceView, RepoError, Selection, SqliteComplianceSource,
};
use rusqlite::Connection;

#[test]
fn seeded_store_loads_dashboard() {
    let conn = seeded_store();
    let view = load(&conn);

    let dashboard = view.dashboard().unwrap();
    let names: Vec<&str> = dashboard
        .frameworks
        .iter()
        .map(|framework| framework.name.as_str())
        .collect();
    assert_eq!(names, vec!["CCPA", "GDPR", "PDPA", "POPIA"]);
    assert_eq!(dashboard.overall_score(), Some(71));
    assert_eq!(dashboard.pending_requirements(), 4);
    assert_eq!(dashboard.critical_alerts(), 2);
    assert_eq!(dashboard.unacknowledged_critical(), 1);
    assert_eq!(dashboard.unacknowledged(), 3);
    assert_eq!(view.error_message(), None);
}

#[test]
fn requirements_follow_their_position() {
    let conn = seeded_store();
    let view = load(&conn);
    let dashboard = view.dashboard().unwrap();

    let gdpr = dashboard
        .frameworks
        .iter()
        .find(|framework| framework.name == "GDPR")
        .unwrap();
    let ids: Vec<&str> = gdpr.requirements.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["GDPR-1", "GDPR-2"]);
    assert_eq!(gdpr.outstanding_requirements(), 0);
}

#[test]
fn alerts_arrive_newest_first() {
    let conn = seeded_store();
    let view = load(&conn);
    let dashboard = view.dashboard().unwrap();

    let severities: Vec<Severity> = dashboard.alerts.iter().map(|alert| alert.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Critical,
            Severity::Low,
            Severity::Medium,
            Severity::High
        ]
    );

    let counts = dashboard.severity_counts();
    assert_eq!((counts.urgent, counts.medium, counts.low), (2, 1, 1));
}

#[test]
fn framework_selector_accepts_name_id_or_all() {
    let conn = seeded_store();
    let view = load(&conn);
    let dashboard = view.dashboard().unwrap();

    let by_name = dashboard.select_framework("gdpr").unwrap();
    let shown = dashboard.frameworks_for(&by_name);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].score, 94);

    let by_id = dashboard
        .select_framework(&shown[0].id.to_string())
        .unwrap();
    assert_eq!(by_id, by_name);

    let all = dashboard.select_framework("All").unwrap();
    assert_eq!(all, Selection::All);
    assert!(all.is_all());
    assert!(!by_name.is_all());
    assert_eq!(dashboard.frameworks_for(&all).len(), 4);

    assert!(dashboard.select_framework("HIPAA").is_none());
}

#[test]
fn empty_store_loads_without_overall_score() {
    let conn = open_db_in_memory().unwrap();
    let view = load(&conn);

    let dashboard = view.dashboard().unwrap();
    assert!(dashboard.frameworks.is_empty());
    assert!(dashboard.alerts.is_empty());
    assert_eq!(dashboard.overall_score(), None);
    assert_eq!(dashboard.pending_requirements(), 0);
}

#[test]
fn frameworks_query_failure_reports_frameworks_message() {
    let conn = seeded_store();
    conn.execute_batch(
        "DROP TABLE compliance_requirements;
         DROP TABLE compliance_frameworks;",
    )
    .unwrap();

    let view = load(&conn);

    assert!(view.dashboard().is_none());
    assert_eq!(
        view.error_message(),
        Some("Failed to load compliance frameworks.")
    );
}

#[test]
fn alerts_query_failure_reports_alerts_message() {
    let conn = seeded_store();
    conn.execute_batch("DROP TABLE compliance_alerts;").unwrap();

    let view = load(&conn);

    assert!(view.dashboard().is_none());
    assert_eq!(view.error_message(), Some("Failed to load compliance alerts."));
}

#[test]
fn frameworks_failure_wins_when_both_queries_fail() {
    let conn = seeded_store();
    conn.execute_batch(
        "DROP TABLE compliance_alerts;
         DROP TABLE compliance_requirements;
         DROP TABLE compliance_frameworks;",
    )
    .unwrap();

    match load(&conn) {
        ComplianceView::Failed(ComplianceLoadFailure::Frameworks(_)) => {}
        ComplianceView::Failed(other) => panic!("unexpected failure: {other}"),
        ComplianceView::Loaded(_) => panic!("load should fail"),
    }
}

#[test]
fn invalid_stored_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO compliance_frameworks (
            id, name, status, score, jurisdiction, category, last_assessment, next_review
        ) VALUES ('not-a-uuid', 'SOX', 'compliant', 90, 'United States', 'Financial', '2024-01-01', '2024-07-01');",
        [],
    )
    .unwrap();

    match load(&conn) {
        ComplianceView::Failed(failure) => {
            assert!(matches!(failure.cause(), RepoError::InvalidData(_)));
            assert_eq!(failure.message(), "Failed to load compliance frameworks.");
        }
        ComplianceView::Loaded(_) => panic!("load should fail"),
    }
}

#[test]
fn uppercase_framework_id_keeps_its_requirements() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO compliance_frameworks (
            id, name, status, score, jurisdiction, category, last_assessment, next_review
        ) VALUES ('A1B2C3D4-0000-4000-8000-000000000001', 'SOX', 'compliant', 90,
                  'United States', 'Financial', '2024-01-01', '2024-07-01');
        INSERT INTO compliance_requirements (id, framework_id, title, status, priority)
        VALUES ('SOX-1', 'A1B2C3D4-0000-4000-8000-000000000001', 'Internal controls', 'met', 'high');",
    )
    .unwrap();

    let frameworks = SqliteComplianceSource::new(&conn).fetch_frameworks().unwrap();

    assert_eq!(frameworks.len(), 1);
    let ids: Vec<&str> = frameworks[0]
        .requirements
        .iter()
        .map(|requirement| requirement.id.as_str())
        .collect();
    assert_eq!(ids, vec!["SOX-1"]);
}

#[test]
fn requirement_without_framework_is_rejected() {
    let conn = seeded_store();
    conn.execute_batch(
        "PRAGMA foreign_keys = OFF;
        INSERT INTO compliance_requirements (id, framework_id, title, status, priority)
        VALUES ('GHOST-1', '00000000-0000-4000-8000-0000000000ff', 'Orphan', 'pending', 'low');",
    )
    .unwrap();

    match SqliteComplianceSource::new(&conn).fetch_frameworks() {
        Err(RepoError::InvalidData(message)) => assert!(message.contains("compliance_requirements")),
        other => panic!("unexpected result: {other:?}"),
    }

    match load(&conn) {
        ComplianceView::Failed(failure) => {
            assert_eq!(failure.message(), "Failed to load compliance frameworks.");
        }
        ComplianceView::Loaded(_) => panic!("load should fail"),
    }
}

#[test]
fn requirement_with_malformed_framework_id_is_rejected() {
    let conn = seeded_store();
    conn.execute_batch(
        "PRAGMA foreign_keys = OFF;
        INSERT INTO compliance_requirements (id, framework_id, title, status, priority)
        VALUES ('BAD-1', 'gdpr', 'Loose row', 'pending', 'low');",
    )
    .unwrap();

    let err = SqliteComplianceSource::new(&conn).fetch_frameworks().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("framework_id")));
}

#[test]
fn file_store_keeps_rows_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("compliance.sqlite3");

    {
        let mut conn = open_db(&db_path).unwrap();
        seed_compliance_demo(&mut conn).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let view = load(&conn);
    let dashboard = view.dashboard().unwrap();
    assert_eq!(dashboard.frameworks.len(), 4);
    assert_eq!(dashboard.alerts.len(), 4);
}

fn seeded_store() -> Connection {
    let mut conn = open_db_in_memory().unwrap();
    seed_compliance_demo(&mut conn).unwrap();
    conn
}

fn load(conn: &Connection) -> ComplianceView {
    ComplianceMonitor::new(SqliteComplianceSource::new(conn)).load()
}
