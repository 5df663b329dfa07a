use counselflow_core::db::migrations::latest_version;
use counselflow_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "compliance_frameworks");
    assert_table_exists(&conn, "compliance_requirements");
    assert_table_exists(&conn, "compliance_alerts");
}

#[test]
fn reopening_compliance_store_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compliance.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "compliance_alerts");
}

#[test]
fn store_at_first_version_is_upgraded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("v1.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE compliance_frameworks (id TEXT PRIMARY KEY NOT NULL);
         PRAGMA user_version = 1;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "compliance_alerts");
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failing_migration_is_reported_and_rolled_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE compliance_alerts (id TEXT PRIMARY KEY NOT NULL);
         PRAGMA user_version = 1;",
    )
    .unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::Migration { version, .. } => assert_eq!(version, 2),
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 1);
}

#[test]
fn alert_severity_is_constrained() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO compliance_alerts (id, type, title, severity, framework, created_at)
         VALUES ('a', 'deadline', 'Filing due', 'urgent', 'GDPR', '2024-07-01 09:00:00');",
        [],
    );

    assert!(result.is_err());
}

#[test]
fn deleting_framework_removes_its_requirements() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO compliance_frameworks (
            id, name, status, score, jurisdiction, category, last_assessment, next_review
        ) VALUES ('f1', 'GDPR', 'compliant', 94, 'European Union', 'Data Protection', '2024-05-15', '2024-11-15');
        INSERT INTO compliance_requirements (id, framework_id, title, status, priority)
        VALUES ('GDPR-1', 'f1', 'Records of processing', 'met', 'high');
        DELETE FROM compliance_frameworks WHERE id = 'f1';",
    )
    .unwrap();

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM compliance_requirements;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(remaining, 0);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
