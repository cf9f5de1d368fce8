use std::path::Path;

use rusqlite::Connection;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    role TEXT NOT NULL,
    full_name TEXT NOT NULL,
    position TEXT NOT NULL,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT DEFAULT (datetime('now')),
    last_login TEXT
);

CREATE TABLE IF NOT EXISTS dfur_projects (
    id INTEGER PRIMARY KEY,
    transaction_id TEXT NOT NULL UNIQUE,
    transaction_date TEXT NOT NULL,
    name_of_collection TEXT NOT NULL,
    project TEXT NOT NULL,
    location TEXT NOT NULL,
    total_cost_approved NUMERIC NOT NULL,
    total_cost_incurred NUMERIC NOT NULL DEFAULT 0,
    date_started TEXT NOT NULL,
    target_completion_date TEXT NOT NULL,
    stats TEXT NOT NULL,
    no_extensions INTEGER NOT NULL DEFAULT 0,
    remarks TEXT,
    review_status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS budget_entries (
    id INTEGER PRIMARY KEY,
    transaction_id TEXT NOT NULL UNIQUE,
    transaction_date TEXT NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT,
    amount NUMERIC NOT NULL,
    fund_source TEXT,
    payee TEXT,
    dv_number TEXT,
    expenditure_program TEXT,
    program_description TEXT,
    remarks TEXT,
    allocation_id INTEGER,
    created_by TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);
";

pub const TABLES: &[&str] = &["users", "dfur_projects", "budget_entries"];

pub fn get_connection(db_path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

/// Row count per known table, in [`TABLES`] order.
pub fn table_counts(conn: &Connection) -> rusqlite::Result<Vec<(&'static str, i64)>> {
    TABLES
        .iter()
        .map(|table| {
            let count: i64 =
                conn.query_row(&format!("SELECT count(*) FROM {table}"), [], |row| row.get(0))?;
            Ok((*table, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    #[test]
    fn test_init_db_creates_tables() {
        let (_dir, conn) = test_db();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        for expected in TABLES {
            assert!(tables.contains(&expected.to_string()), "missing table: {expected}");
        }
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn).unwrap();
    }

    #[test]
    fn test_table_counts_start_empty() {
        let (_dir, conn) = test_db();
        let counts = table_counts(&conn).unwrap();
        assert_eq!(counts.len(), 3);
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_dfur_review_status_defaults_pending() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO dfur_projects (transaction_id, transaction_date, name_of_collection, project, \
             location, total_cost_approved, date_started, target_completion_date, stats) \
             VALUES ('D-1', '2025-01-01', 'Infrastructure', 'Road', 'Purok 1', 100, '2025-01-02', '2025-06-30', 'Planned')",
            [],
        )
        .unwrap();
        let (status, ext): (String, i64) = conn
            .query_row("SELECT review_status, no_extensions FROM dfur_projects", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!(status, "pending");
        assert_eq!(ext, 0);
    }
}
