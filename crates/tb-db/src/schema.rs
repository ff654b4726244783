//! Schema bootstrap.
//!
//! There is exactly one table and no migration history; the statement is
//! safe to run on every startup.

use rusqlite::Connection;
use tb_core::{Error, Result};

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id    TEXT PRIMARY KEY,
    name  TEXT,
    score INTEGER,
    team  TEXT
);
"#;

/// Create the `users` table if it does not already exist.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_USERS)
        .map_err(|e| Error::database(format!("Failed to create users table: {e}")))?;
    tracing::debug!("users table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (id, name, score, team) VALUES ('a', 'A', 1, 't')",
            [],
        )
        .unwrap();

        ensure_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn users_table_has_expected_columns() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        let mut stmt = conn.prepare("PRAGMA table_info(users)").unwrap();
        let cols: Vec<(String, String, i64)> = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?, row.get(5)?)))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(
            cols,
            vec![
                ("id".to_string(), "TEXT".to_string(), 1),
                ("name".to_string(), "TEXT".to_string(), 0),
                ("score".to_string(), "INTEGER".to_string(), 0),
                ("team".to_string(), "TEXT".to_string(), 0),
            ]
        );
    }
}
