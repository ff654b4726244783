//! The three primitive statement helpers every query is built on.
//!
//! Driver failures are converted to [`Error::Database`] with the driver's
//! own message preserved, so callers can surface it unchanged.

use rusqlite::{Connection, OptionalExtension, Params, Row};
use tb_core::{Error, Result};

/// Run a write statement and return the number of affected rows.
pub fn execute<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<usize> {
    conn.execute(sql, params)
        .map_err(|e| Error::database(e.to_string()))
}

/// Fetch at most one row, mapping it with `map_row`.
///
/// Returns `Ok(None)` when the query matches nothing.
pub fn fetch_one<T, P, F>(conn: &Connection, sql: &str, params: P, map_row: F) -> Result<Option<T>>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    conn.query_row(sql, params, map_row)
        .optional()
        .map_err(|e| Error::database(e.to_string()))
}

/// Fetch every row the query yields, in the order SQLite returns them.
pub fn fetch_all<T, P, F>(conn: &Connection, sql: &str, params: P, map_row: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map(params, map_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}
