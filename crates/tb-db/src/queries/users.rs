//! User signup, lookup, and score mutation.
//!
//! Score updates are single statements, so the arithmetic itself is atomic.
//! Callers that check existence first do so in a separate statement.
//!
//! SQLite silently turns an overflowing integer sum into a REAL, which no
//! longer reads back as `i64`. Add and subtract therefore only match rows
//! where the result is still an integer.

use rusqlite::{params, Connection};
use tb_core::Result;

use crate::models::User;
use crate::store;

/// Insert a new user. Fails with the driver's message if the id is taken.
pub fn create_user(conn: &Connection, user: &User) -> Result<()> {
    store::execute(
        conn,
        "INSERT INTO users (id, name, score, team) VALUES (?1, ?2, ?3, ?4)",
        params![user.id, user.name, user.score, user.team],
    )?;
    Ok(())
}

/// Get a user by id.
pub fn get_user(conn: &Connection, id: &str) -> Result<Option<User>> {
    store::fetch_one(
        conn,
        "SELECT id, name, score, team FROM users WHERE id = ?1",
        [id],
        User::from_row,
    )
}

/// Get only the score of a user.
pub fn get_score(conn: &Connection, id: &str) -> Result<Option<i64>> {
    store::fetch_one(conn, "SELECT score FROM users WHERE id = ?1", [id], |row| {
        row.get(0)
    })
}

/// Overwrite a user's score. Returns true if a row was updated.
pub fn set_score(conn: &Connection, id: &str, score: i64) -> Result<bool> {
    let n = store::execute(
        conn,
        "UPDATE users SET score = ?1 WHERE id = ?2",
        params![score, id],
    )?;
    Ok(n > 0)
}

/// Add `increment` to a user's score. Returns true if a row was updated;
/// false if the user is missing or the sum would leave the `i64` range.
pub fn add_score(conn: &Connection, id: &str, increment: i64) -> Result<bool> {
    let n = store::execute(
        conn,
        "UPDATE users SET score = score + ?1 \
         WHERE id = ?2 AND typeof(score + ?1) = 'integer'",
        params![increment, id],
    )?;
    Ok(n > 0)
}

/// Subtract `decrement` from a user's score. Same return contract as
/// [`add_score`].
pub fn subtract_score(conn: &Connection, id: &str, decrement: i64) -> Result<bool> {
    let n = store::execute(
        conn,
        "UPDATE users SET score = score - ?1 \
         WHERE id = ?2 AND typeof(score - ?1) = 'integer'",
        params![decrement, id],
    )?;
    Ok(n > 0)
}
