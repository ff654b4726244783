//! Rust structs mapping to rows of the `users` table.
//!
//! Each row-backed model implements `from_row` for constructing itself from
//! a `rusqlite::Row`.

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A leaderboard participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub score: i64,
    pub team: String,
}

impl User {
    /// Expects columns `id, name, score, team`.
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            score: row.get(2)?,
            team: row.get(3)?,
        })
    }
}

// ---------------------------------------------------------------------------
// TeamMember
// ---------------------------------------------------------------------------

/// A user as listed under a team (the team column is implied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub score: i64,
}

impl TeamMember {
    /// Expects columns `id, name, score`.
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            score: row.get(2)?,
        })
    }
}

impl From<User> for TeamMember {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            score: user.score,
        }
    }
}

// ---------------------------------------------------------------------------
// TeamScore
// ---------------------------------------------------------------------------

/// Team aggregate computed at query time; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub team_name: String,
    pub total_score: i64,
    pub members: Vec<TeamMember>,
}
