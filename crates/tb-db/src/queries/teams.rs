//! Team queries and the team aggregate.

use std::collections::HashMap;

use rusqlite::Connection;
use tb_core::{Error, Result};

use crate::models::{TeamMember, TeamScore, User};
use crate::store;

/// List the members of one team.
pub fn list_team_members(conn: &Connection, team: &str) -> Result<Vec<TeamMember>> {
    store::fetch_all(
        conn,
        "SELECT id, name, score FROM users WHERE team = ?1",
        [team],
        TeamMember::from_row,
    )
}

/// Message SQLite's `SUM` fails with when a total leaves the `i64` range.
/// [`group_teams`] reports the same failure for the same data.
pub const TOTAL_OVERFLOW: &str = "integer overflow";

/// Sum of all scores in a team; 0 when the team has no members.
pub fn team_total(conn: &Connection, team: &str) -> Result<i64> {
    let total: Option<Option<i64>> = store::fetch_one(
        conn,
        "SELECT SUM(score) AS totalScore FROM users WHERE team = ?1",
        [team],
        |row| row.get(0),
    )?;
    Ok(total.flatten().unwrap_or(0))
}

/// All users, ordered by team then id.
pub fn list_users_by_team(conn: &Connection) -> Result<Vec<User>> {
    store::fetch_all(
        conn,
        "SELECT id, name, score, team FROM users ORDER BY team, id",
        [],
        User::from_row,
    )
}

/// Every team with its members and total, highest total first.
pub fn list_teams(conn: &Connection) -> Result<Vec<TeamScore>> {
    group_teams(list_users_by_team(conn)?)
}

/// Group users into team aggregates, sorted by descending total.
///
/// Teams appear in first-encounter order before sorting and the sort is
/// stable, so equal totals keep that order. Members keep input order.
/// A total outside the `i64` range fails with [`TOTAL_OVERFLOW`].
pub fn group_teams(users: Vec<User>) -> Result<Vec<TeamScore>> {
    let mut teams: Vec<TeamScore> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for user in users {
        let slot = match index.get(&user.team) {
            Some(&i) => i,
            None => {
                index.insert(user.team.clone(), teams.len());
                teams.push(TeamScore {
                    team_name: user.team.clone(),
                    total_score: 0,
                    members: Vec::new(),
                });
                teams.len() - 1
            }
        };

        let team = &mut teams[slot];
        team.total_score = team
            .total_score
            .checked_add(user.score)
            .ok_or_else(|| Error::database(TOTAL_OVERFLOW))?;
        team.members.push(user.into());
    }

    teams.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    Ok(teams)
}
