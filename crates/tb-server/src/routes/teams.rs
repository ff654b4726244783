//! Team aggregate routes.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tb_core::Error;
use tb_db::models::{TeamMember, TeamScore};
use tb_db::queries::teams;

use crate::context::AppContext;
use crate::error::AppError;

/// A user as listed under a team.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub score: i64,
}

impl From<TeamMember> for MemberResponse {
    fn from(m: TeamMember) -> Self {
        Self {
            id: m.id,
            name: m.name,
            score: m.score,
        }
    }
}

/// Body of `GET /get-team-score/{team}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoreResponse {
    pub users: Vec<MemberResponse>,
    pub total_score: i64,
}

/// One entry of `GET /get-teams`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team_name: String,
    pub total_score: i64,
    pub team_members: Vec<MemberResponse>,
}

impl From<TeamScore> for TeamResponse {
    fn from(t: TeamScore) -> Self {
        Self {
            team_name: t.team_name,
            total_score: t.total_score,
            team_members: t.members.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /get-team-score/{team}
#[utoipa::path(
    get,
    path = "/get-team-score/{team}",
    params(("team" = String, Path, description = "Team name")),
    responses(
        (status = 200, description = "Team members and total", body = TeamScoreResponse),
        (status = 404, description = "No users in this team")
    )
)]
pub async fn get_team_score(
    State(ctx): State<AppContext>,
    Path(team): Path<String>,
) -> Result<Json<TeamScoreResponse>, AppError> {
    let members_team = team.clone();
    let members = ctx
        .with_conn(move |conn| teams::list_team_members(conn, &members_team))
        .await?;
    if members.is_empty() {
        return Err(Error::not_found("No users found for this team").into());
    }

    let total_score = ctx
        .with_conn(move |conn| teams::team_total(conn, &team))
        .await?;

    Ok(Json(TeamScoreResponse {
        users: members.into_iter().map(Into::into).collect(),
        total_score,
    }))
}

/// GET /get-teams
#[utoipa::path(
    get,
    path = "/get-teams",
    responses(
        (status = 200, description = "All teams, highest total first", body = Vec<TeamResponse>),
        (status = 404, description = "No users exist")
    )
)]
pub async fn get_teams(State(ctx): State<AppContext>) -> Result<Json<Vec<TeamResponse>>, AppError> {
    let ranked = ctx.with_conn(teams::list_teams).await?;
    if ranked.is_empty() {
        return Err(Error::not_found("No teams or users found").into());
    }

    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}
