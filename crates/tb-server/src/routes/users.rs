//! Signup and per-user score lookup.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tb_core::Error;
use tb_db::models::User;

use super::{non_empty, MessageResponse};
use crate::context::AppContext;
use crate::error::AppError;

pub(crate) const USER_NOT_FOUND: &str = "User not found";

/// Request body for signing up a user.
///
/// Every field is required; `score` may be 0 but not absent.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub score: Option<i64>,
    pub team: Option<String>,
}

impl SignupRequest {
    /// Check presence in the order id, name, score, team and report the
    /// first missing field.
    fn into_user(self) -> Result<User, Error> {
        let missing = |field: &str| Error::validation(format!("Missing {field} in request body"));

        let id = non_empty(self.id).ok_or_else(|| missing("id"))?;
        let name = non_empty(self.name).ok_or_else(|| missing("name"))?;
        let score = self.score.ok_or_else(|| missing("score"))?;
        let team = non_empty(self.team).ok_or_else(|| missing("team"))?;

        Ok(User {
            id,
            name,
            score,
            team,
        })
    }
}

/// Body of `GET /get-user-score/{id}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ScoreResponse {
    pub score: i64,
}

/// POST /signup
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Missing field"),
        (status = 500, description = "Storage error, including a duplicate id")
    )
)]
pub async fn signup(
    State(ctx): State<AppContext>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(payload) = payload?;
    let user = payload.into_user()?;

    let message = format!(
        "User {} with id {} was added to the database. \nScore: {} \nTeam: {}",
        user.name, user.id, user.score, user.team
    );
    let id = user.id.clone();

    ctx.with_conn(move |conn| tb_db::queries::users::create_user(conn, &user))
        .await?;
    tracing::info!(user_id = %id, "User signed up");

    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// GET /get-user-score/{id}
#[utoipa::path(
    get,
    path = "/get-user-score/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Current score", body = ScoreResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_score(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<ScoreResponse>, AppError> {
    let score = ctx
        .with_conn(move |conn| tb_db::queries::users::get_score(conn, &id))
        .await?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;

    Ok(Json(ScoreResponse { score }))
}
