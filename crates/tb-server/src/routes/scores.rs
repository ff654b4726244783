//! Score mutation routes.
//!
//! Each mutation looks the user up first (for the 404 and the display name)
//! and then runs a separate single-statement update. The two statements are
//! not wrapped in a transaction, so concurrent mutations on the same id may
//! interleave; the arithmetic in each update is still atomic in SQLite.
//!
//! A change whose result would not fit in an `i64` is rejected with 400 and
//! nothing is written.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tb_core::Error;
use tb_db::queries::users;

use super::users::USER_NOT_FOUND;
use super::{non_empty, MessageResponse};
use crate::context::AppContext;
use crate::error::AppError;

/// Request body for `POST /set-score`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SetScoreRequest {
    pub id: Option<String>,
    #[serde(rename = "newScore")]
    pub new_score: Option<i64>,
}

/// Request body for `POST /add-score`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddScoreRequest {
    pub id: Option<String>,
    pub increment: Option<i64>,
}

/// Request body for `POST /subtract-score`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SubtractScoreRequest {
    pub id: Option<String>,
    pub decrement: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
enum ScoreChange {
    Set,
    Add,
    Subtract,
}

impl ScoreChange {
    /// Name of the amount field in the request body.
    fn field(self) -> &'static str {
        match self {
            ScoreChange::Set => "newScore",
            ScoreChange::Add => "increment",
            ScoreChange::Subtract => "decrement",
        }
    }

    /// The score after applying `amount` to `current`, or `None` on overflow.
    fn apply(self, current: i64, amount: i64) -> Option<i64> {
        match self {
            ScoreChange::Set => Some(amount),
            ScoreChange::Add => current.checked_add(amount),
            ScoreChange::Subtract => current.checked_sub(amount),
        }
    }

    fn out_of_range(self) -> Error {
        Error::validation(format!("{} would take the score out of range", self.field()))
    }

    fn message(self, amount: i64, name: &str) -> String {
        match self {
            ScoreChange::Set => format!("Score set to {amount} for user {name}"),
            ScoreChange::Add => format!("Score increased by {amount} for user {name}"),
            ScoreChange::Subtract => format!("Score decreased by {amount} for user {name}"),
        }
    }
}

/// Validate presence, check the user exists, then apply the update.
async fn apply_change(
    ctx: &AppContext,
    id: Option<String>,
    amount: Option<i64>,
    change: ScoreChange,
) -> Result<Json<MessageResponse>, AppError> {
    let (Some(id), Some(amount)) = (non_empty(id), amount) else {
        let message = format!("Both id and {} are required", change.field());
        return Err(Error::validation(message).into());
    };

    let lookup_id = id.clone();
    let user = ctx
        .with_conn(move |conn| users::get_user(conn, &lookup_id))
        .await?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;

    if change.apply(user.score, amount).is_none() {
        return Err(change.out_of_range().into());
    }

    let update_id = id.clone();
    let updated = ctx
        .with_conn(move |conn| match change {
            ScoreChange::Set => users::set_score(conn, &update_id, amount),
            ScoreChange::Add => users::add_score(conn, &update_id, amount),
            ScoreChange::Subtract => users::subtract_score(conn, &update_id, amount),
        })
        .await?;

    if updated {
        tracing::debug!(user_id = %id, ?change, amount, "Score updated");
    } else {
        // Either the row vanished or a concurrent change moved the score so
        // that this one now overflows.
        let recheck_id = id.clone();
        let still_there = ctx
            .with_conn(move |conn| users::get_score(conn, &recheck_id))
            .await?
            .is_some();
        if still_there {
            return Err(change.out_of_range().into());
        }
        tracing::warn!(user_id = %id, ?change, "User disappeared before score update");
    }

    Ok(Json(MessageResponse::new(change.message(amount, &user.name))))
}

/// POST /set-score
#[utoipa::path(
    post,
    path = "/set-score",
    request_body = SetScoreRequest,
    responses(
        (status = 200, description = "Score replaced", body = MessageResponse),
        (status = 400, description = "Missing id or newScore"),
        (status = 404, description = "User not found")
    )
)]
pub async fn set_score(
    State(ctx): State<AppContext>,
    payload: Result<Json<SetScoreRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    apply_change(&ctx, payload.id, payload.new_score, ScoreChange::Set).await
}

/// POST /add-score
#[utoipa::path(
    post,
    path = "/add-score",
    request_body = AddScoreRequest,
    responses(
        (status = 200, description = "Score increased", body = MessageResponse),
        (status = 400, description = "Missing id or increment, or the sum overflows"),
        (status = 404, description = "User not found")
    )
)]
pub async fn add_score(
    State(ctx): State<AppContext>,
    payload: Result<Json<AddScoreRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    apply_change(&ctx, payload.id, payload.increment, ScoreChange::Add).await
}

/// POST /subtract-score
#[utoipa::path(
    post,
    path = "/subtract-score",
    request_body = SubtractScoreRequest,
    responses(
        (status = 200, description = "Score decreased", body = MessageResponse),
        (status = 400, description = "Missing id or decrement, or the difference overflows"),
        (status = 404, description = "User not found")
    )
)]
pub async fn subtract_score(
    State(ctx): State<AppContext>,
    payload: Result<Json<SubtractScoreRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    apply_change(&ctx, payload.id, payload.decrement, ScoreChange::Subtract).await
}
