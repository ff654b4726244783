//! Route handlers for the HTTP API.

pub mod health;
pub mod scores;
pub mod teams;
pub mod users;

use serde::Serialize;

/// Generic `{ "message": ... }` confirmation body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Treat absent, `null`, and empty strings alike.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
