//! Liveness probe.

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check() -> &'static str {
    "Server is running!"
}
