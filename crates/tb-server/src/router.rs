//! Axum router construction.
//!
//! Builds the application router with every leaderboard route, the OpenAPI
//! document, and the middleware stack.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::context::AppContext;
use crate::middleware::request_id::{request_id_middleware, X_REQUEST_ID};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::users::signup,
        routes::users::get_user_score,
        routes::scores::set_score,
        routes::scores::add_score,
        routes::scores::subtract_score,
        routes::teams::get_team_score,
        routes::teams::get_teams,
    ),
    components(schemas(
        routes::MessageResponse,
        routes::users::SignupRequest,
        routes::users::ScoreResponse,
        routes::scores::SetScoreRequest,
        routes::scores::AddScoreRequest,
        routes::scores::SubtractScoreRequest,
        routes::teams::MemberResponse,
        routes::teams::TeamScoreResponse,
        routes::teams::TeamResponse,
    ))
)]
pub struct ApiDoc;

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([X_REQUEST_ID.clone()]);

    Router::new()
        .route("/", get(routes::health::health_check))
        .route("/signup", post(routes::users::signup))
        .route("/set-score", post(routes::scores::set_score))
        .route("/add-score", post(routes::scores::add_score))
        .route("/subtract-score", post(routes::scores::subtract_score))
        .route("/get-user-score/{id}", get(routes::users::get_user_score))
        .route("/get-team-score/{team}", get(routes::teams::get_team_score))
        .route("/get-teams", get(routes::teams::get_teams))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
