//! Router assembly

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::handlers::{health, profiles};

/// Build the application router.
///
/// The body limit comes from `server.max_body_bytes` and replaces axum's
/// built-in default so multipart uploads up to that size are accepted.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let body_limit = ctx.config.server.max_body_bytes;

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/save-profile", post(profiles::save_profile))
        .route("/api/update-profile/{profile_key}", put(profiles::update_profile))
        .route("/api/profiles/{profile_key}", delete(profiles::delete_profile))
        .route("/{profile_key}", get(profiles::get_profile))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
