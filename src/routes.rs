//! Router assembly. Dispatch is by path shape and method; everything that
//! does not match a route or a method falls back to an envelope response,
//! never to a bare framework error.

use crate::handlers;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

pub fn article_routes(state: AppState) -> Router {
    // Explicit HEAD arms: only GET and POST are supported methods, so HEAD
    // must reach the 405 fallback instead of the GET handlers.
    Router::new()
        .route(
            "/articles",
            get(handlers::list)
                .head(handlers::method_not_allowed)
                .post(handlers::create)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/articles/:id",
            get(handlers::read)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Full service: article routes with trailing slashes trimmed before
/// routing, so `/articles/` dispatches like `/articles`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(article_routes(state))
}
