//! API Routes
//!
//! Maps each cache operation onto an HTTP method and path.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, get_handler, health_handler, len_handler, remove_handler,
    remove_oldest_handler, set_handler, AppState,
};

/// Builds the router for a cache server.
///
/// Whole-cache operations (`/remove-oldest`, `/clear`) are POST-only so a
/// stray GET cannot empty the cache. Every request is logged through
/// `tower_http`'s trace layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/set", put(set_handler))
        .route("/get/:key", get(get_handler))
        .route("/del/:key", delete(remove_handler))
        .route("/remove-oldest", post(remove_oldest_handler))
        .route("/clear", post(clear_handler))
        .route("/len", get(len_handler))
        .route("/health", get(health_handler))
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin, method and header. The server is meant for trusted local use.
fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
