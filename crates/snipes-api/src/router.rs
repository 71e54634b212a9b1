//! Axum router construction.
//!
//! All REST routes live under `/api` in a nested router with its own JSON
//! 404 fallback. [`build_app`] additionally serves the client bundle for
//! every other path. CORS is open to any origin.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use snipes_core::config::WebConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the REST-only router.
///
/// Paths outside `/api` get Axum's default empty 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    assemble(state, None)
}

/// Build the REST router plus static serving of the client bundle.
///
/// With `spa_fallback` on, unknown non-API paths return `index.html` with
/// status 200 so the client can route them.
pub fn build_app(state: Arc<AppState>, web: &WebConfig) -> Router {
    assemble(state, Some(web))
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        // Groups
        .route(
            "/groups",
            get(handlers::list_groups).post(handlers::create_group),
        )
        .route(
            "/groups/{id}",
            get(handlers::get_group).delete(handlers::delete_group),
        )
        .route("/groups/{id}/players", post(handlers::add_player))
        .route(
            "/groups/{id}/players/{player_id}",
            delete(handlers::remove_player),
        )
        .route("/groups/{id}/settings", put(handlers::update_settings))
        .route("/groups/{id}/snipes", get(handlers::list_snipes))
        .route("/groups/{id}/history", get(handlers::history))
        .route("/groups/{id}/leaderboard", get(handlers::leaderboard))
        // Snipes
        .route("/snipes", post(handlers::record_snipe))
        .route("/snipes/{id}", delete(handlers::delete_snipe))
        .fallback(handlers::api_not_found)
}

fn assemble(state: Arc<AppState>, web: Option<&WebConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new().nest("/api", api_routes());

    if let Some(web) = web {
        let dir = Path::new(&web.static_dir);
        let files = ServeDir::new(dir);
        router = if web.spa_fallback {
            router.fallback_service(files.fallback(ServeFile::new(dir.join("index.html"))))
        } else {
            router.fallback_service(files)
        };
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
