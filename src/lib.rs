pub mod config;
pub mod content;
pub mod filters;
pub mod handlers;
pub mod images;
pub mod state;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
  Router::new()
    .route("/", get(handlers::index))
    .route("/select/", get(handlers::select_root))
    .route("/select/{*path}", get(handlers::select))
    .route("/practice/{*path}", get(handlers::practice))
    .route("/fill/{*path}", get(handlers::fill))
    .nest_service("/static", ServeDir::new(static_dir))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
