//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the two page routes and a health probe under a single Axum router.
//! Storyboard pages embed base64 images, so responses are gzip-compressed.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/generate", post(pages::generate))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
