use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use crate::api::handlers::{generate_comment, health};
use crate::app_state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate_comment", post(generate_comment))
        .route_service("/", ServeFile::new("static/index.html"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
