pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_form_page))
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .with_state(state)
}
