pub mod form;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letters::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::form_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/letters", post(handlers::handle_generate_letter))
        .with_state(state)
}
