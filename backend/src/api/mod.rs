//! API route handlers and module exports.

pub mod company;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::directory::DirectoryStore;

pub struct AppState {
    pub directory: DirectoryStore,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/company/search", post(company::search_companies))
        .route("/company/{ticker}", get(company::get_company))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
