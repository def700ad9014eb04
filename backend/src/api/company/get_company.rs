//! Single-company endpoint keyed by ticker.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use common::company::CompanyDetail;

use crate::{api::AppState, error::ApiError};

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Json<CompanyDetail>, ApiError> {
    match state.directory.by_ticker(&ticker) {
        Some(company) => Ok(Json(company.clone())),
        None => Err(ApiError::UnknownTicker(ticker)),
    }
}
