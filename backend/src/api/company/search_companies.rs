//! Search endpoint over the company directory.

use std::sync::Arc;

use axum::{Json, extract::State};
use common::{company::CompanySummary, search_criteria::SearchCriteria};

use super::search_exec::run_search;
use crate::{api::AppState, error::ApiError};

pub async fn search_companies(
    State(state): State<Arc<AppState>>,
    Json(criteria): Json<SearchCriteria>,
) -> Result<Json<Vec<CompanySummary>>, ApiError> {
    validate_criteria(&criteria)?;
    let results = run_search(state.directory.all(), &criteria);
    tracing::debug!(
        results = results.len(),
        offset = criteria.pagination.offset,
        "company search served"
    );
    Ok(Json(results))
}

fn validate_criteria(criteria: &SearchCriteria) -> Result<(), ApiError> {
    if criteria.pagination.limit == 0 {
        return Err(ApiError::ZeroPageLimit);
    }
    for (field, range) in criteria.filters.numeric_ranges.iter() {
        if let (Some(min), Some(max)) = (range.min, range.max) {
            if min > max {
                return Err(ApiError::InvalidRange {
                    field: field.as_str(),
                    min,
                    max,
                });
            }
        }
    }
    Ok(())
}
