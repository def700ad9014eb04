use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::company::{CompanyDetail, CompanySummary};
use tower::ServiceExt;

use super::*;
use crate::directory::fixtures;

fn test_app() -> Router {
    let directory = DirectoryStore::from_records(fixtures::fixture_companies());
    build_router(Arc::new(AppState { directory }))
}

fn search_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/company/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn response_rows(response: axum::response::Response) -> Vec<CompanySummary> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("rows")
}

#[tokio::test]
async fn healthz_answers() {
    let response = test_app()
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_search_returns_every_company() {
    let response = test_app()
        .oneshot(search_request(serde_json::json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let rows = response_rows(response).await;
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0].ticker, "EXM");
}

#[tokio::test]
async fn category_filters_narrow_the_results() {
    let body = serde_json::json!({
        "filters": { "industries": ["Technology"] }
    });
    let response = test_app()
        .oneshot(search_request(body))
        .await
        .expect("response");
    let rows = response_rows(response).await;
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row.industry.as_deref() == Some("Technology")));
}

#[tokio::test]
async fn descending_price_sort_puts_unpriced_companies_last() {
    let body = serde_json::json!({
        "sorting": [{ "field": "stats.share_price", "direction": "desc" }]
    });
    let response = test_app()
        .oneshot(search_request(body))
        .await
        .expect("response");
    let rows = response_rows(response).await;
    // Oceanix Marine carries no share price in the fixtures
    assert_eq!(rows.last().map(|row| row.ticker.as_str()), Some("OCM"));
    assert_eq!(rows[0].ticker, "MCH");
}

#[tokio::test]
async fn inverted_range_bounds_are_rejected() {
    let body = serde_json::json!({
        "filters": {
            "numericRanges": { "stats.share_price": { "min": 50.0, "max": 10.0 } }
        }
    });
    let response = test_app()
        .oneshot(search_request(body))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn zero_page_limit_is_rejected() {
    let body = serde_json::json!({
        "pagination": { "offset": 0, "limit": 0 }
    });
    let response = test_app()
        .oneshot(search_request(body))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_filter_fields_are_rejected() {
    let body = serde_json::json!({
        "filters": { "regions": ["EU"] }
    });
    let response = test_app()
        .oneshot(search_request(body))
        .await
        .expect("response");
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn ticker_lookup_ignores_case() {
    let response = test_app()
        .oneshot(Request::get("/company/exm").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let company: CompanyDetail = serde_json::from_slice(&bytes).expect("company");
    assert_eq!(company.ticker, "EXM");
    assert_eq!(company.filings.len(), 1);
    assert!(company.latest_filing.is_some());
}

#[tokio::test]
async fn unknown_tickers_get_a_404() {
    let response = test_app()
        .oneshot(Request::get("/company/ZZZ").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
