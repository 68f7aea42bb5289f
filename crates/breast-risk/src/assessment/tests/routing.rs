use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::router::{assess_handler, report_handler, AssessmentRequest};
use crate::assessment::{catalog, AssessmentService};

fn json_request(method: &str, uri: &str, body: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

fn get_request(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn assess_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(ConflictRepository),
        assessment_config(),
    ));

    let response = assess_handler::<ConflictRepository>(
        State(service),
        axum::Json(AssessmentRequest::default()),
    )
    .await;

    assert_conflict_response(response);
}

#[tokio::test]
async fn assess_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(AssessmentService::new(
        Arc::new(UnavailableRepository),
        assessment_config(),
    ));

    let response = assess_handler::<UnavailableRepository>(
        State(service),
        axum::Json(AssessmentRequest::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("database offline"));
}

#[tokio::test]
async fn assess_route_creates_reports() {
    let (service, _) = build_service();
    let router = assessment_router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/risk/assessments",
            json!({
                "owner": "alice",
                "answers": {
                    "family_history": "Yes, I have first-degree relative with BC",
                    "age": 42,
                    "notes": null
                }
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload["id"].as_str().unwrap_or_default().starts_with("rpt-"));
    assert_eq!(payload["owner"], json!("alice"));
    assert_eq!(payload["report"]["risk_score"], json!("17.7"));
    assert_eq!(payload["report"]["risk_category"], json!("moderate"));
    assert_eq!(payload["report"]["quiz_answers"]["age"], json!("42"));
    assert!(payload["report"]["quiz_answers"].get("notes").is_none());
}

#[tokio::test]
async fn report_route_returns_stored_report() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let stored = service
        .assess(None, high_risk_answers())
        .expect("assessment succeeds");

    let response = crate::assessment::assessment_router(service)
        .oneshot(get_request(&format!(
            "/api/v1/risk/assessments/{}",
            stored.id.0
        )))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], json!(stored.id.0));
    assert_eq!(payload["report"]["risk_category"], json!("high"));
}

#[tokio::test]
async fn report_handler_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();

    let response = report_handler::<MemoryRepository>(
        State(Arc::new(service)),
        axum::extract::Path("rpt-missing".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["report_id"], json!("rpt-missing"));
}

#[tokio::test]
async fn history_route_lists_owner_reports() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let first = service
        .assess(Some("dana".to_string()), answers(&[]))
        .expect("first");
    let second = service
        .assess(Some("dana".to_string()), first_degree_family())
        .expect("second");

    let response = crate::assessment::assessment_router(service)
        .oneshot(get_request("/api/v1/risk/owners/dana/assessments"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("history is a list");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], json!(second.id.0));
    assert_eq!(entries[1]["id"], json!(first.id.0));
    assert_eq!(entries[0]["risk_score"], json!("17.7"));
    assert_eq!(entries[0]["risk_factor_count"], json!(1));
}

#[tokio::test]
async fn score_route_previews_without_storing() {
    let (service, repository) = build_service();
    let router = assessment_router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/risk/score",
            json!({ "answers": {} }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scores"]["total_score"], json!(12.5));
    assert_eq!(payload["risk_category"], json!("low"));
    assert_eq!(payload["user_profile"], json!("premenopausal"));
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[tokio::test]
async fn catalog_route_lists_every_factor() {
    let (service, _) = build_service();
    let router = assessment_router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/risk/catalog"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("catalog is a list");
    assert_eq!(entries.len(), catalog::all().count());
    assert_eq!(entries[0]["chain"], json!("unchangeable"));
    assert_eq!(entries[0]["question"], json!("family_history"));
    assert_eq!(entries[0]["relative_risk"], json!(2.0));
}
