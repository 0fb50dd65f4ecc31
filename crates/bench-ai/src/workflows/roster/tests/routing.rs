use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::roster::router::{classify_handler, ClassifyRosterRequest};

#[tokio::test]
async fn classify_route_accepts_json_observations() {
    let (service, _) = build_service();
    let router = roster_router_with_service(service);

    let body = json!({ "observations": sample_snapshot() });
    let response = router
        .oneshot(
            Request::post("/api/v1/roster/classify")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("roster_size"), Some(&json!(3)));
    assert_eq!(
        payload
            .get("by_urgency")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(3)
    );
    assert_eq!(
        payload
            .pointer("/by_urgency/0/decision_label")
            .and_then(Value::as_str),
        Some("EXIT_NOW")
    );
}

#[tokio::test]
async fn classify_route_accepts_inline_toi_reports() {
    let (service, alerts) = build_service();
    let router = roster_router_with_service(service);

    let csv = "Player,Position,Shift_Sec,Ice_Rating\n\
Adamson Mikey,D,63,-31.04\n\
Levyy Vitaly,F,44,-28.20\n";
    let response = router
        .oneshot(
            Request::post("/api/v1/roster/classify")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "toi_csv": csv })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("roster_size"), Some(&json!(2)));
    assert_eq!(alerts.events().len(), 1);
}

#[tokio::test]
async fn classify_handler_requires_exactly_one_input_source() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = classify_handler::<MemoryAlerts>(
        State(service.clone()),
        axum::Json(ClassifyRosterRequest {
            toi_csv: None,
            observations: None,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = classify_handler::<MemoryAlerts>(
        State(service),
        axum::Json(ClassifyRosterRequest {
            toi_csv: Some("Player,Position,Shift_Sec,Ice_Rating\n".to_string()),
            observations: Some(sample_snapshot()),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn classify_handler_maps_validation_errors_to_unprocessable() {
    let (service, _) = build_service();

    let response = classify_handler::<MemoryAlerts>(
        State(Arc::new(service)),
        axum::Json(ClassifyRosterRequest {
            toi_csv: None,
            observations: Some(Vec::new()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("empty"));
}

#[tokio::test]
async fn classify_handler_rejects_malformed_reports() {
    let (service, _) = build_service();

    let response = classify_handler::<MemoryAlerts>(
        State(Arc::new(service)),
        axum::Json(ClassifyRosterRequest {
            toi_csv: Some("Player,Position\nAdamson Mikey,D\n".to_string()),
            observations: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
