//! HTTP tests for the available budget endpoints.
//!
//! The update cases are data driven: each submission updates a subset of
//! fields, and the stored record is fetched back and compared field by
//! field, ignoring timestamps.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

use moneta_server::{api::app_router, build_state};

async fn build_test_router() -> axum::Router {
    let state = build_state().await.unwrap();
    app_router(state)
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn list_contains_seeded_budget() {
    let app = build_test_router().await;
    let (status, json) = send(&app, Method::GET, "/api/v1/available-budgets", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["currency"]["code"], "EUR");
    assert_eq!(json[0]["start"], "2021-01-01");
    assert_eq!(json[0]["end"], "2021-01-31");
}

#[tokio::test]
async fn get_unknown_budget_is_404() {
    let app = build_test_router().await;
    let (status, _) = send(&app, Method::GET, "/api/v1/available-budgets/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_then_fetch() {
    let app = build_test_router().await;
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/available-budgets",
        Some(serde_json::json!({
            "currencyCode": "USD",
            "amount": 250.0,
            "start": "2021-02-01",
            "end": "2021-02-28"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 2);
    assert_eq!(created["currency"]["code"], "USD");

    let (status, fetched) = send(&app, Method::GET, "/api/v1/available-budgets/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["amount"], created["amount"]);
    assert_eq!(fetched["start"], "2021-02-01");
}

#[tokio::test]
async fn create_without_currency_is_422() {
    let app = build_test_router().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/available-budgets",
        Some(serde_json::json!({
            "amount": 10.0,
            "start": "2021-02-01",
            "end": "2021-02-28"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_with_unknown_currency_is_422() {
    let app = build_test_router().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/available-budgets",
        Some(serde_json::json!({
            "currencyCode": "XXX",
            "amount": 10.0,
            "start": "2021-02-01",
            "end": "2021-02-28"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// One data-driven update case: the fields submitted and the values the
/// stored record must show afterwards.
struct UpdateCase {
    name: &'static str,
    submission: serde_json::Value,
    expected: Vec<(&'static str, serde_json::Value)>,
}

fn update_cases() -> Vec<UpdateCase> {
    vec![
        UpdateCase {
            name: "update_currency_id",
            submission: serde_json::json!({ "currencyId": 2 }),
            expected: vec![
                ("/currency/code", serde_json::json!("USD")),
                ("/amount", serde_json::json!(1000.0)),
            ],
        },
        UpdateCase {
            name: "update_currency_code",
            submission: serde_json::json!({ "currencyCode": "GBP" }),
            expected: vec![("/currency/code", serde_json::json!("GBP"))],
        },
        UpdateCase {
            name: "update_amount",
            submission: serde_json::json!({ "amount": 200.5 }),
            expected: vec![
                ("/amount", serde_json::json!(200.5)),
                ("/currency/code", serde_json::json!("EUR")),
            ],
        },
        UpdateCase {
            name: "update_start",
            submission: serde_json::json!({ "start": "2021-01-05" }),
            expected: vec![
                ("/start", serde_json::json!("2021-01-05")),
                ("/end", serde_json::json!("2021-01-31")),
            ],
        },
        UpdateCase {
            name: "update_end",
            submission: serde_json::json!({ "end": "2021-02-15" }),
            expected: vec![
                ("/start", serde_json::json!("2021-01-01")),
                ("/end", serde_json::json!("2021-02-15")),
            ],
        },
        UpdateCase {
            name: "update_both_dates",
            submission: serde_json::json!({ "start": "2021-03-01", "end": "2021-03-31" }),
            expected: vec![
                ("/start", serde_json::json!("2021-03-01")),
                ("/end", serde_json::json!("2021-03-31")),
            ],
        },
        UpdateCase {
            name: "update_everything_at_once",
            submission: serde_json::json!({
                "currencyCode": "USD",
                "amount": 50.0,
                "start": "2021-06-01",
                "end": "2021-06-30"
            }),
            expected: vec![
                ("/currency/code", serde_json::json!("USD")),
                ("/amount", serde_json::json!(50.0)),
                ("/start", serde_json::json!("2021-06-01")),
                ("/end", serde_json::json!("2021-06-30")),
            ],
        },
    ]
}

#[tokio::test]
async fn data_driven_updates_round_trip() {
    for case in update_cases() {
        // Fresh state per case so earlier updates cannot leak through.
        let app = build_test_router().await;

        let (status, updated) = send(
            &app,
            Method::PUT,
            "/api/v1/available-budgets/1",
            Some(case.submission.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}: update failed", case.name);

        let (status, fetched) = send(&app, Method::GET, "/api/v1/available-budgets/1", None).await;
        assert_eq!(status, StatusCode::OK, "{}: fetch failed", case.name);

        for (pointer, expected) in &case.expected {
            assert_eq!(
                fetched.pointer(pointer),
                Some(expected),
                "{}: field {} mismatch after fetch",
                case.name,
                pointer
            );
            assert_eq!(
                updated.pointer(pointer),
                Some(expected),
                "{}: field {} mismatch in update response",
                case.name,
                pointer
            );
        }
    }
}

#[tokio::test]
async fn update_with_inverted_dates_is_422() {
    let app = build_test_router().await;
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/available-budgets/1",
        Some(serde_json::json!({ "start": "2021-05-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_then_fetch_is_404() {
    let app = build_test_router().await;
    let (status, _) = send(&app, Method::DELETE, "/api/v1/available-budgets/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/api/v1/available-budgets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
