/// Tests for the HTTP routes and extractors
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use cgiparams::routes::build_router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = build_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_params_aggregates_repeated_names() {
    let (status, body) = get("/params?name1=val1&arrVal=one&arrVal=two").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"name1": "val1", "arrVal": ["one", "two"]}));
}

#[tokio::test]
async fn test_params_without_query_is_empty_object() {
    let (status, body) = get("/params").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_params_post_form_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/params")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("id=1&id=2&note=hello+there"))
        .unwrap();
    let response = build_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"id": ["1", "2"], "note": "hello there"}));
}

#[tokio::test]
async fn test_duplicates_route_is_sorted() {
    let (status, body) = get("/params/duplicates?b=1&a=1&b=2&a=2&c=3").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!(["a", "b"]));
}

#[tokio::test]
async fn test_rewritten_route() {
    let (status, body) = get("/params/rewritten?a=1&a=a&b=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "a[]=1&a[]=a&b=2");
}
