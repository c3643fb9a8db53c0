use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use quill_api::{create_router, AppState};
use quill_application::blog_mediator;
use quill_persistence::InMemoryBlogRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Router, Arc<InMemoryBlogRepository>) {
    let repo = Arc::new(InMemoryBlogRepository::new());
    let mediator = blog_mediator(repo.clone()).unwrap();
    (create_router(AppState::new(mediator)), repo)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}

async fn create(app: &Router, name: &str) -> i64 {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/blog",
        Some(json!({ "name": name, "description": "B", "author": "C" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn create_returns_created_with_location() {
    let (app, _) = app();

    let (status, headers, body) = send(
        &app,
        Method::POST,
        "/api/blog",
        Some(json!({ "name": "A", "description": "B", "author": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(headers[header::LOCATION], format!("/api/blog/{id}").as_str());
    assert_eq!(body, json!({ "id": id, "name": "A", "description": "B", "author": "C" }));
}

#[tokio::test]
async fn create_reports_every_invalid_field() {
    let (app, repo) = app();

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/blog",
        Some(json!({ "name": "", "author": "a".repeat(21) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
    let fields: Vec<&str> = body["error"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "description", "author"]);
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (app, _) = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/blog")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["type"], "bad_request");
}

#[tokio::test]
async fn null_fields_are_validated_like_empty_ones() {
    let (app, repo) = app();

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/blog",
        Some(json!({ "name": null, "description": "", "author": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
    let fields: Vec<&str> = body["error"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "description"]);
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn update_with_null_fields_is_validated() {
    let (app, _) = app();
    let id = create(&app, "before").await;

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/api/blog/{id}"),
        Some(json!({ "id": id, "name": "after", "description": null, "author": null })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
    assert_eq!(body["error"]["fields"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported() {
    let (app, repo) = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/blog")
        .body(Body::from(r#"{"name":"A","description":"B","author":"C"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["type"], "unsupported_media_type");
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn get_unknown_blog_is_not_found() {
    let (app, _) = app();

    let (status, _, body) = send(&app, Method::GET, "/api/blog/9999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found");
}

#[tokio::test]
async fn non_integer_id_is_bad_request() {
    let (app, _) = app();

    let (status, _, body) = send(&app, Method::GET, "/api/blog/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "bad_request");
}

#[tokio::test]
async fn get_all_lists_created_blogs() {
    let (app, _) = app();
    let (status, _, body) = send(&app, Method::GET, "/api/blog", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let first = create(&app, "one").await;
    let second = create(&app, "two").await;

    let (_, _, body) = send(&app, Method::GET, "/api/blog", None).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn update_with_mismatched_ids_touches_nothing() {
    let (app, _) = app();
    let id = create(&app, "original").await;

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/api/blog/{id}"),
        Some(json!({ "id": id + 1, "name": "changed", "description": "B", "author": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "bad_request");

    let (_, _, blog) = send(&app, Method::GET, &format!("/api/blog/{id}"), None).await;
    assert_eq!(blog["name"], "original");
}

#[tokio::test]
async fn update_replaces_fields() {
    let (app, _) = app();
    let id = create(&app, "before").await;

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/api/blog/{id}"),
        Some(json!({ "id": id, "name": "after", "description": "D", "author": "E" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, _, blog) = send(&app, Method::GET, &format!("/api/blog/{id}"), None).await;
    assert_eq!(blog, json!({ "id": id, "name": "after", "description": "D", "author": "E" }));
}

#[tokio::test]
async fn update_is_validated() {
    let (app, _) = app();
    let id = create(&app, "before").await;

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/api/blog/{id}"),
        Some(json!({ "id": id, "name": " ", "description": "D", "author": "E" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "validation_error");
    assert_eq!(body["error"]["fields"][0]["message"], "Name is required");
}

#[tokio::test]
async fn update_of_unknown_blog_is_not_found() {
    let (app, _) = app();

    let (status, _, _) = send(
        &app,
        Method::PUT,
        "/api/blog/77",
        Some(json!({ "id": 77, "name": "A", "description": "B", "author": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (app, repo) = app();
    let id = create(&app, "doomed").await;

    let (status, _, _) = send(&app, Method::DELETE, &format!("/api/blog/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(repo.count(), 0);

    let (status, _, _) = send(&app, Method::GET, &format!("/api/blog/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&app, Method::DELETE, &format!("/api/blog/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_version() {
    let (app, _) = app();

    let (status, _, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = app();

    let (status, _, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/blog/{id}"].is_object());
}
