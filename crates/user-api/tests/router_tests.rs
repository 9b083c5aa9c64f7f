//! Router tests
//!
//! Drive the full router (middleware, extractors, handlers, error
//! rendering) with `tower::ServiceExt::oneshot` against an in-memory
//! repository, so no database is needed.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;

use user_api::{create_app, trim_trailing_slash, AppState, ErrorResponse};
use user_common::AppConfig;
use user_core::entities::User;
use user_core::value_objects::UserId;
use user_service::testing::InMemoryUserRepository;
use user_service::{ServiceContext, UseCaseFacade};

fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused@localhost/unused".to_string()),
        _ => None,
    })
    .unwrap()
}

struct TestApp {
    repo: Arc<InMemoryUserRepository>,
    state: AppState,
}

impl TestApp {
    fn new() -> Self {
        let repo = Arc::new(InMemoryUserRepository::default());
        let facade = UseCaseFacade::from_context(ServiceContext::new(repo.clone()));
        let state = AppState::new(facade, test_config());
        Self { repo, state }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        trim_trailing_slash(create_app(self.state.clone()))
            .oneshot(request)
            .await
            .unwrap()
    }

    async fn post_json(&self, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn get(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    fn stored_users(&self) -> Vec<User> {
        self.repo.snapshot()
    }
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn error_body(response: Response) -> ErrorResponse {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");
}

#[tokio::test]
async fn test_health_check_trailing_slash() {
    let app = TestApp::new();

    let response = app.get("/health/").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_create_user_returns_201_with_empty_body() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/private/users", r#"{"name":"Alice"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response).await.is_empty());

    let users = app.stored_users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
}

#[tokio::test]
async fn test_create_user_empty_name_is_422() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/private/users", r#"{"name":""}"#).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = error_body(response).await;
    assert_eq!(body.status_code, 422);
    assert_eq!(body.message, "Unprocessable Entity");
    assert_eq!(body.details, "UseCaseError: invalid input");
    assert!(app.stored_users().is_empty());
}

#[tokio::test]
async fn test_create_user_malformed_json_is_400() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/private/users", r#"{"name":"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = error_body(response).await;
    assert_eq!(body.message, "Bad Request");
    assert_eq!(body.details, "Invalid input");
}

#[tokio::test]
async fn test_create_user_wrong_field_type_is_400() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/private/users", r#"{"name":42}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_without_content_type_is_400() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/private/users")
        .body(Body::from(r#"{"name":"Alice"}"#))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.stored_users().is_empty());
}

#[tokio::test]
async fn test_create_then_get_user() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/private/users/", r#"{"name":"Bob"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = app.stored_users()[0].id;

    let response = app.get(&format!("/api/v1/private/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json, serde_json::json!({"id": id.to_string(), "name": "Bob"}));
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/v1/private/users/{}", UserId::new()))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = error_body(response).await;
    assert_eq!(body.status_code, 404);
    assert_eq!(body.message, "Not Found");
    assert_eq!(body.details, "UseCaseError: not found");
}

#[tokio::test]
async fn test_get_user_invalid_id_is_400() {
    let app = TestApp::new();

    let response = app.get("/api/v1/private/users/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = error_body(response).await;
    assert_eq!(body.status_code, 400);
    assert_eq!(body.message, "Bad Request");
    assert_eq!(body.details, "Invalid input");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
