//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/private/users", &CreateUserRequest::new("Alice"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_create_user_empty_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/private/users", &CreateUserRequest::new(""))
        .await
        .unwrap();

    let status = response.status();
    assert!(
        status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY,
        "unexpected status {status}"
    );
    let body: ErrorBody = response.json().await.unwrap();
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_create_user_malformed_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_raw("/api/v1/private/users", "{not json")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.status_code, 400);
    assert_eq!(body.details, "Invalid input");
}

#[tokio::test]
async fn test_get_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/private/users/{}", Uuid::new_v4()))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.status_code, 404);
    assert_eq!(body.message, "Not Found");
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/private/users/not-a-uuid")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/private/users/", &CreateUserRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}
