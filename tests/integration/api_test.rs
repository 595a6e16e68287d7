//! Auth API client tests
//!
//! Tests for login, registration, OTP verification and the profile fetch
//! against a stubbed server.

use emarket::shared::error::{ApiError, NETWORK_ERROR_MESSAGE};
use emarket::shared::types::{LoginRequest, RegisterRequest, VerifyOtpRequest};
use emarket::egui_app::ApiClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, config_for, profile_json, stub_login, stub_post, UNREACHABLE_URL};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "aline@example.com".into(),
        password: "secret1".into(),
    }
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        email: "aline@example.com".into(),
        password: "secret1".into(),
        name: "Aline".into(),
        phone: "".into(),
    }
}

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "aline@example.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "T1" })))
        .expect(1)
        .mount(&server)
        .await;

    let response = crate::assert_ok!(client_for(&server).login(&login_request()).await);
    assert_eq!(response.token, "T1");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;
    stub_post(&server, "/auth/login", 401, json!({ "message": "Invalid credentials" })).await;

    let result = client_for(&server).login(&login_request()).await;
    crate::assert_api_err!(result, ApiError::Auth { .. }, "Invalid credentials");
}

#[tokio::test]
async fn test_login_error_without_body_uses_default_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client_for(&server).login(&login_request()).await;
    crate::assert_api_err!(result, ApiError::Auth { message: None }, "Invalid email or password");
}

#[tokio::test]
async fn test_register_returns_user_id() {
    let server = MockServer::start().await;
    stub_post(
        &server,
        "/auth/register",
        201,
        json!({ "user": { "id": "u1", "email": "aline@example.com" } }),
    )
    .await;

    let response = crate::assert_ok!(client_for(&server).register(&register_request()).await);
    assert_eq!(response.user_id(), Some("u1"));
    assert_eq!(response.token, None);
}

#[tokio::test]
async fn test_register_without_user_id_fails() {
    let server = MockServer::start().await;
    stub_post(&server, "/auth/register", 201, json!({ "user": {} })).await;

    let result = client_for(&server).register(&register_request()).await;
    crate::assert_api_err!(
        result,
        ApiError::Validation { .. },
        "Registration failed: missing user ID"
    );
}

#[tokio::test]
async fn test_register_conflict_carries_server_message() {
    let server = MockServer::start().await;
    stub_post(&server, "/auth/register", 409, json!({ "message": "Email already in use" })).await;

    let result = client_for(&server).register(&register_request()).await;
    crate::assert_api_err!(result, ApiError::Validation { .. }, "Email already in use");
}

#[tokio::test]
async fn test_verify_sends_user_id_in_camel_case() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify"))
        .and(body_json(json!({ "otp": "123456", "userId": "u1" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "token": "T2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = VerifyOtpRequest {
        otp: "123456".into(),
        user_id: "u1".into(),
    };
    let response = crate::assert_ok!(client_for(&server).verify_otp(&request).await);
    assert_eq!(response.token.as_deref(), Some("T2"));
}

#[tokio::test]
async fn test_verify_unsuccessful_is_otp_error() {
    let server = MockServer::start().await;
    stub_post(
        &server,
        "/auth/verify",
        200,
        json!({ "success": false, "message": "Code expired" }),
    )
    .await;

    let request = VerifyOtpRequest {
        otp: "000000".into(),
        user_id: "u1".into(),
    };
    let result = client_for(&server).verify_otp(&request).await;
    crate::assert_api_err!(result, ApiError::Otp { .. }, "Code expired");
}

#[tokio::test]
async fn test_profile_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = crate::assert_ok!(client_for(&server).fetch_profile(Some("T1")).await);
    assert_eq!(profile.username, "Aline");
    assert!(profile.email_verified);
}

#[tokio::test]
async fn test_profile_without_token_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = crate::assert_api_err!(client.fetch_profile(None).await, ApiError::MissingSession);
    assert!(error.is_auth());
    crate::assert_api_err!(client.fetch_profile(Some("  ")).await, ApiError::MissingSession);
}

#[tokio::test]
async fn test_profile_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_profile(Some("old")).await;
    crate::assert_api_err!(result, ApiError::Auth { .. }, "Token expired");
}

#[tokio::test]
async fn test_server_error_with_plain_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let result = client_for(&server).login(&login_request()).await;
    crate::assert_api_err!(
        result,
        ApiError::Server {
            status: 500,
            message: None
        }
    );
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    stub_post(&server, "/auth/login", 200, json!({ "unexpected": true })).await;

    let result = client_for(&server).login(&login_request()).await;
    crate::assert_api_err!(result, ApiError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = ApiClient::new(config_for(UNREACHABLE_URL));
    let result = client.login(&login_request()).await;
    crate::assert_api_err!(result, ApiError::Network(_), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_stubbed_login_helper() {
    let server = MockServer::start().await;
    stub_login(&server, "T9").await;
    let response = crate::assert_ok!(client_for(&server).login(&login_request()).await);
    assert_eq!(response.token, "T9");
}
