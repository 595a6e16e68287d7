//! Auth API Client
//!
//! Thin async wrapper over the eMarket REST API. Each call is a single
//! request/response: no retries and no client-side timeout beyond what the
//! transport does. Non-success statuses and transport failures are mapped
//! into [`ApiError`] so screens only ever deal with one error type.

use std::time::Instant;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::egui_app::config::Config;
use crate::shared::error::ApiError;
use crate::shared::types::{
    ErrorBody, LoginRequest, LoginResponse, Profile, RegisterRequest, RegisterResponse,
    VerifyOtpRequest, VerifyOtpResponse,
};

/// Auth endpoints, used to pick the right error class for a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    VerifyOtp,
    Profile,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/auth/login",
            Endpoint::Register => "/auth/register",
            Endpoint::VerifyOtp => "/auth/verify",
            Endpoint::Profile => "/auth/profile",
        }
    }
}

/// Map a non-success status to the error class of the endpoint that returned it.
pub fn classify_status(endpoint: Endpoint, status: StatusCode, message: Option<String>) -> ApiError {
    use Endpoint::*;
    match (endpoint, status.as_u16()) {
        (VerifyOtp, 400 | 401 | 403 | 404 | 410 | 422) => ApiError::Otp { message },
        (_, 401 | 403) => ApiError::Auth { message },
        (Login, 400 | 404 | 422) => ApiError::Auth { message },
        (Register, 400 | 409 | 422) => ApiError::Validation {
            field: None,
            message: message.unwrap_or_else(|| "Registration failed".to_string()),
        },
        (_, status) => ApiError::Server { status, message },
    }
}

/// HTTP client for the auth API
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self.client.post(self.url(Endpoint::Login)).json(request);
        let response: LoginResponse = self.send(Endpoint::Login, builder).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Auth {
                message: Some("Login failed".to_string()),
            });
        }
        Ok(response)
    }

    /// `POST /auth/register`. A response without a user id counts as a failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let builder = self.client.post(self.url(Endpoint::Register)).json(request);
        let response: RegisterResponse = self.send(Endpoint::Register, builder).await?;
        if response.user_id().is_none() {
            let message = response
                .message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Registration failed: missing user ID".to_string());
            return Err(ApiError::Validation { field: None, message });
        }
        Ok(response)
    }

    /// `POST /auth/verify`. `success: false` is reported as an OTP error.
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<VerifyOtpResponse, ApiError> {
        let builder = self.client.post(self.url(Endpoint::VerifyOtp)).json(request);
        let response: VerifyOtpResponse = self.send(Endpoint::VerifyOtp, builder).await?;
        if !response.success {
            return Err(ApiError::Otp {
                message: response.message,
            });
        }
        Ok(response)
    }

    /// `GET /auth/profile`. Without a token no request is made.
    pub async fn fetch_profile(&self, token: Option<&str>) -> Result<Profile, ApiError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingSession)?;
        let builder = self
            .client
            .get(self.url(Endpoint::Profile))
            .bearer_auth(token);
        self.send(Endpoint::Profile, builder).await
    }

    fn url(&self, endpoint: Endpoint) -> String {
        self.config.api_url(endpoint.path())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(endpoint = endpoint.path(), error = %e, "Request failed without a response");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        tracing::info!(
            endpoint = endpoint.path(),
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API response"
        );

        if !status.is_success() {
            let message = error_message(response).await;
            return Err(classify_status(endpoint, status, message));
        }

        let body = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(endpoint = endpoint.path(), error = %e, "Unreadable response body");
            ApiError::from(e)
        })
    }
}

/// Pull `message` out of an error body, if the body is JSON and has one
async fn error_message(response: Response) -> Option<String> {
    let body = response.bytes().await.ok()?;
    serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
}
