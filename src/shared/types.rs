/**
 * Wire Types Module
 *
 * Request and response bodies of the auth API, plus the session and
 * profile records the client keeps around.
 */

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// User record returned by registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Registration response. The token is only issued by some deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub user: Option<RegisteredUser>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    /// Id of the created user, if the server sent one
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }
}

/// Body of `POST /auth/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub otp: String,
    pub user_id: String,
}

/// OTP verification response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Structured error body, `{ "message": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Account profile from `GET /auth/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub email_verified: bool,
}

impl Profile {
    /// Placeholder profile used when the client runs on fixture data
    pub fn demo() -> Self {
        Self {
            id: "demo".to_string(),
            email: "john.doe@example.com".to_string(),
            username: "John Doe".to_string(),
            role: Some("seller".to_string()),
            phone: Some("+1 234 567 890".to_string()),
            created_at: "2024-01-15T09:30:00Z".to_string(),
            email_verified: true,
        }
    }

    /// Join date as "January 15, 2024 at 09:30 AM"; the raw value if it does not parse
    pub fn joined_label(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|at| at.format("%B %-d, %Y at %I:%M %p").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// What the client remembers between launches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
