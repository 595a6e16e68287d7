//! Shared Error Types
//!
//! This module defines the error taxonomy used by the API client and the
//! screen controllers. Every failure that reaches a screen is reduced to a
//! single display string through [`ApiError::user_message`].
//!
//! # Error Categories
//!
//! - `Validation` - field-level problems, found locally or reported by the server
//! - `Auth` - credentials or bearer token rejected
//! - `Otp` - one-time code invalid or expired
//! - `MissingSession` - no stored token, raised before any request is made
//! - `Network` - no response could be obtained
//! - `Server` / `Decode` - anything else the server did wrong
//!
//! # Usage
//!
//! ```rust
//! use emarket::shared::error::ApiError;
//!
//! let error = ApiError::validation("otp", "Please enter the 6-digit OTP.");
//! assert_eq!(error.user_message(), "Please enter the 6-digit OTP.");
//! ```
use thiserror::Error;

/// Shown whenever the request never produced a response.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your internet connection and try again.";

/// Last-resort message when nothing better is available.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when an authenticated call is attempted without a stored token.
pub const MISSING_SESSION_MESSAGE: &str = "No token found, please login again.";

/// Errors surfaced by the API client and form handling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A field failed validation
    #[error("{message}")]
    Validation {
        /// The offending field, when known
        field: Option<String>,
        /// Human-readable error message
        message: String,
    },

    /// The server rejected the credentials or token
    #[error("Invalid email or password")]
    Auth {
        /// Structured message from the response body
        message: Option<String>,
    },

    /// The one-time code was rejected
    #[error("OTP verification failed.")]
    Otp {
        /// Structured message from the response body
        message: Option<String>,
    },

    /// No session token is stored
    #[error("{}", MISSING_SESSION_MESSAGE)]
    MissingSession,

    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Any other non-success status
    #[error("Request failed with status {status}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Structured message from the response body
        message: Option<String>,
    },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create a client-side validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// True for the authentication class of failures, including a missing session
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. } | Self::MissingSession)
    }

    /// Structured server message carried by this error, if any
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            Self::Auth { message } | Self::Otp { message } | Self::Server { message, .. } => {
                message.as_deref()
            }
            _ => None,
        };
        message.map(str::trim).filter(|m| !m.is_empty())
    }

    /// Reduce the error to the one string a screen shows.
    ///
    /// Order: server message, then the fixed network message, then the
    /// error's own text, then a generic fallback.
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        if matches!(self, Self::Network(_)) {
            return NETWORK_ERROR_MESSAGE.to_string();
        }
        let own = self.to_string();
        if own.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            own
        }
    }
}

/// Helper for converting body decoding failures
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
