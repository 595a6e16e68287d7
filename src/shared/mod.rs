//! Shared Module
//!
//! Platform-agnostic pieces of the storefront client: wire types, the error
//! taxonomy, form validation, OTP entry, catalog fixtures and configuration.
//! Nothing in here performs I/O, so all of it is usable from tests and from
//! any front end.

/// API request/response bodies and session records
pub mod types;

/// Shared error types
pub mod error;

/// Form validation rules
pub mod validation;

/// Six-cell OTP entry
pub mod otp;

/// Deterministic product catalog
pub mod catalog;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use catalog::{Category, Product, ProductDetails};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, DataSource};
pub use error::ApiError;
pub use types::{Profile, Session};
pub use validation::{Field, FieldErrors};
