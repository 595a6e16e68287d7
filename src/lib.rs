//! eMarket - Storefront Client Library
//!
//! eMarket is a native storefront client: sign in, register with a one-time
//! code, view your profile, and browse or manage a seller catalog. It talks
//! to the eMarket REST API for authentication and keeps the session in a
//! local SQLite file so it survives restarts.
//!
//! # Module Structure
//!
//! - **`shared`** - Types and logic with no I/O
//!   - Wire types, error taxonomy, configuration
//!   - Form validation and OTP entry
//!   - Deterministic catalog fixtures
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - HTTP API client and durable session store
//!   - Screen controllers (login, register, OTP, profile, catalog, product)
//!   - Request execution off the UI thread and the egui views
//!
//! # Data Flow
//!
//! ```text
//! user input -> validation -> ApiRequest -> ApiClient -> ApiReply
//!            -> screen controller -> Effects -> session store / navigation
//! ```
//!
//! Screen controllers never perform I/O themselves. They return the request
//! to run and, once the reply arrives, the effects to apply. That keeps every
//! screen testable without a network or a window.
//!
//! # Usage
//!
//! ```rust
//! use emarket::shared::validation::validate_login_fields;
//!
//! let errors = validate_login_fields("a@b.com", "secret", 6);
//! assert!(errors.is_empty());
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::ApiError` for everything that can go wrong with a request
//! - `shared::config::ConfigError` for configuration problems
//! - `egui_app::session::StorageError` for local storage failures

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
