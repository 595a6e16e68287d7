//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Stubbed API server helpers
//! - Client and application state builders
//! - Custom assertion macros

pub mod assertions;
pub mod mock_api;

// Re-export commonly used utilities
pub use mock_api::*;
