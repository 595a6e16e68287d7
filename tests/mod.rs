//! Test suite for the eMarket client
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
