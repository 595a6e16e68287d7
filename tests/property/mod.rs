//! Property-based tests

mod catalog_proptest;
mod validation_proptest;
