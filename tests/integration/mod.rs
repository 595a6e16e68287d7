//! Integration tests
//!
//! API client against stubbed endpoints, the durable session store, and
//! whole screen flows driven through `AppState`.

mod api_test;
mod flow_test;
mod session_test;
