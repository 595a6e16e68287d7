//! Custom assertion macros
//!
//! Short-hands for the checks the client tests repeat: unwrapping results
//! with a readable panic, matching `ApiError` variants, and looking at what
//! the user was shown.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a request failed with the given `ApiError` pattern
///
/// The optional third argument is the message the user would see.
#[macro_export]
macro_rules! assert_api_err {
    ($result:expr, $pattern:pat) => {
        match $result {
            Err(ref error @ $pattern) => error.clone(),
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => panic!("Expected different error variant, got: {:?}", e),
        }
    };
    ($result:expr, $pattern:pat, $message:expr) => {{
        let error = $crate::assert_api_err!($result, $pattern);
        assert_eq!(error.user_message(), $message, "user-facing message");
        error
    }};
}

/// Assert that the front alert of an `AppState` has this title and message
#[macro_export]
macro_rules! assert_alert {
    ($state:expr, $title:expr, $message:expr) => {
        match $state.notices.alert() {
            Some(alert) => {
                assert_eq!(alert.title, $title, "alert title");
                assert_eq!(alert.message, $message, "alert message");
            }
            None => panic!("Expected alert '{}', none shown", $title),
        }
    };
}

/// Assert that a live toast contains `needle`
#[macro_export]
macro_rules! assert_toast {
    ($state:expr, $needle:expr) => {{
        let toasts = $state.notices.toasts_at(std::time::Instant::now());
        assert!(
            toasts.iter().any(|toast| toast.contains($needle)),
            "Expected a toast containing '{}', got {:?}",
            $needle,
            toasts
        );
    }};
}
