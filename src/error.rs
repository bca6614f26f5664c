//! JS Boundary Errors
//!
//! Failures decoding data handed over by the page or by external scripts.
//! None of these are fatal: callers log them and fall back to an empty state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid JSON in #{element}: {source}")]
    Json {
        element: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected an array of recipes, got {0}")]
    NotAnArray(String),

    #[error("could not decode recipes: {0}")]
    Decode(String),
}

/// Log a boundary error to the browser console
pub fn report(tag: &str, err: &BridgeError) {
    web_sys::console::error_1(&format!("[{}] {}", tag, err).into());
}
