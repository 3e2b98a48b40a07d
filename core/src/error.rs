//! Error type for the client.
//!
//! # Design
//! Only one condition aborts a call: dispatching a verb name outside the
//! fixed set. Transport failures and HTTP error statuses are never errors
//! here; they surface through `Client::get_error` / `Client::get_info` and
//! the returned `Body`, so the caller inspects data rather than catching.

use std::fmt;

/// Errors returned by `Client::request`.
#[derive(Debug, PartialEq, Eq)]
pub enum ClientError {
    /// The invoked verb name is not in the recognized HTTP method set.
    /// Raised before any network activity.
    UnsupportedMethod(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::UnsupportedMethod(name) => {
                write!(f, "unsupported HTTP method: {name}")
            }
        }
    }
}

impl std::error::Error for ClientError {}
