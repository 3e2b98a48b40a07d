//! HTTP methods, response bodies, and per-request metadata.
//!
//! # Design
//! `Body` is the tagged result of the decode-else-raw policy: a send returns
//! `Json` when the response text parses as JSON, `Text` when it does not,
//! and `Empty` when the transport produced no textual body (failure, or
//! body capture disabled). `RequestInfo` is the diagnostic snapshot the
//! client overwrites after every send.

use std::fmt;
use std::time::Duration;

/// The fixed set of recognized HTTP verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl Method {
    /// Parse a verb name case-insensitively against the fixed set.
    pub fn parse(name: &str) -> Option<Method> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "HEAD" => Some(Method::Head),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "CONNECT" => Some(Method::Connect),
            "OPTIONS" => Some(Method::Options),
            "TRACE" => Some(Method::Trace),
            "PATCH" => Some(Method::Patch),
            _ => None,
        }
    }

    /// Upper-case wire form of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a send hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The response text was valid JSON.
    Json(serde_json::Value),
    /// The response text was not JSON and is passed through unchanged.
    Text(String),
    /// The transport produced no textual body.
    Empty,
}

impl Body {
    /// Try to decode `text` as JSON; fall back to the raw text unchanged.
    pub fn decode(text: String) -> Body {
        match serde_json::from_str(&text) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Body::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Metadata recorded after the most recent send.
///
/// `status` is 0 when no HTTP response was received (transport failure).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    pub status: u16,
    /// Effective URL the request was sent to (base URL already applied).
    pub url: String,
    pub content_type: Option<String>,
    pub total_time: Duration,
}
