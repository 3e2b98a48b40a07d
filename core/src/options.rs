//! Transport option bag shared between the client and transports.
//!
//! # Design
//! Options are a typed key/value map rather than loose integers: the client
//! writes the keys it manages (`CustomMethod`, `BodyFields`, `Headers`) and
//! passes everything through to the transport, so callers can inject
//! passthrough options like `TimeoutMs` without the client knowing about
//! them. Keys are unique (last write wins); the header list under `Headers`
//! is the one append-only value.

use std::collections::BTreeMap;

/// Keys recognized in the transport option bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionKey {
    /// Capture the response body and hand it back to the caller.
    ReturnBody,
    /// Raw `"Name: value"` header lines sent with the request.
    Headers,
    /// Wire method override, set by the client on every send.
    CustomMethod,
    /// Encoded request body.
    BodyFields,
    /// Overall request timeout in milliseconds.
    TimeoutMs,
    /// Maximum number of redirects the transport may follow.
    MaxRedirects,
}

/// Values stored in the option bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Number(u64),
    Text(String),
    List(Vec<String>),
}

pub type Options = BTreeMap<OptionKey, OptionValue>;

/// The explicit defaults every new client starts from: capture the response
/// body, and an empty header list ready for appends.
pub fn default_options() -> Options {
    Options::from([
        (OptionKey::ReturnBody, OptionValue::Bool(true)),
        (OptionKey::Headers, OptionValue::List(Vec::new())),
    ])
}
