//! Fluent, blocking HTTP client core.
//!
//! # Overview
//! A [`Client`] accumulates request configuration (base URL, transport
//! options, headers) through chainable mutators, then fires one synchronous
//! request per verb call. Response bodies that parse as JSON come back
//! decoded; anything else comes back as the raw text (decode-else-raw, never
//! an error).
//!
//! # Design
//! - The network sits behind the [`Transport`] trait; [`UreqTransport`] is
//!   the default implementation and tests substitute recording fakes.
//! - HTTP-level errors (4xx/5xx) and transport failures are data, not
//!   control flow: inspect [`Client::get_error`] and [`Client::get_info`]
//!   after a send. Only dispatching an unrecognized verb name fails the call.
//! - A client is reusable across sends and deliberately carries all
//!   accumulated state forward, including any previously installed body.

pub mod client;
pub mod encode;
pub mod error;
pub mod http;
pub mod options;
pub mod transport;

pub use client::Client;
pub use encode::{form_encode, json_encode, Params};
pub use error::ClientError;
pub use http::{Body, Method, RequestInfo};
pub use options::{default_options, OptionKey, OptionValue, Options};
pub use transport::{Exchange, Transport, UreqTransport};
