//! Fluent request builder with per-verb send operations.
//!
//! # Design
//! `Client` holds the mutable request configuration and the transport. The
//! configuration methods mutate in place and return `&mut Self` so calls
//! chain; verb methods all funnel into the private `send`, which installs
//! the method override and encoded body into the option bag, runs the
//! transport, and records `info`/`error` unconditionally.
//!
//! A client is deliberately reusable: nothing is reset between sends, so
//! headers, options, and even a previously encoded body carry forward until
//! overwritten. Callers reusing one client across requests must account for
//! that retained state.

use crate::encode::{form_encode, json_encode, Params};
use crate::error::ClientError;
use crate::http::{Body, Method, RequestInfo};
use crate::options::{default_options, OptionKey, OptionValue, Options};
use crate::transport::{Transport, UreqTransport};

/// A reusable HTTP request builder bound to one transport.
///
/// Not safe for concurrent use: every send reads and writes the shared
/// `options`/`info`/`error` fields without locking.
#[derive(Debug)]
pub struct Client<T: Transport = UreqTransport> {
    base_url: Option<String>,
    options: Options,
    info: RequestInfo,
    error: String,
    transport: T,
}

impl Client<UreqTransport> {
    pub fn new() -> Self {
        Self::with_transport(UreqTransport)
    }
}

impl Default for Client<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    /// Build a client over a caller-supplied transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            base_url: None,
            options: default_options(),
            info: RequestInfo::default(),
            error: String::new(),
            transport,
        }
    }

    /// Replace the base URL. It is prefixed to every subsequent request URL
    /// by literal concatenation — no separator is inserted or removed, so
    /// the caller must supply correct slashes.
    pub fn set_base_url(&mut self, url: &str) -> &mut Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Insert or overwrite a single transport option.
    pub fn add_option(&mut self, key: OptionKey, value: OptionValue) -> &mut Self {
        self.options.insert(key, value);
        self
    }

    /// Merge a bag of transport options; overlapping keys take the new value.
    pub fn add_options(&mut self, options: Options) -> &mut Self {
        self.options.extend(options);
        self
    }

    /// Append one `"name: value"` line to the header list. Headers are
    /// append-only; adding the same name twice keeps both lines.
    pub fn add_header(&mut self, name: &str, value: &str) -> &mut Self {
        let line = format!("{name}: {value}");
        match self.options.get_mut(&OptionKey::Headers) {
            Some(OptionValue::List(lines)) => lines.push(line),
            _ => {
                self.options.insert(OptionKey::Headers, OptionValue::List(vec![line]));
            }
        }
        self
    }

    /// Append one header per entry, in the mapping's iteration order.
    pub fn add_headers(&mut self, headers: &Params) -> &mut Self {
        for (name, value) in headers {
            self.add_header(name, value);
        }
        self
    }

    /// Metadata from the most recent send.
    pub fn get_info(&self) -> &RequestInfo {
        &self.info
    }

    /// Transport error from the most recent send; empty when none occurred.
    pub fn get_error(&self) -> &str {
        &self.error
    }

    /// Dispatch by verb name, case-insensitively. Unrecognized names fail
    /// with [`ClientError::UnsupportedMethod`] before any network activity.
    pub fn request(&mut self, method: &str, url: &str, data: &Params, raw: bool) -> Result<Body, ClientError> {
        let method = Method::parse(method)
            .ok_or_else(|| ClientError::UnsupportedMethod(method.to_string()))?;
        Ok(self.send(method, url, data, raw))
    }

    pub fn get(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Get, url, data, raw)
    }

    pub fn head(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Head, url, data, raw)
    }

    pub fn post(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Post, url, data, raw)
    }

    pub fn put(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Put, url, data, raw)
    }

    pub fn delete(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Delete, url, data, raw)
    }

    pub fn connect(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Connect, url, data, raw)
    }

    pub fn options(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Options, url, data, raw)
    }

    pub fn trace(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Trace, url, data, raw)
    }

    pub fn patch(&mut self, url: &str, data: &Params, raw: bool) -> Body {
        self.send(Method::Patch, url, data, raw)
    }

    /// Shared send path for every verb.
    fn send(&mut self, method: Method, url: &str, data: &Params, raw: bool) -> Body {
        self.options
            .insert(OptionKey::CustomMethod, OptionValue::Text(method.as_str().to_string()));

        // Empty data sets no body option; a body installed by an earlier
        // send on this client stays in place.
        if !data.is_empty() {
            let encoded = if raw { json_encode(data) } else { form_encode(data) };
            self.options.insert(OptionKey::BodyFields, OptionValue::Text(encoded));
        }

        let target = match &self.base_url {
            Some(base) => format!("{base}{url}"),
            None => url.to_string(),
        };

        let exchange = self.transport.perform(&target, &self.options);
        self.info = exchange.info;
        self.error = exchange.error;

        match exchange.body {
            Some(text) => Body::decode(text),
            None => Body::Empty,
        }
    }
}
