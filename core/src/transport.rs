//! Transport seam: one blocking request/response cycle per call.
//!
//! # Design
//! The client never touches the network directly; it hands an effective URL
//! and the accumulated option bag to a [`Transport`] and records whatever
//! comes back. `Exchange.error` is the only failure channel — a transport
//! implementation must not panic and has no `Err` to return, matching the
//! "failures are data" policy of the client.

use std::time::Instant;

use crate::http::RequestInfo;
use crate::options::{OptionKey, OptionValue, Options};

/// Result of one request/response cycle.
///
/// `body` is `None` when the transport produced no textual body, either
/// because the request failed or because body capture was disabled.
/// `error` is empty on success.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub body: Option<String>,
    pub info: RequestInfo,
    pub error: String,
}

/// One blocking HTTP request/response cycle.
pub trait Transport {
    fn perform(&self, url: &str, options: &Options) -> Exchange;
}

/// Default transport backed by ureq.
///
/// Builds a fresh agent for every call, so each send acquires exactly one
/// handle and releases it before returning; no connection state is shared
/// between sends. HTTP error statuses are returned as data
/// (`http_status_as_error(false)`), never as transport errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn perform(&self, url: &str, options: &Options) -> Exchange {
        let started = Instant::now();

        let mut config = ureq::Agent::config_builder().http_status_as_error(false);
        if let Some(OptionValue::Number(ms)) = options.get(&OptionKey::TimeoutMs) {
            config = config.timeout_global(Some(std::time::Duration::from_millis(*ms)));
        }
        if let Some(OptionValue::Number(count)) = options.get(&OptionKey::MaxRedirects) {
            config = config.max_redirects(*count as u32);
        }
        let agent = config.build().new_agent();

        let method = match options.get(&OptionKey::CustomMethod) {
            Some(OptionValue::Text(method)) => method.as_str(),
            _ => "GET",
        };
        let mut builder = ureq::http::Request::builder().method(method).uri(url);
        if let Some(OptionValue::List(lines)) = options.get(&OptionKey::Headers) {
            for line in lines {
                // Raw "Name: value" lines; malformed lines are skipped.
                if let Some((name, value)) = line.split_once(':') {
                    builder = builder.header(name.trim(), value.trim());
                }
            }
        }
        let body: &[u8] = match options.get(&OptionKey::BodyFields) {
            Some(OptionValue::Text(fields)) => fields.as_bytes(),
            _ => &[],
        };
        let request = match builder.body(body) {
            Ok(request) => request,
            Err(e) => return failure(url, started, e.to_string()),
        };

        match agent.run(request) {
            Ok(mut response) => {
                let info = RequestInfo {
                    status: response.status().as_u16(),
                    url: url.to_string(),
                    content_type: response
                        .headers()
                        .get(ureq::http::header::CONTENT_TYPE)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string),
                    total_time: started.elapsed(),
                };
                let capture = !matches!(
                    options.get(&OptionKey::ReturnBody),
                    Some(OptionValue::Bool(false))
                );
                let (body, error) = if capture {
                    match response.body_mut().read_to_string() {
                        Ok(text) => (Some(text), String::new()),
                        Err(e) => (None, e.to_string()),
                    }
                } else {
                    (None, String::new())
                };
                Exchange { body, info, error }
            }
            Err(e) => failure(url, started, e.to_string()),
        }
    }
}

fn failure(url: &str, started: Instant, error: String) -> Exchange {
    Exchange {
        body: None,
        info: RequestInfo {
            url: url.to_string(),
            total_time: started.elapsed(),
            ..RequestInfo::default()
        },
        error,
    }
}
