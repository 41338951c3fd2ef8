//! Response formatting
//!
//! Turns a finished request cycle into a [`DisplayState`]:
//! - `format_response` for an HTTP response (any status)
//! - `present_error` for anything that ended the cycle early
//!
//! Every string that originates from the network passes through
//! [`escape_control`] so a response cannot smuggle terminal escape
//! sequences into the render target.

use crate::error::AppError;
use crate::types::{DisplayState, Method, Outcome, TransportResponse};
use std::fmt::Write;

pub const REQUEST_PLACEHOLDER: &str = "Request Line";
pub const STATUS_PLACEHOLDER: &str = "Status";
pub const HEADERS_PLACEHOLDER: &str = "Headers";
pub const CONTENT_PLACEHOLDER: &str = "Response Content";
pub const ERROR_BANNER: &str = "Error";

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            request_line: REQUEST_PLACEHOLDER.to_string(),
            status_line: STATUS_PLACEHOLDER.to_string(),
            status_ok: false,
            header_block: HEADERS_PLACEHOLDER.to_string(),
            content_block: CONTENT_PLACEHOLDER.to_string(),
            outcome: Outcome::Empty,
        }
    }
}

/// Render a response. Fails only when a non-empty body declares JSON but
/// does not parse; HEAD, 204 and 304 replies carry no body to decode.
pub fn format_response(
    response: &TransportResponse,
    method: Method,
    url: &str,
) -> Result<DisplayState, AppError> {
    let content_block = if response.is_json() && !response.body_text.trim().is_empty() {
        let json: serde_json::Value = serde_json::from_str(&response.body_text)
            .map_err(|e| AppError::ResponseDecoding(e.to_string()))?;
        let pretty = serde_json::to_string_pretty(&json)
            .map_err(|e| AppError::ResponseDecoding(e.to_string()))?;
        escape_control(&pretty)
    } else {
        escape_control(&response.body_text)
    };

    let mut header_block = String::new();
    for (idx, (name, value)) in response.headers.iter().enumerate() {
        if idx > 0 {
            header_block.push('\n');
        }
        let _ = write!(
            header_block,
            "{}: {}",
            escape_single_line(name),
            escape_single_line(value)
        );
    }

    Ok(DisplayState {
        request_line: escape_single_line(&format!("{method} {url}")),
        status_line: escape_single_line(&format!(
            "{} {}",
            response.status_code, response.reason_phrase
        ))
        .trim_end()
        .to_string(),
        status_ok: is_status_ok(response.status_code),
        header_block,
        content_block,
        outcome: Outcome::Success,
    })
}

/// Reset every region to its placeholder and show the error in the content region
pub fn present_error(error: &AppError) -> DisplayState {
    DisplayState {
        content_block: format!("{ERROR_BANNER}\n\n{}", escape_control(&error.to_string())),
        outcome: Outcome::Error,
        ..DisplayState::default()
    }
}

/// 2xx and 3xx count as success for coloring
pub fn is_status_ok(status_code: u16) -> bool {
    (200..=399).contains(&status_code)
}

/// Replace control characters other than newline and tab with their escaped form
pub fn escape_control(text: &str) -> String {
    escape_with(text, |c| c == '\n' || c == '\t')
}

/// Like [`escape_control`] but also escapes line breaks
fn escape_single_line(text: &str) -> String {
    escape_with(text, |_| false)
}

fn escape_with(text: &str, keep: impl Fn(char) -> bool) -> String {
    if !text.chars().any(|c| c.is_control() && !keep(c)) {
        return text.to_string();
    }

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() && !keep(c) {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}
