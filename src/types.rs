use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP method offered by the method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }

    /// Methods that carry a request payload and a content-type choice
    pub fn is_body_bearing(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            other => Err(format!("Unsupported HTTP method: {other}")),
        }
    }
}

/// Encoding scheme selected for an outgoing request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    #[serde(alias = "form-urlencoded")]
    Form,
    Json,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Form, ContentType::Json];

    /// The header value, which doubles as the selector label
    pub fn header_value(&self) -> &'static str {
        match self {
            ContentType::Form => "application/x-www-form-urlencoded",
            ContentType::Json => "application/json",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ContentType::Form => ContentType::Json,
            ContentType::Json => ContentType::Form,
        }
    }
}

/// Snapshot of the input fields taken at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    pub method: Method,
    pub url: String,
    /// `None` when the UI variant does not offer a content-type selector
    pub content_type: Option<ContentType>,
    pub raw_body: String,
}

/// Form fields keyed by name, each holding its values in arrival order.
/// Keys keep the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(Vec<(String, Vec<String>)>);

impl FormFields {
    pub fn append(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.0.push((key, vec![value])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten into `key=value` pairs, repeating the key for every value
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    Form(FormFields),
    Json(serde_json::Value),
}

/// A request ready to hand to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRequest {
    pub method: Method,
    pub url: String,
    /// Header names are stored lowercase
    pub headers: Vec<(String, String)>,
    pub payload: Payload,
}

impl EncodedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// What came back over the wire, reduced to what the formatter needs
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status_code: u16,
    pub reason_phrase: String,
    /// Wire order, original casing
    pub headers: Vec<(String, String)>,
    pub body_text: String,
}

impl TransportResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// True when the declared content type is JSON
    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .map(|v| v.trim().to_ascii_lowercase().starts_with("application/json"))
            .unwrap_or(false)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Which kind of outcome the display currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Success,
    Error,
}

/// Everything the response view draws. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub request_line: String,
    pub status_line: String,
    pub status_ok: bool,
    /// One `name: value` line per header
    pub header_block: String,
    pub content_block: String,
    pub outcome: Outcome,
}

/// Lifecycle of the request/response cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    DisplayingSuccess,
    DisplayingError,
}

/// Tracks which input widget has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Method,
    #[default]
    Url,
    Go,
    ContentType,
    Body,
}

impl Focus {
    const RING: [Focus; 5] = [
        Focus::Method,
        Focus::Url,
        Focus::Go,
        Focus::ContentType,
        Focus::Body,
    ];

    /// Next focus target, skipping the body row while it is hidden
    pub fn next(self, body_visible: bool) -> Self {
        self.step(1, body_visible)
    }

    pub fn prev(self, body_visible: bool) -> Self {
        self.step(Self::RING.len() - 1, body_visible)
    }

    pub fn is_body_row(&self) -> bool {
        matches!(self, Focus::ContentType | Focus::Body)
    }

    fn step(self, offset: usize, body_visible: bool) -> Self {
        let len = Self::RING.len();
        let mut idx = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        loop {
            idx = (idx + offset) % len;
            let candidate = Self::RING[idx];
            if body_visible || !candidate.is_body_row() {
                return candidate;
            }
        }
    }
}
