use crate::error::AppError;
use crate::types::{ContentType, EncodedRequest, FormFields, Payload, RequestDraft};
use serde_json::{Map, Value};

/// Turn the submit-time snapshot into a transport-ready request.
///
/// Non body-bearing methods never carry headers or a payload, whatever the
/// hidden body input holds. The URL is passed through untouched; a bad URL
/// surfaces later as a transport error.
pub fn build_request(draft: &RequestDraft) -> Result<EncodedRequest, AppError> {
    let mut request = EncodedRequest {
        method: draft.method,
        url: draft.url.trim().to_string(),
        headers: Vec::new(),
        payload: Payload::None,
    };

    if !draft.method.is_body_bearing() || draft.raw_body.trim().is_empty() {
        return Ok(request);
    }

    let body = draft.raw_body.as_str();

    request.payload = match draft.content_type {
        Some(ContentType::Json) => Payload::Json(
            serde_json::from_str(body).map_err(|e| AppError::BodyEncoding(e.to_string()))?,
        ),
        Some(ContentType::Form) => Payload::Form(form_fields(body)?),
        None => infer_payload(body)?,
    };

    if let Some(content_type) = draft.content_type {
        request.headers.push((
            "content-type".to_string(),
            content_type.header_value().to_string(),
        ));
    }

    Ok(request)
}

/// Heuristic used when no content type was chosen: JSON if the text parses
/// as JSON, otherwise form pairs. Text that merely looks like JSON wins.
fn infer_payload(body: &str) -> Result<Payload, AppError> {
    match serde_json::from_str(body) {
        Ok(json) => Ok(Payload::Json(json)),
        Err(_) => Ok(Payload::Form(form_pairs(body)?)),
    }
}

/// Fields for an explicit form choice. A JSON object is accepted and
/// flattened; any other JSON value cannot be form-encoded.
fn form_fields(body: &str) -> Result<FormFields, AppError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => Ok(flatten_object(object)),
        Ok(other) => Err(AppError::BodyEncoding(format!(
            "a form body must be key=value pairs or a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(_) => form_pairs(body),
    }
}

/// Form pairs from a non-blank body. Text that yields no pairs is an error
/// rather than an empty form.
fn form_pairs(body: &str) -> Result<FormFields, AppError> {
    let fields = parse_form(body);
    if fields.is_empty() {
        return Err(AppError::BodyEncoding(
            "no key=value pairs with a value found".to_string(),
        ));
    }
    Ok(fields)
}

/// Arrays repeat the key once per element and nulls are skipped. Nested
/// objects are sent as compact JSON text.
fn flatten_object(object: Map<String, Value>) -> FormFields {
    let mut fields = FormFields::default();
    for (key, value) in object {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = form_value(item) {
                        fields.append(key.clone(), text);
                    }
                }
            }
            other => {
                if let Some(text) = form_value(other) {
                    fields.append(key, text);
                }
            }
        }
    }
    fields
}

fn form_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse `key=value&key2=value2` with query-string rules. Pairs with an
/// empty value are dropped; repeated keys accumulate.
pub(crate) fn parse_form(body: &str) -> FormFields {
    let mut fields = FormFields::default();
    for (key, value) in url::form_urlencoded::parse(body.trim().as_bytes()) {
        if value.is_empty() {
            continue;
        }
        fields.append(key.into_owned(), value.into_owned());
    }
    fields
}
