use crate::error::AppError;
use crate::types::{EncodedRequest, Payload, TransportResponse};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Performs the actual network call for an encoded request
pub trait Transport: Send + Sync + 'static {
    fn execute(
        &self,
        request: EncodedRequest,
    ) -> impl Future<Output = Result<TransportResponse, AppError>> + Send;
}

/// Transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// `timeout` of `None` leaves the request unbounded
    pub fn new(timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| AppError::transport(&e))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: EncodedRequest) -> Result<TransportResponse, AppError> {
        let mut request_builder = self
            .client
            .request(request.method.to_reqwest(), request.url.as_str());

        for (name, value) in &request.headers {
            request_builder = request_builder.header(name.as_str(), value.as_str());
        }

        request_builder = match &request.payload {
            Payload::None => request_builder,
            Payload::Json(json) => request_builder.json(json),
            Payload::Form(fields) => request_builder.form(&fields.pairs()),
        };

        debug!(
            method = %request.method,
            url = %request.url,
            content_type = request.header("content-type").unwrap_or("-"),
            "sending request"
        );

        let response = request_builder
            .send()
            .await
            .map_err(|e| AppError::transport(&e))?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body_text = response.text().await.map_err(|e| AppError::transport(&e))?;

        Ok(TransportResponse {
            status_code: status.as_u16(),
            reason_phrase: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body_text,
        })
    }
}
