//! Browser transport for the promotions API, backed by `gloo-net` (fetch).

use common::dispatch::Transport;
use common::requests::{ApiError, ApiRequest, HttpMethod, RawResponse};
use gloo_net::http::{Method, RequestBuilder};

/// Sends requests to the promotions service at `base` (empty for same origin).
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base: String,
}

impl GlooTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let builder = RequestBuilder::new(&request.url(&self.base))
            .method(to_method(request.method))
            .header("Content-Type", request.content_type);

        let prepared = match request.body_json()? {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
