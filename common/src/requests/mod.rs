//! Wire contract with the promotions service.
//!
//! Everything needed to talk to the REST API without knowing how bytes are
//! moved: request descriptors, the shape of error bodies, and how a raw
//! status + body pair is turned into a typed reply or an [`ApiError`].

use log::warn;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::model::promotion::{Promotion, PromotionPayload};

/// Collection path of the promotions resource.
pub const API_PATH: &str = "/promotions";

/// Content type declared on every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status line text when a failure carries no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Server error!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a successful response body is expected to contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expect {
    Record,
    Records,
    Nothing,
}

/// A fully built request, ready for a transport to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path and query, relative to the API origin (e.g. `/promotions/7`).
    pub path: String,
    pub body: Option<PromotionPayload>,
    pub expect: Expect,
    /// Declared on the request even when there is no body.
    pub content_type: &'static str,
}

impl ApiRequest {
    /// `POST /promotions` with the encoded form as body.
    pub fn create(payload: PromotionPayload) -> Self {
        Self {
            method: HttpMethod::Post,
            path: API_PATH.to_string(),
            body: Some(payload),
            expect: Expect::Record,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    /// `PUT /promotions/{id}` with the encoded form as body.
    pub fn update(id: &str, payload: PromotionPayload) -> Self {
        Self {
            method: HttpMethod::Put,
            path: resource_path(id),
            body: Some(payload),
            expect: Expect::Record,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    /// `PUT /promotions/{id}/cancel`, no body.
    pub fn cancel(id: &str) -> Self {
        Self {
            method: HttpMethod::Put,
            path: format!("{}/cancel", resource_path(id)),
            body: None,
            expect: Expect::Record,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    /// `GET /promotions/{id}`.
    pub fn retrieve(id: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: resource_path(id),
            body: None,
            expect: Expect::Record,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    /// `DELETE /promotions/{id}`. The response body is never read.
    pub fn delete(id: &str) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: resource_path(id),
            body: None,
            expect: Expect::Nothing,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    /// `GET /promotions?{query}`, or the bare collection when `query` is empty.
    pub fn search(query: &str) -> Self {
        let path = if query.is_empty() {
            API_PATH.to_string()
        } else {
            format!("{API_PATH}?{query}")
        };
        Self {
            method: HttpMethod::Get,
            path,
            body: None,
            expect: Expect::Records,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    /// Absolute URL for this request under `base` (empty for same origin).
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }

    /// JSON text of the body, if any.
    pub fn body_json(&self) -> Result<Option<String>, ApiError> {
        self.body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Transport(format!("cannot encode request body: {e}")))
    }
}

fn resource_path(id: &str) -> String {
    format!("{API_PATH}/{id}")
}

/// Status code and body text as the transport received them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure body returned by the service.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parses a failure body; anything that is not a JSON object with a
    /// `message` string yields an empty body.
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Unreadable error body ({}): {:?}", e, body);
                ErrorBody::default()
            }
        }
    }
}

/// Successful, decoded response.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Record(Promotion),
    Records(Vec<Promotion>),
    Empty,
}

/// Everything that can go wrong between issuing a request and reading its reply.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("service rejected the request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("request could not be completed: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the status line: the service's own message when it sent one.
    pub fn status_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Interprets a raw response according to what the request expects.
pub fn interpret(expect: Expect, response: &RawResponse) -> Result<Reply, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Rejected {
            status: response.status,
            message: ErrorBody::parse(&response.body).message,
        });
    }

    match expect {
        Expect::Nothing => Ok(Reply::Empty),
        Expect::Record => serde_json::from_str(&response.body)
            .map(Reply::Record)
            .map_err(|e| ApiError::Decode(e.to_string())),
        Expect::Records => serde_json::from_str(&response.body)
            .map(Reply::Records)
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}
