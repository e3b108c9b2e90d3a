//! Response classification
//!
//! Order matters: status, then blank body, then content type, then JSON
//! parse. The first failing check decides the kind.

use rulewatch_core::{FailureKind, TransportError};
use serde_json::Value;

const HEAD_CHARS: usize = 200;
const RETRYABLE_STATUS: [u16; 5] = [429, 500, 502, 503, 504];

/// What the classifier needs from an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Lower-cased `Content-Type`, empty when absent
    pub content_type: String,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, content_type: &str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.to_lowercase(),
            body: body.into(),
        }
    }
}

/// First 200 characters with line breaks flattened to spaces.
pub fn body_head(body: &str) -> String {
    body.chars()
        .take(HEAD_CHARS)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Parse `resp` as JSON or classify why it cannot be.
pub fn classify_response(resp: &RawResponse, url: &str) -> Result<Value, TransportError> {
    let fail = |kind: FailureKind| {
        TransportError::new(kind, url)
            .with_status(resp.status)
            .with_content_type(resp.content_type.clone())
            .with_head(body_head(&resp.body))
    };

    if resp.status != 200 {
        return Err(fail(FailureKind::HttpError));
    }
    if resp.body.trim().is_empty() {
        return Err(fail(FailureKind::EmptyBody));
    }
    if !resp.content_type.contains("json") {
        return Err(fail(FailureKind::NotJson));
    }
    serde_json::from_str(&resp.body)
        .map_err(|e| fail(FailureKind::JsonParseFail).with_message(e.to_string()))
}

/// Whether another attempt may succeed.
pub fn is_retryable(err: &TransportError) -> bool {
    if err.status.is_some_and(|s| RETRYABLE_STATUS.contains(&s)) {
        return true;
    }
    matches!(
        err.kind,
        FailureKind::EmptyBody
            | FailureKind::NotJson
            | FailureKind::JsonParseFail
            | FailureKind::RequestException
    )
}
