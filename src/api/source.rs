use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::types::ResponseEnvelope;

/// Why the tutorial list could not be fetched or interpreted.
///
/// Every variant is a transport-level failure from the user's point of view.
/// The detail is for operators only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The HTTP client could not be built (TLS backend, bad base URL).
    #[error("client configuration error: {0}")]
    Config(String),
    /// Connection refused, DNS failure, reset mid-body.
    #[error("network error: {0}")]
    Network(String),
    /// No response within the configured request timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// Non-2xx response whose body is not a failure envelope.
    #[error("unexpected HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Body is not a well-formed response envelope.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Something that can produce the tutorial-list envelope.
#[async_trait]
pub trait TutorialSource: Send + Sync {
    /// The full address being requested, for logging.
    fn endpoint(&self) -> &str;

    /// Performs the single request and decodes the envelope.
    async fn fetch_envelope(&self) -> Result<ResponseEnvelope, FetchError>;
}
