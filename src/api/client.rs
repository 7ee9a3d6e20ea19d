//! HTTP implementation of [`TutorialSource`] on top of `reqwest`.
//!
//! Status precedence: a 2xx body must be a well-formed envelope or the fetch
//! is a parse failure. A non-2xx body is honored only when it is a
//! well-formed envelope reporting `success: false`; anything else becomes
//! [`FetchError::Status`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{FetchError, TutorialSource};
use super::types::ResponseEnvelope;

/// Path of the tutorial-list endpoint, relative to the backend base URL.
pub const TUTORIALS_PATH: &str = "/api/tutorials";

/// Longest slice of an error body kept in diagnostics.
const MAX_BODY_IN_ERROR: usize = 200;

pub struct HttpTutorialSource {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpTutorialSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), TUTORIALS_PATH);
        info!("Tutorial source configured: endpoint={endpoint}, timeout={timeout:?}");

        Ok(Self {
            endpoint,
            timeout,
            client,
        })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_IN_ERROR {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(MAX_BODY_IN_ERROR).collect();
    cut.push_str("...");
    cut
}

#[async_trait]
impl TutorialSource for HttpTutorialSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_envelope(&self) -> Result<ResponseEnvelope, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!("Tutorials response status: {status}");

        let body = response.text().await.map_err(|e| self.classify(e))?;
        debug!("Tutorials response body: {} bytes", body.len());

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()));
        }

        match serde_json::from_str::<ResponseEnvelope>(&body) {
            Ok(envelope) if !envelope.success => {
                warn!("Backend answered HTTP {status} with a failure envelope");
                Ok(envelope)
            }
            _ => Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let source =
            HttpTutorialSource::new("http://localhost:8080", Duration::from_secs(1)).unwrap();
        assert_eq!(source.endpoint(), "http://localhost:8080/api/tutorials");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let source =
            HttpTutorialSource::new("http://example.com/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.endpoint(), "http://example.com/api/tutorials");
    }

    #[test]
    fn test_truncate_body_short_is_untouched() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn test_truncate_body_long_is_cut() {
        let long = "x".repeat(500);
        let cut = truncate_body(&long);
        assert_eq!(cut.len(), MAX_BODY_IN_ERROR + 3);
        assert!(cut.ends_with("..."));
    }
}
