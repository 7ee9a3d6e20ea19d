//! # Headless Adapter
//!
//! Runs one session without a terminal: start, await the single fetch,
//! commit, then print the rendered page as a static HTML document.

use std::io::{self, Write};

use log::info;

use crate::api::{HttpTutorialSource, TutorialSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::{DiagnosticSink, LogSink, fetch};
use crate::core::state::Session;
use crate::core::view::render;

/// Drives a full session against `source` and returns the final document.
pub async fn render_document(source: &dyn TutorialSource, sink: &dyn DiagnosticSink) -> String {
    let mut session = Session::new();
    if update(&mut session, Action::Start) == Effect::SpawnFetch {
        let outcome = fetch(source, sink).await;
        update(&mut session, Action::FetchCompleted(outcome));
    }
    render(&session.view).to_html()
}

pub async fn run(config: &ResolvedConfig) -> io::Result<()> {
    let source =
        HttpTutorialSource::new(&config.base_url, config.timeout).map_err(io::Error::other)?;
    let document = render_document(&source, &LogSink).await;
    info!("Writing HTML document ({} bytes)", document.len());

    let mut stdout = io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, ResponseEnvelope};
    use crate::core::fetch::{APPLICATION_ERROR_MESSAGE, TRANSPORT_ERROR_MESSAGE};
    use crate::core::view::LOADING_TEXT;
    use crate::test_support::{RecordingSink, StaticSource, sample_tutorials};

    #[tokio::test]
    async fn test_document_shows_cards() {
        let source = StaticSource::ok(ResponseEnvelope {
            success: true,
            data: Some(sample_tutorials()),
            message: None,
        });
        let html = render_document(&source, &RecordingSink::default()).await;
        assert_eq!(html.matches("class=\"tutorial-card\"").count(), 4);
        assert!(!html.contains(LOADING_TEXT));
    }

    #[tokio::test]
    async fn test_document_shows_application_error() {
        let source = StaticSource::ok(ResponseEnvelope {
            success: false,
            data: None,
            message: Some("db down".to_string()),
        });
        let html = render_document(&source, &RecordingSink::default()).await;
        assert!(html.contains(APPLICATION_ERROR_MESSAGE));
        assert!(!html.contains("db down"));
    }

    #[tokio::test]
    async fn test_document_hides_transport_detail() {
        let source = StaticSource::err(FetchError::Network("connection refused".to_string()));
        let sink = RecordingSink::default();
        let html = render_document(&source, &sink).await;

        assert!(html.contains(TRANSPORT_ERROR_MESSAGE));
        assert!(!html.contains("connection refused"));
        assert_eq!(sink.entries(), vec!["network error: connection refused".to_string()]);
    }
}
