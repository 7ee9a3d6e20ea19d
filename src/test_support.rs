//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{FetchError, ResponseEnvelope, Tutorial, TutorialId, TutorialSource};
use crate::core::fetch::DiagnosticSink;

/// A source that answers with a canned result, without touching the network.
pub struct StaticSource {
    result: Result<ResponseEnvelope, FetchError>,
}

impl StaticSource {
    pub fn ok(envelope: ResponseEnvelope) -> Self {
        Self {
            result: Ok(envelope),
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl TutorialSource for StaticSource {
    fn endpoint(&self) -> &str {
        "static://tutorials"
    }

    async fn fetch_envelope(&self) -> Result<ResponseEnvelope, FetchError> {
        self.result.clone()
    }
}

/// Keeps every reported failure for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, error: &FetchError) {
        self.entries.lock().unwrap().push(error.to_string());
    }
}

pub fn tutorial(id: i64, title: &str, description: &str, url: &str) -> Tutorial {
    Tutorial {
        id: TutorialId::Number(id),
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    }
}

/// The list the reference backend serves.
pub fn sample_tutorials() -> Vec<Tutorial> {
    vec![
        tutorial(
            1,
            "Getting Started with Go",
            "Learn the basics of Go programming language",
            "https://go.dev/doc/tutorial/getting-started",
        ),
        tutorial(
            2,
            "React Fundamentals",
            "Master the core concepts of React",
            "https://react.dev/learn",
        ),
        tutorial(
            3,
            "Building REST APIs",
            "Create robust REST APIs with Go",
            "https://go.dev/doc/tutorial/web-service-gin",
        ),
        tutorial(
            4,
            "Modern JavaScript",
            "ES6+ features and best practices",
            "https://javascript.info",
        ),
    ]
}
