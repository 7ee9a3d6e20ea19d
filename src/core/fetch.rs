//! # Fetch Controller
//!
//! One outbound request, translated into a terminal [`ViewState`].
//!
//! The work is split in two so the view keeps a single writer:
//!
//! ```text
//! fetch(source, sink)  ──await──▶  FetchOutcome  ──Action::FetchCompleted──▶  commit(view, outcome)
//!    (background task)                                                      (event loop thread)
//! ```
//!
//! `fetch` is the only suspension point. `commit` is synchronous and always
//! leaves `loading == false`, whichever branch ran.

use std::ops::{Deref, DerefMut};

use log::{error, info, warn};

use crate::api::{FetchError, Tutorial, TutorialSource};
use crate::core::state::ViewState;

/// Shown when the backend answers `success: false`.
pub const APPLICATION_ERROR_MESSAGE: &str = "Failed to load tutorials";
/// Shown when the request fails or the response cannot be interpreted.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error connecting to server";

/// Classified result of the single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// `success: true`; the list in backend order.
    Loaded(Vec<Tutorial>),
    /// `success: false`; the backend's own message, if it sent one.
    Rejected { message: Option<String> },
    /// The request or its decoding failed.
    Failed(FetchError),
}

/// Where transport failure details go. Never shown to the end user.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, error: &FetchError);
}

/// Reports through the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, err: &FetchError) {
        error!("Tutorial fetch failed: {err}");
    }
}

/// Performs the request and classifies the result.
///
/// Transport failures are reported to `sink` before being returned.
pub async fn fetch(source: &dyn TutorialSource, sink: &dyn DiagnosticSink) -> FetchOutcome {
    info!("Fetching tutorials from {}", source.endpoint());

    match source.fetch_envelope().await {
        Ok(envelope) if envelope.success => {
            let tutorials = envelope.data.unwrap_or_default();
            info!("Loaded {} tutorials", tutorials.len());
            FetchOutcome::Loaded(tutorials)
        }
        Ok(envelope) => {
            warn!(
                "Backend reported failure: {}",
                envelope.message.as_deref().unwrap_or("<no message>")
            );
            FetchOutcome::Rejected {
                message: envelope.message,
            }
        }
        Err(err) => {
            sink.report(&err);
            FetchOutcome::Failed(err)
        }
    }
}

/// Clears `loading` when dropped, on every exit path out of [`commit`].
struct StopLoading<'a>(&'a mut ViewState);

impl Deref for StopLoading<'_> {
    type Target = ViewState;

    fn deref(&self) -> &ViewState {
        &*self.0
    }
}

impl DerefMut for StopLoading<'_> {
    fn deref_mut(&mut self) -> &mut ViewState {
        &mut *self.0
    }
}

impl Drop for StopLoading<'_> {
    fn drop(&mut self) {
        self.0.loading = false;
    }
}

/// Writes the terminal view state for `outcome`.
pub fn commit(view: &mut ViewState, outcome: FetchOutcome) {
    let mut view = StopLoading(view);

    match outcome {
        FetchOutcome::Loaded(tutorials) => {
            view.tutorials = tutorials;
            view.error = None;
        }
        FetchOutcome::Rejected { .. } => {
            view.tutorials.clear();
            view.error = Some(APPLICATION_ERROR_MESSAGE.to_string());
        }
        FetchOutcome::Failed(_) => {
            view.tutorials.clear();
            view.error = Some(TRANSPORT_ERROR_MESSAGE.to_string());
        }
    }
}
