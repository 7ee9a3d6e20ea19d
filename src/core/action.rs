//! # Actions
//!
//! Everything that can happen to a session becomes an `Action`.
//! The host constructed the session? That's `Action::Start`.
//! The backend answered? That's `Action::FetchCompleted(outcome)`.
//!
//! `update()` applies an action to the session and returns an `Effect`
//! telling the host what I/O to perform. No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Effect
//! ```

use log::{debug, info, warn};

use crate::core::fetch::{FetchOutcome, commit};
use crate::core::state::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Dispatched once by the host right after constructing the session.
    Start,
    /// The background fetch finished.
    FetchCompleted(FetchOutcome),
    Quit,
}

/// What the host must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run `fetch::fetch` in the background and send back `FetchCompleted`.
    SpawnFetch,
    Quit,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::Start if session.started => {
            warn!("Start dispatched again; the fetch only runs once per session");
            Effect::None
        }
        Action::Start => {
            info!("Session started");
            session.started = true;
            Effect::SpawnFetch
        }
        Action::FetchCompleted(outcome) => {
            if !session.view.loading {
                warn!("Ignoring fetch result: view state already committed");
                return Effect::None;
            }
            debug!("Committing fetch outcome");
            commit(&mut session.view, outcome);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::core::fetch::{APPLICATION_ERROR_MESSAGE, TRANSPORT_ERROR_MESSAGE};
    use crate::core::state::{Phase, ViewState};
    use crate::test_support::sample_tutorials;

    #[test]
    fn test_start_spawns_fetch_once() {
        let mut session = Session::new();
        assert_eq!(update(&mut session, Action::Start), Effect::SpawnFetch);
        assert_eq!(update(&mut session, Action::Start), Effect::None);
        assert!(session.started);
    }

    #[test]
    fn test_start_leaves_view_loading() {
        let mut session = Session::new();
        update(&mut session, Action::Start);
        assert_eq!(session.view, ViewState::new());
        assert_eq!(session.view.phase(), Phase::Loading);
    }

    #[test]
    fn test_fetch_completed_commits_content() {
        let mut session = Session::new();
        update(&mut session, Action::Start);

        let effect = update(
            &mut session,
            Action::FetchCompleted(FetchOutcome::Loaded(sample_tutorials())),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(session.view.phase(), Phase::Content);
        assert_eq!(session.view.tutorials, sample_tutorials());
    }

    #[test]
    fn test_fetch_completed_commits_application_error() {
        let mut session = Session::new();
        update(&mut session, Action::Start);
        update(
            &mut session,
            Action::FetchCompleted(FetchOutcome::Rejected { message: None }),
        );
        assert_eq!(session.view.error.as_deref(), Some(APPLICATION_ERROR_MESSAGE));
        assert!(!session.view.loading);
    }

    #[test]
    fn test_second_completion_is_ignored() {
        let mut session = Session::new();
        update(&mut session, Action::Start);
        update(
            &mut session,
            Action::FetchCompleted(FetchOutcome::Failed(FetchError::Parse(
                "expected value".to_string(),
            ))),
        );
        update(
            &mut session,
            Action::FetchCompleted(FetchOutcome::Loaded(sample_tutorials())),
        );

        assert_eq!(session.view.error.as_deref(), Some(TRANSPORT_ERROR_MESSAGE));
        assert!(session.view.tutorials.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut session = Session::new();
        assert_eq!(update(&mut session, Action::Quit), Effect::Quit);
    }
}
