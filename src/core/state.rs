//! # View State
//!
//! The session's single source of truth for what is displayed.
//!
//! ```text
//! Session
//! ├── view: ViewState
//! │   ├── tutorials: Vec<Tutorial>  // empty until a successful load
//! │   ├── loading: bool             // true from creation until the fetch commits
//! │   └── error: Option<String>     // user-facing message on failure
//! └── started: bool                 // run-once guard for the fetch
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs,
//! and the view itself is only written by `fetch::commit`.

use crate::api::Tutorial;

/// Which of the three mutually exclusive render branches applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub tutorials: Vec<Tutorial>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// The state a session starts in: loading, nothing to show yet.
    pub fn new() -> Self {
        Self {
            tutorials: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// `loading` wins over `error`, which wins over content.
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Content
        }
    }
}

/// One running UI session. Owns the view state exclusively.
#[derive(Debug, Default)]
pub struct Session {
    pub view: ViewState,
    /// Set by the first `Action::Start`; the fetch never runs twice.
    pub started: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
