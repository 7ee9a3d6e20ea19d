//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! headless adapter drives the same core without a terminal.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle** (error or cards): sleeps up to 500ms, only redraws on events,
//!   terminal resize or the fetch result arriving.
//!
//! ## Fetch Lifetime
//!
//! The single fetch runs on a tokio task and reports back over an mpsc
//! channel. Quitting aborts the task, so a late result is never delivered
//! to a session that no longer exists.

mod component;
mod components;
mod event;
pub mod launch;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{HttpTutorialSource, TutorialSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::{DiagnosticSink, LogSink, fetch};
use crate::core::state::Session;
use crate::core::view::{View, render};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardEvent, CardListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub card_list: CardListState,
    /// Result of the last link activation, shown in the footer.
    pub status_message: Option<String>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            card_list: CardListState::new(),
            status_message: None,
        }
    }
}

/// Calls the terminal restore hook on drop, on every exit path out of `run`.
struct RestoreGuard(fn());

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        (self.0)();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the HTTP source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> io::Result<Arc<dyn TutorialSource>> {
    let source =
        HttpTutorialSource::new(&config.base_url, config.timeout).map_err(io::Error::other)?;
    Ok(Arc::new(source))
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let source = build_source(&config)?;
    let sink: Arc<dyn DiagnosticSink> = Arc::new(LogSink);
    let mut session = Session::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _restore_guard = RestoreGuard(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut fetch_handle: Option<tokio::task::AbortHandle> = None;
    if update(&mut session, Action::Start) == Effect::SpawnFetch {
        fetch_handle = Some(spawn_fetch(source, sink, tx));
    }

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let view = render(&session.view);
        let animating = matches!(view, View::Loading);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &view, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut session, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                // Only the card list reacts to navigation, and only when it is shown
                _ => {
                    if let View::Cards(cards) = &view
                        && let Some(CardEvent::Open(index)) = tui.card_list.handle_event(&event)
                        && let Some(card) = cards.get(index)
                    {
                        tui.status_message = Some(open_card(card));
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (the fetch result)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut session, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    if let Some(handle) = fetch_handle
        && !handle.is_finished()
    {
        info!("Aborting in-flight fetch on exit");
        handle.abort();
    }

    Ok(())
}

fn open_card(card: &crate::core::view::Card) -> String {
    match launch::open_in_browser(&card.link) {
        Ok(()) => format!("Opened {}", card.link.href()),
        Err(e) => {
            warn!("Could not open card {} ({}): {}", card.id, card.link.href(), e);
            format!("Could not open link: {}", e)
        }
    }
}

/// Run the one fetch on a background task and send the outcome back.
fn spawn_fetch(
    source: Arc<dyn TutorialSource>,
    sink: Arc<dyn DiagnosticSink>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning tutorials fetch: GET {}", source.endpoint());
    let handle = tokio::spawn(async move {
        let outcome = fetch(source.as_ref(), sink.as_ref()).await;
        if tx.send(Action::FetchCompleted(outcome)).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, ResponseEnvelope};
    use crate::core::fetch::{FetchOutcome, TRANSPORT_ERROR_MESSAGE};
    use crate::core::state::Phase;
    use crate::test_support::{RecordingSink, StaticSource, sample_tutorials};

    #[tokio::test]
    async fn test_spawn_fetch_delivers_outcome() {
        let source: Arc<dyn TutorialSource> = Arc::new(StaticSource::ok(ResponseEnvelope {
            success: true,
            data: Some(sample_tutorials()),
            message: None,
        }));
        let sink: Arc<dyn DiagnosticSink> = Arc::new(RecordingSink::default());
        let (tx, rx) = mpsc::channel();

        let handle = spawn_fetch(source, sink, tx);
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }

        let action = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(
            action,
            Action::FetchCompleted(FetchOutcome::Loaded(sample_tutorials()))
        );
    }

    #[tokio::test]
    async fn test_fetched_failure_commits_through_update() {
        let source: Arc<dyn TutorialSource> = Arc::new(StaticSource::err(FetchError::Network(
            "connection refused".to_string(),
        )));
        let recording = Arc::new(RecordingSink::default());
        let sink: Arc<dyn DiagnosticSink> = recording.clone();
        let (tx, rx) = mpsc::channel();

        let mut session = Session::new();
        assert_eq!(update(&mut session, Action::Start), Effect::SpawnFetch);
        let handle = spawn_fetch(source, sink, tx);
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }

        let action = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        update(&mut session, action);

        assert_eq!(session.view.phase(), Phase::Error);
        assert_eq!(session.view.error.as_deref(), Some(TRANSPORT_ERROR_MESSAGE));
        assert_eq!(recording.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_aborted_fetch_sends_nothing() {
        struct NeverSource;

        #[async_trait::async_trait]
        impl TutorialSource for NeverSource {
            fn endpoint(&self) -> &str {
                "never://tutorials"
            }

            async fn fetch_envelope(&self) -> Result<ResponseEnvelope, FetchError> {
                std::future::pending().await
            }
        }

        let sink: Arc<dyn DiagnosticSink> = Arc::new(RecordingSink::default());
        let (tx, rx) = mpsc::channel();
        let handle = spawn_fetch(Arc::new(NeverSource), sink, tx);

        handle.abort();
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }

        // The task (and its sender) is gone without ever sending.
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(100)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn test_restore_guard_runs_on_early_return() {
        use std::sync::atomic::{AtomicBool, Ordering};

        static RESTORED: AtomicBool = AtomicBool::new(false);
        fn mark_restored() {
            RESTORED.store(true, Ordering::SeqCst);
        }

        fn failing_loop() -> io::Result<()> {
            let _restore_guard = RestoreGuard(mark_restored);
            Err(io::Error::other("draw failed"))?;
            Ok(())
        }

        assert!(failing_loop().is_err());
        assert!(RESTORED.load(Ordering::SeqCst));
    }
}
