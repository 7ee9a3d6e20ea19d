use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    SelectNext,
    SelectPrev,
    /// Open the selected card's link.
    Activate,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {e}");
            return None;
        }
    }

    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            warn!("Event read failed: {e}");
            None
        }
    }
}

fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code, key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) | (_, KeyCode::Tab) => {
                    Some(TuiEvent::SelectNext)
                }
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) | (_, KeyCode::BackTab) => {
                    Some(TuiEvent::SelectPrev)
                }
                (_, KeyCode::Enter) | (_, KeyCode::Char('o')) => Some(TuiEvent::Activate),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            translate(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(TuiEvent::SelectNext)
        );
        assert_eq!(
            translate(key(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(TuiEvent::SelectPrev)
        );
        assert_eq!(
            translate(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Activate)
        );
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(100, 40)), Some(TuiEvent::Resize));
    }
}
