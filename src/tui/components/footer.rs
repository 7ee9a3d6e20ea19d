//! # Footer Component
//!
//! Bottom line of the screen. Shows the last status message (e.g. the
//! result of opening a link) when there is one, key hints otherwise.
//!
//! Status text never appears in the body, so errors from opening links
//! cannot be confused with the fetch error view.

use crate::core::view::FOOTER_TEXT;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const KEY_HINTS: &str = "\u{2191}/\u{2193} select \u{b7} Enter open \u{b7} q quit";

pub struct Footer<'a> {
    pub status_message: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(status_message: Option<&'a str>) -> Self {
        Self { status_message }
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let right = match self.status_message {
            Some(status) => Span::styled(status, Style::default().fg(Color::Cyan)),
            None => Span::styled(KEY_HINTS, dim),
        };
        let line = Line::from(vec![
            Span::styled(FOOTER_TEXT, dim),
            Span::styled(" | ", dim),
            right,
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
