//! # Header Component
//!
//! The hero banner at the top of every screen: page title and subtitle,
//! centered, with a rule underneath.
//!
//! Purely presentational. It renders the same thing in every phase, so the
//! phase-specific content lives entirely in the body below it.

use crate::core::view::{PAGE_SUBTITLE, PAGE_TITLE};
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    /// Two text lines plus the bottom rule.
    pub const HEIGHT: u16 = 3;
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                PAGE_TITLE,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                PAGE_SUBTITLE,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let header = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().add_modifier(Modifier::DIM)),
            );

        frame.render_widget(header, area);
    }
}
