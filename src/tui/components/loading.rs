//! # Loading Indicator
//!
//! A spinner and `Loading tutorials...`, centered in the body while the
//! single fetch is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::view::LOADING_TEXT;
use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &[
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280f}",
];

pub struct LoadingIndicator {
    spinner_frame: usize,
}

impl LoadingIndicator {
    pub fn new(spinner_frame: usize) -> Self {
        Self { spinner_frame }
    }

    fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl Component for LoadingIndicator {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = Line::from(vec![
            Span::styled(self.glyph(), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}
