use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::view::{Card, LINK_LABEL};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one tutorial card.
///
/// The title sits in the top border, the description fills the body and the
/// last line carries the outbound link. Selected cards get a cyan border.
///
/// Like the list it lives in, the card is created fresh each frame.
#[derive(Clone, Copy)]
pub struct TutorialCard<'a> {
    pub card: &'a Card,
    pub is_selected: bool,
}

impl<'a> TutorialCard<'a> {
    pub fn new(card: &'a Card, is_selected: bool) -> Self {
        Self { card, is_selected }
    }

    fn link_line(card: &Card) -> String {
        format!("{} {}", LINK_LABEL, card.link.href())
    }

    /// Height needed for `card` at `width`, without rendering it.
    ///
    /// The wrapping options match `Paragraph`'s word wrapping so the
    /// parent list can lay out its scroll canvas up front.
    pub fn calculate_height(card: &Card, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = || {
            textwrap::Options::new(content_width as usize)
                .break_words(true)
                .word_separator(textwrap::WordSeparator::AsciiSpace)
        };

        let description = card.description.trim();
        let description_lines = if description.is_empty() {
            0
        } else {
            textwrap::wrap(description, options()).len()
        };
        let link_lines = textwrap::wrap(&Self::link_line(card), options()).len().max(1);

        (description_lines + link_lines) as u16 + VERTICAL_OVERHEAD
    }
}

impl Widget for TutorialCard<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(Span::styled(
                self.card.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        let description = self.card.description.trim();
        if !description.is_empty() {
            lines.extend(description.lines().map(Line::from));
        }
        lines.push(Line::from(Span::styled(
            Self::link_line(self.card),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}
