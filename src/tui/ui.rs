use crate::core::view::{SECTION_TITLE, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardList, Footer, Header, LoadingIndicator};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

/// Draw one frame: header, section title, the phase body and the footer.
///
/// Exactly one of loading indicator, error banner or card list is drawn,
/// as decided by `view`.
pub fn draw_ui(frame: &mut Frame, view: &View, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(Header::HEIGHT), Length(1), Min(0), Length(1)]);
    let [header_area, section_area, body_area, footer_area] = layout.areas(frame.area());

    Header.render(frame, header_area);

    let section = Line::from(Span::styled(
        SECTION_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(section).alignment(Alignment::Center), section_area);

    match view {
        View::Loading => LoadingIndicator::new(spinner_frame).render(frame, body_area),
        View::Error(message) => draw_error_view(frame, body_area, message),
        View::Cards(cards) => CardList::new(&mut tui.card_list, cards).render(frame, body_area),
    }

    Footer::new(tui.status_message.as_deref()).render(frame, footer_area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let [row] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let [banner] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(row);

    let error_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, banner);
}
