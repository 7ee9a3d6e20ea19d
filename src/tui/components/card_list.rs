//! # CardList Component
//!
//! Scrollable, selectable column of tutorial cards.
//!
//! ## Responsibilities
//!
//! - Lay the cards out top to bottom in backend order
//! - Track keyboard selection and keep the selected card on screen
//! - Cache card heights per width so scrolling never re-wraps text
//!
//! ## Architecture
//!
//! `CardList` is a transient component (created each frame) that wraps
//! `&'a mut CardListState` (persistent state) and the cards produced by
//! `core::view::render` (props). Selection and scrolling live in the state
//! so they survive redraws.
//!
//! Only the cards that intersect the viewport are drawn. They go into a
//! `ScrollView` canvas sized to just those cards, and the scrollbar is drawn
//! separately against the full column height. The column height saturates at
//! `u16::MAX` rows; cards past that point are never shown.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::Card;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::TutorialCard;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// The user asked to open the card at this index.
    Open(usize),
}

/// Selection, scroll and layout state for the card list.
/// Must be persisted in the parent TuiState.
pub struct CardListState {
    /// Row of the column shown at the top of the viewport.
    pub offset: u16,
    /// Currently selected card, if any cards are shown.
    pub selected: Option<usize>,
    pub heights: Vec<u16>,
    /// Running totals of `heights`; entry `i` is the bottom edge of card `i`.
    pub prefix_heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    card_count: usize,
    content_width: u16,
}

impl Default for CardListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardListState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            selected: None,
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            viewport_height: 0,
            card_count: 0,
            content_width: 0,
        }
    }

    /// Height of the whole card column, saturating at `u16::MAX` rows.
    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    fn max_offset(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    fn card_top(&self, idx: usize) -> u16 {
        if idx == 0 {
            0
        } else {
            self.prefix_heights[idx - 1]
        }
    }

    pub fn select_next(&mut self) {
        if self.card_count == 0 {
            return;
        }
        let next = match self.selected {
            Some(i) => (i + 1).min(self.card_count - 1),
            None => 0,
        };
        self.selected = Some(next);
        self.scroll_to_selected();
    }

    pub fn select_prev(&mut self) {
        if self.card_count == 0 {
            return;
        }
        let prev = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(prev);
        self.scroll_to_selected();
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows);
        self.clamp_scroll();
    }

    fn page(&self) -> u16 {
        self.viewport_height.max(1)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }

        let item_top = self.card_top(idx);
        let item_bottom = self.prefix_heights[idx];

        if item_top < self.offset {
            self.offset = item_top;
        } else if item_bottom > self.offset.saturating_add(self.viewport_height) {
            self.offset = item_bottom
                .saturating_sub(self.viewport_height)
                .min(item_top);
        }
        self.clamp_scroll();
    }

    /// Indices of the cards that intersect the viewport at `self.offset`.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let viewport_end = self.offset.saturating_add(self.viewport_height);
        let start = self
            .prefix_heights
            .partition_point(|&end| end <= self.offset);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < viewport_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());
        start..end.max(start)
    }

    /// Recompute heights when the card count or width changed.
    fn sync_layout(&mut self, cards: &[Card], content_width: u16) {
        if self.card_count == cards.len()
            && self.content_width == content_width
            && self.heights.len() == cards.len()
        {
            return;
        }

        self.heights = cards
            .iter()
            .map(|card| TutorialCard::calculate_height(card, content_width))
            .collect();
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
        self.card_count = cards.len();
        self.content_width = content_width;

        self.selected = match self.selected {
            _ if cards.is_empty() => None,
            Some(i) => Some(i.min(cards.len() - 1)),
            None => Some(0),
        };
    }
}

/// EventHandler lives on `CardListState` because `CardList` is recreated
/// every frame and cannot hold selection across events.
impl EventHandler for CardListState {
    type Event = CardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::SelectNext => {
                self.select_next();
                None
            }
            TuiEvent::SelectPrev => {
                self.select_prev();
                None
            }
            TuiEvent::Activate => self.selected.map(CardEvent::Open),
            TuiEvent::ScrollUp => {
                self.scroll_up(1);
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_down(1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_up(self.page());
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_down(self.page());
                None
            }
            TuiEvent::Quit | TuiEvent::Resize => None,
        }
    }
}

/// Scrollable card view component.
/// Created fresh each frame with references to state and data.
pub struct CardList<'a> {
    pub state: &'a mut CardListState,
    pub cards: &'a [Card],
}

impl<'a> CardList<'a> {
    pub fn new(state: &'a mut CardListState, cards: &'a [Card]) -> Self {
        Self { state, cards }
    }
}

impl Component for CardList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        self.state.sync_layout(self.cards, content_width);
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        // The canvas holds only the visible cards; window_top is its first
        // row in column coordinates.
        let visible = self.state.visible_range();
        let window_top = if visible.is_empty() {
            self.state.offset
        } else {
            self.state.card_top(visible.start)
        };
        let window_bottom = visible
            .clone()
            .last()
            .map_or(window_top, |i| self.state.prefix_heights[i]);

        let mut scroll_view =
            ScrollView::new(Size::new(content_width, window_bottom - window_top))
                .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
                .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for i in visible {
            let top = self.state.card_top(i);
            let height = self.state.prefix_heights[i] - top;
            // Cards past a saturated column end have no rows left.
            if height == 0 {
                continue;
            }
            let card_rect = Rect::new(0, top - window_top, content_width, height);
            let is_selected = self.state.selected == Some(i);
            scroll_view.render_widget(TutorialCard::new(&self.cards[i], is_selected), card_rect);
        }

        let mut window_state = ScrollViewState::default();
        window_state.set_offset(Position {
            x: 0,
            y: self.state.offset - window_top,
        });
        let list_area = Rect {
            width: content_width,
            ..area
        };
        frame.render_stateful_widget(scroll_view, list_area, &mut window_state);

        let mut scrollbar_state = ScrollbarState::new(usize::from(self.state.max_offset()) + 1)
            .position(usize::from(self.state.offset))
            .viewport_content_length(usize::from(area.height));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}
