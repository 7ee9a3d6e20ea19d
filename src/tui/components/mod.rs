//! # TUI Components
//!
//! UI components for the terminal page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: page title and subtitle
//! - `Footer`: copyright line plus status or key hints
//! - `LoadingIndicator`: spinner shown while the fetch is in flight
//! - `TutorialCard`: one card (title, description, link)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CardList`: scrollable, selectable column of cards. Its state lives in
//!   `CardListState`, which also turns key events into `CardEvent`s.
//!
//! ## Props-Based Data Flow
//!
//! Components receive the `View` produced by `core::view::render` (or parts of
//! it) as props. None of them read `ViewState` directly, so the phase
//! precedence is decided in one place.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── header.rs      (title + subtitle)
//! ├── footer.rs      (copyright + status)
//! ├── loading.rs     (spinner)
//! ├── card.rs        (single card)
//! └── card_list.rs   (scrollable card container)
//! ```

pub mod card;
pub mod card_list;
pub mod footer;
pub mod header;
pub mod loading;

pub use card::TutorialCard;
pub use card_list::{CardEvent, CardList, CardListState};
pub use footer::Footer;
pub use header::Header;
pub use loading::LoadingIndicator;
