//! # Core Application Logic
//!
//! The fetch lifecycle and view-state machine. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState (state)    │
//!                    │  • Action / update()    │
//!                    │  • fetch + commit       │
//!                    │  • render() → View      │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Headless  │
//!             │  Adapter   │          │   (HTML)   │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ViewState` and the owning `Session`
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`fetch`]: the one-shot fetch and its commit step
//! - [`view`]: the pure renderer
//! - [`config`]: backend address and timeout resolution

pub mod action;
pub mod config;
pub mod fetch;
pub mod state;
pub mod view;
