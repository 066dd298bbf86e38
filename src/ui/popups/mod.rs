//! Popup UI components for the tourfolio TUI.
//!
//! Popups are overlays drawn on top of the page. The modal gallery has its
//! own module under `pages` since it carries page state.

pub mod help;

pub use help::render as render_help;
