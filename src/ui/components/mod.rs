//! Reusable UI components for the tourfolio TUI.
//!
//! Components are stateless: they take plain values and draw them, so every
//! page can compose them.
//!
//! - [`toast`] - Toast badge above the footer
//! - [`dots`] - Carousel position indicator
//! - [`strip`] - Draggable thumbnail strip

pub mod dots;
pub mod strip;
pub mod toast;

pub use dots::carousel_dots;
pub use strip::render_strip;
pub use toast::render_toast;
