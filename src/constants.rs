//! Application constants for the tourfolio TUI.
//!
//! This module provides centralized constants for UI dimensions, timing,
//! content defaults and display symbols used throughout the application.

use std::time::Duration;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of each package entry in the catalog list (in rows).
///
/// Each package entry displays:
/// - Line 1: Title and price
/// - Line 2: Location and duration
/// - Line 3: Empty spacer
pub const PACKAGE_ROW_HEIGHT: u16 = 3;

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the key-hint footer (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the home hero block including borders (in rows).
pub const HERO_HEIGHT: u16 = 8;

/// Line of the hero block, below the headline and media, holding the dots.
pub const HERO_DOTS_LINE: u16 = 4;

/// Height of the testimonials block including borders (in rows).
pub const TESTIMONIAL_HEIGHT: u16 = 6;

/// Width of one gallery thumbnail in the strip (in columns).
pub const THUMB_WIDTH: u16 = 18;

/// Gap between two gallery thumbnails (in columns).
pub const THUMB_GAP: u16 = 1;

/// Height of the gallery thumbnail strip including borders (in rows).
pub const STRIP_HEIGHT: u16 = 5;

// ============================================================================
// UI Dimensions Struct
// ============================================================================

/// Grouped UI dimension constants for layout calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Height of each package entry.
    pub package_row_height: u16,
}

impl Dimensions {
    /// Calculates the number of package rows that fit in a given height.
    #[must_use]
    pub const fn packages_per_view(&self, available_height: u16) -> usize {
        (available_height / self.package_row_height) as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            package_row_height: PACKAGE_ROW_HEIGHT,
        }
    }
}

// ============================================================================
// Timing Constants
// ============================================================================

/// Main loop tick; drives redraws, timers and strip momentum.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Ticks a toast stays on screen.
pub const TOAST_TICKS: u8 = 20;

/// Default hero auto-advance period.
pub const DEFAULT_AUTO_ADVANCE_SECS: u64 = 5;

/// Testimonials rotate slower than the hero.
pub const TESTIMONIAL_ADVANCE_SECS: u64 = 8;

/// Default timeout for content API requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Content Defaults
// ============================================================================

/// Content API used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Number of packages revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Image shown when the hero media cannot be loaded.
pub const FALLBACK_HERO_URL: &str = "/images/hero-fallback.jpg";

// ============================================================================
// Display Symbols
// ============================================================================

/// Marker for the active carousel item.
pub const ACTIVE_DOT: &str = "●";

/// Marker for inactive carousel items.
pub const INACTIVE_DOT: &str = "○";

/// Marker for video media.
pub const VIDEO_SYMBOL: &str = "▶";

/// Marker for image media.
pub const IMAGE_SYMBOL: &str = "▣";

// ============================================================================
// Tests
// ============================================================================
