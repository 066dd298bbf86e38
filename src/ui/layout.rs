//! Layout calculations for the tourfolio TUI.
//!
//! These are pure functions of the terminal area. The renderer and the
//! mouse handler both call them, so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::constants::{
    FOOTER_HEIGHT, HEADER_HEIGHT, HERO_DOTS_LINE, HERO_HEIGHT, STRIP_HEIGHT, TESTIMONIAL_HEIGHT,
};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Header area (brand, page tabs)
    pub header: Rect,
    /// Page body
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

/// Home page areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    /// Hero carousel
    pub hero: Rect,
    /// Testimonials, zero-height while hidden
    pub testimonials: Rect,
    /// FAQ accordion
    pub faqs: Rect,
}

/// Package detail page areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    /// Scrollable body: summary, itinerary, inclusions
    pub body: Rect,
    /// Thumbnail strip, absent when there is nothing to show
    pub strip: Option<Rect>,
}

/// Modal gallery areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryLayout {
    /// The modal box; clicks outside it hit the backdrop
    pub modal: Rect,
    /// The `[x]` close control on the modal's top border
    pub close: Rect,
    /// Current image panel
    pub image: Rect,
    /// Thumbnail strip inside the modal
    pub strip: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Splits the home page; the testimonials row collapses while hidden.
#[must_use]
pub fn calculate_home_layout(main: Rect, show_testimonials: bool) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(if show_testimonials { TESTIMONIAL_HEIGHT } else { 0 }),
            Constraint::Min(0),
        ])
        .split(main);

    HomeLayout {
        hero: chunks[0],
        testimonials: chunks[1],
        faqs: chunks[2],
    }
}

/// The carousel dot under `(column, row)` in the hero block.
///
/// Dots are drawn centered, two cells apiece ("● "), on a fixed line.
#[must_use]
pub fn hero_dot_at(hero: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let inner = hero.inner(Margin::new(1, 1));
    if count < 2 || row != inner.y + HERO_DOTS_LINE || !contains(inner, column, row) {
        return None;
    }
    let line_width = u16::try_from(count * 2).ok()?;
    let start = inner.x + (inner.width / 2).saturating_sub(line_width / 2);
    let offset = column.checked_sub(start)?;
    let index = usize::from(offset / 2);
    (offset % 2 == 0 && index < count).then_some(index)
}

/// Splits the detail page body, reserving the bottom rows for the strip.
#[must_use]
pub fn calculate_detail_layout(main: Rect, has_gallery: bool) -> DetailLayout {
    if !has_gallery || main.height <= STRIP_HEIGHT + 3 {
        return DetailLayout {
            body: main,
            strip: None,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STRIP_HEIGHT)])
        .split(main);

    DetailLayout {
        body: chunks[0],
        strip: Some(chunks[1]),
    }
}

/// Calculates the gallery modal over the whole screen.
#[must_use]
pub fn calculate_gallery_layout(screen: Rect) -> GalleryLayout {
    let modal = centered_rect(90, 85, screen);
    let close = Rect::new(
        modal.right().saturating_sub(5),
        modal.y,
        3.min(modal.width),
        1.min(modal.height),
    );

    let inner = modal.inner(Margin::new(1, 1));
    let strip_height = STRIP_HEIGHT.min(inner.height / 2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(strip_height)])
        .split(inner);

    GalleryLayout {
        modal,
        close,
        image: chunks[0],
        strip: chunks[1],
    }
}

/// The row of thumbnails inside a bordered strip.
#[must_use]
pub fn strip_viewport(strip: Rect) -> Rect {
    strip.inner(Margin::new(1, 1))
}

/// Creates a centered rectangle of the given percentage size.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Centers a fixed-size popup, clamped to `area`.
#[must_use]
pub fn centered_popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Whether the cell at `(column, row)` lies inside `area`.
#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

// ============================================================================
// Tests
// ============================================================================
