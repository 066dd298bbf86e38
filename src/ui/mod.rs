//! UI rendering module for the tourfolio TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of the page body and the overlays drawn above it.
//!
//! # Module Structure
//!
//! - `pages` - Page bodies (home, catalog, detail, gallery, static copy)
//! - `popups` - Overlays (help)
//! - `components` - Reusable UI components (toast, carousel dots)
//! - `layout` - Layout calculations shared with mouse hit-testing
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod pages;
pub mod popups;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, Page};

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draw order, bottom to top:
/// 1. Header, page body (or the error page), footer
/// 2. The modal gallery when open
/// 3. The help popup
/// 4. Toast notifications
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, app);
    match &app.ui.fatal {
        Some(message) => pages::fallback::render_error(frame, layout.main, message),
        None => render_page(app, frame, layout.main),
    }
    footer::render(frame, layout.footer, app);

    if let (Page::Detail(page), None) = (&app.page, &app.ui.fatal) {
        if page.gallery.is_open() {
            pages::gallery::render(frame, size, page);
        }
    }

    if app.ui.show_help {
        popups::render_help(frame, size);
    }

    if let Some(toast) = app.ui.toast() {
        components::render_toast(frame, size, toast);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    match &app.page {
        Page::Home(page) => pages::home::render(frame, area, page),
        Page::Packages(page) => pages::packages::render(frame, area, page),
        Page::Detail(page) => pages::detail::render(frame, area, page),
        Page::Static(page) => pages::info::render(frame, area, *page),
        Page::NotFound(path) => pages::fallback::render_not_found(frame, area, path),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Instant;

    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::domain::PackageCategory;
    use crate::state::{AppConfig, AppMessage, Route, StartupOptions, ToastKind};
    use crate::test_utils::PackageMother;

    /// The buffer's symbols, one line per row.
    pub(crate) fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area();
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn app_on(route: Route) -> App {
        App::new(
            AppConfig::default(),
            StartupOptions { route: Some(route) },
        )
        .unwrap()
    }

    #[test]
    fn test_render_home_shell() {
        let app = app_on(Route::Home);
        let content = draw(&app, 100, 30);
        assert!(content.contains("tourfolio"));
        assert!(content.contains("1 Home"));
        assert!(content.contains("q:Quit"));
    }

    #[test]
    fn test_render_not_found_route() {
        let app = app_on(Route::parse("/nowhere"));
        let content = draw(&app, 80, 24);
        assert!(content.contains("Page not found"));
        assert!(content.contains("/nowhere"));
    }

    #[test]
    fn test_error_page_replaces_body() {
        let mut app = app_on(Route::About);
        app.ui.set_fatal("Failed to open the browser");
        let content = draw(&app, 80, 24);
        assert!(content.contains("Something went wrong"));
        assert!(content.contains("Failed to open the browser"));
        assert!(!content.contains("Who we are"));
        assert!(content.contains("r:Retry"));
    }

    #[test]
    fn test_help_and_toast_draw_on_top() {
        let mut app = app_on(Route::Home);
        app.ui.toggle_help();
        app.ui.show_toast(ToastKind::Success, "Opened in browser");
        let content = draw(&app, 100, 40);
        assert!(content.contains("Help (? to close)"));
        assert!(content.contains("✓  Opened in browser"));
    }

    #[tokio::test]
    async fn test_gallery_overlay_draws_over_detail() {
        let mut app = app_on(Route::PackageDetail("b".to_string()));
        app.ui.screen = Rect::new(0, 0, 100, 40);
        app.fetch_current();
        let Page::Detail(page) = &app.page else {
            panic!("expected detail page");
        };
        let ticket = page.slot.current_ticket().unwrap();
        app.apply_message(
            AppMessage::PackageLoaded {
                ticket,
                id: "b".to_string(),
                result: Ok(PackageMother::kerala_detail()),
            },
            Instant::now(),
        );
        app.dispatch(crate::commands::AppCommand::OpenGallery);

        let content = draw(&app, 100, 40);
        assert!(content.contains("[x]"));
        assert!(content.contains("1 / 3"));
    }

    #[test]
    fn test_packages_tab_highlight_follows_category() {
        let app = app_on(Route::Packages(PackageCategory::Kerala));
        let content = draw(&app, 100, 30);
        assert!(content.contains("3 Kerala"));
        assert!(content.contains("Loading packages") || content.contains("No packages"));
    }
}
