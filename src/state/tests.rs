//! Tests for the App: mounting, message routing, dismissal order and the
//! error boundary.

use std::time::Instant;

use color_eyre::eyre::eyre;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::{App, AppConfig, AppMessage, Page, Route, StartupOptions};
use crate::commands::{AppCommand, InputContext};
use crate::domain::{ContentError, PackageCategory, PackageDetail};
use crate::test_utils::{GalleryMother, HomeMother, MediaMother, PackageMother};
use crate::ui::layout::{calculate_gallery_layout, strip_viewport};

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test App on `route` pointed at an address nothing listens on.
///
/// Nothing is spawned until a test navigates; the current-thread test
/// runtime never polls those tasks because no test here awaits.
fn create_test_app(route: Route) -> App {
    let config = AppConfig::default().with_api_url(Some("http://127.0.0.1:9".to_string()));
    let mut app = App::new(config, StartupOptions { route: Some(route) })
        .expect("test app should build");
    app.ui.screen = Rect::new(0, 0, 100, 40);
    app
}

fn packages_page(app: &mut App) -> &mut super::PackagesPage {
    match &mut app.page {
        Page::Packages(page) => page,
        other => panic!("expected packages page, got {other:?}"),
    }
}

fn detail_page(app: &mut App) -> &mut super::PackageDetailPage {
    match &mut app.page {
        Page::Detail(page) => page,
        other => panic!("expected detail page, got {other:?}"),
    }
}

/// Mounts a detail page for the Kerala package with its gallery loaded.
fn app_with_loaded_detail() -> App {
    app_with_detail(PackageMother::kerala_detail())
}

fn app_with_detail(detail: PackageDetail) -> App {
    let mut app = create_test_app(Route::PackageDetail("b".to_string()));
    app.fetch_current();
    let ticket = detail_page(&mut app).slot.current_ticket().unwrap();
    app.apply_message(
        AppMessage::PackageLoaded {
            ticket,
            id: "b".to_string(),
            result: Ok(detail),
        },
        Instant::now(),
    );
    app
}

fn left(kind: fn(MouseButton) -> MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: kind(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// ========================================================================
// Startup & Input Context
// ========================================================================

#[tokio::test]
async fn test_new_starts_on_requested_route_without_fetching() {
    let app = create_test_app(Route::Packages(PackageCategory::Kerala));
    assert_eq!(app.route(), &Route::Packages(PackageCategory::Kerala));
    assert!(!app.page.is_loading());
    assert_eq!(app.api_base_url(), "http://127.0.0.1:9");
}

#[tokio::test]
async fn test_input_context_priority() {
    let mut app = create_test_app(Route::Home);
    assert_eq!(app.get_input_context(), InputContext::Main);

    app.ui.set_fatal("boom");
    assert_eq!(app.get_input_context(), InputContext::ErrorPage);

    app.ui.toggle_help();
    assert_eq!(app.get_input_context(), InputContext::HelpPopup);
}

#[tokio::test]
async fn test_input_context_follows_page() {
    let mut app = create_test_app(Route::Packages(PackageCategory::All));
    assert_eq!(app.get_input_context(), InputContext::PackageList);

    app.dispatch(AppCommand::OpenSearch);
    assert_eq!(app.get_input_context(), InputContext::SearchInput);

    let mut app = app_with_loaded_detail();
    assert_eq!(app.get_input_context(), InputContext::PackageDetail);
    app.dispatch(AppCommand::OpenGallery);
    assert_eq!(app.get_input_context(), InputContext::Gallery);
}

// ========================================================================
// Navigation
// ========================================================================

#[tokio::test]
async fn test_go_to_tab_mounts_and_fetches() {
    let mut app = create_test_app(Route::Home);
    app.dispatch(AppCommand::GoToTab(2));

    assert_eq!(app.route(), &Route::Packages(PackageCategory::Kerala));
    assert!(packages_page(&mut app).slot.is_loading());
    assert!(app.history.can_go_back());

    app.dispatch(AppCommand::GoToTab(99));
    assert_eq!(app.route(), &Route::Packages(PackageCategory::Kerala));
}

#[tokio::test]
async fn test_leaving_page_tears_down_its_fetches() {
    let mut app = create_test_app(Route::Home);
    app.fetch_current();
    assert!(app.page.is_loading());

    app.dispatch(AppCommand::GoToTab(3));
    assert!(matches!(app.page, Page::Static(_)));
    assert!(!app.page.is_loading());
}

#[tokio::test]
async fn test_select_opens_package_detail() {
    let mut app = create_test_app(Route::Packages(PackageCategory::All));
    app.fetch_current();
    let ticket = packages_page(&mut app).slot.current_ticket().unwrap();
    app.apply_message(
        AppMessage::PackagesLoaded {
            ticket,
            category: PackageCategory::All,
            result: Ok(vec![PackageMother::goa(), PackageMother::kerala()]),
        },
        Instant::now(),
    );

    app.dispatch(AppCommand::MoveDown);
    app.dispatch(AppCommand::Select);

    assert_eq!(app.route(), &Route::PackageDetail("b".to_string()));
    assert!(app.page.is_loading());
}

#[tokio::test]
async fn test_arrows_cycle_categories_on_packages_page() {
    let mut app = create_test_app(Route::Packages(PackageCategory::All));
    app.dispatch(AppCommand::Next);
    assert_eq!(app.route(), &Route::Packages(PackageCategory::International));
    app.dispatch(AppCommand::Previous);
    app.dispatch(AppCommand::Previous);
    assert_eq!(app.route(), &Route::Packages(PackageCategory::Customised));
}

// ========================================================================
// Messages
// ========================================================================

#[tokio::test]
async fn test_packages_result_applies_only_to_matching_category() {
    let mut app = create_test_app(Route::Packages(PackageCategory::Kerala));
    app.fetch_current();
    let ticket = packages_page(&mut app).slot.current_ticket().unwrap();

    app.message_tx
        .send(AppMessage::PackagesLoaded {
            ticket,
            category: PackageCategory::All,
            result: Ok(PackageMother::numbered(3)),
        })
        .unwrap();
    app.process_messages();
    assert!(packages_page(&mut app).list.items().is_empty());

    app.message_tx
        .send(AppMessage::PackagesLoaded {
            ticket,
            category: PackageCategory::Kerala,
            result: Ok(PackageMother::numbered(3)),
        })
        .unwrap();
    app.process_messages();
    assert_eq!(packages_page(&mut app).list.items().len(), 3);
}

#[tokio::test]
async fn test_result_from_previous_mount_is_dropped() {
    let mut app = create_test_app(Route::Packages(PackageCategory::All));
    app.fetch_current();
    let stale = packages_page(&mut app).slot.current_ticket().unwrap();

    app.dispatch(AppCommand::Retry);
    app.apply_message(
        AppMessage::PackagesLoaded {
            ticket: stale,
            category: PackageCategory::All,
            result: Ok(PackageMother::numbered(2)),
        },
        Instant::now(),
    );

    let page = packages_page(&mut app);
    assert!(page.list.items().is_empty());
    assert!(page.slot.is_loading());
}

#[tokio::test]
async fn test_home_results_fill_sections() {
    let mut app = create_test_app(Route::Home);
    app.fetch_current();
    let Page::Home(page) = &app.page else {
        panic!("expected home page");
    };
    let (hero, testimonials, faqs) = (
        page.hero_slot.current_ticket().unwrap(),
        page.testimonials_slot.current_ticket().unwrap(),
        page.faqs_slot.current_ticket().unwrap(),
    );

    let now = Instant::now();
    app.apply_message(AppMessage::HeroLoaded { ticket: hero, result: Ok(MediaMother::items(3)) }, now);
    app.apply_message(
        AppMessage::TestimonialsLoaded {
            ticket: testimonials,
            result: Err(ContentError::status("/api/testimonials", 500)),
        },
        now,
    );
    app.apply_message(AppMessage::FaqsLoaded { ticket: faqs, result: Ok(HomeMother::faqs()) }, now);

    let Page::Home(page) = &app.page else {
        panic!("expected home page");
    };
    assert_eq!(page.hero.len(), 3);
    assert!(!page.show_testimonials());
    assert!(page.show_faqs());
    assert!(!app.page.is_loading());
}

#[tokio::test]
async fn test_detail_not_found_marks_page_missing() {
    let mut app = create_test_app(Route::PackageDetail("gone".to_string()));
    app.fetch_current();
    let ticket = detail_page(&mut app).slot.current_ticket().unwrap();
    app.apply_message(
        AppMessage::PackageLoaded {
            ticket,
            id: "gone".to_string(),
            result: Err(ContentError::not_found("package", "gone")),
        },
        Instant::now(),
    );
    assert!(detail_page(&mut app).is_missing());
}

// ========================================================================
// Dismiss & Gallery
// ========================================================================

#[tokio::test]
async fn test_dismiss_closes_gallery_before_going_back() {
    let mut app = create_test_app(Route::Home);
    app.navigate(Route::PackageDetail("b".to_string()));
    let ticket = detail_page(&mut app).slot.current_ticket().unwrap();
    app.apply_message(
        AppMessage::PackageLoaded {
            ticket,
            id: "b".to_string(),
            result: Ok(PackageMother::kerala_detail()),
        },
        Instant::now(),
    );

    app.dispatch(AppCommand::OpenGallery);
    assert!(app.page.is_scroll_locked());

    app.dispatch(AppCommand::Dismiss);
    assert!(!app.page.is_scroll_locked());
    assert_eq!(app.route(), &Route::PackageDetail("b".to_string()));

    app.dispatch(AppCommand::Dismiss);
    assert_eq!(app.route(), &Route::Home);
}

#[tokio::test]
async fn test_scroll_blocked_while_gallery_open() {
    let mut app = app_with_loaded_detail();
    app.dispatch(AppCommand::MoveDown);
    assert_eq!(detail_page(&mut app).scroll(), 1);

    app.dispatch(AppCommand::OpenGallery);
    app.dispatch(AppCommand::MoveDown);
    assert_eq!(detail_page(&mut app).scroll(), 1);
}

#[tokio::test]
async fn test_arrows_step_thumbnails_then_gallery() {
    let mut app = app_with_loaded_detail();
    app.dispatch(AppCommand::Next);
    app.dispatch(AppCommand::Next);
    assert_eq!(detail_page(&mut app).gallery.strip().selected(), Some(1));

    app.dispatch(AppCommand::Select);
    assert_eq!(detail_page(&mut app).gallery.current_index(), Some(1));

    app.dispatch(AppCommand::Next);
    app.dispatch(AppCommand::Next);
    assert_eq!(detail_page(&mut app).gallery.current_index(), Some(0));
}

#[tokio::test]
async fn test_current_media_url_follows_gallery() {
    let mut app = app_with_loaded_detail();
    assert_eq!(
        app.current_media_url().as_deref(),
        Some("https://cdn.example/kerala.jpg")
    );

    app.dispatch(AppCommand::OpenGallery);
    let expected = detail_page(&mut app).gallery.current().map(|image| image.url.clone());
    assert_eq!(app.current_media_url(), expected);
}

// ========================================================================
// Error Boundary
// ========================================================================

#[tokio::test]
async fn test_failed_command_shows_error_page_and_retry_clears_it() {
    let mut app = create_test_app(Route::Packages(PackageCategory::All));
    app.ui.toggle_help();

    app.handle_command_result(Err(eyre!("browser unavailable")));
    assert!(!app.ui.show_help);
    assert_eq!(app.ui.fatal.as_deref(), Some("browser unavailable"));
    assert_eq!(app.get_input_context(), InputContext::ErrorPage);

    app.dispatch(AppCommand::Retry);
    assert!(!app.ui.has_fatal());
    assert!(app.page.is_loading());
}

#[tokio::test]
async fn test_dismiss_on_error_page_goes_back() {
    let mut app = create_test_app(Route::Home);
    app.navigate(Route::About);
    app.ui.set_fatal("boom");

    app.dispatch(AppCommand::Dismiss);
    assert!(!app.ui.has_fatal());
    assert_eq!(app.route(), &Route::Home);
}

#[tokio::test]
async fn test_quit_sets_exit() {
    let mut app = create_test_app(Route::Home);
    app.dispatch(AppCommand::Quit);
    assert!(app.exit);
}

// ========================================================================
// Mouse
// ========================================================================

#[tokio::test]
async fn test_clicking_hero_dot_jumps() {
    let mut app = create_test_app(Route::Home);
    app.fetch_current();
    let Page::Home(page) = &app.page else {
        panic!("expected home page");
    };
    let ticket = page.hero_slot.current_ticket().unwrap();
    let now = Instant::now();
    app.apply_message(AppMessage::HeroLoaded { ticket, result: Ok(MediaMother::items(3)) }, now);

    // hero inner is 98 wide from x=1; three dots start at 1 + 49 - 3, on row 8
    app.handle_mouse_input(left(MouseEventKind::Down, 49, 8), now);
    let Page::Home(page) = &app.page else {
        panic!("expected home page");
    };
    assert_eq!(page.hero.active_index(), Some(1));
}

#[tokio::test]
async fn test_thumbnail_click_opens_and_backdrop_closes() {
    let mut app = app_with_loaded_detail();
    let now = Instant::now();

    // strip viewport: rows 35..38, from x=1
    app.handle_mouse_input(left(MouseEventKind::Down, 5, 36), now);
    app.handle_mouse_input(left(MouseEventKind::Up, 5, 36), now);
    assert!(detail_page(&mut app).gallery.is_open());
    assert_eq!(detail_page(&mut app).gallery.current_index(), Some(0));
    assert_eq!(app.get_input_context(), InputContext::Gallery);

    app.handle_mouse_input(left(MouseEventKind::Down, 0, 0), now);
    assert!(!detail_page(&mut app).gallery.is_open());
    assert!(!app.page.is_scroll_locked());
}

#[tokio::test]
async fn test_strip_overshoot_survives_tick_until_release() {
    let detail = PackageDetail::new(PackageMother::kerala(), Vec::new(), GalleryMother::images(12));
    let mut app = app_with_detail(detail);
    app.dispatch(AppCommand::OpenGallery);
    let viewport = strip_viewport(calculate_gallery_layout(app.ui.screen).strip);
    let (x, y) = (viewport.x + 2, viewport.y);
    let now = Instant::now();

    app.handle_mouse_input(left(MouseEventKind::Down, x, y), now);
    app.handle_mouse_input(left(MouseEventKind::Drag, x + 20, y), now);
    let overshoot = detail_page(&mut app).gallery.strip().offset();
    assert!(overshoot > 0.0);

    app.tick(now);
    let strip = detail_page(&mut app).gallery.strip();
    assert!(strip.is_dragging());
    assert_eq!(strip.offset(), overshoot);

    app.handle_mouse_input(left(MouseEventKind::Up, x + 20, y), now);
    assert_eq!(detail_page(&mut app).gallery.strip().offset(), 0.0);
    assert!(detail_page(&mut app).gallery.is_open());
}

#[tokio::test]
async fn test_open_without_media_shows_failure_toast() {
    let mut app = create_test_app(Route::About);
    app.dispatch(AppCommand::OpenInBrowser);

    let toast = app.ui.toast().unwrap();
    assert_eq!(toast.kind, super::ToastKind::Failure);
    assert_eq!(toast.message, "Nothing to open here");
    assert!(!app.ui.has_fatal());
}
