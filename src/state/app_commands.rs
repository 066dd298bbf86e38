//! Command execution and input handling for the tourfolio application.
//!
//! This module handles keyboard and mouse input, mapping them to commands,
//! and executing those commands to update application state. A command that
//! fails replaces the page with the error fallback instead of ending the app.

use std::time::Instant;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{App, GalleryEvent, Page, PackageDetailPage, Route, ToastKind};
use crate::commands::{AppCommand, InputContext, map_key};
use crate::constants::{THUMB_GAP, THUMB_WIDTH};
use crate::domain::PackageCategory;
use crate::ui::layout::{
    calculate_app_layout, calculate_detail_layout, calculate_gallery_layout, calculate_home_layout,
    contains, hero_dot_at, strip_viewport,
};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.dispatch(command);
    }

    /// Determines the current input context based on application state.
    ///
    /// Help and the error page take the keyboard first, then an open
    /// gallery, then the search box, then the page itself.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }
        if self.ui.has_fatal() {
            return InputContext::ErrorPage;
        }

        match &self.page {
            Page::Detail(page) if page.gallery.is_open() => InputContext::Gallery,
            Page::Detail(_) => InputContext::PackageDetail,
            Page::Packages(page) if page.is_searching() => InputContext::SearchInput,
            Page::Packages(_) => InputContext::PackageList,
            Page::Home(_) | Page::Static(_) | Page::NotFound(_) => InputContext::Main,
        }
    }

    /// Executes `command` behind the error boundary.
    pub(crate) fn dispatch(&mut self, command: AppCommand) {
        let result = self.execute_command(command);
        self.handle_command_result(result);
    }

    /// Shows the error page for a failed command.
    pub(crate) fn handle_command_result(&mut self, result: Result<()>) {
        if let Err(error) = result {
            tracing::warn!("Command failed: {error:#}");
            self.ui.show_help = false;
            self.ui.set_fatal(format!("{error:#}"));
        }
    }

    /// Executes an application command.
    ///
    /// # Errors
    /// Returns an error when an action outside the app fails, such as
    /// handing a URL to the browser.
    pub(crate) fn execute_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Retry => {
                self.ui.clear_fatal();
                self.mount_current();
            }
            AppCommand::ToggleHelp => {
                self.ui.toggle_help();
            }

            // === Navigation ===
            AppCommand::GoToTab(index) => {
                if let Some(route) = Route::TABS.get(index) {
                    self.navigate(route.clone());
                }
            }
            AppCommand::NextTab => {
                self.navigate(self.history.current().next_tab());
            }
            AppCommand::Dismiss => {
                self.handle_dismiss();
            }
            AppCommand::MoveUp => {
                self.move_vertical(-1);
            }
            AppCommand::MoveDown => {
                self.move_vertical(1);
            }
            AppCommand::Previous => {
                self.step(false);
            }
            AppCommand::Next => {
                self.step(true);
            }
            AppCommand::Select => {
                self.select();
            }

            // === Catalog ===
            AppCommand::OpenSearch => {
                if let Page::Packages(page) = &mut self.page {
                    page.begin_search();
                }
            }
            AppCommand::LoadMore => {
                if let Page::Packages(page) = &mut self.page {
                    page.load_more();
                }
            }
            AppCommand::ClearSearch => {
                if let Page::Packages(page) = &mut self.page {
                    page.clear_search();
                }
            }

            // === Search Input ===
            AppCommand::TypeChar(c) => {
                if let Page::Packages(page) = &mut self.page {
                    page.push_search_char(c);
                }
            }
            AppCommand::Backspace => {
                if let Page::Packages(page) = &mut self.page {
                    page.pop_search_char();
                }
            }
            AppCommand::SubmitSearch => {
                if let Page::Packages(page) = &mut self.page {
                    page.commit_search();
                }
            }
            AppCommand::CancelSearch => {
                if let Page::Packages(page) = &mut self.page {
                    page.cancel_search();
                }
            }

            // === Media ===
            AppCommand::OpenGallery => {
                if let Page::Detail(page) = &mut self.page {
                    if page.open_gallery() {
                        self.sync_layout();
                    }
                }
            }
            AppCommand::OpenInBrowser => {
                self.open_in_browser()?;
            }

            AppCommand::Noop => {}
        }
        Ok(())
    }

    /// Closes the topmost layer: help, then the error page, then the
    /// topmost overlay. With nothing open, goes back one route.
    pub(crate) fn handle_dismiss(&mut self) {
        if self.ui.show_help {
            self.ui.toggle_help();
            return;
        }
        if self.ui.clear_fatal() {
            if !self.go_back() {
                self.mount_current();
            }
            return;
        }
        if let Page::Detail(page) = &mut self.page {
            if page.escape() {
                self.sync_layout();
                return;
            }
        }
        self.go_back();
    }

    fn move_vertical(&mut self, delta: isize) {
        match &mut self.page {
            Page::Home(page) => page.move_faq_cursor(delta),
            Page::Packages(page) => page.move_cursor(delta),
            Page::Detail(page) => {
                page.scroll_by(if delta < 0 { -1 } else { 1 });
            }
            Page::Static(_) | Page::NotFound(_) => {}
        }
    }

    fn step(&mut self, forward: bool) {
        match &mut self.page {
            Page::Home(page) => {
                if forward {
                    page.hero.advance();
                } else {
                    page.hero.retreat();
                }
            }
            Page::Packages(page) => {
                let category = if forward {
                    page.category.next()
                } else {
                    previous_category(page.category)
                };
                self.navigate(Route::Packages(category));
            }
            Page::Detail(page) if page.gallery.is_open() => {
                let event = if forward {
                    GalleryEvent::Next
                } else {
                    GalleryEvent::Previous
                };
                page.gallery_event(event);
            }
            Page::Detail(page) => step_thumbnail(page, forward),
            Page::Static(_) | Page::NotFound(_) => {}
        }
    }

    fn select(&mut self) {
        match &mut self.page {
            Page::Home(page) => {
                let cursor = page.faq_cursor();
                page.toggle_faq(cursor);
            }
            Page::Packages(page) => {
                if let Some(id) = page.selected().map(|package| package.id.clone()) {
                    self.navigate(Route::PackageDetail(id));
                }
            }
            Page::Detail(page) => {
                if page.open_gallery() {
                    self.sync_layout();
                }
            }
            Page::NotFound(_) => {
                self.navigate(Route::Home);
            }
            Page::Static(_) => {}
        }
    }

    // ========================================================================
    // Browser
    // ========================================================================

    /// The media URL the user is looking at, if any.
    #[must_use]
    pub fn current_media_url(&self) -> Option<String> {
        let url = match &self.page {
            Page::Home(page) => page.hero.active().map(|media| media.url.as_str()),
            Page::Packages(page) => page.selected().map(|package| package.image_url.as_str()),
            Page::Detail(page) => page
                .gallery
                .current()
                .map(|image| image.url.as_str())
                .or_else(|| page.detail().map(|detail| detail.summary.image_url.as_str())),
            Page::Static(_) | Page::NotFound(_) => None,
        }?;

        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        Some(resolve_url(self.api_base_url(), url))
    }

    fn open_in_browser(&mut self) -> Result<()> {
        let Some(url) = self.current_media_url() else {
            self.ui.show_toast(ToastKind::Failure, "Nothing to open here");
            return Ok(());
        };

        open::that(&url).wrap_err_with(|| format!("Failed to open {url} in the browser"))?;
        self.ui.show_toast(ToastKind::Success, "Opened in browser");
        Ok(())
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Handles wheel scrolling, thumbnail drags and clicks, and the modal's
    /// backdrop and close control.
    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.handle_mouse_scroll(-1),
            MouseEventKind::ScrollDown => self.handle_mouse_scroll(1),
            MouseEventKind::Down(MouseButton::Left)
            | MouseEventKind::Drag(MouseButton::Left)
            | MouseEventKind::Up(MouseButton::Left) => self.handle_pointer(mouse, now),
            _ => {}
        }
    }

    fn handle_mouse_scroll(&mut self, delta: isize) {
        if self.ui.show_help || self.ui.has_fatal() {
            return;
        }
        match &mut self.page {
            Page::Detail(page) if page.gallery.is_open() => {
                let pitch = f32::from(THUMB_WIDTH + THUMB_GAP);
                page.gallery.strip_mut().scroll_by(-(delta as f32) * pitch);
            }
            _ => self.move_vertical(delta),
        }
    }

    fn handle_pointer(&mut self, mouse: MouseEvent, now: Instant) {
        if self.ui.show_help || self.ui.has_fatal() {
            return;
        }
        self.sync_layout();

        let screen = self.ui.screen;
        let (column, row) = (mouse.column, mouse.row);
        let pressed = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));

        if let Page::Home(page) = &mut self.page {
            let main = calculate_app_layout(screen).main;
            let hero = calculate_home_layout(main, page.show_testimonials()).hero;
            if pressed {
                if let Some(index) = hero_dot_at(hero, page.hero.len(), column, row) {
                    page.hero.jump_to(index);
                }
            }
            return;
        }
        let Page::Detail(page) = &mut self.page else {
            return;
        };

        let strip = if page.gallery.is_open() {
            let layout = calculate_gallery_layout(screen);
            if pressed && contains(layout.close, column, row) {
                page.gallery_event(GalleryEvent::CloseClicked);
                self.sync_layout();
                return;
            }
            if pressed && !contains(layout.modal, column, row) {
                page.gallery_event(GalleryEvent::BackdropClicked);
                self.sync_layout();
                return;
            }
            Some(layout.strip)
        } else {
            let main = calculate_app_layout(screen).main;
            calculate_detail_layout(main, !page.gallery.is_empty()).strip
        };

        let Some(viewport) = strip.map(strip_viewport) else {
            return;
        };
        let x = f32::from(column) - f32::from(viewport.x);

        match mouse.kind {
            MouseEventKind::Down(_) => {
                if contains(viewport, column, row) {
                    page.gallery.strip_mut().pointer_down(x, now);
                }
            }
            MouseEventKind::Drag(_) => {
                page.gallery.strip_mut().pointer_move(x, now);
            }
            MouseEventKind::Up(_) => {
                if let Some(index) = page.gallery.strip_mut().pointer_up(now) {
                    page.gallery_event(GalleryEvent::ThumbnailClicked(index));
                    self.sync_layout();
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Selects the neighbouring thumbnail and scrolls it into view.
fn step_thumbnail(page: &mut PackageDetailPage, forward: bool) {
    let Some(last) = page.gallery.len().checked_sub(1) else {
        return;
    };
    let strip = page.gallery.strip_mut();
    let index = match (strip.selected(), forward) {
        (None, _) => 0,
        (Some(index), true) => (index + 1).min(last),
        (Some(index), false) => index.saturating_sub(1),
    };
    if strip.select(index) {
        strip.scroll_into_view(index);
    }
}

fn previous_category(category: PackageCategory) -> PackageCategory {
    let all = PackageCategory::ALL;
    let index = all.iter().position(|c| *c == category).unwrap_or(0);
    all[(index + all.len() - 1) % all.len()]
}

/// Resolves a media URL the API gave relative to its own origin.
fn resolve_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    let base = base.trim_end_matches('/');
    match url.strip_prefix('/') {
        Some(path) => format!("{base}/{path}"),
        None => format!("{base}/{url}"),
    }
}
