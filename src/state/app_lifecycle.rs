//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Mounting routes and spawning their fetches
//! - The periodic tick that drives timers and momentum

use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::client::ContentClient;
use crate::constants::{TESTIMONIAL_ADVANCE_SECS, TICK_RATE};
use crate::domain::ContentError;
use crate::tui::Tui;
use crate::ui;
use crate::ui::layout::{
    calculate_app_layout, calculate_detail_layout, calculate_gallery_layout, strip_viewport,
};

use super::{
    App, AppConfig, AppMessage, HomePage, History, Page, PackageDetailPage, PackagesPage, Route,
    StartupOptions, StaticPage, UiState,
};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance. Nothing is fetched until [`App::run`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built from `config`.
    pub fn new(config: AppConfig, startup_options: StartupOptions) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let client = ContentClient::from_config(&config).map_err(ContentError::into_report)?;

        let route = startup_options.route.unwrap_or_default();
        let page = build_page(&route, &config, Instant::now());

        Ok(Self {
            history: History::new(route),
            page,
            ui: UiState::new(),
            config,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            client,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.update_screen(terminal)?;
        self.fetch_current();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse, Instant::now());
                    }
                    Event::Resize(width, height) => {
                        self.ui.screen = Rect::new(0, 0, width, height);
                        self.sync_layout();
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.update_screen(terminal)?;
                self.tick(Instant::now());
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            tokio::task::yield_now().await;
        }

        self.page.teardown();
        Ok(())
    }

    fn update_screen(&mut self, terminal: &Tui) -> Result<()> {
        let size = terminal.size()?;
        self.ui.screen = Rect::new(0, 0, size.width, size.height);
        Ok(())
    }

    // ========================================================================
    // Mounting
    // ========================================================================

    /// Pushes `route` and mounts it. Navigating to the current route is a no-op.
    pub(crate) fn navigate(&mut self, route: Route) {
        if self.history.push(route) {
            self.mount_current();
        }
    }

    /// Goes back one route. Returns `false` at the start of history.
    pub(crate) fn go_back(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        self.mount_current();
        true
    }

    /// Tears down the mounted page, then builds and fetches the current route.
    pub(crate) fn mount_current(&mut self) {
        self.page.teardown();
        self.page = build_page(self.history.current(), &self.config, Instant::now());
        tracing::debug!("Mounted {}", self.history.current().path());
        self.fetch_current();
        self.sync_layout();
    }

    /// Spawns every fetch the mounted page needs.
    pub(crate) fn fetch_current(&mut self) {
        match &mut self.page {
            Page::Home(page) => {
                let (client, tx) = (self.client.clone(), self.message_tx.clone());
                page.hero_slot.spawn(move |ticket| async move {
                    let result = client.get_hero_media().await;
                    let _ = tx.send(AppMessage::HeroLoaded { ticket, result });
                });

                let (client, tx) = (self.client.clone(), self.message_tx.clone());
                page.testimonials_slot.spawn(move |ticket| async move {
                    let result = client.get_testimonials().await;
                    let _ = tx.send(AppMessage::TestimonialsLoaded { ticket, result });
                });

                let (client, tx) = (self.client.clone(), self.message_tx.clone());
                page.faqs_slot.spawn(move |ticket| async move {
                    let result = client.get_faqs().await;
                    let _ = tx.send(AppMessage::FaqsLoaded { ticket, result });
                });
            }
            Page::Packages(page) => {
                let (client, tx) = (self.client.clone(), self.message_tx.clone());
                let category = page.category;
                page.slot.spawn(move |ticket| async move {
                    let result = client.get_packages(category).await;
                    let _ = tx.send(AppMessage::PackagesLoaded {
                        ticket,
                        category,
                        result,
                    });
                });
            }
            Page::Detail(page) => {
                let (client, tx) = (self.client.clone(), self.message_tx.clone());
                let id = page.id.clone();
                page.slot.spawn(move |ticket| async move {
                    let result = client.get_package(&id).await;
                    let _ = tx.send(AppMessage::PackageLoaded { ticket, id, result });
                });
            }
            Page::Static(_) | Page::NotFound(_) => {}
        }
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// Advances timers, strip momentum and the toast countdown.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.ui.tick_toast();
        self.sync_layout();

        match &mut self.page {
            Page::Home(page) => {
                page.tick(now);
            }
            Page::Detail(page) => {
                page.gallery.strip_mut().tick(now);
            }
            Page::Packages(_) | Page::Static(_) | Page::NotFound(_) => {}
        }
    }

    /// Feeds the strip the width it is drawn at, so hit-testing matches.
    pub(crate) fn sync_layout(&mut self) {
        let Page::Detail(page) = &mut self.page else {
            return;
        };

        let strip = if page.gallery.is_open() {
            Some(calculate_gallery_layout(self.ui.screen).strip)
        } else {
            let main = calculate_app_layout(self.ui.screen).main;
            calculate_detail_layout(main, !page.gallery.is_empty()).strip
        };

        let width = strip.map_or(0, |area| strip_viewport(area).width);
        page.gallery.set_viewport(width);
    }
}

/// Builds the page for `route` without starting any fetch.
fn build_page(route: &Route, config: &AppConfig, now: Instant) -> Page {
    match route {
        Route::Home => Page::Home(Box::new(HomePage::new(
            config.auto_advance(),
            Duration::from_secs(TESTIMONIAL_ADVANCE_SECS),
            now,
        ))),
        Route::Packages(category) => Page::Packages(PackagesPage::new(*category, config.page_size)),
        Route::PackageDetail(id) => Page::Detail(Box::new(PackageDetailPage::new(id.clone()))),
        Route::About => Page::Static(StaticPage::About),
        Route::Services => Page::Static(StaticPage::Services),
        Route::Pricing => Page::Static(StaticPage::Pricing),
        Route::Contact => Page::Static(StaticPage::Contact),
        Route::NotFound(path) => Page::NotFound(path.clone()),
    }
}
