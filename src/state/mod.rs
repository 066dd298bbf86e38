//! State management module for the tourfolio TUI.
//!
//! The state is split by lifetime:
//!
//! - [`History`] - which route is showing and how we got there
//! - [`Page`] - per-route state, rebuilt on every mount and torn down on leave
//! - [`UiState`] - help overlay, toasts, the error page, screen geometry
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! The reusable components the pages are built from live in their own
//! modules: [`rotator`], [`strip`], [`gallery`], [`filter_list`],
//! [`overlay`] and [`fetch`].
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                     App                       │
//! ├───────────┬──────────────────────┬────────────┤
//! │  History  │         Page         │  UiState   │
//! │  - route  │  - fetch slots       │  - help    │
//! │  - back   │  - rotators, strips  │  - toast   │
//! │           │  - overlays          │  - fatal   │
//! └───────────┴──────────────────────┴────────────┘
//! ```

use tokio::sync::mpsc;

use crate::client::ContentClient;
use crate::domain::{
    ContentError, Faq, MediaItem, PackageCategory, PackageDetail, PackageSummary, Testimonial,
};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod fetch;
pub mod filter_list;
pub mod gallery;
pub mod navigation;
pub mod overlay;
pub mod pages;
pub mod rotator;
pub mod strip;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use fetch::RequestTicket;
pub use filter_list::{ListView, PaginatedFilterList};
pub use gallery::GalleryEvent;
pub use navigation::{History, Route};
pub use pages::{HomePage, Page, PackageDetailPage, PackagesPage, StaticPage};
pub use strip::DraggableStrip;
pub use ui_state::{Toast, ToastKind, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Results sent from fetch tasks back to the main loop.
///
/// Each carries the [`RequestTicket`] of the slot that spawned it; the page
/// drops results whose ticket is no longer current.
#[derive(Debug)]
pub enum AppMessage {
    HeroLoaded {
        ticket: RequestTicket,
        result: Result<Vec<MediaItem>, ContentError>,
    },
    TestimonialsLoaded {
        ticket: RequestTicket,
        result: Result<Vec<Testimonial>, ContentError>,
    },
    FaqsLoaded {
        ticket: RequestTicket,
        result: Result<Vec<Faq>, ContentError>,
    },
    PackagesLoaded {
        ticket: RequestTicket,
        category: PackageCategory,
        result: Result<Vec<PackageSummary>, ContentError>,
    },
    PackageLoaded {
        ticket: RequestTicket,
        id: String,
        result: Result<PackageDetail, ContentError>,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Route to open instead of the home page.
    pub route: Option<Route>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Current route and back stack.
    pub history: History,

    /// State of the mounted route.
    pub page: Page,

    /// UI state - help, toasts, error page.
    pub ui: UiState,

    /// Effective configuration (file, environment and flags merged).
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // NOTE: Fetch tasks use `let _ = tx.send(...)`: the receiver is dropped
    // on shutdown and a lost result is harmless then.
    /// Sender for app messages (cloned for fetch tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Content API client.
    pub(crate) client: ContentClient,
}

impl App {
    /// The route currently showing.
    #[must_use]
    pub fn route(&self) -> &Route {
        self.history.current()
    }

    /// Base URL the client talks to, used to resolve relative media URLs.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.client.base_url()
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing, stale-result filtering
mod app_messages;

// Command execution, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
