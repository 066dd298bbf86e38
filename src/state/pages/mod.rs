//! Per-route page state.
//!
//! A [`Page`] is created when its route is mounted and torn down when the
//! route is left, which aborts its fetches and stops its timers.

mod detail;
mod home;
mod info;
mod packages;

pub use detail::PackageDetailPage;
pub use home::HomePage;
pub use info::{Section, StaticPage};
pub use packages::PackagesPage;

// ============================================================================
// Page
// ============================================================================

#[derive(Debug)]
pub enum Page {
    Home(Box<HomePage>),
    Packages(PackagesPage),
    Detail(Box<PackageDetailPage>),
    Static(StaticPage),
    NotFound(String),
}

impl Page {
    /// Stops timers and aborts fetches.
    pub fn teardown(&mut self) {
        match self {
            Self::Home(page) => page.teardown(),
            Self::Packages(page) => page.teardown(),
            Self::Detail(page) => page.teardown(),
            Self::Static(_) | Self::NotFound(_) => {}
        }
    }

    /// Whether an overlay on this page holds the scroll lock.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        match self {
            Self::Detail(page) => page.overlays().is_scroll_locked(),
            _ => false,
        }
    }

    /// Whether any of the page's fetches is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        match self {
            Self::Home(page) => {
                page.hero_slot.is_loading()
                    || page.testimonials_slot.is_loading()
                    || page.faqs_slot.is_loading()
            }
            Self::Packages(page) => page.slot.is_loading(),
            Self::Detail(page) => page.slot.is_loading(),
            Self::Static(_) | Self::NotFound(_) => false,
        }
    }
}
