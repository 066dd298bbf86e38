//! Routes and navigation history.
//!
//! Routes mirror the agency site's paths so a route can be given on the
//! command line (`--route /packages/kerala`) and shown in the header.
//!
//! | Path                     | Route                          |
//! |--------------------------|--------------------------------|
//! | `/`                      | `Home`                         |
//! | `/packages`              | `Packages(All)`                |
//! | `/packages/{category}`   | `Packages(category)`           |
//! | `/package/{id}`          | `PackageDetail(id)`            |
//! | `/about` `/pricing` ...  | static pages                   |
//! | anything else            | `NotFound(path)`               |

use crate::domain::PackageCategory;

// ============================================================================
// Route
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Packages(PackageCategory),
    PackageDetail(String),
    About,
    Pricing,
    Services,
    Contact,
    NotFound(String),
}

impl Route {
    /// Top-level pages reachable with the number keys, in order.
    pub const TABS: [Route; 7] = [
        Route::Home,
        Route::Packages(PackageCategory::All),
        Route::Packages(PackageCategory::Kerala),
        Route::About,
        Route::Services,
        Route::Pricing,
        Route::Contact,
    ];

    /// Resolves a path. Query strings, fragments and trailing slashes are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["packages"] => Self::Packages(PackageCategory::All),
            ["packages", slug] => match PackageCategory::from_slug(&slug.to_lowercase()) {
                Some(category) => Self::Packages(category),
                None => Self::NotFound(path.to_string()),
            },
            ["package", id] => Self::PackageDetail((*id).to_string()),
            ["about"] => Self::About,
            ["pricing"] => Self::Pricing,
            ["services"] => Self::Services,
            ["contact"] => Self::Contact,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// The canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Packages(category) => match category.slug() {
                Some(slug) => format!("/packages/{slug}"),
                None => "/packages".to_string(),
            },
            Self::PackageDetail(id) => format!("/package/{id}"),
            Self::About => "/about".to_string(),
            Self::Pricing => "/pricing".to_string(),
            Self::Services => "/services".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Header label.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Home => "Home".to_string(),
            Self::Packages(PackageCategory::All) => "Packages".to_string(),
            Self::Packages(category) => format!("{category} Packages"),
            Self::PackageDetail(_) => "Package".to_string(),
            Self::About => "About".to_string(),
            Self::Pricing => "Pricing".to_string(),
            Self::Services => "Services".to_string(),
            Self::Contact => "Contact".to_string(),
            Self::NotFound(_) => "Not Found".to_string(),
        }
    }

    /// Position in [`Route::TABS`]. Detail pages belong to the packages tab.
    #[must_use]
    pub fn tab_index(&self) -> Option<usize> {
        match self {
            Self::PackageDetail(_) => Some(1),
            Self::NotFound(_) => None,
            route => Self::TABS.iter().position(|tab| tab == route).or(match route {
                Self::Packages(_) => Some(1),
                _ => None,
            }),
        }
    }

    /// The tab after this route's tab, wrapping around.
    #[must_use]
    pub fn next_tab(&self) -> Self {
        let next = self.tab_index().map_or(0, |index| (index + 1) % Self::TABS.len());
        Self::TABS[next].clone()
    }
}

// ============================================================================
// History
// ============================================================================

/// The current route plus the routes left behind to reach it.
#[derive(Debug, Clone, Default)]
pub struct History {
    current: Route,
    back: Vec<Route>,
}

impl History {
    #[must_use]
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            back: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigates to `route`. Pushing the current route again is a no-op.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.back.push(previous);
        true
    }

    /// Returns to the previous route, if any.
    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
