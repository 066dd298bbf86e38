//! Searchable list revealed one page at a time.
//!
//! The only stored state is the collection, the query and the page number.
//! The filtered and visible subsets are derived on every call, so they can
//! never drift from the inputs.

use crate::domain::PackageSummary;

// ============================================================================
// Searchable
// ============================================================================

/// Records that can be matched against a free-text query.
pub trait Searchable {
    /// The fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match. `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for PackageSummary {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }
}

// ============================================================================
// List View
// ============================================================================

/// What a list should render right now.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a, T> {
    /// Nothing was loaded at all.
    Empty,
    /// Items exist but none match `query`.
    NoResults { query: String },
    /// At least one match.
    Items {
        visible: Vec<&'a T>,
        has_more: bool,
        total: usize,
    },
}

// ============================================================================
// Paginated Filter List
// ============================================================================

#[derive(Debug, Clone)]
pub struct PaginatedFilterList<T> {
    items: Vec<T>,
    query: String,
    page: usize,
    page_size: usize,
}

impl<T: Searchable> PaginatedFilterList<T> {
    /// A zero page size is treated as 1.
    #[must_use]
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The query as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Items matching the query, in original order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&T> {
        let needle = self.needle();
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    /// The first `page_size * page` filtered items.
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        let mut filtered = self.filtered();
        filtered.truncate(self.page_size.saturating_mul(self.page));
        filtered
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.filtered().len() > self.page_size.saturating_mul(self.page)
    }

    /// Replaces the query and returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Reveals one more page. Returns `false` once everything is visible.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Replaces the collection and returns to the first page. The query stays.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
    }

    #[must_use]
    pub fn view(&self) -> ListView<'_, T> {
        if self.items.is_empty() {
            return ListView::Empty;
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            return ListView::NoResults {
                query: self.query.trim().to_string(),
            };
        }

        let total = filtered.len();
        let shown = self.page_size.saturating_mul(self.page).min(total);
        let mut visible = filtered;
        visible.truncate(shown);
        ListView::Items {
            visible,
            has_more: shown < total,
            total,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
