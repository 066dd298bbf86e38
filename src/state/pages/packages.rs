//! Package catalog page for one category.

use crate::domain::{ContentError, PackageCategory, PackageSummary};
use crate::state::fetch::{FetchSlot, RequestTicket};
use crate::state::filter_list::PaginatedFilterList;

#[derive(Debug)]
pub struct PackagesPage {
    pub category: PackageCategory,
    pub list: PaginatedFilterList<PackageSummary>,
    pub slot: FetchSlot,
    cursor: usize,
    /// Input buffer while the search box has focus.
    search_input: Option<String>,
}

impl PackagesPage {
    #[must_use]
    pub fn new(category: PackageCategory, page_size: usize) -> Self {
        Self {
            category,
            list: PaginatedFilterList::new(Vec::new(), page_size),
            slot: FetchSlot::new(),
            cursor: 0,
            search_input: None,
        }
    }

    /// Applies the catalog. A failure shows the quiet empty state.
    pub fn apply_packages(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<PackageSummary>, ContentError>,
    ) -> bool {
        if !self.slot.is_current(ticket) {
            tracing::debug!("Dropping stale {} packages", self.category);
            return false;
        }

        let (items, outcome) = match result {
            Ok(items) => (items, Ok(())),
            Err(e) => {
                tracing::warn!("Failed to load {} packages: {e}", self.category);
                (Vec::new(), Err(e))
            }
        };
        self.list.set_items(items);
        self.cursor = 0;
        self.slot.complete(ticket, outcome)
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The package under the cursor.
    #[must_use]
    pub fn selected(&self) -> Option<&PackageSummary> {
        self.list.visible().get(self.cursor).copied()
    }

    /// Moves the cursor by `delta` within the visible items.
    pub fn move_cursor(&mut self, delta: isize) {
        let visible = self.list.visible().len();
        let Some(last) = visible.checked_sub(1) else {
            self.cursor = 0;
            return;
        };
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Reveals another page; the cursor stays where it is.
    pub fn load_more(&mut self) -> bool {
        self.list.load_more()
    }

    // ========================================================================
    // Search
    // ========================================================================

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.search_input.is_some()
    }

    #[must_use]
    pub fn search_input(&self) -> Option<&str> {
        self.search_input.as_deref()
    }

    /// Focuses the search box, seeded with the current query.
    pub fn begin_search(&mut self) {
        self.search_input = Some(self.list.query().to_string());
    }

    /// Filters as the user types.
    pub fn push_search_char(&mut self, c: char) {
        if let Some(input) = self.search_input.as_mut() {
            input.push(c);
            let query = input.clone();
            self.apply_query(query);
        }
    }

    pub fn pop_search_char(&mut self) {
        if let Some(input) = self.search_input.as_mut() {
            input.pop();
            let query = input.clone();
            self.apply_query(query);
        }
    }

    /// Leaves the search box, keeping the query.
    pub fn commit_search(&mut self) {
        self.search_input = None;
    }

    /// Leaves the search box and drops the query.
    pub fn cancel_search(&mut self) {
        self.search_input = None;
        self.clear_search();
    }

    pub fn clear_search(&mut self) {
        self.list.clear_query();
        self.cursor = 0;
    }

    fn apply_query(&mut self, query: String) {
        self.list.set_query(query);
        self.cursor = 0;
    }

    pub fn teardown(&mut self) {
        self.slot.teardown();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::PackageMother;

    fn loaded(count: usize, page_size: usize) -> PackagesPage {
        let mut page = PackagesPage::new(PackageCategory::All, page_size);
        let ticket = page.slot.begin();
        page.apply_packages(ticket, Ok(PackageMother::numbered(count)));
        page
    }

    #[test]
    fn test_failure_is_quiet_empty_state() {
        let mut page = PackagesPage::new(PackageCategory::Kerala, 6);
        let ticket = page.slot.begin();
        assert!(page.apply_packages(ticket, Err(ContentError::status("/api/packages/kerala", 500))));
        assert!(page.list.items().is_empty());
        assert!(page.slot.state().error().is_some());
        assert!(page.selected().is_none());
    }

    #[test]
    fn test_cursor_stays_within_visible() {
        let mut page = loaded(10, 4);
        page.move_cursor(10);
        assert_eq!(page.cursor(), 3);

        page.load_more();
        page.move_cursor(10);
        assert_eq!(page.cursor(), 7);
        assert_eq!(page.selected().map(|p| p.id.as_str()), Some("p8"));

        page.move_cursor(-20);
        assert_eq!(page.cursor(), 0);
    }

    #[test]
    fn test_typing_filters_and_resets() {
        let mut page = loaded(12, 4);
        page.load_more();
        page.move_cursor(5);

        page.begin_search();
        for c in "city 1".chars() {
            page.push_search_char(c);
        }
        assert_eq!(page.list.page(), 1);
        assert_eq!(page.cursor(), 0);
        // "City 1", "City 10", "City 11", "City 12"
        assert_eq!(page.list.filtered().len(), 4);

        page.pop_search_char();
        assert_eq!(page.list.query(), "city ");
        page.commit_search();
        assert!(!page.is_searching());
        assert_eq!(page.list.query(), "city ");
    }

    #[test]
    fn test_cancel_search_clears_query() {
        let mut page = loaded(5, 4);
        page.begin_search();
        page.push_search_char('9');
        assert!(page.list.filtered().is_empty());

        page.cancel_search();
        assert_eq!(page.list.query(), "");
        assert_eq!(page.list.filtered().len(), 5);
    }

    #[test]
    fn test_typing_without_focus_is_ignored() {
        let mut page = loaded(3, 4);
        page.push_search_char('x');
        assert_eq!(page.list.query(), "");
    }

    #[test]
    fn test_stale_catalog_ignored_after_teardown() {
        let mut page = PackagesPage::new(PackageCategory::All, 6);
        let ticket = page.slot.begin();
        page.teardown();
        assert!(!page.apply_packages(ticket, Ok(PackageMother::numbered(3))));
        assert!(page.list.items().is_empty());
    }
}
