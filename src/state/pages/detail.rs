//! Package detail page: summary, itinerary and gallery.

use crate::domain::{ContentError, GalleryImage, PackageDetail};
use crate::state::fetch::{FetchSlot, RequestTicket};
use crate::state::gallery::{GalleryEvent, ModalGallery};
use crate::state::overlay::Overlays;

#[derive(Debug)]
pub struct PackageDetailPage {
    pub id: String,
    pub slot: FetchSlot,
    pub gallery: ModalGallery<GalleryImage>,
    detail: Option<PackageDetail>,
    missing: bool,
    scroll: u16,
    overlays: Overlays,
}

impl PackageDetailPage {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slot: FetchSlot::new(),
            gallery: ModalGallery::new(Vec::new()),
            detail: None,
            missing: false,
            scroll: 0,
            overlays: Overlays::new(),
        }
    }

    /// Applies the detail. A 404 turns the page into its not-found state.
    pub fn apply_detail(
        &mut self,
        ticket: RequestTicket,
        result: Result<PackageDetail, ContentError>,
    ) -> bool {
        if !self.slot.is_current(ticket) {
            tracing::debug!("Dropping stale detail for package {}", self.id);
            return false;
        }

        let outcome = match result {
            Ok(detail) => {
                self.gallery = ModalGallery::new(detail.gallery.clone());
                self.detail = Some(detail);
                self.missing = false;
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("Package {} not found", self.id);
                self.missing = true;
                Err(e)
            }
            Err(e) => {
                tracing::warn!("Failed to load package {}: {e}", self.id);
                Err(e)
            }
        };
        self.scroll = 0;
        self.slot.complete(ticket, outcome)
    }

    #[must_use]
    pub fn detail(&self) -> Option<&PackageDetail> {
        self.detail.as_ref()
    }

    /// The API answered that this package does not exist.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    #[must_use]
    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    // ========================================================================
    // Body Scroll
    // ========================================================================

    #[must_use]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scrolls the body. Blocked while an overlay holds the scroll lock.
    pub fn scroll_by(&mut self, delta: i16) -> bool {
        if self.overlays.is_scroll_locked() {
            return false;
        }
        let next = self.scroll.saturating_add_signed(delta);
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    // ========================================================================
    // Gallery
    // ========================================================================

    /// Opens the gallery on the strip's selection, or the first image.
    pub fn open_gallery(&mut self) -> bool {
        let index = self.gallery.strip().selected().unwrap_or(0);
        self.gallery.open(index, &self.overlays)
    }

    pub fn gallery_event(&mut self, event: GalleryEvent) -> bool {
        self.gallery.handle(event, &self.overlays)
    }

    /// Delivers Escape to the topmost overlay. Returns `false` if none is open.
    pub fn escape(&mut self) -> bool {
        match self.overlays.topmost_escape() {
            Some(id) => self.gallery_event(GalleryEvent::EscapePressed(id)),
            None => false,
        }
    }

    pub fn teardown(&mut self) {
        self.slot.teardown();
        self.gallery.close();
    }
}

// ============================================================================
// Tests
// ============================================================================
