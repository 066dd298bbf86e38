//! Modal gallery: a full-screen view of one image with sibling navigation.
//!
//! The gallery is a two-state machine. While open it holds one scroll-lock
//! guard and one Escape listener on the page's [`Overlays`]; closing or
//! dropping the gallery releases both. Re-opening while already open only
//! moves `current`, so the lock is never toggled off and back on.

use crate::constants::{THUMB_GAP, THUMB_WIDTH};
use crate::domain::{HasMediaUrl, retain_displayable};

use super::overlay::{ListenerGuard, ListenerId, Overlays, ScrollLockGuard};
use super::strip::DraggableStrip;

// ============================================================================
// State & Events
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Closed,
    Open { current: usize },
}

/// User intents the gallery reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A thumbnail in the strip was clicked. Opens, or swaps while open.
    ThumbnailClicked(usize),
    /// Click outside the modal content.
    BackdropClicked,
    /// The modal's close control.
    CloseClicked,
    /// Escape was pressed and delivered to this listener.
    EscapePressed(ListenerId),
    Next,
    Previous,
}

/// Resources held while the modal is open. Dropping them releases both.
#[derive(Debug)]
struct OpenHandles {
    _lock: ScrollLockGuard,
    listener: ListenerGuard,
}

// ============================================================================
// Modal Gallery
// ============================================================================

#[derive(Debug)]
pub struct ModalGallery<T> {
    items: Vec<T>,
    state: GalleryState,
    handles: Option<OpenHandles>,
    strip: DraggableStrip,
}

impl<T: HasMediaUrl> ModalGallery<T> {
    /// Builds a gallery. Items without a URL are dropped here and never reach
    /// the strip or the modal.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let items = retain_displayable(items);
        let mut strip = DraggableStrip::new();
        strip.set_layout(items.len(), f32::from(THUMB_WIDTH), f32::from(THUMB_GAP), 0.0);
        Self {
            items,
            state: GalleryState::Closed,
            handles: None,
            strip,
        }
    }
}

impl<T> ModalGallery<T> {
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> GalleryState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, GalleryState::Open { .. })
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            GalleryState::Open { current } => Some(current),
            GalleryState::Closed => None,
        }
    }

    /// The item shown in the modal, `None` while closed.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current_index().and_then(|index| self.items.get(index))
    }

    /// The Escape listener this gallery registered while open.
    #[must_use]
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.handles.as_ref().map(|handles| handles.listener.id())
    }

    #[must_use]
    pub fn strip(&self) -> &DraggableStrip {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut DraggableStrip {
        &mut self.strip
    }

    /// Re-lays out the thumbnail strip for a viewport `extent` columns wide.
    pub fn set_viewport(&mut self, extent: u16) {
        self.strip.set_layout(
            self.items.len(),
            f32::from(THUMB_WIDTH),
            f32::from(THUMB_GAP),
            f32::from(extent),
        );
    }

    fn show(&mut self, index: usize) {
        self.state = GalleryState::Open { current: index };
        self.strip.select(index);
    }

    /// Opens the modal on `index`.
    ///
    /// From Closed this takes one scroll-lock hold and one Escape listener.
    /// While already open it only moves to `index`. Out-of-range is ignored.
    pub fn open(&mut self, index: usize, overlays: &Overlays) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if self.handles.is_none() {
            self.handles = Some(OpenHandles {
                _lock: overlays.scroll_lock.acquire(),
                listener: overlays.escape.register(),
            });
            tracing::debug!(
                "Gallery opened at {index} ({} overlays open)",
                overlays.escape.len()
            );
        }
        self.show(index);
        true
    }

    /// Shows `index` while open. Ignored while closed or out of range.
    pub fn swap(&mut self, index: usize) -> bool {
        if !self.is_open() || index >= self.items.len() {
            return false;
        }
        self.show(index);
        true
    }

    /// Closes the modal and releases its lock and listener.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = GalleryState::Closed;
        self.handles = None;
        tracing::debug!("Gallery closed");
        true
    }

    pub fn next(&mut self) -> bool {
        match self.state {
            GalleryState::Open { current } if self.items.len() > 1 => {
                self.show((current + 1) % self.items.len());
                true
            }
            _ => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        let len = self.items.len();
        match self.state {
            GalleryState::Open { current } if len > 1 => {
                self.show((current + len - 1) % len);
                true
            }
            _ => false,
        }
    }

    /// Applies an event. Returns whether the gallery changed.
    pub fn handle(&mut self, event: GalleryEvent, overlays: &Overlays) -> bool {
        match event {
            GalleryEvent::ThumbnailClicked(index) if self.is_open() => self.swap(index),
            GalleryEvent::ThumbnailClicked(index) => self.open(index, overlays),
            GalleryEvent::BackdropClicked | GalleryEvent::CloseClicked => self.close(),
            GalleryEvent::EscapePressed(id) if self.listener_id() == Some(id) => self.close(),
            GalleryEvent::EscapePressed(_) => false,
            GalleryEvent::Next => self.next(),
            GalleryEvent::Previous => self.previous(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
