//! Horizontally draggable thumbnail strip.
//!
//! Positions are in viewport units (terminal columns in the TUI). The strip
//! keeps two independent pieces of state: a scroll `offset` moved by drags,
//! momentum and keyboard scrolling, and a `selected` index moved only by
//! [`DraggableStrip::select`].

use std::time::Instant;

// ============================================================================
// Tuning
// ============================================================================

/// Fraction of an out-of-bounds drag that is applied to the offset.
const ELASTICITY: f32 = 0.35;

/// Pointer travel below which a press and release counts as a click.
const CLICK_SLOP: f32 = 1.0;

/// Exponential momentum decay rate, per second.
const MOMENTUM_DECAY: f32 = 4.0;

/// Momentum below this speed (units per second) stops.
const MIN_VELOCITY: f32 = 2.0;

// ============================================================================
// Draggable Strip
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Drag {
    origin_x: f32,
    origin_offset: f32,
    last_x: f32,
    last_time: Instant,
    velocity: f32,
    moved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DraggableStrip {
    item_count: usize,
    item_extent: f32,
    gap: f32,
    viewport_extent: f32,
    offset: f32,
    velocity: f32,
    last_tick: Option<Instant>,
    drag: Option<Drag>,
    selected: Option<usize>,
}

impl DraggableStrip {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the geometry. Unchanged geometry is a no-op.
    ///
    /// A strip that stops being draggable resets its offset to 0 but keeps
    /// a press in progress, so a click still resolves on release. The offset
    /// is re-clamped only between gestures; a selection past the new end is
    /// cleared.
    pub fn set_layout(&mut self, item_count: usize, item_extent: f32, gap: f32, viewport_extent: f32) {
        let item_extent = item_extent.max(0.0);
        let gap = gap.max(0.0);
        let viewport_extent = viewport_extent.max(0.0);
        if self.item_count == item_count
            && self.item_extent == item_extent
            && self.gap == gap
            && self.viewport_extent == viewport_extent
        {
            return;
        }

        self.item_count = item_count;
        self.item_extent = item_extent;
        self.gap = gap;
        self.viewport_extent = viewport_extent;
        self.selected = self.selected.filter(|index| *index < item_count);

        if !self.is_draggable() {
            self.offset = 0.0;
            self.velocity = 0.0;
            if let Some(drag) = self.drag.as_mut() {
                drag.origin_offset = 0.0;
            }
        } else if self.drag.is_none() {
            self.offset = self.clamp(self.offset);
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// `n * item + (n - 1) * gap`
    #[must_use]
    pub fn content_extent(&self) -> f32 {
        match self.item_count {
            0 => 0.0,
            n => n as f32 * self.item_extent + (n - 1) as f32 * self.gap,
        }
    }

    /// The lowest allowed offset; the highest is always 0.
    #[must_use]
    pub fn min_offset(&self) -> f32 {
        -(self.content_extent() - self.viewport_extent).max(0.0)
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.item_count > 1 && self.content_extent() > self.viewport_extent
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|drag| drag.moved)
    }

    #[must_use]
    pub fn is_in_bounds(&self) -> bool {
        (self.min_offset()..=0.0).contains(&self.offset)
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.min_offset(), 0.0)
    }

    fn rubber_band(&self, raw: f32) -> f32 {
        let min = self.min_offset();
        if raw > 0.0 {
            raw * ELASTICITY
        } else if raw < min {
            min + (raw - min) * ELASTICITY
        } else {
            raw
        }
    }

    // ========================================================================
    // Pointer Gestures
    // ========================================================================

    /// Starts a gesture at viewport coordinate `x`. Stops any momentum.
    pub fn pointer_down(&mut self, x: f32, now: Instant) {
        self.velocity = 0.0;
        self.drag = Some(Drag {
            origin_x: x,
            origin_offset: self.offset,
            last_x: x,
            last_time: now,
            velocity: 0.0,
            moved: false,
        });
    }

    /// Follows the pointer. Past either bound only a fraction of the travel applies.
    pub fn pointer_move(&mut self, x: f32, now: Instant) {
        let draggable = self.is_draggable();
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        if (x - drag.origin_x).abs() > CLICK_SLOP {
            drag.moved = true;
        }
        if !draggable {
            return;
        }

        let dt = now.saturating_duration_since(drag.last_time).as_secs_f32();
        if dt > 0.0 {
            drag.velocity = (x - drag.last_x) / dt;
        }
        drag.last_x = x;
        drag.last_time = now;

        let raw = drag.origin_offset + (x - drag.origin_x);
        self.offset = self.rubber_band(raw);
    }

    /// Ends the gesture.
    ///
    /// Out of bounds the offset snaps back to the nearest bound; in bounds
    /// the last pointer velocity carries on as momentum. Returns the item
    /// under the pointer when the gesture was a click rather than a drag.
    pub fn pointer_up(&mut self, now: Instant) -> Option<usize> {
        let drag = self.drag.take()?;

        if !drag.moved {
            return self.item_at(drag.origin_x);
        }

        if self.is_in_bounds() {
            self.velocity = drag.velocity;
            self.last_tick = Some(now);
        } else {
            self.offset = self.clamp(self.offset);
            self.velocity = 0.0;
        }
        None
    }

    /// Applies momentum. Returns whether the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.velocity == 0.0 || self.drag.is_some() {
            return false;
        }

        let last = self.last_tick.replace(now).unwrap_or(now);
        let dt = now.saturating_duration_since(last).as_secs_f32();
        if dt <= 0.0 {
            return false;
        }

        let before = self.offset;
        let target = self.offset + self.velocity * dt;
        self.offset = self.clamp(target);
        self.velocity *= (-MOMENTUM_DECAY * dt).exp();

        if self.offset != target || self.velocity.abs() < MIN_VELOCITY {
            self.velocity = 0.0;
        }
        self.offset != before
    }

    /// Keyboard scrolling. Clamped to bounds; no-op when not draggable.
    pub fn scroll_by(&mut self, delta: f32) {
        if !self.is_draggable() {
            return;
        }
        self.velocity = 0.0;
        self.offset = self.clamp(self.offset + delta);
    }

    // ========================================================================
    // Selection & Hit Testing
    // ========================================================================

    /// Selects `index`. Out-of-range indices are ignored. Never scrolls.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        self.selected = Some(index);
        true
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The item under viewport coordinate `x`, if any (gaps hit nothing).
    #[must_use]
    pub fn item_at(&self, x: f32) -> Option<usize> {
        if x < 0.0 || x >= self.viewport_extent {
            return None;
        }
        let pitch = self.item_extent + self.gap;
        if pitch <= 0.0 {
            return None;
        }

        let content_x = x - self.offset;
        if content_x < 0.0 {
            return None;
        }
        let index = (content_x / pitch).floor() as usize;
        let within = content_x - index as f32 * pitch;
        (index < self.item_count && within < self.item_extent).then_some(index)
    }

    /// Scrolls just enough to bring item `index` fully into the viewport.
    ///
    /// Separate from [`DraggableStrip::select`]: callers that move the
    /// selection by keyboard call this explicitly.
    pub fn scroll_into_view(&mut self, index: usize) {
        if !self.is_draggable() || index >= self.item_count {
            return;
        }
        let start = self.item_start(index);
        let end = start + self.item_extent;
        if start < 0.0 {
            self.scroll_by(-start);
        } else if end > self.viewport_extent {
            self.scroll_by(self.viewport_extent - end);
        }
    }

    /// Viewport start of item `index` at the current offset.
    #[must_use]
    pub fn item_start(&self, index: usize) -> f32 {
        self.offset + index as f32 * (self.item_extent + self.gap)
    }
}

// ============================================================================
// Tests
// ============================================================================
