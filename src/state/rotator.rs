//! Cyclic rotator with a deadline-based auto-advance timer.
//!
//! Drives the hero carousel and the testimonial strip. The timer is not a
//! background task: the main loop calls [`MediaRotator::tick`] on every
//! frame and the rotator advances once its deadline has passed.

use std::time::{Duration, Instant};

// ============================================================================
// Media Rotator
// ============================================================================

/// A bounded ordered collection with one active item.
///
/// Invariant: `active_index()` is `None` exactly when the collection is
/// empty, and otherwise `< len()`.
#[derive(Debug, Clone)]
pub struct MediaRotator<T> {
    items: Vec<T>,
    active: Option<usize>,
    period: Duration,
    deadline: Option<Instant>,
    torn_down: bool,
}

impl<T> MediaRotator<T> {
    /// Mounts a rotator. The timer starts when there is more than one item.
    #[must_use]
    pub fn new(items: Vec<T>, period: Duration, now: Instant) -> Self {
        let active = (!items.is_empty()).then_some(0);
        let deadline = (items.len() > 1).then(|| now + period);
        Self {
            items,
            active,
            period,
            deadline,
            torn_down: false,
        }
    }

    /// Replaces the collection.
    ///
    /// The active index survives if still in range. The timer is armed when
    /// the collection grows past one item and disarmed when it shrinks to one
    /// or none; otherwise it keeps its current deadline.
    pub fn set_items(&mut self, items: Vec<T>, now: Instant) {
        let was_rotating = self.items.len() > 1;
        self.items = items;

        self.active = match self.active {
            _ if self.items.is_empty() => None,
            Some(index) if index < self.items.len() => Some(index),
            _ => Some(0),
        };

        let rotating = self.items.len() > 1;
        if self.torn_down || !rotating {
            self.deadline = None;
        } else if !was_rotating {
            self.deadline = Some(now + self.period);
        }
    }

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
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.active.and_then(|index| self.items.get(index))
    }

    /// Whether the auto-advance timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Moves to the next item, wrapping around. Returns whether it moved.
    pub fn advance(&mut self) -> bool {
        let len = self.items.len();
        match self.active {
            Some(index) if len > 1 => {
                self.active = Some((index + 1) % len);
                true
            }
            _ => false,
        }
    }

    /// Moves to the previous item, wrapping around. Returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        let len = self.items.len();
        match self.active {
            Some(index) if len > 1 => {
                self.active = Some((index + len - 1) % len);
                true
            }
            _ => false,
        }
    }

    /// Activates `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.items.len() || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Advances once if the deadline has passed, then re-arms one period out.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                self.advance()
            }
            _ => false,
        }
    }

    /// Stops the timer for good. Called when the owning view unmounts.
    pub fn teardown(&mut self) {
        self.deadline = None;
        self.torn_down = true;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PERIOD: Duration = Duration::from_secs(5);

    fn rotator(len: usize) -> (MediaRotator<usize>, Instant) {
        let now = Instant::now();
        (MediaRotator::new((0..len).collect(), PERIOD, now), now)
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(7)]
    fn test_advance_len_times_is_identity(#[case] len: usize) {
        let (mut rotator, _) = rotator(len);
        rotator.jump_to(len / 2);
        let start = rotator.active_index();

        for _ in 0..len {
            rotator.advance();
        }
        assert_eq!(rotator.active_index(), start);

        for _ in 0..len {
            rotator.retreat();
        }
        assert_eq!(rotator.active_index(), start);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_short_collections_never_move(#[case] len: usize) {
        let (mut rotator, now) = rotator(len);
        let start = rotator.active_index();

        assert!(!rotator.advance());
        assert!(!rotator.retreat());
        assert!(!rotator.tick(now + PERIOD * 3));
        assert_eq!(rotator.active_index(), start);
        assert!(!rotator.is_running());
    }

    #[test]
    fn test_empty_has_no_active_item() {
        let (rotator, _) = rotator(0);
        assert_eq!(rotator.active_index(), None);
        assert!(rotator.active().is_none());
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let (mut rotator, _) = rotator(3);
        assert!(rotator.retreat());
        assert_eq!(rotator.active(), Some(&2));
        assert!(rotator.advance());
        assert_eq!(rotator.active(), Some(&0));
    }

    #[test]
    fn test_jump_ignores_out_of_range() {
        let (mut rotator, _) = rotator(3);
        assert!(!rotator.jump_to(3));
        assert!(rotator.jump_to(2));
        assert!(!rotator.jump_to(2));
        assert_eq!(rotator.active_index(), Some(2));
    }

    #[test]
    fn test_tick_advances_once_per_deadline() {
        let (mut rotator, start) = rotator(3);

        assert!(!rotator.tick(start + PERIOD / 2));
        assert!(rotator.tick(start + PERIOD));
        assert_eq!(rotator.active_index(), Some(1));

        // Re-armed from the tick, not from mount.
        assert!(!rotator.tick(start + PERIOD + PERIOD / 2));
        assert!(rotator.tick(start + PERIOD * 2));
        assert_eq!(rotator.active_index(), Some(2));
    }

    #[test]
    fn test_manual_navigation_keeps_deadline() {
        let (mut rotator, start) = rotator(3);
        rotator.advance();
        assert!(rotator.tick(start + PERIOD));
        assert_eq!(rotator.active_index(), Some(2));
    }

    #[test]
    fn test_set_items_arms_and_disarms_timer() {
        let (mut rotator, start) = rotator(1);
        assert!(!rotator.is_running());

        let later = start + PERIOD * 10;
        rotator.set_items(vec![0, 1, 2], later);
        assert!(rotator.is_running());
        assert!(!rotator.tick(later + PERIOD / 2));
        assert!(rotator.tick(later + PERIOD));

        rotator.set_items(vec![9], later + PERIOD);
        assert!(!rotator.is_running());
        assert_eq!(rotator.active_index(), Some(0));
    }

    #[test]
    fn test_set_items_keeps_index_in_range() {
        let (mut rotator, now) = rotator(4);
        rotator.jump_to(2);

        rotator.set_items(vec![10, 11, 12], now);
        assert_eq!(rotator.active(), Some(&12));

        rotator.set_items(vec![20, 21], now);
        assert_eq!(rotator.active(), Some(&20));

        rotator.set_items(Vec::new(), now);
        assert_eq!(rotator.active_index(), None);
    }

    #[test]
    fn test_same_length_class_keeps_deadline() {
        let (mut rotator, start) = rotator(2);
        rotator.set_items(vec![5, 6, 7], start + PERIOD / 2);
        assert!(rotator.tick(start + PERIOD));
    }

    #[test]
    fn test_teardown_stops_timer_permanently() {
        let (mut rotator, start) = rotator(3);
        rotator.teardown();
        assert!(!rotator.tick(start + PERIOD * 2));

        rotator.set_items(vec![1, 2, 3, 4], start);
        assert!(!rotator.is_running());
        assert!(rotator.advance());
    }
}
