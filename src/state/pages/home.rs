//! Home page: hero carousel, testimonials and the FAQ accordion.

use std::time::{Duration, Instant};

use crate::domain::{ContentError, Faq, MediaItem, Testimonial, fallback_hero_media};
use crate::state::fetch::{FetchSlot, RequestTicket};
use crate::state::rotator::MediaRotator;

#[derive(Debug)]
pub struct HomePage {
    /// Never empty: starts on, and falls back to, the static hero image.
    pub hero: MediaRotator<MediaItem>,
    pub hero_slot: FetchSlot,
    pub testimonials: MediaRotator<Testimonial>,
    pub testimonials_slot: FetchSlot,
    pub faqs: Vec<Faq>,
    pub faqs_slot: FetchSlot,
    faq_cursor: usize,
    expanded_faq: Option<usize>,
}

impl HomePage {
    #[must_use]
    pub fn new(hero_period: Duration, testimonial_period: Duration, now: Instant) -> Self {
        Self {
            hero: MediaRotator::new(fallback_hero_media(), hero_period, now),
            hero_slot: FetchSlot::new(),
            testimonials: MediaRotator::new(Vec::new(), testimonial_period, now),
            testimonials_slot: FetchSlot::new(),
            faqs: Vec::new(),
            faqs_slot: FetchSlot::new(),
            faq_cursor: 0,
            expanded_faq: None,
        }
    }

    // ========================================================================
    // Fetch Results
    // ========================================================================

    /// Applies the hero media. Failures and empty results show the fallback.
    pub fn apply_hero(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<MediaItem>, ContentError>,
        now: Instant,
    ) -> bool {
        if !self.hero_slot.is_current(ticket) {
            tracing::debug!("Dropping stale hero media");
            return false;
        }

        let media = match &result {
            Ok(media) if !media.is_empty() => media.clone(),
            Ok(_) => {
                tracing::debug!("Hero media empty, using fallback");
                fallback_hero_media()
            }
            Err(e) => {
                tracing::warn!("Failed to load hero media: {e}");
                fallback_hero_media()
            }
        };
        self.hero.set_items(media, now);
        self.hero_slot.complete(ticket, result.map(|_| ()))
    }

    /// Applies testimonials. Failures leave the section empty, which hides it.
    pub fn apply_testimonials(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Testimonial>, ContentError>,
        now: Instant,
    ) -> bool {
        if !self.testimonials_slot.is_current(ticket) {
            tracing::debug!("Dropping stale testimonials");
            return false;
        }

        let (items, outcome) = match result {
            Ok(items) => (items, Ok(())),
            Err(e) => {
                tracing::warn!("Failed to load testimonials: {e}");
                (Vec::new(), Err(e))
            }
        };
        self.testimonials.set_items(items, now);
        self.testimonials_slot.complete(ticket, outcome)
    }

    /// Applies FAQs. Failures leave the section empty, which hides it.
    pub fn apply_faqs(&mut self, ticket: RequestTicket, result: Result<Vec<Faq>, ContentError>) -> bool {
        if !self.faqs_slot.is_current(ticket) {
            tracing::debug!("Dropping stale FAQs");
            return false;
        }

        let outcome = match result {
            Ok(faqs) => {
                self.faqs = faqs;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load FAQs: {e}");
                self.faqs.clear();
                Err(e)
            }
        };
        self.faq_cursor = 0;
        self.expanded_faq = None;
        self.faqs_slot.complete(ticket, outcome)
    }

    // ========================================================================
    // Sections
    // ========================================================================

    #[must_use]
    pub fn show_testimonials(&self) -> bool {
        !self.testimonials.is_empty()
    }

    #[must_use]
    pub fn show_faqs(&self) -> bool {
        !self.faqs.is_empty()
    }

    #[must_use]
    pub fn faq_cursor(&self) -> usize {
        self.faq_cursor
    }

    #[must_use]
    pub fn expanded_faq(&self) -> Option<usize> {
        self.expanded_faq
    }

    /// Moves the FAQ cursor by `delta`, clamped to the list.
    pub fn move_faq_cursor(&mut self, delta: isize) {
        let Some(last) = self.faqs.len().checked_sub(1) else {
            return;
        };
        self.faq_cursor = self.faq_cursor.saturating_add_signed(delta).min(last);
    }

    /// Expands `index`, collapsing any other; toggling the open one collapses it.
    pub fn toggle_faq(&mut self, index: usize) -> bool {
        if index >= self.faqs.len() {
            return false;
        }
        self.expanded_faq = if self.expanded_faq == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Drives both rotators. Returns whether anything advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let hero = self.hero.tick(now);
        let testimonials = self.testimonials.tick(now);
        hero || testimonials
    }

    pub fn teardown(&mut self) {
        self.hero.teardown();
        self.testimonials.teardown();
        self.hero_slot.teardown();
        self.testimonials_slot.teardown();
        self.faqs_slot.teardown();
    }
}

// ============================================================================
// Tests
// ============================================================================
