//! Domain types for the tourfolio content front-end.
//!
//! Every record here is flat and immutable once built. Normalisation of the
//! API's loose shapes (dual-typed prices, empty media URLs, unsorted
//! itineraries) happens in the constructors of this module, so nothing past
//! the client boundary has to re-check it.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for content API operations
//! - [`media`] - Hero media, gallery images and the URL invariant
//! - [`price`] - Canonical price and its formatting
//! - [`package`] - Catalog categories, summaries, details and itineraries
//! - [`content`] - Testimonials and FAQs

// ============================================================================
// Module Declarations
// ============================================================================

pub mod content;
pub mod error;
pub mod media;
pub mod package;
pub mod price;

// ============================================================================
// Re-exports
// ============================================================================

pub use content::{Faq, Testimonial};
pub use error::ContentError;
pub use media::{
    GalleryImage, HasMediaUrl, MediaItem, MediaKind, fallback_hero_media, retain_displayable,
    sort_by_order,
};
pub use package::{ItineraryDay, PackageCategory, PackageDetail, PackageSummary, sort_itinerary};
pub use price::{Price, format_price};
