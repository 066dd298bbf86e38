//! Tour package types.
//!
//! This module defines the catalog categories, the summary record used by
//! listing views, and the full detail record with its itinerary.

use std::collections::HashSet;
use std::fmt;

use super::media::{GalleryImage, retain_displayable};
use super::price::Price;

// ============================================================================
// Package Category
// ============================================================================

/// A catalog section, each backed by its own listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageCategory {
    /// Every package.
    #[default]
    All,
    /// Packages outside India.
    International,
    /// Packages within India.
    Domestic,
    /// Departures coming up soon.
    Upcoming,
    /// Currently popular packages.
    Trending,
    /// Kerala specials.
    Kerala,
    /// Tailor-made trips.
    Customised,
}

impl PackageCategory {
    /// All categories, in menu order.
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::International,
        Self::Domestic,
        Self::Upcoming,
        Self::Trending,
        Self::Kerala,
        Self::Customised,
    ];

    /// Returns the human-readable name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All Packages",
            Self::International => "International",
            Self::Domestic => "Domestic",
            Self::Upcoming => "Upcoming",
            Self::Trending => "Trending",
            Self::Kerala => "Kerala",
            Self::Customised => "Customised",
        }
    }

    /// The URL segment for this category, `None` for the full catalog.
    #[must_use]
    pub const fn slug(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::International => Some("international"),
            Self::Domestic => Some("domestic"),
            Self::Upcoming => Some("upcoming"),
            Self::Trending => Some("trending"),
            Self::Kerala => Some("kerala"),
            Self::Customised => Some("customised"),
        }
    }

    /// Resolves a URL segment back to a category.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == Some(slug))
    }

    /// The API endpoint listing this category.
    #[must_use]
    pub fn endpoint(&self) -> String {
        match self.slug() {
            Some(slug) => format!("/api/packages/{slug}"),
            None => "/api/packages".to_string(),
        }
    }

    /// Cycles to the next category.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PackageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Package Summary
// ============================================================================

/// Catalog entry shown on listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageSummary {
    /// Package identifier used for the detail route.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Destination.
    pub location: String,
    /// Duration text, e.g. "5 Days / 4 Nights".
    pub duration: String,
    /// Normalised price; `None` renders as "Price on request".
    pub price: Option<Price>,
    /// Cover image.
    pub image_url: String,
    /// Short description.
    pub description: String,
}

impl PackageSummary {
    /// Create a summary with only the searchable fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Itinerary
// ============================================================================

/// One day of a package itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItineraryDay {
    /// 1-based day number; unique within an itinerary and defines order.
    pub day: u32,
    /// Headline for the day.
    pub title: String,
    /// Route travelled, e.g. "Kochi → Munnar".
    pub route: Option<String>,
    /// Meals included.
    pub meal_plan: String,
    /// Activities in display order.
    pub activities: Vec<String>,
    /// Extra remarks.
    pub notes: Option<String>,
}

impl ItineraryDay {
    /// Create a day with just a number and title.
    #[must_use]
    pub fn new(day: u32, title: impl Into<String>) -> Self {
        Self {
            day,
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Orders an itinerary by `day`, regardless of how the days arrived.
///
/// Days sharing a number keep only their first occurrence; activity order
/// within a day is untouched.
#[must_use]
pub fn sort_itinerary(days: Vec<ItineraryDay>) -> Vec<ItineraryDay> {
    let mut seen = HashSet::new();
    let mut unique: Vec<ItineraryDay> = days
        .into_iter()
        .filter(|d| {
            let first = seen.insert(d.day);
            if !first {
                tracing::debug!("Dropping duplicate itinerary day {}", d.day);
            }
            first
        })
        .collect();
    unique.sort_by_key(|d| d.day);
    unique
}

// ============================================================================
// Package Detail
// ============================================================================

/// Everything the detail page shows for one package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageDetail {
    /// Listing fields.
    pub summary: PackageSummary,
    /// Day-by-day plan, sorted by day.
    pub itinerary: Vec<ItineraryDay>,
    /// Images with displayable URLs only.
    pub gallery: Vec<GalleryImage>,
    /// What the price covers.
    pub inclusions: Vec<String>,
    /// What the price does not cover.
    pub exclusions: Vec<String>,
    /// Booking instructions.
    pub booking_info: Option<String>,
    /// Cancellation terms.
    pub cancellation_policy: Option<String>,
}

impl PackageDetail {
    /// Builds a detail record, enforcing itinerary order and gallery URLs.
    #[must_use]
    pub fn new(
        summary: PackageSummary,
        itinerary: Vec<ItineraryDay>,
        gallery: Vec<GalleryImage>,
    ) -> Self {
        Self {
            summary,
            itinerary: sort_itinerary(itinerary),
            gallery: retain_displayable(gallery),
            ..Self::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
