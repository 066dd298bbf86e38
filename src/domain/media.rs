//! Media-bearing records: hero media and gallery images.
//!
//! Every collection of media-bearing records goes through
//! [`retain_displayable`] right after it is fetched, so the components that
//! render it can assume each URL is non-empty.

use serde::{Deserialize, Serialize};

// ============================================================================
// URL Validation
// ============================================================================

/// Records that carry a URL which must be non-empty to be displayed.
pub trait HasMediaUrl {
    /// The URL of the media this record points at.
    fn media_url(&self) -> &str;

    /// Returns `true` if the record can be rendered.
    fn is_displayable(&self) -> bool {
        !self.media_url().trim().is_empty()
    }
}

/// Drops every record whose URL is empty or whitespace.
///
/// Order of the remaining records is preserved.
#[must_use]
pub fn retain_displayable<T: HasMediaUrl>(mut items: Vec<T>) -> Vec<T> {
    let before = items.len();
    items.retain(HasMediaUrl::is_displayable);
    let dropped = before - items.len();
    if dropped > 0 {
        tracing::debug!("Dropped {dropped} media record(s) without a URL");
    }
    items
}

// ============================================================================
// Media Items
// ============================================================================

/// The kind of a hero media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image.
    #[default]
    Image,
    /// A video clip.
    Video,
}

impl MediaKind {
    /// Parses the wire representation. Anything unrecognised is an image.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("video") {
            Self::Video
        } else {
            Self::Image
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// A single hero carousel entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Identifier, unique within one collection.
    pub id: String,
    /// Location of the media.
    pub url: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Display position; lower values are shown first.
    pub order: i64,
}

impl MediaItem {
    /// Create a new media item.
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>, kind: MediaKind, order: i64) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            kind,
            order,
        }
    }
}

impl HasMediaUrl for MediaItem {
    fn media_url(&self) -> &str {
        &self.url
    }
}

/// Sorts media by ascending `order`; ties keep their fetched order.
#[must_use]
pub fn sort_by_order(mut items: Vec<MediaItem>) -> Vec<MediaItem> {
    items.sort_by_key(|item| item.order);
    items
}

/// Static hero payload used when the hero fetch fails or yields nothing.
#[must_use]
pub fn fallback_hero_media() -> Vec<MediaItem> {
    vec![MediaItem::new(
        "fallback-hero",
        crate::constants::FALLBACK_HERO_URL,
        MediaKind::Image,
        0,
    )]
}

// ============================================================================
// Gallery Images
// ============================================================================

/// An image in a package gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Identifier, unique within one gallery.
    pub id: String,
    /// Location of the image.
    pub url: String,
    /// Alternative text.
    pub alt: String,
    /// Optional caption shown under the full view.
    pub caption: Option<String>,
}

impl GalleryImage {
    /// Create a gallery image without a caption.
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            alt: alt.into(),
            caption: None,
        }
    }

    /// The label to show for this image: caption, then alt text, then id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.caption
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or_else(|| Some(self.alt.as_str()).filter(|a| !a.trim().is_empty()))
            .unwrap_or(self.id.as_str())
    }
}

impl HasMediaUrl for GalleryImage {
    fn media_url(&self) -> &str {
        &self.url
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_retain_displayable_drops_empty_and_blank_urls() {
        let images = vec![
            GalleryImage::new("a", "https://cdn.example/a.jpg", "A"),
            GalleryImage::new("b", "", "B"),
            GalleryImage::new("c", "   ", "C"),
            GalleryImage::new("d", "https://cdn.example/d.jpg", "D"),
        ];

        let kept: Vec<String> = retain_displayable(images)
            .into_iter()
            .map(|img| img.id)
            .collect();
        assert_eq!(kept, vec!["a", "d"]);
    }

    #[test]
    fn test_sort_by_order_is_stable() {
        let media = vec![
            MediaItem::new("late", "u3", MediaKind::Image, 3),
            MediaItem::new("first", "u1", MediaKind::Video, 1),
            MediaItem::new("tie-a", "u2a", MediaKind::Image, 2),
            MediaItem::new("tie-b", "u2b", MediaKind::Image, 2),
        ];

        let ids: Vec<String> = sort_by_order(media).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["first", "tie-a", "tie-b", "late"]);
    }

    #[rstest]
    #[case::image("image", MediaKind::Image)]
    #[case::video("video", MediaKind::Video)]
    #[case::video_upper("VIDEO", MediaKind::Video)]
    #[case::unknown("gif", MediaKind::Image)]
    #[case::empty("", MediaKind::Image)]
    fn test_media_kind_from_wire(#[case] wire: &str, #[case] expected: MediaKind) {
        assert_eq!(MediaKind::from_wire(wire), expected);
    }

    #[test]
    fn test_fallback_hero_is_single_displayable_item() {
        let fallback = fallback_hero_media();
        assert_eq!(fallback.len(), 1);
        assert!(fallback[0].is_displayable());
    }

    #[test]
    fn test_gallery_label_precedence() {
        let captioned = GalleryImage {
            caption: Some("Munnar tea estates".to_string()),
            ..GalleryImage::new("g1", "u", "Alt text")
        };
        assert_eq!(captioned.label(), "Munnar tea estates");

        let alt_only = GalleryImage::new("g2", "u", "Houseboat at dusk");
        assert_eq!(alt_only.label(), "Houseboat at dusk");

        let bare = GalleryImage::new("g3", "u", "");
        assert_eq!(bare.label(), "g3");
    }
}
