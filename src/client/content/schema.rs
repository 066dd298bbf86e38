//! Wire shapes of the content API and their mapping into domain types.
//!
//! The API is loose: ids arrive as strings or numbers, prices as numbers or
//! formatted strings, optional fields as `null` or missing, and some keys in
//! camelCase. Everything is accepted here and normalised on the way out.

use serde::{Deserialize, Deserializer};

use crate::domain::{
    Faq, GalleryImage, ItineraryDay, MediaItem, MediaKind, PackageDetail, PackageSummary, Price,
    Testimonial,
};

// ============================================================================
// Lenient Scalars
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accepts a string, a number or `null` and produces a string.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// Accepts an integer, a numeric string or `null`.
fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(n)) => Some(n),
        Some(Scalar::Float(f)) if f.is_finite() => Some(f.round() as i64),
        Some(Scalar::Text(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

/// A price as it arrives: a number or a pre-formatted string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    pub(crate) fn normalize(&self) -> Option<Price> {
        match self {
            Self::Number(value) => Price::from_number(*value),
            Self::Text(text) => Price::parse(text),
        }
    }
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// `None` for missing, null or blank text.
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct HeroResponse {
    #[serde(default)]
    pub media: Vec<RawMedia>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMedia {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: Option<String>,
    #[serde(default, alias = "carouselOrder", deserialize_with = "lenient_i64")]
    pub carousel_order: Option<i64>,
}

impl RawMedia {
    /// Items without an order sort last.
    pub(crate) fn into_domain(self) -> MediaItem {
        MediaItem {
            id: self.id,
            url: text(self.url),
            kind: self.kind.as_deref().map_or(MediaKind::Image, MediaKind::from_wire),
            order: self.carousel_order.unwrap_or(i64::MAX),
        }
    }
}

// ============================================================================
// Packages
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct PackagesResponse {
    #[serde(default)]
    pub packages: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PackageResponse {
    #[serde(default)]
    pub package: Option<RawPackage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPackage {
    #[serde(default, alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<RawPrice>,
    #[serde(default, alias = "imageUrl", alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub itinerary: Option<Vec<RawItineraryDay>>,
    #[serde(default)]
    pub gallery: Option<Vec<RawGalleryEntry>>,
    #[serde(default)]
    pub inclusions: Option<Vec<String>>,
    #[serde(default)]
    pub exclusions: Option<Vec<String>>,
    #[serde(default, alias = "bookingInfo")]
    pub booking_info: Option<String>,
    #[serde(default, alias = "cancellationPolicy")]
    pub cancellation_policy: Option<String>,
}

impl RawPackage {
    fn summary(&mut self) -> PackageSummary {
        PackageSummary {
            id: std::mem::take(&mut self.id),
            title: text(self.title.take()),
            location: text(self.location.take()),
            duration: text(self.duration.take()),
            price: self.price.take().and_then(|p| p.normalize()),
            image_url: text(self.image_url.take()),
            description: text(self.description.take()),
        }
    }

    pub(crate) fn into_summary(mut self) -> PackageSummary {
        self.summary()
    }

    pub(crate) fn into_detail(mut self) -> PackageDetail {
        let summary = self.summary();

        let itinerary = self
            .itinerary
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawItineraryDay::into_domain)
            .collect();

        let gallery = self
            .gallery
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_domain(index))
            .collect();

        let clean = |items: Option<Vec<String>>| -> Vec<String> {
            items
                .unwrap_or_default()
                .into_iter()
                .filter(|i| !i.trim().is_empty())
                .collect()
        };

        PackageDetail {
            inclusions: clean(self.inclusions),
            exclusions: clean(self.exclusions),
            booking_info: optional_text(self.booking_info),
            cancellation_policy: optional_text(self.cancellation_policy),
            ..PackageDetail::new(summary, itinerary, gallery)
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawItineraryDay {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub day: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default, alias = "mealPlan", alias = "meals")]
    pub meal_plan: Option<String>,
    #[serde(default)]
    pub activities: Option<Vec<String>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawItineraryDay {
    /// Days without a positive day number cannot be placed and are dropped.
    fn into_domain(self) -> Option<ItineraryDay> {
        let day = match self.day.and_then(|d| u32::try_from(d).ok()).filter(|d| *d > 0) {
            Some(day) => day,
            None => {
                tracing::debug!("Dropping itinerary entry without a valid day: {:?}", self.day);
                return None;
            }
        };

        Some(ItineraryDay {
            day,
            title: text(self.title),
            route: optional_text(self.route),
            meal_plan: text(self.meal_plan),
            activities: self.activities.unwrap_or_default(),
            notes: optional_text(self.notes),
        })
    }
}

/// Gallery entries come either as bare URLs or as objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawGalleryEntry {
    Url(String),
    Image(RawGalleryImage),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGalleryImage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, alias = "image_url", alias = "imageUrl")]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl RawGalleryEntry {
    fn into_domain(self, index: usize) -> GalleryImage {
        let fallback_id = || format!("image-{}", index + 1);
        match self {
            Self::Url(url) => GalleryImage::new(fallback_id(), url, ""),
            Self::Image(image) => GalleryImage {
                id: if image.id.is_empty() {
                    fallback_id()
                } else {
                    image.id
                },
                url: text(image.url),
                alt: text(image.alt),
                caption: optional_text(image.caption),
            },
        }
    }
}

// ============================================================================
// Testimonials & FAQs
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct TestimonialsResponse {
    #[serde(default)]
    pub testimonials: Vec<RawTestimonial>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTestimonial {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, alias = "clientName", alias = "name")]
    pub client_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl RawTestimonial {
    /// Quotes without a message have nothing to show.
    pub(crate) fn into_domain(self) -> Option<Testimonial> {
        let message = optional_text(self.message)?;
        Some(Testimonial {
            id: self.id,
            client_name: text(self.client_name),
            message,
            image_url: optional_text(self.image_url),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaqsResponse {
    #[serde(default)]
    pub faqs: Vec<RawFaq>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFaq {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl RawFaq {
    pub(crate) fn into_domain(self) -> Option<Faq> {
        let question = optional_text(self.question)?;
        Some(Faq {
            id: self.id,
            question,
            answer: text(self.answer),
        })
    }
}
