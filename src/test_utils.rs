//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use serde_json::{Value, json};

use crate::domain::{
    Faq, GalleryImage, ItineraryDay, MediaItem, MediaKind, PackageDetail, PackageSummary, Price,
    Testimonial,
};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct PackageMother;

impl PackageMother {
    #[must_use]
    pub fn goa() -> PackageSummary {
        PackageSummary {
            id: "a".to_string(),
            title: "Goa Beach".to_string(),
            location: "North Goa".to_string(),
            duration: "4 Days / 3 Nights".to_string(),
            price: Some(Price::new(18_999)),
            image_url: "https://cdn.example/goa.jpg".to_string(),
            description: "Sun, sand and shacks.".to_string(),
        }
    }

    #[must_use]
    pub fn kerala() -> PackageSummary {
        PackageSummary {
            id: "b".to_string(),
            title: "Kerala Backwaters".to_string(),
            location: "Alleppey".to_string(),
            duration: "5 Days / 4 Nights".to_string(),
            price: Some(Price::new(24_999)),
            image_url: "https://cdn.example/kerala.jpg".to_string(),
            description: "Houseboats and coconut groves.".to_string(),
        }
    }

    /// `count` packages named "Package 1".."Package N" in "City 1".."City N".
    #[must_use]
    pub fn numbered(count: usize) -> Vec<PackageSummary> {
        (1..=count)
            .map(|i| PackageSummary::new(format!("p{i}"), format!("Package {i}"), format!("City {i}")))
            .collect()
    }

    #[must_use]
    pub fn kerala_detail() -> PackageDetail {
        let mut day1 = ItineraryDay::new(1, "Arrive in Kochi");
        day1.meal_plan = "Dinner".to_string();
        day1.activities = vec!["Fort Kochi walk".to_string(), "Kathakali show".to_string()];
        let mut day2 = ItineraryDay::new(2, "Kochi to Munnar");
        day2.route = Some("Kochi → Munnar".to_string());
        day2.meal_plan = "Breakfast, Dinner".to_string();
        let day3 = ItineraryDay::new(3, "Houseboat in Alleppey");

        PackageDetail {
            inclusions: vec!["Hotel stay".to_string(), "Houseboat".to_string()],
            exclusions: vec!["Flights".to_string()],
            booking_info: Some("30% advance to confirm.".to_string()),
            cancellation_policy: Some("Full refund up to 15 days before travel.".to_string()),
            ..PackageDetail::new(Self::kerala(), vec![day3, day1, day2], GalleryMother::images(3))
        }
    }
}

pub struct MediaMother;

impl MediaMother {
    /// `count` image items with ids "m0".."m{count-1}" in display order.
    #[must_use]
    pub fn items(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| {
                MediaItem::new(
                    format!("m{i}"),
                    format!("https://cdn.example/hero-{i}.jpg"),
                    MediaKind::Image,
                    i as i64,
                )
            })
            .collect()
    }
}

pub struct GalleryMother;

impl GalleryMother {
    /// `count` displayable images with ids "g0".."g{count-1}".
    #[must_use]
    pub fn images(count: usize) -> Vec<GalleryImage> {
        (0..count)
            .map(|i| {
                GalleryImage::new(
                    format!("g{i}"),
                    format!("https://cdn.example/gallery-{i}.jpg"),
                    format!("Gallery image {i}"),
                )
            })
            .collect()
    }

    /// Two displayable images around one with an empty URL.
    #[must_use]
    pub fn with_empty_url() -> Vec<GalleryImage> {
        vec![
            GalleryImage::new("ok-1", "https://cdn.example/1.jpg", "First"),
            GalleryImage::new("broken", "", "Broken"),
            GalleryImage::new("ok-2", "https://cdn.example/2.jpg", "Second"),
        ]
    }
}

pub struct HomeMother;

impl HomeMother {
    #[must_use]
    pub fn testimonials() -> Vec<Testimonial> {
        vec![
            Testimonial::new("t1", "Anita", "Flawless trip to Munnar."),
            Testimonial::new("t2", "Rahul", "The houseboat night was the highlight."),
        ]
    }

    #[must_use]
    pub fn faqs() -> Vec<Faq> {
        vec![
            Faq::new("f1", "Do you arrange visas?", "Yes, for international packages."),
            Faq::new("f2", "Can I customise a package?", "Every package can be tailored."),
        ]
    }
}

// ============================================================================
// JSON Fixtures
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn hero() -> Value {
        json!({
            "media": [
                { "id": 3, "url": "https://cdn.example/c.mp4", "type": "video", "carousel_order": 3 },
                { "id": "1", "url": "https://cdn.example/a.jpg", "type": "image", "carousel_order": 1 },
                { "id": "empty", "url": "", "type": "image", "carousel_order": 0 },
                { "id": "2", "url": "https://cdn.example/b.jpg", "type": "image", "carousel_order": "2" }
            ]
        })
    }

    #[must_use]
    pub fn packages() -> Value {
        json!({
            "packages": [
                {
                    "id": "a",
                    "title": "Goa Beach",
                    "location": "North Goa",
                    "duration": "4 Days / 3 Nights",
                    "price": 18999,
                    "imageUrl": "https://cdn.example/goa.jpg",
                    "description": "Sun, sand and shacks."
                },
                {
                    "id": 42,
                    "title": "Kerala Backwaters",
                    "location": "Alleppey",
                    "price": "₹24,999",
                    "image_url": null
                },
                {
                    "_id": "c",
                    "title": "Ladakh Road Trip",
                    "price": "On request"
                }
            ]
        })
    }

    #[must_use]
    pub fn package_detail() -> Value {
        json!({
            "package": {
                "id": "kerala-5d",
                "title": "Kerala Backwaters",
                "location": "Alleppey",
                "duration": "5 Days / 4 Nights",
                "price": "Rs. 24,999/-",
                "itinerary": [
                    { "day": 3, "title": "Alleppey", "mealPlan": "Breakfast", "activities": ["Houseboat"] },
                    { "day": 1, "title": "Kochi", "meal_plan": "Dinner", "activities": ["Fort Kochi", "Kathakali"] },
                    { "day": "2", "title": "Munnar", "route": "Kochi → Munnar", "notes": null },
                    { "title": "No day number" }
                ],
                "gallery": [
                    { "id": "g1", "url": "https://cdn.example/1.jpg", "alt": "Backwaters", "caption": "Sunset" },
                    { "id": "g2", "url": "", "alt": "Broken" },
                    "https://cdn.example/3.jpg"
                ],
                "inclusions": ["Hotel", " ", "Houseboat"],
                "bookingInfo": "30% advance",
                "cancellationPolicy": ""
            }
        })
    }

    #[must_use]
    pub fn testimonials() -> Value {
        json!({
            "testimonials": [
                { "id": 1, "client_name": "Anita", "message": "Flawless.", "image_url": "https://cdn.example/anita.jpg" },
                { "id": 2, "clientName": "Rahul", "message": "Loved it." },
                { "id": 3, "client_name": "Silent", "message": "" }
            ]
        })
    }

    #[must_use]
    pub fn faqs() -> Value {
        json!({
            "faqs": [
                { "id": 1, "question": "Do you arrange visas?", "answer": "Yes." },
                { "id": 2, "question": null, "answer": "Orphan answer" }
            ]
        })
    }
}
