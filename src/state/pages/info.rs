//! Informational pages with fixed copy: about, services, pricing and contact.

/// One heading and its body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

const fn section(heading: &'static str, body: &'static str) -> Section {
    Section { heading, body }
}

const ABOUT: &[Section] = &[
    section(
        "Who we are",
        "A family-run travel agency from Kochi planning trips across India and abroad since 2009.",
    ),
    section(
        "How we work",
        "Every itinerary is drafted by a planner who has travelled the route, then adjusted with you until it fits.",
    ),
    section(
        "On the road",
        "A local coordinator is reachable around the clock for the whole of your trip.",
    ),
];

const SERVICES: &[Section] = &[
    section("Holiday packages", "Curated domestic and international tours with stays, transfers and sightseeing."),
    section("Customised trips", "Tell us the dates and the budget; we build the trip around them."),
    section("Flights & visas", "Ticketing and visa paperwork for every international package."),
    section("Corporate travel", "Offsites, incentive tours and conference logistics for teams of any size."),
];

const PRICING: &[Section] = &[
    section(
        "What a package price covers",
        "Prices are per person on twin sharing and include stays, breakfast, transfers and the listed sightseeing.",
    ),
    section(
        "Booking",
        "A 30% advance confirms the booking; the balance is due 15 days before departure.",
    ),
    section(
        "Children",
        "Children under 5 travel free when sharing a bed; 5 to 11 years pay 50% of the adult price.",
    ),
    section(
        "Price on request",
        "Customised and seasonal packages are quoted individually once the itinerary is fixed.",
    ),
];

const CONTACT: &[Section] = &[
    section("Office", "MG Road, Kochi, Kerala 682016"),
    section("Phone", "+91 484 200 0000 (10am to 7pm IST, Monday to Saturday)"),
    section("Email", "hello@tourfolio.travel"),
];

// ============================================================================
// Static Page
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    About,
    Services,
    Pricing,
    Contact,
}

impl StaticPage {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About Us",
            Self::Services => "Our Services",
            Self::Pricing => "Pricing",
            Self::Contact => "Contact Us",
        }
    }

    #[must_use]
    pub const fn sections(self) -> &'static [Section] {
        match self {
            Self::About => ABOUT,
            Self::Services => SERVICES,
            Self::Pricing => PRICING,
            Self::Contact => CONTACT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_copy() {
        for page in [
            StaticPage::About,
            StaticPage::Services,
            StaticPage::Pricing,
            StaticPage::Contact,
        ] {
            assert!(!page.sections().is_empty(), "{} has no sections", page.title());
            assert!(page.sections().iter().all(|s| !s.body.is_empty()));
        }
    }
}
