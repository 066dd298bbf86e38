//! Home page content: testimonials and FAQs.

// ============================================================================
// Testimonials
// ============================================================================

/// A client quote shown in the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Testimonial {
    /// Identifier.
    pub id: String,
    /// Name of the client quoted.
    pub client_name: String,
    /// The quote.
    pub message: String,
    /// Optional portrait.
    pub image_url: Option<String>,
}

impl Testimonial {
    /// Create a testimonial without a portrait.
    #[must_use]
    pub fn new(id: impl Into<String>, client_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            client_name: client_name.into(),
            message: message.into(),
            image_url: None,
        }
    }
}

// ============================================================================
// FAQs
// ============================================================================

/// A question and answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Faq {
    /// Identifier.
    pub id: String,
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

impl Faq {
    /// Create a new FAQ entry.
    #[must_use]
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}
