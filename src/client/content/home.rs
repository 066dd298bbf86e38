//! Testimonial and FAQ fetching for ContentClient.

use super::ContentClient;
use super::schema::{FaqsResponse, RawFaq, RawTestimonial, TestimonialsResponse};
use crate::domain::{ContentError, Faq, Testimonial};

impl ContentClient {
    /// Fetch client testimonials. Entries without a message are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn get_testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        let response: TestimonialsResponse = self.get_json("/api/testimonials").await?;
        Ok(response
            .testimonials
            .into_iter()
            .filter_map(RawTestimonial::into_domain)
            .collect())
    }

    /// Fetch the FAQ list. Entries without a question are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn get_faqs(&self) -> Result<Vec<Faq>, ContentError> {
        let response: FaqsResponse = self.get_json("/api/faqs").await?;
        Ok(response
            .faqs
            .into_iter()
            .filter_map(RawFaq::into_domain)
            .collect())
    }
}
