//! Hero carousel media fetching for ContentClient.

use super::ContentClient;
use super::schema::HeroResponse;
use crate::domain::{ContentError, MediaItem, retain_displayable, sort_by_order};

impl ContentClient {
    /// Fetch the hero carousel media, sorted by carousel order.
    ///
    /// Items without a URL are dropped. An empty result is returned as-is;
    /// substituting the fallback is the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn get_hero_media(&self) -> Result<Vec<MediaItem>, ContentError> {
        let response: HeroResponse = self.get_json("/api/hero").await?;

        let media = response
            .media
            .into_iter()
            .map(super::schema::RawMedia::into_domain)
            .collect();

        Ok(sort_by_order(retain_displayable(media)))
    }
}
