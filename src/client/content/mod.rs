//! Content API client.
//!
//! This module provides the unified `ContentClient` for the travel agency's
//! content API: hero media, package listings and details, testimonials and
//! FAQs. Responses are normalised into domain types before they leave the
//! client.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::ContentClient;
//! use crate::domain::PackageCategory;
//!
//! let client = ContentClient::from_config(&config)?;
//! let packages = client.get_packages(PackageCategory::Kerala).await?;
//! ```

use serde::de::DeserializeOwned;

use super::http::{HttpClient, HttpConfig};
use crate::domain::ContentError;
use crate::state::AppConfig;

mod hero;
mod home;
mod packages;
pub(crate) mod schema;


// ============================================================================
// Content API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ContentClient {
    /// Base URL, without a trailing slash.
    base_url: String,
    /// HTTP client for requests.
    http: HttpClient,
}

impl ContentClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidInput` for a blank or non-HTTP base URL,
    /// and `ContentError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, ContentError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ContentError::invalid_input(format!(
                "API URL must start with http:// or https:// (got '{base_url}')"
            )));
        }

        Ok(Self {
            base_url,
            http: HttpClient::with_config(config)?,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`ContentClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ContentError> {
        let http =
            HttpConfig::with_token(config.api_token.clone()).timeout(config.request_timeout());

        Self::new(config.api_base_url.clone(), http)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GETs `endpoint` and decodes its JSON body.
    ///
    /// Non-2xx answers become `ContentError::Status`; bodies that do not match
    /// `T` become `ContentError::Parse`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ContentError> {
        let response = self
            .http
            .get(&self.url(endpoint))
            .send()
            .await
            .inspect_err(|e| tracing::debug!("GET {endpoint} failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {endpoint} returned {status}");
            return Err(ContentError::status(endpoint, status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ContentError::parse(format!("{endpoint}: {e}")))
    }
}
