//! HTTP client abstraction for content API requests.

use reqwest::Client;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::domain::ContentError;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Clone, Default)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Bearer token sent as `Authorization: Bearer <token>`
    pub bearer_token: Option<String>,
    /// Ignore system proxy settings
    pub direct: bool,
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfig")
            .field("timeout", &self.timeout)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("direct", &self.direct)
            .finish()
    }
}

impl HttpConfig {
    /// Create config with a bearer token
    #[must_use]
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            bearer_token: token,
            ..Self::default()
        }
    }

    /// Builder-style timeout setter
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The effective timeout
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        self.timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper with connection pooling
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ContentError::ClientInit` if the TLS backend cannot be set up.
    pub fn with_config(config: HttpConfig) -> Result<Self, ContentError> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.effective_timeout());
        if config.direct {
            builder = builder.no_proxy();
        }
        let inner = builder
            .build()
            .map_err(|e| ContentError::client_init(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.inner.get(url).header("accept", "application/json");

        match &self.config.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
