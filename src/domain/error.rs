//! Error types for content API operations.
//!
//! This module defines the error type shared by the content client and the
//! boundary normalisation code, providing structured error handling with
//! helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for content API operations.
///
/// Every variant is treated uniformly as "failed to load" by the pages; the
/// distinction only matters for logging and for the not-found page.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Transport-level errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// The endpoint path that was requested.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Entity not found on the API.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "package").
        entity: &'static str,
        /// The identifier that was requested.
        id: String,
    },

    /// Invalid user or configuration input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client initialization failed (e.g., TLS backend unavailable).
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl ContentError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    ///
    /// # Arguments
    ///
    /// * `entity` - The type of entity that was not found
    /// * `id` - The identifier that was requested
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new status error for an endpoint.
    #[must_use]
    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Returns `true` if this error means the entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Convert to a `color_eyre::Report` for application-level handling.
    ///
    /// The message is preserved; the typed variant is not.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
