//! HTTP clients for the travel agency's content API.
//!
//! - [`HttpClient`] wraps a pooled `reqwest` client with auth headers
//! - [`ContentClient`] exposes typed endpoints returning domain types
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ContentClient, HttpConfig};
//!
//! let client = ContentClient::new("http://localhost:3000", HttpConfig::default())?;
//! let media = client.get_hero_media().await?;
//! ```

pub mod content;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use content::ContentClient;
pub use http::{HttpClient, HttpConfig};
