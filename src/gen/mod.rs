//! Image generation for the poster quadrants
//!
//! The orchestrator talks to the backend through the [`ImageGenerator`]
//! trait; [`client::ImageClient`] is the production implementation against
//! the hosted Imagen API.

pub mod client;
pub mod keys;

pub use client::ImageClient;
pub use keys::{EnvKeySource, KeySource, StaticKeySource};

use async_trait::async_trait;

/// A displayable image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Remote fallback image
    Url(String),
    /// Generated inline PNG, base64-encoded
    PngData(String),
}

impl ImageRef {
    /// Render as something a front-end can show directly: the raw URL for
    /// fallbacks, a `data:` URI for generated images
    pub fn as_display_uri(&self) -> String {
        match self {
            ImageRef::Url(url) => url.clone(),
            ImageRef::PngData(b64) => format!("data:image/png;base64,{b64}"),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ImageRef::PngData(_))
    }
}

/// Outcome of a single generation call
///
/// Every failure mode - transport, API error, empty response, undecodable
/// payload - collapses to `Failure` at the client boundary. Callers never
/// see the distinction; the client logs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResult {
    Success(ImageRef),
    Failure,
}

/// Seam between the refresh orchestrator and the image backend
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Single best-effort generation attempt; must not panic or error out
    async fn generate(&self, prompt: &str) -> ImageResult;
}
