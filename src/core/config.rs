//! Image generation configuration with documented constants
//!
//! The request shape is fixed by the poster's needs (one square PNG per
//! quadrant); the endpoint and model can be overridden for self-hosted
//! proxies or model upgrades.

use crate::core::error::{PosterError, Result};

/// Configuration for the image generation client
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Base URL of the hosted generation API
    ///
    /// The predict endpoint is derived from this as
    /// `{api_base}/models/{model}:predict`.
    pub api_base: String,

    /// Model identifier used for every generation call
    pub model: String,

    /// Images requested per call
    ///
    /// The poster shows exactly one image per quadrant, so this stays 1.
    /// Values above 1 would only waste quota: the client reads the first
    /// returned image and ignores the rest.
    pub sample_count: u32,

    /// Requested aspect ratio; quadrants are square
    pub aspect_ratio: String,

    /// Requested output encoding
    pub output_mime: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "imagen-4.0-generate-001".into(),
            sample_count: 1,
            aspect_ratio: "1:1".into(),
            output_mime: "image/png".into(),
        }
    }
}

impl GenConfig {
    /// Create a config from defaults, honoring environment overrides
    ///
    /// Optional: IMAGEN_API_URL (base URL), IMAGEN_MODEL
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = std::env::var("IMAGEN_API_URL") {
            cfg.api_base = url;
        }
        if let Ok(model) = std::env::var("IMAGEN_MODEL") {
            cfg.model = model;
        }
        cfg
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.sample_count != 1 {
            return Err(PosterError::Config(format!(
                "sample_count ({}) must be 1: the poster displays a single image per quadrant",
                self.sample_count
            )));
        }
        if self.api_base.is_empty() || self.model.is_empty() {
            return Err(PosterError::Config(
                "api_base and model must be non-empty".into(),
            ));
        }
        if !self.output_mime.starts_with("image/") {
            return Err(PosterError::Config(format!(
                "output_mime ({}) must be an image media type",
                self.output_mime
            )));
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<GenConfig> = OnceLock::new();

/// Get the global generation config (initializes from the environment if not set)
pub fn config() -> &'static GenConfig {
    CONFIG.get_or_init(GenConfig::from_env)
}

/// Set the global generation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: GenConfig) -> std::result::Result<(), GenConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GenConfig::default().validate().is_ok());
    }

    #[test]
    fn multi_image_requests_are_rejected() {
        let cfg = GenConfig {
            sample_count: 4,
            ..GenConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_image_output_is_rejected() {
        let cfg = GenConfig {
            output_mime: "application/json".into(),
            ..GenConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
