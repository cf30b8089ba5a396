//! Async client for the hosted image-generation API
//!
//! One generation call is one HTTP predict request: no caching, no retry,
//! no backoff. Errors are logged here and collapsed to
//! [`ImageResult::Failure`]; nothing escapes this boundary.

use crate::core::config::config;
use crate::core::error::{PosterError, Result};
use crate::gen::keys::{EnvKeySource, KeySource};
use crate::gen::{ImageGenerator, ImageRef, ImageResult};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Fixed stylistic framing applied uniformly to every prompt
const PROMPT_PREFIX: &str = "An artistic, cinematic visualization for a conceptual poster: ";
const PROMPT_SUFFIX: &str = ". Minimalist, high contrast, powerful imagery.";

/// Wrap a caller prompt in the poster's uniform framing
fn frame_prompt(prompt: &str) -> String {
    format!("{PROMPT_PREFIX}{prompt}{PROMPT_SUFFIX}")
}

/// API error text that signals a stale or mis-scoped credential
const ENTITY_NOT_FOUND: &str = "Requested entity was not found";

/// Client for single-image generation requests
pub struct ImageClient {
    client: Client,
    api_url: String,
    keys: Box<dyn KeySource>,
}

impl ImageClient {
    /// Create a client with an explicit key source
    pub fn new(keys: Box<dyn KeySource>) -> Self {
        let cfg = config();
        Self {
            client: Client::new(),
            api_url: format!("{}/models/{}:predict", cfg.api_base, cfg.model),
            keys,
        }
    }

    /// Create a client that resolves its key from the environment
    pub fn from_env() -> Self {
        Self::new(Box::new(EnvKeySource))
    }

    /// Whether a credential is currently selected
    ///
    /// Backs the startup advisory only; `generate` re-checks on every call.
    pub fn key_selected(&self) -> bool {
        self.keys.current_key().is_some()
    }

    /// One request/response exchange; errors surface here so `generate`
    /// can log them before collapsing to `Failure`
    async fn try_generate(&self, prompt: &str) -> Result<ImageRef> {
        // Resolved per call so a new key selection applies immediately
        let api_key = self
            .keys
            .current_key()
            .ok_or_else(|| PosterError::MissingKey(format!("set {}", super::keys::API_KEY_VAR)))?;

        let cfg = config();
        let request = PredictRequest {
            instances: vec![Instance {
                prompt: frame_prompt(prompt),
            }],
            parameters: Parameters {
                sample_count: cfg.sample_count,
                aspect_ratio: cfg.aspect_ratio.clone(),
                output_mime_type: cfg.output_mime.clone(),
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-goog-api-key", &api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PosterError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PosterError::Generation(format!("API error: {}", error_text)));
        }

        let completion: PredictResponse = response
            .json()
            .await
            .map_err(|e| PosterError::Generation(e.to_string()))?;

        let first = completion
            .predictions
            .into_iter()
            .next()
            .filter(|p| !p.bytes_base64_encoded.is_empty())
            .ok_or(PosterError::NoImages)?;

        // Reject payloads that are not valid base64 before handing them on
        BASE64.decode(first.bytes_base64_encoded.as_bytes())?;

        Ok(ImageRef::PngData(first.bytes_base64_encoded))
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, prompt: &str) -> ImageResult {
        match self.try_generate(prompt).await {
            Ok(image) => ImageResult::Success(image),
            Err(PosterError::NoImages) => {
                tracing::warn!("image API returned no images");
                ImageResult::Failure
            }
            Err(e) => {
                tracing::error!("image generation failed: {}", e);
                if e.to_string().contains(ENTITY_NOT_FOUND) {
                    tracing::warn!("API key or model mismatch; the key may need to be re-selected");
                }
                ImageResult::Failure
            }
        }
    }
}

// Imagen REST predict format
#[derive(Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    aspect_ratio: String,
    output_mime_type: String,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen::keys::StaticKeySource;

    #[test]
    fn prompt_framing_is_uniform() {
        let framed = frame_prompt("a quiet field");
        assert!(framed.starts_with(PROMPT_PREFIX));
        assert!(framed.contains("a quiet field"));
        assert!(framed.ends_with(PROMPT_SUFFIX));
    }

    #[test]
    fn predict_response_parses_camel_case_payload() {
        let body = r#"{"predictions":[{"bytesBase64Encoded":"aGVsbG8=","mimeType":"image/png"}]}"#;
        let parsed: PredictResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.predictions.len(), 1);
        assert_eq!(parsed.predictions[0].bytes_base64_encoded, "aGVsbG8=");
    }

    #[test]
    fn empty_response_body_parses_as_zero_predictions() {
        let parsed: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.predictions.is_empty());
    }

    #[test]
    fn request_serializes_with_camel_case_parameters() {
        let request = PredictRequest {
            instances: vec![Instance {
                prompt: "p".into(),
            }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: "1:1".into(),
                output_mime_type: "image/png".into(),
            },
        };
        let body = serde_json::to_string(&request).unwrap();
        assert!(body.contains("\"sampleCount\":1"));
        assert!(body.contains("\"aspectRatio\":\"1:1\""));
        assert!(body.contains("\"outputMimeType\":\"image/png\""));
    }

    #[tokio::test]
    async fn missing_key_fails_without_touching_the_network() {
        let client = ImageClient::new(Box::new(StaticKeySource(String::new())));
        assert_eq!(client.generate("anything").await, ImageResult::Failure);
        assert!(!client.key_selected());
    }
}
