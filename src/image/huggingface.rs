//! Hugging Face Inference API client for text-to-image models.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use super::config::ImageConfig;
use super::{DEFAULT_IMAGE_MEDIA_TYPE, GeneratedImage, ImageError, ImageGenerate};

pub struct HuggingFaceClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl HuggingFaceClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: ImageConfig) -> Result<Self, ImageError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ImageError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, api_url: config.api_url })
    }
}

#[derive(serde::Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[async_trait::async_trait]
impl ImageGenerate for HuggingFaceClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ImageError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await
            .map_err(|e| ImageError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageError::ApiResponse { status: status.as_u16(), body });
        }

        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(media_type_of)
            .filter(|m| m.starts_with("image/"))
            .unwrap_or(DEFAULT_IMAGE_MEDIA_TYPE)
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::ApiRequest(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ImageError::EmptyBody);
        }

        Ok(GeneratedImage { bytes: bytes.to_vec(), media_type })
    }
}

/// Strip parameters from a `Content-Type` value (`image/png; q=1` → `image/png`).
fn media_type_of(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or(content_type).trim()
}

#[cfg(test)]
#[path = "huggingface_test.rs"]
mod tests;
