//! Image: text-to-image adapter used for panel synthesis.
//!
//! DESIGN
//! ======
//! Mirrors the `llm` module: one provider (Hugging Face Inference API)
//! behind the `ImageGenerate` trait so the assembler can be tested without
//! a network.

pub mod config;
pub mod huggingface;

pub use huggingface::HuggingFaceClient;

use crate::error::ErrorCode;

/// Media type assumed when the provider omits `Content-Type`.
pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Connect failure, timeout, or body read failure.
    #[error("image request failed: {0}")]
    ApiRequest(String),

    #[error("image API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    #[error("image API returned an empty body")]
    EmptyBody,

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for ImageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ApiRequest(_) => "E_IMAGE_REQUEST",
            Self::ApiResponse { .. } => "E_IMAGE_RESPONSE",
            Self::EmptyBody => "E_IMAGE_EMPTY",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// Raw image bytes as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

/// Text-to-image generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ImageGenerate: Send + Sync {
    /// Generate one image for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageError`] on any transport failure or non-success
    /// status. Implementations do not retry.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ImageError>;
}
