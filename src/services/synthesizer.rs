//! Image synthesis: one prompt → one base64-encoded image.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::image::{ImageError, ImageGenerate};

/// Image payload in a text-safe encoding, ready to embed in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Standard base64 with padding.
    pub data: String,
    pub media_type: String,
}

pub struct ImageSynthesizer {
    images: Arc<dyn ImageGenerate>,
}

impl ImageSynthesizer {
    #[must_use]
    pub fn new(images: Arc<dyn ImageGenerate>) -> Self {
        Self { images }
    }

    /// Generate and encode one image. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`ImageError`] unchanged.
    pub async fn synthesize(&self, prompt: &str) -> Result<EncodedImage, ImageError> {
        let image = self.images.generate_image(prompt).await?;
        if image.bytes.is_empty() {
            return Err(ImageError::EmptyBody);
        }
        Ok(EncodedImage { data: STANDARD.encode(&image.bytes), media_type: image.media_type })
    }
}
