//! Image-service configuration parsed from environment variables.

use crate::config::{env_parse, env_string};

pub const DEFAULT_IMAGE_MODEL_API_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";
pub const DEFAULT_IMAGE_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_IMAGE_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub api_key: String,
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ImageConfig {
    /// - `HUGGINGFACE_API_KEY`: empty when absent (logged at startup)
    /// - `IMAGE_MODEL_API_URL`: default SDXL base inference endpoint
    /// - `IMAGE_REQUEST_TIMEOUT_SECS`: default 120
    /// - `IMAGE_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env_string("HUGGINGFACE_API_KEY").unwrap_or_default(),
            api_url: env_string("IMAGE_MODEL_API_URL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL_API_URL.to_string()),
            request_timeout_secs: env_parse("IMAGE_REQUEST_TIMEOUT_SECS", DEFAULT_IMAGE_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse("IMAGE_CONNECT_TIMEOUT_SECS", DEFAULT_IMAGE_CONNECT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_env;

    unsafe fn clear_image_env() {
        unsafe {
            std::env::remove_var("HUGGINGFACE_API_KEY");
            std::env::remove_var("IMAGE_MODEL_API_URL");
            std::env::remove_var("IMAGE_REQUEST_TIMEOUT_SECS");
            std::env::remove_var("IMAGE_CONNECT_TIMEOUT_SECS");
        }
    }

    #[test]
    fn from_env_defaults() {
        let _guard = test_env::lock();
        unsafe { clear_image_env() };

        let cfg = ImageConfig::from_env();
        assert!(!cfg.has_api_key());
        assert_eq!(cfg.api_url, DEFAULT_IMAGE_MODEL_API_URL);
        assert_eq!(cfg.request_timeout_secs, 120);
        assert_eq!(cfg.connect_timeout_secs, 10);
    }

    #[test]
    fn from_env_overrides() {
        let _guard = test_env::lock();
        unsafe {
            clear_image_env();
            std::env::set_var("HUGGINGFACE_API_KEY", "hf_test");
            std::env::set_var("IMAGE_MODEL_API_URL", "http://localhost:7860/generate");
            std::env::set_var("IMAGE_REQUEST_TIMEOUT_SECS", "15");
        }

        let cfg = ImageConfig::from_env();
        assert_eq!(cfg.api_key, "hf_test");
        assert_eq!(cfg.api_url, "http://localhost:7860/generate");
        assert_eq!(cfg.request_timeout_secs, 15);
        assert_eq!(cfg.connect_timeout_secs, DEFAULT_IMAGE_CONNECT_TIMEOUT_SECS);

        unsafe { clear_image_env() };
    }
}
