//! LLM: language-model adapter used for scene segmentation.
//!
//! DESIGN
//! ======
//! One provider (Gemini) behind the `LlmGenerate` trait. The trait takes a
//! single prompt and returns plain text; callers own prompt construction and
//! output parsing.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{LlmError, LlmGenerate};
