//! Scene segmentation: narrative text → ordered scene prompts.
//!
//! DESIGN
//! ======
//! One language-model call per storyboard. The instruction asks for a bare
//! JSON array of `{scene_description, enhanced_prompt}` objects. The reply is
//! stripped of markdown code fences and parsed strictly: anything that is not
//! a JSON array after stripping (including trailing commentary) is an error.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::ErrorCode;
use crate::llm::{LlmError, LlmGenerate};

// =============================================================================
// TYPES
// =============================================================================

/// One scene as returned by the model. Either field may be missing; the
/// assembler decides whether the scene is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub scene_description: Option<String>,
    #[serde(default)]
    pub enhanced_prompt: Option<String>,
}

impl Scene {
    /// Both text fields, if both are present and non-blank.
    #[must_use]
    pub fn usable_fields(&self) -> Option<(&str, &str)> {
        let description = self.scene_description.as_deref().filter(|s| !s.trim().is_empty())?;
        let prompt = self.enhanced_prompt.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((description, prompt))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("language model call failed: {0}")]
    Llm(#[from] LlmError),
    #[error("model output is not a JSON scene array: {0}")]
    ModelOutput(String),
}

impl ErrorCode for SegmentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Llm(e) => e.error_code(),
            Self::ModelOutput(_) => "E_MODEL_OUTPUT_PARSE",
        }
    }
}

// =============================================================================
// SEGMENTER
// =============================================================================

pub struct SceneSegmenter {
    llm: Arc<dyn LlmGenerate>,
}

impl SceneSegmenter {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmGenerate>) -> Self {
        Self { llm }
    }

    /// Split `text` into scenes with prompts in the requested `style`.
    ///
    /// An `Ok` with an empty vector means the model answered `[]`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::Llm`] if the model call fails and
    /// [`SegmentError::ModelOutput`] if the reply is not a JSON array of
    /// objects.
    pub async fn segment(&self, text: &str, style: &str) -> Result<Vec<Scene>, SegmentError> {
        let prompt = build_segmentation_prompt(text, style);
        let raw = self.llm.generate(&prompt).await?;
        let scenes = parse_scenes(&raw)?;
        info!(scene_count = scenes.len(), "segmenter: scenes parsed");
        Ok(scenes)
    }
}

// =============================================================================
// PROMPT
// =============================================================================

pub(crate) fn build_segmentation_prompt(text: &str, style: &str) -> String {
    format!(
        "Your task is to analyze the following `narrative_text` and break it into a logical number of distinct \
         visual scenes. For each scene, extract the core action or description directly from the text to create a \
         `scene_description`. Then expand that `scene_description` into a detailed `enhanced_prompt` for an AI image \
         generator, matching the visual style of '{style}'. Do not invent new story elements that are not present in \
         the original text; base all output strictly on the provided `narrative_text`. Respond ONLY with a valid \
         JSON array of objects, where each object has exactly two keys: 'scene_description' and \
         'enhanced_prompt'.\n\nnarrative_text: '''{text}'''"
    )
}

// =============================================================================
// PARSING
// =============================================================================

/// Remove markdown code-fence decoration around a model reply.
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```") {
        // Only the info string (`json`, `JSON`, ...) goes; content may share the fence line.
        s = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    }
    if let Some(rest) = s.trim_end().strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

pub(crate) fn parse_scenes(raw: &str) -> Result<Vec<Scene>, SegmentError> {
    let body = strip_code_fences(raw);
    serde_json::from_str::<Vec<Scene>>(body).map_err(|e| SegmentError::ModelOutput(e.to_string()))
}

#[cfg(test)]
#[path = "segmenter_test.rs"]
mod tests;
