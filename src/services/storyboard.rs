//! Storyboard assembly: segmentation followed by per-scene image synthesis.
//!
//! DESIGN
//! ======
//! The segmenter runs once. Each usable scene then gets exactly one image
//! call, strictly in scene order. Incomplete scenes and failed image calls
//! drop only that scene; segmentation failure yields an empty storyboard
//! whose status says why it is empty.

use tracing::{info, warn};
use uuid::Uuid;

use super::segmenter::SceneSegmenter;
use super::synthesizer::ImageSynthesizer;
use crate::error::ErrorCode;

// =============================================================================
// TYPES
// =============================================================================

/// One rendered storyboard unit. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryboardPanel {
    pub original_text: String,
    pub enhanced_prompt: String,
    /// Base64-encoded image bytes.
    pub image_data: String,
    pub image_media_type: String,
}

/// Outcome of the segmentation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentationStatus {
    /// The model returned this many scenes (usable or not).
    Segmented { scene_count: usize },
    /// The model answered with an empty scene list.
    NoScenes,
    /// The model call or its output parsing failed.
    Failed { code: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storyboard {
    pub panels: Vec<StoryboardPanel>,
    pub segmentation: SegmentationStatus,
}

impl Storyboard {
    fn empty(segmentation: SegmentationStatus) -> Self {
        Self { panels: Vec::new(), segmentation }
    }

    #[must_use]
    pub fn segmentation_failed(&self) -> bool {
        matches!(self.segmentation, SegmentationStatus::Failed { .. })
    }
}

// =============================================================================
// ASSEMBLER
// =============================================================================

pub struct StoryboardAssembler {
    segmenter: SceneSegmenter,
    synthesizer: ImageSynthesizer,
}

impl StoryboardAssembler {
    #[must_use]
    pub fn new(segmenter: SceneSegmenter, synthesizer: ImageSynthesizer) -> Self {
        Self { segmenter, synthesizer }
    }

    /// Build a storyboard for `text` in `style`. Never fails; remote errors
    /// are reflected in [`Storyboard::segmentation`] or in missing panels.
    pub async fn assemble(&self, text: &str, style: &str) -> Storyboard {
        let storyboard_id = Uuid::new_v4();
        info!(%storyboard_id, text_len = text.len(), style, "storyboard: generation started");

        let scenes = match self.segmenter.segment(text, style).await {
            Ok(scenes) => scenes,
            Err(e) => {
                warn!(%storyboard_id, code = e.error_code(), error = %e, "storyboard: segmentation failed");
                return Storyboard::empty(SegmentationStatus::Failed { code: e.error_code(), reason: e.to_string() });
            }
        };

        if scenes.is_empty() {
            info!(%storyboard_id, "storyboard: model returned no scenes");
            return Storyboard::empty(SegmentationStatus::NoScenes);
        }

        let scene_count = scenes.len();
        let mut panels = Vec::with_capacity(scene_count);

        for (index, scene) in scenes.iter().enumerate() {
            let Some((description, prompt)) = scene.usable_fields() else {
                warn!(%storyboard_id, index, "storyboard: scene incomplete, skipped");
                continue;
            };

            match self.synthesizer.synthesize(prompt).await {
                Ok(image) => {
                    info!(%storyboard_id, index, image_len = image.data.len(), "storyboard: panel generated");
                    panels.push(StoryboardPanel {
                        original_text: description.to_string(),
                        enhanced_prompt: prompt.to_string(),
                        image_data: image.data,
                        image_media_type: image.media_type,
                    });
                }
                Err(e) => {
                    warn!(%storyboard_id, index, code = e.error_code(), error = %e, "storyboard: image failed, skipped");
                }
            }
        }

        info!(%storyboard_id, scene_count, panel_count = panels.len(), "storyboard: generation finished");
        Storyboard { panels, segmentation: SegmentationStatus::Segmented { scene_count } }
    }
}

#[cfg(test)]
#[path = "storyboard_test.rs"]
mod tests;
