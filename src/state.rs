//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the storyboard assembler, whose clients are immutable and
//! `Arc`-shared, so requests never contend on a lock.

use std::sync::Arc;

use crate::image::ImageGenerate;
use crate::llm::LlmGenerate;
use crate::services::segmenter::SceneSegmenter;
use crate::services::storyboard::StoryboardAssembler;
use crate::services::synthesizer::ImageSynthesizer;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<StoryboardAssembler>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmGenerate>, images: Arc<dyn ImageGenerate>) -> Self {
        let assembler = StoryboardAssembler::new(SceneSegmenter::new(llm), ImageSynthesizer::new(images));
        Self { assembler: Arc::new(assembler) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
