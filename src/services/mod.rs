//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `segmenter` and `synthesizer` wrap one remote call each; `storyboard`
//! drives both and owns the drop-on-failure policy. Route handlers only
//! validate input and render the result.

pub mod segmenter;
pub mod storyboard;
pub mod synthesizer;
