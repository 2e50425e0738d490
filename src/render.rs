//! HTML page rendering.
//!
//! Pages are built with `maud`, which escapes every spliced value. User text
//! and model output are only ever spliced, never inserted as raw markup.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::services::storyboard::{SegmentationStatus, Storyboard};

/// Style suggestions offered by the form. Submitted values outside this list
/// are accepted unchanged.
pub const STYLE_PRESETS: &[&str] = &["Cinematic", "Anime", "Watercolor", "Comic Book", "Photorealistic", "Pixel Art"];

const INDEX_CSS: &str = "
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { margin-bottom: 0.25rem; }
textarea { width: 100%; min-height: 14rem; font: inherit; padding: 0.5rem; box-sizing: border-box; }
select, button { font: inherit; padding: 0.4rem 0.8rem; }
.row { margin: 1rem 0; }
.error { background: #fdecea; color: #8a1c12; border: 1px solid #f5c2bd; padding: 0.75rem; border-radius: 4px; }
";

const STORYBOARD_CSS: &str = "
body { font-family: system-ui, sans-serif; max-width: 64rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
.panels { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.panel { border: 1px solid #ddd; border-radius: 6px; overflow: hidden; background: #fafafa; }
.panel img { width: 100%; display: block; }
.panel .caption { padding: 0.75rem; }
.panel .prompt { color: #666; font-size: 0.85rem; }
.notice { background: #fff8e1; border: 1px solid #ffe08a; padding: 0.75rem; border-radius: 4px; }
";

/// Values for re-rendering the input form.
#[derive(Debug, Default)]
pub struct FormView<'a> {
    pub error: Option<&'a str>,
    pub text: &'a str,
    pub style: &'a str,
}

fn page(title: &str, css: &'static str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body { (body) }
        }
    }
}

#[must_use]
pub fn render_index(view: &FormView<'_>) -> String {
    let custom_style = !view.style.is_empty() && !STYLE_PRESETS.contains(&view.style);
    let body = html! {
        h1 { "Storyboard Generator" }
        p { "Paste a narrative, pick a visual style, and get one illustrated panel per scene." }
        @if let Some(message) = view.error {
            p class="error" role="alert" { (message) }
        }
        form method="post" action="/generate" {
            div class="row" {
                label for="text" { "Narrative" }
                textarea id="text" name="text" required { (view.text) }
            }
            div class="row" {
                label for="style" { "Visual style" }
                select id="style" name="style" required {
                    option value="" { "Select a style" }
                    @for preset in STYLE_PRESETS {
                        option value=(preset) selected[*preset == view.style] { (preset) }
                    }
                    @if custom_style {
                        option value=(view.style) selected { (view.style) }
                    }
                }
            }
            div class="row" {
                button type="submit" { "Generate storyboard" }
            }
        }
    };
    page("Storyboard Generator", INDEX_CSS, body).into_string()
}

#[must_use]
pub fn render_storyboard(style: &str, storyboard: &Storyboard) -> String {
    let failed_code = match &storyboard.segmentation {
        SegmentationStatus::Failed { code, .. } => Some(*code),
        _ => None,
    };
    let body = html! {
        h1 { "Your Storyboard" }
        p { "Style: " strong { (style) } " · " (storyboard.panels.len()) " panel(s)" }
        @if let Some(message) = notice_for(storyboard) {
            p class="notice" {
                (message)
                @if let Some(error_code) = failed_code {
                    " " code { (error_code) }
                }
            }
        }
        div class="panels" {
            @for (i, panel) in storyboard.panels.iter().enumerate() {
                figure class="panel" {
                    img src={ "data:" (panel.image_media_type) ";base64," (panel.image_data) } alt={ "Panel " (i + 1) };
                    figcaption class="caption" {
                        p { (panel.original_text) }
                        p class="prompt" { (panel.enhanced_prompt) }
                    }
                }
            }
        }
        p { a href="/" { "Create another storyboard" } }
    };
    page("Your Storyboard", STORYBOARD_CSS, body).into_string()
}

fn notice_for(storyboard: &Storyboard) -> Option<&'static str> {
    match &storyboard.segmentation {
        SegmentationStatus::Failed { .. } => {
            Some("The narrative could not be split into scenes because the language model request failed. Please try again.")
        }
        SegmentationStatus::NoScenes => Some("No scenes were found in the narrative."),
        SegmentationStatus::Segmented { .. } if storyboard.panels.is_empty() => {
            Some("Scenes were found, but no images could be generated for them.")
        }
        SegmentationStatus::Segmented { .. } => None,
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
