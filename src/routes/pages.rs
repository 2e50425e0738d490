//! Page routes: input form and storyboard generation.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, info};

use crate::render::{self, FormView};
use crate::services::storyboard::SegmentationStatus;
use crate::state::AppState;

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide a narrative and select a style.";

/// Form body for `POST /generate`. Missing fields deserialize as empty.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub style: String,
}

/// `GET /`: render the empty input form.
pub async fn index() -> Html<String> {
    Html(render::render_index(&FormView::default()))
}

/// `POST /generate`: validate, assemble, render.
///
/// Blank-only fields count as empty. The narrative reaches the model exactly
/// as submitted; the style label is trimmed.
pub async fn generate(State(state): State<AppState>, Form(form): Form<GenerateForm>) -> Response {
    let text_blank = form.text.trim().is_empty();
    let style = form.style.trim();

    if text_blank || style.is_empty() {
        info!(text_empty = text_blank, style_empty = style.is_empty(), "generate: rejected incomplete form");
        let view = FormView { error: Some(MISSING_FIELDS_MESSAGE), text: &form.text, style: &form.style };
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(render::render_index(&view))).into_response();
    }

    let storyboard = state.assembler.assemble(&form.text, style).await;
    if let SegmentationStatus::Failed { code, reason } = &storyboard.segmentation {
        debug!(code = *code, reason = %reason, "generate: rendering empty storyboard after segmentation failure");
    }
    info!(
        panel_count = storyboard.panels.len(),
        segmentation_failed = storyboard.segmentation_failed(),
        "generate: storyboard rendered"
    );
    Html(render::render_storyboard(style, &storyboard)).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
