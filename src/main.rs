mod config;
mod error;
mod image;
mod llm;
mod render;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.server.port;

    if !config.llm.has_api_key() {
        tracing::warn!("GEMINI_API_KEY not set; scene segmentation requests will fail");
    }
    if !config.image.has_api_key() {
        tracing::warn!("HUGGINGFACE_API_KEY not set; image generation requests will fail");
    }

    let llm = llm::GeminiClient::new(config.llm).expect("LLM client init failed");
    tracing::info!(model = llm.model(), "LLM client initialized");
    let images = image::HuggingFaceClient::new(config.image).expect("image client init failed");

    let state = state::AppState::new(Arc::new(llm), Arc::new(images));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storyboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
