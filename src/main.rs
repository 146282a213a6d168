//! Quizzy - AI trivia game host
//!
//! Serves a single trivia session over HTTP. The host's replies come
//! from an LLM; the turn-taking state machine tracks pending questions
//! and the running score.

mod api;
mod game;
mod llm;
mod runtime;
mod system_prompt;

use api::{create_router, AppState};
use game::KeywordClassifier;
use llm::{load_dotenv_from, LlmConfig};
use runtime::{GameRuntime, LlmGenerator, ResponseGenerator, UnconfiguredGenerator};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizzy=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration (a local .env file fills in anything not already set)
    load_dotenv_from(&std::env::current_dir()?);

    let port: u16 = std::env::var("QUIZZY_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let llm_config = LlmConfig::from_env();
    let generator: Arc<dyn ResponseGenerator> = match llm_config.build_service() {
        Ok(service) => {
            tracing::info!(
                model = %service.model_id(),
                temperature = llm_config.temperature,
                gateway = llm_config.gateway.is_some(),
                "LLM configured"
            );
            Arc::new(LlmGenerator::new(service, llm_config.temperature))
        }
        Err(e) => {
            tracing::warn!(error = %e, "No usable LLM; every turn will report the problem");
            Arc::new(UnconfiguredGenerator::new(e))
        }
    };

    let runtime = GameRuntime::new(generator, Arc::new(KeywordClassifier));
    let state = AppState::new(runtime);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Quizzy server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
