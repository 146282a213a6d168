//! HTTP request handlers

use super::types::{ChatRequest, ChatResponse, TurnErrorResponse};
use super::AppState;
use crate::game::GameSnapshot;
use crate::runtime::TurnError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/game", get(get_game))
        .route("/api/game/message", post(send_message))
        .route("/api/game/new", post(new_game))
        .route("/version", get(get_version))
        .with_state(state)
}

async fn get_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.runtime.snapshot().await)
}

async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let submission = state.runtime.submit_message(&req.text).await;

    match submission.result {
        Ok(turn) => Ok(Json(ChatResponse {
            reply: turn.reply,
            judgment: turn.outcome.judgment,
            game: submission.game,
        })),
        Err(error) => Err(AppError::TurnFailed {
            error,
            game: submission.game,
        }),
    }
}

async fn new_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.runtime.new_game().await)
}

async fn get_version() -> &'static str {
    concat!("quizzy ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    TurnFailed { error: TurnError, game: GameSnapshot },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::TurnFailed { error, game } => {
                let status = match &error {
                    TurnError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
                    TurnError::Generation(_) => StatusCode::BAD_GATEWAY,
                };
                let body = Json(TurnErrorResponse {
                    error: error.user_message(),
                    kind: error.kind(),
                    game,
                });
                (status, body).into_response()
            }
        }
    }
}
