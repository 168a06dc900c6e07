//! HTTP routes for the session service.

use crate::{SessionError, SessionManager, SessionSnapshot};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use strictly_rps::{Move, RoundRecord};
use tracing::{info, instrument};

/// Request for creating a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Session ID to create.
    pub session_id: String,
}

/// Request for playing a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    /// The player's move.
    #[serde(rename = "move")]
    pub player_move: Move,
}

/// Result of playing a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayResponse {
    /// The round just played.
    pub round: RoundRecord,
    /// Result sentence for the round.
    pub message: String,
    /// Session state after the round.
    pub session: SessionSnapshot,
}

/// Builds the service router over `sessions`.
pub fn router(sessions: SessionManager) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions", get(list_sessions).post(create_session))
        .route("/sessions/{id}", get(get_session).delete(delete_session))
        .route("/sessions/{id}/play", post(play))
        .route("/sessions/{id}/reset", post(reset))
        .with_state(sessions)
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(sessions))]
async fn list_sessions(State(sessions): State<SessionManager>) -> Json<Vec<String>> {
    Json(sessions.list_sessions())
}

#[instrument(skip(sessions, req), fields(session_id = %req.session_id))]
async fn create_session(
    State(sessions): State<SessionManager>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), SessionError> {
    let snapshot = sessions.create_session(req.session_id)?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

#[instrument(skip(sessions))]
async fn get_session(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, SessionError> {
    sessions.snapshot(&id).map(Json)
}

#[instrument(skip(sessions, req), fields(player_move = ?req.player_move))]
async fn play(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
    Json(req): Json<PlayRequest>,
) -> Result<Json<PlayResponse>, SessionError> {
    let (round, session) = sessions.play(&id, req.player_move)?;
    let message = round.message();
    info!(session_id = %id, outcome = ?round.outcome(), "Round completed");
    Ok(Json(PlayResponse {
        round,
        message,
        session,
    }))
}

#[instrument(skip(sessions))]
async fn reset(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, SessionError> {
    sessions.reset(&id).map(Json)
}

#[instrument(skip(sessions))]
async fn delete_session(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
) -> Result<StatusCode, SessionError> {
    sessions.remove_session(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
