//! Session lookup errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde_json::json;

use crate::SessionId;

/// What went wrong with a session request.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// No session with this id.
    #[display("Session not found: {_0}")]
    NotFound(SessionId),
    /// A session with this id is already running.
    #[display("Session already exists: {_0}")]
    AlreadyExists(SessionId),
    /// The id is empty or contains `/`, so no route can address it.
    #[display("Invalid session id: {_0:?}")]
    InvalidId(SessionId),
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// Error kind.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self.kind {
            SessionErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
            SessionErrorKind::AlreadyExists(_) => StatusCode::CONFLICT,
            SessionErrorKind::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.kind.to_string() }));
        (self.status(), body).into_response()
    }
}
