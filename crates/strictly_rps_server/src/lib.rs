//! JSON session service for rock-paper-scissors.
//!
//! Each session id owns an independent [`strictly_rps::GameSession`]; the
//! service only forwards `play`/`reset` calls and reports snapshots.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod manager;
mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{SessionError, SessionErrorKind};
pub use manager::{SessionManager, SessionSnapshot};
pub use routes::{CreateSessionRequest, PlayRequest, PlayResponse, router};

use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Binds to the configured address and serves until the process exits.
#[instrument(skip(config), fields(addr = %config.bind_address()))]
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let sessions = SessionManager::new(*config.history_window(), *config.seed());
    let app = router(sessions);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server ready at http://{}/", config.bind_address());
    axum::serve(listener, app).await
}
