//! Strictly Roshambo - front ends for the rock-paper-scissors core.
//!
//! # Architecture
//!
//! - **Core** ([`strictly_rps`]): round resolution and session state
//! - **Server** ([`strictly_rps_server`]): one session per id over HTTP
//! - **Terminal**: interactive line-based play
//! - **Config**: TOML file, `.env`, then CLI flags
//!
//! # Example
//!
//! ```
//! use strictly_roshambo::Terminal;
//! use strictly_rps::{FixedMove, GameSession, Move};
//!
//! let session = GameSession::with_source(FixedMove(Move::Scissors));
//! let mut terminal = Terminal::new(session, 5);
//! let mut out = Vec::new();
//! terminal.run("rock\nquit\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(terminal.session().player_score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod settings;
mod terminal;

pub use cli::{Cli, Command};
pub use settings::load_config;
pub use terminal::{Command as TerminalCommand, Terminal, format_win_rate};
