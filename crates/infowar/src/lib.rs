//! Infowar host library - sessions and tooling around the rules engine
//!
//! # Architecture
//!
//! - **Session**: multiplayer session management over [`infowar_rules::Infowar`]
//! - **Config**: TOML-backed settings for the command-line tool
//! - **Commands**: replay, propose and geometry queries rendered as text or JSON
//!
//! # Example
//!
//! ```
//! use infowar::{Proposal, SessionManager};
//! use infowar_rules::{Faction, Position};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = SessionManager::new();
//! let session = manager.create_session("game-1".to_string())?;
//! let faction = manager.register_player(&session, "alice".to_string(), "Alice".to_string())?;
//! assert_eq!(faction, Faction::Insurgent);
//!
//! let snapshot = manager.propose(
//!     &session,
//!     "alice",
//!     Proposal::Place { position: Position::new(0, 3)? },
//! )?;
//! assert_eq!(*snapshot.insurgents_remaining(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, InfowarConfig, OutputFormat};

// Crate-level exports - Session management
pub use session::{
    GameSession, Player, PlayerId, Proposal, SessionError, SessionId, SessionManager,
};
