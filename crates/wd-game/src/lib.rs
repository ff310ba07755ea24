//! Player session and command interpreter for Whodunit.
//!
//! A [`Session`] owns the world, the player and the hidden solution. Lines of
//! player input go through [`parse_command`] and are dispatched to the
//! session's operations; every failure is a [`GameError`] whose message is
//! meant to be shown to the player as-is.

/// Resolving a spoken accusation against the case file.
pub mod accusation;
/// Session configuration.
pub mod config;
/// Error types for the game.
pub mod error;
/// Menu and reminder text printed every turn.
pub mod menu;
/// Command parsing.
pub mod parser;
/// Player state management.
pub mod player;
/// Game session management.
pub mod session;

pub use accusation::{Accusation, resolve_accusation};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use parser::{Command, expand_direction, parse_command};
pub use player::Player;
pub use session::{Response, Session, Verdict};
