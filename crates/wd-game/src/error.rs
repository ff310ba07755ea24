//! Error types for the game.
//!
//! Each variant's message is exactly what the player sees.

use thiserror::Error;
use wd_core::CoreError;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum GameError {
    /// `move` without a direction.
    #[error("Please provide a valid direction.")]
    MissingDirection,

    /// `take` or `use` without an object name.
    #[error("Please provide an object name.")]
    MissingItemName,

    /// `solve` with fewer than four arguments.
    #[error("Please provide a suspect, weapon, and room for your guess.")]
    MissingAccusation,

    /// `solve` followed by something other than `mystery`.
    #[error("You can only solve the mystery.")]
    NotAMystery(String),

    /// The guess names something outside the case file.
    #[error("Please select valid options for suspect, weapon, and room.")]
    InvalidAccusation,

    /// Unrecognized verb.
    #[error("Invalid command. Try again.")]
    UnknownCommand(String),

    /// No exit in that direction.
    #[error("You can't go that way!")]
    NoExit(String),

    /// No item by that name in the current room.
    #[error("There is no such object here.")]
    NoSuchItem(String),

    /// Item not in inventory.
    #[error("You don't have that object in your inventory.")]
    NotCarried(String),

    /// World model error.
    #[error("{0}")]
    Core(#[from] CoreError),
}
