//! Core types for Whodunit: rooms, items, the world graph, and the case file.
//!
//! This crate holds the state of a mystery: which rooms exist, how they
//! connect, where every item currently sits, and the hidden solution. It knows
//! nothing about player input; the `wd-game` crate interprets commands on top
//! of it.

/// The fixed sets of suspects, weapons and rooms, and the solution drawn from them.
pub mod case_file;
/// Error types used throughout the crate.
pub mod error;
/// Items that can be found, carried, and inspected for clues.
pub mod item;
/// Rooms and their directional exits.
pub mod room;
/// The built-in manor scenario.
pub mod scenario;
/// The world graph that owns every room and item.
pub mod world;

/// Re-export case file types.
pub use case_file::{CaseFile, Envelope, Solution, SolutionDraw};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemId};
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export scenario types.
pub use scenario::Scenario;
/// Re-export the world model.
pub use world::World;
