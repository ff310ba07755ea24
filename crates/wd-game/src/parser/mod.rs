//! Command parsing.

mod command;

pub use command::{Command, expand_direction, parse_command};
