//! Command parsing for player input.

use crate::error::{GameError, GameResult};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Follow an exit.
    Move {
        /// The exit label as typed.
        direction: String,
    },
    /// Describe the current room.
    Look,
    /// Pick up an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Inspect a carried item for clues.
    Use {
        /// The item name.
        item: String,
    },
    /// List carried items.
    Inventory,
    /// Accuse a suspect, weapon and room.
    Solve {
        /// Words after `solve mystery`, still to be matched against the case file.
        accusation: Vec<String>,
    },
    /// End the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a line of player input.
///
/// Verbs are case-sensitive. Arguments after `take` and `use` are joined
/// with single spaces so multi-word item names work.
pub fn parse_command(input: &str) -> GameResult<Command> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((verb, rest)) = words.split_first() else {
        return Ok(Command::Empty);
    };

    match *verb {
        "move" => match rest.first() {
            Some(direction) => Ok(Command::Move {
                direction: (*direction).to_string(),
            }),
            None => Err(GameError::MissingDirection),
        },
        "look" => Ok(Command::Look),
        "take" => item_name(rest).map(|item| Command::Take { item }),
        "use" => item_name(rest).map(|item| Command::Use { item }),
        "inventory" => Ok(Command::Inventory),
        "solve" => parse_solve(rest),
        "quit" => Ok(Command::Quit),
        other => Err(GameError::UnknownCommand(other.to_string())),
    }
}

fn item_name(rest: &[&str]) -> GameResult<String> {
    if rest.is_empty() {
        Err(GameError::MissingItemName)
    } else {
        Ok(rest.join(" "))
    }
}

fn parse_solve(rest: &[&str]) -> GameResult<Command> {
    let [target, accusation @ ..] = rest else {
        return Err(GameError::MissingAccusation);
    };
    if accusation.len() < 3 {
        return Err(GameError::MissingAccusation);
    }
    if *target != "mystery" {
        return Err(GameError::NotAMystery((*target).to_string()));
    }

    Ok(Command::Solve {
        accusation: accusation.iter().map(|w| (*w).to_string()).collect(),
    })
}

/// Expand a direction abbreviation (`n`, `se`, ...) to its full name.
/// Anything else is returned unchanged.
pub fn expand_direction(input: &str) -> String {
    let full = match input.to_lowercase().as_str() {
        "n" => "north",
        "s" => "south",
        "e" => "east",
        "w" => "west",
        "u" => "up",
        "d" => "down",
        "ne" => "northeast",
        "nw" => "northwest",
        "se" => "southeast",
        "sw" => "southwest",
        _ => return input.to_string(),
    };
    full.to_string()
}
