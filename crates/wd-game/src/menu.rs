//! Fixed text shown around every turn.

use wd_core::CaseFile;

/// Greeting printed once at start-up.
pub const WELCOME: &str = "Welcome to the Clue Game!";

/// Input prompt.
pub const PROMPT: &str = "Enter a command: ";

/// Printed when the player quits.
pub const FAREWELL: &str = "Thanks for playing!";

/// The list of commands, printed before every prompt.
pub const COMMANDS: &str = "Available commands: move <direction>, look, take <object>, \
    use <object>, inventory, solve mystery <suspect> <weapon> <room>, quit";

/// The suspects, weapons and rooms a guess can name, printed after every command.
pub fn reminder(case_file: &CaseFile) -> String {
    format!(
        "Suspects: {}\nWeapons: {}\nRooms: {}\nType 'quit' to quit anytime",
        case_file.suspects().join(", "),
        case_file.weapons().join(", "),
        case_file.rooms().join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_reminder() {
        insta::assert_snapshot!(reminder(&CaseFile::classic()), @r"
        Suspects: Plum, White, Scarlet, Green, Mustard, Peacock
        Weapons: Rope, Dagger, Wrench, Pistol, Candlestick, Lead Pipe
        Rooms: Courtyard, Game Room, Study, Dining Room, Garage, Living Room, Kitchen, Bedroom, Bathroom
        Type 'quit' to quit anytime
        ");
    }

    #[test]
    fn commands_mention_every_verb() {
        for verb in ["move", "look", "take", "use", "inventory", "solve mystery", "quit"] {
            assert!(COMMANDS.contains(verb), "missing {verb}");
        }
    }
}
