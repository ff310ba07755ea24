//! Game session management.

use std::fmt;

use tracing::debug;
use wd_core::scenario::classic_manor;
use wd_core::{CaseFile, CoreError, Room, RoomId, Scenario, Solution, World};

use crate::accusation::resolve_accusation;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::menu::FAREWELL;
use crate::parser::{Command, expand_direction, parse_command};
use crate::player::Player;

/// What the interpreter should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Show this text and keep going.
    Text(String),
    /// Nothing to show; prompt again.
    Silent,
    /// Show this text and end the session.
    Farewell(String),
}

/// Outcome of an accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// All three parts were right.
    Solved,
    /// At least one part was wrong.
    Wrong,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved => write!(f, "Congratulations! You've solved the mystery!"),
            Self::Wrong => write!(f, "That's not the correct solution. Keep investigating!"),
        }
    }
}

/// A single play-through: the world, the player, and the hidden solution.
pub struct Session {
    world: World,
    player: Player,
    case_file: CaseFile,
    solution: Solution,
}

impl Session {
    /// Create a session with the player in `start`.
    ///
    /// The solution is drawn here, once, according to `config.draw`.
    pub fn new(world: World, start: RoomId, config: GameConfig) -> GameResult<Self> {
        if world.room(start).is_none() {
            return Err(CoreError::RoomNotFound(start).into());
        }

        let solution = config.case_file.generate(config.draw);
        debug!(draw = ?config.draw, rooms = world.room_count(), "session started");

        Ok(Self {
            world,
            player: Player::new(start),
            case_file: config.case_file,
            solution,
        })
    }

    /// Create a session in the classic manor.
    pub fn classic(config: GameConfig) -> GameResult<Self> {
        let Scenario { world, start } = classic_manor()?;
        Self::new(world, start, config)
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The suspects, weapons and rooms guesses are checked against.
    pub fn case_file(&self) -> &CaseFile {
        &self.case_file
    }

    /// The hidden solution.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> GameResult<&Room> {
        self.world
            .room(self.player.location)
            .ok_or_else(|| CoreError::RoomNotFound(self.player.location).into())
    }

    /// Process a line of player input.
    pub fn process(&mut self, input: &str) -> GameResult<Response> {
        let command = parse_command(input)?;
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<Response> {
        match command {
            Command::Move { direction } => self.move_to(&direction).map(Response::Text),
            Command::Look => self.look_around().map(Response::Text),
            Command::Take { item } => self.take_item(&item).map(Response::Text),
            Command::Use { item } => self.use_item(&item).map(Response::Text),
            Command::Inventory => Ok(Response::Text(self.inventory())),
            Command::Solve { accusation } => self
                .solve(&accusation)
                .map(|verdict| Response::Text(verdict.to_string())),
            Command::Quit => Ok(Response::Farewell(FAREWELL.to_string())),
            Command::Empty => Ok(Response::Silent),
        }
    }

    /// Follow the exit labeled `direction`, then look around.
    pub fn move_to(&mut self, direction: &str) -> GameResult<String> {
        let direction = expand_direction(direction);
        let destination = self
            .world
            .exit(self.player.location, &direction)
            .ok_or_else(|| GameError::NoExit(direction.clone()))?;

        self.player.location = destination;
        let name = self.current_room()?.name();
        debug!(room = name, %direction, "player moved");

        Ok(format!("You have moved to the {name}\n{}", self.look_around()?))
    }

    /// Describe the current room and the items in it.
    pub fn look_around(&self) -> GameResult<String> {
        self.world
            .describe(self.player.location)
            .map_err(GameError::from)
    }

    /// Move an item from the current room into the inventory.
    pub fn take_item(&mut self, name: &str) -> GameResult<String> {
        let item_id = self
            .world
            .remove_item_from_room(self.player.location, name)
            .ok_or_else(|| GameError::NoSuchItem(name.to_string()))?;
        self.player.add_item(item_id);

        let taken = self
            .world
            .item(item_id)
            .map(|item| item.name())
            .unwrap_or(name);
        debug!(item = taken, "item taken");
        Ok(format!("You have taken the {taken}"))
    }

    /// Inspect a carried item. Reveals its clue without consuming it.
    pub fn use_item(&self, name: &str) -> GameResult<String> {
        let item = self
            .player
            .find_item(&self.world, name)
            .and_then(|id| self.world.item(id))
            .ok_or_else(|| GameError::NotCarried(name.to_string()))?;

        debug!(item = item.name(), has_clue = item.clue().is_some(), "item used");
        Ok(match item.clue() {
            Some(clue) => clue.to_string(),
            None => "You can't find any clues from this object.".to_string(),
        })
    }

    /// List carried items in the order they were taken.
    pub fn inventory(&self) -> String {
        if self.player.inventory.is_empty() {
            return "You are carrying nothing.".to_string();
        }

        let mut output = "You are carrying:".to_string();
        for item in self
            .player
            .inventory
            .iter()
            .filter_map(|id| self.world.item(*id))
        {
            output.push('\n');
            output.push_str(item.name());
        }
        output
    }

    /// Check an accusation against the hidden solution.
    pub fn solve(&self, words: &[String]) -> GameResult<Verdict> {
        let accusation = resolve_accusation(&self.case_file, words)?;
        let verdict = if self.solution.check(
            &accusation.suspect,
            &accusation.weapon,
            &accusation.room,
        ) {
            Verdict::Solved
        } else {
            Verdict::Wrong
        };
        debug!(?verdict, "accusation made");
        Ok(verdict)
    }
}
