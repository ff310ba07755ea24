use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, CoreResult};

/// Suspects of the classic game, in enumeration order.
pub const CLASSIC_SUSPECTS: &[&str] = &["Plum", "White", "Scarlet", "Green", "Mustard", "Peacock"];

/// Weapons of the classic game, in enumeration order.
pub const CLASSIC_WEAPONS: &[&str] = &[
    "Rope",
    "Dagger",
    "Wrench",
    "Pistol",
    "Candlestick",
    "Lead Pipe",
];

/// Rooms of the classic game, in enumeration order.
pub const CLASSIC_ROOMS: &[&str] = &[
    "Courtyard",
    "Game Room",
    "Study",
    "Dining Room",
    "Garage",
    "Living Room",
    "Kitchen",
    "Bedroom",
    "Bathroom",
];

/// How the hidden solution is picked from the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolutionDraw {
    /// Always the first combination: first suspect, first weapon, first room.
    #[default]
    First,
    /// A uniformly random combination, reproducible from the seed.
    Seeded(u64),
}

/// The three fixed sets a guess is made from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFile {
    suspects: Vec<String>,
    weapons: Vec<String>,
    rooms: Vec<String>,
}

impl CaseFile {
    /// Create a case file. Every set must have at least one member.
    pub fn new(
        suspects: Vec<String>,
        weapons: Vec<String>,
        rooms: Vec<String>,
    ) -> CoreResult<Self> {
        if suspects.is_empty() {
            return Err(CoreError::EmptyCategory("suspects"));
        }
        if weapons.is_empty() {
            return Err(CoreError::EmptyCategory("weapons"));
        }
        if rooms.is_empty() {
            return Err(CoreError::EmptyCategory("rooms"));
        }
        Ok(Self {
            suspects,
            weapons,
            rooms,
        })
    }

    /// The six suspects, six weapons and nine rooms of the board game.
    pub fn classic() -> Self {
        let owned =
            |names: &[&str]| -> Vec<String> { names.iter().map(|n| n.to_string()).collect() };
        Self {
            suspects: owned(CLASSIC_SUSPECTS),
            weapons: owned(CLASSIC_WEAPONS),
            rooms: owned(CLASSIC_ROOMS),
        }
    }

    /// Suspects, in enumeration order.
    pub fn suspects(&self) -> &[String] {
        &self.suspects
    }

    /// Weapons, in enumeration order.
    pub fn weapons(&self) -> &[String] {
        &self.weapons
    }

    /// Rooms, in enumeration order.
    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    /// Exact, case-sensitive membership.
    pub fn is_suspect(&self, name: &str) -> bool {
        self.suspects.iter().any(|s| s == name)
    }

    /// Exact, case-sensitive membership.
    pub fn is_weapon(&self, name: &str) -> bool {
        self.weapons.iter().any(|w| w == name)
    }

    /// Exact, case-sensitive membership.
    pub fn is_room(&self, name: &str) -> bool {
        self.rooms.iter().any(|r| r == name)
    }

    /// Every possible combination, suspect outermost and room innermost.
    pub fn envelope(&self) -> Envelope<'_> {
        Envelope { case_file: self }
    }

    /// Draw the hidden solution.
    pub fn generate(&self, draw: SolutionDraw) -> Solution {
        let envelope = self.envelope();
        let index = match draw {
            SolutionDraw::First => 0,
            SolutionDraw::Seeded(seed) => {
                StdRng::seed_from_u64(seed).random_range(0..envelope.len())
            }
        };
        self.combination(index)
    }

    // Non-empty sets make every index modulo the set length valid.
    fn combination(&self, index: usize) -> Solution {
        let rooms = self.rooms.len();
        let weapons = self.weapons.len();
        Solution {
            suspect: self.suspects[(index / (weapons * rooms)) % self.suspects.len()].clone(),
            weapon: self.weapons[(index / rooms) % weapons].clone(),
            room: self.rooms[index % rooms].clone(),
        }
    }
}

impl Default for CaseFile {
    fn default() -> Self {
        Self::classic()
    }
}

/// The cross product of a case file's sets.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    case_file: &'a CaseFile,
}

impl Envelope<'_> {
    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.case_file.suspects.len() * self.case_file.weapons.len() * self.case_file.rooms.len()
    }

    /// Always false: a case file has no empty sets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The combination at `index` in enumeration order.
    pub fn get(&self, index: usize) -> Option<Solution> {
        (index < self.len()).then(|| self.case_file.combination(index))
    }

    /// All combinations in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = Solution> + '_ {
        (0..self.len()).map(|i| self.case_file.combination(i))
    }
}

/// The hidden suspect, weapon and room. Never changes once drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    suspect: String,
    weapon: String,
    room: String,
}

impl Solution {
    /// Build a solution directly.
    pub fn new(
        suspect: impl Into<String>,
        weapon: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            suspect: suspect.into(),
            weapon: weapon.into(),
            room: room.into(),
        }
    }

    /// The culprit.
    pub fn suspect(&self) -> &str {
        &self.suspect
    }

    /// The murder weapon.
    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    /// The scene of the crime.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// True iff all three parts match exactly (case-sensitive).
    pub fn check(&self, suspect: &str, weapon: &str, room: &str) -> bool {
        self.suspect == suspect && self.weapon == weapon && self.room == room
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with the {} in the {}", self.suspect, self.weapon, self.room)
    }
}
