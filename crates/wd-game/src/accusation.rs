//! Matching the words of a `solve` command against the case file.
//!
//! Suspects, weapons and rooms may span several words ("Lead Pipe", "Game
//! Room"), so each part takes the longest run of words naming a member of its
//! set. Matching is exact and case-sensitive.

use wd_core::CaseFile;

use crate::error::{GameError, GameResult};

/// A guess whose parts are all members of the case file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accusation {
    /// Accused suspect.
    pub suspect: String,
    /// Accused weapon.
    pub weapon: String,
    /// Accused room.
    pub room: String,
}

/// Resolve the words after `solve mystery` into an accusation.
///
/// Words after the room are ignored.
pub fn resolve_accusation(case_file: &CaseFile, words: &[String]) -> GameResult<Accusation> {
    let (suspect, rest) =
        take_member(case_file.suspects(), words).ok_or(GameError::InvalidAccusation)?;
    let (weapon, rest) =
        take_member(case_file.weapons(), rest).ok_or(GameError::InvalidAccusation)?;
    let (room, _) = take_member(case_file.rooms(), rest).ok_or(GameError::InvalidAccusation)?;

    Ok(Accusation {
        suspect,
        weapon,
        room,
    })
}

/// Longest prefix of `words` that names a member of `set`, and what is left.
fn take_member<'w>(set: &[String], words: &'w [String]) -> Option<(String, &'w [String])> {
    (1..=words.len()).rev().find_map(|n| {
        let candidate = words[..n].join(" ");
        if set.contains(&candidate) {
            Some((candidate, &words[n..]))
        } else {
            None
        }
    })
}
