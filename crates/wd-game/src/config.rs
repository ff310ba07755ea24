//! Configuration for a game session.

use wd_core::{CaseFile, SolutionDraw};

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Suspects, weapons and rooms the solution is drawn from.
    pub case_file: CaseFile,
    /// How the solution is drawn.
    pub draw: SolutionDraw,
}

impl GameConfig {
    /// Draw a random solution from this seed instead of the first combination.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.draw = SolutionDraw::Seeded(seed);
        self
    }

    /// Replace the case file.
    pub fn with_case_file(mut self, case_file: CaseFile) -> Self {
        self.case_file = case_file;
        self
    }
}
