//! Population statistics for a run.

use serde::{Deserialize, Serialize};

/// Living organism counts, split by species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub prey: usize,
    pub predators: usize,
}

impl PopulationCounts {
    pub fn total(&self) -> usize {
        self.prey + self.predators
    }
}

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of ticks simulated
    pub ticks_run: u64,
    /// Population at the end of the run
    pub population: PopulationCounts,
    /// Population at the start of each tick, in tick order
    pub history: Vec<PopulationCounts>,
    /// Prey killed by hunts
    pub kills: u64,
    /// Predators dead of starvation
    pub starvations: u64,
    /// Organisms born through reproduction
    pub births: u64,
}
