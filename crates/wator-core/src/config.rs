//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Simulation configuration parameters.
///
/// There is no external configuration format; callers build this struct
/// directly and every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Width of the grid (cells), positive
    pub width: i32,
    /// Height of the grid (cells), positive
    pub height: i32,
    /// Ticks a predator survives without a successful hunt
    pub starvation_interval: u64,
    /// A tick is a spawn tick when `tick % spawn_period == 0`
    pub spawn_period: u64,
    /// Tick the clock starts at
    pub start_tick: u64,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Emit the per-tick trace (tick, population counts, grid render)
    pub logging: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            starvation_interval: 15,
            spawn_period: 3,
            start_tick: 0,
            seed: 0,
            logging: true,
        }
    }
}
