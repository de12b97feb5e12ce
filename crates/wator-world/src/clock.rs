//! Simulation clock.

use serde::{Deserialize, Serialize};

/// A monotonically increasing tick counter.
///
/// Owned by the simulation and advanced exactly once per completed tick;
/// there is no other mutation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    tick: u64,
}

impl Clock {
    pub fn new(start_tick: u64) -> Self {
        Self { tick: start_tick }
    }

    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Current tick.
    pub fn current(&self) -> u64 {
        self.tick
    }
}
