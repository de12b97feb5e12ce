//! Organism state.

use serde::{Deserialize, Serialize};
use wator_core::{OrganismId, Position, Species};

/// An organism occupying one grid cell.
///
/// Organisms are data-only records: every placement, move, and kill goes
/// through the simulation engine, which keeps each organism's stored position
/// consistent with the cell referencing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    pub id: OrganismId,
    pub species: Species,
    pub position: Position,
    /// Starts true, set false exactly once at death, never reset.
    pub alive: bool,
    /// Absolute tick at or after which a predator dies unless a hunt resets
    /// it. `None` for prey.
    pub starves_at: Option<u64>,
}

impl Organism {
    pub fn new(
        id: OrganismId,
        species: Species,
        position: Position,
        current_tick: u64,
        starvation_interval: u64,
    ) -> Self {
        let starves_at = match species {
            Species::Predator => Some(current_tick + starvation_interval),
            Species::Prey => None,
        };
        Self {
            id,
            species,
            position,
            alive: true,
            starves_at,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Whether the starvation deadline has passed. Always false for prey.
    pub fn is_starving(&self, current_tick: u64) -> bool {
        matches!(self.starves_at, Some(deadline) if deadline <= current_tick)
    }

    /// Reset the starvation deadline after a successful hunt. No-op for prey.
    pub fn feed(&mut self, current_tick: u64, starvation_interval: u64) {
        if self.species == Species::Predator {
            self.starves_at = Some(current_tick + starvation_interval);
        }
    }

    /// Ticks left until starvation, for rendering. Zero for prey.
    pub fn remaining_lifespan(&self, current_tick: u64) -> u64 {
        self.starves_at
            .map_or(0, |deadline| deadline.saturating_sub(current_tick))
    }

    /// Short cell rendering: prey show their glyph alone, predators append
    /// the ticks left until starvation.
    pub fn thumbnail(&self, current_tick: u64) -> String {
        match self.species {
            Species::Prey => self.species.glyph().to_string(),
            Species::Predator => format!(
                "{}{}",
                self.species.glyph(),
                self.remaining_lifespan(current_tick)
            ),
        }
    }
}
