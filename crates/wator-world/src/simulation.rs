//! Simulation engine: occupancy, the per-tick update rule, and the
//! bookkeeping that keeps the living list consistent with the grid.

use crate::clock::Clock;
use crate::grid::Grid;
use crate::organism::Organism;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};
use wator_core::{
    Error, OrganismId, PopulationCounts, Position, Result, RunSummary, SimConfig, Species,
};

/// Partition of a cell's in-bounds orthogonal neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    /// Cells that are unset or hold a dead occupant.
    pub empty: Vec<Position>,
    /// Cells holding living prey.
    pub prey: Vec<Position>,
}

/// The world: cell buffer, organism arena, living list, clock, and the
/// seeded random source behind every uniform choice.
///
/// Organisms never mutate the grid or their own position; all transitions
/// (place, move, hunt, reproduce, kill) are engine operations, so the grid
/// has exactly one writer.
pub struct Simulation {
    grid: Grid,
    /// Arena of every organism created this run, indexed by id.
    organisms: Vec<Organism>,
    /// Ids of living organisms, in insertion order. Processing order is an
    /// observable part of the semantics, so this is never shuffled.
    living: Vec<OrganismId>,
    clock: Clock,
    config: SimConfig,
    rng: ChaCha8Rng,
    kills: u64,
    starvations: u64,
    births: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        assert!(config.spawn_period > 0, "spawn period must be positive");
        assert!(
            config.starvation_interval > 0,
            "starvation interval must be positive"
        );
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = Grid::new(config.width, config.height);
        let clock = Clock::new(config.start_tick);
        Self {
            grid,
            organisms: Vec::new(),
            living: Vec::new(),
            clock,
            config,
            rng,
            kills: 0,
            starvations: 0,
            births: 0,
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.clock.current()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether organisms reproduce instead of moving or hunting on `tick`.
    pub fn is_spawn_tick(&self, tick: u64) -> bool {
        tick % self.config.spawn_period == 0
    }

    /// Living occupant of a cell, if any. Dead occupants awaiting compaction
    /// read as empty.
    pub fn occupant(&self, pos: Position) -> Option<&Organism> {
        let id = self.grid.get(pos)?;
        let organism = &self.organisms[id.0 as usize];
        organism.alive.then_some(organism)
    }

    /// Whether a cell can accept an organism: in bounds, and either unset or
    /// holding a dead occupant not yet compacted away.
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.grid.in_bounds(pos) && self.occupant(pos).is_none()
    }

    /// Construct a new organism of the given species and bind it into the
    /// cell at `(x, y)`. Predators get a starvation deadline of
    /// `current_tick + starvation_interval`.
    pub fn place(&mut self, x: i32, y: i32, species: Species) -> Result<OrganismId> {
        let pos = Position::new(x, y);
        if !self.is_vacant(pos) {
            return Err(Error::AssignmentConflict(pos));
        }
        let id = OrganismId(self.organisms.len() as u32);
        let organism = Organism::new(
            id,
            species,
            pos,
            self.clock.current(),
            self.config.starvation_interval,
        );
        self.organisms.push(organism);
        self.grid.set(pos, id);
        self.living.push(id);
        debug!(id = %id, species = ?species, pos = %pos, tick = self.clock.current(), "organism placed");
        Ok(id)
    }

    /// Partition the four orthogonal neighbors of a cell into vacant cells
    /// and cells holding living prey. Out-of-bounds offsets contribute to
    /// neither category.
    pub fn neighbors(&self, pos: Position) -> Adjacency {
        let mut adjacency = Adjacency::default();
        for candidate in self.grid.neighbor_positions(pos) {
            match self.occupant(candidate) {
                None => adjacency.empty.push(candidate),
                Some(occupant) if occupant.species == Species::Prey => {
                    adjacency.prey.push(candidate)
                }
                Some(_) => {}
            }
        }
        adjacency
    }

    /// Relocate a living organism to a vacant cell.
    ///
    /// The target cell, the organism's stored position, and the source cell
    /// are updated together; no observer sees the organism at two cells or
    /// at none.
    pub fn move_organism(&mut self, id: OrganismId, to: Position) -> Result<()> {
        let from = self.organism(id).position;
        if self.grid.get(from) != Some(id) || !self.organism(id).alive {
            return Err(Error::AssignmentConflict(from));
        }
        if !self.is_vacant(to) {
            return Err(Error::AssignmentConflict(to));
        }
        self.grid.set(to, id);
        self.organism_mut(id).position = to;
        self.grid.clear(from);
        debug!(id = %id, from = %from, to = %to, "organism moved");
        Ok(())
    }

    /// Spawn a child of the parent's species at the chosen adjacent vacant
    /// cell. Never moves or kills the parent.
    pub fn reproduce(&mut self, parent: OrganismId, at: Position) -> Result<OrganismId> {
        let species = self.organism(parent).species;
        let child = self.place(at.x, at.y, species)?;
        self.births += 1;
        debug!(parent = %parent, child = %child, pos = %at, "organism spawned");
        Ok(child)
    }

    /// Kill the living prey at a cell adjacent to the predator, reset the
    /// predator's starvation deadline, and move it into the vacated cell.
    pub fn hunt(&mut self, predator: OrganismId, target: Position) -> Result<()> {
        let predator_pos = self.organism(predator).position;
        debug_assert_eq!(
            predator_pos.manhattan_distance(&target),
            1,
            "hunt target must be adjacent"
        );
        let prey_id = match self.grid.get(target) {
            Some(id)
                if self.organism(id).alive && self.organism(id).species == Species::Prey =>
            {
                id
            }
            _ => return Err(Error::AssignmentConflict(target)),
        };
        self.organism_mut(prey_id).kill();
        self.kills += 1;
        debug!(predator = %predator, prey = %prey_id, pos = %target, tick = self.clock.current(), "prey killed");
        let current_tick = self.clock.current();
        let interval = self.config.starvation_interval;
        self.organism_mut(predator).feed(current_tick, interval);
        self.move_organism(predator, target)
    }

    /// Living prey and predator counts.
    pub fn population(&self) -> PopulationCounts {
        let mut counts = PopulationCounts::default();
        for &id in &self.living {
            match self.organism(id).species {
                Species::Prey => counts.prey += 1,
                Species::Predator => counts.predators += 1,
            }
        }
        counts
    }

    /// Run one tick: apply the update rule to a snapshot of the living list,
    /// compact the dead out of the grid and the list, advance the clock.
    pub fn step(&mut self) -> Result<()> {
        let tick = self.clock.current();
        // Organisms spawned this tick must not act until the next one, and
        // organisms killed this tick must still be visited (and skipped).
        let snapshot: Vec<OrganismId> = self.living.clone();
        for id in snapshot {
            self.act(id, tick)?;
        }
        self.compact();
        self.clock.advance();
        Ok(())
    }

    /// One organism's turn under the update rule.
    fn act(&mut self, id: OrganismId, tick: u64) -> Result<()> {
        if self.organism(id).alive && self.organism(id).is_starving(tick) {
            self.organism_mut(id).kill();
            self.starvations += 1;
            let pos = self.organism(id).position;
            debug!(id = %id, pos = %pos, tick, "predator starved");
            return Ok(());
        }
        if !self.organism(id).alive {
            // Killed earlier this tick by a hunt; its turn is forfeit.
            return Ok(());
        }

        let pos = self.organism(id).position;
        let adjacency = self.neighbors(pos);

        if self.is_spawn_tick(tick) {
            if let Some(&target) = adjacency.empty.choose(&mut self.rng) {
                self.reproduce(id, target)?;
            }
            return Ok(());
        }

        if self.organism(id).species == Species::Predator {
            if let Some(&target) = adjacency.prey.choose(&mut self.rng) {
                return self.hunt(id, target);
            }
        }

        if let Some(&target) = adjacency.empty.choose(&mut self.rng) {
            self.move_organism(id, target)?;
        }
        Ok(())
    }

    /// Drop every dead organism from its cell and from the living list,
    /// preserving the relative order of survivors.
    fn compact(&mut self) {
        for index in 0..self.living.len() {
            let id = self.living[index];
            let organism = &self.organisms[id.0 as usize];
            if !organism.alive {
                let pos = organism.position;
                // A hunter may already occupy its victim's cell; only clear
                // the cell while it still references the dead organism.
                if self.grid.get(pos) == Some(id) {
                    self.grid.clear(pos);
                }
            }
        }
        let organisms = &self.organisms;
        self.living.retain(|id| organisms[id.0 as usize].alive);
    }

    /// Run the simulation for `ticks` ticks and summarize the outcome.
    #[instrument(skip(self))]
    pub fn run(&mut self, ticks: u64) -> Result<RunSummary> {
        let mut history = Vec::with_capacity(ticks as usize);
        let finish_tick = self.clock.current() + ticks;
        while self.clock.current() < finish_tick {
            let population = self.population();
            history.push(population);
            if self.config.logging {
                info!(
                    tick = self.clock.current(),
                    prey = population.prey,
                    predators = population.predators,
                    "tick"
                );
                info!("grid state\n{}", self.render());
            }
            self.step()?;
        }
        let population = self.population();
        let summary = RunSummary {
            ticks_run: ticks,
            population,
            history,
            kills: self.kills,
            starvations: self.starvations,
            births: self.births,
        };
        info!(
            prey = population.prey,
            predators = population.predators,
            kills = summary.kills,
            starvations = summary.starvations,
            births = summary.births,
            "simulation finished"
        );
        Ok(summary)
    }

    /// Row-major multi-line text rendering. Vacant and tombstoned cells
    /// render blank; occupants render their thumbnail.
    pub fn render(&self) -> String {
        let current_tick = self.clock.current();
        let mut out = String::new();
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                match self.occupant(Position::new(x, y)) {
                    Some(organism) => {
                        let cell = organism.thumbnail(current_tick);
                        out.push_str(&format!("{cell:<3}"));
                    }
                    None => out.push_str("   "),
                }
            }
            out.push('\n');
        }
        out
    }

    fn organism(&self, id: OrganismId) -> &Organism {
        &self.organisms[id.0 as usize]
    }

    fn organism_mut(&mut self, id: OrganismId) -> &mut Organism {
        &mut self.organisms[id.0 as usize]
    }
}
