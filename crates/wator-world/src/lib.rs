//! World simulation engine.
//!
//! This module implements the bounded 2D grid world where prey and predators
//! move, reproduce, and hunt in discrete ticks.

pub mod clock;
pub mod grid;
pub mod organism;
pub mod simulation;

pub use clock::Clock;
pub use grid::Grid;
pub use organism::Organism;
pub use simulation::{Adjacency, Simulation};
