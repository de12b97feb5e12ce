//! 2D cell buffer for the world.

use serde::{Deserialize, Serialize};
use wator_core::{Direction, OrganismId, Position};

/// A bounded 2D grid holding at most one organism id per cell.
///
/// The grid knows nothing about liveness; the simulation layers the
/// empty-or-dead occupancy rule on top of it. Out-of-bounds positions read as
/// unoccupied, so adjacency scans near the edges need no special casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    cells: Vec<Option<OrganismId>>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let size = (width * height) as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Occupant id of a cell, if any.
    pub fn get(&self, pos: Position) -> Option<OrganismId> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, id: OrganismId) {
        let index = self.index(pos);
        self.cells[index] = Some(id);
    }

    pub fn clear(&mut self, pos: Position) {
        let index = self.index(pos);
        self.cells[index] = None;
    }

    /// In-bounds orthogonal neighbors of a position.
    pub fn neighbor_positions(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::all()
            .into_iter()
            .map(move |direction| pos.step(direction))
            .filter(move |candidate| self.in_bounds(*candidate))
    }

    /// Iterator over all positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos));
        (pos.y * self.width + pos.x) as usize
    }
}
