//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an organism within a run.
///
/// Ids are allocated sequentially by the engine and never reused, so a run
/// with a fixed seed produces the same ids every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganismId(pub u32);

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 2D position on the grid.
///
/// Positions are not validated against any particular grid; bounds checks
/// belong to the grid that interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighboring position one step in the given direction.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.to_delta();
        self.add(dx, dy)
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction for movement. The world is orthogonal only: no diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}

/// The two species that inhabit the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Prey,
    Predator,
}

impl Species {
    /// Base rendering glyph. Predators append their remaining lifespan when
    /// rendered on the grid.
    pub fn glyph(&self) -> char {
        match self {
            Species::Prey => 'V',
            Species::Predator => 'P',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_step() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::North), Position::new(5, 4));
        assert_eq!(pos.step(Direction::South), Position::new(5, 6));
        assert_eq!(pos.step(Direction::East), Position::new(6, 5));
        assert_eq!(pos.step(Direction::West), Position::new(4, 5));
    }

    #[test]
    fn test_manhattan_distance() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(3, 4);
        assert_eq!(pos1.manhattan_distance(&pos2), 7);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::North.to_delta(), (0, -1));
        assert_eq!(Direction::South.to_delta(), (0, 1));
        assert_eq!(Direction::East.to_delta(), (1, 0));
        assert_eq!(Direction::West.to_delta(), (-1, 0));
    }

    #[test]
    fn test_all_directions_are_adjacent() {
        let pos = Position::new(0, 0);
        for direction in Direction::all() {
            assert_eq!(pos.manhattan_distance(&pos.step(direction)), 1);
        }
    }

    #[test]
    fn test_species_glyph() {
        assert_eq!(Species::Prey.glyph(), 'V');
        assert_eq!(Species::Predator.glyph(), 'P');
    }
}
