//! Error types for the simulation.

use crate::types::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A cell violated an occupancy precondition: the destination of a
    /// placement or move already holds a living organism, or the source of a
    /// move does not. The engine's own candidate selection only offers vacant
    /// cells, so this is an invariant violation and is never retried.
    #[error("assignment conflict at {0}")]
    AssignmentConflict(Position),
}

impl Error {
    /// Coordinates of the cell that violated the precondition.
    pub fn coords(&self) -> Position {
        match self {
            Error::AssignmentConflict(pos) => *pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_coords() {
        let err = Error::AssignmentConflict(Position::new(3, 7));
        assert_eq!(err.coords(), Position::new(3, 7));
        assert_eq!(err.to_string(), "assignment conflict at (3, 7)");
    }
}
