//! Board cells.

use serde::{Deserialize, Serialize};

use crate::core::{PawnId, PlayerId, Position};

/// What stands on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Pawn(PawnId),
}

/// A single-occupant slot on the grid.
///
/// Occupancy is derived from the occupant; there is no separate flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    occupant: Occupant,
}

impl Cell {
    /// Create an empty cell.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            occupant: Occupant::Empty,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn occupant(&self) -> Occupant {
        self.occupant
    }

    /// The pawn on this cell, if any.
    #[must_use]
    pub const fn pawn(&self) -> Option<PawnId> {
        match self.occupant {
            Occupant::Empty => None,
            Occupant::Pawn(pawn) => Some(pawn),
        }
    }

    /// Player owning the pawn on this cell, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<PlayerId> {
        match self.occupant {
            Occupant::Empty => None,
            Occupant::Pawn(pawn) => Some(pawn.owner),
        }
    }

    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self.occupant, Occupant::Pawn(_))
    }

    pub(crate) fn occupy(&mut self, pawn: PawnId) {
        self.occupant = Occupant::Pawn(pawn);
    }

    /// Empty the cell, returning whoever stood on it.
    pub(crate) fn vacate(&mut self) -> Option<PawnId> {
        let pawn = self.pawn();
        self.occupant = Occupant::Empty;
        pawn
    }
}
