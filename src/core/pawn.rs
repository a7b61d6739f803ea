//! Pawn identity.
//!
//! A pawn belongs to exactly one player and is addressed by `(owner, index)`
//! where `index` is its slot in the owner's roster. Cells refer to pawns by
//! [`PawnId`]; the pawn values themselves live in the owning [`Player`].
//!
//! Where a pawn stands is tracked by the board, which keeps the cell
//! occupant and the pawn location in step. Ask the board
//! (`Board::pawn_position`) for a pawn's position.
//!
//! [`Player`]: super::player::Player

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Identifier of a pawn: owning player plus roster index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PawnId {
    /// Owning player.
    pub owner: PlayerId,
    /// Slot in the owner's roster (0-based).
    pub index: u8,
}

impl PawnId {
    #[must_use]
    pub const fn new(owner: PlayerId, index: u8) -> Self {
        Self { owner, index }
    }

    /// Roster index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Display for PawnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pawn {} of {}", self.index, self.owner)
    }
}

/// A pawn in a player's roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pawn {
    id: PawnId,
    glyph: char,
}

impl Pawn {
    /// Create a pawn. `glyph` is the single character a renderer draws.
    #[must_use]
    pub const fn new(id: PawnId, glyph: char) -> Self {
        Self { id, glyph }
    }

    #[must_use]
    pub const fn id(&self) -> PawnId {
        self.id
    }

    /// Owning player.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.id.owner
    }

    #[must_use]
    pub const fn glyph(&self) -> char {
        self.glyph
    }
}
