//! Engine error type.
//!
//! Every fallible operation returns [`GameError`]. Variants fall into three
//! kinds, reported by [`GameError::kind`]:
//! - `InvalidArgument`: malformed input (negative coordinate, bad index, ...)
//! - `OutOfBoard`: a position outside the playable area where one is required
//! - `IllegalState`: the call is not valid in the current phase
//!
//! Rule violations a driver is expected to retry (occupied cell, wall in the
//! way, exhausted movement budget) are not errors. They come back as
//! `Ok(false)` or `Ok(None)`.

use derive_more::Display;

use super::pawn::PawnId;
use super::player::PlayerId;
use super::position::{Direction, Position};

/// Coarse classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input. Signals an integration bug.
    InvalidArgument,
    /// A position outside the N×N playable area.
    OutOfBoard,
    /// The operation is not valid in the current game phase.
    IllegalState,
}

/// Error raised by board and game operations.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// A coordinate was negative.
    #[display("Coordinates must be non-negative, got ({}, {})", x, y)]
    NegativeCoordinate { x: i64, y: i64 },

    /// The requested board is smaller than the minimum size.
    #[display("Board size must be at least {}, got {}", min, size)]
    BoardTooSmall { size: usize, min: usize },

    /// The requested board is larger than the maximum size.
    #[display("Board size must be at most {}, got {}", max, size)]
    BoardTooLarge { size: usize, max: usize },

    /// Two positions were expected to be orthogonal neighbours.
    #[display("Positions {} and {} are not adjacent", from, to)]
    NotAdjacent { from: Position, to: Position },

    /// No pawn stands on the given cell.
    #[display("No pawn at {}", _0)]
    NoPawnAt(Position),

    /// A pawn index outside the player's roster.
    #[display("Pawn index {} out of range (roster has {} pawns)", index, roster)]
    PawnIndexOutOfRange { index: usize, roster: usize },

    /// A player id that does not belong to this game.
    #[display("Unknown player {}", _0)]
    UnknownPlayer(PlayerId),

    /// Games are played by 2 to 4 players.
    #[display("A game needs between 2 and 4 players, got {}", _0)]
    InvalidPlayerCount(usize),

    /// Player names must not be blank.
    #[display("{} has an empty name", _0)]
    EmptyPlayerName(PlayerId),

    /// Each player needs at least one pawn.
    #[display("Invalid number of pawns per player: {}", _0)]
    InvalidPawnCount(usize),

    /// Every pawn needs its own cell.
    #[display("{} pawns do not fit on a board of {} cells", pawns, cells)]
    TooManyPawns { pawns: usize, cells: usize },

    /// A position outside the playable area.
    #[display("Position {} is not on the board", _0)]
    OutOfBoard(Position),

    /// A single step would leave the playable area.
    #[display("Pawn at {} cannot move {} off the board", from, direction)]
    MoveOffBoard { from: Position, direction: Direction },

    /// The pawn has not been placed yet.
    #[display("{} has not been placed", _0)]
    PawnNotPlaced(PawnId),

    /// The pawn already stands on the board.
    #[display("{} is already on the board", _0)]
    PawnAlreadyPlaced(PawnId),

    /// `start` was called twice.
    #[display("Game is already started")]
    AlreadyStarted,

    /// A play-phase operation was called during placement.
    #[display("Game is not started")]
    NotStarted,

    /// `start` was called before every pawn was placed.
    #[display("Only {} of {} pawns are placed", placed, expected)]
    PlacementIncomplete { placed: usize, expected: usize },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GameError {}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NegativeCoordinate { .. }
            | GameError::BoardTooSmall { .. }
            | GameError::BoardTooLarge { .. }
            | GameError::NotAdjacent { .. }
            | GameError::NoPawnAt(_)
            | GameError::PawnIndexOutOfRange { .. }
            | GameError::UnknownPlayer(_)
            | GameError::InvalidPlayerCount(_)
            | GameError::EmptyPlayerName(_)
            | GameError::InvalidPawnCount(_)
            | GameError::TooManyPawns { .. } => ErrorKind::InvalidArgument,
            GameError::OutOfBoard(_) | GameError::MoveOffBoard { .. } => ErrorKind::OutOfBoard,
            GameError::PawnNotPlaced(_)
            | GameError::PawnAlreadyPlaced(_)
            | GameError::AlreadyStarted
            | GameError::NotStarted
            | GameError::PlacementIncomplete { .. }
            | GameError::GameOver => ErrorKind::IllegalState,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let negative = GameError::NegativeCoordinate { x: -1, y: 0 };
        assert_eq!(negative.kind(), ErrorKind::InvalidArgument);

        let off = GameError::OutOfBoard(Position::new(7, 0));
        assert_eq!(off.kind(), ErrorKind::OutOfBoard);

        let step = GameError::MoveOffBoard {
            from: Position::new(0, 0),
            direction: Direction::North,
        };
        assert_eq!(step.kind(), ErrorKind::OutOfBoard);

        assert_eq!(GameError::AlreadyStarted.kind(), ErrorKind::IllegalState);
        assert_eq!(
            GameError::PawnNotPlaced(PawnId::new(PlayerId::new(0), 1)).kind(),
            ErrorKind::IllegalState
        );
    }

    #[test]
    fn test_display() {
        let err = GameError::OutOfBoard(Position::new(7, 2));
        assert_eq!(err.to_string(), "Position (7,2) is not on the board");

        let err = GameError::NotAdjacent {
            from: Position::new(0, 0),
            to: Position::new(2, 0),
        };
        assert_eq!(err.to_string(), "Positions (0,0) and (2,0) are not adjacent");

        assert_eq!(GameError::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&GameError::NotStarted);
    }
}
