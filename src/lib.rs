//! # rust-territory
//!
//! Engine for a grid territory game: players place pawns on a square board,
//! then take turns moving a pawn and raising a wall next to it. Walls cut the
//! board into regions; a region holding only one player's pawns counts as
//! that player's territory. The game ends once every pawn-holding region
//! belongs to a single player.
//!
//! ## Design Principles
//!
//! 1. **Ids, not references**: pawns belong to their player's roster; the
//!    board refers to them by `PawnId` and keeps cell occupancy and pawn
//!    locations in one place.
//!
//! 2. **Recoverable vs. fatal**: a move into an occupied cell returns
//!    `false`; an out-of-range index or a call in the wrong phase returns a
//!    `GameError`.
//!
//! 3. **N-Player**: two to four players; nothing assumes two.
//!
//! ## Modules
//!
//! - `core`: positions, players, pawns, configuration, errors
//! - `board`: cells, walls, movement legality, regions
//! - `game`: phase state machine, scoring, turn driver
//!
//! ## Quick Start
//!
//! ```
//! use rust_territory::{Direction, Game, GameConfig, PlayerId, Position, TurnAction};
//!
//! let mut game = Game::new(&GameConfig::new(["Alice", "Bob"])).unwrap();
//! for index in 0..4 {
//!     game.player_place_pawns(PlayerId::new(0), index, Position::new(index, 0)).unwrap();
//!     game.player_place_pawns(PlayerId::new(1), index, Position::new(index, 6)).unwrap();
//! }
//! game.start().unwrap();
//!
//! assert!(game.apply(TurnAction::SelectPawn(0)).unwrap());
//! assert!(game.apply(TurnAction::Step(Direction::South)).unwrap());
//! assert!(game.apply(TurnAction::PlaceWall(Direction::East)).unwrap());
//! assert!(game.apply(TurnAction::EndTurn).unwrap());
//! assert_eq!(game.current_player().id(), PlayerId::new(1));
//! ```

pub mod core;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Direction, Position,
    Pawn, PawnId, Player, PlayerId, PlayerMap,
    GameConfig,
    ErrorKind, GameError, Result,
};

pub use crate::board::{Board, Cell, Occupant, Region, WallSegment, MOVE_BUDGET};

pub use crate::game::{ActionRecord, Game, Phase, TurnAction, TurnState};
