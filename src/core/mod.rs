//! Core value types: positions, players, pawns, configuration, errors.
//!
//! Everything here is board-agnostic. The board and the game state machine
//! build on these types.

pub mod error;
pub mod position;
pub mod player;
pub mod pawn;
pub mod config;

pub use error::{ErrorKind, GameError, Result};
pub use position::{Direction, Position};
pub use player::{Player, PlayerId, PlayerMap};
pub use pawn::{Pawn, PawnId};
pub use config::{
    default_pawns_per_player, GameConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_PLAYERS,
    MIN_BOARD_SIZE, MIN_PLAYERS,
};
