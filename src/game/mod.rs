//! Game orchestration: setup, turn rotation, scoring and the turn driver.
//!
//! `Game` is split over two files:
//! - `game`: phases, player rotation, territory scoring
//! - `turn`: the per-turn action sequence and history

#[allow(clippy::module_inception)]
pub mod game;
pub mod turn;

pub use game::{Game, Phase};
pub use turn::{ActionRecord, TurnAction, TurnState};
