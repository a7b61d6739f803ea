//! The board: cells, walls, pawn occupancy, movement and regions.
//!
//! `Board` is split over several files by concern:
//! - `board`: grid, wall and occupancy mutation
//! - `movement`: movement-budget legality checks
//! - `territory`: flood fill and region partition

pub mod cell;
pub mod walls;
#[allow(clippy::module_inception)]
pub mod board;
pub mod movement;
pub mod territory;

pub use cell::{Cell, Occupant};
pub use walls::{Orientation, WallSegment, Walls};
pub use board::Board;
pub use movement::MOVE_BUDGET;
pub use territory::Region;
