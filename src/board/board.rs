//! The playing surface: an N×N grid of cells plus wall segments.
//!
//! The board owns two pieces of occupancy bookkeeping that always change
//! together:
//! - each cell's [`Occupant`]
//! - `locations`, mapping a pawn to the cell it stands on
//!
//! A pawn that is not in `locations` is unplaced.
//!
//! [`Occupant`]: super::cell::Occupant

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use super::cell::Cell;
use super::walls::{WallSegment, Walls};
use crate::core::{
    Direction, GameError, PawnId, Position, Result, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};

/// An N×N board with walls and pawns.
///
/// ## Usage
///
/// ```
/// use rust_territory::board::Board;
/// use rust_territory::core::{Direction, PawnId, PlayerId, Position};
///
/// let mut board = Board::new(7).unwrap();
/// let pawn = PawnId::new(PlayerId::new(0), 0);
///
/// assert!(board.place_pawn_at(pawn, Position::new(3, 3)).unwrap());
/// assert!(board.place_wall(Position::new(3, 3), Direction::East));
///
/// // The wall blocks the step east, the step south is free.
/// assert!(!board.move_pawn_at(Position::new(3, 3), Direction::East).unwrap());
/// assert!(board.move_pawn_at(Position::new(3, 3), Direction::South).unwrap());
/// assert_eq!(board.pawn_position(pawn).unwrap(), Position::new(3, 4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major: index = y * size + x.
    cells: Vec<Cell>,
    walls: Walls,
    locations: FxHashMap<PawnId, Position>,
}

impl Board {
    /// Create an empty board with only the border walls raised.
    ///
    /// Fails with `BoardTooSmall` if `size < 7` and with `BoardTooLarge`
    /// if `size > 64`.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(GameError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self::build(size))
    }

    fn build(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|y| (0..size).map(move |x| Cell::new(Position::new(x, y))))
            .collect();

        Self {
            size,
            cells,
            walls: Walls::new(size),
            locations: FxHashMap::default(),
        }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `position` is inside the N×N playable area.
    #[must_use]
    pub fn is_position_on_board(&self, position: Position) -> bool {
        position.x() < self.size && position.y() < self.size
    }

    fn index(&self, position: Position) -> usize {
        position.y() * self.size + position.x()
    }

    fn ensure_on_board(&self, position: Position) -> Result<()> {
        if self.is_position_on_board(position) {
            Ok(())
        } else {
            Err(GameError::OutOfBoard(position))
        }
    }

    /// On-board neighbour of `position` towards `direction`, ignoring walls.
    pub(crate) fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .step(direction)
            .ok()
            .filter(|next| self.is_position_on_board(*next))
    }

    // === Walls ===

    /// Raise the wall on the `direction` side of `position`.
    ///
    /// Returns `false` without mutation if the segment is outside the board
    /// or already raised.
    pub fn place_wall(&mut self, position: Position, direction: Direction) -> bool {
        let placed = self.walls.insert(WallSegment::of(position, direction));
        if !placed {
            debug!(%position, %direction, "wall not placed");
        }
        placed
    }

    /// Lower the wall on the `direction` side of `position`.
    ///
    /// Returns `false` without mutation if the segment is outside the board,
    /// already open, or part of the border.
    pub fn remove_wall(&mut self, position: Position, direction: Direction) -> bool {
        let removed = self.walls.remove(WallSegment::of(position, direction));
        if !removed {
            debug!(%position, %direction, "wall not removed");
        }
        removed
    }

    /// Whether the `direction` side of `position` is walled.
    #[must_use]
    pub fn is_wall_at(&self, position: Position, direction: Direction) -> bool {
        self.walls.contains(WallSegment::of(position, direction))
    }

    /// Whether a wall separates two adjacent cells.
    ///
    /// Fails with `OutOfBoard` if either position is off the board and with
    /// `NotAdjacent` if they are not orthogonal neighbours.
    pub fn is_wall_between(&self, from: Position, to: Position) -> Result<bool> {
        self.ensure_on_board(from)?;
        self.ensure_on_board(to)?;
        if from.distance_to(to) != 1 {
            return Err(GameError::NotAdjacent { from, to });
        }

        let segment = if from.y() != to.y() {
            WallSegment::of(Position::new(from.x(), from.y().max(to.y())), Direction::North)
        } else {
            WallSegment::of(Position::new(from.x().max(to.x()), from.y()), Direction::West)
        };
        Ok(self.walls.contains(segment))
    }

    /// All wall segments.
    #[must_use]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    // === Cells ===

    /// The cell at `position`. Fails with `OutOfBoard` if off the grid.
    pub fn cell_at(&self, position: Position) -> Result<&Cell> {
        self.ensure_on_board(position)?;
        Ok(&self.cells[self.index(position)])
    }

    /// Iterate over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The pawn standing on `position`, if any.
    pub fn pawn_at(&self, position: Position) -> Result<Option<PawnId>> {
        Ok(self.cell_at(position)?.pawn())
    }

    // === Pawns ===

    /// Number of pawns currently on the board.
    #[must_use]
    pub fn pawns_on_board(&self) -> usize {
        self.locations.len()
    }

    /// Where `pawn` stands. Fails with `PawnNotPlaced` if it is not on the board.
    pub fn pawn_position(&self, pawn: PawnId) -> Result<Position> {
        self.locations
            .get(&pawn)
            .copied()
            .ok_or(GameError::PawnNotPlaced(pawn))
    }

    /// Whether `pawn` stands on the board.
    #[must_use]
    pub fn is_placed(&self, pawn: PawnId) -> bool {
        self.locations.contains_key(&pawn)
    }

    /// Every placed pawn with its position, ordered by pawn id.
    #[must_use]
    pub fn placed_pawns(&self) -> Vec<(PawnId, Position)> {
        let mut placed: Vec<_> = self.locations.iter().map(|(&p, &pos)| (p, pos)).collect();
        placed.sort_unstable();
        placed
    }

    /// Put `pawn` on `position`.
    ///
    /// Returns `false` if the cell is occupied. Fails with `OutOfBoard` for
    /// an off-grid position and with `PawnAlreadyPlaced` if the pawn already
    /// stands somewhere.
    #[instrument(skip(self))]
    pub fn place_pawn_at(&mut self, pawn: PawnId, position: Position) -> Result<bool> {
        self.ensure_on_board(position)?;
        if self.locations.contains_key(&pawn) {
            return Err(GameError::PawnAlreadyPlaced(pawn));
        }

        let index = self.index(position);
        if self.cells[index].is_occupied() {
            debug!("cell occupied");
            return Ok(false);
        }

        self.cells[index].occupy(pawn);
        self.locations.insert(pawn, position);
        Ok(true)
    }

    /// Take whatever pawn stands on `position` off the board.
    ///
    /// The cell is always left empty. Fails with `OutOfBoard` for an
    /// off-grid position.
    pub fn remove_pawn_at(&mut self, position: Position) -> Result<Option<PawnId>> {
        self.ensure_on_board(position)?;
        let index = self.index(position);
        let pawn = self.cells[index].vacate();
        if let Some(pawn) = pawn {
            self.locations.remove(&pawn);
        }
        Ok(pawn)
    }

    /// Step the pawn on `position` one cell towards `direction`.
    ///
    /// Returns `false` without mutation if the destination is occupied or a
    /// wall lies in between. Fails with `NoPawnAt` if the source is empty and
    /// with `MoveOffBoard` if the step leaves the board.
    #[instrument(skip(self))]
    pub fn move_pawn_at(&mut self, position: Position, direction: Direction) -> Result<bool> {
        if !self.cell_at(position)?.is_occupied() {
            return Err(GameError::NoPawnAt(position));
        }

        let off_board = GameError::MoveOffBoard {
            from: position,
            direction,
        };
        let destination = position.step(direction).map_err(|_| off_board.clone())?;
        if !self.is_position_on_board(destination) {
            return Err(off_board);
        }

        if self.cell_at(destination)?.is_occupied() || self.is_wall_between(position, destination)? {
            debug!(%destination, "step blocked");
            return Ok(false);
        }

        self.relocate_pawn(position, destination)
    }

    /// Move the pawn on `from` straight to `to`, ignoring walls and distance.
    ///
    /// Callers check legality first (see `can_move_to`). Returns `false`
    /// if `to` is occupied. Fails with `NoPawnAt` if `from` is empty and with
    /// `OutOfBoard` if either position is off the grid.
    pub fn relocate_pawn(&mut self, from: Position, to: Position) -> Result<bool> {
        self.ensure_on_board(to)?;
        if from == to {
            return match self.pawn_at(from)? {
                Some(_) => Ok(true),
                None => Err(GameError::NoPawnAt(from)),
            };
        }
        if self.cell_at(to)?.is_occupied() {
            return Ok(false);
        }

        let pawn = self
            .remove_pawn_at(from)?
            .ok_or(GameError::NoPawnAt(from))?;
        self.place_pawn_at(pawn, to)
    }
}

impl Default for Board {
    /// A 7×7 board.
    fn default() -> Self {
        Self::build(DEFAULT_BOARD_SIZE)
    }
}
