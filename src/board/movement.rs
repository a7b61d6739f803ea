//! Movement legality.
//!
//! A pawn has a budget of [`MOVE_BUDGET`] movement units per turn. The
//! budget can go on two single steps or on one two-unit jump taken as the
//! first action of the turn. A jump passes through an intermediate cell that
//! must itself be free and reachable; there is no jumping over pawns.

use tracing::instrument;

use super::board::Board;
use crate::core::{Direction, PawnId, Position, Result};

/// Movement units a pawn may spend per turn.
pub const MOVE_BUDGET: usize = 2;

impl Board {
    /// Free destination and no wall between two adjacent cells.
    fn is_open_step(&self, from: Position, target: Position) -> Result<bool> {
        Ok(!self.cell_at(target)?.is_occupied() && !self.is_wall_between(from, target)?)
    }

    /// Whether both legs `from → via → target` are open.
    fn is_open_path(&self, from: Position, via: Position, target: Position) -> Result<bool> {
        Ok(self.is_open_step(from, via)? && self.is_open_step(via, target)?)
    }

    /// Whether `pawn` may end its movement on `target` having already spent
    /// `moves_used` units this turn.
    ///
    /// - distance 0: always, while budget remains
    /// - distance 1: with at most one unit spent, if the step is open
    /// - distance 2: only as the first movement of the turn, along a
    ///   straight or L-shaped path whose intermediate cell and destination
    ///   are both open
    ///
    /// Off-board targets and exhausted budgets give `false`. Fails with
    /// `PawnNotPlaced` if the pawn is not on the board.
    #[instrument(level = "trace", skip(self))]
    pub fn can_move_to(&self, pawn: PawnId, target: Position, moves_used: usize) -> Result<bool> {
        if !self.is_position_on_board(target) {
            return Ok(false);
        }
        if moves_used >= MOVE_BUDGET {
            return Ok(false);
        }

        let current = self.pawn_position(pawn)?;
        let distance = current.distance_to(target);
        if distance > 2 {
            return Ok(false);
        }

        if distance == 0 && moves_used <= 2 {
            return Ok(true);
        }

        if distance == 1 && moves_used <= 1 {
            return self.is_open_step(current, target);
        }

        if distance == 2 && moves_used == 0 {
            let dx = target.x() as i64 - current.x() as i64;
            let dy = target.y() as i64 - current.y() as i64;

            if dx == 0 || dy == 0 {
                let via = Position::new(
                    (current.x() as i64 + dx / 2) as usize,
                    (current.y() as i64 + dy / 2) as usize,
                );
                return self.is_open_path(current, via, target);
            }

            if dx.abs() == 1 && dy.abs() == 1 {
                let horizontal_first = Position::new(target.x(), current.y());
                let vertical_first = Position::new(current.x(), target.y());
                return Ok(self.is_open_path(current, horizontal_first, target)?
                    || self.is_open_path(current, vertical_first, target)?);
            }
        }

        Ok(false)
    }

    /// Every cell `pawn` may legally end on, given `moves_used`.
    ///
    /// Includes the pawn's own cell while budget remains. Sorted by position.
    pub fn legal_destinations(&self, pawn: PawnId, moves_used: usize) -> Result<Vec<Position>> {
        let current = self.pawn_position(pawn)?;
        let mut destinations = Vec::new();

        let lo_x = current.x().saturating_sub(2);
        let lo_y = current.y().saturating_sub(2);
        let hi_x = (current.x() + 2).min(self.size() - 1);
        let hi_y = (current.y() + 2).min(self.size() - 1);

        for y in lo_y..=hi_y {
            for x in lo_x..=hi_x {
                let target = Position::new(x, y);
                if self.can_move_to(pawn, target, moves_used)? {
                    destinations.push(target);
                }
            }
        }

        destinations.sort_unstable();
        Ok(destinations)
    }

    /// Loose "not fully locked" check.
    ///
    /// Counts walled sides and occupied on-board neighbours independently
    /// and reports `false` only when both counts reach four. The counts are
    /// not matched per direction and jumps are not considered, so this can
    /// answer `true` for a pawn with no legal step. Use
    /// [`legal_destinations`](Self::legal_destinations) for an exact answer.
    pub fn can_pawn_move(&self, pawn: PawnId) -> Result<bool> {
        let position = self.pawn_position(pawn)?;
        let mut walls = 0;
        let mut pawns = 0;

        for direction in Direction::ALL {
            if self.is_wall_at(position, direction) {
                walls += 1;
            }
            if let Some(next) = self.neighbor(position, direction) {
                if self.cell_at(next)?.is_occupied() {
                    pawns += 1;
                }
            }
        }

        Ok(walls < 4 || pawns < 4)
    }

    /// Whether at least one side of the pawn's cell is still open.
    pub fn can_pawn_place_wall(&self, pawn: PawnId) -> Result<bool> {
        let position = self.pawn_position(pawn)?;
        let walls = Direction::ALL
            .iter()
            .filter(|&&direction| self.is_wall_at(position, direction))
            .count();
        Ok(walls < 4)
    }
}
