//! Connected regions.
//!
//! Walls cut the grid graph into regions. A region is the set of cells
//! reachable from a start cell without crossing a wall; pawns do not block
//! the traversal. Scoring partitions the board into the regions that hold
//! at least one pawn.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::board::Board;
use crate::core::{Direction, PlayerId, Position, Result};

/// A connected region together with the players who have pawns in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    cells: FxHashSet<Position>,
    /// Sorted, without duplicates.
    owners: SmallVec<[PlayerId; 4]>,
}

impl Region {
    /// Cells in the region.
    #[must_use]
    pub fn cells(&self) -> &FxHashSet<Position> {
        &self.cells
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Players with at least one pawn in the region, in id order.
    #[must_use]
    pub fn owners(&self) -> &[PlayerId] {
        &self.owners
    }

    /// The only player present, if exactly one is.
    #[must_use]
    pub fn sole_owner(&self) -> Option<PlayerId> {
        match self.owners.as_slice() {
            [owner] => Some(*owner),
            _ => None,
        }
    }
}

impl Board {
    /// Every cell reachable from `start` without crossing a wall.
    ///
    /// Fails with `OutOfBoard` if `start` is off the grid.
    ///
    /// ```
    /// use rust_territory::board::Board;
    /// use rust_territory::core::Position;
    ///
    /// let board = Board::default();
    /// assert_eq!(board.area_from(Position::new(3, 3)).unwrap().len(), 49);
    /// ```
    pub fn area_from(&self, start: Position) -> Result<FxHashSet<Position>> {
        self.cell_at(start)?;
        Ok(self.flood(start))
    }

    /// Breadth-first fill from an on-board `start`.
    fn flood(&self, start: Position) -> FxHashSet<Position> {
        let mut visited = FxHashSet::default();
        let mut frontier = VecDeque::new();
        visited.insert(start);
        frontier.push_back(start);

        while let Some(position) = frontier.pop_front() {
            for direction in Direction::ALL {
                if self.is_wall_at(position, direction) {
                    continue;
                }
                if let Some(next) = self.neighbor(position, direction) {
                    if visited.insert(next) {
                        frontier.push_back(next);
                    }
                }
            }
        }

        visited
    }

    /// Split the pawn-holding part of the board into regions.
    ///
    /// Every placed pawn lands in exactly one region. Regions are returned
    /// in the order of the lowest pawn id they contain.
    #[must_use]
    pub fn partition(&self) -> Vec<Region> {
        let mut processed: FxHashSet<Position> = FxHashSet::default();
        let mut regions = Vec::new();

        for (_, seed) in self.placed_pawns() {
            if processed.contains(&seed) {
                continue;
            }

            let cells = self.flood(seed);
            let mut owners: SmallVec<[PlayerId; 4]> = cells
                .iter()
                .filter_map(|&position| self.cell_at(position).ok().and_then(|cell| cell.owner()))
                .collect();
            owners.sort_unstable();
            owners.dedup();

            processed.extend(cells.iter().copied());
            regions.push(Region { cells, owners });
        }

        regions
    }
}
