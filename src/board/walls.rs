//! Wall segments.
//!
//! A wall is an edge of the grid, not a cell. Each edge has exactly one
//! canonical [`WallSegment`]:
//! - horizontal segments run along the top of cell `(x, y)`; `y` ranges
//!   over `0..=N`, so row `N` is the bottom border
//! - vertical segments run along the left of cell `(x, y)`; `x` ranges
//!   over `0..=N`, so column `N` is the right border
//!
//! The north edge of `(x, y)` and the south edge of `(x, y - 1)` map to the
//! same segment, which makes wall queries symmetric by construction.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, Position};

/// Which way a segment runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Canonical identifier of one grid edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallSegment {
    orientation: Orientation,
    x: usize,
    y: usize,
}

impl WallSegment {
    #[must_use]
    pub const fn new(orientation: Orientation, x: usize, y: usize) -> Self {
        Self { orientation, x, y }
    }

    /// The segment on the `direction` side of the cell at `position`.
    ///
    /// ```
    /// use rust_territory::board::WallSegment;
    /// use rust_territory::core::{Direction, Position};
    ///
    /// let below = WallSegment::of(Position::new(2, 2), Direction::South);
    /// let above = WallSegment::of(Position::new(2, 3), Direction::North);
    /// assert_eq!(below, above);
    /// ```
    #[must_use]
    pub fn of(position: Position, direction: Direction) -> Self {
        let (x, y) = (position.x(), position.y());
        match direction {
            Direction::North => Self::new(Orientation::Horizontal, x, y),
            Direction::South => Self::new(Orientation::Horizontal, x, y.saturating_add(1)),
            Direction::West => Self::new(Orientation::Vertical, x, y),
            Direction::East => Self::new(Orientation::Vertical, x.saturating_add(1), y),
        }
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }
}

/// The set of raised segments on an N×N board.
///
/// Horizontal slots form an N×(N+1) grid and vertical slots an (N+1)×N
/// grid. Border slots are raised at construction and cannot be lowered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walls {
    size: usize,
    raised: FxHashSet<WallSegment>,
}

impl Walls {
    /// Create the wall set for an N×N board with only the border raised.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut raised = FxHashSet::default();
        for i in 0..size {
            raised.insert(WallSegment::new(Orientation::Horizontal, i, 0));
            raised.insert(WallSegment::new(Orientation::Horizontal, i, size));
            raised.insert(WallSegment::new(Orientation::Vertical, 0, i));
            raised.insert(WallSegment::new(Orientation::Vertical, size, i));
        }
        Self { size, raised }
    }

    /// Whether `segment` addresses a slot of this board.
    #[must_use]
    pub fn in_range(&self, segment: WallSegment) -> bool {
        match segment.orientation {
            Orientation::Horizontal => segment.x < self.size && segment.y <= self.size,
            Orientation::Vertical => segment.x <= self.size && segment.y < self.size,
        }
    }

    /// Whether `segment` lies on the outer ring.
    #[must_use]
    pub fn is_border(&self, segment: WallSegment) -> bool {
        self.in_range(segment)
            && match segment.orientation {
                Orientation::Horizontal => segment.y == 0 || segment.y == self.size,
                Orientation::Vertical => segment.x == 0 || segment.x == self.size,
            }
    }

    /// Whether `segment` is raised. Slots outside the board read as open.
    #[must_use]
    pub fn contains(&self, segment: WallSegment) -> bool {
        self.raised.contains(&segment)
    }

    /// Raise a segment. Returns `false` if out of range or already raised.
    pub fn insert(&mut self, segment: WallSegment) -> bool {
        self.in_range(segment) && self.raised.insert(segment)
    }

    /// Lower a segment. Returns `false` if out of range, on the border, or
    /// not raised.
    pub fn remove(&mut self, segment: WallSegment) -> bool {
        !self.is_border(segment) && self.in_range(segment) && self.raised.remove(&segment)
    }

    /// Iterate over raised segments in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = WallSegment> {
        let mut segments: Vec<_> = self.raised.iter().copied().collect();
        segments.sort_unstable();
        segments.into_iter()
    }

    /// Number of raised segments that are not on the border.
    #[must_use]
    pub fn interior_count(&self) -> usize {
        self.raised.len() - 4 * self.size
    }
}
