//! Grid coordinates and the four movement directions.
//!
//! `x` grows eastward and `y` grows southward, so `(0, 0)` is the
//! north-west corner. A [`Position`] can never hold a negative coordinate;
//! whether it lies inside a particular board is the board's business.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit vector `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}

/// Immutable, non-negative grid coordinate.
///
/// ```
/// use rust_territory::core::{Direction, Position};
///
/// let origin = Position::new(0, 0);
/// let east = origin.step(Direction::East).unwrap();
/// assert_eq!(east, Position::new(1, 0));
/// assert_eq!(origin.distance_to(Position::new(2, 3)), 5);
///
/// // Stepping below zero is an error, not a wrap-around.
/// assert!(origin.step(Direction::North).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Create a position from unsigned coordinates.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Create a position from signed coordinates.
    ///
    /// Fails with `NegativeCoordinate` if either coordinate is below zero.
    pub fn try_new(x: i64, y: i64) -> Result<Self> {
        if x < 0 || y < 0 {
            return Err(GameError::NegativeCoordinate { x, y });
        }
        Ok(Self::new(x as usize, y as usize))
    }

    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The neighbouring position one unit towards `direction`.
    ///
    /// Fails with `NegativeCoordinate` when the result would leave the
    /// non-negative quadrant and with `OutOfBoard` when it would overflow.
    pub fn step(self, direction: Direction) -> Result<Self> {
        let (dx, dy) = direction.delta();
        match (
            self.x.checked_add_signed(dx as isize),
            self.y.checked_add_signed(dy as isize),
        ) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ if dx < 0 || dy < 0 => Err(GameError::NegativeCoordinate {
                x: signed(self.x).saturating_add(dx),
                y: signed(self.y).saturating_add(dy),
            }),
            _ => Err(GameError::OutOfBoard(self)),
        }
    }
}

fn signed(coordinate: usize) -> i64 {
    i64::try_from(coordinate).unwrap_or(i64::MAX)
}

impl TryFrom<(i64, i64)> for Position {
    type Error = GameError;

    fn try_from((x, y): (i64, i64)) -> Result<Self> {
        Self::try_new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_try_new_rejects_negative() {
        let err = Position::try_new(-1, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(Position::try_new(2, -5).is_err());
        assert_eq!(Position::try_new(2, 5).unwrap(), Position::new(2, 5));
    }

    #[test]
    fn test_try_from_tuple() {
        let pos: Position = (4, 1).try_into().unwrap();
        assert_eq!(pos, Position::new(4, 1));
        assert!(Position::try_from((0, -1)).is_err());
    }

    #[test]
    fn test_step_each_direction() {
        let center = Position::new(3, 3);
        assert_eq!(center.step(Direction::North).unwrap(), Position::new(3, 2));
        assert_eq!(center.step(Direction::South).unwrap(), Position::new(3, 4));
        assert_eq!(center.step(Direction::West).unwrap(), Position::new(2, 3));
        assert_eq!(center.step(Direction::East).unwrap(), Position::new(4, 3));
    }

    #[test]
    fn test_step_below_zero_fails() {
        let corner = Position::new(0, 0);
        assert!(corner.step(Direction::North).is_err());
        assert!(corner.step(Direction::West).is_err());
        assert!(corner.step(Direction::South).is_ok());
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 2);
        assert_eq!(a.distance_to(b), 6);
        assert_eq!(b.distance_to(a), 6);
        assert_eq!(a.distance_to(a), 0);
    }

    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 6).to_string(), "(2,6)");
        assert_eq!(Direction::East.to_string(), "east");
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new(3, 4);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }

    #[test]
    fn test_step_past_usize_max_fails() {
        let edge = Position::new(usize::MAX, 0);
        let err = edge.step(Direction::East).unwrap_err();
        assert_eq!(err, GameError::OutOfBoard(edge));
        assert_eq!(
            edge.step(Direction::West).unwrap(),
            Position::new(usize::MAX - 1, 0)
        );
        assert_eq!(
            Position::new(usize::MAX, 0).step(Direction::North).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
