//! Player identification, per-player storage and the player roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Games hold 2 to 4 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexable by
//! `PlayerId`. Scores are kept in one.
//!
//! ## Player
//!
//! Name, a fixed pawn roster and the one-shot special capacity.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{GameError, Result};
use super::pawn::{Pawn, PawnId};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_territory::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rust_territory::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<usize> = PlayerMap::with_value(2, 0);
/// scores[PlayerId::new(1)] += 12;
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, or `None` for an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, or `None` for an unknown player.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A participant: name, pawn roster and special-capacity flag.
///
/// The roster size is fixed when the player is created. The capacity flag
/// goes from unused to used once and never resets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    pawns: Vec<Pawn>,
    capacity_used: bool,
}

impl Player {
    /// Create a player with `pawn_count` unplaced pawns.
    ///
    /// Pawns are drawn with the uppercased first letter of the name.
    pub fn new(id: PlayerId, name: impl Into<String>, pawn_count: usize) -> Result<Self> {
        let name = name.into();
        let glyph = name
            .trim()
            .chars()
            .next()
            .ok_or(GameError::EmptyPlayerName(id))?;
        let glyph = glyph.to_uppercase().next().unwrap_or(glyph);
        if pawn_count == 0 || pawn_count > u8::MAX as usize {
            return Err(GameError::InvalidPawnCount(pawn_count));
        }

        let pawns = (0..pawn_count as u8)
            .map(|index| Pawn::new(PawnId::new(id, index), glyph))
            .collect();

        Ok(Self {
            id,
            name,
            pawns,
            capacity_used: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full roster, in index order.
    #[must_use]
    pub fn pawns(&self) -> &[Pawn] {
        &self.pawns
    }

    /// Roster size.
    #[must_use]
    pub fn pawn_count(&self) -> usize {
        self.pawns.len()
    }

    /// Pawn at `index` in the roster.
    pub fn pawn(&self, index: usize) -> Result<&Pawn> {
        self.pawns.get(index).ok_or(GameError::PawnIndexOutOfRange {
            index,
            roster: self.pawns.len(),
        })
    }

    /// Ids of every pawn in the roster.
    pub fn pawn_ids(&self) -> impl Iterator<Item = PawnId> + '_ {
        self.pawns.iter().map(Pawn::id)
    }

    #[must_use]
    pub fn is_capacity_used(&self) -> bool {
        self.capacity_used
    }

    /// Spend the special capacity. Idempotent.
    pub fn use_capacity(&mut self) {
        self.capacity_used = true;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
        assert_eq!(map.get(PlayerId::new(4)), None);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<usize> = PlayerMap::new(2, |p| p.index() + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_glyph_uppercases_non_ascii() {
        let player = Player::new(PlayerId::new(0), "émile", 2).unwrap();
        assert!(player.pawns().iter().all(|pawn| pawn.glyph() == 'É'));
    }

    #[test]
    fn test_player_roster() {
        let player = Player::new(PlayerId::new(1), "bob", 4).unwrap();

        assert_eq!(player.pawn_count(), 4);
        assert_eq!(player.name(), "bob");
        for (index, pawn) in player.pawns().iter().enumerate() {
            assert_eq!(pawn.id(), PawnId::new(PlayerId::new(1), index as u8));
            assert_eq!(pawn.glyph(), 'B');
        }
    }

    #[test]
    fn test_pawn_index_out_of_range() {
        let player = Player::new(PlayerId::new(0), "Alice", 2).unwrap();
        assert!(player.pawn(1).is_ok());

        let err = player.pawn(2).unwrap_err();
        assert_eq!(err, GameError::PawnIndexOutOfRange { index: 2, roster: 2 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_invalid_player() {
        assert_eq!(
            Player::new(PlayerId::new(0), "  ", 2).unwrap_err(),
            GameError::EmptyPlayerName(PlayerId::new(0))
        );
        assert_eq!(
            Player::new(PlayerId::new(0), "Alice", 0).unwrap_err(),
            GameError::InvalidPawnCount(0)
        );
    }

    #[test]
    fn test_capacity_is_one_shot() {
        let mut player = Player::new(PlayerId::new(0), "Alice", 1).unwrap();
        assert!(!player.is_capacity_used());

        player.use_capacity();
        assert!(player.is_capacity_used());

        player.use_capacity();
        assert!(player.is_capacity_used());
    }
}
