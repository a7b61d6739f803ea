//! Game configuration.
//!
//! Integrators describe a game with a `GameConfig` and hand it to
//! `Game::new`, which validates it. The defaults follow the standard rules:
//! - 7×7 board
//! - 2 players → 4 pawns each, 3 or 4 players → 2 pawns each

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::PlayerId;

/// Smallest playable board edge.
pub const MIN_BOARD_SIZE: usize = 7;

/// Largest playable board edge.
pub const MAX_BOARD_SIZE: usize = 64;

/// Board edge used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Fewest players in a game.
pub const MIN_PLAYERS: usize = 2;

/// Most players in a game.
pub const MAX_PLAYERS: usize = 4;

/// Standard roster size for a given number of players.
///
/// ```
/// use rust_territory::core::default_pawns_per_player;
///
/// assert_eq!(default_pawns_per_player(2).unwrap(), 4);
/// assert_eq!(default_pawns_per_player(3).unwrap(), 2);
/// assert_eq!(default_pawns_per_player(4).unwrap(), 2);
/// assert!(default_pawns_per_player(5).is_err());
/// ```
pub fn default_pawns_per_player(player_count: usize) -> Result<usize> {
    match player_count {
        2 => Ok(4),
        3 | 4 => Ok(2),
        n => Err(GameError::InvalidPlayerCount(n)),
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use rust_territory::core::GameConfig;
///
/// let config = GameConfig::new(["Alice", "Bob", "Carol"]).with_board_size(9);
///
/// assert_eq!(config.player_count(), 3);
/// assert_eq!(config.pawns_per_player().unwrap(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length (N for an N×N board).
    pub board_size: usize,

    /// Player names in turn order. The first name plays first.
    pub player_names: Vec<String>,

    /// Roster size override. `None` uses [`default_pawns_per_player`].
    pub pawns_per_player: Option<usize>,
}

impl GameConfig {
    /// Create a configuration for the given players on a default board.
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            player_names: player_names.into_iter().map(Into::into).collect(),
            pawns_per_player: None,
        }
    }

    /// Set the board edge length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Override the roster size.
    #[must_use]
    pub fn with_pawns_per_player(mut self, pawns: usize) -> Self {
        self.pawns_per_player = Some(pawns);
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Effective roster size.
    pub fn pawns_per_player(&self) -> Result<usize> {
        match self.pawns_per_player {
            Some(pawns) => Ok(pawns),
            None => default_pawns_per_player(self.player_count()),
        }
    }

    /// Check every setting. `Game::new` calls this.
    pub fn validate(&self) -> Result<()> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }

        if self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }

        let players = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(GameError::InvalidPlayerCount(players));
        }

        for (id, name) in PlayerId::all(players).zip(&self.player_names) {
            if name.trim().is_empty() {
                return Err(GameError::EmptyPlayerName(id));
            }
        }

        let pawns = self.pawns_per_player()?;
        if pawns == 0 || pawns > u8::MAX as usize {
            return Err(GameError::InvalidPawnCount(pawns));
        }

        let cells = self.board_size * self.board_size;
        if pawns * players > cells {
            return Err(GameError::TooManyPawns {
                pawns: pawns * players,
                cells,
            });
        }

        Ok(())
    }
}
