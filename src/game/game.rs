//! Game state machine.
//!
//! ## Phases
//!
//! - **Setup**: players place their pawns, one call per pawn
//! - **Active**: turns of movement and wall placement
//! - **Over**: terminal; scores hold the last computation
//!
//! ## Scoring
//!
//! After every turn the board is partitioned into pawn-holding regions. A
//! region with pawns of a single player scores its cell count for that
//! player. The game ends once every such region is single-owner. Scores are
//! rebuilt from zero on every computation.

use im::Vector;
use tracing::{debug, info, instrument};

use super::turn::{ActionRecord, TurnState};
use crate::board::{Board, Region};
use crate::core::{
    Direction, GameConfig, GameError, PawnId, Player, PlayerId, PlayerMap, Position, Result,
};

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Setup,
    Active,
    Over,
}

/// A complete game: players, board, phase, turn and scores.
///
/// ## Example
///
/// ```
/// use rust_territory::core::{GameConfig, PlayerId, Position};
/// use rust_territory::game::{Game, Phase};
///
/// let mut game = Game::new(&GameConfig::new(["Alice", "Bob"])).unwrap();
/// for index in 0..4 {
///     game.player_place_pawns(PlayerId::new(0), index, Position::new(index, 0)).unwrap();
///     game.player_place_pawns(PlayerId::new(1), index, Position::new(index, 6)).unwrap();
/// }
/// assert!(game.all_pawns_placed());
///
/// game.start().unwrap();
/// assert_eq!(game.phase(), Phase::Active);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    players: Vec<Player>,
    board: Board,
    started: bool,
    over: bool,
    current: usize,
    scores: PlayerMap<usize>,
    pub(super) turn: TurnState,
    pub(super) turn_number: u32,
    pub(super) history: Vector<ActionRecord>,
}

impl Game {
    /// Create a game in the setup phase.
    #[instrument]
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let pawns = config.pawns_per_player()?;

        let players = config
            .player_names
            .iter()
            .zip(PlayerId::all(config.player_count()))
            .map(|(name, id)| Player::new(id, name.as_str(), pawns))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            scores: PlayerMap::with_value(players.len(), 0),
            players,
            board: Board::new(config.board_size)?,
            started: false,
            over: false,
            current: 0,
            turn: TurnState::default(),
            turn_number: 1,
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Raise a wall for drivers that sequence turns themselves.
    ///
    /// Same contract as [`Board::place_wall`].
    pub fn place_wall(&mut self, position: Position, direction: Direction) -> bool {
        self.board.place_wall(position, direction)
    }

    /// Lower a wall for drivers that sequence turns themselves.
    ///
    /// Same contract as [`Board::remove_wall`]; the border stays.
    pub fn remove_wall(&mut self, position: Position, direction: Direction) -> bool {
        self.board.remove_wall(position, direction)
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player. Fails with `UnknownPlayer` for an id not in this game.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id.index()).ok_or(GameError::UnknownPlayer(id))
    }

    pub(super) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id.index())
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index of the current player in turn order.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Where `pawn` stands. Fails with `PawnNotPlaced` while it is unplaced.
    pub fn pawn_position(&self, pawn: PawnId) -> Result<Position> {
        self.board.pawn_position(pawn)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.over
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.started, self.over) {
            (_, true) => Phase::Over,
            (true, false) => Phase::Active,
            (false, false) => Phase::Setup,
        }
    }

    /// Scores from the last computation.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<usize> {
        &self.scores
    }

    /// Players sharing the top score. Empty until the game is over.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        if !self.over {
            return Vec::new();
        }
        let best = self.scores.iter().map(|(_, &score)| score).max().unwrap_or(0);
        self.scores
            .iter()
            .filter(|(_, score)| **score == best)
            .map(|(player, _)| player)
            .collect()
    }

    /// Current pawn-holding regions of the board.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        self.board.partition()
    }

    // === Setup ===

    /// Place pawn `pawn_index` of `player` on `position`.
    ///
    /// Returns `false` if the position is off the board or occupied. Fails
    /// with `UnknownPlayer` or `PawnIndexOutOfRange` for bad arguments and
    /// with `PawnAlreadyPlaced` if that pawn already stands somewhere.
    #[instrument(skip(self))]
    pub fn player_place_pawns(
        &mut self,
        player: PlayerId,
        pawn_index: usize,
        position: Position,
    ) -> Result<bool> {
        let pawn = self.player(player)?.pawn(pawn_index)?.id();
        if !self.board.is_position_on_board(position) {
            debug!("placement off the board");
            return Ok(false);
        }
        self.board.place_pawn_at(pawn, position)
    }

    /// Total pawns across all rosters.
    #[must_use]
    pub fn total_pawns(&self) -> usize {
        self.players.iter().map(Player::pawn_count).sum()
    }

    /// Whether every pawn of every player is on the board.
    #[must_use]
    pub fn all_pawns_placed(&self) -> bool {
        self.board.pawns_on_board() == self.total_pawns()
    }

    /// Leave the setup phase.
    ///
    /// Fails with `AlreadyStarted` on a second call and with
    /// `PlacementIncomplete` while pawns remain unplaced.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if !self.all_pawns_placed() {
            return Err(GameError::PlacementIncomplete {
                placed: self.board.pawns_on_board(),
                expected: self.total_pawns(),
            });
        }

        self.started = true;
        self.turn = TurnState::default();
        info!(players = self.players.len(), "game started");
        Ok(())
    }

    // === Turns ===

    /// Whether `player` can still act: at least one of their pawns has an
    /// open side to wall.
    pub fn can_player_play(&self, player: PlayerId) -> Result<bool> {
        for pawn in self.player(player)?.pawn_ids() {
            if self.board.can_pawn_place_wall(pawn)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Hand the turn to the next player.
    ///
    /// During play the scores are recomputed first, and players who cannot
    /// act are skipped. If nobody can act the game ends. Fails with
    /// `GameOver` once the game has ended. On error nothing changes.
    #[instrument(skip(self))]
    pub fn next_player(&mut self) -> Result<()> {
        if self.over {
            return Err(GameError::GameOver);
        }

        let count = self.players.len();
        let first = (self.current + 1) % count;
        if !self.started {
            self.current = first;
            self.turn = TurnState::default();
            return Ok(());
        }

        let (scores, partitioned) = self.territory()?;
        let next = if partitioned {
            None
        } else {
            self.first_able_player(first)?
        };

        self.scores = scores;
        self.turn_number += 1;
        self.turn = TurnState::default();
        self.current = next.unwrap_or(first);
        if partitioned {
            self.over = true;
            info!("board fully partitioned, game over");
        } else if next.is_none() {
            self.over = true;
            info!("no player can act, game over");
        }
        Ok(())
    }

    /// First player from `first` onwards, in turn order, who can act.
    fn first_able_player(&self, first: usize) -> Result<Option<usize>> {
        let count = self.players.len();
        for offset in 0..count {
            let index = (first + offset) % count;
            if self.can_player_play(self.players[index].id())? {
                return Ok(Some(index));
            }
            debug!(player = index, "skipping blocked player");
        }
        Ok(None)
    }

    /// Recompute scores and the game-over flag from the board.
    ///
    /// Fails with `NotStarted` during setup and with `UnknownPlayer` if a
    /// pawn on the board belongs to no player of this game.
    #[instrument(skip(self))]
    pub fn calculation_over(&mut self) -> Result<()> {
        if !self.started {
            return Err(GameError::NotStarted);
        }

        let (scores, partitioned) = self.territory()?;
        self.scores = scores;
        if partitioned && !self.over {
            self.over = true;
            info!("board fully partitioned, game over");
        }
        Ok(())
    }

    /// Scores per player, and whether every pawn-holding region has a
    /// single owner.
    fn territory(&self) -> Result<(PlayerMap<usize>, bool)> {
        let regions = self.board.partition();
        let mut scores = PlayerMap::with_value(self.players.len(), 0);
        let mut single_owner = 0;
        for region in &regions {
            if let Some(owner) = region.sole_owner() {
                *scores
                    .get_mut(owner)
                    .ok_or(GameError::UnknownPlayer(owner))? += region.len();
                single_owner += 1;
            }
        }

        debug!(regions = regions.len(), single_owner, "territory computed");
        Ok((scores, !regions.is_empty() && single_owner == regions.len()))
    }
}
