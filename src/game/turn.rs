//! Turn driver.
//!
//! A turn is a short sequence of actions by the current player:
//!
//! 1. optionally arm the one-shot wall removal (`UseCapacity`)
//! 2. select one of their pawns
//! 3. spend up to [`MOVE_BUDGET`] movement units on it
//! 4. exactly one wall action next to the pawn: place a wall, or remove one
//!    if the removal is armed
//! 5. end the turn
//!
//! Rule violations are rejected with `Ok(false)` and leave the game
//! untouched. Accepted actions are appended to the game history.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::game::Game;
use crate::board::{WallSegment, MOVE_BUDGET};
use crate::core::{Direction, GameError, PawnId, PlayerId, Position, Result};

/// One player action within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Arm the one-shot wall removal for this turn.
    UseCapacity,
    /// Select a pawn by roster index.
    SelectPawn(usize),
    /// Move the selected pawn to a cell within reach.
    MoveTo(Position),
    /// Move the selected pawn one cell.
    Step(Direction),
    /// Raise a wall on a side of the selected pawn's cell.
    PlaceWall(Direction),
    /// Take down a wall on a side of the selected pawn's cell.
    RemoveWall(Direction),
    EndTurn,
}

/// An accepted action and who played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub turn: u32,
    pub action: TurnAction,
}

/// Progress of the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub selected: Option<PawnId>,
    pub moves_used: usize,
    pub removal_armed: bool,
    pub wall_done: bool,
}

impl TurnState {
    /// Movement units still available to the selected pawn.
    #[must_use]
    pub fn moves_left(&self) -> usize {
        MOVE_BUDGET.saturating_sub(self.moves_used)
    }
}

impl Game {
    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Turn counter, starting at 1 when play begins.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Apply one action for the current player.
    ///
    /// Returns `Ok(false)` if the action breaks a turn rule. Fails with
    /// `NotStarted` during setup, `GameOver` once the game has ended, and
    /// `PawnIndexOutOfRange` for a bad roster index.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: TurnAction) -> Result<bool> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_started() {
            return Err(GameError::NotStarted);
        }

        let player = self.current_player().id();
        let turn = self.turn_number;

        let accepted = match action {
            TurnAction::UseCapacity => self.arm_removal(),
            TurnAction::SelectPawn(index) => self.select_pawn(index)?,
            TurnAction::MoveTo(target) => self.move_selected(target)?,
            TurnAction::Step(direction) => match self.selected_position()? {
                Some(from) => match self.board().neighbor(from, direction) {
                    Some(target) => self.move_selected(target)?,
                    None => false,
                },
                None => false,
            },
            TurnAction::PlaceWall(direction) => self.place_selected_wall(direction)?,
            TurnAction::RemoveWall(direction) => self.remove_selected_wall(direction)?,
            TurnAction::EndTurn => {
                if self.turn.wall_done {
                    self.next_player()?;
                    self.history.push_back(ActionRecord { player, turn, action });
                    return Ok(true);
                }
                false
            }
        };

        if accepted {
            self.history.push_back(ActionRecord { player, turn, action });
        } else {
            debug!(%player, "action rejected");
        }
        Ok(accepted)
    }

    /// Every action `apply` would accept right now.
    pub fn legal_actions(&self) -> Result<Vec<TurnAction>> {
        let mut actions = Vec::new();
        if !self.is_started() || self.is_game_over() {
            return Ok(actions);
        }

        let turn = self.turn;
        if turn.wall_done {
            actions.push(TurnAction::EndTurn);
            return Ok(actions);
        }

        let Some(pawn) = turn.selected else {
            if self.can_arm_removal() {
                actions.push(TurnAction::UseCapacity);
            }
            for index in 0..self.current_player().pawn_count() {
                let id = self.current_player().pawn(index)?.id();
                if turn.removal_armed || self.board().can_pawn_place_wall(id)? {
                    actions.push(TurnAction::SelectPawn(index));
                }
            }
            return Ok(actions);
        };

        let from = self.board().pawn_position(pawn)?;
        for target in self.board().legal_destinations(pawn, turn.moves_used)? {
            if target != from {
                actions.push(TurnAction::MoveTo(target));
            }
        }
        for direction in Direction::ALL {
            if let Some(target) = self.board().neighbor(from, direction) {
                if self.board().can_move_to(pawn, target, turn.moves_used)? {
                    actions.push(TurnAction::Step(direction));
                }
            }
        }
        for direction in Direction::ALL {
            if !self.board().is_wall_at(from, direction) {
                actions.push(TurnAction::PlaceWall(direction));
            } else if turn.removal_armed && self.is_removable(from, direction) {
                actions.push(TurnAction::RemoveWall(direction));
            }
        }
        Ok(actions)
    }

    // === Action handlers ===

    fn can_arm_removal(&self) -> bool {
        self.turn.selected.is_none()
            && !self.turn.removal_armed
            && !self.current_player().is_capacity_used()
    }

    fn arm_removal(&mut self) -> bool {
        if !self.can_arm_removal() {
            return false;
        }
        self.turn.removal_armed = true;
        true
    }

    fn select_pawn(&mut self, index: usize) -> Result<bool> {
        let pawn = self.current_player().pawn(index)?.id();
        if self.turn.selected.is_some() {
            return Ok(false);
        }
        if !self.turn.removal_armed && !self.board().can_pawn_place_wall(pawn)? {
            return Ok(false);
        }
        self.turn.selected = Some(pawn);
        Ok(true)
    }

    fn selected_position(&self) -> Result<Option<Position>> {
        self.turn
            .selected
            .map(|pawn| self.board().pawn_position(pawn))
            .transpose()
    }

    fn move_selected(&mut self, target: Position) -> Result<bool> {
        let Some(pawn) = self.turn.selected else {
            return Ok(false);
        };
        if self.turn.wall_done {
            return Ok(false);
        }

        let from = self.board().pawn_position(pawn)?;
        if from == target || !self.board().can_move_to(pawn, target, self.turn.moves_used)? {
            return Ok(false);
        }
        if !self.board_mut().relocate_pawn(from, target)? {
            return Ok(false);
        }

        self.turn.moves_used += from.distance_to(target);
        Ok(true)
    }

    fn place_selected_wall(&mut self, direction: Direction) -> Result<bool> {
        let Some(from) = self.selected_position()? else {
            return Ok(false);
        };
        if self.turn.wall_done || !self.board_mut().place_wall(from, direction) {
            return Ok(false);
        }

        // An armed removal not taken lapses without spending the capacity.
        self.turn.removal_armed = false;
        self.turn.wall_done = true;
        Ok(true)
    }

    fn is_removable(&self, position: Position, direction: Direction) -> bool {
        !self
            .board()
            .walls()
            .is_border(WallSegment::of(position, direction))
    }

    fn remove_selected_wall(&mut self, direction: Direction) -> Result<bool> {
        let Some(from) = self.selected_position()? else {
            return Ok(false);
        };
        if self.turn.wall_done || !self.turn.removal_armed {
            return Ok(false);
        }
        if !self.board_mut().remove_wall(from, direction) {
            return Ok(false);
        }

        let player = self.current_player().id();
        self.player_mut(player)?.use_capacity();
        self.turn.removal_armed = false;
        self.turn.wall_done = true;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    /// Alice on row 0, Bob on row 6, game started.
    fn started_game() -> Game {
        let mut game = Game::new(&GameConfig::new(["Alice", "Bob"])).unwrap();
        for index in 0..4 {
            game.player_place_pawns(PlayerId::new(0), index, Position::new(index, 0))
                .unwrap();
            game.player_place_pawns(PlayerId::new(1), index, Position::new(index, 6))
                .unwrap();
        }
        game.start().unwrap();
        game
    }

    #[test]
    fn test_apply_before_start() {
        let mut game = Game::new(&GameConfig::new(["Alice", "Bob"])).unwrap();
        assert_eq!(
            game.apply(TurnAction::SelectPawn(0)).unwrap_err(),
            GameError::NotStarted
        );
        assert!(game.legal_actions().unwrap().is_empty());
    }

    #[test]
    fn test_full_turn() {
        let mut game = started_game();
        assert!(game.apply(TurnAction::SelectPawn(0)).unwrap());
        assert!(game.apply(TurnAction::Step(Direction::South)).unwrap());
        assert!(game.apply(TurnAction::Step(Direction::South)).unwrap());
        assert_eq!(game.turn_state().moves_left(), 0);
        assert!(!game.apply(TurnAction::Step(Direction::South)).unwrap());

        assert!(game.apply(TurnAction::PlaceWall(Direction::East)).unwrap());
        assert!(game.apply(TurnAction::EndTurn).unwrap());

        assert_eq!(game.current_player().id(), PlayerId::new(1));
        assert_eq!(game.turn_number(), 2);
        assert_eq!(*game.turn_state(), TurnState::default());
        assert_eq!(game.history().len(), 5);
        assert!(game
            .board()
            .is_wall_at(Position::new(0, 2), Direction::East));
    }

    #[test]
    fn test_jump_spends_budget() {
        let mut game = started_game();
        game.apply(TurnAction::SelectPawn(1)).unwrap();
        assert!(game.apply(TurnAction::MoveTo(Position::new(1, 2))).unwrap());
        assert_eq!(game.turn_state().moves_used, 2);
        assert!(!game.apply(TurnAction::Step(Direction::East)).unwrap());
    }

    #[test]
    fn test_move_requires_selection() {
        let mut game = started_game();
        assert!(!game.apply(TurnAction::Step(Direction::South)).unwrap());
        assert!(!game.apply(TurnAction::PlaceWall(Direction::South)).unwrap());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_end_turn_requires_wall() {
        let mut game = started_game();
        game.apply(TurnAction::SelectPawn(0)).unwrap();
        assert!(!game.apply(TurnAction::EndTurn).unwrap());
        assert_eq!(game.current_player().id(), PlayerId::new(0));
    }

    #[test]
    fn test_single_wall_action() {
        let mut game = started_game();
        game.apply(TurnAction::SelectPawn(0)).unwrap();
        assert!(game.apply(TurnAction::PlaceWall(Direction::South)).unwrap());
        assert!(!game.apply(TurnAction::PlaceWall(Direction::East)).unwrap());
        assert!(!game.apply(TurnAction::Step(Direction::East)).unwrap());
        assert_eq!(game.legal_actions().unwrap(), vec![TurnAction::EndTurn]);
    }

    #[test]
    fn test_border_wall_rejected() {
        let mut game = started_game();
        game.apply(TurnAction::SelectPawn(0)).unwrap();
        assert!(!game.apply(TurnAction::PlaceWall(Direction::North)).unwrap());
        assert!(!game.turn_state().wall_done);
    }

    #[test]
    fn test_capacity_is_one_shot() {
        let mut game = started_game();
        game.board_mut().place_wall(Position::new(0, 0), Direction::South);

        assert!(game.apply(TurnAction::UseCapacity).unwrap());
        assert!(!game.apply(TurnAction::UseCapacity).unwrap());
        game.apply(TurnAction::SelectPawn(0)).unwrap();
        assert!(!game.apply(TurnAction::RemoveWall(Direction::North)).unwrap());
        assert!(game.apply(TurnAction::RemoveWall(Direction::South)).unwrap());
        assert!(game.current_player().is_capacity_used());
        assert!(!game.board().is_wall_at(Position::new(0, 0), Direction::South));
        game.apply(TurnAction::EndTurn).unwrap();

        // Bob's turn, then back to Alice who can no longer arm a removal.
        game.apply(TurnAction::SelectPawn(0)).unwrap();
        game.apply(TurnAction::PlaceWall(Direction::North)).unwrap();
        game.apply(TurnAction::PlaceWall(Direction::East)).unwrap();
        game.apply(TurnAction::EndTurn).unwrap();
        assert_eq!(game.current_player().id(), PlayerId::new(0));
        assert!(!game.apply(TurnAction::UseCapacity).unwrap());
    }

    #[test]
    fn test_place_wall_cancels_armed_removal() {
        let mut game = started_game();
        game.apply(TurnAction::UseCapacity).unwrap();
        game.apply(TurnAction::SelectPawn(0)).unwrap();
        assert!(game.apply(TurnAction::PlaceWall(Direction::South)).unwrap());
        assert!(!game.turn_state().removal_armed);
        assert!(!game.current_player().is_capacity_used());
    }

    #[test]
    fn test_boxed_pawn_needs_removal() {
        let mut game = started_game();
        game.board_mut().place_wall(Position::new(0, 0), Direction::South);
        game.board_mut().place_wall(Position::new(0, 0), Direction::East);

        assert!(!game.apply(TurnAction::SelectPawn(0)).unwrap());
        assert!(!game.legal_actions().unwrap().contains(&TurnAction::SelectPawn(0)));

        game.apply(TurnAction::UseCapacity).unwrap();
        assert!(game.apply(TurnAction::SelectPawn(0)).unwrap());
        assert_eq!(
            game.legal_actions().unwrap(),
            vec![
                TurnAction::RemoveWall(Direction::South),
                TurnAction::RemoveWall(Direction::East),
            ]
        );
    }

    #[test]
    fn test_bad_pawn_index() {
        let mut game = started_game();
        assert!(game.apply(TurnAction::SelectPawn(4)).is_err());
    }

    #[test]
    fn test_legal_actions_start_of_turn() {
        let game = started_game();
        assert_eq!(
            game.legal_actions().unwrap(),
            vec![
                TurnAction::UseCapacity,
                TurnAction::SelectPawn(0),
                TurnAction::SelectPawn(1),
                TurnAction::SelectPawn(2),
                TurnAction::SelectPawn(3),
            ]
        );
    }

    #[test]
    fn test_every_legal_action_is_accepted() {
        let game = started_game();
        let mut selected = game.clone();
        selected.apply(TurnAction::SelectPawn(2)).unwrap();

        for action in selected.legal_actions().unwrap() {
            let mut probe = selected.clone();
            assert!(probe.apply(action).unwrap(), "{action:?} rejected");
        }
    }

    #[test]
    fn test_action_serde() {
        let record = ActionRecord {
            player: PlayerId::new(1),
            turn: 3,
            action: TurnAction::MoveTo(Position::new(2, 4)),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_failed_end_turn_not_recorded() {
        let mut game = started_game();
        game.apply(TurnAction::SelectPawn(0)).unwrap();
        game.apply(TurnAction::PlaceWall(Direction::South)).unwrap();
        game.board_mut().remove_pawn_at(Position::new(0, 6)).unwrap();

        assert!(game.apply(TurnAction::EndTurn).is_err());
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_player().id(), PlayerId::new(0));
        assert!(game.turn_state().wall_done);
    }
}
