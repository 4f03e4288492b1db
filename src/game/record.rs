//! Game record and turn driver.
//!
//! A `GameRecord` is what the store keeps per game: the players, the
//! current snapshot, the dice of the turn in progress and the winner. Its
//! methods drive a turn: roll, play moves one die at a time, undo within
//! the turn, end the turn.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Color, Dice, EngineError, Move, Position, RandomSource, UsedDice};
use crate::rules::{apply_move, available_moves, has_valid_moves, winner};

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: String,
    pub name: String,
}

impl PlayerInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// What happened after a move was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// Dice remain and at least one of them can be played.
    Continue,
    /// The turn passed to the opponent.
    TurnOver,
    /// The mover bore off the last checker.
    Won(Color),
}

/// One game: players, snapshot, turn state and revision marker.
///
/// `player1` plays White and moves first; `player2` plays Black and is
/// `None` while the game waits for an opponent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub player1: PlayerInfo,
    pub player2: Option<PlayerInfo>,
    pub position: Position,
    pub current_player: Color,
    pub dice: Dice,
    pub used_dice: UsedDice,
    pub winner: Option<Color>,

    /// Revision marker stamped by the store on every conditional write.
    pub last_update: u64,

    /// Snapshots taken before each move of the current turn.
    #[serde(skip)]
    history: Vector<(Position, UsedDice)>,
}

impl GameRecord {
    /// A new game in the starting position, White to move, no dice rolled.
    pub fn new(id: impl Into<String>, player1: PlayerInfo) -> Self {
        Self {
            id: id.into(),
            player1,
            player2: None,
            position: Position::starting(),
            current_player: Color::White,
            dice: Dice::default(),
            used_dice: UsedDice::none(),
            winner: None,
            last_update: 0,
            history: Vector::new(),
        }
    }

    /// Seat `player` as Black.
    #[must_use]
    pub fn with_player2(mut self, player: PlayerInfo) -> Self {
        self.player2 = Some(player);
        self
    }

    /// Start from `position` instead of the standard setup.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self.winner = winner(&position);
        self
    }

    /// Whether the game still waits for a second player.
    pub fn is_open(&self) -> bool {
        self.player2.is_none() && self.winner.is_none()
    }

    /// The color `player_id` plays in this game.
    pub fn color_of(&self, player_id: &str) -> Option<Color> {
        if self.player1.id == player_id {
            Some(Color::White)
        } else if self.player2.as_ref().is_some_and(|p| p.id == player_id) {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// The color `player_id` plays, if it is that color's turn.
    pub fn ensure_turn(&self, player_id: &str) -> Result<Color, EngineError> {
        self.ensure_running()?;
        match self.color_of(player_id) {
            Some(color) if color == self.current_player => Ok(color),
            _ => Err(EngineError::NotYourTurn(self.current_player.opponent())),
        }
    }

    fn ensure_running(&self) -> Result<(), EngineError> {
        match self.winner {
            Some(color) => Err(EngineError::GameOver(color)),
            None => Ok(()),
        }
    }

    /// Whether the current player still has to roll.
    pub fn needs_roll(&self) -> bool {
        self.winner.is_none() && self.dice.is_empty()
    }

    /// Roll for the current player. Doubles give four dice.
    pub fn roll(&mut self, rng: &mut impl RandomSource) -> Result<&Dice, EngineError> {
        self.set_dice(Dice::roll(rng))?;
        Ok(&self.dice)
    }

    /// Use `dice` as the current player's roll.
    pub fn set_dice(&mut self, dice: Dice) -> Result<(), EngineError> {
        self.ensure_running()?;
        if !self.dice.is_empty() {
            return Err(EngineError::DiceAlreadyRolled);
        }
        self.dice = dice;
        self.used_dice = UsedDice::none();
        self.history.clear();
        Ok(())
    }

    /// Distinct moves the current player may start with.
    pub fn available_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        available_moves(&self.position, &self.dice, self.used_dice, self.current_player)
    }

    pub fn has_valid_moves(&self) -> bool {
        self.winner.is_none()
            && has_valid_moves(&self.position, &self.dice, self.used_dice, self.current_player)
    }

    /// Play one move for the current player.
    ///
    /// The move must be one of `available_moves`, matched on source,
    /// destination and die index. The turn ends on its own once no
    /// remaining die can be played.
    pub fn play(&mut self, mv: &Move) -> Result<TurnStatus, EngineError> {
        self.ensure_running()?;
        if self.dice.is_empty() {
            return Err(EngineError::NoDice);
        }

        let legal = self
            .available_moves()
            .into_iter()
            .find(|m| m.key() == mv.key())
            .ok_or(EngineError::InvalidMove(*mv))?;

        let color = self.current_player;
        self.history.push_back((self.position, self.used_dice));
        self.position = apply_move(&self.position, &legal, color);
        self.used_dice = self.used_dice.with(legal.die_index);

        if let Some(won) = winner(&self.position) {
            self.winner = Some(won);
            self.dice = Dice::default();
            self.used_dice = UsedDice::none();
            self.history.clear();
            return Ok(TurnStatus::Won(won));
        }

        if self.has_valid_moves() {
            Ok(TurnStatus::Continue)
        } else {
            self.end_turn();
            Ok(TurnStatus::TurnOver)
        }
    }

    /// Pass to the opponent and clear the dice and undo history.
    pub fn end_turn(&mut self) {
        if self.winner.is_some() {
            return;
        }
        self.current_player = self.current_player.opponent();
        self.dice = Dice::default();
        self.used_dice = UsedDice::none();
        self.history.clear();
    }

    /// Take back the last move of the current turn.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        self.ensure_running()?;
        let (position, used) = self.history.pop_back().ok_or(EngineError::NothingToUndo)?;
        self.position = position;
        self.used_dice = used;
        Ok(())
    }

    /// Moves that can be undone this turn.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }
}
