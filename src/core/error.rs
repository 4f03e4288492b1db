//! Errors raised by the checked entry points of the engine.
//!
//! "No legal move" is not an error: it is reported as `None` / an empty
//! list and the caller ends the turn.

use thiserror::Error;

use super::color::Color;
use super::moves::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move {0}")]
    InvalidMove(Move),
    #[error("invalid dice {0:?}: expected two values, or four identical values, each 1-6")]
    InvalidDice(Vec<u8>),
    #[error("it is not {0}'s turn")]
    NotYourTurn(Color),
    #[error("dice have not been rolled")]
    NoDice,
    #[error("dice were already rolled this turn")]
    DiceAlreadyRolled,
    #[error("game is over, {0} won")]
    GameOver(Color),
    #[error("nothing to undo this turn")]
    NothingToUndo,
}
