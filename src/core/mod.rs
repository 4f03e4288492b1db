//! Core types: colors, board snapshots, dice, moves, RNG, errors.
//!
//! Everything here is plain data. The rules live in `rules`, the scoring in
//! `eval`, the opponent in `ai`.

pub mod color;
pub mod dice;
pub mod error;
pub mod moves;
pub mod position;
pub mod rng;

pub use color::{Color, ColorMap, HOME_SIZE};
pub use dice::{Dice, UsedDice};
pub use error::EngineError;
pub use moves::{Destination, Move, Sequence, Source};
pub use position::{Occupant, Point, Position, CHECKERS_PER_SIDE, POINTS};
pub use rng::{GameRng, RandomSource};
