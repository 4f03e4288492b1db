//! # backgammon-engine
//!
//! Backgammon rules, position evaluation and a tunable AI opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: The rules engine is a set of functions over immutable
//!    `Position` snapshots. Applying a move returns a new snapshot.
//!
//! 2. **Full-Turn Legality**: Legal moves come from whole-turn sequence
//!    search, so the "use as many dice as possible" and "play the higher
//!    die" rules hold for every move offered.
//!
//! 3. **Injectable Randomness**: Dice and AI sampling go through the
//!    `RandomSource` trait. Same seed, same game.
//!
//! ## Architecture
//!
//! - **Stateless Core**: `rules`, `eval` and `ai` hold no game state; the
//!   turn driver in `game` owns the snapshot and the undo history.
//!
//! - **Shared Store**: Games are records in a key/value store; writers use
//!   an optimistic conditional update keyed on a revision marker.
//!
//! ## Modules
//!
//! - `core`: Colors, positions, dice, moves, RNG, errors
//! - `rules`: Move generation, sequence search, application, winner, pips
//! - `eval`: Heuristic position scoring
//! - `ai`: Sequence search with lookahead and personality
//! - `game`: Game record, turn driver, stats, self-play
//! - `store`: Key/value game store and conditional update
//! - `bots`: AI players polling the store

pub mod core;
pub mod rules;
pub mod eval;
pub mod ai;
pub mod game;
pub mod store;
pub mod bots;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Dice, UsedDice, EngineError,
    Move, Sequence, Source, Destination,
    Point, Position, Occupant, CHECKERS_PER_SIDE, POINTS,
    GameRng, RandomSource,
};

pub use crate::rules::{
    apply_checked, apply_move, apply_sequence, available_moves, has_valid_moves,
    legal_sequences, pip_count, single_moves_for_die, winner,
};

pub use crate::eval::{EvalWeights, Evaluator, PhaseWeight};

pub use crate::ai::{AiConfig, AiSearch, Personality, SearchStats};

pub use crate::game::{
    GameRecord, GameStats, PlayerInfo, SelfPlayConfig, SelfPlayWorker, Trajectory, TurnStatus,
};

pub use crate::store::{conditional_update, GameStore, MemoryStore, StoreError};

pub use crate::bots::{BotProfile, BotRunner, BotSet, CancelHandle, PollReport};
