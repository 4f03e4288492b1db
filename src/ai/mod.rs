//! AI opponent.
//!
//! ## Overview
//!
//! The search enumerates every legal sequence for the remaining dice and
//! scores the position each one reaches:
//!
//! - **Static score**: relative advantage from the evaluator plus bonuses
//!   for hits, bear-offs and removed blots, scaled by skill and personality
//! - **Lookahead**: from skill 0.45 the opponent's rolls are sampled and
//!   its best reply is blended into the score
//! - **Noise**: weaker players add uniform noise, so they blunder now and then
//!
//! Only the first move of the winning sequence is returned. Callers apply it
//! and ask again until the dice are used or no move remains.
//!
//! ## Usage
//!
//! ```rust
//! use backgammon_engine::ai::{AiConfig, AiSearch, Personality};
//! use backgammon_engine::core::{Color, Dice, Position, UsedDice};
//!
//! let config = AiConfig::default()
//!     .with_skill(0.3)
//!     .with_personality(Personality::Aggressive)
//!     .with_seed(7);
//! let mut ai = AiSearch::new(config);
//!
//! let mv = ai.choose_move(&Position::starting(), &Dice::new(3, 1), UsedDice::none(), Color::White);
//! assert!(mv.is_some());
//! ```

pub mod config;
pub mod search;
pub mod stats;

pub use config::{
    AiConfig, Personality, TacticalWeights, BLOT_REDUCTION_WEIGHT, LOOKAHEAD_MIN_SKILL, NOISE_SCALE,
};
pub use search::AiSearch;
pub use stats::SearchStats;
