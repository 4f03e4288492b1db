//! Rules engine: pure functions over `Position` snapshots.
//!
//! - `engine`: single-die rules, move application, winner and pip count
//! - `sequences`: full-turn search with the maximum-dice and higher-die rules
//!
//! Nothing here holds state; the turn driver owns the current snapshot and
//! whatever history it keeps for undo.

pub mod engine;
pub mod sequences;

pub use engine::{
    apply_checked, apply_move, apply_sequence, blocked_points, can_bear_off, can_land, pip_count,
    single_moves_for_die, winner,
};
pub use sequences::{available_moves, has_valid_moves, legal_sequences};
