//! Game records and turn driving.
//!
//! ## Overview
//!
//! - **GameRecord**: one game as stored and shared between players, with
//!   checked `play`, `undo` and `end_turn`
//! - **GameStats**: per-color summary for status displays
//! - **SelfPlayWorker**: AI-versus-AI games producing a `Trajectory`
//!
//! ## Usage
//!
//! ```rust
//! use backgammon_engine::core::GameRng;
//! use backgammon_engine::game::{GameRecord, PlayerInfo};
//!
//! let mut record = GameRecord::new("g1", PlayerInfo::new("p1", "Alice"))
//!     .with_player2(PlayerInfo::new("p2", "Bob"));
//! let mut rng = GameRng::new(1);
//!
//! record.roll(&mut rng).unwrap();
//! while let Some(mv) = record.available_moves().first().copied() {
//!     record.play(&mv).unwrap();
//!     if record.dice.is_empty() {
//!         break;
//!     }
//! }
//! ```

pub mod record;
pub mod self_play;
pub mod stats;
pub mod trajectory;

pub use record::{GameRecord, PlayerInfo, TurnStatus};
pub use self_play::{SelfPlayConfig, SelfPlayWorker};
pub use stats::GameStats;
pub use trajectory::{Step, Trajectory};
