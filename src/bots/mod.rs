//! AI bots that sit in stored games and play them.
//!
//! ## Overview
//!
//! - **BotSet**: owns the bots; `start`, `stop`, `stop_all`, `active_ids`
//! - **poll**: one round over the store: join open games, then play turns
//! - **spawn**: run `poll` on a background thread until the runner is stopped
//!
//! Every write goes through `conditional_update`, so bots and humans can
//! share one store.
//!
//! ## Usage
//!
//! ```rust
//! use backgammon_engine::ai::Personality;
//! use backgammon_engine::bots::BotSet;
//! use backgammon_engine::core::GameRng;
//! use backgammon_engine::game::{GameRecord, PlayerInfo};
//! use backgammon_engine::store::{create_game, MemoryStore};
//!
//! let store = MemoryStore::new();
//! create_game(&store, GameRecord::new("g1", PlayerInfo::new("p1", "Alice"))).unwrap();
//!
//! let mut bots = BotSet::new(7);
//! bots.start(1, 0.6, Personality::Balanced);
//! let report = bots.poll(&store, &mut GameRng::new(1)).unwrap();
//! assert_eq!(report.joined, 1);
//! ```

pub mod profile;
pub mod runner;
pub mod set;

pub use profile::{BotProfile, CancelHandle};
pub use runner::{BotRunner, DEFAULT_POLL_INTERVAL};
pub use set::{BotSet, PollReport, StepOutcome, MAX_STEPS_PER_POLL};
