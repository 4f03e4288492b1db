//! AI-versus-AI games.
//!
//! Plays both colors with `AiSearch` through the checked `GameRecord`
//! driver, so every committed move goes through the same validation a human
//! move would. Used for end-to-end tests and benchmarks.

use crate::ai::{AiConfig, AiSearch};
use crate::core::{Color, ColorMap, EngineError, GameRng};

use super::record::{GameRecord, PlayerInfo, TurnStatus};
use super::trajectory::{Step, Trajectory};

/// Configuration for self-play.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Maximum turns per game (to bound runaway games).
    pub max_turns: usize,

    /// Base seed; game `i` of a batch uses `seed + i`.
    pub seed: u64,

    /// AI settings per color. Their seeds are derived from the game seed.
    pub players: ColorMap<AiConfig>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_turns: 400,
            seed: 0,
            players: ColorMap::with_value(AiConfig::default()),
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum turns per game.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use `config` for `color`.
    pub fn with_player(mut self, color: Color, config: AiConfig) -> Self {
        self.players[color] = config;
        self
    }

    /// Use `config` for both colors.
    pub fn with_both(mut self, config: AiConfig) -> Self {
        self.players = ColorMap::with_value(config);
        self
    }
}

/// Runs self-play games.
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
}

impl SelfPlayWorker {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one game to completion or to the turn cap.
    pub fn play_game(&self, seed: u64) -> Result<Trajectory, EngineError> {
        let mut dice_rng = GameRng::new(seed).for_context("dice");
        let mut players = ColorMap::new(|color| {
            let ai_seed = GameRng::new(seed).for_context(&color.to_string()).seed();
            AiSearch::new(self.config.players[color].clone().with_seed(ai_seed))
        });

        let mut record = GameRecord::new(format!("self-play-{seed}"), PlayerInfo::new("white", "White"))
            .with_player2(PlayerInfo::new("black", "Black"));
        let mut trajectory = Trajectory::new(seed);

        for turn in 0..self.config.max_turns {
            if record.winner.is_some() {
                break;
            }
            trajectory.turns += 1;

            let color = record.current_player;
            let dice = record.roll(&mut dice_rng)?.clone();
            let ai = &mut players[color];
            let mut moved = false;

            loop {
                let Some(mv) = ai.choose_move(&record.position, &record.dice, record.used_dice, color)
                else {
                    record.end_turn();
                    break;
                };
                trajectory.push(Step {
                    color,
                    dice: dice.clone(),
                    mv,
                    turn,
                });
                moved = true;
                if record.play(&mv)? != TurnStatus::Continue {
                    break;
                }
            }

            if !moved {
                trajectory.passes += 1;
            }
        }

        trajectory.winner = record.winner;
        log::debug!(
            target: "backgammon",
            "self-play game {seed}: winner {:?} after {} turns, {} moves",
            trajectory.winner,
            trajectory.turns,
            trajectory.len(),
        );
        Ok(trajectory)
    }

    /// Play `count` games with consecutive seeds.
    pub fn play_games(&self, count: usize) -> Result<Vec<Trajectory>, EngineError> {
        (0..count)
            .map(|i| self.play_game(self.config.seed.wrapping_add(i as u64)))
            .collect()
    }
}
