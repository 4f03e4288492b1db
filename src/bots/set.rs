//! A set of bots polling the shared store.

use serde::{Deserialize, Serialize};

use crate::ai::{AiSearch, Personality};
use crate::core::{Dice, GameRng, RandomSource};
use crate::game::GameRecord;
use crate::store::{conditional_update, GameStore, StoreError, DEFAULT_MAX_RETRIES, GAME_KEY_PREFIX};

use super::profile::{BotProfile, CancelHandle};

/// Upper bound on steps one bot takes in one game per poll: a roll, four
/// moves and slack for a conflict.
pub const MAX_STEPS_PER_POLL: usize = 6;

/// Result of a single step in one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not this bot's turn, or the game is over.
    Idle,
    Rolled,
    Moved,
    /// No legal move; the turn was passed.
    Passed,
    /// The write lost to a concurrent update or found the game changed.
    Stale,
}

/// What one polling round did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollReport {
    pub games_seen: usize,
    pub joined: usize,
    pub rolls: usize,
    pub moves: usize,
    pub passes: usize,
    pub stale: usize,
}

impl PollReport {
    fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Idle => {}
            StepOutcome::Rolled => self.rolls += 1,
            StepOutcome::Moved => self.moves += 1,
            StepOutcome::Passed => self.passes += 1,
            StepOutcome::Stale => self.stale += 1,
        }
    }
}

struct Bot {
    profile: BotProfile,
    cancel: CancelHandle,
    search: AiSearch,
}

/// Owned collection of running bots.
///
/// Bots only act inside `poll`; nothing runs in the background unless the
/// set is handed to `BotSet::spawn`.
pub struct BotSet {
    bots: Vec<Bot>,
    rng: GameRng,
    serial: u64,
}

impl BotSet {
    pub fn new(seed: u64) -> Self {
        Self {
            bots: Vec::new(),
            rng: GameRng::new(seed),
            serial: 0,
        }
    }

    /// Start `count` bots and return their ids.
    pub fn start(&mut self, count: usize, skill: f64, personality: Personality) -> Vec<String> {
        (0..count)
            .map(|_| {
                let id = format!("bot-{}-{:04x}", self.serial, self.rng.next_u32() & 0xffff);
                self.serial += 1;

                let profile = BotProfile::new(id.clone(), skill, personality);
                let ai_seed = self.rng.for_context(&id).seed();
                let search = AiSearch::new(profile.ai_config(ai_seed));
                log::info!(
                    target: "backgammon",
                    "started {} ({id}, skill {:.2}, {:?})",
                    profile.name,
                    profile.skill,
                    profile.personality,
                );

                self.bots.push(Bot {
                    profile,
                    cancel: CancelHandle::new(),
                    search,
                });
                id
            })
            .collect()
    }

    /// Stop one bot. Returns whether it was running.
    pub fn stop(&mut self, id: &str) -> bool {
        let before = self.bots.len();
        self.bots.retain(|bot| {
            let keep = bot.profile.id != id;
            if !keep {
                bot.cancel.cancel();
            }
            keep
        });
        let stopped = self.bots.len() != before;
        if stopped {
            log::info!(target: "backgammon", "stopped {id}");
        }
        stopped
    }

    pub fn stop_all(&mut self) {
        for bot in self.bots.drain(..) {
            bot.cancel.cancel();
            log::info!(target: "backgammon", "stopped {}", bot.profile.id);
        }
    }

    /// Ids of bots that have not been stopped or cancelled.
    pub fn active_ids(&self) -> Vec<String> {
        self.bots
            .iter()
            .filter(|bot| !bot.cancel.is_cancelled())
            .map(|bot| bot.profile.id.clone())
            .collect()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &BotProfile> {
        self.bots.iter().map(|bot| &bot.profile)
    }

    /// Handle that stops bot `id` from any thread.
    pub fn cancel_handle(&self, id: &str) -> Option<CancelHandle> {
        self.bots
            .iter()
            .find(|bot| bot.profile.id == id)
            .map(|bot| bot.cancel.clone())
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    /// Derive an independent random stream, e.g. for the dice of a poller.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    /// One polling round.
    ///
    /// Cancelled bots are dropped first. Each remaining bot then joins every
    /// open game it did not create, and plays its turn in every game it sits
    /// in, one conditional write per step.
    pub fn poll<S>(&mut self, store: &S, rng: &mut impl RandomSource) -> Result<PollReport, StoreError>
    where
        S: GameStore + ?Sized,
    {
        self.bots.retain(|bot| !bot.cancel.is_cancelled());

        let keys = store.list(GAME_KEY_PREFIX)?;
        let mut report = PollReport {
            games_seen: keys.len(),
            ..PollReport::default()
        };

        for bot in &mut self.bots {
            for key in &keys {
                if join_if_open(store, key, &bot.profile)? {
                    report.joined += 1;
                }
            }

            for key in &keys {
                for _ in 0..MAX_STEPS_PER_POLL {
                    let outcome = step_game(store, key, bot, rng)?;
                    report.record(outcome);
                    if matches!(outcome, StepOutcome::Idle | StepOutcome::Stale) {
                        break;
                    }
                }
            }
        }

        Ok(report)
    }
}

fn join_if_open<S>(store: &S, key: &str, profile: &BotProfile) -> Result<bool, StoreError>
where
    S: GameStore + ?Sized,
{
    let open = store
        .load_game(key)?
        .is_some_and(|g| g.is_open() && g.player1.id != profile.id);
    if !open {
        return Ok(false);
    }

    let joined = conditional_update(store, key, DEFAULT_MAX_RETRIES, |g| {
        if !g.is_open() {
            return None;
        }
        Some(g.with_player2(profile.player_info()))
    })?;
    if joined {
        log::info!(target: "backgammon", "{} joined {key}", profile.name);
    }
    Ok(joined)
}

/// Take one step for `bot` in the game under `key`: roll, play one move, or
/// pass when no move exists.
fn step_game<S>(
    store: &S,
    key: &str,
    bot: &mut Bot,
    rng: &mut impl RandomSource,
) -> Result<StepOutcome, StoreError>
where
    S: GameStore + ?Sized,
{
    let Some(record) = store.load_game(key)? else {
        return Ok(StepOutcome::Idle);
    };
    let Ok(color) = record.ensure_turn(&bot.profile.id) else {
        return Ok(StepOutcome::Idle);
    };

    // Every write re-checks that the turn it was planned for is still current.
    let planned = (record.current_player, record.dice.clone(), record.used_dice);
    let unchanged = |g: &GameRecord| (g.current_player, g.dice.clone(), g.used_dice) == planned;

    if record.needs_roll() {
        let dice = Dice::roll(rng);
        let ok = conditional_update(store, key, DEFAULT_MAX_RETRIES, |mut g| {
            if !unchanged(&g) {
                return None;
            }
            g.set_dice(dice.clone()).ok()?;
            Some(g)
        })?;
        if ok {
            log::debug!(target: "backgammon", "{} rolled {:?} in {key}", bot.profile.name, dice.values());
        }
        return Ok(if ok { StepOutcome::Rolled } else { StepOutcome::Stale });
    }

    let choice = bot
        .search
        .choose_move(&record.position, &record.dice, record.used_dice, color);

    let Some(mv) = choice else {
        let ok = conditional_update(store, key, DEFAULT_MAX_RETRIES, |mut g| {
            if !unchanged(&g) {
                return None;
            }
            g.end_turn();
            Some(g)
        })?;
        return Ok(if ok { StepOutcome::Passed } else { StepOutcome::Stale });
    };

    let ok = conditional_update(store, key, DEFAULT_MAX_RETRIES, |mut g| {
        if !unchanged(&g) {
            return None;
        }
        g.play(&mv).ok()?;
        Some(g)
    })?;
    if ok {
        log::trace!(target: "backgammon", "{} played {mv} in {key}", bot.profile.name);
    }
    Ok(if ok { StepOutcome::Moved } else { StepOutcome::Stale })
}
