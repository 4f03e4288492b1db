//! Turn search for the AI opponent.
//!
//! For every legal sequence the resulting position is scored with the
//! evaluator plus tactical bonuses. Strong players (skill >= 0.45) also
//! sample opponent rolls and assume the opponent answers with its best
//! sequence. Weak players get uniform noise. The best sequence's first
//! move is returned; the driver calls again for each remaining die.

use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Color, Dice, GameRng, Move, Position, RandomSource, Sequence, UsedDice};
use crate::eval::{blots, Evaluator};
use crate::rules::{apply_sequence, legal_sequences};

use super::config::{AiConfig, BLOT_REDUCTION_WEIGHT};
use super::stats::SearchStats;

/// Best opponent reply value per (position, roll), shared across the
/// candidates of one decision.
type ReplyCache = FxHashMap<(Position, Dice), f64>;

/// AI decision engine.
///
/// Generic over its randomness source so tests can script the sampled
/// rolls and noise. Steps that do not touch the source (`static_score`)
/// are pure.
pub struct AiSearch<R: RandomSource = GameRng> {
    config: AiConfig,
    evaluator: Evaluator,
    rng: R,
    stats: SearchStats,
}

impl AiSearch<GameRng> {
    /// Create a search seeded from `config.seed`.
    pub fn new(config: AiConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> AiSearch<R> {
    /// Create a search drawing randomness from `rng`.
    pub fn with_rng(config: AiConfig, rng: R) -> Self {
        let evaluator = Evaluator::new(config.eval.clone());
        Self {
            config,
            evaluator,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Statistics of the last decision.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The next move to play, or `None` when no die can be played.
    ///
    /// `None` means the turn ends without consuming dice.
    pub fn choose_move(
        &mut self,
        position: &Position,
        dice: &Dice,
        used: UsedDice,
        color: Color,
    ) -> Option<Move> {
        self.choose_sequence(position, dice, used, color)
            .and_then(|seq| seq.first().copied())
    }

    /// The highest scoring legal sequence for the unused dice.
    pub fn choose_sequence(
        &mut self,
        position: &Position,
        dice: &Dice,
        used: UsedDice,
        color: Color,
    ) -> Option<Sequence> {
        let start = Instant::now();
        self.stats.reset();

        let sequences = legal_sequences(position, dice, used, color);
        self.stats.candidates = sequences.len() as u32;

        // Sequences reaching the same position get the same deterministic
        // score; only the first of each is scored.
        let mut seen = FxHashSet::default();
        let mut cache = ReplyCache::default();
        let mut best: Option<(f64, &Sequence)> = None;

        for seq in &sequences {
            let after = apply_sequence(position, seq, color);
            if !seen.insert(after) {
                continue;
            }
            self.stats.distinct_positions += 1;

            let score = self.final_score(position, &after, seq, color, &mut cache);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, seq));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let Some((score, seq)) = best else {
            log::trace!(target: "backgammon", "{color} has no legal move for {:?}", dice.values());
            return None;
        };
        log::trace!(
            target: "backgammon",
            "{color} plays {} (score {score:.2}, {} candidates, {} positions, {}us)",
            seq.iter().map(Move::to_string).collect::<Vec<_>>().join(" "),
            self.stats.candidates,
            self.stats.distinct_positions,
            self.stats.time_us,
        );
        Some(seq.clone())
    }

    /// Deterministic part of a candidate's score: relative advantage after
    /// the sequence plus hit, bear-off and blot-reduction bonuses.
    pub fn static_score(&self, before: &Position, after: &Position, sequence: &[Move], color: Color) -> f64 {
        let tactics = self.config.personality.tactics();
        let k = self.config.skill_factor();

        let hits = sequence.iter().filter(|m| m.is_hit).count() as f64;
        let offs = sequence.iter().filter(|m| m.is_bear_off()).count() as f64;
        let blots_removed = f64::from(blots(before, color)) - f64::from(blots(after, color));

        self.evaluator.relative_advantage(after, color)
            + hits * tactics.hit * k
            + offs * tactics.bear_off * k
            + blots_removed * BLOT_REDUCTION_WEIGHT * k * tactics.safety
    }

    fn final_score(
        &mut self,
        before: &Position,
        after: &Position,
        sequence: &[Move],
        color: Color,
        cache: &mut ReplyCache,
    ) -> f64 {
        let mut score = self.static_score(before, after, sequence, color);

        if self.config.uses_lookahead() {
            let weight = self.config.lookahead_weight();
            let reply = self.expected_reply(after, color, cache);
            score = score * (1.0 - weight) + reply * weight;
        }

        let noise = self.config.noise_amplitude();
        if noise > 0.0 {
            score += self.rng.next_unit() * noise;
        }
        score
    }

    /// Average, over sampled opponent rolls, of the negated best value the
    /// opponent can reach from `after`.
    fn expected_reply(&mut self, after: &Position, color: Color, cache: &mut ReplyCache) -> f64 {
        let opponent = color.opponent();
        let samples = self.config.lookahead_samples();
        let mut total = 0.0;

        for _ in 0..samples {
            let dice = Dice::roll(&mut self.rng);
            self.stats.lookahead_samples += 1;

            let key = (*after, dice);
            let best = match cache.get(&key) {
                Some(&value) => value,
                None => {
                    let value = self.best_reply(after, &key.1, opponent);
                    cache.insert(key, value);
                    value
                }
            };
            total -= best;
        }

        total / samples as f64
    }

    /// Best relative advantage `opponent` reaches with `dice`, or the value of
    /// the position itself when it cannot move.
    fn best_reply(&mut self, position: &Position, dice: &Dice, opponent: Color) -> f64 {
        let replies = legal_sequences(position, dice, UsedDice::none(), opponent);
        if replies.is_empty() {
            return self.evaluator.relative_advantage(position, opponent);
        }

        let mut seen = FxHashSet::default();
        let mut best = f64::NEG_INFINITY;
        for reply in &replies {
            let next = apply_sequence(position, reply, opponent);
            if !seen.insert(next) {
                continue;
            }
            self.stats.reply_positions += 1;
            best = best.max(self.evaluator.relative_advantage(&next, opponent));
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Personality;
    use crate::core::{Destination, Source};

    /// Replays fixed dice and unit values.
    struct Scripted {
        dice: Vec<u8>,
        next: usize,
    }

    impl RandomSource for Scripted {
        fn roll_die(&mut self) -> u8 {
            let die = self.dice[self.next % self.dice.len()];
            self.next += 1;
            die
        }

        fn next_unit(&mut self) -> f64 {
            0.5
        }
    }

    #[test]
    fn test_no_move_when_blocked() {
        let mut pos = Position::empty().with_bar(Color::White, 1).with_checkers(0, Color::White, 14);
        for point in 18..24 {
            pos = pos.with_checkers(point, Color::Black, 2);
        }
        pos = pos.with_checkers(10, Color::Black, 3);

        let mut ai = AiSearch::new(AiConfig::default());
        assert_eq!(ai.choose_move(&pos, &Dice::new(6, 1), UsedDice::none(), Color::White), None);
        assert_eq!(ai.stats().candidates, 0);
    }

    #[test]
    fn test_prefers_hit_when_aggressive() {
        // White can hit the Black blot on 5 with the 5 from point 0, or play safe elsewhere.
        let pos = Position::empty()
            .with_checkers(0, Color::White, 1)
            .with_checkers(16, Color::White, 14)
            .with_checkers(5, Color::Black, 1)
            .with_checkers(12, Color::Black, 14);
        let config = AiConfig::default()
            .with_skill(1.0)
            .with_personality(Personality::Aggressive);
        let mut ai = AiSearch::with_rng(config, Scripted { dice: vec![3, 4], next: 0 });

        let seq = ai
            .choose_sequence(&pos, &Dice::new(5, 2), UsedDice::none(), Color::White)
            .unwrap();
        assert!(seq.iter().any(|m| m.is_hit));
    }

    #[test]
    fn test_bears_off_when_possible() {
        let pos = Position::empty()
            .with_checkers(22, Color::White, 2)
            .with_borne_off(Color::White, 13)
            .with_checkers(10, Color::Black, 15);
        let mut ai = AiSearch::new(AiConfig::default().with_skill(0.3));
        let mv = ai.choose_move(&pos, &Dice::new(2, 2), UsedDice::none(), Color::White).unwrap();
        assert_eq!(mv.from, Source::Point(22));
        assert_eq!(mv.to, Destination::Off);
    }

    #[test]
    fn test_static_score_is_pure() {
        let ai = AiSearch::new(AiConfig::default());
        let before = Position::starting();
        let seqs = legal_sequences(&before, &Dice::new(3, 1), UsedDice::none(), Color::White);
        let after = apply_sequence(&before, &seqs[0], Color::White);
        let a = ai.static_score(&before, &after, &seqs[0], Color::White);
        let b = ai.static_score(&before, &after, &seqs[0], Color::White);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookahead_counts_samples() {
        let config = AiConfig::default().with_skill(1.0);
        let mut ai = AiSearch::with_rng(config, Scripted { dice: vec![6, 5, 2, 1], next: 0 });
        let pos = Position::starting();
        ai.choose_move(&pos, &Dice::new(3, 1), UsedDice::none(), Color::White).unwrap();

        let stats = ai.stats();
        assert!(stats.distinct_positions > 0);
        assert_eq!(stats.lookahead_samples, stats.distinct_positions * 8);
        assert!(stats.reply_positions > 0);
    }
}
