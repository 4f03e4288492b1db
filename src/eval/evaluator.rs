//! Composite position score.

use crate::core::{Color, Position};
use crate::rules::pip_count;

use super::features::{
    anchors, blots, has_contact, hit_risk, home_points_made, longest_prime, made_points,
};
use super::weights::EvalWeights;

/// Heuristic scorer. Higher is better for the color asked about.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Score of `position` from `color`'s side only.
    #[must_use]
    pub fn score(&self, position: &Position, color: Color) -> f64 {
        let w = &self.weights;
        let contact = has_contact(position);

        let mut score = f64::from(position.borne_off[color]) * w.borne_off;
        score -= f64::from(pip_count(position, color)) * w.pips.pick(contact);
        score -= f64::from(position.bar[color]) * w.bar;

        score += f64::from(made_points(position, color)) * w.made_point.pick(contact);
        score -= f64::from(blots(position, color)) * w.blot.pick(contact);
        score -= f64::from(hit_risk(position, color)) * w.hit_risk.pick(contact);

        if contact {
            let prime = f64::from(longest_prime(position, color));
            score += (prime - 2.0).max(0.0) * w.prime_linear + prime * prime * w.prime_quadratic;
            score += f64::from(anchors(position, color)) * w.anchor;
        }

        if position.bar[color.opponent()] > 0 {
            score += f64::from(home_points_made(position, color)) * w.home_point_vs_bar;
        }

        score
    }

    /// `score(color) - score(opponent)`.
    #[must_use]
    pub fn relative_advantage(&self, position: &Position, color: Color) -> f64 {
        self.score(position, color) - self.score(position, color.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_is_even() {
        let eval = Evaluator::default();
        let pos = Position::starting();
        let diff = eval.relative_advantage(&pos, Color::White);
        assert!(diff.abs() < 1e-9);
    }

    #[test]
    fn test_relative_advantage_is_antisymmetric() {
        let eval = Evaluator::default();
        let pos = Position::starting()
            .with_checkers(0, Color::White, 1)
            .with_checkers(3, Color::White, 1);
        let w = eval.relative_advantage(&pos, Color::White);
        let b = eval.relative_advantage(&pos, Color::Black);
        assert!((w + b).abs() < 1e-9);
    }

    #[test]
    fn test_race_uses_race_weights() {
        let eval = Evaluator::default();
        let pos = Position::empty()
            .with_checkers(23, Color::White, 15)
            .with_checkers(0, Color::Black, 15);
        // 15 pips * 1.35, one made point * 3.0
        let expected = -15.0 * 1.35 + 3.0;
        assert!((eval.score(&pos, Color::White) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bar_is_penalised() {
        let eval = Evaluator::default();
        let base = Position::starting();
        let hit = base.with_checkers(5, Color::Black, 4).with_bar(Color::Black, 1);
        assert!(eval.score(&hit, Color::Black) < eval.score(&base, Color::Black));
    }

    #[test]
    fn test_home_points_count_when_opponent_on_bar() {
        let eval = Evaluator::default();
        let pos = Position::empty()
            .with_checkers(20, Color::White, 2)
            .with_checkers(21, Color::White, 13)
            .with_checkers(2, Color::Black, 14);
        let with_bar = pos.with_bar(Color::Black, 1);
        let delta = eval.score(&with_bar, Color::White) - eval.score(&pos, Color::White);
        assert!((delta - 2.0 * 14.0).abs() < 1e-9);
    }
}
