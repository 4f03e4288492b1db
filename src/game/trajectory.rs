//! Record of a finished self-play game.
//!
//! A trajectory lists every committed move in order with the roll it was
//! played from, plus the outcome. It serializes with serde so games can be
//! dumped for inspection or replayed.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Dice, Move};

/// One committed move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// The color that moved.
    pub color: Color,

    /// The full roll of the turn this move belongs to.
    pub dice: Dice,

    /// The move played.
    pub mv: Move,

    /// Turn number in the game (0-indexed).
    pub turn: usize,
}

/// A complete self-play game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// All moves in the game.
    pub steps: Vec<Step>,

    /// `None` when the turn cap was hit first.
    pub winner: Option<Color>,

    /// Turns played, including turns with no legal move.
    pub turns: usize,

    /// Turns in which the roller could not move.
    pub passes: usize,

    /// Seed the dice were rolled from.
    pub seed: u64,
}

impl Trajectory {
    pub fn new(seed: u64) -> Self {
        Self {
            steps: Vec::new(),
            winner: None,
            turns: 0,
            passes: 0,
            seed,
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Moves played by `color`.
    pub fn steps_for(&self, color: Color) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.color == color)
    }

    /// Checkers `color` hit during the game.
    pub fn hits_by(&self, color: Color) -> usize {
        self.steps_for(color).filter(|s| s.mv.is_hit).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Destination, Source};

    fn step(color: Color, is_hit: bool, turn: usize) -> Step {
        Step {
            color,
            dice: Dice::new(3, 1),
            mv: Move {
                from: Source::Point(0),
                to: Destination::Point(3),
                die: 3,
                die_index: 0,
                is_hit,
            },
            turn,
        }
    }

    #[test]
    fn test_trajectory_basics() {
        let mut traj = Trajectory::new(9);
        assert!(traj.is_empty());

        traj.push(step(Color::White, true, 0));
        traj.push(step(Color::Black, false, 1));
        traj.push(step(Color::White, false, 2));

        assert_eq!(traj.len(), 3);
        assert_eq!(traj.steps_for(Color::White).count(), 2);
        assert_eq!(traj.hits_by(Color::White), 1);
        assert_eq!(traj.hits_by(Color::Black), 0);
    }

    #[test]
    fn test_trajectory_serialization() {
        let mut traj = Trajectory::new(1);
        traj.push(step(Color::Black, false, 0));
        traj.winner = Some(Color::Black);

        let json = serde_json::to_string(&traj).unwrap();
        let back: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, traj);
    }
}
