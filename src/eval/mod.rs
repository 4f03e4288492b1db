//! Position evaluation.
//!
//! A hand-tuned linear score over race and structure features. The weight
//! regime switches between contact play and a pure race.

pub mod evaluator;
pub mod features;
pub mod weights;

pub use evaluator::Evaluator;
pub use features::{
    anchors, blots, has_contact, hit_risk, home_points_made, longest_prime, made_points,
};
pub use weights::{EvalWeights, PhaseWeight};
