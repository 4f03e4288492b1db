//! Evaluation weights.

use serde::{Deserialize, Serialize};

/// A weight that differs between contact play and a pure race.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseWeight {
    pub contact: f64,
    pub race: f64,
}

impl PhaseWeight {
    #[must_use]
    pub const fn new(contact: f64, race: f64) -> Self {
        Self { contact, race }
    }

    /// The weight for the current phase.
    #[must_use]
    pub fn pick(self, contact: bool) -> f64 {
        if contact {
            self.contact
        } else {
            self.race
        }
    }
}

/// Weights of the position score.
///
/// The defaults are the tuned values the AI plays with; the hit-risk
/// estimate in particular is tuned against the direct-shot approximation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per checker borne off.
    pub borne_off: f64,
    /// Per pip still to travel (subtracted).
    pub pips: PhaseWeight,
    /// Per own checker on the bar (subtracted).
    pub bar: f64,
    /// Per made point.
    pub made_point: PhaseWeight,
    /// Per blot (subtracted).
    pub blot: PhaseWeight,
    /// Per blot within direct range of an opposing checker (subtracted).
    pub hit_risk: PhaseWeight,
    /// Per made point in a prime beyond the second (contact only).
    pub prime_linear: f64,
    /// Times the squared prime length (contact only).
    pub prime_quadratic: f64,
    /// Per anchor (contact only).
    pub anchor: f64,
    /// Per home point made while the opponent has checkers on the bar.
    pub home_point_vs_bar: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            borne_off: 30.0,
            pips: PhaseWeight::new(0.95, 1.35),
            bar: 55.0,
            made_point: PhaseWeight::new(6.5, 3.0),
            blot: PhaseWeight::new(10.0, 4.0),
            hit_risk: PhaseWeight::new(8.0, 3.0),
            prime_linear: 10.0,
            prime_quadratic: 1.5,
            anchor: 7.5,
            home_point_vs_bar: 14.0,
        }
    }
}

impl EvalWeights {
    /// Set the blot and hit-risk penalties together.
    #[must_use]
    pub fn with_safety(mut self, blot: PhaseWeight, hit_risk: PhaseWeight) -> Self {
        self.blot = blot;
        self.hit_risk = hit_risk;
        self
    }

    /// Set the pip weights.
    #[must_use]
    pub fn with_pips(mut self, pips: PhaseWeight) -> Self {
        self.pips = pips;
        self
    }
}
