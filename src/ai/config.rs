//! AI opponent configuration: skill, personality, seed and evaluation weights.

use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

/// Skill at or above which the opponent's reply is sampled.
pub const LOOKAHEAD_MIN_SKILL: f64 = 0.45;

/// Weight of the blot-reduction bonus before personality and skill scaling.
pub const BLOT_REDUCTION_WEIGHT: f64 = 18.0;

/// Amplitude of the score noise at skill 0.
pub const NOISE_SCALE: f64 = 12.0;

/// Play style. Shifts the tactical bonuses for hitting, bearing off and
/// reducing blots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Balanced,
    Aggressive,
    Defensive,
}

/// Per-personality multipliers for the tactical bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticalWeights {
    /// Bonus per opposing checker hit.
    pub hit: f64,
    /// Bonus per checker borne off.
    pub bear_off: f64,
    /// Multiplier on the blot-reduction bonus.
    pub safety: f64,
}

impl Personality {
    #[must_use]
    pub const fn tactics(self) -> TacticalWeights {
        match self {
            Personality::Balanced => TacticalWeights { hit: 45.0, bear_off: 55.0, safety: 1.0 },
            Personality::Aggressive => TacticalWeights { hit: 85.0, bear_off: 50.0, safety: 0.75 },
            Personality::Defensive => TacticalWeights { hit: 30.0, bear_off: 65.0, safety: 1.25 },
        }
    }
}

impl std::str::FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "balanced" => Ok(Personality::Balanced),
            "aggressive" => Ok(Personality::Aggressive),
            "defensive" => Ok(Personality::Defensive),
            other => Err(format!("unknown personality '{other}'")),
        }
    }
}

/// AI configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AiConfig {
    /// Playing strength in `[0, 1]`.
    /// Scales tactical bonuses, enables lookahead from 0.45 and damps noise.
    pub skill: f64,

    /// Play style.
    pub personality: Personality,

    /// Seed for the sampling and noise RNG.
    /// Same seed produces the same decisions.
    pub seed: u64,

    /// Position evaluation weights.
    pub eval: EvalWeights,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            skill: 0.8,
            personality: Personality::Balanced,
            seed: 42,
            eval: EvalWeights::default(),
        }
    }
}

impl AiConfig {
    /// Set the skill, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_skill(mut self, skill: f64) -> Self {
        self.skill = skill.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = personality;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_eval(mut self, eval: EvalWeights) -> Self {
        self.eval = eval;
        self
    }

    /// Multiplier on all tactical bonuses: `0.6 + 1.8 * skill`.
    #[must_use]
    pub fn skill_factor(&self) -> f64 {
        0.6 + 1.8 * self.skill
    }

    #[must_use]
    pub fn uses_lookahead(&self) -> bool {
        self.skill >= LOOKAHEAD_MIN_SKILL
    }

    /// Opponent rolls sampled per candidate, at least 2.
    #[must_use]
    pub fn lookahead_samples(&self) -> usize {
        ((2.0 + self.skill * 6.0).round() as usize).max(2)
    }

    /// Blend weight of the sampled reply value.
    #[must_use]
    pub fn lookahead_weight(&self) -> f64 {
        0.12 + 0.34 * self.skill
    }

    /// Amplitude of the uniform noise added to every candidate.
    #[must_use]
    pub fn noise_amplitude(&self) -> f64 {
        NOISE_SCALE * (1.0 - self.skill.min(1.0))
    }
}
