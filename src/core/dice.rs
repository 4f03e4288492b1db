//! Turn dice and the set of die indices already consumed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::EngineError;
use super::rng::RandomSource;

/// The dice for one turn: empty before the roll, two values, or four equal
/// values after doubles.
///
/// Deserializing goes through `from_values`, so stored dice are validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Dice(SmallVec<[u8; 4]>);

impl Dice {
    /// Dice for a roll of `a` and `b`; doubles expand to four dice.
    ///
    /// ```
    /// use backgammon_engine::core::Dice;
    ///
    /// assert_eq!(Dice::new(3, 1).values(), &[3, 1]);
    /// assert_eq!(Dice::new(5, 5).values(), &[5, 5, 5, 5]);
    /// ```
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        if a == b {
            Self(SmallVec::from_slice(&[a, a, a, a]))
        } else {
            Self(SmallVec::from_slice(&[a, b]))
        }
    }

    /// Validate raw dice coming from a stored record.
    pub fn from_values(values: &[u8]) -> Result<Self, EngineError> {
        let in_range = values.iter().all(|d| (1..=6).contains(d));
        let shape_ok = match values.len() {
            0 | 2 => true,
            4 => values.iter().all(|&d| d == values[0]),
            _ => false,
        };
        if in_range && shape_ok {
            Ok(Self(SmallVec::from_slice(values)))
        } else {
            Err(EngineError::InvalidDice(values.to_vec()))
        }
    }

    /// Roll two dice.
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        let a = rng.roll_die();
        let b = rng.roll_die();
        Self::new(a, b)
    }

    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pip value of die `index`.
    #[must_use]
    pub fn value(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// True when at least two different values were rolled.
    #[must_use]
    pub fn has_distinct_values(&self) -> bool {
        self.0.iter().any(|&d| d != self.0[0])
    }

    /// Highest value rolled, 0 when empty.
    #[must_use]
    pub fn highest(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

impl TryFrom<Vec<u8>> for Dice {
    type Error = EngineError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

impl From<Dice> for Vec<u8> {
    fn from(dice: Dice) -> Self {
        dice.0.into_vec()
    }
}

/// Die indices consumed so far this turn, stored as a bitmask.
///
/// Serializes as the list of consumed indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct UsedDice(u8);

impl UsedDice {
    /// No dice used.
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < 8 && self.0 & (1 << index) != 0
    }

    /// A copy with `index` marked as used.
    #[must_use]
    pub fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices of `dice` not yet consumed, ascending.
    pub fn unused(self, dice: &Dice) -> impl Iterator<Item = usize> {
        (0..dice.len()).filter(move |&i| !self.contains(i))
    }
}

impl From<Vec<usize>> for UsedDice {
    fn from(indices: Vec<usize>) -> Self {
        indices
            .into_iter()
            .filter(|&i| i < 8)
            .fold(Self::none(), UsedDice::with)
    }
}

impl From<UsedDice> for Vec<usize> {
    fn from(used: UsedDice) -> Self {
        (0..8).filter(|&i| used.contains(i)).collect()
    }
}
