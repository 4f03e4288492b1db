//! Move representation: one checker moved by one die.
//!
//! A full turn is a `Sequence` of up to four moves (four only on doubles).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::Point;

/// Where a moved checker comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    /// Re-entering from the bar.
    Bar,
    /// A board point.
    Point(Point),
}

/// Where a moved checker ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Destination {
    /// A board point.
    Point(Point),
    /// Borne off.
    Off,
}

/// A single checker movement using one die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Source,
    pub to: Destination,
    /// Pip value of the die consumed.
    pub die: u8,
    /// Index of the consumed die within the turn's dice.
    pub die_index: usize,
    /// Whether the move sends a lone opposing checker to the bar.
    pub is_hit: bool,
}

impl Move {
    /// Identity used for de-duplication and legality checks.
    ///
    /// `die` and `is_hit` follow from these three fields in a given position.
    #[must_use]
    pub fn key(&self) -> (Source, Destination, usize) {
        (self.from, self.to, self.die_index)
    }

    /// Whether this move bears a checker off.
    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        self.to == Destination::Off
    }

    /// Whether this move enters a checker from the bar.
    #[must_use]
    pub fn is_entry(&self) -> bool {
        self.from == Source::Bar
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Bar => write!(f, "bar"),
            Source::Point(p) => write!(f, "{p}"),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Off => write!(f, "off"),
            Destination::Point(p) => write!(f, "{p}"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)?;
        if self.is_hit {
            write!(f, "*")?;
        }
        write!(f, " ({}#{})", self.die, self.die_index)
    }
}

/// Ordered moves forming part or all of a turn.
///
/// SmallVec keeps the common two-move turn (and four-move doubles) off the heap.
pub type Sequence = SmallVec<[Move; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: Source, to: Destination, die_index: usize) -> Move {
        Move { from, to, die: 3, die_index, is_hit: false }
    }

    #[test]
    fn test_key_ignores_die_and_hit() {
        let a = mv(Source::Point(3), Destination::Point(6), 0);
        let b = Move { is_hit: true, ..a };
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), mv(Source::Point(3), Destination::Point(6), 1).key());
    }

    #[test]
    fn test_kinds() {
        assert!(mv(Source::Bar, Destination::Point(21), 0).is_entry());
        assert!(mv(Source::Point(22), Destination::Off, 0).is_bear_off());
    }

    #[test]
    fn test_display() {
        let m = Move { from: Source::Bar, to: Destination::Point(20), die: 4, die_index: 1, is_hit: true };
        assert_eq!(m.to_string(), "bar/20* (4#1)");
        let off = mv(Source::Point(23), Destination::Off, 0);
        assert_eq!(off.to_string(), "23/off (3#0)");
    }
}
