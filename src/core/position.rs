//! Board snapshot: point occupancy, bar and borne-off counts.
//!
//! A `Position` is a small `Copy` value. The rules engine never mutates one
//! in place from the outside; applying a move produces a new snapshot, so
//! keeping the previous value around is all an undo needs.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};

/// Board point index, `0..24`.
pub type Point = usize;

/// Number of points on the board.
pub const POINTS: usize = 24;

/// Checkers each side owns.
pub const CHECKERS_PER_SIDE: u8 = 15;

/// Checkers of one color stacked on a point. `count` is always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub color: Color,
    pub count: u8,
}

/// Immutable board snapshot.
///
/// Holds the occupancy of the 24 points together with the bar and
/// borne-off counts. For every color
/// `board count + bar + borne off == 15` in any position reached by play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    points: [Option<Occupant>; POINTS],
    /// Checkers waiting to re-enter.
    pub bar: ColorMap<u8>,
    /// Checkers removed from play.
    pub borne_off: ColorMap<u8>,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// A board with no checkers at all. Useful for building test positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: [None; POINTS],
            bar: ColorMap::default(),
            borne_off: ColorMap::default(),
        }
    }

    /// The standard opening layout.
    #[must_use]
    pub fn starting() -> Self {
        Self::empty()
            .with_checkers(0, Color::White, 2)
            .with_checkers(11, Color::White, 5)
            .with_checkers(16, Color::White, 3)
            .with_checkers(18, Color::White, 5)
            .with_checkers(23, Color::Black, 2)
            .with_checkers(12, Color::Black, 5)
            .with_checkers(7, Color::Black, 3)
            .with_checkers(5, Color::Black, 5)
    }

    /// Replace the contents of `point`. A count of zero clears it.
    #[must_use]
    pub fn with_checkers(mut self, point: Point, color: Color, count: u8) -> Self {
        self.points[point] = (count > 0).then_some(Occupant { color, count });
        self
    }

    /// Set the bar count for `color`.
    #[must_use]
    pub fn with_bar(mut self, color: Color, count: u8) -> Self {
        self.bar[color] = count;
        self
    }

    /// Set the borne-off count for `color`.
    #[must_use]
    pub fn with_borne_off(mut self, color: Color, count: u8) -> Self {
        self.borne_off[color] = count;
        self
    }

    /// Occupancy of `point`, `None` when empty.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<Occupant> {
        self.points[point]
    }

    /// Number of `color` checkers on `point` (0 if empty or held by the opponent).
    #[must_use]
    pub fn count_of(&self, point: Point, color: Color) -> u8 {
        match self.points[point] {
            Some(occ) if occ.color == color => occ.count,
            _ => 0,
        }
    }

    /// Iterate over `(point, count)` for every point held by `color`, ascending.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter_map(move |(point, occ)| match occ {
                Some(occ) if occ.color == color => Some((point, occ.count)),
                _ => None,
            })
    }

    /// Iterate over all occupied points.
    pub fn occupants(&self) -> impl Iterator<Item = (Point, Occupant)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(point, occ)| occ.map(|occ| (point, occ)))
    }

    /// Checkers of `color` on the 24 points.
    #[must_use]
    pub fn board_count(&self, color: Color) -> u32 {
        self.occupied_by(color).map(|(_, n)| u32::from(n)).sum()
    }

    /// Board + bar + borne off for `color`. Always 15 in a legal game.
    #[must_use]
    pub fn checker_total(&self, color: Color) -> u32 {
        self.board_count(color) + u32::from(self.bar[color]) + u32::from(self.borne_off[color])
    }

    /// True when every checker of `color` still in play sits in its home
    /// quadrant and none is on the bar.
    #[must_use]
    pub fn all_home(&self, color: Color) -> bool {
        self.bar[color] == 0 && self.occupied_by(color).all(|(point, _)| color.is_home(point))
    }

    /// Take one `color` checker off `point`.
    pub(crate) fn lift(&mut self, point: Point) {
        if let Some(occ) = self.points[point].as_mut() {
            occ.count -= 1;
            if occ.count == 0 {
                self.points[point] = None;
            }
        }
    }

    /// Drop one `color` checker on `point`, sending a lone opposing checker
    /// to the bar. Returns true when a hit happened.
    pub(crate) fn land(&mut self, point: Point, color: Color) -> bool {
        let hit = match self.points[point] {
            Some(occ) if occ.color != color => {
                debug_assert_eq!(occ.count, 1, "landing on a made point at {point}");
                self.bar[occ.color] += occ.count;
                self.points[point] = None;
                true
            }
            _ => false,
        };

        match self.points[point].as_mut() {
            Some(occ) => occ.count += 1,
            None => self.points[point] = Some(Occupant { color, count: 1 }),
        }
        hit
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (point, occ) in self.occupants() {
            let tag = match occ.color {
                Color::White => 'W',
                Color::Black => 'B',
            };
            write!(f, "{point}:{tag}{} ", occ.count)?;
        }
        write!(
            f,
            "| bar W{} B{} | off W{} B{}",
            self.bar.white, self.bar.black, self.borne_off.white, self.borne_off.black
        )
    }
}
