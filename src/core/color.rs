//! Checker colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of the board. White travels from point 0 towards point 23
//! and bears off past 23; Black travels the other way and bears off past 0.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for bar and borne-off
//! counts and anything else kept once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::position::{Point, POINTS};

/// Number of points in each side's home quadrant.
pub const HOME_SIZE: usize = 6;

/// One side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot index used by `ColorMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Points making up this color's home quadrant.
    #[must_use]
    pub fn home_range(self) -> Range<Point> {
        match self {
            Color::White => POINTS - HOME_SIZE..POINTS,
            Color::Black => 0..HOME_SIZE,
        }
    }

    /// Whether `point` lies inside this color's home quadrant.
    #[must_use]
    pub fn is_home(self, point: Point) -> bool {
        self.home_range().contains(&point)
    }

    /// Pips a checker on `point` still has to travel to bear off.
    #[must_use]
    pub const fn distance_to_off(self, point: Point) -> u32 {
        match self {
            Color::White => (POINTS - point) as u32,
            Color::Black => point as u32 + 1,
        }
    }

    /// Point a checker entering from the bar lands on with `die`.
    #[must_use]
    pub const fn entry_point(self, die: u8) -> Point {
        match self {
            Color::White => POINTS - die as usize,
            Color::Black => die as usize - 1,
        }
    }

    /// Signed destination of a checker on `from` moving `die` pips.
    ///
    /// Values outside `0..24` mean the checker would leave the board.
    #[must_use]
    pub const fn advance(self, from: Point, die: u8) -> isize {
        match self {
            Color::White => from as isize + die as isize,
            Color::Black => from as isize - die as isize,
        }
    }

    /// Whether a checker on `a` is farther from home than one on `b`.
    #[must_use]
    pub const fn is_behind(self, a: Point, b: Point) -> bool {
        match self {
            Color::White => a < b,
            Color::Black => a > b,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Per-color data with O(1) access.
///
/// Serializes as `{ "white": .., "black": .. }`.
///
/// ```
/// use backgammon_engine::core::{Color, ColorMap};
///
/// let mut bar: ColorMap<u8> = ColorMap::default();
/// bar[Color::Black] += 1;
/// assert_eq!(bar[Color::White], 0);
/// assert_eq!(bar[Color::Black], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    pub white: T,
    pub black: T,
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            white: factory(Color::White),
            black: factory(Color::Black),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            white: value.clone(),
            black: value,
        }
    }

    /// Iterate over (Color, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::White, &self.white), (Color::Black, &self.black)].into_iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}
