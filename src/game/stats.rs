//! Per-color summary of a position for status displays.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Position};
use crate::eval::{blots, made_points};
use crate::rules::pip_count;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub on_bar: u8,
    pub borne_off: u8,
    pub pips: u32,
    pub blots: u32,
    pub made_points: u32,
}

impl GameStats {
    #[must_use]
    pub fn for_color(position: &Position, color: Color) -> Self {
        Self {
            on_bar: position.bar[color],
            borne_off: position.borne_off[color],
            pips: pip_count(position, color),
            blots: blots(position, color),
            made_points: made_points(position, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_stats() {
        let stats = GameStats::for_color(&Position::starting(), Color::Black);
        assert_eq!(
            stats,
            GameStats {
                on_bar: 0,
                borne_off: 0,
                pips: 167,
                blots: 0,
                made_points: 4,
            }
        );
    }

    #[test]
    fn test_stats_after_hit() {
        let pos = Position::starting()
            .with_checkers(23, Color::Black, 1)
            .with_bar(Color::Black, 1);
        let stats = GameStats::for_color(&pos, Color::Black);
        assert_eq!(stats.on_bar, 1);
        assert_eq!(stats.blots, 1);
        assert_eq!(stats.made_points, 3);
        assert_eq!(stats.pips, 167 - 24 + 24);
    }
}
