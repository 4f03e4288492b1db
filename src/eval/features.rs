//! Structural features of a position, counted for one color.

use crate::core::{Color, Point, Position};
use crate::rules::blocked_points;

/// Points holding two or more checkers of `color`.
#[must_use]
pub fn made_points(position: &Position, color: Color) -> u32 {
    position.occupied_by(color).filter(|&(_, n)| n >= 2).count() as u32
}

/// Points holding exactly one checker of `color`.
#[must_use]
pub fn blots(position: &Position, color: Color) -> u32 {
    position.occupied_by(color).filter(|&(_, n)| n == 1).count() as u32
}

/// Made points inside `color`'s own home quadrant.
#[must_use]
pub fn home_points_made(position: &Position, color: Color) -> u32 {
    made_in(position, color, color)
}

/// Made points inside the opponent's home quadrant.
#[must_use]
pub fn anchors(position: &Position, color: Color) -> u32 {
    made_in(position, color, color.opponent())
}

fn made_in(position: &Position, color: Color, quadrant: Color) -> u32 {
    quadrant
        .home_range()
        .filter(|&point| position.count_of(point, color) >= 2)
        .count() as u32
}

/// Length of the longest run of consecutive made points.
#[must_use]
pub fn longest_prime(position: &Position, color: Color) -> u32 {
    let mut best = 0;
    let mut run = 0;
    for point in 0..crate::core::POINTS {
        if position.count_of(point, color) >= 2 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Whether the two sides can still meet.
///
/// False once the point ranges the colors occupy no longer overlap, or when
/// either side has nothing left on the board. Bar checkers are ignored.
#[must_use]
pub fn has_contact(position: &Position) -> bool {
    let span = |color: Color| -> Option<(Point, Point)> {
        let mut points = position.occupied_by(color).map(|(p, _)| p);
        let first = points.next()?;
        let last = points.last().unwrap_or(first);
        Some((first, last))
    };

    match (span(Color::White), span(Color::Black)) {
        (Some((w_min, w_max)), Some((b_min, b_max))) => !(w_max < b_min || b_max < w_min),
        _ => false,
    }
}

/// Number of `color` blots an opposing checker could hit with a single die.
///
/// Only direct shots (distance 1 to 6) from opposing checkers on the board
/// count. Combination shots and blocking points in between are ignored;
/// the evaluation weights are tuned against exactly this estimate.
#[must_use]
pub fn hit_risk(position: &Position, color: Color) -> u32 {
    let opponent = color.opponent();
    let opponent_blocked = blocked_points(position, opponent);

    position
        .occupied_by(color)
        .filter(|&(_, n)| n == 1)
        .filter(|&(blot, _)| {
            position.occupied_by(opponent).any(|(from, _)| {
                let distance = match opponent {
                    Color::White => blot as isize - from as isize,
                    Color::Black => from as isize - blot as isize,
                };
                (1..=6).contains(&distance) && !opponent_blocked[blot]
            })
        })
        .count() as u32
}
