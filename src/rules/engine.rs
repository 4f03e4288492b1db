//! Single-die rules: landing, bearing off, move enumeration and application.
//!
//! All functions are pure. They read a `Position` and return new values;
//! nothing here holds state between calls.

use smallvec::SmallVec;

use crate::core::{
    Color, Destination, Dice, EngineError, Move, Point, Position, Source, UsedDice, CHECKERS_PER_SIDE,
    POINTS,
};

/// Points `color` may not land on: held by two or more opposing checkers.
#[must_use]
pub fn blocked_points(position: &Position, color: Color) -> [bool; POINTS] {
    let mut blocked = [false; POINTS];
    for (point, count) in position.occupied_by(color.opponent()) {
        blocked[point] = count >= 2;
    }
    blocked
}

/// Whether `color` may land on `point`: empty, own, or a single opposing
/// checker that would be hit.
#[must_use]
pub fn can_land(position: &Position, point: Point, color: Color) -> bool {
    match position.get(point) {
        None => true,
        Some(occ) => occ.color == color || occ.count == 1,
    }
}

/// Whether the checker on `from` may bear off with `die`.
///
/// Requires every checker of `color` home and none on the bar. An exact
/// roll always works; a larger roll only when no own checker sits farther
/// from home than `from`.
#[must_use]
pub fn can_bear_off(position: &Position, from: Point, die: u8, color: Color) -> bool {
    if !position.all_home(color) {
        return false;
    }

    let distance = color.distance_to_off(from);
    let die = u32::from(die);
    if distance == die {
        return true;
    }
    if distance < die {
        return !position
            .occupied_by(color)
            .any(|(point, _)| color.is_behind(point, from));
    }
    false
}

/// Every legal move for `color` using die `die_index` of value `die`.
///
/// While `color` has checkers on the bar only entering moves are returned.
/// A die outside `1..=6` has no moves.
#[must_use]
pub fn single_moves_for_die(
    position: &Position,
    die: u8,
    die_index: usize,
    color: Color,
) -> SmallVec<[Move; 16]> {
    let mut moves = SmallVec::new();
    if !(1..=6).contains(&die) {
        return moves;
    }
    let blocked = blocked_points(position, color);

    let hits = |target: Point| {
        position
            .get(target)
            .is_some_and(|occ| occ.color != color)
    };

    if position.bar[color] > 0 {
        let target = color.entry_point(die);
        if !blocked[target] && can_land(position, target, color) {
            moves.push(Move {
                from: Source::Bar,
                to: Destination::Point(target),
                die,
                die_index,
                is_hit: hits(target),
            });
        }
        return moves;
    }

    let bearing_off = position.all_home(color);

    for (from, _) in position.occupied_by(color) {
        let target = color.advance(from, die);
        let off_board = !(0..POINTS as isize).contains(&target);

        if off_board {
            if bearing_off && can_bear_off(position, from, die, color) {
                moves.push(Move {
                    from: Source::Point(from),
                    to: Destination::Off,
                    die,
                    die_index,
                    is_hit: false,
                });
            }
            continue;
        }

        let target = target as Point;
        if !blocked[target] && can_land(position, target, color) {
            moves.push(Move {
                from: Source::Point(from),
                to: Destination::Point(target),
                die,
                die_index,
                is_hit: hits(target),
            });
        }
    }

    moves
}

/// Apply `mv` for `color`, returning the resulting snapshot.
///
/// The move must come from `single_moves_for_die`, `legal_sequences` or
/// `available_moves`; it is not re-validated. Use `apply_checked` for moves
/// from untrusted callers.
#[must_use]
pub fn apply_move(position: &Position, mv: &Move, color: Color) -> Position {
    let mut next = *position;

    match mv.from {
        Source::Bar => next.bar[color] -= 1,
        Source::Point(from) => next.lift(from),
    }

    match mv.to {
        Destination::Off => next.borne_off[color] += 1,
        Destination::Point(to) => {
            next.land(to, color);
        }
    }

    next
}

/// Apply `mv` only if it matches one of the single-die moves legal right now.
///
/// `mv.die_index` must name an unused die of `dice` whose value is `mv.die`.
/// Only checks the single-die rules; the full-turn rules (maximum dice,
/// higher die) are enforced by the turn driver through `available_moves`.
pub fn apply_checked(
    position: &Position,
    dice: &Dice,
    used: UsedDice,
    mv: &Move,
    color: Color,
) -> Result<Position, EngineError> {
    let rolled = dice.values().get(mv.die_index) == Some(&mv.die);
    if !rolled || used.contains(mv.die_index) {
        return Err(EngineError::InvalidMove(*mv));
    }
    let legal = single_moves_for_die(position, mv.die, mv.die_index, color)
        .into_iter()
        .find(|m| m.key() == mv.key())
        .ok_or(EngineError::InvalidMove(*mv))?;
    Ok(apply_move(position, &legal, color))
}

/// Apply a whole sequence in order.
#[must_use]
pub fn apply_sequence(position: &Position, sequence: &[Move], color: Color) -> Position {
    sequence
        .iter()
        .fold(*position, |pos, mv| apply_move(&pos, mv, color))
}

/// The color that has borne off all 15 checkers, if any.
#[must_use]
pub fn winner(position: &Position) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|&color| position.borne_off[color] >= CHECKERS_PER_SIDE)
}

/// Total pips `color` needs to bear everything off. Bar checkers count 24.
#[must_use]
pub fn pip_count(position: &Position, color: Color) -> u32 {
    let on_board: u32 = position
        .occupied_by(color)
        .map(|(point, count)| color.distance_to_off(point) * u32::from(count))
        .sum();
    u32::from(position.bar[color]) * POINTS as u32 + on_board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_points() {
        let pos = Position::starting();
        let blocked = blocked_points(&pos, Color::White);
        assert!(blocked[23]);
        assert!(blocked[5]);
        assert!(!blocked[0]);
        assert!(!blocked[1]);
    }

    #[test]
    fn test_can_land() {
        let pos = Position::empty()
            .with_checkers(0, Color::White, 1)
            .with_checkers(1, Color::Black, 2)
            .with_checkers(3, Color::Black, 1);
        assert!(can_land(&pos, 2, Color::White));
        assert!(can_land(&pos, 0, Color::White));
        assert!(!can_land(&pos, 1, Color::White));
        assert!(can_land(&pos, 3, Color::White));
    }

    #[test]
    fn test_bar_entry_only() {
        let pos = Position::starting()
            .with_checkers(0, Color::White, 1)
            .with_bar(Color::White, 1);
        let moves = single_moves_for_die(&pos, 3, 0, Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from, Source::Bar);
        assert_eq!(moves[0].to, Destination::Point(21));
    }

    #[test]
    fn test_bar_entry_blocked() {
        let pos = Position::starting()
            .with_checkers(0, Color::White, 1)
            .with_bar(Color::White, 1);
        // 24 - 1 = 23 is Black's two-checker point.
        assert!(single_moves_for_die(&pos, 1, 0, Color::White).is_empty());
    }

    #[test]
    fn test_black_entry_hits() {
        let pos = Position::empty()
            .with_checkers(2, Color::White, 1)
            .with_checkers(20, Color::Black, 14)
            .with_bar(Color::Black, 1);
        let moves = single_moves_for_die(&pos, 3, 1, Color::Black);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_hit);

        let next = apply_move(&pos, &moves[0], Color::Black);
        assert_eq!(next.bar[Color::Black], 0);
        assert_eq!(next.bar[Color::White], 1);
        assert_eq!(next.count_of(2, Color::Black), 1);
    }

    #[test]
    fn test_bear_off_exact_and_overshoot() {
        let pos = Position::empty()
            .with_checkers(23, Color::White, 1)
            .with_checkers(19, Color::White, 1)
            .with_borne_off(Color::White, 13);

        assert!(can_bear_off(&pos, 23, 1, Color::White));
        assert!(can_bear_off(&pos, 19, 5, Color::White));
        // 19 is farther back than 23, so 23 cannot use a 6.
        assert!(!can_bear_off(&pos, 23, 6, Color::White));
        assert!(can_bear_off(&pos, 19, 6, Color::White));
        assert!(!can_bear_off(&pos, 19, 4, Color::White));
    }

    #[test]
    fn test_no_bear_off_when_not_home() {
        let pos = Position::empty()
            .with_checkers(23, Color::White, 1)
            .with_checkers(10, Color::White, 1)
            .with_borne_off(Color::White, 13);
        assert!(!can_bear_off(&pos, 23, 1, Color::White));
        let moves = single_moves_for_die(&pos, 1, 0, Color::White);
        assert!(moves.iter().all(|m| !m.is_bear_off()));
    }

    #[test]
    fn test_apply_bear_off() {
        let pos = Position::empty()
            .with_checkers(0, Color::Black, 1)
            .with_borne_off(Color::Black, 14);
        let moves = single_moves_for_die(&pos, 1, 0, Color::Black);
        assert_eq!(moves.len(), 1);
        let next = apply_move(&pos, &moves[0], Color::Black);
        assert_eq!(next.get(0), None);
        assert_eq!(next.borne_off[Color::Black], 15);
        assert_eq!(winner(&next), Some(Color::Black));
    }

    #[test]
    fn test_apply_checked_rejects() {
        let pos = Position::starting();
        let bogus = Move {
            from: Source::Point(0),
            to: Destination::Point(5),
            die: 5,
            die_index: 0,
            is_hit: false,
        };
        let dice = Dice::new(5, 3);
        let none = UsedDice::none();
        assert_eq!(
            apply_checked(&pos, &dice, none, &bogus, Color::White),
            Err(EngineError::InvalidMove(bogus))
        );

        let fine = Move { to: Destination::Point(3), die: 3, die_index: 1, ..bogus };
        let next = apply_checked(&pos, &dice, none, &fine, Color::White).unwrap();
        assert_eq!(next.count_of(3, Color::White), 1);

        // The same die cannot be spent twice.
        let spent = none.with(1);
        assert!(apply_checked(&pos, &dice, spent, &fine, Color::White).is_err());
    }

    #[test]
    fn test_apply_checked_rejects_impossible_dice() {
        let pos = Position::starting().with_checkers(0, Color::White, 1).with_bar(Color::White, 1);
        let zero = Move {
            from: Source::Bar,
            to: Destination::Point(24),
            die: 0,
            die_index: 0,
            is_hit: false,
        };
        assert_eq!(
            apply_checked(&pos, &Dice::new(3, 1), UsedDice::none(), &zero, Color::White),
            Err(EngineError::InvalidMove(zero))
        );
        assert!(single_moves_for_die(&pos, 0, 0, Color::White).is_empty());

        let black = Position::starting().with_checkers(23, Color::Black, 1).with_bar(Color::Black, 1);
        assert!(single_moves_for_die(&black, 0, 0, Color::Black).is_empty());
        assert!(single_moves_for_die(&black, 7, 0, Color::Black).is_empty());

        // 11 to 18 is seven pips; no roll allows it.
        let start = Position::starting();
        let seven = Move {
            from: Source::Point(11),
            to: Destination::Point(18),
            die: 7,
            die_index: 0,
            is_hit: false,
        };
        assert!(apply_checked(&start, &Dice::new(6, 1), UsedDice::none(), &seven, Color::White).is_err());
        assert!(single_moves_for_die(&start, 7, 0, Color::White).is_empty());
    }

    #[test]
    fn test_apply_checked_rejects_mismatched_die_index() {
        let pos = Position::starting();
        let dice = Dice::new(5, 3);
        // 0 to 3 is a legal three, but index 0 holds the five.
        let mv = Move {
            from: Source::Point(0),
            to: Destination::Point(3),
            die: 3,
            die_index: 0,
            is_hit: false,
        };
        assert_eq!(
            apply_checked(&pos, &dice, UsedDice::none(), &mv, Color::White),
            Err(EngineError::InvalidMove(mv))
        );
        let past_end = Move { die_index: 2, ..mv };
        assert!(apply_checked(&pos, &dice, UsedDice::none(), &past_end, Color::White).is_err());
    }

    #[test]
    fn test_pip_count_start() {
        let pos = Position::starting();
        assert_eq!(pip_count(&pos, Color::White), 167);
        assert_eq!(pip_count(&pos, Color::Black), 167);
        assert_eq!(pip_count(&pos.with_bar(Color::White, 1), Color::White), 191);
    }

    #[test]
    fn test_winner_none() {
        assert_eq!(winner(&Position::starting()), None);
        let done = Position::empty().with_borne_off(Color::White, 15);
        assert_eq!(winner(&done), Some(Color::White));
    }
}
