//! Full-turn move generation.
//!
//! A turn is searched depth first over the unused dice. Applying one die
//! can open or close points for the next, so every ordering of distinct die
//! values is explored on its own. Equal dice (doubles) are interchangeable:
//! only the lowest unused index of each value is tried at a node, which
//! yields the same move paths without repeating identical subtrees.
//!
//! The raw leaves are then filtered, in order:
//!
//! 1. keep only sequences of maximum length (use as many dice as possible),
//! 2. with one die playable and two different values rolled, keep only
//!    sequences playing the higher die when any do,
//! 3. drop duplicates by their ordered `(from, to, die_index)` tuples.
//!
//! Sequences therefore spend equal dice in ascending index order.
//! `available_moves` offers each first move on every unused index of the
//! same value, so any of the equal dice may be played next.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Color, Destination, Dice, Move, Position, Sequence, Source, UsedDice};

use super::engine::{apply_move, single_moves_for_die};

type Remaining = SmallVec<[usize; 4]>;
type SequenceKey = SmallVec<[(Source, Destination, usize); 4]>;

/// Every legal way to play the unused dice, after the turn filters.
///
/// Returns an empty list when no die can be played (or none is left).
#[must_use]
pub fn legal_sequences(position: &Position, dice: &Dice, used: UsedDice, color: Color) -> Vec<Sequence> {
    let remaining: Remaining = used.unused(dice).collect();
    let mut leaves = Vec::new();
    let mut prefix = Sequence::new();
    extend(position, dice, &remaining, color, &mut prefix, &mut leaves);

    let max_len = leaves.iter().map(|s| s.len()).max().unwrap_or(0);
    if max_len == 0 {
        return Vec::new();
    }
    leaves.retain(|s| s.len() == max_len);

    if max_len == 1 && dice.has_distinct_values() {
        let high = dice.highest();
        if leaves.iter().any(|s| s[0].die == high) {
            leaves.retain(|s| s[0].die == high);
        }
    }

    let mut seen = FxHashSet::default();
    leaves.retain(|s| seen.insert(sequence_key(s)));
    leaves
}

/// Distinct first moves of the legal sequences: what may be played next.
#[must_use]
pub fn available_moves(position: &Position, dice: &Dice, used: UsedDice, color: Color) -> Vec<Move> {
    let mut seen = FxHashSet::default();
    let mut moves = Vec::new();
    for first in legal_sequences(position, dice, used, color)
        .iter()
        .filter_map(|s| s.first().copied())
    {
        for die_index in used.unused(dice).filter(|&i| dice.value(i) == first.die) {
            let mv = Move { die_index, ..first };
            if seen.insert(mv.key()) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Whether `color` can play at least one die.
#[must_use]
pub fn has_valid_moves(position: &Position, dice: &Dice, used: UsedDice, color: Color) -> bool {
    !available_moves(position, dice, used, color).is_empty()
}

fn sequence_key(sequence: &Sequence) -> SequenceKey {
    sequence.iter().map(Move::key).collect()
}

fn extend(
    position: &Position,
    dice: &Dice,
    remaining: &[usize],
    color: Color,
    prefix: &mut Sequence,
    out: &mut Vec<Sequence>,
) {
    let mut extended = false;
    let mut tried_values: SmallVec<[u8; 4]> = SmallVec::new();

    for &die_index in remaining {
        let die = dice.value(die_index);
        if tried_values.contains(&die) {
            continue;
        }
        tried_values.push(die);

        let rest: Remaining = remaining.iter().copied().filter(|&i| i != die_index).collect();
        for mv in single_moves_for_die(position, die, die_index, color) {
            extended = true;
            let next = apply_move(position, &mv, color);
            prefix.push(mv);
            extend(&next, dice, &rest, color, prefix, out);
            prefix.pop();
        }
    }

    if !extended {
        out.push(prefix.clone());
    }
}
