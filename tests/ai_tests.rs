//! AI search integration tests.

use backgammon_engine::ai::{AiConfig, AiSearch, Personality};
use backgammon_engine::core::{Color, Dice, GameRng, Move, Position, RandomSource, UsedDice};
use backgammon_engine::eval::Evaluator;
use backgammon_engine::rules::{apply_move, available_moves, legal_sequences};

fn legal_first(position: &Position, dice: &Dice, used: UsedDice, color: Color, mv: &Move) -> bool {
    available_moves(position, dice, used, color)
        .iter()
        .any(|m| m.key() == mv.key())
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_ai_returns_legal_first_move() {
    let pos = Position::starting();
    for skill in [0.0, 0.3, 0.6, 1.0] {
        for (a, b) in [(3, 1), (6, 6), (5, 2), (4, 4)] {
            let dice = Dice::new(a, b);
            let mut ai = AiSearch::new(AiConfig::default().with_skill(skill));
            let mv = ai.choose_move(&pos, &dice, UsedDice::none(), Color::Black).unwrap();
            assert!(legal_first(&pos, &dice, UsedDice::none(), Color::Black, &mv));
        }
    }
}

#[test]
fn test_ai_none_exactly_when_no_sequences() {
    // White on the bar against a closed board.
    let mut closed = Position::empty().with_bar(Color::White, 2).with_checkers(0, Color::White, 13);
    for point in 18..24 {
        closed = closed.with_checkers(point, Color::Black, 2);
    }
    closed = closed.with_checkers(12, Color::Black, 3);

    let mut ai = AiSearch::new(AiConfig::default());
    for (a, b) in [(1, 2), (3, 3), (6, 5)] {
        let dice = Dice::new(a, b);
        assert!(legal_sequences(&closed, &dice, UsedDice::none(), Color::White).is_empty());
        assert!(ai.choose_move(&closed, &dice, UsedDice::none(), Color::White).is_none());
    }

    // Open one entry point and a move appears.
    let open = closed.with_checkers(20, Color::Black, 0).with_checkers(12, Color::Black, 5);
    let dice = Dice::new(4, 4);
    assert!(!legal_sequences(&open, &dice, UsedDice::none(), Color::White).is_empty());
    assert!(ai.choose_move(&open, &dice, UsedDice::none(), Color::White).is_some());
}

#[test]
fn test_ai_plays_out_a_turn() {
    let mut pos = Position::starting();
    let dice = Dice::new(2, 2);
    let mut used = UsedDice::none();
    let mut ai = AiSearch::new(AiConfig::default().with_skill(0.5));

    while let Some(mv) = ai.choose_move(&pos, &dice, used, Color::White) {
        assert!(legal_first(&pos, &dice, used, Color::White, &mv));
        pos = apply_move(&pos, &mv, Color::White);
        used = used.with(mv.die_index);
    }
    assert_eq!(used.len(), 4);
    assert_eq!(pos.checker_total(Color::White), 15);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_choice() {
    let pos = Position::starting();
    let dice = Dice::new(6, 4);
    for skill in [0.1, 0.9] {
        let config = AiConfig::default().with_skill(skill).with_seed(77);
        let a = AiSearch::new(config.clone()).choose_sequence(&pos, &dice, UsedDice::none(), Color::White);
        let b = AiSearch::new(config).choose_sequence(&pos, &dice, UsedDice::none(), Color::White);
        assert_eq!(a, b);
    }
}

/// Always rolls the same pair and never adds noise.
struct FixedRolls(u8, u8, bool);

impl RandomSource for FixedRolls {
    fn roll_die(&mut self) -> u8 {
        self.2 = !self.2;
        if self.2 {
            self.0
        } else {
            self.1
        }
    }

    fn next_unit(&mut self) -> f64 {
        0.0
    }
}

#[test]
fn test_injected_source_drives_lookahead() {
    let pos = Position::starting();
    let dice = Dice::new(5, 3);
    let config = AiConfig::default().with_skill(1.0);

    let a = AiSearch::with_rng(config.clone(), FixedRolls(6, 1, false))
        .choose_sequence(&pos, &dice, UsedDice::none(), Color::White);
    let b = AiSearch::with_rng(config, FixedRolls(6, 1, false))
        .choose_sequence(&pos, &dice, UsedDice::none(), Color::White);
    assert_eq!(a, b);
}

// =============================================================================
// Style
// =============================================================================

#[test]
fn test_strong_ai_makes_point_with_opening_three_one() {
    let pos = Position::starting();
    let dice = Dice::new(3, 1);
    let mut ai = AiSearch::with_rng(AiConfig::default().with_skill(1.0), GameRng::new(3));
    let seq = ai.choose_sequence(&pos, &dice, UsedDice::none(), Color::White).unwrap();

    let after = backgammon_engine::rules::apply_sequence(&pos, &seq, Color::White);
    // 16/19 18/19: the classic point-making play, no blots left.
    assert_eq!(after.count_of(19, Color::White), 2);
    assert_eq!(backgammon_engine::eval::blots(&after, Color::White), 0);
}

#[test]
fn test_aggressive_hits_more_than_defensive() {
    // White may hit the blot on 8 (from 3 with the 5) or make a safe point at home.
    let pos = Position::empty()
        .with_checkers(3, Color::White, 2)
        .with_checkers(18, Color::White, 6)
        .with_checkers(20, Color::White, 7)
        .with_checkers(8, Color::Black, 1)
        .with_checkers(1, Color::Black, 14);
    let dice = Dice::new(5, 2);

    let hits = |personality: Personality| -> usize {
        (0..10)
            .filter(|&seed| {
                let config = AiConfig::default()
                    .with_skill(0.3)
                    .with_personality(personality)
                    .with_seed(seed);
                AiSearch::new(config)
                    .choose_sequence(&pos, &dice, UsedDice::none(), Color::White)
                    .is_some_and(|s| s.iter().any(|m| m.is_hit))
            })
            .count()
    };
    assert!(hits(Personality::Aggressive) >= hits(Personality::Defensive));
}

#[test]
fn test_evaluator_prefers_lead_in_race() {
    let eval = Evaluator::default();
    let ahead = Position::empty()
        .with_checkers(22, Color::White, 10)
        .with_borne_off(Color::White, 5)
        .with_checkers(3, Color::Black, 15);
    assert!(eval.relative_advantage(&ahead, Color::White) > 0.0);
    assert!(eval.relative_advantage(&ahead, Color::Black) < 0.0);
}
