use nichess::core::square::Square;
use nichess::rules::{Action, ABILITY_SKIP, MOVE_SKIP};
use nichess::Game;
use rustc_hash::FxHashSet;

mod common;

const FIXTURES: [&str; 3] = ["start", "sparse_midgame", "full_midgame"];

#[test]
fn useful_counts_with_and_without_walls() {
    let expected = [("start", 707, 42), ("sparse_midgame", 320, 84), ("full_midgame", 935, 46)];
    for (name, walls_on, walls_off) in expected {
        assert_eq!(common::named(name, true).useful_legal_actions().len(), walls_on, "{name}");
        assert_eq!(common::named(name, false).useful_legal_actions().len(), walls_off, "{name}");
    }
}

#[test]
fn enumerations_contain_no_duplicates_and_end_with_skip() {
    for name in FIXTURES {
        let mut game = common::named(name, true);
        for actions in [game.useful_legal_actions(), game.all_legal_actions()] {
            let set: FxHashSet<Action> = actions.iter().copied().collect();
            assert_eq!(set.len(), actions.len(), "duplicates in {name}");
            assert_eq!(actions.last(), Some(&Action::SKIP));
        }
    }
}

#[test]
fn useful_is_a_subset_of_all() {
    for name in FIXTURES {
        for walls in [true, false] {
            let mut game = common::named(name, walls);
            let all: FxHashSet<Action> = game.all_legal_actions().into_iter().collect();
            for action in game.useful_legal_actions() {
                assert!(all.contains(&action), "{name}: {action} useful but not in all");
            }
        }
    }
}

#[test]
fn enumerated_actions_pass_the_legality_check() {
    for name in FIXTURES {
        let mut game = common::named(name, true);
        let before = game.encode();
        for action in game.all_legal_actions() {
            assert!(game.is_action_legal(action), "{name}: {action} rejected");
        }
        assert_eq!(game.encode(), before);
    }
}

/// Every candidate the legality check accepts is enumerated, and nothing else.
fn assert_check_matches_enumeration(game: &mut Game) {
    let enumerated: FxHashSet<Action> = game.all_legal_actions().into_iter().collect();

    let mut moves = vec![(MOVE_SKIP, MOVE_SKIP)];
    for src in 0..64 {
        for dst in 0..64 {
            moves.push((src, dst));
        }
    }
    let mut abilities = vec![(ABILITY_SKIP, ABILITY_SKIP)];
    for src in Square::all() {
        for dst in Square::all() {
            if src.coord().x.abs_diff(dst.coord().x) <= 2 && src.coord().y.abs_diff(dst.coord().y) <= 2 {
                abilities.push((i32::from(src), i32::from(dst)));
            }
        }
    }

    let mut accepted = 0;
    for &(ms, md) in &moves {
        // Cheap pre-filter: only moves the check accepts on their own can pair with abilities.
        if !game.is_action_legal(Action::new(ms, md, ABILITY_SKIP, ABILITY_SKIP)) {
            for &(a_src, a_dst) in abilities.iter().step_by(97) {
                assert!(!game.is_action_legal(Action::new(ms, md, a_src, a_dst)));
            }
            continue;
        }
        for &(a_src, a_dst) in &abilities {
            let action = Action::new(ms, md, a_src, a_dst);
            let legal = game.is_action_legal(action);
            assert_eq!(legal, enumerated.contains(&action), "{action}");
            accepted += legal as usize;
        }
    }
    assert_eq!(accepted, enumerated.len());
}

#[test]
fn legality_check_agrees_with_enumeration() {
    assert_check_matches_enumeration(&mut common::named("sparse_midgame", true));
    assert_check_matches_enumeration(&mut common::named("start", true));
}

#[test]
fn walls_block_movement_and_are_targetable_only_by_enemy_pawns() {
    let encoded = common::board(
        '0',
        &[
            (0, "0-king-200"),
            (63, "1-king-200"),
            (27, "0-pawn-300"),
            (28, "1-wall-1"),
            (26, "0-wall-1"),
            (19, "0-warrior-500"),
        ],
    );
    let mut game = Game::from_encoded(common::atlas(), &encoded).expect("decodes");

    let pawn = Square::new(3, 3);
    let targets: Vec<Square> = game
        .useful_legal_abilities_by_piece(pawn)
        .into_iter()
        .map(|a| a.dst)
        .collect();
    assert!(targets.contains(&Square::new(4, 3)), "enemy wall");
    assert!(!targets.contains(&Square::new(2, 3)), "own wall");
    assert!(!targets.contains(&Square::new(3, 2)), "own warrior");
    assert!(targets.contains(&Square::new(3, 4)), "empty square");

    // The warrior cannot usefully hit the wall, and cannot walk into either wall.
    let warrior = Square::new(3, 2);
    assert!(game.useful_legal_abilities_by_piece(warrior).is_empty());
    assert!(game
        .legal_moves_by_piece(warrior)
        .iter()
        .all(|m| m.dst != Square::new(2, 3)));

    // Own wall is never a legal target, enemy wall is a legal (inert) target for the warrior.
    assert!(!game.is_action_legal(Action::new(MOVE_SKIP, MOVE_SKIP, 27, 26)));
    assert!(game.is_action_legal(Action::new(MOVE_SKIP, MOVE_SKIP, 19, 28)));
}
