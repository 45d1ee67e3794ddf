use nichess::error::DecodeError;
use nichess::positions;
use nichess::{Game, Player};

mod common;

#[test]
fn fixtures_roundtrip_through_the_codec() {
    for name in positions::available_names() {
        let encoded = positions::by_name(name).expect("listed");
        let game = Game::from_encoded(common::atlas(), encoded).expect("decodes");
        assert_eq!(game.encode(), encoded, "{name}");

        let again = Game::from_encoded(common::atlas(), &game.encode()).expect("decodes");
        assert_eq!(again.position(), game.position(), "{name}");
    }
}

#[test]
fn new_game_encodes_as_the_start_fixture() {
    assert_eq!(Game::new(common::atlas()).encode(), positions::START);
}

#[test]
fn loading_resets_the_ply_counter_and_keeps_the_side_to_move() {
    let mut game = common::named("start", true);
    let action = game.useful_legal_actions()[0];
    assert!(game.play(action));
    assert_eq!(game.ply(), 1);

    let encoded = game.encode();
    assert!(encoded.starts_with("1|"));
    game.load(&encoded).expect("decodes");
    assert_eq!(game.ply(), 0);
    assert_eq!(game.current_player(), Player::B);
    assert_eq!(game.history_len(), 0);
    assert_eq!(game.encode(), encoded);
}

#[test]
fn fourth_living_pawn_is_rejected() {
    let encoded = common::board(
        '1',
        &[(8, "1-pawn-1"), (9, "1-pawn-1"), (10, "1-pawn-1"), (11, "1-pawn-1")],
    );
    let err = Game::from_encoded(common::atlas(), &encoded).err();
    assert_eq!(
        err,
        Some(DecodeError::TooManyPawns {
            player: Player::B,
            square: 11
        })
    );
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("player B has a fourth living pawn at square 11")
    );
}
