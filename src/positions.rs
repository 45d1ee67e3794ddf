//! Built-in named positions.

/// The opening layout, player A to move.
pub const START: &str = concat!(
    "0|",
    "0-king-200,empty,empty,empty,empty,empty,empty,0-assassin-110,",
    "0-pawn-300,0-pawn-300,empty,0-warrior-500,0-mage-230,0-pawn-300,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,1-pawn-300,1-mage-230,1-warrior-500,empty,1-pawn-300,1-pawn-300,",
    "1-assassin-110,empty,empty,empty,empty,empty,empty,1-king-200,",
);

/// A sparse midgame: A has a king, two pawns and a warrior; B a king and three pawns.
pub const SPARSE_MIDGAME: &str = concat!(
    "0|",
    "0-king-140,1-pawn-10,empty,empty,empty,empty,empty,empty,",
    "empty,0-pawn-210,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,1-pawn-70,empty,0-pawn-30,",
    "empty,empty,empty,0-warrior-80,empty,empty,empty,empty,",
    "empty,empty,empty,1-pawn-100,empty,empty,empty,1-king-200,",
);

/// A near-full midgame where a few pawns have advanced from the opening layout.
pub const FULL_MIDGAME: &str = concat!(
    "0|",
    "0-king-200,empty,empty,empty,empty,empty,empty,0-assassin-110,",
    "empty,0-pawn-300,empty,0-warrior-500,0-mage-230,0-pawn-300,empty,empty,",
    "empty,0-pawn-300,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,empty,empty,empty,empty,empty,empty,",
    "empty,empty,1-pawn-300,1-mage-230,1-warrior-500,empty,1-pawn-300,1-pawn-300,",
    "1-assassin-110,empty,empty,empty,empty,empty,empty,1-king-200,",
);

/// Encoded position for a built-in name.
pub fn by_name(name: &str) -> Option<&'static str> {
    match name {
        "start" => Some(START),
        "sparse_midgame" => Some(SPARSE_MIDGAME),
        "full_midgame" => Some(FULL_MIDGAME),
        _ => None,
    }
}

/// Names of all built-in positions.
pub fn available_names() -> &'static [&'static str] {
    &["start", "sparse_midgame", "full_midgame"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::core::position::Position;
    use crate::pieces::Player;

    #[test]
    fn start_matches_the_built_in_layout() {
        assert_eq!(codec::encode(&Position::starting(), Player::A), START);
    }

    #[test]
    fn every_name_decodes() {
        for name in available_names() {
            let encoded = by_name(name).expect("listed name resolves");
            assert!(codec::decode(encoded).is_ok(), "{name} does not decode");
        }
        assert_eq!(by_name("nope"), None);
    }
}
