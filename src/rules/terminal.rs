use crate::game::Game;
use crate::pieces::Player;

/// True once either king has fallen.
pub fn game_over(game: &Game) -> bool {
    Player::ALL
        .into_iter()
        .any(|p| !game.position.king(p).is_alive())
}

/// The player whose king survives while the other's has fallen.
///
/// `None` while both kings live, and also when both are dead. The rules cannot kill
/// both kings in one ply (area damage only reaches opposing pieces), so that state only
/// arises from a decoded position and is scored as a draw.
pub fn winner(game: &Game) -> Option<Player> {
    let alive = |p: Player| game.position.king(p).is_alive();
    match (alive(Player::A), alive(Player::B)) {
        (true, false) => Some(Player::A),
        (false, true) => Some(Player::B),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::atlas::Atlas;

    #[test]
    fn fresh_game_is_not_over() {
        let game = Game::new(Arc::new(Atlas::new()));
        assert!(!game_over(&game));
        assert_eq!(winner(&game), None);
    }

    #[test]
    fn missing_king_ends_the_game() {
        let mut encoded = String::from("1|");
        for i in 0..64 {
            encoded.push_str(if i == 0 { "0-king-5" } else { "empty" });
            encoded.push(',');
        }
        let mut game = Game::from_encoded(Arc::new(Atlas::new()), &encoded).expect("decodes");
        assert!(game_over(&game));
        assert_eq!(winner(&game), Some(Player::A));
        assert!(game.useful_legal_actions().is_empty());
        assert!(game.all_legal_actions().is_empty());
    }
}
