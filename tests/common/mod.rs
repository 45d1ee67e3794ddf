#![allow(dead_code)]

use std::sync::Arc;

use nichess::positions;
use nichess::{Atlas, Game, RulesConfig};

pub fn atlas() -> Arc<Atlas> {
    Arc::new(Atlas::new())
}

pub fn named(name: &str, walls: bool) -> Game {
    let encoded = positions::by_name(name).expect("built-in position");
    Game::from_encoded_with_config(atlas(), RulesConfig { walls }, encoded)
        .expect("built-in position decodes")
}

/// Encoded board with the given `(square, token)` pairs and every other square empty.
pub fn board(player: char, tokens: &[(usize, &str)]) -> String {
    let mut s = format!("{player}|");
    for i in 0..64 {
        let t = tokens
            .iter()
            .find(|(j, _)| *j == i)
            .map_or("empty", |(_, t)| *t);
        s.push_str(t);
        s.push(',');
    }
    s
}
