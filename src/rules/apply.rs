use crate::core::position::{Position, RosterSlot};
use crate::core::square::Square;
use crate::game::Game;
use crate::pieces::{EffectKind, Piece};

use super::legality::target_useful;
use super::Action;

/// Primary target plus up to 8 touching squares.
pub const MAX_AFFECTED: usize = 9;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AbilityEffect {
    /// Skipped, or aimed at a target it cannot change.
    None,
    Damage,
    AreaDamage,
    WallBuilt,
    WallDestroyed,
}

/// Pre-ability snapshot of one square, with the roster slot of the piece if it had one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Affected {
    pub piece: Piece,
    pub slot: Option<RosterSlot>,
}

/// Everything needed to invert one [`make_action`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UndoInfo {
    pub action: Action,
    pub effect: AbilityEffect,
    affected: [Affected; MAX_AFFECTED],
    count: u8,
}

impl UndoInfo {
    fn new(action: Action) -> Self {
        let blank = Affected {
            piece: Piece::empty(Square::new(0, 0)),
            slot: None,
        };
        Self {
            action,
            effect: AbilityEffect::None,
            affected: [blank; MAX_AFFECTED],
            count: 0,
        }
    }

    /// Snapshots in the order they were taken: primary target first, then neighbours.
    pub fn affected(&self) -> &[Affected] {
        &self.affected[..self.count as usize]
    }

    fn record(&mut self, piece: Piece, slot: Option<RosterSlot>) {
        debug_assert!((self.count as usize) < MAX_AFFECTED);
        self.affected[self.count as usize] = Affected { piece, slot };
        self.count += 1;
    }
}

fn hit(pos: &mut Position, undo: &mut UndoInfo, sq: Square, amount: i32) {
    let slot = pos.slot_of(sq);
    undo.record(*pos.piece_at(sq), slot);
    pos.damage(sq, amount, slot);
}

fn resolve_ability(game: &mut Game, undo: &mut UndoInfo, src: Square, dst: Square) {
    let me = game.current;
    let actor = *game.position.piece_at(src);
    let target = *game.position.piece_at(dst);
    debug_assert!(actor.belongs_to(me) && actor.is_alive());
    debug_assert!(!target.belongs_to(me));

    if !target_useful(&game.config, me, actor.role, &target) {
        return;
    }

    let spec = actor.role.spec();
    let amount = spec.ability_damage;
    let pos = &mut game.position;
    let effect = match spec.effect {
        EffectKind::Damage => {
            hit(pos, undo, dst, amount);
            AbilityEffect::Damage
        }
        EffectKind::AreaDamage => {
            hit(pos, undo, dst, amount);
            for &n in game.atlas.adjacent(dst) {
                if pos.piece_at(n).is_enemy_combatant(me) {
                    hit(pos, undo, n, amount);
                }
            }
            AbilityEffect::AreaDamage
        }
        EffectKind::DamageOrTerrain if target.is_empty() => {
            undo.record(target, None);
            pos.set_terrain(Piece::wall(me, dst));
            AbilityEffect::WallBuilt
        }
        EffectKind::DamageOrTerrain if target.is_wall() => {
            undo.record(target, None);
            pos.set_terrain(Piece::empty(dst));
            AbilityEffect::WallDestroyed
        }
        EffectKind::DamageOrTerrain => {
            hit(pos, undo, dst, amount);
            AbilityEffect::Damage
        }
        EffectKind::Inert => AbilityEffect::None,
    };
    undo.effect = effect;
}

/// Apply an action and return the record that undoes it.
///
/// The action must be legal ([`super::is_action_legal`]); nothing is validated here
/// beyond debug assertions. An ability aimed at a target it cannot change (a warrior
/// hitting an empty square) is recorded as [`AbilityEffect::None`].
pub fn make_action(game: &mut Game, action: Action) -> UndoInfo {
    let mut undo = UndoInfo::new(action);
    let parts = action.parts();
    debug_assert!(parts.is_some(), "malformed action {action:?}");
    let (mv, ability) = parts.unwrap_or((None, None));

    if let Some(mv) = mv {
        game.position.move_piece(mv.src, mv.dst);
    }
    if let Some(ability) = ability {
        resolve_ability(game, &mut undo, ability.src, ability.dst);
    }

    game.ply += 1;
    game.current = game.current.other();
    undo
}

/// Exact inverse of the [`make_action`] that produced `undo`.
pub fn undo_action(game: &mut Game, undo: &UndoInfo) {
    for a in undo.affected().iter().rev() {
        game.position.restore(a.piece, a.slot);
    }
    if let Some(mv) = undo.action.movement() {
        game.position.move_piece(mv.dst, mv.src);
    }
    game.ply -= 1;
    game.current = game.current.other();
    debug_assert!(game.position.is_consistent());
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::atlas::Atlas;
    use crate::pieces::{Player, Role};
    use crate::rules::{ABILITY_SKIP, MOVE_SKIP};

    fn game_from(encoded: &str) -> Game {
        Game::from_encoded(Arc::new(Atlas::new()), encoded).expect("fixture decodes")
    }

    fn board_with(tokens: &[(usize, &str)], player: char) -> String {
        let mut squares = vec!["empty".to_string(); 64];
        for (i, t) in tokens {
            squares[*i] = t.to_string();
        }
        let mut s = format!("{player}|");
        for t in squares {
            s.push_str(&t);
            s.push(',');
        }
        s
    }

    #[test]
    fn pawn_builds_and_destroys_walls() {
        let mut game = game_from(&board_with(
            &[(0, "0-king-200"), (27, "0-pawn-300"), (63, "1-king-200"), (36, "1-wall-1")],
            '0',
        ));
        let build = game.make_action(Action::new(MOVE_SKIP, MOVE_SKIP, 27, 28));
        assert_eq!(build.effect, AbilityEffect::WallBuilt);
        assert_eq!(game.piece_at(Square::new(4, 3)).role, Role::Wall);
        assert!(game.piece_at(Square::new(4, 3)).belongs_to(Player::A));
        game.undo_action(&build);
        assert!(game.piece_at(Square::new(4, 3)).is_empty());

        let destroy = game.make_action(Action::new(MOVE_SKIP, MOVE_SKIP, 27, 36));
        assert_eq!(destroy.effect, AbilityEffect::WallDestroyed);
        assert!(game.piece_at(Square::new(4, 4)).is_empty());
        game.undo_action(&destroy);
        assert_eq!(game.piece_at(Square::new(4, 4)).role, Role::Wall);
    }

    #[test]
    fn inert_ability_changes_nothing_but_the_turn() {
        let mut game = Game::new(Arc::new(Atlas::new()));
        let before = game.position().clone();
        // Warrior (3,1) hits the empty (3,2).
        let undo = game.make_action(Action::new(MOVE_SKIP, MOVE_SKIP, 11, 19));
        assert_eq!(undo.effect, AbilityEffect::None);
        assert!(undo.affected().is_empty());
        assert_eq!(game.position(), &before);
        assert_eq!(game.current_player(), Player::B);
        game.undo_action(&undo);
        assert_eq!(game.current_player(), Player::A);
    }

    #[test]
    fn undo_revives_a_killed_assassin() {
        let mut game = Game::new(Arc::new(Atlas::new()));
        game.make_action(Action::new(7, 28, ABILITY_SKIP, ABILITY_SKIP));
        let before = game.encode();
        let undo = game.make_action(Action::new(56, 35, 35, 28));
        assert_eq!(undo.effect, AbilityEffect::Damage);
        assert!(game.piece_at(Square::new(4, 3)).is_empty());
        game.undo_action(&undo);
        assert_eq!(game.encode(), before);
        assert_eq!(game.pieces_of(Player::A)[1].square, Square::new(4, 3));
    }
}
