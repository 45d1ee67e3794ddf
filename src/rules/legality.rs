use crate::config::RulesConfig;
use crate::core::position::Position;
use crate::core::square::Square;
use crate::game::Game;
use crate::pieces::{Piece, Player, Role, TargetPolicy};

use super::Action;

/// Occupancy filter for an atlas move destination.
///
/// The destination must be vacant, and a pawn's double step also needs the square it
/// jumps over to be vacant.
#[inline]
pub(crate) fn move_allowed(pos: &Position, role: Role, src: Square, dst: Square) -> bool {
    if !pos.is_vacant(dst) {
        return false;
    }
    if role == Role::Pawn && src.row().abs_diff(dst.row()) == 2 {
        let between = Square::new(src.column(), (src.row() + dst.row()) / 2);
        return pos.is_vacant(between);
    }
    true
}

/// Whether `player`'s `role` piece would change anything by targeting `target`.
#[inline]
pub(crate) fn target_useful(config: &RulesConfig, player: Player, role: Role, target: &Piece) -> bool {
    match config.target_policy(role) {
        TargetPolicy::Enemies => target.is_enemy_combatant(player),
        TargetPolicy::EnemiesOrTerrain => target.is_empty() || target.is_opponent_of(player),
        TargetPolicy::Nothing => false,
    }
}

/// Whether targeting `target` is legal at all. Only the acting player's own pieces
/// (walls included) are off limits; inert targets are legal no-ops.
#[inline]
pub(crate) fn target_allowed(player: Player, target: &Piece) -> bool {
    !target.belongs_to(player)
}

/// Check an action against the current position.
///
/// Accepts the "all actions" set: inert ability targets (an empty square for a warrior,
/// say) are legal. The optional move is applied speculatively so the ability is judged
/// on the post-move board, and is always reverted before returning.
pub fn is_action_legal(game: &mut Game, action: Action) -> bool {
    let Some((mv, ability)) = action.parts() else {
        return false;
    };
    let me = game.current;
    if !game.position.king(me).is_alive() {
        return false;
    }

    if let Some(mv) = mv {
        let mover = *game.position.piece_at(mv.src);
        if !mover.belongs_to(me) || !mover.is_alive() {
            return false;
        }
        if !game.atlas.moves(me, mover.role, mv.src).contains(&mv.dst)
            || !move_allowed(&game.position, mover.role, mv.src, mv.dst)
        {
            return false;
        }
    }

    let Some(ability) = ability else {
        return true;
    };

    if let Some(mv) = mv {
        game.position.move_piece(mv.src, mv.dst);
    }

    let actor = *game.position.piece_at(ability.src);
    let legal = actor.belongs_to(me)
        && actor.is_alive()
        && game.atlas.abilities(me, actor.role, ability.src).contains(&ability.dst)
        && target_allowed(me, game.position.piece_at(ability.dst));

    if let Some(mv) = mv {
        game.position.move_piece(mv.dst, mv.src);
    }
    legal
}
