use std::sync::Arc;

use crate::atlas::Atlas;
use crate::core::position::ROSTER_SIZE;
use crate::core::square::Square;
use crate::game::Game;
use crate::pieces::{Piece, Player};

use super::legality::{move_allowed, target_allowed, target_useful};
use super::{Ability, Action, Move};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Filter {
    Useful,
    All,
}

/// Squares of `player`'s living roster pieces, copied out so the board can be mutated
/// while iterating.
fn living(game: &Game, player: Player) -> ([Square; ROSTER_SIZE], usize) {
    let mut out = [Square::new(0, 0); ROSTER_SIZE];
    let mut n = 0;
    for sq in game.position.living_squares(player) {
        out[n] = sq;
        n += 1;
    }
    (out, n)
}

/// Push one action per (ability) available to the side to move, all sharing `mv`.
fn push_abilities(game: &Game, atlas: &Atlas, filter: Filter, mv: Option<Move>, out: &mut Vec<Action>) {
    let me = game.current;
    let (actors, n) = living(game, me);
    for &src in &actors[..n] {
        let role = game.position.piece_at(src).role;
        for &dst in atlas.abilities(me, role, src) {
            let target = game.position.piece_at(dst);
            let keep = match filter {
                Filter::Useful => target_useful(&game.config, me, role, target),
                Filter::All => target_allowed(me, target),
            };
            if keep {
                out.push(Action::from_parts(mv, Some(Ability { src, dst })));
            }
        }
    }
}

fn legal_actions(game: &mut Game, filter: Filter) -> Vec<Action> {
    let me = game.current;
    let mut out = Vec::new();
    if !game.position.king(me).is_alive() {
        return out;
    }
    let atlas = Arc::clone(&game.atlas);

    let (movers, n) = living(game, me);
    for &src in &movers[..n] {
        let role = game.position.piece_at(src).role;
        for &dst in atlas.moves(me, role, src) {
            if !move_allowed(&game.position, role, src, dst) {
                continue;
            }
            let mv = Move { src, dst };
            game.position.move_piece(src, dst);
            push_abilities(game, &atlas, filter, Some(mv), &mut out);
            out.push(Action::from_parts(Some(mv), None));
            game.position.move_piece(dst, src);
        }
    }

    push_abilities(game, &atlas, filter, None, &mut out);
    out.push(Action::SKIP);
    out
}

/// Every legal action whose ability, if any, changes the position.
///
/// Empty once the side to move has lost its king. Otherwise always contains
/// [`Action::SKIP`].
pub fn useful_legal_actions(game: &mut Game) -> Vec<Action> {
    legal_actions(game, Filter::Useful)
}

/// Every legal action, inert abilities included.
pub fn all_legal_actions(game: &mut Game) -> Vec<Action> {
    legal_actions(game, Filter::All)
}

/// The piece on `sq` if it is a living piece of the side to move.
fn own_piece(game: &Game, sq: Square) -> Option<Piece> {
    let piece = *game.position.piece_at(sq);
    (piece.belongs_to(game.current) && piece.is_alive()).then_some(piece)
}

/// Legal moves of the piece on `sq`. Empty if it is not a living piece of the side to move.
pub fn legal_moves_by_piece(game: &Game, sq: Square) -> Vec<Move> {
    let Some(piece) = own_piece(game, sq) else {
        return Vec::new();
    };
    game.atlas
        .moves(game.current, piece.role, sq)
        .iter()
        .copied()
        .filter(|&dst| move_allowed(&game.position, piece.role, sq, dst))
        .map(|dst| Move { src: sq, dst })
        .collect()
}

fn abilities_by_piece(game: &Game, sq: Square, filter: Filter) -> Vec<Ability> {
    let Some(piece) = own_piece(game, sq) else {
        return Vec::new();
    };
    let me = game.current;
    game.atlas
        .abilities(me, piece.role, sq)
        .iter()
        .copied()
        .filter(|&dst| {
            let target = game.position.piece_at(dst);
            match filter {
                Filter::Useful => target_useful(&game.config, me, piece.role, target),
                Filter::All => target_allowed(me, target),
            }
        })
        .map(|dst| Ability { src: sq, dst })
        .collect()
}

/// Useful ability targets of the piece on `sq`, without moving first.
pub fn useful_legal_abilities_by_piece(game: &Game, sq: Square) -> Vec<Ability> {
    abilities_by_piece(game, sq, Filter::Useful)
}

/// All legal ability targets of the piece on `sq`, without moving first.
pub fn all_legal_abilities_by_piece(game: &Game, sq: Square) -> Vec<Ability> {
    abilities_by_piece(game, sq, Filter::All)
}
