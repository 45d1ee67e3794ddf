//! Position <-> string encoding.
//!
//! Format: `<player>|` followed by one token per square in index order, each followed by a
//! comma. A token is `empty` or `<owner>-<role>-<hit points>`, e.g.
//! `0|0-king-200,empty,...,1-king-200,`. Decoding also accepts the board without the final
//! comma.

use crate::core::position::Position;
use crate::core::square::{Square, NUM_SQUARES};
use crate::error::DecodeError;
use crate::pieces::{Piece, Player, Role};

const EMPTY_TOKEN: &str = "empty";

pub fn encode(pos: &Position, current: Player) -> String {
    let mut out = String::with_capacity(2 + NUM_SQUARES * 14);
    out.push(current.digit());
    out.push('|');
    for piece in pos.board() {
        match piece.owner {
            Some(owner) if !piece.is_empty() => {
                out.push(owner.digit());
                out.push('-');
                out.push_str(piece.role.name());
                out.push('-');
                out.push_str(&piece.hp.to_string());
            }
            _ => out.push_str(EMPTY_TOKEN),
        }
        out.push(',');
    }
    out
}

fn decode_token(square: usize, token: &str) -> Result<Option<Piece>, DecodeError> {
    if token == EMPTY_TOKEN {
        return Ok(None);
    }
    let malformed = || DecodeError::MalformedToken {
        square,
        token: token.to_string(),
    };

    let mut fields = token.splitn(3, '-');
    let (Some(owner), Some(role), Some(hp)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };
    let owner = Player::from_digit(owner).ok_or_else(malformed)?;
    let role = Role::from_name(role).ok_or_else(|| DecodeError::UnknownRole {
        square,
        name: role.to_string(),
    })?;
    let hp: i32 = hp.parse().map_err(|_| DecodeError::InvalidHitPoints {
        square,
        raw: hp.to_string(),
    })?;
    if hp <= 0 {
        return Err(DecodeError::DeadPieceOnBoard { square, hp });
    }

    // `square` is always < 64 here: the token count was checked by the caller.
    let sq = Square::from_index(square as i32).ok_or_else(malformed)?;
    Ok(Some(Piece {
        role,
        owner: Some(owner),
        hp,
        square: sq,
    }))
}

/// Parse an encoded position.
///
/// Roster slots are filled in square order; pawns take the first pawn slot not yet holding
/// a living pawn. A fourth living pawn, or a second king/assassin/mage/warrior, is an error.
pub fn decode(encoded: &str) -> Result<(Position, Player), DecodeError> {
    let (tag, body) = encoded
        .trim()
        .split_once('|')
        .ok_or(DecodeError::MissingSeparator)?;
    let current = Player::from_digit(tag).ok_or_else(|| DecodeError::InvalidPlayer {
        tag: tag.to_string(),
    })?;

    let body = body.strip_suffix(',').unwrap_or(body);
    let tokens: Vec<&str> = body.split(',').collect();
    if tokens.len() != NUM_SQUARES {
        return Err(DecodeError::WrongSquareCount {
            found: tokens.len(),
        });
    }

    let mut pos = Position::empty();
    for (i, token) in tokens.iter().enumerate() {
        let Some(piece) = decode_token(i, token.trim())? else {
            continue;
        };
        if let Some(owner) = piece.owner.filter(|_| piece.role.is_combat()) {
            if pos.free_slot(owner, piece.role).is_none() {
                return Err(match piece.role {
                    Role::Pawn => DecodeError::TooManyPawns {
                        player: owner,
                        square: i,
                    },
                    role => DecodeError::DuplicatePiece {
                        player: owner,
                        role,
                        square: i,
                    },
                });
            }
        }
        pos.place(piece);
    }

    tracing::debug!(
        to_move = ?current,
        a_pieces = pos.living_squares(Player::A).count(),
        b_pieces = pos.living_squares(Player::B).count(),
        "decoded position"
    );
    Ok((pos, current))
}
