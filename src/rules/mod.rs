//! Action legality, application and enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::square::Square;

pub mod apply;
pub mod legality;
pub mod movegen;
pub mod terminal;

pub use apply::{make_action, undo_action, AbilityEffect, Affected, UndoInfo, MAX_AFFECTED};
pub use legality::is_action_legal;
pub use movegen::{
    all_legal_abilities_by_piece, all_legal_actions, legal_moves_by_piece,
    useful_legal_abilities_by_piece, useful_legal_actions,
};
pub use terminal::{game_over, winner};

/// Sentinel for both endpoints of a skipped move.
pub const MOVE_SKIP: i32 = -1;
/// Sentinel for both endpoints of a skipped ability.
pub const ABILITY_SKIP: i32 = -2;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub src: Square,
    pub dst: Square,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub src: Square,
    pub dst: Square,
}

/// One ply: an optional move followed by an optional ability.
///
/// Endpoints are raw square indices so that untrusted input can be represented and
/// rejected by [`is_action_legal`]. A skipped move uses [`MOVE_SKIP`] for both endpoints,
/// a skipped ability [`ABILITY_SKIP`] for both.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub move_src: i32,
    pub move_dst: i32,
    pub ability_src: i32,
    pub ability_dst: i32,
}

impl Action {
    pub const SKIP: Action = Action {
        move_src: MOVE_SKIP,
        move_dst: MOVE_SKIP,
        ability_src: ABILITY_SKIP,
        ability_dst: ABILITY_SKIP,
    };

    pub fn new(move_src: i32, move_dst: i32, ability_src: i32, ability_dst: i32) -> Action {
        Action {
            move_src,
            move_dst,
            ability_src,
            ability_dst,
        }
    }

    pub fn from_parts(mv: Option<Move>, ability: Option<Ability>) -> Action {
        let (move_src, move_dst) = match mv {
            Some(m) => (i32::from(m.src), i32::from(m.dst)),
            None => (MOVE_SKIP, MOVE_SKIP),
        };
        let (ability_src, ability_dst) = match ability {
            Some(a) => (i32::from(a.src), i32::from(a.dst)),
            None => (ABILITY_SKIP, ABILITY_SKIP),
        };
        Action::new(move_src, move_dst, ability_src, ability_dst)
    }

    /// Split into typed parts, `None` if an index is out of range or a skip sentinel is
    /// not paired with itself.
    pub fn parts(&self) -> Option<(Option<Move>, Option<Ability>)> {
        let mv = match (self.move_src, self.move_dst) {
            (MOVE_SKIP, MOVE_SKIP) => None,
            (src, dst) => Some(Move {
                src: Square::from_index(src)?,
                dst: Square::from_index(dst)?,
            }),
        };
        let ability = match (self.ability_src, self.ability_dst) {
            (ABILITY_SKIP, ABILITY_SKIP) => None,
            (src, dst) => Some(Ability {
                src: Square::from_index(src)?,
                dst: Square::from_index(dst)?,
            }),
        };
        Some((mv, ability))
    }

    #[inline]
    pub fn movement(&self) -> Option<Move> {
        self.parts().and_then(|(mv, _)| mv)
    }

    #[inline]
    pub fn ability(&self) -> Option<Ability> {
        self.parts().and_then(|(_, ab)| ab)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts() {
            Some((mv, ab)) => {
                match mv {
                    Some(m) => write!(f, "{}->{}", m.src, m.dst)?,
                    None => write!(f, "pass")?,
                }
                match ab {
                    Some(a) => write!(f, " {}=>{}", a.src, a.dst),
                    None => write!(f, " skip"),
                }
            }
            None => write!(
                f,
                "invalid({},{},{},{})",
                self.move_src, self.move_dst, self.ability_src, self.ability_dst
            ),
        }
    }
}
