//! Occupancy-independent destination tables.
//!
//! For every (owner, role, square) the atlas stores the candidate move destinations and
//! candidate ability destinations as if the board were empty, clipped to the 8x8 board.
//! It also stores the touching-square table used by area damage. Build it once and share it
//! (`Arc<Atlas>`) between any number of games.

use crate::core::coord::{offsets_within, Coord, ASSASSIN_JUMPS, KING_STEPS};
use crate::core::square::{Square, NUM_SQUARES};
use crate::pieces::{Player, Role};

const NUM_ROLES: usize = 7;

#[derive(Debug, Clone)]
pub struct Atlas {
    moves: Vec<Box<[Square]>>,
    abilities: Vec<Box<[Square]>>,
    adjacent: Vec<Box<[Square]>>,
}

#[inline]
fn slot(player: Player, role: Role, sq: Square) -> usize {
    (player.index() * NUM_ROLES + role.index()) * NUM_SQUARES + sq.index()
}

fn clipped(origin: Square, offsets: impl IntoIterator<Item = Coord>) -> Box<[Square]> {
    offsets
        .into_iter()
        .filter_map(|d| origin.shifted(d))
        .collect::<Vec<_>>()
        .into_boxed_slice()
}

fn move_offsets(player: Player, role: Role) -> Vec<Coord> {
    match role {
        Role::King | Role::Mage | Role::Warrior => KING_STEPS.to_vec(),
        Role::Pawn => {
            let mut v = KING_STEPS.to_vec();
            v.push(Coord::new(0, 2 * player.forward()));
            v
        }
        Role::Assassin => offsets_within(2).chain(ASSASSIN_JUMPS).collect(),
        Role::Wall | Role::Empty => Vec::new(),
    }
}

fn ability_offsets(role: Role) -> Vec<Coord> {
    match role {
        Role::Mage => offsets_within(2).collect(),
        Role::King | Role::Warrior | Role::Assassin | Role::Pawn => KING_STEPS.to_vec(),
        Role::Wall | Role::Empty => Vec::new(),
    }
}

impl Atlas {
    pub fn new() -> Atlas {
        let cap = 2 * NUM_ROLES * NUM_SQUARES;
        let mut moves = Vec::with_capacity(cap);
        let mut abilities = Vec::with_capacity(cap);

        for player in Player::ALL {
            for role in ROLES_BY_INDEX {
                let mv = move_offsets(player, role);
                let ab = ability_offsets(role);
                for sq in Square::all() {
                    debug_assert_eq!(moves.len(), slot(player, role, sq));
                    moves.push(clipped(sq, mv.iter().copied()));
                    abilities.push(clipped(sq, ab.iter().copied()));
                }
            }
        }

        let adjacent: Vec<Box<[Square]>> = Square::all().map(|sq| clipped(sq, KING_STEPS)).collect();

        let atlas = Atlas {
            moves,
            abilities,
            adjacent,
        };
        tracing::debug!(
            move_entries = atlas.moves.iter().map(|m| m.len()).sum::<usize>(),
            ability_entries = atlas.abilities.iter().map(|a| a.len()).sum::<usize>(),
            "built geometry atlas"
        );
        atlas
    }

    /// Candidate move destinations of a `role` piece owned by `player` standing on `sq`.
    #[inline]
    pub fn moves(&self, player: Player, role: Role, sq: Square) -> &[Square] {
        &self.moves[slot(player, role, sq)]
    }

    /// Candidate ability destinations of a `role` piece owned by `player` standing on `sq`.
    #[inline]
    pub fn abilities(&self, player: Player, role: Role, sq: Square) -> &[Square] {
        &self.abilities[slot(player, role, sq)]
    }

    /// The up to 8 squares touching `sq`.
    #[inline]
    pub fn adjacent(&self, sq: Square) -> &[Square] {
        &self.adjacent[sq.index()]
    }
}

impl Default for Atlas {
    fn default() -> Self {
        Atlas::new()
    }
}

const ROLES_BY_INDEX: [Role; NUM_ROLES] = [
    Role::King,
    Role::Mage,
    Role::Warrior,
    Role::Assassin,
    Role::Pawn,
    Role::Wall,
    Role::Empty,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_table_matches_role_indices() {
        for (i, role) in ROLES_BY_INDEX.into_iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn corner_king_has_three_neighbours() {
        let atlas = Atlas::new();
        let corner = Square::new(0, 0);
        assert_eq!(atlas.moves(Player::A, Role::King, corner).len(), 3);
        assert_eq!(atlas.abilities(Player::A, Role::King, corner).len(), 3);
        assert_eq!(atlas.adjacent(corner).len(), 3);
    }

    #[test]
    fn pawn_double_step_points_towards_the_opponent() {
        let atlas = Atlas::new();
        let sq = Square::new(3, 3);
        let a = atlas.moves(Player::A, Role::Pawn, sq);
        let b = atlas.moves(Player::B, Role::Pawn, sq);
        assert_eq!(a.len(), 9);
        assert!(a.contains(&Square::new(3, 5)));
        assert!(!a.contains(&Square::new(3, 1)));
        assert!(b.contains(&Square::new(3, 1)));
        // No double step off the far edge.
        assert_eq!(atlas.moves(Player::A, Role::Pawn, Square::new(3, 7)).len(), 5);
    }

    #[test]
    fn assassin_reaches_distance_two_and_the_long_diagonals() {
        let atlas = Atlas::new();
        let centre = Square::new(3, 3);
        let moves = atlas.moves(Player::B, Role::Assassin, centre);
        assert_eq!(moves.len(), 24 + 4);
        assert!(moves.contains(&Square::new(0, 0)));
        assert!(moves.contains(&Square::new(6, 6)));
        assert!(moves.contains(&Square::new(5, 1)));
        assert_eq!(atlas.abilities(Player::B, Role::Assassin, centre).len(), 8);
    }

    #[test]
    fn mage_ability_covers_distance_two() {
        let atlas = Atlas::new();
        assert_eq!(atlas.abilities(Player::A, Role::Mage, Square::new(4, 4)).len(), 24);
        assert_eq!(atlas.abilities(Player::A, Role::Mage, Square::new(0, 0)).len(), 8);
        assert_eq!(atlas.moves(Player::A, Role::Mage, Square::new(4, 4)).len(), 8);
    }

    #[test]
    fn walls_and_empty_squares_have_no_destinations() {
        let atlas = Atlas::new();
        for sq in Square::all() {
            for role in [Role::Wall, Role::Empty] {
                assert!(atlas.moves(Player::A, role, sq).is_empty());
                assert!(atlas.abilities(Player::B, role, sq).is_empty());
            }
        }
    }
}
