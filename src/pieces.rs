use serde::{Deserialize, Serialize};

use crate::core::square::Square;

/// One of the two sides. `A` starts at the bottom edge and moves first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Digit used by the string encoding.
    #[inline]
    pub fn digit(self) -> char {
        match self {
            Player::A => '0',
            Player::B => '1',
        }
    }

    pub fn from_digit(s: &str) -> Option<Player> {
        match s {
            "0" => Some(Player::A),
            "1" => Some(Player::B),
            _ => None,
        }
    }

    /// Row delta of a single pawn step towards the opponent's home edge.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    King,
    Mage,
    Warrior,
    Assassin,
    Pawn,
    Wall,
    Empty,
}

/// Which squares a role may usefully aim its ability at.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TargetPolicy {
    /// Opposing combat pieces only.
    Enemies,
    /// Opposing combat pieces, empty squares (build) and opposing walls (destroy).
    EnemiesOrTerrain,
    Nothing,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EffectKind {
    Damage,
    /// Damage to the target and every touching opposing combat piece.
    AreaDamage,
    /// Damage, or wall construction / demolition depending on the target square.
    DamageOrTerrain,
    Inert,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RoleSpec {
    pub starting_hp: i32,
    pub ability_damage: i32,
    pub target: TargetPolicy,
    pub effect: EffectKind,
}

pub const WALL_HIT_POINTS: i32 = 1;

const KING_SPEC: RoleSpec = RoleSpec {
    starting_hp: 200,
    ability_damage: 60,
    target: TargetPolicy::Enemies,
    effect: EffectKind::Damage,
};
const MAGE_SPEC: RoleSpec = RoleSpec {
    starting_hp: 230,
    ability_damage: 80,
    target: TargetPolicy::Enemies,
    effect: EffectKind::AreaDamage,
};
const WARRIOR_SPEC: RoleSpec = RoleSpec {
    starting_hp: 500,
    ability_damage: 100,
    target: TargetPolicy::Enemies,
    effect: EffectKind::Damage,
};
const ASSASSIN_SPEC: RoleSpec = RoleSpec {
    starting_hp: 110,
    ability_damage: 120,
    target: TargetPolicy::Enemies,
    effect: EffectKind::Damage,
};
const PAWN_SPEC: RoleSpec = RoleSpec {
    starting_hp: 300,
    ability_damage: 30,
    target: TargetPolicy::EnemiesOrTerrain,
    effect: EffectKind::DamageOrTerrain,
};
const WALL_SPEC: RoleSpec = RoleSpec {
    starting_hp: WALL_HIT_POINTS,
    ability_damage: 0,
    target: TargetPolicy::Nothing,
    effect: EffectKind::Inert,
};
const EMPTY_SPEC: RoleSpec = RoleSpec {
    starting_hp: 0,
    ability_damage: 0,
    target: TargetPolicy::Nothing,
    effect: EffectKind::Inert,
};

impl Role {
    /// Roles that can appear in the atlas, i.e. everything but `Empty`.
    pub const PLACEABLE: [Role; 6] = [
        Role::King,
        Role::Mage,
        Role::Warrior,
        Role::Assassin,
        Role::Pawn,
        Role::Wall,
    ];

    #[inline]
    pub fn spec(self) -> &'static RoleSpec {
        match self {
            Role::King => &KING_SPEC,
            Role::Mage => &MAGE_SPEC,
            Role::Warrior => &WARRIOR_SPEC,
            Role::Assassin => &ASSASSIN_SPEC,
            Role::Pawn => &PAWN_SPEC,
            Role::Wall => &WALL_SPEC,
            Role::Empty => &EMPTY_SPEC,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::King => "king",
            Role::Mage => "mage",
            Role::Warrior => "warrior",
            Role::Assassin => "assassin",
            Role::Pawn => "pawn",
            Role::Wall => "wall",
            Role::Empty => "empty",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::PLACEABLE.into_iter().find(|r| r.name() == name)
    }

    /// Kings, mages, warriors, assassins and pawns: the roles tracked by a roster.
    #[inline]
    pub fn is_combat(self) -> bool {
        !matches!(self, Role::Wall | Role::Empty)
    }
}

/// The content of one board square.
///
/// Vacant squares hold an `Empty` piece (no owner, 0 hit points) tagged with their own
/// square, so a board slot is never undefined.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub role: Role,
    pub owner: Option<Player>,
    pub hp: i32,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub fn empty(square: Square) -> Piece {
        Piece {
            role: Role::Empty,
            owner: None,
            hp: 0,
            square,
        }
    }

    /// A fresh piece with its role's starting hit points.
    pub fn new(role: Role, owner: Player, square: Square) -> Piece {
        debug_assert!(role != Role::Empty);
        Piece {
            role,
            owner: Some(owner),
            hp: role.spec().starting_hp,
            square,
        }
    }

    #[inline]
    pub fn wall(owner: Player, square: Square) -> Piece {
        Piece::new(Role::Wall, owner, square)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.role == Role::Empty
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.role == Role::Wall
    }

    #[inline]
    pub fn belongs_to(&self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Owned by the opponent of `player` (walls included, empty squares excluded).
    #[inline]
    pub fn is_opponent_of(&self, player: Player) -> bool {
        self.owner == Some(player.other())
    }

    /// An opposing king, mage, warrior, assassin or pawn.
    #[inline]
    pub fn is_enemy_combatant(&self, player: Player) -> bool {
        self.is_opponent_of(player) && self.role.is_combat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_roundtrip_for_placeable_roles() {
        for role in Role::PLACEABLE {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("empty"), None);
        assert_eq!(Role::from_name("queen"), None);
    }

    #[test]
    fn walls_are_owned_but_not_combatants() {
        let wall = Piece::wall(Player::B, Square::new(2, 2));
        assert!(wall.is_alive());
        assert!(wall.is_opponent_of(Player::A));
        assert!(!wall.is_enemy_combatant(Player::A));
    }

    #[test]
    fn empty_squares_belong_to_nobody() {
        let e = Piece::empty(Square::new(0, 0));
        assert!(!e.belongs_to(Player::A));
        assert!(!e.is_opponent_of(Player::A));
        assert!(!e.is_alive());
    }
}
