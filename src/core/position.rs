use crate::core::square::{Square, NUM_SQUARES};
use crate::pieces::{Piece, Player, Role};

pub const ROSTER_SIZE: usize = 7;

/// Named roster slots, in roster order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RosterSlot {
    King,
    Assassin,
    Mage,
    Warrior,
    Pawn1,
    Pawn2,
    Pawn3,
}

impl RosterSlot {
    pub const ALL: [RosterSlot; ROSTER_SIZE] = [
        RosterSlot::King,
        RosterSlot::Assassin,
        RosterSlot::Mage,
        RosterSlot::Warrior,
        RosterSlot::Pawn1,
        RosterSlot::Pawn2,
        RosterSlot::Pawn3,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn role(self) -> Role {
        match self {
            RosterSlot::King => Role::King,
            RosterSlot::Assassin => Role::Assassin,
            RosterSlot::Mage => Role::Mage,
            RosterSlot::Warrior => Role::Warrior,
            RosterSlot::Pawn1 | RosterSlot::Pawn2 | RosterSlot::Pawn3 => Role::Pawn,
        }
    }

    /// Slots that can hold a piece of `role`, in fill order.
    pub fn for_role(role: Role) -> &'static [RosterSlot] {
        match role {
            Role::King => &[RosterSlot::King],
            Role::Assassin => &[RosterSlot::Assassin],
            Role::Mage => &[RosterSlot::Mage],
            Role::Warrior => &[RosterSlot::Warrior],
            Role::Pawn => &[RosterSlot::Pawn1, RosterSlot::Pawn2, RosterSlot::Pawn3],
            Role::Wall | Role::Empty => &[],
        }
    }
}

/// State of one roster slot.
///
/// A living piece is owned by the board, so the roster only remembers where it stands.
/// A dead piece has no board slot and the roster keeps its last known value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RosterEntry {
    Alive(Square),
    Dead(Piece),
}

/// The mutable position: 64 board slots plus one 7-slot roster per player.
///
/// Every board slot holds a value (vacant squares hold [`Piece::empty`]) and
/// `board[i].square == i` at all times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: [Piece; NUM_SQUARES],
    rosters: [[RosterEntry; ROSTER_SIZE]; 2],
}

impl Position {
    /// An empty board with every roster slot holding a dead placeholder.
    pub fn empty() -> Position {
        let mut board = [Piece::empty(Square::new(0, 0)); NUM_SQUARES];
        for sq in Square::all() {
            board[sq.index()] = Piece::empty(sq);
        }
        let roster_of = |player: Player| {
            RosterSlot::ALL.map(|slot| {
                RosterEntry::Dead(Piece {
                    role: slot.role(),
                    owner: Some(player),
                    hp: 0,
                    square: Square::new(0, 0),
                })
            })
        };
        Position {
            board,
            rosters: [roster_of(Player::A), roster_of(Player::B)],
        }
    }

    /// The fixed opening layout.
    pub fn starting() -> Position {
        const LAYOUT: [(Role, usize, usize); 7] = [
            (Role::King, 0, 0),
            (Role::Assassin, 7, 0),
            (Role::Pawn, 0, 1),
            (Role::Pawn, 1, 1),
            (Role::Warrior, 3, 1),
            (Role::Mage, 4, 1),
            (Role::Pawn, 5, 1),
        ];

        let mut pos = Position::empty();
        for (role, column, row) in LAYOUT {
            pos.place(Piece::new(role, Player::A, Square::new(column, row)));
        }
        // B mirrors A through the centre; pawns still fill slots in ascending square order.
        for (role, column, row) in LAYOUT.iter().rev() {
            let sq = Square::new(7 - column, 7 - row);
            pos.place(Piece::new(*role, Player::B, sq));
        }
        pos
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> &Piece {
        &self.board[sq.index()]
    }

    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        self.board[sq.index()].is_empty()
    }

    pub fn board(&self) -> &[Piece; NUM_SQUARES] {
        &self.board
    }

    #[inline]
    pub fn roster_entry(&self, player: Player, slot: RosterSlot) -> RosterEntry {
        self.rosters[player.index()][slot.index()]
    }

    /// The piece a roster slot refers to: the board value while alive, the stored value once dead.
    pub fn roster_piece(&self, player: Player, slot: RosterSlot) -> Piece {
        match self.roster_entry(player, slot) {
            RosterEntry::Alive(sq) => self.board[sq.index()],
            RosterEntry::Dead(piece) => piece,
        }
    }

    #[inline]
    pub fn king(&self, player: Player) -> Piece {
        self.roster_piece(player, RosterSlot::King)
    }

    /// Squares of the living roster pieces of `player`, in roster order.
    pub fn living_squares(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        self.rosters[player.index()].iter().filter_map(|e| match e {
            RosterEntry::Alive(sq) => Some(*sq),
            RosterEntry::Dead(_) => None,
        })
    }

    /// First slot for `role` that is not holding a living piece.
    pub fn free_slot(&self, player: Player, role: Role) -> Option<RosterSlot> {
        RosterSlot::for_role(role)
            .iter()
            .copied()
            .find(|slot| matches!(self.roster_entry(player, *slot), RosterEntry::Dead(_)))
    }

    /// Roster slot of the living piece standing on `sq`, if it is a combat piece.
    pub fn slot_of(&self, sq: Square) -> Option<RosterSlot> {
        let piece = self.piece_at(sq);
        let owner = piece.owner?;
        if !piece.role.is_combat() {
            return None;
        }
        RosterSlot::ALL
            .into_iter()
            .find(|slot| self.rosters[owner.index()][slot.index()] == RosterEntry::Alive(sq))
    }

    /// Put a piece on its square. Combat pieces also take the first free roster slot.
    ///
    /// Panics if the roster has no free slot for the piece; use [`Position::free_slot`]
    /// first when the input is untrusted.
    pub fn place(&mut self, piece: Piece) {
        debug_assert!(piece.is_alive());
        if let (Some(owner), true) = (piece.owner, piece.role.is_combat()) {
            let slot = self
                .free_slot(owner, piece.role)
                .unwrap_or_else(|| panic!("no free roster slot for {:?} {:?}", owner, piece.role));
            self.rosters[owner.index()][slot.index()] = RosterEntry::Alive(piece.square);
        }
        self.board[piece.square.index()] = piece;
    }

    /// Swap the contents of `src` and `dst`, keeping the mover's roster pointer in step.
    ///
    /// `dst` is expected to be vacant; the inverse is `move_piece(dst, src)`.
    pub fn move_piece(&mut self, src: Square, dst: Square) {
        debug_assert!(self.is_vacant(dst));
        let slot = self.slot_of(src);
        self.board.swap(src.index(), dst.index());
        self.board[src.index()].square = src;
        self.board[dst.index()].square = dst;
        if let (Some(slot), Some(owner)) = (slot, self.board[dst.index()].owner) {
            self.rosters[owner.index()][slot.index()] = RosterEntry::Alive(dst);
        }
    }

    /// Subtract `amount` hit points from the piece on `sq`.
    ///
    /// A piece that drops to zero or below leaves the board: its square becomes empty and,
    /// for combat pieces, `slot` takes over the dead value. Returns whether it died.
    pub fn damage(&mut self, sq: Square, amount: i32, slot: Option<RosterSlot>) -> bool {
        let piece = &mut self.board[sq.index()];
        piece.hp -= amount;
        if piece.is_alive() {
            return false;
        }
        let dead = *piece;
        *piece = Piece::empty(sq);
        if let (Some(slot), Some(owner)) = (slot, dead.owner) {
            self.rosters[owner.index()][slot.index()] = RosterEntry::Dead(dead);
        }
        true
    }

    /// Write a snapshot back to its square, reattaching it to `slot` when given.
    pub fn restore(&mut self, piece: Piece, slot: Option<RosterSlot>) {
        if let (Some(slot), Some(owner)) = (slot, piece.owner) {
            self.rosters[owner.index()][slot.index()] = RosterEntry::Alive(piece.square);
        }
        self.board[piece.square.index()] = piece;
    }

    /// Overwrite a square without touching the rosters (walls and empty squares).
    pub fn set_terrain(&mut self, piece: Piece) {
        debug_assert!(!piece.role.is_combat());
        self.board[piece.square.index()] = piece;
    }

    /// Check that every board slot is tagged with its own square and that living roster
    /// entries match the board.
    pub fn is_consistent(&self) -> bool {
        let board_ok = Square::all().all(|sq| self.board[sq.index()].square == sq);
        let rosters_ok = Player::ALL.into_iter().all(|player| {
            RosterSlot::ALL.into_iter().all(|slot| match self.roster_entry(player, slot) {
                RosterEntry::Alive(sq) => {
                    let p = self.piece_at(sq);
                    p.role == slot.role() && p.belongs_to(player) && p.is_alive()
                }
                RosterEntry::Dead(p) => !p.is_alive() && p.role == slot.role(),
            })
        });
        board_ok && rosters_ok
    }
}
