use std::ops::Add;

/// A (column, row) offset or location on the 8x8 board.
///
/// Row 0 is the bottom edge (player A's home row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff the coordinate lies on the 8x8 board.
    #[inline]
    pub fn on_board(self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The 8 king steps around the origin, column-major.
pub const KING_STEPS: [Coord; 8] = [
    Coord { x: -1, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: -1, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: 1, y: 0 },
    Coord { x: 1, y: 1 },
];

/// The assassin's long diagonal jumps.
pub const ASSASSIN_JUMPS: [Coord; 4] = [
    Coord { x: 3, y: 3 },
    Coord { x: 3, y: -3 },
    Coord { x: -3, y: 3 },
    Coord { x: -3, y: -3 },
];

/// Every non-zero offset with Chebyshev norm `<= radius`, column-major.
pub fn offsets_within(radius: i32) -> impl Iterator<Item = Coord> {
    (-radius..=radius).flat_map(move |x| {
        (-radius..=radius)
            .map(move |y| Coord::new(x, y))
            .filter(|c| *c != Coord::ORIGIN)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_within_one_are_the_king_steps() {
        let ring: Vec<Coord> = offsets_within(1).collect();
        assert_eq!(ring, KING_STEPS.to_vec());
    }

    #[test]
    fn offsets_within_two_cover_the_five_by_five_block() {
        let ring: Vec<Coord> = offsets_within(2).collect();
        assert_eq!(ring.len(), 24);
        assert!(ring.iter().all(|c| c.x.abs() <= 2 && c.y.abs() <= 2));
    }
}
