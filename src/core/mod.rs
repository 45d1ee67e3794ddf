//! Low-level board primitives.
//!
//! - [`coord`]: signed (column, row) offsets and the step sets the atlas is built from.
//! - [`square`]: a board square packed into one byte (`column + row * 8`).
//! - [`position`]: the 64-slot board plus the two 7-slot rosters.

pub mod coord;
pub mod position;
pub mod square;
