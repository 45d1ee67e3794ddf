//! Tree walks over the action engine (node counting).

pub mod perft;

pub use perft::{perft, perft_divide, perft_parallel};
