//! Rules engine for nichess: an 8x8 two-player game where pieces carry hit points and each
//! ply is an optional move followed by an optional ability (damage, area damage, or
//! building and knocking down walls).
//!
//! The [`atlas::Atlas`] of candidate destinations is built once and shared; a
//! [`game::Game`] owns one mutable position and exposes legality checks, exact
//! make/undo, action enumeration, encoding and terminal detection.

pub mod atlas;
pub mod codec;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod pieces;
pub mod positions;
pub mod rules;
pub mod search;

pub use atlas::Atlas;
pub use config::RulesConfig;
pub use game::Game;
pub use pieces::{Piece, Player, Role};
pub use rules::{Action, UndoInfo, ABILITY_SKIP, MOVE_SKIP};
