use std::sync::Arc;

use crate::atlas::Atlas;
use crate::codec;
use crate::config::RulesConfig;
use crate::core::position::{Position, RosterSlot, ROSTER_SIZE};
use crate::core::square::{Square, NUM_COLUMNS, NUM_ROWS};
use crate::error::DecodeError;
use crate::pieces::{Piece, Player};
use crate::rules::{self, Ability, Action, Move, UndoInfo};

/// One game instance: a position, the side to move, and a handle on the shared atlas.
///
/// Cloning a game clones the position and history but shares the atlas, which is how
/// parallel searches give each worker its own instance.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) atlas: Arc<Atlas>,
    pub(crate) config: RulesConfig,
    pub(crate) position: Position,
    pub(crate) current: Player,
    pub(crate) ply: u32,
    history: Vec<UndoInfo>,
}

impl Game {
    /// The starting position with the default rules.
    pub fn new(atlas: Arc<Atlas>) -> Self {
        Self::with_config(atlas, RulesConfig::default())
    }

    pub fn with_config(atlas: Arc<Atlas>, config: RulesConfig) -> Self {
        Self {
            atlas,
            config,
            position: Position::starting(),
            current: Player::A,
            ply: 0,
            history: Vec::new(),
        }
    }

    pub fn from_encoded(atlas: Arc<Atlas>, encoded: &str) -> Result<Self, DecodeError> {
        Self::from_encoded_with_config(atlas, RulesConfig::default(), encoded)
    }

    pub fn from_encoded_with_config(
        atlas: Arc<Atlas>,
        config: RulesConfig,
        encoded: &str,
    ) -> Result<Self, DecodeError> {
        let mut game = Self::with_config(atlas, config);
        game.load(encoded)?;
        Ok(game)
    }

    /// Replace the position with a decoded one. The ply counter and history are reset.
    ///
    /// On error the game is left untouched.
    pub fn load(&mut self, encoded: &str) -> Result<(), DecodeError> {
        let (position, current) = codec::decode(encoded)?;
        self.position = position;
        self.current = current;
        self.ply = 0;
        self.history.clear();
        Ok(())
    }

    /// Back to the starting layout with player A to move. The config and atlas are kept.
    pub fn reset(&mut self) {
        self.position = Position::starting();
        self.current = Player::A;
        self.ply = 0;
        self.history.clear();
    }

    pub fn encode(&self) -> String {
        codec::encode(&self.position, self.current)
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn atlas(&self) -> &Arc<Atlas> {
        &self.atlas
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        *self.position.piece_at(sq)
    }

    pub fn piece_at_coords(&self, column: usize, row: usize) -> Option<Piece> {
        if column >= NUM_COLUMNS || row >= NUM_ROWS {
            return None;
        }
        Some(self.piece_at(Square::new(column, row)))
    }

    /// The seven roster pieces of `player`, dead ones included, in roster order.
    pub fn pieces_of(&self, player: Player) -> [Piece; ROSTER_SIZE] {
        RosterSlot::ALL.map(|slot| self.position.roster_piece(player, slot))
    }

    pub fn is_action_legal(&mut self, action: Action) -> bool {
        rules::is_action_legal(self, action)
    }

    /// Apply an action assumed to be legal. See [`rules::make_action`].
    pub fn make_action(&mut self, action: Action) -> UndoInfo {
        rules::make_action(self, action)
    }

    pub fn undo_action(&mut self, undo: &UndoInfo) {
        rules::undo_action(self, undo)
    }

    pub fn useful_legal_actions(&mut self) -> Vec<Action> {
        rules::useful_legal_actions(self)
    }

    pub fn all_legal_actions(&mut self) -> Vec<Action> {
        rules::all_legal_actions(self)
    }

    pub fn legal_moves_by_piece(&self, sq: Square) -> Vec<Move> {
        rules::legal_moves_by_piece(self, sq)
    }

    pub fn useful_legal_abilities_by_piece(&self, sq: Square) -> Vec<Ability> {
        rules::useful_legal_abilities_by_piece(self, sq)
    }

    pub fn all_legal_abilities_by_piece(&self, sq: Square) -> Vec<Ability> {
        rules::all_legal_abilities_by_piece(self, sq)
    }

    pub fn game_over(&self) -> bool {
        rules::game_over(self)
    }

    pub fn winner(&self) -> Option<Player> {
        rules::winner(self)
    }

    /// Check and apply an action, remembering it for [`Game::take_back`].
    ///
    /// Returns `false` (and changes nothing) if the action is illegal.
    pub fn play(&mut self, action: Action) -> bool {
        if !self.is_action_legal(action) {
            return false;
        }
        let undo = self.make_action(action);
        self.history.push(undo);
        true
    }

    /// Undo the most recent [`Game::play`]. Returns the action taken back.
    pub fn take_back(&mut self) -> Option<Action> {
        let undo = self.history.pop()?;
        self.undo_action(&undo);
        Some(undo.action)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
