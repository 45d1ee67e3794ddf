use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pieces::{Role, TargetPolicy};

/// Rule variants fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Pawns may build walls on empty squares and knock down opposing walls.
    pub walls: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { walls: true }
    }
}

impl RulesConfig {
    /// The variant without walls: every role, pawns included, only targets opposing pieces.
    pub fn without_walls() -> Self {
        Self { walls: false }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Target policy of `role` under this variant.
    #[inline]
    pub fn target_policy(&self, role: Role) -> TargetPolicy {
        match role.spec().target {
            TargetPolicy::EnemiesOrTerrain if !self.walls => TargetPolicy::Enemies,
            policy => policy,
        }
    }
}
