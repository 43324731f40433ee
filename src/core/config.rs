//! Engine configuration.
//!
//! The presentation layer builds an `EngineConfig` once, either in code with
//! the builder setters or by deserializing it, and hands it to `TurnEngine`.
//! Every field has a default, so an empty document is a valid config.

use serde::{Deserialize, Serialize};

use super::player::MAX_PLAYERS;

/// Configuration for a `TurnEngine`.
///
/// ```
/// use kings_cup::core::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(7).with_max_players(10);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.placeholder_prefix, "Player");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Largest roster accepted. Capped at 255.
    pub max_players: usize,

    /// Prefix for names generated for blank entries (`"{prefix} {ordinal}"`).
    pub placeholder_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_players: MAX_PLAYERS,
            placeholder_prefix: "Player".to_string(),
        }
    }
}

impl EngineConfig {
    /// Fix the RNG seed (reproducible shuffles).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the largest roster accepted.
    #[must_use]
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players.min(MAX_PLAYERS);
        self
    }

    /// Set the prefix used for generated player names.
    #[must_use]
    pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }
}
