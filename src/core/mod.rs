//! Core engine types: players, roster, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{check_count, Player, PlayerId, Roster, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::{GameError, GameResult};
