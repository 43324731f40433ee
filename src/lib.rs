//! # kings-cup
//!
//! Turn engine for King's Cup, a party card game: a 52-card deck is
//! shuffled, players take turns drawing, and each rank triggers a fixed
//! rule read out to the group.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All mutable game state lives in one `Session`
//!    owned by a `TurnEngine`. Independent engines never share anything.
//!
//! 2. **No Rendering**: Operations return structured results. Drawing
//!    cards, avatars and screens is the presentation layer's job.
//!
//! 3. **Typed Rule Text**: Rule bodies carry typed player slots instead of
//!    phrases that get string-replaced.
//!
//! ## Modules
//!
//! - `core`: Players, roster, RNG, configuration, errors
//! - `cards`: Ranks and the deck
//! - `rules`: Rule definitions, the rule registry, rule resolution
//! - `engine`: Session state and the turn engine
//! - `assets`: Decorative avatar and icon lookups

pub mod core;
pub mod cards;
pub mod rules;
pub mod engine;
pub mod assets;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameError, GameResult, GameRng,
    Player, PlayerId, Roster, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::cards::{build_ordered_deck, shuffle, Deck, Rank, DECK_SIZE};

pub use crate::rules::{
    RuleDefinition, RuleRegistry, RuleTemplate, Segment,
    ResolvedRule, CUP_SENTENCE, FINAL_KING,
};

pub use crate::engine::{
    Phase, Session, TurnEngine,
    DisplayState, DrawnCard, SessionStarted, TurnAdvanced,
};

pub use crate::assets::{AssetLookup, AssetRequest, NoAssets, RecordingAssets};
