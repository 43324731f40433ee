//! Session state and the turn engine.
//!
//! ## Key Types
//!
//! - `TurnEngine`: Owns the session, handles start/draw/end-turn/reset
//! - `Session`: Roster, deck, current seat, and King count for one play-through
//! - `DrawnCard`, `TurnAdvanced`, `SessionStarted`, `DisplayState`: results
//!   handed to the presentation layer

pub mod session;
pub mod turn;
pub mod view;

pub use session::{Phase, Session};
pub use turn::TurnEngine;
pub use view::{DisplayState, DrawnCard, SessionStarted, TurnAdvanced, GAME_OVER};
