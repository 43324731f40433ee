//! Rules: per-rank definitions, the rule table, and resolution.
//!
//! The engine looks up the drawn rank in a `RuleRegistry`, picks another
//! player when the rule has a player slot, and calls `resolve` to produce
//! the text handed to the presentation layer.

pub mod definition;
pub mod registry;
pub mod resolver;

pub use definition::{RuleDefinition, RuleTemplate, Segment, PLAYER_SLOT};
pub use registry::RuleRegistry;
pub use resolver::{pick_other_player, resolve, ResolvedRule, CUP_SENTENCE, FINAL_KING};
