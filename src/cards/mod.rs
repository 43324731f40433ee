//! Cards: ranks and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: One of 13 suit-independent values
//! - `Deck`: Shuffled stack of ranks consumed one draw at a time

pub mod rank;
pub mod deck;

pub use rank::Rank;
pub use deck::{build_ordered_deck, shuffle, Deck, DECK_SIZE, SUITS};
