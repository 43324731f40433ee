//! Deck construction and shuffling.
//!
//! A deck is a stack of ranks: the last element is the top card and
//! `draw` pops it.

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use crate::core::GameRng;

/// Number of suits in a standard deck. Suits are discarded, only the copies count.
pub const SUITS: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = SUITS * Rank::ALL.len();

/// The canonical unshuffled deck: each suit appends all 13 ranks in order.
#[must_use]
pub fn build_ordered_deck() -> Vec<Rank> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for _suit in 0..SUITS {
        cards.extend_from_slice(&Rank::ALL);
    }
    cards
}

/// Shuffle `cards` in place and hand the same slice back.
pub fn shuffle<'a>(cards: &'a mut [Rank], rng: &mut GameRng) -> &'a mut [Rank] {
    rng.shuffle(cards);
    cards
}

/// The session's consumable stack of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Rank>,
}

impl Deck {
    /// Full 52-card deck in canonical order.
    #[must_use]
    pub fn ordered() -> Self {
        Self { cards: build_ordered_deck() }
    }

    /// Full 52-card deck, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        shuffle(&mut deck.cards, rng);
        deck
    }

    /// Deck from raw cards, bottom first (the last card is drawn first).
    #[must_use]
    pub fn from_cards(cards: Vec<Rank>) -> Self {
        Self { cards }
    }

    /// Deck that deals `cards` in the given order.
    ///
    /// ```
    /// use kings_cup::cards::{Deck, Rank};
    ///
    /// let mut deck = Deck::from_draw_order([Rank::King, Rank::Two]);
    /// assert_eq!(deck.draw(), Some(Rank::King));
    /// assert_eq!(deck.draw(), Some(Rank::Two));
    /// assert_eq!(deck.draw(), None);
    /// ```
    #[must_use]
    pub fn from_draw_order(cards: impl IntoIterator<Item = Rank>) -> Self {
        let mut cards: Vec<Rank> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Pop the top card.
    pub fn draw(&mut self) -> Option<Rank> {
        self.cards.pop()
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<Rank> {
        self.cards.last().copied()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining copies of `rank`.
    #[must_use]
    pub fn count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|&&r| r == rank).count()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn as_slice(&self) -> &[Rank] {
        &self.cards
    }
}
