//! Session state: everything one play-through owns.
//!
//! A `Session` is created by `TurnEngine::start_session` and dropped whole on
//! reset or restart, so nothing carries over between play-throughs.

use serde::{Deserialize, Serialize};

use crate::cards::{Deck, Rank};
use crate::core::{GameRng, Player, PlayerId, Roster};
use crate::rules::pick_other_player;

/// Where the engine is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No session; waiting for players.
    Setup,
    /// Cards left to draw.
    Active,
    /// A draw found the deck empty. Still accepts `end_turn` and `reset`.
    Ended,
}

/// State of one session.
///
/// Invariants:
/// - `current` is always a valid seat in `roster`
/// - `kings_drawn` only grows, and only on King draws
/// - the deck only shrinks, one card per draw
#[derive(Clone, Debug)]
pub struct Session {
    roster: Roster,
    deck: Deck,
    current: PlayerId,
    kings_drawn: u32,
    exhausted: bool,
    rng: GameRng,
}

impl Session {
    /// Fresh session: first seat to play, no Kings drawn.
    #[must_use]
    pub fn new(roster: Roster, deck: Deck, rng: GameRng) -> Self {
        Self {
            roster,
            deck,
            current: PlayerId::new(0),
            kings_drawn: 0,
            exhausted: false,
            rng,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.roster[self.current]
    }

    #[must_use]
    pub fn kings_drawn(&self) -> u32 {
        self.kings_drawn
    }

    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.exhausted {
            Phase::Ended
        } else {
            Phase::Active
        }
    }

    /// Pick someone other than the current player, uniformly.
    pub(crate) fn pick_other_player(&mut self) -> Option<PlayerId> {
        pick_other_player(&self.roster, self.current, &mut self.rng)
    }

    /// Pop the top card, counting Kings.
    pub(crate) fn draw(&mut self) -> Option<Rank> {
        let rank = self.deck.draw()?;
        if rank == Rank::King {
            self.kings_drawn += 1;
        }
        Some(rank)
    }

    /// Mark the deck as run out. Returns true on the first call.
    pub(crate) fn mark_exhausted(&mut self) -> bool {
        !std::mem::replace(&mut self.exhausted, true)
    }

    /// Pass the turn to the next seat, wrapping around.
    pub(crate) fn advance(&mut self) -> PlayerId {
        self.current = self.roster.next(self.current);
        self.current
    }
}
