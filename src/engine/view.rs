//! Results handed back to the presentation layer.
//!
//! Plain structured text only; the engine never formats markup.

use serde::{Deserialize, Serialize};

use super::session::Phase;
use crate::cards::Rank;
use crate::core::PlayerId;
use crate::rules::ResolvedRule;

/// Status line shown once the deck has run out.
pub const GAME_OVER: &str = "No more cards! The game is over.";

/// A session has started.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStarted {
    pub players: Vec<String>,
    pub current: PlayerId,
    pub current_name: String,
    pub cards_remaining: usize,
}

/// A card was drawn and its rule resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub rank: Rank,
    /// Seat that drew the card.
    pub player: PlayerId,
    pub player_name: String,
    /// Other player named by the rule, if it names one.
    pub chosen: Option<PlayerId>,
    pub chosen_name: Option<String>,
    pub rule: ResolvedRule,
    pub cards_remaining: usize,
    pub kings_drawn: u32,
    /// This draw emptied the deck.
    pub last_card: bool,
}

impl DrawnCard {
    /// `"{title}: {body}"`, the line shown under the card.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{}: {}", self.rule.title, self.rule.body)
    }
}

impl std::fmt::Display for DrawnCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.rank, self.headline())?;
        if let Some(narrative) = &self.rule.narrative {
            write!(f, "\n{}", narrative)?;
        }
        Ok(())
    }
}

/// The turn moved to the next seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAdvanced {
    pub previous: PlayerId,
    pub current: PlayerId,
    pub current_name: String,
}

impl TurnAdvanced {
    /// `"{name}'s turn"`.
    #[must_use]
    pub fn banner(&self) -> String {
        turn_banner(&self.current_name)
    }
}

/// Snapshot for rendering the current screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub phase: Phase,
    pub players: Vec<String>,
    pub current_player: Option<String>,
    pub cards_remaining: usize,
    pub kings_drawn: u32,
    pub status: Option<String>,
}

impl DisplayState {
    /// State shown before any session exists.
    #[must_use]
    pub fn setup() -> Self {
        Self {
            phase: Phase::Setup,
            players: Vec::new(),
            current_player: None,
            cards_remaining: 0,
            kings_drawn: 0,
            status: None,
        }
    }
}

pub(crate) fn turn_banner(name: &str) -> String {
    format!("{}'s turn", name)
}
