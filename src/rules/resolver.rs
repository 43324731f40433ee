//! Rule resolution: turn a drawn rank into display text.
//!
//! `resolve` is pure. The only randomness, picking the other player for
//! rules with a `{player}` slot, happens in `pick_other_player` beforehand.

use serde::{Deserialize, Serialize};

use super::definition::RuleDefinition;
use crate::cards::Rank;
use crate::core::{GameRng, PlayerId, Roster};

/// King draw that finishes the communal cup.
pub const FINAL_KING: u32 = 4;

/// Sentence appended to the King rule on the final King.
pub const CUP_SENTENCE: &str =
    "This is the fourth King – you must finish the communal cup (or take a big sip of your drink).";

/// Fills a player slot when no player was chosen.
pub const UNNAMED_PLAYER: &str = "another player";

/// A rule with its text resolved for one draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRule {
    pub title: String,
    pub body: String,
    pub narrative: Option<String>,
    /// True when this draw finished the communal cup.
    pub cup_finished: bool,
}

/// Resolve `rule` for a draw.
///
/// `chosen` fills every player slot in the body. `kings_drawn` is the King
/// count including this draw.
#[must_use]
pub fn resolve(rule: &RuleDefinition, chosen: Option<&str>, kings_drawn: u32) -> ResolvedRule {
    let mut body = rule.body.render(chosen.unwrap_or(UNNAMED_PLAYER));

    let cup_finished = rule.rank == Rank::King && kings_drawn == FINAL_KING;
    if cup_finished {
        body.push(' ');
        body.push_str(CUP_SENTENCE);
    }

    ResolvedRule {
        title: rule.title.clone(),
        body,
        narrative: rule.narrative.clone(),
        cup_finished,
    }
}

/// Pick a player other than `current`, uniformly.
///
/// Returns `None` only for a roster with nobody else in it.
pub fn pick_other_player(roster: &Roster, current: PlayerId, rng: &mut GameRng) -> Option<PlayerId> {
    let others = roster.others(current);
    rng.choose(&others).copied()
}
