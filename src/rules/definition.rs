//! Rule definitions - static text attached to each rank.
//!
//! Rule bodies are stored as typed segments rather than plain strings, so
//! the engine fills the "chosen player" slot without matching on wording.
//! Templates are authored with a `{player}` marker:
//!
//! ```
//! use kings_cup::rules::RuleTemplate;
//!
//! let template = RuleTemplate::parse("Pick {player} to take a sip.");
//! assert!(template.has_player_slot());
//! assert_eq!(template.render("Bo"), "Pick Bo to take a sip.");
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Marker for the chosen-player slot in authored rule text.
pub const PLAYER_SLOT: &str = "{player}";

/// Piece of a rule body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Literal text.
    Text(String),
    /// Name of the other player picked by the engine.
    ChosenPlayer,
}

/// Rule body with typed substitution slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTemplate {
    segments: Vec<Segment>,
}

impl RuleTemplate {
    /// Parse authored text, turning every `{player}` into a slot.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(pos) = rest.find(PLAYER_SLOT) {
            if pos > 0 {
                segments.push(Segment::Text(rest[..pos].to_string()));
            }
            segments.push(Segment::ChosenPlayer);
            rest = &rest[pos + PLAYER_SLOT.len()..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Self { segments }
    }

    /// Build from segments directly.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Does the body name another player?
    #[must_use]
    pub fn has_player_slot(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::ChosenPlayer))
    }

    /// Render with every slot filled by the same `player` name.
    #[must_use]
    pub fn render(&self, player: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::ChosenPlayer => out.push_str(player),
            }
        }
        out
    }
}

impl std::fmt::Display for RuleTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(PLAYER_SLOT))
    }
}

/// Static rule for one rank.
///
/// ## Example
///
/// ```
/// use kings_cup::cards::Rank;
/// use kings_cup::rules::RuleDefinition;
///
/// let rule = RuleDefinition::new(Rank::Three, "Three", "Me – You take a sip.")
///     .with_narrative("Nobody else drinks.");
///
/// assert!(!rule.requires_other_player());
/// assert_eq!(rule.narrative.as_deref(), Some("Nobody else drinks."));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Rank this rule belongs to.
    pub rank: Rank,

    /// Display title.
    pub title: String,

    /// Body template.
    pub body: RuleTemplate,

    /// Optional secondary line shown under the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl RuleDefinition {
    /// Create a rule, parsing `{player}` markers in `body`.
    #[must_use]
    pub fn new(rank: Rank, title: impl Into<String>, body: &str) -> Self {
        Self {
            rank,
            title: title.into(),
            body: RuleTemplate::parse(body),
            narrative: None,
        }
    }

    /// Add a narrative line (builder pattern).
    #[must_use]
    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }

    /// Does resolving this rule need another player picked?
    #[must_use]
    pub fn requires_other_player(&self) -> bool {
        self.body.has_player_slot()
    }
}
