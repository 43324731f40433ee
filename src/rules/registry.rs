//! Rule registry: the rank → rule table.
//!
//! `RuleRegistry::standard()` holds the house rules the game ships with.
//! Groups that play their own variants can build a registry from their own
//! definitions, as long as every rank ends up with exactly one rule.

use rustc_hash::FxHashMap;

use super::definition::RuleDefinition;
use crate::cards::Rank;

/// Registry of rule definitions, one per rank.
///
/// ## Example
///
/// ```
/// use kings_cup::cards::Rank;
/// use kings_cup::rules::RuleRegistry;
///
/// let rules = RuleRegistry::standard();
///
/// assert!(rules.is_complete());
/// assert_eq!(rules.get(Rank::Queen).unwrap().title, "Queen");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    rules: FxHashMap<Rank, RuleDefinition>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard King's Cup rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_rules(standard_rules())
    }

    /// Build a registry from definitions.
    ///
    /// Panics if two definitions share a rank.
    pub fn from_rules(rules: impl IntoIterator<Item = RuleDefinition>) -> Self {
        let mut registry = Self::new();
        for rule in rules {
            registry.register(rule);
        }
        registry
    }

    /// Register a rule.
    ///
    /// Panics if the rank already has one.
    pub fn register(&mut self, rule: RuleDefinition) {
        if self.rules.contains_key(&rule.rank) {
            panic!("Rule for rank {} already registered", rule.rank);
        }
        self.rules.insert(rule.rank, rule);
    }

    /// Swap in a house variant, returning the rule it displaced.
    pub fn replace(&mut self, rule: RuleDefinition) -> Option<RuleDefinition> {
        self.rules.insert(rule.rank, rule)
    }

    /// Get the rule for a rank.
    #[must_use]
    pub fn get(&self, rank: Rank) -> Option<&RuleDefinition> {
        self.rules.get(&rank)
    }

    /// Get the rule for a rank, panicking if the table has no entry.
    ///
    /// A missing entry means the table and the rank enumeration are out of
    /// sync, which no caller can recover from.
    #[must_use]
    pub fn get_unchecked(&self, rank: Rank) -> &RuleDefinition {
        match self.rules.get(&rank) {
            Some(rule) => rule,
            None => panic!("No rule registered for rank {}", rank),
        }
    }

    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.rules.contains_key(&rank)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Ranks with no rule, in canonical order.
    #[must_use]
    pub fn missing_ranks(&self) -> Vec<Rank> {
        Rank::ALL
            .into_iter()
            .filter(|rank| !self.rules.contains_key(rank))
            .collect()
    }

    /// Does every rank have a rule?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_ranks().is_empty()
    }

    /// Iterate over rules in canonical rank order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleDefinition> {
        Rank::ALL.into_iter().filter_map(move |rank| self.rules.get(&rank))
    }
}

fn standard_rules() -> Vec<RuleDefinition> {
    vec![
        RuleDefinition::new(
            Rank::Ace,
            "Ace",
            "Waterfall – Everyone starts sipping their beverage at the same time. You decide when to stop; each player may only stop once the person before them does.",
        ),
        RuleDefinition::new(
            Rank::Two,
            "Two",
            "You – Pick {player} to take a sip or perform a small challenge (e.g., do a dance move).",
        ),
        RuleDefinition::new(
            Rank::Three,
            "Three",
            "Me – You take a sip of your beverage or perform a small challenge.",
        ),
        RuleDefinition::new(
            Rank::Four,
            "Four",
            "Floor – Everyone must touch the floor. The last person to do so takes a sip or does a fun penalty.",
        ),
        RuleDefinition::new(
            Rank::Five,
            "Five",
            "Guys – All players identifying as male take a sip or do a small challenge.",
        ),
        RuleDefinition::new(
            Rank::Six,
            "Six",
            "Chicks – All players identifying as female take a sip or do a small challenge.",
        ),
        RuleDefinition::new(
            Rank::Seven,
            "Seven",
            "Heaven – Raise your hands in the air! The last person to do so takes a sip or does a fun penalty.",
        ),
        RuleDefinition::new(
            Rank::Eight,
            "Eight",
            "Mate – Choose {player}. Whenever one of you takes a sip or does a challenge, the other must do the same for the rest of the game.",
        ),
        RuleDefinition::new(
            Rank::Nine,
            "Nine",
            "Rhyme – Say a word. Going around the circle, each player must say a word that rhymes. The first to falter takes a sip or a penalty.",
        ),
        RuleDefinition::new(
            Rank::Ten,
            "Ten",
            "Categories – Pick a category (e.g., fruits, movies). Each player names something in that category. Whoever can’t think of something takes a sip or a penalty.",
        ),
        RuleDefinition::new(
            Rank::Jack,
            "Jack",
            "Make a Rule – Create a house rule to be followed for the rest of the game (e.g., speak with an accent). Anyone who breaks it takes a sip or a penalty.",
        ),
        RuleDefinition::new(
            Rank::Queen,
            "Queen",
            "Question Master – You may ask players questions at any time. Anyone who answers must take a sip or a penalty until another Queen is drawn.",
        ),
        RuleDefinition::new(
            Rank::King,
            "King",
            "King’s Cup – The first three Kings drawn must pour some of their beverage into a communal cup. The player who draws the fourth King must finish whatever is in the cup (or take a big sip of their own drink).",
        ),
    ]
}
