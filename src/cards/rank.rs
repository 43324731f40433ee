//! Card ranks. Suits carry no meaning in this game.

use serde::{Deserialize, Serialize};

/// One of the 13 suit-independent card values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// All ranks in canonical deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face symbol printed on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Spelled-out rank name.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Fixed label used to look up this rank's decorative icon.
    #[must_use]
    pub const fn icon_label(self) -> &'static str {
        match self {
            Rank::Ace => "waterfall",
            Rank::Two => "you",
            Rank::Three => "me",
            Rank::Four => "floor",
            Rank::Five => "guys",
            Rank::Six => "chicks",
            Rank::Seven => "heaven",
            Rank::Eight => "mate",
            Rank::Nine => "rhyme",
            Rank::Ten => "categories",
            Rank::Jack => "make-a-rule",
            Rank::Queen => "question-master",
            Rank::King => "kings-cup",
        }
    }

    /// Parse a face symbol (`"A"`, `"10"`, `"k"`, ...).
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        let symbol = symbol.trim();
        Rank::ALL
            .into_iter()
            .find(|r| r.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
