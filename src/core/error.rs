//! Recoverable engine errors.
//!
//! A rule table without an entry for a drawn rank is not represented here:
//! it is a data defect and panics at lookup.

use thiserror::Error;

/// Errors returned to the caller of an engine operation.
///
/// No operation mutates session state when it returns one of these,
/// except `DeckExhausted`, which moves the session to `Ended`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Please enter a valid number of players (got {count}, need {min} to {max}).")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("A prepared deck holds at most {max} cards (got {len}).")]
    OversizedDeck { len: usize, max: usize },

    #[error("No more cards! The game is over.")]
    DeckExhausted,

    #[error("No session in progress; start a game first.")]
    NoActiveSession,
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(GameError::DeckExhausted.to_string(), "No more cards! The game is over.");

        let err = GameError::InvalidPlayerCount { count: 1, min: 2, max: 255 };
        assert_eq!(
            err.to_string(),
            "Please enter a valid number of players (got 1, need 2 to 255)."
        );

        let err = GameError::OversizedDeck { len: 60, max: 52 };
        assert_eq!(err.to_string(), "A prepared deck holds at most 52 cards (got 60).");
    }
}
