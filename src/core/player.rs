//! Player identification and the session roster.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting up to 255 players.
//!
//! ## Roster
//!
//! Ordered, fixed-size list of players for one session. Built once at
//! session start and never resized afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::error::{GameError, GameResult};

/// Fewest players a session accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a roster can hold (the `PlayerId` range).
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Player seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based seat number, as shown to players.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.0 as usize + 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use kings_cup::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    /// Counts above `MAX_PLAYERS` are clamped.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.ordinal())
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Ordered roster of players for one session.
///
/// ## Example
///
/// ```
/// use kings_cup::core::{PlayerId, Roster};
///
/// let roster = Roster::new(["Ann", "  ", "Cy"], "Player", 8).unwrap();
///
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster[PlayerId::new(1)].name, "Player 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from display names, in order.
    ///
    /// Blank or whitespace-only names become `"{prefix} {ordinal}"`; other
    /// names are kept exactly as given. Fails with `InvalidPlayerCount`
    /// outside `MIN_PLAYERS..=max_players`. At most `max_players + 1` names
    /// are read, so an oversized iterator reports `count` as that bound.
    pub fn new<I, S>(names: I, prefix: &str, max_players: usize) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max = max_players.min(MAX_PLAYERS);
        let names: Vec<S> = names.into_iter().take(max + 1).collect();

        if names.len() < MIN_PLAYERS || names.len() > max {
            return Err(GameError::InvalidPlayerCount {
                count: names.len(),
                min: MIN_PLAYERS,
                max,
            });
        }

        let players = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = PlayerId(i as u8);
                let raw: &str = name.as_ref();
                let name = if raw.trim().is_empty() {
                    placeholder_name(prefix, id)
                } else {
                    raw.to_string()
                };
                Player { id, name }
            })
            .collect();

        Ok(Self { players })
    }

    /// Build a roster of `count` generated names (`Player 1`, `Player 2`, ...).
    pub fn generated(count: usize, prefix: &str, max_players: usize) -> GameResult<Self> {
        check_count(count, max_players)?;
        Self::new(std::iter::repeat("").take(count), prefix, max_players)
    }

    /// Get the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false for a validated roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by seat.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Display name for a seat.
    #[must_use]
    pub fn name(&self, id: PlayerId) -> &str {
        &self[id].name
    }

    /// Seat after `id`, wrapping from the last player to the first.
    #[must_use]
    pub fn next(&self, id: PlayerId) -> PlayerId {
        PlayerId(((id.index() + 1) % self.players.len()) as u8)
    }

    /// Every seat except `current`, in roster order.
    #[must_use]
    pub fn others(&self, current: PlayerId) -> SmallVec<[PlayerId; 8]> {
        self.players
            .iter()
            .map(|p| p.id)
            .filter(|&id| id != current)
            .collect()
    }

    /// Iterate over players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Display names in seat order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

/// Reject a roster size outside `MIN_PLAYERS..=max_players`.
pub fn check_count(count: usize, max_players: usize) -> GameResult<()> {
    let max = max_players.min(MAX_PLAYERS);
    if (MIN_PLAYERS..=max).contains(&count) {
        Ok(())
    } else {
        Err(GameError::InvalidPlayerCount { count, min: MIN_PLAYERS, max })
    }
}

fn placeholder_name(prefix: &str, id: PlayerId) -> String {
    format!("{} {}", prefix, id.ordinal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.ordinal(), 2);
        assert_eq!(format!("{}", p0), "Seat 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_roster_keeps_order() {
        let roster = Roster::new(["Ann", "Bo", "Cy"], "Player", MAX_PLAYERS).unwrap();

        assert_eq!(roster.names(), vec!["Ann", "Bo", "Cy"]);
        assert_eq!(roster[PlayerId::new(2)].id, PlayerId::new(2));
    }

    #[test]
    fn test_roster_blank_names_get_placeholders() {
        let roster = Roster::new(["", "Bo", " \t"], "Player", MAX_PLAYERS).unwrap();

        assert_eq!(roster.names(), vec!["Player 1", "Bo", "Player 3"]);
    }

    #[test]
    fn test_roster_custom_prefix() {
        let roster = Roster::generated(2, "Guest", MAX_PLAYERS).unwrap();
        assert_eq!(roster.names(), vec!["Guest 1", "Guest 2"]);
    }

    #[test]
    fn test_roster_too_few_players() {
        let err = Roster::new(["Solo"], "Player", MAX_PLAYERS).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidPlayerCount { count: 1, min: 2, max: MAX_PLAYERS }
        );

        let empty: [&str; 0] = [];
        assert!(Roster::new(empty, "Player", MAX_PLAYERS).is_err());
    }

    #[test]
    fn test_roster_too_many_players() {
        let err = Roster::generated(5, "Player", 4).unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerCount { count: 5, min: 2, max: 4 });
    }

    #[test]
    fn test_roster_huge_counts_rejected_without_allocating() {
        let err = Roster::generated(usize::MAX, "Player", MAX_PLAYERS).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidPlayerCount { count: usize::MAX, min: 2, max: MAX_PLAYERS }
        );

        // Unbounded iterators stop being read past the cap
        let err = Roster::new(std::iter::repeat("x"), "Player", 4).unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerCount { count: 5, min: 2, max: 4 });
    }

    #[test]
    fn test_roster_keeps_names_as_given() {
        let roster = Roster::new(["  Ann ", "Bo\t", "   "], "Player", MAX_PLAYERS).unwrap();
        assert_eq!(roster.names(), vec!["  Ann ", "Bo\t", "Player 3"]);
    }

    #[test]
    fn test_player_id_all_clamps() {
        assert_eq!(PlayerId::all(256).count(), MAX_PLAYERS);
        assert_eq!(PlayerId::all(usize::MAX).last(), Some(PlayerId::new(254)));
    }

    #[test]
    fn test_roster_next_wraps() {
        let roster = Roster::generated(3, "Player", MAX_PLAYERS).unwrap();

        assert_eq!(roster.next(PlayerId::new(0)), PlayerId::new(1));
        assert_eq!(roster.next(PlayerId::new(2)), PlayerId::new(0));
    }

    #[test]
    fn test_roster_others_excludes_current() {
        let roster = Roster::generated(4, "Player", MAX_PLAYERS).unwrap();
        let others = roster.others(PlayerId::new(1));

        assert_eq!(others.as_slice(), &[PlayerId::new(0), PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_roster_serialization() {
        let roster = Roster::new(["Ann", "Bo"], "Player", MAX_PLAYERS).unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }
}
