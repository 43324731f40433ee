//! The turn engine.
//!
//! `TurnEngine` owns the only session and is driven by the presentation
//! layer one call at a time:
//!
//! ```text
//! Setup --start_session--> Active --draw on empty deck--> Ended
//!   ^                        |  ^                           |
//!   |                        |  +--draw_card / end_turn     |
//!   +---------reset----------+-----------reset--------------+
//! ```
//!
//! Every operation is all-or-nothing: a call that returns an error leaves the
//! session untouched, except that a draw on an empty deck records that the
//! session has ended.

use tracing::{debug, info, warn};

use super::session::{Phase, Session};
use super::view::{turn_banner, DisplayState, DrawnCard, SessionStarted, TurnAdvanced, GAME_OVER};
use crate::assets::{AssetLookup, AssetRequest, NoAssets};
use crate::cards::{Deck, DECK_SIZE};
use crate::core::{check_count, EngineConfig, GameError, GameResult, GameRng, Roster};
use crate::rules::{resolve, RuleRegistry};

/// Game-state and turn engine.
///
/// ## Example
///
/// ```
/// use kings_cup::{EngineConfig, Phase, TurnEngine};
///
/// let mut engine = TurnEngine::new(EngineConfig::default().with_seed(42));
/// engine.start_session(["Ann", "Bo"]).unwrap();
///
/// let card = engine.draw_card().unwrap();
/// assert_eq!(card.player_name, "Ann");
/// assert_eq!(card.cards_remaining, 51);
///
/// let next = engine.end_turn().unwrap();
/// assert_eq!(next.current_name, "Bo");
///
/// engine.reset();
/// assert_eq!(engine.phase(), Phase::Setup);
/// ```
#[derive(Debug)]
pub struct TurnEngine<A: AssetLookup = NoAssets> {
    config: EngineConfig,
    rules: RuleRegistry,
    rng: GameRng,
    session: Option<Session>,
    assets: A,
}

impl TurnEngine<NoAssets> {
    /// Engine with the standard rules and no asset lookups.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_assets(config, NoAssets)
    }
}

impl<A: AssetLookup> TurnEngine<A> {
    /// Engine that sends decorative image requests to `assets`.
    pub fn with_assets(config: EngineConfig, assets: A) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "turn engine created");

        Self {
            config,
            rules: RuleRegistry::standard(),
            rng,
            session: None,
            assets,
        }
    }

    /// Use a custom rule table.
    ///
    /// Ranks without a rule panic when drawn.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleRegistry) -> Self {
        let missing = rules.missing_ranks();
        if !missing.is_empty() {
            warn!(?missing, "rule table has no entry for some ranks");
        }
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    #[must_use]
    pub fn assets(&self) -> &A {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut A {
        &mut self.assets
    }

    /// The running session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Setup, Session::phase)
    }

    /// Start a session with the given player names, in seat order.
    ///
    /// Blank names become `"Player {ordinal}"`. Replaces any running
    /// session; on error the running session is kept as it was.
    pub fn start_session<I, S>(&mut self, names: I) -> GameResult<SessionStarted>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = self.build_roster(names)?;
        let mut rng = self.rng.fork();
        let deck = Deck::shuffled(&mut rng);
        Ok(self.begin(roster, deck, rng))
    }

    /// Start a session of `count` players named `Player 1..=count`.
    pub fn start_session_with_count(&mut self, count: usize) -> GameResult<SessionStarted> {
        check_count(count, self.config.max_players).map_err(|err| {
            warn!(%err, "session start rejected");
            err
        })?;
        self.start_session(std::iter::repeat("").take(count))
    }

    /// Start a session with a prepared deck instead of a shuffled one.
    ///
    /// Used for scripted demos and tests that need a known card order.
    /// The deck may be short but never larger than a full deck.
    pub fn start_session_with_deck<I, S>(&mut self, names: I, deck: Deck) -> GameResult<SessionStarted>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if deck.len() > DECK_SIZE {
            let err = GameError::OversizedDeck { len: deck.len(), max: DECK_SIZE };
            warn!(%err, "session start rejected");
            return Err(err);
        }
        let roster = self.build_roster(names)?;
        let rng = self.rng.fork();
        Ok(self.begin(roster, deck, rng))
    }

    /// Draw the top card for the current player and resolve its rule.
    ///
    /// Does not pass the turn; call `end_turn` for that.
    pub fn draw_card(&mut self) -> GameResult<DrawnCard> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveSession)?;

        let Some(top) = session.deck().peek() else {
            if session.mark_exhausted() {
                info!("deck exhausted, session ended");
            }
            return Err(GameError::DeckExhausted);
        };

        // Look the rule up before touching the deck.
        let rule = self.rules.get_unchecked(top);

        let current = session.current();
        let chosen = if rule.requires_other_player() {
            session.pick_other_player()
        } else {
            None
        };
        let chosen_name = chosen.map(|id| session.roster().name(id).to_string());

        let rank = match session.draw() {
            Some(rank) => rank,
            None => unreachable!("deck emptied between peek and draw"),
        };
        let resolved = resolve(rule, chosen_name.as_deref(), session.kings_drawn());

        let drawn = DrawnCard {
            rank,
            player: current,
            player_name: session.current_player().name.clone(),
            chosen,
            chosen_name,
            rule: resolved,
            cards_remaining: session.cards_remaining(),
            kings_drawn: session.kings_drawn(),
            last_card: session.deck().is_empty(),
        };

        debug!(
            rank = %drawn.rank,
            player = %drawn.player_name,
            chosen = ?drawn.chosen_name,
            remaining = drawn.cards_remaining,
            kings = drawn.kings_drawn,
            "card drawn"
        );
        if drawn.rule.cup_finished {
            info!(player = %drawn.player_name, "fourth King drawn, cup finished");
        }

        self.assets.request(AssetRequest::rank_icon(rank));
        Ok(drawn)
    }

    /// Pass the turn to the next seat, wrapping to the first.
    pub fn end_turn(&mut self) -> GameResult<TurnAdvanced> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveSession)?;

        let previous = session.current();
        let current = session.advance();
        let current_name = session.roster().name(current).to_string();

        debug!(from = %previous, to = %current, "turn advanced");
        Ok(TurnAdvanced {
            previous,
            current,
            current_name,
        })
    }

    /// Drop the session and go back to setup. Legal from any phase.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            info!("session reset");
        }
    }

    /// Snapshot of what the screen should show.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        let Some(session) = &self.session else {
            return DisplayState::setup();
        };

        let phase = session.phase();
        let current_name = session.current_player().name.clone();
        let status = match phase {
            Phase::Ended => GAME_OVER.to_string(),
            _ => turn_banner(&current_name),
        };

        DisplayState {
            phase,
            players: session.roster().names(),
            current_player: Some(current_name),
            cards_remaining: session.cards_remaining(),
            kings_drawn: session.kings_drawn(),
            status: Some(status),
        }
    }

    fn build_roster<I, S>(&self, names: I) -> GameResult<Roster>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Roster::new(names, &self.config.placeholder_prefix, self.config.max_players).map_err(|err| {
            warn!(%err, "session start rejected");
            err
        })
    }

    fn begin(&mut self, roster: Roster, deck: Deck, rng: GameRng) -> SessionStarted {
        for player in roster.iter() {
            self.assets.request(AssetRequest::avatar(player));
        }

        let session = Session::new(roster, deck, rng);
        let started = SessionStarted {
            players: session.roster().names(),
            current: session.current(),
            current_name: session.current_player().name.clone(),
            cards_remaining: session.cards_remaining(),
        };

        info!(
            players = started.players.len(),
            cards = started.cards_remaining,
            "session started"
        );
        self.session = Some(session);
        started
    }
}
