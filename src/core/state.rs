//! Game session: the whole mutable state of one running game.
//!
//! ## GamePhase
//!
//! `NotStarted` shows the instructions, `InProgress` shows the gallery.
//! The first successful reveal starts the game; a new-game request goes back
//! to `NotStarted`.
//!
//! ## GameSession
//!
//! Owns the deck, revealed list, cooldown gate, phase and the queue of sound
//! cues waiting to be played. The frontend holds exactly one session and
//! feeds it commands with the current time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::action::{Command, Outcome};
use super::config::BingoConfig;
use super::cooldown::CooldownGate;
use super::error::BingoError;
use super::rng::{GameRng, GameRngState};
use crate::audio::{CueQueue, SoundCue};
use crate::cards::CardId;
use crate::deck::DeckManager;

/// Which screen the game is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Instructions are shown until the first reveal.
    #[default]
    NotStarted,
    /// At least one card has been revealed.
    InProgress,
}

impl GamePhase {
    pub const fn is_started(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// A running game.
///
/// ## Example
///
/// ```
/// use monster_bingo::core::{BingoConfig, Command, GamePhase, GameSession, Outcome};
///
/// let mut session = GameSession::new(BingoConfig::default().with_seed(1));
/// assert_eq!(session.phase(), GamePhase::NotStarted);
///
/// let outcome = session.apply(Command::Reveal, 10);
/// assert!(matches!(outcome, Outcome::Revealed { .. }));
/// assert_eq!(session.phase(), GamePhase::InProgress);
///
/// // Too soon for another one
/// let outcome = session.apply(Command::Reveal, 20);
/// assert!(matches!(outcome, Outcome::CoolingDown { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: BingoConfig,
    rng: GameRng,
    deck: DeckManager,
    cooldown: CooldownGate,
    phase: GamePhase,
    cues: CueQueue,
    games_started: u32,
    finished: bool,
}

impl GameSession {
    /// Create a session and deal the first game.
    ///
    /// Seeds from `config.seed` when set, otherwise from OS entropy.
    #[must_use]
    pub fn new(config: BingoConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Create a session with an explicit RNG.
    #[must_use]
    pub fn with_rng(config: BingoConfig, rng: GameRng) -> Self {
        let mut session = Self {
            config,
            rng,
            deck: DeckManager::new(),
            cooldown: CooldownGate::new(),
            phase: GamePhase::NotStarted,
            cues: CueQueue::new(),
            games_started: 0,
            finished: false,
        };
        session.deal();
        session
    }

    /// Apply one player command at time `now_ms`.
    pub fn apply(&mut self, command: Command, now_ms: u64) -> Outcome {
        match command {
            Command::Reveal => self.reveal(now_ms),
            Command::NewGame => self.new_game(),
            Command::Quit => self.quit(),
        }
    }

    /// Try to reveal the next card.
    ///
    /// An empty deck is checked before the cooldown, so a reveal on an
    /// exhausted deck never consumes the gate.
    pub fn reveal(&mut self, now_ms: u64) -> Outcome {
        if self.deck.is_exhausted() {
            warn!(revealed = self.deck.revealed().len(), "reveal ignored: {}", BingoError::DeckExhausted);
            return Outcome::DeckExhausted;
        }

        if !self.cooldown.try_consume(now_ms, self.config.cooldown_ms) {
            let ready_in_ms = self.cooldown.remaining_ms(now_ms);
            debug!(now_ms, ready_in_ms, "reveal rejected by cooldown");
            return Outcome::CoolingDown { ready_in_ms };
        }

        match self.deck.draw_next() {
            Ok(card) => {
                let cue = SoundCue::for_card(card);
                self.cues.push(cue);
                self.phase = GamePhase::InProgress;
                debug!(%card, ?cue, remaining = self.deck.remaining(), "revealed");
                Outcome::Revealed { card, cue }
            }
            // Unreachable after the emptiness check above.
            Err(_) => Outcome::DeckExhausted,
        }
    }

    /// Reshuffle the deck and return to the instruction screen.
    ///
    /// The cooldown deadline carries over into the new game.
    pub fn new_game(&mut self) -> Outcome {
        self.deal();
        self.phase = GamePhase::NotStarted;
        Outcome::NewGame
    }

    /// End the session.
    pub fn quit(&mut self) -> Outcome {
        info!(games = self.games_started, "quit requested");
        self.finished = true;
        Outcome::Quit
    }

    fn deal(&mut self) {
        self.games_started += 1;
        info!(game = self.games_started, seed = self.rng.seed(), "new game");
        self.deck.reset(&mut self.rng);
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &BingoConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    /// Revealed cards in reveal order.
    #[must_use]
    pub fn revealed(&self) -> &[CardId] {
        self.deck.revealed()
    }

    /// The most recently revealed card.
    #[must_use]
    pub fn latest(&self) -> Option<CardId> {
        self.deck.latest()
    }

    #[must_use]
    pub fn cooldown(&self) -> &CooldownGate {
        &self.cooldown
    }

    /// Number of games dealt so far, including the current one.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take the cues queued since the last call.
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        self.cues.drain()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
