//! # monster-bingo
//!
//! A single-screen Halloween party game. Each press of the reveal key draws
//! the next monster from a shuffled deck, plays the monster's sound and adds
//! it to an on-screen gallery. Reveals are gated by a cooldown so the host
//! can't rush through the deck.
//!
//! ## Design Principles
//!
//! 1. **Window-Free Core**: All game rules live in plain structs
//!    (`GameSession`, `DeckManager`, `CooldownGate`) that take time as an
//!    argument. Nothing in the core needs a window, an audio device or a clock.
//!
//! 2. **Explicit Session**: Deck, revealed list, cooldown and phase are owned by
//!    one `GameSession` value instead of process-wide globals.
//!
//! 3. **Preloaded Cues**: Sounds are resolved through a `CueTable` built once at
//!    startup, never loaded on the input path.
//!
//! ## Modules
//!
//! - `core`: Session state machine, cooldown gate, commands, RNG, config, errors
//! - `cards`: Card identifiers and the asset manifest
//! - `deck`: Shuffled deck and revealed list
//! - `audio`: Sound cue categories, preloaded cue table, per-frame cue queue
//! - `layout`: Screen geometry for the gallery and instruction text
//! - `app`: Bevy frontend (behind the `app` feature)

pub mod core;
pub mod cards;
pub mod deck;
pub mod audio;
pub mod layout;

#[cfg(feature = "app")]
pub mod app;

// Re-export commonly used types
pub use crate::core::{
    BingoConfig, BingoError, Result,
    Command, Outcome,
    CooldownGate, DEFAULT_COOLDOWN_MS,
    GamePhase, GameSession,
    GameRng, GameRngState,
};

pub use crate::cards::{AssetManifest, CardId, DECK_SIZE};

pub use crate::deck::DeckManager;

pub use crate::audio::{resolve, CueQueue, CueTable, SoundCue};

pub use crate::layout::{GalleryLayout, GridCell, ScreenRect, TextBlock, TextColor, WindowSize};
