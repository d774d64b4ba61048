//! Core game types: session state machine, commands, cooldown, RNG,
//! configuration and errors.
//!
//! Nothing in here knows about windows, audio devices or wall-clock time.
//! The frontend passes the current time in milliseconds to every call that
//! needs it.

pub mod action;
pub mod config;
pub mod cooldown;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Command, Outcome};
pub use config::BingoConfig;
pub use cooldown::{CooldownGate, DEFAULT_COOLDOWN_MS};
pub use error::{BingoError, Result};
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameSession};
