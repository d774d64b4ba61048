//! Error types for the game core.

use thiserror::Error;

/// Everything that can go wrong while running a game.
///
/// Only `DeckExhausted` is expected during normal play; the session turns it
/// into a no-op reveal. The other two are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    /// A required asset is missing or unreadable.
    #[error("Failed to load asset '{path}': {reason}")]
    AssetLoadFailure { path: String, reason: String },

    /// A reveal was requested after every card was drawn.
    #[error("Deck exhausted, start a new game to reshuffle")]
    DeckExhausted,

    /// A card identifier outside the closed card set.
    #[error("Invalid card identifier: {0}")]
    InvalidCardIdentifier(u32),
}

impl BingoError {
    /// Create an asset failure for the given path.
    pub fn asset(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetLoadFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BingoError>;
