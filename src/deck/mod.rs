//! Deck of monster cards.
//!
//! ## Key Types
//!
//! - `DeckManager`: Shuffled draw pile and the revealed list

pub mod manager;

pub use manager::{DeckManager, FULL_DECK};
