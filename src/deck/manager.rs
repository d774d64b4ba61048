//! Deck manager: shuffled draw pile and revealed list.
//!
//! The draw pile is an ordered zone whose top is the last element, so
//! drawing is a `pop`. Every drawn card moves to the revealed list, which
//! keeps reveal order for the gallery.

use crate::cards::{CardId, DECK_SIZE};
use crate::core::{BingoError, GameRng, Result};

/// Full deck size as a `usize`, for length checks.
pub const FULL_DECK: usize = DECK_SIZE as usize;

/// Shuffled deck plus the cards revealed from it.
///
/// ## Usage
///
/// ```
/// use monster_bingo::core::GameRng;
/// use monster_bingo::deck::DeckManager;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = DeckManager::new();
/// deck.reset(&mut rng);
///
/// let card = deck.draw_next().unwrap();
/// assert_eq!(deck.revealed(), &[card]);
/// assert_eq!(deck.remaining(), 39);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckManager {
    /// Draw pile, index 0 is bottom, last index is top.
    deck: Vec<CardId>,

    /// Drawn cards in reveal order.
    revealed: Vec<CardId>,
}

impl DeckManager {
    /// Create an empty manager. Call `reset` to deal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refill with every card, shuffle, and clear the revealed list.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.deck.clear();
        self.deck.extend(CardId::all());
        rng.shuffle(&mut self.deck);
        self.revealed.clear();
    }

    /// Remove the top card and append it to the revealed list.
    ///
    /// Returns `DeckExhausted` and changes nothing when the pile is empty.
    pub fn draw_next(&mut self) -> Result<CardId> {
        let card = self.deck.pop().ok_or(BingoError::DeckExhausted)?;
        self.revealed.push(card);
        Ok(card)
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    /// The draw pile in order (bottom to top).
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    /// Revealed cards in reveal order.
    #[must_use]
    pub fn revealed(&self) -> &[CardId] {
        &self.revealed
    }

    /// The most recently revealed card.
    #[must_use]
    pub fn latest(&self) -> Option<CardId> {
        self.revealed.last().copied()
    }
}
