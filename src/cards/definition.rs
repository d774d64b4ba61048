//! Card identifiers.
//!
//! The card set is closed: exactly `DECK_SIZE` monsters numbered from 1.
//! A `CardId` can only be built from a number in that range, so everything
//! downstream (sound lookup, image lookup) is total.

use serde::{Deserialize, Serialize};

use crate::core::{BingoError, Result};

/// Number of monsters in a full deck.
pub const DECK_SIZE: u32 = 40;

/// Identifier of one monster card, always in `1..=DECK_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CardId(u32);

impl CardId {
    /// Validate a raw card number.
    pub fn new(id: u32) -> Result<Self> {
        if (1..=DECK_SIZE).contains(&id) {
            Ok(Self(id))
        } else {
            Err(BingoError::InvalidCardIdentifier(id))
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// All card IDs in ascending order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (1..=DECK_SIZE).map(CardId)
    }

    /// Image file name for this card, relative to the asset root.
    #[must_use]
    pub fn image_file(self) -> String {
        format!("{}.jpg", self.0)
    }
}

impl TryFrom<u32> for CardId {
    type Error = BingoError;

    fn try_from(id: u32) -> Result<Self> {
        Self::new(id)
    }
}

impl From<CardId> for u32 {
    fn from(card: CardId) -> Self {
        card.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        assert_eq!(CardId::new(1).unwrap().raw(), 1);
        assert_eq!(CardId::new(40).unwrap().raw(), 40);
        assert_eq!(CardId::new(0), Err(BingoError::InvalidCardIdentifier(0)));
        assert_eq!(CardId::new(41), Err(BingoError::InvalidCardIdentifier(41)));
    }

    #[test]
    fn test_all() {
        let all: Vec<u32> = CardId::all().map(CardId::raw).collect();
        assert_eq!(all, (1..=40).collect::<Vec<_>>());
    }

    #[test]
    fn test_display_and_file() {
        let card = CardId::new(17).unwrap();
        assert_eq!(format!("{}", card), "Card(17)");
        assert_eq!(card.image_file(), "17.jpg");
    }

    #[test]
    fn test_serde_validates() {
        let card: CardId = serde_json::from_str("12").unwrap();
        assert_eq!(card.raw(), 12);
        assert_eq!(serde_json::to_string(&card).unwrap(), "12");

        assert!(serde_json::from_str::<CardId>("0").is_err());
        assert!(serde_json::from_str::<CardId>("99").is_err());
    }
}
