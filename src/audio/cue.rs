//! Sound cue categories.
//!
//! Monsters come in eight kinds, numbered sequentially within each of the
//! five colour runs of the deck, so a card's kind is `id mod 8`.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Result;

/// One of the eight monster sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Witch,
    Bug,
    Cat,
    Clown,
    Cyclops,
    Ghost,
    House,
    Monster,
}

impl SoundCue {
    /// All cues, indexed by category.
    pub const ALL: [SoundCue; 8] = [
        Self::Witch,
        Self::Bug,
        Self::Cat,
        Self::Clown,
        Self::Cyclops,
        Self::Ghost,
        Self::House,
        Self::Monster,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// The cue for a card.
    #[must_use]
    pub fn for_card(card: CardId) -> Self {
        Self::ALL[card.raw() as usize % Self::COUNT]
    }

    /// Category index in `0..8`.
    #[must_use]
    pub const fn category(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Witch => "witch",
            Self::Bug => "bug",
            Self::Cat => "cat",
            Self::Clown => "clown",
            Self::Cyclops => "cyclops",
            Self::Ghost => "ghost",
            Self::House => "house",
            Self::Monster => "monster",
        }
    }

    /// Sound file, relative to the asset root.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Witch => "witch.wav",
            Self::Bug => "bug.wav",
            Self::Cat => "cat.wav",
            Self::Clown => "clown.wav",
            Self::Cyclops => "cyclops.wav",
            Self::Ghost => "ghost.wav",
            Self::House => "house.wav",
            Self::Monster => "monster.wav",
        }
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a raw card number to its cue.
///
/// Fails with `InvalidCardIdentifier` outside `1..=DECK_SIZE`.
///
/// ```
/// use monster_bingo::audio::{resolve, SoundCue};
///
/// assert_eq!(resolve(8).unwrap(), SoundCue::Witch);
/// assert_eq!(resolve(16).unwrap(), SoundCue::Witch);
/// assert_eq!(resolve(15).unwrap(), SoundCue::Monster);
/// assert!(resolve(41).is_err());
/// ```
pub fn resolve(card_id: u32) -> Result<SoundCue> {
    CardId::new(card_id).map(SoundCue::for_card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;
    use crate::core::BingoError;

    #[test]
    fn test_category_order() {
        for (index, cue) in SoundCue::ALL.iter().enumerate() {
            assert_eq!(cue.category(), index);
        }
    }

    #[test]
    fn test_first_run() {
        let expected = [
            SoundCue::Bug,
            SoundCue::Cat,
            SoundCue::Clown,
            SoundCue::Cyclops,
            SoundCue::Ghost,
            SoundCue::House,
            SoundCue::Monster,
            SoundCue::Witch,
        ];
        for (id, cue) in (1..=8).zip(expected) {
            assert_eq!(resolve(id).unwrap(), cue, "card {id}");
        }
    }

    #[test]
    fn test_same_category_same_cue() {
        assert_eq!(resolve(8).unwrap(), resolve(16).unwrap());
        assert_eq!(resolve(1).unwrap(), resolve(33).unwrap());
        assert_eq!(resolve(7).unwrap(), resolve(39).unwrap());
    }

    #[test]
    fn test_total_over_deck() {
        for id in 1..=DECK_SIZE {
            let cue = resolve(id).unwrap();
            assert_eq!(cue.category(), id as usize % 8);
            assert_eq!(resolve(id).unwrap(), cue);
        }
    }

    #[test]
    fn test_invalid_ids() {
        assert_eq!(resolve(0), Err(BingoError::InvalidCardIdentifier(0)));
        assert_eq!(resolve(41), Err(BingoError::InvalidCardIdentifier(41)));
    }

    #[test]
    fn test_each_cue_appears_five_times() {
        for cue in SoundCue::ALL {
            let count = (1..=DECK_SIZE).filter(|&id| resolve(id).unwrap() == cue).count();
            assert_eq!(count, 5, "{cue}");
        }
    }

    #[test]
    fn test_file_names() {
        for cue in SoundCue::ALL {
            assert_eq!(cue.file_name(), format!("{}.wav", cue.name()));
        }
    }
}
