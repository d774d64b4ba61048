//! Player commands and their outcomes.
//!
//! The frontend translates key presses into `Command`s and hands them to
//! `GameSession::apply`, which answers with an `Outcome`. Outcomes carry
//! everything the frontend needs to react (which card, which sound), so it
//! never has to diff session state.

use serde::{Deserialize, Serialize};

use crate::audio::SoundCue;
use crate::cards::CardId;

/// A discrete player request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Draw the next monster.
    Reveal,
    /// Reshuffle and go back to the instruction screen.
    NewGame,
    /// Leave the game.
    Quit,
}

/// Result of applying a `Command`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A card was drawn and its cue queued.
    Revealed { card: CardId, cue: SoundCue },
    /// The cooldown gate rejected the reveal.
    CoolingDown { ready_in_ms: u64 },
    /// Every card has been drawn; nothing changed.
    DeckExhausted,
    /// The deck was reshuffled.
    NewGame,
    /// The session is over.
    Quit,
}

impl Outcome {
    /// Whether the outcome changed anything visible.
    #[must_use]
    pub const fn has_update(self) -> bool {
        match self {
            Self::Revealed { .. } | Self::NewGame => true,
            Self::CoolingDown { .. } | Self::DeckExhausted | Self::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_update() {
        let card = CardId::new(3).unwrap();
        let revealed = Outcome::Revealed {
            card,
            cue: SoundCue::for_card(card),
        };

        assert!(revealed.has_update());
        assert!(Outcome::NewGame.has_update());
        assert!(!Outcome::CoolingDown { ready_in_ms: 10 }.has_update());
        assert!(!Outcome::DeckExhausted.has_update());
        assert!(!Outcome::Quit.has_update());
    }
}
