//! Preloaded sound table keyed by cue.
//!
//! Generic over the handle type so the frontend can store asset handles and
//! tests can store plain strings.

use super::cue::SoundCue;

/// One preloaded handle per cue.
///
/// ```
/// use monster_bingo::audio::{CueTable, SoundCue};
///
/// let table = CueTable::from_fn(|cue| cue.file_name().to_uppercase());
/// assert_eq!(table.get(SoundCue::Ghost), "GHOST.WAV");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CueTable<H> {
    handles: [H; SoundCue::COUNT],
}

impl<H> CueTable<H> {
    /// Build the table by loading each cue once.
    pub fn from_fn(mut load: impl FnMut(SoundCue) -> H) -> Self {
        Self {
            handles: SoundCue::ALL.map(&mut load),
        }
    }

    /// The handle for a cue.
    #[must_use]
    pub fn get(&self, cue: SoundCue) -> &H {
        &self.handles[cue.category()]
    }

    /// Iterate over `(cue, handle)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (SoundCue, &H)> {
        SoundCue::ALL.into_iter().zip(self.handles.iter())
    }
}
