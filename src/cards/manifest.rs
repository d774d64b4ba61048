//! Asset manifest: every file the game needs, resolved by identifier.
//!
//! The manifest maps each `CardId` to its image, each `SoundCue` to its sound
//! and names the shared assets (background, icon, music, font). It can check
//! that all of them exist before the window opens, so a missing file is
//! reported once at startup instead of as a blank sprite mid-game.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::error;

use super::definition::CardId;
use crate::audio::SoundCue;
use crate::core::{BingoError, Result};

pub const BACKGROUND_FILE: &str = "background.jpg";
pub const ICON_FILE: &str = "jack-o-lantern.png";
pub const MUSIC_FILE: &str = "bach_toccata.mp3";
pub const FONT_FILE: &str = "Deutsch.ttf";

/// All asset file names, relative to an asset root.
///
/// ## Example
///
/// ```
/// use monster_bingo::cards::{AssetManifest, CardId};
/// use monster_bingo::audio::SoundCue;
///
/// let manifest = AssetManifest::new("assets");
///
/// let card = CardId::new(8).unwrap();
/// assert_eq!(manifest.card_image(card).unwrap(), "8.jpg");
/// assert_eq!(manifest.sound(SoundCue::Witch), "witch.wav");
/// ```
#[derive(Clone, Debug)]
pub struct AssetManifest {
    root: PathBuf,
    cards: FxHashMap<CardId, String>,
}

impl AssetManifest {
    /// Create the manifest for the full card set under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let cards = CardId::all().map(|card| (card, card.image_file())).collect();
        Self {
            root: root.into(),
            cards,
        }
    }

    /// The asset directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Image file for a card.
    ///
    /// Every valid card has an image, so an error here means the manifest
    /// and the card set disagree.
    pub fn card_image(&self, card: CardId) -> Result<&str> {
        self.cards
            .get(&card)
            .map(String::as_str)
            .ok_or(BingoError::InvalidCardIdentifier(card.raw()))
    }

    /// Sound file for a cue.
    #[must_use]
    pub fn sound(&self, cue: SoundCue) -> &'static str {
        cue.file_name()
    }

    #[must_use]
    pub fn background(&self) -> &'static str {
        BACKGROUND_FILE
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        ICON_FILE
    }

    #[must_use]
    pub fn music(&self) -> &'static str {
        MUSIC_FILE
    }

    #[must_use]
    pub fn font(&self) -> &'static str {
        FONT_FILE
    }

    /// Every file in the manifest: cards in order, then sounds, then shared assets.
    #[must_use]
    pub fn files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = CardId::all()
            .filter_map(|card| self.cards.get(&card).map(String::as_str))
            .collect();
        files.extend(SoundCue::ALL.iter().map(|cue| cue.file_name()));
        files.extend([BACKGROUND_FILE, ICON_FILE, MUSIC_FILE, FONT_FILE]);
        files
    }

    /// Full path of a file under the asset root.
    #[must_use]
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Check that every asset exists and is non-empty.
    ///
    /// All failures are logged; the first one is returned.
    pub fn verify(&self) -> Result<()> {
        let mut first_failure = None;

        for file in self.files() {
            let path = self.path(file);
            let reason = match std::fs::metadata(&path) {
                Ok(meta) if !meta.is_file() => Some("not a regular file".to_string()),
                Ok(meta) if meta.len() == 0 => Some("file is empty".to_string()),
                Ok(_) => None,
                Err(e) => Some(e.to_string()),
            };

            if let Some(reason) = reason {
                let err = BingoError::asset(path.display().to_string(), reason);
                error!("{}", err);
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    fn populate(dir: &Path, manifest: &AssetManifest) {
        for file in manifest.files() {
            std::fs::write(dir.join(file), b"data").unwrap();
        }
    }

    #[test]
    fn test_files() {
        let manifest = AssetManifest::new("assets");
        let files = manifest.files();

        assert_eq!(files.len(), DECK_SIZE as usize + 8 + 4);
        assert_eq!(files[0], "1.jpg");
        assert_eq!(files[39], "40.jpg");
        assert!(files.contains(&"monster.wav"));
        assert!(files.contains(&"Deutsch.ttf"));
    }

    #[test]
    fn test_path() {
        let manifest = AssetManifest::new("assets");
        assert_eq!(manifest.path("1.jpg"), Path::new("assets").join("1.jpg"));
    }

    #[test]
    fn test_verify_complete() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = AssetManifest::new(dir.path());
        populate(dir.path(), &manifest);

        assert_eq!(manifest.verify(), Ok(()));
    }

    #[test]
    fn test_verify_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = AssetManifest::new(dir.path());
        populate(dir.path(), &manifest);
        std::fs::remove_file(dir.path().join("ghost.wav")).unwrap();

        let err = manifest.verify().unwrap_err();
        match err {
            BingoError::AssetLoadFailure { path, .. } => assert!(path.ends_with("ghost.wav")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_verify_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = AssetManifest::new(dir.path());
        populate(dir.path(), &manifest);
        std::fs::write(dir.path().join("background.jpg"), b"").unwrap();

        assert_eq!(
            manifest.verify(),
            Err(BingoError::asset(
                dir.path().join("background.jpg").display().to_string(),
                "file is empty"
            ))
        );
    }
}
