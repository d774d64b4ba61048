//! Asset handles, loaded once at startup.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;
use rustc_hash::FxHashMap;

use super::Manifest;
use crate::audio::CueTable;
use crate::cards::{AssetManifest, CardId};
use crate::core::{BingoError, Result};

/// Every handle the game draws or plays.
#[derive(Resource)]
pub struct GameAssets {
    pub background: Handle<Image>,
    pub font: Handle<Font>,
    pub music: Handle<AudioSource>,
    pub cues: CueTable<Handle<AudioSource>>,
    cards: FxHashMap<CardId, Handle<Image>>,
    tracked: Vec<(String, UntypedAssetId)>,
}

impl GameAssets {
    /// Start loading everything in the manifest.
    pub fn load(server: &AssetServer, manifest: &AssetManifest) -> Result<Self> {
        let mut tracked = Vec::new();

        let mut cards = FxHashMap::default();
        for card in CardId::all() {
            let file = manifest.card_image(card)?.to_owned();
            let handle: Handle<Image> = server.load(file.clone());
            tracked.push((file, handle.id().untyped()));
            cards.insert(card, handle);
        }

        let cues = CueTable::from_fn(|cue| {
            let file = manifest.sound(cue);
            let handle: Handle<AudioSource> = server.load(file);
            tracked.push((file.to_string(), handle.id().untyped()));
            handle
        });

        let background: Handle<Image> = server.load(manifest.background());
        let font: Handle<Font> = server.load(manifest.font());
        let music: Handle<AudioSource> = server.load(manifest.music());
        tracked.push((manifest.background().to_string(), background.id().untyped()));
        tracked.push((manifest.font().to_string(), font.id().untyped()));
        tracked.push((manifest.music().to_string(), music.id().untyped()));

        Ok(Self {
            background,
            font,
            music,
            cues,
            cards,
            tracked,
        })
    }

    /// Image handle for a card.
    pub fn card(&self, card: CardId) -> Result<Handle<Image>> {
        self.cards
            .get(&card)
            .cloned()
            .ok_or(BingoError::InvalidCardIdentifier(card.raw()))
    }
}

pub fn load_assets(
    mut commands: Commands,
    server: Res<AssetServer>,
    manifest: Res<Manifest>,
    mut exit: EventWriter<AppExit>,
) {
    match GameAssets::load(&server, &manifest) {
        Ok(assets) => commands.insert_resource(assets),
        Err(err) => {
            error!("{err}");
            exit.send(AppExit::error());
        }
    }
}

/// Exit with an error as soon as any asset fails to load.
///
/// Stops checking once everything has loaded.
pub fn watch_load_failures(
    server: Res<AssetServer>,
    assets: Option<Res<GameAssets>>,
    mut exit: EventWriter<AppExit>,
    mut done: Local<bool>,
) {
    let Some(assets) = assets else { return };
    if *done {
        return;
    }

    let mut all_loaded = true;
    for (file, id) in &assets.tracked {
        match server.get_load_state(*id) {
            Some(LoadState::Loaded) => {}
            Some(LoadState::Failed(reason)) => {
                let err = BingoError::asset(file.clone(), reason.to_string());
                error!("{err}");
                exit.send(AppExit::error());
                *done = true;
                return;
            }
            _ => all_loaded = false,
        }
    }

    if all_loaded {
        info!(count = assets.tracked.len(), "all assets loaded");
        *done = true;
    }
}
