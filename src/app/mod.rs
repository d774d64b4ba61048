//! Bevy frontend.
//!
//! One `Update` pass per frame, chained so the session is only touched in a
//! fixed order: input → sound cues → music → scene sync. The frame rate is
//! capped by vsync.

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use crate::cards::AssetManifest;
use crate::core::{BingoConfig, GameSession, Outcome};

pub mod assets;
pub mod audio;
pub mod icon;
pub mod input;
pub mod scene;

pub use assets::GameAssets;
pub use input::KeyBindings;

/// The single game session, owned by the app.
#[derive(Resource, Deref, DerefMut)]
pub struct Session(pub GameSession);

/// Asset file names, shared by the loader systems.
#[derive(Resource, Deref)]
pub struct Manifest(pub AssetManifest);

/// Emitted once for every command the session handled this frame.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionEvent(pub Outcome);

/// Wires the session, assets and systems into an app.
pub struct BingoPlugin {
    config: BingoConfig,
}

impl BingoPlugin {
    #[must_use]
    pub fn new(config: BingoConfig) -> Self {
        Self { config }
    }
}

impl Plugin for BingoPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Session(GameSession::new(self.config.clone())))
            .insert_resource(Manifest(AssetManifest::new(&self.config.asset_root)))
            .insert_resource(ClearColor(Color::BLACK))
            .init_resource::<KeyBindings>()
            .add_event::<SessionEvent>()
            .add_systems(
                Startup,
                (
                    assets::load_assets,
                    (scene::setup_scene, audio::start_music)
                        .run_if(resource_exists::<GameAssets>),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    input::handle_input,
                    audio::play_cues,
                    audio::restart_music,
                    scene::sync_scene,
                )
                    .chain()
                    .run_if(resource_exists::<GameAssets>),
            )
            .add_systems(Update, (assets::watch_load_failures, icon::set_window_icon));
    }
}

/// Fixed-size, non-resizable primary window. The icon is set later by
/// `icon::set_window_icon`.
#[must_use]
pub fn window_plugin(config: &BingoConfig) -> WindowPlugin {
    WindowPlugin {
        primary_window: Some(Window {
            title: config.title.clone(),
            resolution: WindowResolution::new(config.window.width, config.window.height),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }
}
