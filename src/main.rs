//! Monster Bingo
//!
//! Space draws the next monster (at most once every five seconds), N starts
//! a new game, Q or closing the window quits.

use anyhow::{bail, Context};
use bevy::prelude::*;

use monster_bingo::app::{window_plugin, BingoPlugin};
use monster_bingo::{AssetManifest, BingoConfig};

fn main() -> anyhow::Result<()> {
    let config = BingoConfig::default();

    let manifest = AssetManifest::new(&config.asset_root);
    manifest
        .verify()
        .with_context(|| format!("missing game assets in '{}'", manifest.root().display()))?;

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(window_plugin(&config))
                .set(AssetPlugin {
                    file_path: config.asset_root.clone(),
                    ..default()
                }),
        )
        .add_plugins(BingoPlugin::new(config))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("game exited with error code {code}"),
    }
}
