//! Window icon.
//!
//! Bevy has no icon field on `Window`, so the icon goes straight to the
//! winit window once it exists.

use std::path::Path;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::winit::WinitWindows;
use winit::window::Icon;

use super::Manifest;
use crate::core::{BingoError, Result};

/// Build an icon from raw RGBA8 pixels.
pub fn icon_from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> std::result::Result<Icon, String> {
    Icon::from_rgba(rgba, width, height).map_err(|err| err.to_string())
}

/// Decode an image file into an icon.
pub fn load_icon(path: &Path) -> Result<Icon> {
    let failure = |reason: String| BingoError::asset(path.display().to_string(), reason);

    let image = image::open(path).map_err(|err| failure(err.to_string()))?.into_rgba8();
    let (width, height) = image.dimensions();
    icon_from_rgba(image.into_raw(), width, height).map_err(failure)
}

/// Set the manifest's icon on the primary window.
///
/// Retries every frame until the window has been created, then runs once.
/// A bad icon is logged and skipped; the game still runs without it.
pub fn set_window_icon(
    manifest: Res<Manifest>,
    windows: NonSend<WinitWindows>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut done: Local<bool>,
) {
    if *done {
        return;
    }
    let Ok(entity) = primary.get_single() else { return };
    let Some(window) = windows.get_window(entity) else { return };
    *done = true;

    match load_icon(&manifest.path(manifest.icon())) {
        Ok(icon) => {
            window.set_window_icon(Some(icon));
            debug!(file = manifest.icon(), "window icon set");
        }
        Err(err) => warn!("{err}"),
    }
}
