//! Sound effects and background music.

use bevy::prelude::*;

use super::{GameAssets, Session, SessionEvent};
use crate::core::Outcome;

/// Marks the background music player.
#[derive(Component)]
pub struct BackgroundMusic;

pub fn start_music(mut commands: Commands, assets: Res<GameAssets>) {
    spawn_music(&mut commands, &assets);
}

/// Restart the music from the top on every new game.
pub fn restart_music(
    mut commands: Commands,
    mut events: EventReader<SessionEvent>,
    assets: Res<GameAssets>,
    playing: Query<Entity, With<BackgroundMusic>>,
) {
    let new_games = events
        .read()
        .filter(|event| event.0 == Outcome::NewGame)
        .count();
    if new_games == 0 {
        return;
    }

    for entity in &playing {
        commands.entity(entity).despawn();
    }
    spawn_music(&mut commands, &assets);
}

/// Fire-and-forget playback of queued cues. Overlapping sounds are fine.
pub fn play_cues(mut commands: Commands, mut session: ResMut<Session>, assets: Res<GameAssets>) {
    for cue in session.bypass_change_detection().drain_cues() {
        debug!(%cue, "playing cue");
        commands.spawn((
            AudioPlayer::new(assets.cues.get(cue).clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

fn spawn_music(commands: &mut Commands, assets: &GameAssets) {
    commands.spawn((
        AudioPlayer::new(assets.music.clone()),
        PlaybackSettings::DESPAWN,
        BackgroundMusic,
    ));
}
