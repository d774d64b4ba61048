//! Scene: background, instruction text and the revealed-card gallery.
//!
//! Z order, back to front: background, featured card, thumbnails, text.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::{GameAssets, Session, SessionEvent};
use crate::core::{GameSession, Result};
use crate::layout::{instruction_blocks, ScreenRect, TextColor as BlockColor, WindowSize};

const BACKGROUND_Z: f32 = 0.0;
const FEATURED_Z: f32 = 1.0;
const THUMBNAIL_Z: f32 = 2.0;
const TEXT_Z: f32 = 3.0;

#[derive(Component)]
pub struct InstructionText;

/// Featured card or thumbnail; rebuilt whenever the revealed list changes.
#[derive(Component)]
pub struct GalleryCard;

pub fn setup_scene(mut commands: Commands, assets: Res<GameAssets>, session: Res<Session>) {
    let window = session.config().window;

    commands.spawn(Camera2d);

    let full = ScreenRect::new(0.0, 0.0, window.width, window.height);
    commands.spawn(image_sprite(assets.background.clone(), full, window, BACKGROUND_Z));

    for block in instruction_blocks() {
        let (x, y) = window.to_world(block.x, block.y);
        commands.spawn((
            Text2d::new(block.text),
            TextFont {
                font: assets.font.clone(),
                font_size: block.font_size,
                ..default()
            },
            TextColor(to_color(block.color)),
            Anchor::TopLeft,
            Transform::from_xyz(x, y, TEXT_Z),
            InstructionText,
        ));
    }
}

/// Rebuild the gallery after any command that changed what's on screen.
pub fn sync_scene(
    mut commands: Commands,
    mut events: EventReader<SessionEvent>,
    session: Res<Session>,
    assets: Res<GameAssets>,
    gallery: Query<Entity, With<GalleryCard>>,
    mut instructions: Query<&mut Visibility, With<InstructionText>>,
    mut exit: EventWriter<AppExit>,
) {
    let changed = events
        .read()
        .fold(false, |changed, event| changed | event.0.has_update());
    if !changed {
        return;
    }

    for entity in &gallery {
        commands.entity(entity).despawn();
    }

    let started = session.phase().is_started();
    for mut visibility in &mut instructions {
        *visibility = if started {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }
    if !started {
        return;
    }

    if let Err(err) = spawn_gallery(&mut commands, &session, &assets) {
        error!("{err}");
        exit.send(AppExit::error());
    }
}

/// Spawn the featured card and one thumbnail per revealed card.
fn spawn_gallery(commands: &mut Commands, session: &GameSession, assets: &GameAssets) -> Result<()> {
    let window = session.config().window;
    let layout = session.config().layout;

    if let Some(card) = session.latest() {
        let origin = layout.featured_world_origin(window);
        commands.spawn((featured_sprite(assets.card(card)?, origin), GalleryCard));
    }

    for (index, &card) in session.revealed().iter().enumerate() {
        let rect = layout.thumbnail_rect(index);
        commands.spawn((image_sprite(assets.card(card)?, rect, window, THUMBNAIL_Z), GalleryCard));
    }

    Ok(())
}

/// Sprite stretched to fill `rect`.
fn image_sprite(image: Handle<Image>, rect: ScreenRect, window: WindowSize, z: f32) -> (Sprite, Transform) {
    let (x, y) = rect.world_center(window);
    (
        Sprite {
            image,
            custom_size: Some(Vec2::new(rect.width, rect.height)),
            ..default()
        },
        Transform::from_xyz(x, y, z),
    )
}

/// Sprite at the image's native size, top-left corner at `origin`.
fn featured_sprite(image: Handle<Image>, (x, y): (f32, f32)) -> (Sprite, Transform) {
    (
        Sprite {
            image,
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_xyz(x, y, FEATURED_Z),
    )
}

fn to_color(color: BlockColor) -> Color {
    Color::srgb_u8(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GalleryLayout;

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(BlockColor::RED), Color::srgb_u8(255, 0, 0));
        assert_eq!(to_color(BlockColor::YELLOW), Color::srgb(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_thumbnail_sprite_placement() {
        let window = WindowSize::default();
        let rect = ScreenRect::square(830.0, 50.0, 64.0);

        let (sprite, transform) = image_sprite(Handle::default(), rect, window, THUMBNAIL_Z);

        assert_eq!(sprite.custom_size, Some(Vec2::splat(64.0)));
        assert_eq!(transform.translation, Vec3::new(262.0, 318.0, THUMBNAIL_Z));
    }

    #[test]
    fn test_featured_sprite_keeps_native_size() {
        let origin = GalleryLayout::default().featured_world_origin(WindowSize::default());

        let (sprite, transform) = featured_sprite(Handle::default(), origin);

        assert_eq!(sprite.custom_size, None);
        assert_eq!(sprite.anchor, Anchor::TopLeft);
        assert_eq!(transform.translation, Vec3::new(-400.0, 200.0, FEATURED_Z));
    }
}
