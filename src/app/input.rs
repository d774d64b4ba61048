//! Keyboard input.
//!
//! Only keys pressed during the current frame produce commands. Held keys
//! and anything from earlier frames are ignored.

use bevy::prelude::*;

use super::{Session, SessionEvent};
use crate::core::{Command, Outcome};

/// Key for each command.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub reveal: KeyCode,
    pub new_game: KeyCode,
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            reveal: KeyCode::Space,
            new_game: KeyCode::KeyN,
            quit: KeyCode::KeyQ,
        }
    }
}

impl KeyBindings {
    /// Commands for keys pressed this frame, in reveal/new-game/quit order.
    #[must_use]
    pub fn commands(&self, keys: &ButtonInput<KeyCode>) -> Vec<Command> {
        [
            (self.reveal, Command::Reveal),
            (self.new_game, Command::NewGame),
            (self.quit, Command::Quit),
        ]
        .into_iter()
        .filter(|&(key, _)| keys.just_pressed(key))
        .map(|(_, command)| command)
        .collect()
    }
}

pub fn handle_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    time: Res<Time<Real>>,
    mut session: ResMut<Session>,
    mut events: EventWriter<SessionEvent>,
    mut exit: EventWriter<AppExit>,
) {
    let commands = bindings.commands(&keys);
    if commands.is_empty() {
        return;
    }

    let now_ms = u64::try_from(time.elapsed().as_millis()).unwrap_or(u64::MAX);
    for command in commands {
        let outcome = session.apply(command, now_ms);
        if outcome == Outcome::Quit {
            exit.send(AppExit::Success);
        }
        events.send(SessionEvent(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_commands() {
        let keys = ButtonInput::<KeyCode>::default();
        assert!(KeyBindings::default().commands(&keys).is_empty());
    }

    #[test]
    fn test_fixed_order() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyQ);
        keys.press(KeyCode::Space);
        keys.press(KeyCode::KeyN);

        assert_eq!(
            KeyBindings::default().commands(&keys),
            vec![Command::Reveal, Command::NewGame, Command::Quit]
        );
    }

    #[test]
    fn test_held_key_only_fires_once() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Space);
        assert_eq!(KeyBindings::default().commands(&keys), vec![Command::Reveal]);

        // Next frame, key still held
        keys.clear();
        assert!(KeyBindings::default().commands(&keys).is_empty());
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Enter);
        assert!(KeyBindings::default().commands(&keys).is_empty());
    }
}
