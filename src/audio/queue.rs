//! Per-frame queue of cues waiting to be played.

use super::cue::SoundCue;

/// Cues produced by the session, drained by the audio system each frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CueQueue {
    queue: Vec<SoundCue>,
}

impl CueQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a cue for playback.
    pub fn push(&mut self, cue: SoundCue) {
        self.queue.push(cue);
    }

    /// Take everything queued, oldest first.
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        assert!(CueQueue::new().drain().is_empty());
    }

    #[test]
    fn drain_keeps_order_and_empties() {
        let mut queue = CueQueue::new();
        queue.push(SoundCue::Ghost);
        queue.push(SoundCue::Ghost);
        queue.push(SoundCue::Cat);

        assert_eq!(
            queue.drain(),
            vec![SoundCue::Ghost, SoundCue::Ghost, SoundCue::Cat]
        );
        assert!(queue.drain().is_empty());
    }
}
