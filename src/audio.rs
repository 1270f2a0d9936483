//! Sound cues.
//!
//! The game never plays audio. It reports discrete cues; a front end maps
//! them onto real sounds. A cue always restarts its sound from the
//! beginning, so rapid repeats cut the previous playback short instead of
//! queueing behind it.

use serde::{Deserialize, Serialize};

use crate::game::GameEvent;

/// A discrete sound trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// A number was announced.
    Alert,
    /// The player toggled a cell.
    Mark,
    /// The player won.
    Success,
    /// The player lost.
    Failure,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [SoundCue::Alert, SoundCue::Mark, SoundCue::Success, SoundCue::Failure];

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Something that can play cues.
pub trait AudioSink {
    /// Rewind `cue` to its start and play it.
    fn restart(&mut self, cue: SoundCue);
}

/// Forward the cues carried by `events` to `sink`, in order.
pub fn play_cues<S: AudioSink + ?Sized>(events: &[GameEvent], sink: &mut S) {
    for cue in events.iter().filter_map(GameEvent::cue) {
        sink.restart(cue);
    }
}

/// In-memory sink that tracks one playback channel per cue.
///
/// Each channel only remembers how often it was (re)started; there is no
/// queue, so a second trigger replaces the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundBoard {
    volume: f32,
    starts: [u32; 4],
    last: Option<SoundCue>,
}

impl SoundBoard {
    /// Create a board at `volume` (clamped to `0.0..=1.0`).
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// How many times `cue` has been started.
    #[must_use]
    pub fn starts(&self, cue: SoundCue) -> u32 {
        self.starts[cue.slot()]
    }

    /// The most recently started cue.
    #[must_use]
    pub fn last(&self) -> Option<SoundCue> {
        self.last
    }
}

impl AudioSink for SoundBoard {
    fn restart(&mut self, cue: SoundCue) {
        self.starts[cue.slot()] += 1;
        self.last = Some(cue);
    }
}
