//! Sound-effect collaborator
//!
//! The core fires named cues as side effects of state transitions and fire
//! actions. Playback lives outside the crate; the trait is infallible so a
//! broken audio backend can never affect simulation state.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Player fired
    Shoot,
    /// Power-up collected
    PowerUpCollected,
    /// Level won
    Win,
    /// Level lost
    Lose,
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Sink that drops every cue; for headless use
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Sink that records cues in order; used by tests
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub cues: Vec<Cue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
