//! Hover/click tone definitions and the mute gate in front of the audio device.
//!
//! The actual node graph is built by a [`ToneSink`]; the web frontend
//! implements it over WebAudio. Keeping the gate here means a muted board
//! never reaches the sink at all.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// One short tone: oscillator frequency and gain, each ramped exponentially
/// from its start to its end value over `duration_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f64,
}

pub const HOVER_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    start_hz: HOVER_START_HZ,
    end_hz: HOVER_END_HZ,
    start_gain: HOVER_GAIN,
    end_gain: RELEASE_GAIN,
    duration_sec: HOVER_DURATION_SEC,
};

pub const CLICK_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Triangle,
    start_hz: CLICK_START_HZ,
    end_hz: CLICK_END_HZ,
    start_gain: CLICK_GAIN,
    end_gain: RELEASE_GAIN,
    duration_sec: CLICK_DURATION_SEC,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Hover,
    Click,
}

impl Cue {
    pub fn tone(self) -> &'static ToneSpec {
        match self {
            Cue::Hover => &HOVER_TONE,
            Cue::Click => &CLICK_TONE,
        }
    }
}

/// Audio output that can synthesize a [`ToneSpec`].
pub trait ToneSink {
    /// Resume the device if the platform started it suspended.
    fn ensure_running(&mut self);
    /// Schedule one tone starting now. Must not block.
    fn play(&mut self, tone: &ToneSpec);
}

pub struct SoundBoard<S: ToneSink> {
    sink: S,
    muted: bool,
}

impl<S: ToneSink> SoundBoard<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, muted: false }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Flip the mute flag and return the new value.
    ///
    /// The toggle click is usually the first user gesture on the page, so the
    /// device is resumed here whatever the new state. Tones already scheduled
    /// keep playing.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.sink.ensure_running();
        self.muted
    }

    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        self.sink.ensure_running();
        self.sink.play(cue.tone());
    }

    pub fn play_hover(&mut self) {
        self.play(Cue::Hover);
    }

    pub fn play_click(&mut self) {
        self.play(Cue::Click);
    }
}

/// Icon classes to (remove, add) on the toggle button for a mute state.
pub fn mute_icon_classes(muted: bool) -> (&'static str, &'static str) {
    if muted {
        (ICON_SOUND_ON, ICON_SOUND_OFF)
    } else {
        (ICON_SOUND_OFF, ICON_SOUND_ON)
    }
}
