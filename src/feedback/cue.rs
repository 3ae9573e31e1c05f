//! Default mapping from feedback events to audio/haptic/speech cues.
//!
//! This is cosmetic. A front end is free to ignore it and react to
//! `FeedbackEvent` directly; the values here reproduce the scoreboard's
//! stock sounds.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::event::FeedbackEvent;
use crate::core::{MatchState, Stake};
use crate::prefs::Preferences;

/// Oscillator shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Soft tone for score changes.
    Sine,
    /// Brighter tone for a round win.
    Triangle,
    /// Harsh buzz for a truco call.
    Sawtooth,
}

/// A single synthesized tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: u32,
    /// Length in milliseconds.
    pub duration_ms: u32,
    /// Oscillator shape.
    pub waveform: Waveform,
}

/// Text for the narrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speech {
    /// What the narrator says.
    pub text: String,
    /// `None` for the system voice.
    pub voice: Option<String>,
}

/// Vibration pattern in milliseconds, alternating on/off.
pub type VibrationPattern = SmallVec<[u32; 4]>;

/// Everything a front end needs to play for one event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    /// Tone to play; `None` when muted or for silent events.
    pub tone: Option<Tone>,
    /// Haptic pattern; empty for none.
    pub vibration: VibrationPattern,
    /// Narration; `None` when muted or for events without a call.
    pub speech: Option<Speech>,
}

impl Cue {
    /// Whether the cue has nothing to play.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.tone.is_none() && self.speech.is_none() && self.vibration.is_empty()
    }
}

/// Narrator call for a raised stake.
#[must_use]
pub fn stake_call(stake: Stake) -> Option<&'static str> {
    match stake {
        Stake::One => None,
        Stake::Three => Some("TRUCO!"),
        Stake::Six => Some("SEIS!"),
        Stake::Nine => Some("NOVE!"),
        Stake::Twelve => Some("DOZE!"),
    }
}

/// Build the cue for `event`.
///
/// `state` supplies team names for speech. When muted, tone and speech are
/// dropped and only vibration remains.
#[must_use]
pub fn cue_for(event: &FeedbackEvent, state: &MatchState, prefs: &Preferences) -> Cue {
    let (tone, vibration, text): (Option<Tone>, VibrationPattern, Option<String>) = match event {
        FeedbackEvent::ScoreIncrement { points, .. } => (
            Some(Tone {
                frequency_hz: 440 + u32::from(*points) * 20,
                duration_ms: 100,
                waveform: Waveform::Sine,
            }),
            smallvec![40],
            None,
        ),
        FeedbackEvent::ScoreDecrement { .. } => (
            Some(Tone {
                frequency_hz: 220,
                duration_ms: 100,
                waveform: Waveform::Sine,
            }),
            smallvec![40],
            None,
        ),
        FeedbackEvent::RoundWon { team, .. } => (
            Some(Tone {
                frequency_hz: 880,
                duration_ms: 500,
                waveform: Waveform::Triangle,
            }),
            smallvec![100, 50, 100],
            Some(format!("{} VENCEU!", state[*team].name)),
        ),
        FeedbackEvent::StakeRaised { stake } => (
            Some(Tone {
                frequency_hz: 150,
                duration_ms: 300,
                waveform: Waveform::Sawtooth,
            }),
            smallvec![80],
            stake_call(*stake).map(str::to_string),
        ),
        FeedbackEvent::StakeReset | FeedbackEvent::MatchReset { .. } => (None, smallvec![20], None),
    };

    if prefs.muted {
        return Cue {
            tone: None,
            vibration,
            speech: None,
        };
    }

    Cue {
        tone,
        vibration,
        speech: text.map(|text| Speech {
            text,
            voice: prefs.voice.clone(),
        }),
    }
}
