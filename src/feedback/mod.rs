//! Feedback events and their consumers.
//!
//! ## Overview
//!
//! Engine transitions return a [`FeedbackEvent`] instead of playing sounds
//! themselves. The session forwards each event to a [`FeedbackSink`].
//!
//! ## Components
//!
//! - [`FeedbackEvent`]: what happened (score up/down, round won, stake raised/reset, reset)
//! - [`FeedbackSink`]: consumer trait, with [`NullSink`], [`RecordingSink`] and [`CueSink`]
//! - [`cue_for`]: stock mapping from events to tones, vibration and speech

mod event;
mod cue;
mod sink;

pub use event::{FeedbackEvent, ResetScope};
pub use cue::{cue_for, stake_call, Cue, Speech, Tone, VibrationPattern, Waveform};
pub use sink::{CueSink, FeedbackSink, NullSink, RecordingSink};
