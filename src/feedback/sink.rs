//! Feedback consumers.
//!
//! A sink receives every event the scoreboard produces. Delivery cannot fail
//! from the scoreboard's side: a sink that has nowhere to send an event
//! simply drops it.

use super::cue::{cue_for, Cue};
use super::event::FeedbackEvent;
use crate::core::MatchState;
use crate::prefs::Preferences;

/// Consumer of feedback events.
///
/// `state` and `prefs` are the values after the transition that produced
/// the event.
pub trait FeedbackSink {
    /// Handle one event.
    fn notify(&mut self, event: &FeedbackEvent, state: &MatchState, prefs: &Preferences);
}

/// Sink for environments with no audio, haptics or speech.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn notify(&mut self, _event: &FeedbackEvent, _state: &MatchState, _prefs: &Preferences) {}
}

/// Sink that keeps every event it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<FeedbackEvent>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    /// Remove and return all recorded events.
    pub fn drain(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }
}

impl FeedbackSink for RecordingSink {
    fn notify(&mut self, event: &FeedbackEvent, _state: &MatchState, _prefs: &Preferences) {
        self.events.push(event.clone());
    }
}

/// Sink that renders each event into a [`Cue`] and hands it to a player.
///
/// Silent cues are not forwarded.
pub struct CueSink<F> {
    player: F,
}

impl<F> CueSink<F>
where
    F: FnMut(Cue),
{
    /// Wrap a cue player.
    pub fn new(player: F) -> Self {
        Self { player }
    }
}

impl<F> FeedbackSink for CueSink<F>
where
    F: FnMut(Cue),
{
    fn notify(&mut self, event: &FeedbackEvent, state: &MatchState, prefs: &Preferences) {
        let cue = cue_for(event, state, prefs);
        if cue.is_silent() {
            return;
        }
        tracing::trace!(?event, ?cue, "playing feedback cue");
        (self.player)(cue);
    }
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for &mut S {
    fn notify(&mut self, event: &FeedbackEvent, state: &MatchState, prefs: &Preferences) {
        (**self).notify(event, state, prefs);
    }
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for Box<S> {
    fn notify(&mut self, event: &FeedbackEvent, state: &MatchState, prefs: &Preferences) {
        (**self).notify(event, state, prefs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Stake, TeamId};

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        let state = MatchState::new();
        let prefs = Preferences::default();

        sink.notify(&FeedbackEvent::StakeReset, &state, &prefs);
        sink.notify(&FeedbackEvent::StakeRaised { stake: Stake::Three }, &state, &prefs);

        assert_eq!(sink.events().len(), 2);
        let drained = sink.drain();
        assert_eq!(drained[0], FeedbackEvent::StakeReset);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_cue_sink_forwards_cues() {
        let mut played = Vec::new();
        {
            let mut sink = CueSink::new(|cue| played.push(cue));
            sink.notify(
                &FeedbackEvent::ScoreDecrement { team: TeamId::Nos, points: 0, changed: false },
                &MatchState::new(),
                &Preferences::default(),
            );
        }
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].tone.map(|t| t.frequency_hz), Some(220));
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.notify(&FeedbackEvent::StakeReset, &MatchState::new(), &Preferences::default());
    }
}
