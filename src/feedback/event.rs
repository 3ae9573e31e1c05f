//! Feedback event types.
//!
//! The engine describes what happened as a `FeedbackEvent` value. Audio,
//! haptic and speech layers decide independently how to react; only the
//! taxonomy below is fixed.

use serde::{Deserialize, Serialize};

use crate::core::{Stake, TeamId};

/// Which part of the match a reset cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetScope {
    /// Points and stake.
    Points,
    /// Win counts.
    Wins,
    /// Everything, including names.
    All,
}

/// Something the feedback layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackEvent {
    /// A team scored without winning the round.
    ScoreIncrement {
        team: TeamId,
        /// Points after the change.
        points: u8,
        /// Stake that was awarded.
        amount: u8,
    },

    /// A team lost a point. `changed` is false when it was already at 0.
    ScoreDecrement {
        team: TeamId,
        /// Points after the change.
        points: u8,
        changed: bool,
    },

    /// A team reached the threshold. Points are already reset in the state;
    /// `winning_points` is the score that crossed the threshold.
    RoundWon {
        team: TeamId,
        winning_points: u8,
        /// Winner's win count after the increment.
        wins: u32,
    },

    /// Truco was raised to `stake`.
    StakeRaised { stake: Stake },

    /// Stake went back to 1.
    StakeReset,

    /// A reset command was applied.
    MatchReset { scope: ResetScope },
}

impl FeedbackEvent {
    /// The team this event concerns, if any.
    #[must_use]
    pub fn team(&self) -> Option<TeamId> {
        match self {
            FeedbackEvent::ScoreIncrement { team, .. }
            | FeedbackEvent::ScoreDecrement { team, .. }
            | FeedbackEvent::RoundWon { team, .. } => Some(*team),
            _ => None,
        }
    }

    /// Whether this event ended a round.
    #[must_use]
    pub fn is_round_win(&self) -> bool {
        matches!(self, FeedbackEvent::RoundWon { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_team() {
        let event = FeedbackEvent::RoundWon {
            team: TeamId::Eles,
            winning_points: 13,
            wins: 1,
        };
        assert_eq!(event.team(), Some(TeamId::Eles));
        assert!(event.is_round_win());
        assert_eq!(FeedbackEvent::StakeReset.team(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = FeedbackEvent::StakeRaised { stake: Stake::Nine };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"stake_raised","stake":9}"#);

        let reset = FeedbackEvent::MatchReset {
            scope: ResetScope::Wins,
        };
        let back: FeedbackEvent =
            serde_json::from_str(&serde_json::to_string(&reset).unwrap()).unwrap();
        assert_eq!(back, reset);
    }
}
