//! Scoreboard actions and their history records.
//!
//! Every mutation a user can make is one `Action`. The session records each
//! applied action so a match can be inspected or replayed.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Direction of a point adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Award the current stake.
    Increment,
    /// Take away exactly one point.
    Decrement,
}

/// A user action on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Add the stake to, or take one point from, a team.
    AdjustPoints { team: TeamId, direction: Direction },
    /// Raise the stake (truco).
    EscalateStake,
    /// Drop the stake back to 1.
    CancelStake,
    /// Zero both teams' points.
    ResetPoints,
    /// Zero both teams' wins.
    ResetWins,
    /// Back to the initial match state.
    ResetAll,
    /// Change a team's display name.
    RenameTeam { team: TeamId, name: String },
}

impl Action {
    /// Shorthand for a "plus" on `team`.
    #[must_use]
    pub fn increment(team: TeamId) -> Self {
        Action::AdjustPoints {
            team,
            direction: Direction::Increment,
        }
    }

    /// Shorthand for a "minus" on `team`.
    #[must_use]
    pub fn decrement(team: TeamId) -> Self {
        Action::AdjustPoints {
            team,
            direction: Direction::Decrement,
        }
    }

    /// The team this action targets, if any.
    #[must_use]
    pub fn team(&self) -> Option<TeamId> {
        match self {
            Action::AdjustPoints { team, .. } | Action::RenameTeam { team, .. } => Some(*team),
            _ => None,
        }
    }
}

/// A recorded action with its position in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Sequence number within the session (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self { action, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_shorthands() {
        assert_eq!(
            Action::increment(TeamId::Nos),
            Action::AdjustPoints {
                team: TeamId::Nos,
                direction: Direction::Increment
            }
        );
        assert_eq!(Action::decrement(TeamId::Eles).team(), Some(TeamId::Eles));
        assert_eq!(Action::EscalateStake.team(), None);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::increment(TeamId::Eles);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"adjust_points","team":"eles","direction":"increment"}"#
        );
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Action::ResetWins, 4);
        assert_eq!(record.sequence, 4);
        assert_eq!(record.action, Action::ResetWins);
    }
}
