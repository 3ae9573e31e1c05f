//! Match state: the two team records.
//!
//! `MatchState` is the canonical score table. It is owned by the caller and
//! handed to the engine by `&mut` reference; the engine never keeps a copy.
//!
//! The serialized shape is `{"nos": Team, "eles": Team}`.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::team::{Team, TeamId};

/// Points at which a round is won.
pub const WIN_THRESHOLD: u8 = 12;

/// Both teams' score records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// The `nos` slot.
    pub nos: Team,

    /// The `eles` slot.
    pub eles: Team,
}

impl MatchState {
    /// Create the initial state: zero points and wins, default names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nos: Team::new(TeamId::Nos),
            eles: Team::new(TeamId::Eles),
        }
    }

    /// Get a team's record.
    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        match id {
            TeamId::Nos => &self.nos,
            TeamId::Eles => &self.eles,
        }
    }

    /// Get a mutable reference to a team's record.
    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::Nos => &mut self.nos,
            TeamId::Eles => &mut self.eles,
        }
    }

    /// Iterate over (TeamId, &Team) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        TeamId::all().map(move |id| (id, self.team(id)))
    }

    /// Set both teams' points to zero.
    pub fn clear_points(&mut self) {
        self.nos.points = 0;
        self.eles.points = 0;
    }

    /// Set both teams' win counts to zero.
    pub fn clear_wins(&mut self) {
        self.nos.wins = 0;
        self.eles.wins = 0;
    }

    /// Check the between-operations invariant: no team at or above the
    /// winning threshold.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.iter().all(|(_, team)| team.points < WIN_THRESHOLD)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<TeamId> for MatchState {
    type Output = Team;

    fn index(&self, id: TeamId) -> &Self::Output {
        self.team(id)
    }
}

impl IndexMut<TeamId> for MatchState {
    fn index_mut(&mut self, id: TeamId) -> &mut Self::Output {
        self.team_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MatchState::new();
        assert_eq!(state[TeamId::Nos].name, "NÓS");
        assert_eq!(state[TeamId::Eles].name, "ELES");
        assert!(state.iter().all(|(_, t)| t.points == 0 && t.wins == 0));
        assert!(state.is_settled());
    }

    #[test]
    fn test_index_mutation() {
        let mut state = MatchState::new();
        state[TeamId::Eles].points = 7;
        state[TeamId::Nos].wins = 2;

        assert_eq!(state.eles.points, 7);
        assert_eq!(state.nos.wins, 2);

        state.clear_points();
        assert_eq!(state.eles.points, 0);
        assert_eq!(state.nos.wins, 2);

        state.clear_wins();
        assert_eq!(state.nos.wins, 0);
    }

    #[test]
    fn test_is_settled() {
        let mut state = MatchState::new();
        state.nos.points = 11;
        assert!(state.is_settled());
        state.nos.points = 12;
        assert!(!state.is_settled());
    }

    #[test]
    fn test_serialized_shape() {
        let mut state = MatchState::new();
        state.nos.points = 4;
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["nos"]["points"], 4);
        assert_eq!(value["eles"]["name"], "ELES");

        let back: MatchState = serde_json::from_value(value).unwrap();
        assert_eq!(back, state);
    }
}
