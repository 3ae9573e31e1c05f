//! The score engine: deterministic transitions over the match state.
//!
//! The engine holds only configuration. State is passed in by `&mut`
//! reference and every call runs to completion synchronously, returning the
//! feedback event it produced. Persistence and feedback delivery are the
//! caller's job (see `session`).

use crate::core::{
    normalize_name, Action, Direction, EngineConfig, MatchState, Stake, StakePolicy, TeamId,
    WIN_THRESHOLD,
};
use crate::feedback::{FeedbackEvent, ResetScope};

/// Result of `adjust_points`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointsOutcome {
    /// The team that crossed the threshold on this call, if any.
    pub round_won: Option<TeamId>,
    /// Event for the feedback layer.
    pub event: FeedbackEvent,
}

/// Result of `escalate_stake` and `cancel_stake`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeOutcome {
    /// Stake after the call.
    pub stake: Stake,
    /// True if the stake was raised.
    pub escalated: bool,
    /// `None` when the call changed nothing.
    pub event: Option<FeedbackEvent>,
}

/// Score and stake transitions.
#[derive(Clone, Debug, Default)]
pub struct ScoreEngine {
    config: EngineConfig,
}

impl ScoreEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Award the stake to `team`, or take one point from it.
    ///
    /// Points never drop below zero. If the team reaches the threshold, the
    /// round is won: both teams go back to zero, the winner's win count goes
    /// up by one and the stake returns to 1. A plain increment also returns
    /// the stake to 1. A decrement never touches the stake.
    pub fn adjust_points(
        &self,
        state: &mut MatchState,
        stake: &mut Stake,
        team: TeamId,
        direction: Direction,
    ) -> PointsOutcome {
        let current = i16::from(state[team].points);
        let amount = match direction {
            Direction::Increment => i16::from(stake.value()),
            Direction::Decrement => -1,
        };
        // Bounded by 11 + 12, fits in u8.
        let candidate = (current + amount).max(0) as u8;

        if candidate >= WIN_THRESHOLD {
            state.clear_points();
            // Saturates so a stored count near the limit cannot wrap.
            state[team].wins = state[team].wins.saturating_add(1);
            *stake = Stake::One;

            tracing::debug!(%team, winning_points = candidate, wins = state[team].wins, "round won");

            return PointsOutcome {
                round_won: Some(team),
                event: FeedbackEvent::RoundWon {
                    team,
                    winning_points: candidate,
                    wins: state[team].wins,
                },
            };
        }

        let previous = state[team].points;
        state[team].points = candidate;

        let event = match direction {
            Direction::Increment => {
                let awarded = stake.value();
                *stake = Stake::One;
                FeedbackEvent::ScoreIncrement {
                    team,
                    points: candidate,
                    amount: awarded,
                }
            }
            Direction::Decrement => FeedbackEvent::ScoreDecrement {
                team,
                points: candidate,
                changed: candidate != previous,
            },
        };

        PointsOutcome {
            round_won: None,
            event,
        }
    }

    /// Raise the stake to the next value.
    ///
    /// Under [`StakePolicy::Cycle`] 12 wraps to 1; under
    /// [`StakePolicy::Clamp`] 12 stays put.
    pub fn escalate_stake(&self, stake: &mut Stake) -> StakeOutcome {
        if stake.is_max() && self.config.stake_policy == StakePolicy::Clamp {
            return StakeOutcome {
                stake: *stake,
                escalated: false,
                event: None,
            };
        }

        *stake = stake.next();

        if stake.is_raised() {
            tracing::debug!(%stake, "stake raised");
            StakeOutcome {
                stake: *stake,
                escalated: true,
                event: Some(FeedbackEvent::StakeRaised { stake: *stake }),
            }
        } else {
            StakeOutcome {
                stake: *stake,
                escalated: false,
                event: Some(FeedbackEvent::StakeReset),
            }
        }
    }

    /// Return the stake to 1. A no-op if it already is.
    pub fn cancel_stake(&self, stake: &mut Stake) -> StakeOutcome {
        let event = stake.is_raised().then_some(FeedbackEvent::StakeReset);
        *stake = Stake::One;
        StakeOutcome {
            stake: *stake,
            escalated: false,
            event,
        }
    }

    /// Zero both teams' points and the stake. Wins and names are kept.
    pub fn reset_points(&self, state: &mut MatchState, stake: &mut Stake) -> FeedbackEvent {
        state.clear_points();
        *stake = Stake::One;
        FeedbackEvent::MatchReset {
            scope: ResetScope::Points,
        }
    }

    /// Zero both teams' win counts.
    pub fn reset_wins(&self, state: &mut MatchState) -> FeedbackEvent {
        state.clear_wins();
        FeedbackEvent::MatchReset {
            scope: ResetScope::Wins,
        }
    }

    /// Restore the initial match: zero points and wins, default names,
    /// stake 1.
    pub fn reset_all(&self, state: &mut MatchState, stake: &mut Stake) -> FeedbackEvent {
        *state = MatchState::new();
        *stake = Stake::One;
        FeedbackEvent::MatchReset {
            scope: ResetScope::All,
        }
    }

    /// Rename a team. Blank names fall back to the slot default.
    ///
    /// Returns the name actually stored.
    pub fn rename_team<'a>(&self, state: &'a mut MatchState, team: TeamId, name: &str) -> &'a str {
        state[team].name = normalize_name(team, name);
        &state[team].name
    }

    /// Apply any action, returning the event it produced.
    ///
    /// Used for replaying recorded history.
    pub fn apply(
        &self,
        state: &mut MatchState,
        stake: &mut Stake,
        action: &Action,
    ) -> Option<FeedbackEvent> {
        match action {
            Action::AdjustPoints { team, direction } => {
                Some(self.adjust_points(state, stake, *team, *direction).event)
            }
            Action::EscalateStake => self.escalate_stake(stake).event,
            Action::CancelStake => self.cancel_stake(stake).event,
            Action::ResetPoints => Some(self.reset_points(state, stake)),
            Action::ResetWins => Some(self.reset_wins(state)),
            Action::ResetAll => Some(self.reset_all(state, stake)),
            Action::RenameTeam { team, name } => {
                self.rename_team(state, *team, name);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ScoreEngine, MatchState, Stake) {
        (ScoreEngine::default(), MatchState::new(), Stake::One)
    }

    #[test]
    fn test_increment_awards_stake() {
        let (engine, mut state, _) = setup();
        let mut stake = Stake::Three;

        let outcome = engine.adjust_points(&mut state, &mut stake, TeamId::Nos, Direction::Increment);

        assert_eq!(state.nos.points, 3);
        assert_eq!(stake, Stake::One);
        assert_eq!(outcome.round_won, None);
        assert_eq!(
            outcome.event,
            FeedbackEvent::ScoreIncrement { team: TeamId::Nos, points: 3, amount: 3 }
        );
    }

    #[test]
    fn test_decrement_is_one_point_and_keeps_stake() {
        let (engine, mut state, _) = setup();
        state.eles.points = 8;
        let mut stake = Stake::Nine;

        engine.adjust_points(&mut state, &mut stake, TeamId::Eles, Direction::Decrement);

        assert_eq!(state.eles.points, 7);
        assert_eq!(stake, Stake::Nine);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let (engine, mut state, mut stake) = setup();

        let outcome = engine.adjust_points(&mut state, &mut stake, TeamId::Nos, Direction::Decrement);

        assert_eq!(state.nos.points, 0);
        assert_eq!(
            outcome.event,
            FeedbackEvent::ScoreDecrement { team: TeamId::Nos, points: 0, changed: false }
        );
    }

    #[test]
    fn test_round_win_resets_both_teams() {
        let (engine, mut state, _) = setup();
        state.nos.points = 10;
        state.eles.points = 7;
        state.eles.wins = 4;
        let mut stake = Stake::Six;

        let outcome = engine.adjust_points(&mut state, &mut stake, TeamId::Nos, Direction::Increment);

        assert_eq!(outcome.round_won, Some(TeamId::Nos));
        assert_eq!(state.nos.points, 0);
        assert_eq!(state.eles.points, 0);
        assert_eq!(state.nos.wins, 1);
        assert_eq!(state.eles.wins, 4);
        assert_eq!(stake, Stake::One);
        assert_eq!(
            outcome.event,
            FeedbackEvent::RoundWon { team: TeamId::Nos, winning_points: 16, wins: 1 }
        );
    }

    #[test]
    fn test_exact_threshold_wins() {
        let (engine, mut state, mut stake) = setup();
        state.eles.points = 11;

        let outcome = engine.adjust_points(&mut state, &mut stake, TeamId::Eles, Direction::Increment);

        assert_eq!(outcome.round_won, Some(TeamId::Eles));
        assert_eq!(state.eles.wins, 1);
    }

    #[test]
    fn test_escalate_cycle() {
        let engine = ScoreEngine::default();
        let mut stake = Stake::One;
        let mut values = Vec::new();
        let mut flags = Vec::new();

        for _ in 0..5 {
            let outcome = engine.escalate_stake(&mut stake);
            values.push(outcome.stake.value());
            flags.push(outcome.escalated);
        }

        assert_eq!(values, vec![3, 6, 9, 12, 1]);
        assert_eq!(flags, vec![true, true, true, true, false]);
        assert_eq!(stake, Stake::One);
    }

    #[test]
    fn test_escalate_wrap_emits_reset() {
        let engine = ScoreEngine::default();
        let mut stake = Stake::Twelve;
        let outcome = engine.escalate_stake(&mut stake);
        assert_eq!(outcome.event, Some(FeedbackEvent::StakeReset));
    }

    #[test]
    fn test_escalate_clamp() {
        let engine = ScoreEngine::new(EngineConfig::new().with_stake_policy(StakePolicy::Clamp));
        let mut stake = Stake::Nine;

        let raised = engine.escalate_stake(&mut stake);
        assert_eq!(raised.event, Some(FeedbackEvent::StakeRaised { stake: Stake::Twelve }));

        let inert = engine.escalate_stake(&mut stake);
        assert_eq!(stake, Stake::Twelve);
        assert!(!inert.escalated);
        assert!(inert.event.is_none());
    }

    #[test]
    fn test_win_count_saturates() {
        let (engine, mut state, _) = setup();
        state.nos.points = 11;
        state.nos.wins = u32::MAX;
        let mut stake = Stake::One;

        let outcome = engine.adjust_points(&mut state, &mut stake, TeamId::Nos, Direction::Increment);

        assert_eq!(outcome.round_won, Some(TeamId::Nos));
        assert_eq!(state.nos.wins, u32::MAX);
        assert_eq!(
            outcome.event,
            FeedbackEvent::RoundWon { team: TeamId::Nos, winning_points: 12, wins: u32::MAX }
        );
    }

    #[test]
    fn test_cancel_stake() {
        let engine = ScoreEngine::default();
        let mut stake = Stake::Six;

        let outcome = engine.cancel_stake(&mut stake);
        assert_eq!(stake, Stake::One);
        assert_eq!(outcome.event, Some(FeedbackEvent::StakeReset));

        let again = engine.cancel_stake(&mut stake);
        assert!(again.event.is_none());
    }

    #[test]
    fn test_resets() {
        let (engine, mut state, _) = setup();
        state.nos.points = 5;
        state.eles.points = 9;
        state.nos.wins = 2;
        state.eles.name = "RIVAIS".to_string();
        let mut stake = Stake::Three;

        engine.reset_points(&mut state, &mut stake);
        assert_eq!((state.nos.points, state.eles.points), (0, 0));
        assert_eq!(state.nos.wins, 2);
        assert_eq!(stake, Stake::One);

        engine.reset_wins(&mut state);
        assert_eq!(state.nos.wins, 0);
        assert_eq!(state.eles.name, "RIVAIS");

        stake = Stake::Nine;
        engine.reset_all(&mut state, &mut stake);
        assert_eq!(state, MatchState::new());
        assert_eq!(stake, Stake::One);
    }

    #[test]
    fn test_rename_team() {
        let (engine, mut state, _) = setup();
        assert_eq!(engine.rename_team(&mut state, TeamId::Nos, "casa"), "CASA");
        assert_eq!(engine.rename_team(&mut state, TeamId::Nos, ""), "NÓS");
    }

    #[test]
    fn test_apply_dispatch() {
        let (engine, mut state, mut stake) = setup();

        engine.apply(&mut state, &mut stake, &Action::EscalateStake);
        assert_eq!(stake, Stake::Three);

        let event = engine.apply(&mut state, &mut stake, &Action::increment(TeamId::Eles));
        assert!(matches!(event, Some(FeedbackEvent::ScoreIncrement { points: 3, .. })));

        let rename = Action::RenameTeam { team: TeamId::Eles, name: "eles lá".to_string() };
        assert!(engine.apply(&mut state, &mut stake, &rename).is_none());
        assert_eq!(state.eles.name, "ELES LÁ");
    }
}
