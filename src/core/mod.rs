//! Core scoreboard types: teams, match state, stake, actions, configuration.
//!
//! These are plain data. The transitions that change them live in `rules`.

pub mod team;
pub mod stake;
pub mod config;
pub mod action;
pub mod state;

pub use team::{normalize_name, Team, TeamId, MAX_NAME_LEN};
pub use stake::Stake;
pub use config::{EngineConfig, StakePolicy};
pub use action::{Action, ActionRecord, Direction};
pub use state::{MatchState, WIN_THRESHOLD};
