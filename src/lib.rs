//! # truco-score
//!
//! Score and stake engine for a two-team Truco scoreboard.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `ScoreEngine` mutates state passed in by the
//!    caller and returns what happened. No globals, no I/O.
//!
//! 2. **Events, not effects**: sounds, vibration and speech are described by
//!    `FeedbackEvent` values that a `FeedbackSink` consumes.
//!
//! 3. **Explicit commit**: the session writes a snapshot to a key-value store
//!    after every mutation. A failed write never undoes a score change.
//!
//! ## Rules
//!
//! - "Plus" awards the current stake; "minus" takes exactly one point and
//!   never goes below zero.
//! - Reaching 12 wins the round: both teams drop to 0, the winner's win
//!   count goes up and the stake returns to 1.
//! - Truco raises the stake through 1, 3, 6, 9, 12. Any successful "plus"
//!   returns it to 1.
//!
//! ## Modules
//!
//! - `core`: Teams, match state, stake, actions, configuration
//! - `rules`: The score engine
//! - `feedback`: Feedback events, sinks and stock cues
//! - `prefs`: Display and narration preferences
//! - `storage`: Key-value persistence
//! - `session`: Live scoreboard tying it all together
//!
//! ## Example
//!
//! ```
//! use truco_score::{Direction, EngineConfig, MemoryStore, NullSink, Scoreboard, TeamId};
//!
//! let mut board = Scoreboard::open(MemoryStore::new(), NullSink, EngineConfig::default());
//!
//! board.escalate_stake(); // truco: stake 3
//! board.adjust_points(TeamId::Nos, Direction::Increment);
//!
//! assert_eq!(board.team(TeamId::Nos).points, 3);
//! assert_eq!(board.stake().value(), 1);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod feedback;
pub mod prefs;
pub mod storage;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Direction, EngineConfig, MatchState, Stake, StakePolicy, Team, TeamId,
    WIN_THRESHOLD,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{PointsOutcome, ScoreEngine, StakeOutcome};

pub use crate::feedback::{
    cue_for, Cue, CueSink, FeedbackEvent, FeedbackSink, NullSink, RecordingSink, ResetScope,
};

pub use crate::prefs::{Preferences, NEON_COLORS};

pub use crate::storage::{FileStore, KeyValueStore, MemoryStore, Snapshot, StorageKeys};

pub use crate::session::{Scoreboard, SharedScoreboard};
