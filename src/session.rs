//! The scoreboard session: single owner of the live match.
//!
//! `Scoreboard` ties the pure engine to its collaborators. Every mutating
//! method follows the same steps:
//!
//! 1. Run the engine transition on the owned state
//! 2. Append the action to the history
//! 3. Forward the feedback event to the sink
//! 4. Commit the snapshot to the store
//!
//! A failed commit is logged and otherwise ignored; the in-memory state
//! stays authoritative for the session.
//!
//! `SharedScoreboard` puts a scoreboard behind a mutex for hosts that have
//! more than one caller.

use std::sync::{Arc, Mutex, MutexGuard};

use im::Vector;

use crate::core::{Action, ActionRecord, Direction, EngineConfig, MatchState, Stake, Team, TeamId};
use crate::error::Result;
use crate::feedback::FeedbackEvent;
use crate::feedback::FeedbackSink;
use crate::prefs::Preferences;
use crate::rules::{PointsOutcome, ScoreEngine, StakeOutcome};
use crate::storage::{load_snapshot, save_snapshot, KeyValueStore, Snapshot, StorageKeys};

/// Live scoreboard with persistence and feedback.
pub struct Scoreboard<S, N> {
    engine: ScoreEngine,
    snapshot: Snapshot,
    keys: StorageKeys,
    store: S,
    sink: N,
    history: Vector<ActionRecord>,
    next_sequence: u32,
}

impl<S, N> Scoreboard<S, N>
where
    S: KeyValueStore,
    N: FeedbackSink,
{
    /// Open a scoreboard on `store` under the default keys.
    pub fn open(store: S, sink: N, config: EngineConfig) -> Self {
        Self::open_with_keys(store, sink, config, StorageKeys::default())
    }

    /// Open a scoreboard on `store` under custom keys.
    ///
    /// Missing or malformed stored values are replaced by defaults.
    pub fn open_with_keys(store: S, sink: N, config: EngineConfig, keys: StorageKeys) -> Self {
        let snapshot = load_snapshot(&store, &keys);
        tracing::debug!(
            nos = snapshot.state.nos.points,
            eles = snapshot.state.eles.points,
            stake = %snapshot.stake,
            "Opened scoreboard"
        );

        Self {
            engine: ScoreEngine::new(config),
            snapshot,
            keys,
            store,
            sink,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Read access ===

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.snapshot.state
    }

    /// One team's record.
    #[must_use]
    pub fn team(&self, team: TeamId) -> &Team {
        &self.snapshot.state[team]
    }

    /// Current stake.
    #[must_use]
    pub fn stake(&self) -> Stake {
        self.snapshot.stake
    }

    /// Current preferences.
    #[must_use]
    pub fn prefs(&self) -> &Preferences {
        &self.snapshot.prefs
    }

    /// The engine in use.
    #[must_use]
    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Actions applied in this session, oldest first.
    ///
    /// Cloning the returned vector is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The feedback sink.
    #[must_use]
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Mutable access to the feedback sink.
    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// Take the scoreboard apart.
    pub fn into_parts(self) -> (S, N) {
        (self.store, self.sink)
    }

    // === Engine operations ===

    /// Award the stake to `team` or take one point from it.
    pub fn adjust_points(&mut self, team: TeamId, direction: Direction) -> PointsOutcome {
        let outcome = self.engine.adjust_points(
            &mut self.snapshot.state,
            &mut self.snapshot.stake,
            team,
            direction,
        );
        self.finish(Action::AdjustPoints { team, direction }, Some(&outcome.event));
        outcome
    }

    /// Raise the stake (truco).
    pub fn escalate_stake(&mut self) -> StakeOutcome {
        let outcome = self.engine.escalate_stake(&mut self.snapshot.stake);
        self.finish(Action::EscalateStake, outcome.event.as_ref());
        outcome
    }

    /// Drop the stake back to 1.
    pub fn cancel_stake(&mut self) -> StakeOutcome {
        let outcome = self.engine.cancel_stake(&mut self.snapshot.stake);
        self.finish(Action::CancelStake, outcome.event.as_ref());
        outcome
    }

    /// Zero both teams' points and the stake.
    pub fn reset_points(&mut self) {
        let event = self
            .engine
            .reset_points(&mut self.snapshot.state, &mut self.snapshot.stake);
        self.finish(Action::ResetPoints, Some(&event));
    }

    /// Zero both teams' win counts.
    pub fn reset_wins(&mut self) {
        let event = self.engine.reset_wins(&mut self.snapshot.state);
        self.finish(Action::ResetWins, Some(&event));
    }

    /// Restore the initial match. Preferences are kept.
    pub fn reset_all(&mut self) {
        let event = self
            .engine
            .reset_all(&mut self.snapshot.state, &mut self.snapshot.stake);
        self.finish(Action::ResetAll, Some(&event));
    }

    /// Rename a team and return the stored name.
    pub fn rename_team(&mut self, team: TeamId, name: &str) -> &str {
        let stored = self
            .engine
            .rename_team(&mut self.snapshot.state, team, name)
            .to_string();
        self.finish(Action::RenameTeam { team, name: stored }, None);
        &self.snapshot.state[team].name
    }

    // === Preferences ===

    /// Set the text color (`#rrggbb`).
    pub fn set_color(&mut self, color: &str) -> Result<()> {
        self.snapshot.prefs.set_color(color)?;
        self.commit();
        Ok(())
    }

    /// Set the UI opacity and return the stored value.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<f32> {
        let stored = self.snapshot.prefs.set_opacity(opacity)?;
        self.commit();
        Ok(stored)
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.snapshot.prefs.toggle_mute();
        self.commit();
        muted
    }

    /// Select a narrator voice; `None` or empty for the system voice.
    pub fn set_voice(&mut self, voice: Option<String>) {
        self.snapshot.prefs.set_voice(voice);
        self.commit();
    }

    // === Persistence ===

    /// Write the current snapshot, logging and swallowing any failure.
    pub fn commit(&mut self) {
        if let Err(e) = self.try_commit() {
            tracing::warn!(error = %e, "failed to persist scoreboard, keeping in-memory state");
        }
    }

    /// Write the current snapshot.
    pub fn try_commit(&mut self) -> Result<()> {
        save_snapshot(&mut self.store, &self.keys, &self.snapshot)
    }

    fn finish(&mut self, action: Action, event: Option<&FeedbackEvent>) {
        let record = ActionRecord::new(action, self.next_sequence);
        self.next_sequence += 1;
        self.history.push_back(record);

        if let Some(event) = event {
            self.sink
                .notify(event, &self.snapshot.state, &self.snapshot.prefs);
        }

        self.commit();
    }
}

/// A scoreboard shared between callers.
///
/// Calls are serialized by a mutex. Every operation leaves the scoreboard
/// consistent, so a lock poisoned by a panicking caller is recovered rather
/// than propagated.
pub struct SharedScoreboard<S, N> {
    inner: Arc<Mutex<Scoreboard<S, N>>>,
}

impl<S, N> Clone for SharedScoreboard<S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, N> SharedScoreboard<S, N>
where
    S: KeyValueStore,
    N: FeedbackSink,
{
    /// Wrap a scoreboard.
    pub fn new(scoreboard: Scoreboard<S, N>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scoreboard)),
        }
    }

    /// Run `f` with exclusive access to the scoreboard.
    pub fn with<R>(&self, f: impl FnOnce(&mut Scoreboard<S, N>) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Award the stake to `team` or take one point from it.
    pub fn adjust_points(&self, team: TeamId, direction: Direction) -> PointsOutcome {
        self.with(|sb| sb.adjust_points(team, direction))
    }

    /// Raise the stake (truco).
    pub fn escalate_stake(&self) -> StakeOutcome {
        self.with(Scoreboard::escalate_stake)
    }

    /// Copy of the current match state.
    pub fn state(&self) -> MatchState {
        self.with(|sb| sb.state().clone())
    }

    /// Current stake.
    pub fn stake(&self) -> Stake {
        self.with(|sb| sb.stake())
    }

    fn lock(&self) -> MutexGuard<'_, Scoreboard<S, N>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("scoreboard lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
