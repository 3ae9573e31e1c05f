//! Mapping between the scoreboard's values and store keys.
//!
//! ## Keys
//!
//! | key | value |
//! |---|---|
//! | `<prefix>_state` | `MatchState` as JSON |
//! | `<prefix>_hand` | stake as an integer |
//! | `<prefix>_color` | `#rrggbb` |
//! | `<prefix>_opacity` | decimal number |
//! | `<prefix>_muted` | `true` / `false` |
//! | `<prefix>_voice` | voice name, absent for the system voice |
//!
//! Loading never fails: each key that is absent, unreadable or malformed
//! falls back to its own default.

use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::core::{MatchState, Stake, TeamId};
use crate::error::{Error, Result};
use crate::prefs::{parse_color, parse_opacity, Preferences};

/// Default key prefix.
pub const DEFAULT_PREFIX: &str = "truco_v1";

/// Store key names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    /// Match state as JSON.
    pub state: String,
    /// Current stake.
    pub stake: String,
    /// Accent color.
    pub color: String,
    /// Display opacity.
    pub opacity: String,
    /// Mute flag.
    pub muted: String,
    /// Narrator voice; absent for the system voice.
    pub voice: String,
}

impl StorageKeys {
    /// Build key names under `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            state: format!("{prefix}_state"),
            stake: format!("{prefix}_hand"),
            color: format!("{prefix}_color"),
            opacity: format!("{prefix}_opacity"),
            muted: format!("{prefix}_muted"),
            voice: format!("{prefix}_voice"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

/// Everything the scoreboard persists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Both teams' names, points and wins.
    pub state: MatchState,
    /// Stake of the hand in play.
    pub stake: Stake,
    /// Display and narration preferences.
    pub prefs: Preferences,
}

/// Read a snapshot, substituting defaults for anything missing or malformed.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(store: &S, keys: &StorageKeys) -> Snapshot {
    let defaults = Preferences::default();

    let state = load_value(store, &keys.state, parse_state).unwrap_or_default();
    let stake = load_value(store, &keys.stake, parse_stake).unwrap_or_default();
    let color = load_value(store, &keys.color, parse_color).unwrap_or(defaults.color);
    let opacity = load_value(store, &keys.opacity, |raw| {
        let value: f32 = raw.trim().parse().map_err(|_| Error::InvalidOpacity)?;
        parse_opacity(value)
    })
    .unwrap_or(defaults.opacity);
    // Anything other than "true" reads as unmuted.
    let muted = load_value(store, &keys.muted, |raw| Ok(raw == "true")).unwrap_or(defaults.muted);
    let voice = load_value(store, &keys.voice, |raw| Ok(raw.to_string()))
        .filter(|v| !v.trim().is_empty());

    Snapshot {
        state,
        stake,
        prefs: Preferences {
            color,
            opacity,
            muted,
            voice,
        },
    }
}

/// Write every key of `snapshot` as one batch.
///
/// With a store that writes batches as a unit, a failed save leaves the
/// previous snapshot intact.
pub fn save_snapshot<S: KeyValueStore + ?Sized>(
    store: &mut S,
    keys: &StorageKeys,
    snapshot: &Snapshot,
) -> Result<()> {
    let state = serde_json::to_string(&snapshot.state)?;
    let stake = snapshot.stake.value().to_string();
    let opacity = snapshot.prefs.opacity.to_string();
    let muted = if snapshot.prefs.muted { "true" } else { "false" };

    store.set_many(&[
        (keys.state.as_str(), Some(state.as_str())),
        (keys.stake.as_str(), Some(stake.as_str())),
        (keys.color.as_str(), Some(snapshot.prefs.color.as_str())),
        (keys.opacity.as_str(), Some(opacity.as_str())),
        (keys.muted.as_str(), Some(muted)),
        (keys.voice.as_str(), snapshot.prefs.voice.as_deref()),
    ])?;
    tracing::debug!("Saved scoreboard snapshot");
    Ok(())
}

/// Read and parse one key. Failures are logged and reported as `None`.
fn load_value<S, T, F>(store: &S, key: &str, parse: F) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce(&str) -> Result<T>,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value, using default");
            return None;
        }
    };

    match parse(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed stored value, using default");
            None
        }
    }
}

fn parse_stake(raw: &str) -> Result<Stake> {
    Ok(serde_json::from_str(raw.trim())?)
}

/// Decode a stored match. A team at or over the threshold cannot occur
/// between operations, so such a state is rejected as a whole. Blank names
/// are repaired.
fn parse_state(raw: &str) -> Result<MatchState> {
    let mut state: MatchState = serde_json::from_str(raw)?;
    if !state.is_settled() {
        return Err(Error::CorruptedState("team points at or above the winning threshold"));
    }
    for id in TeamId::all() {
        if state[id].name.trim().is_empty() {
            state[id].name = id.default_name().to_string();
        }
    }
    Ok(state)
}
