//! Team identification and per-team score records.
//!
//! ## TeamId
//!
//! Exactly two fixed slots, `nos` and `eles`. Because the identifier is a
//! closed enum, an invalid team cannot reach the engine.
//!
//! ## Team
//!
//! Display name, current points and round wins for one slot.

use serde::{Deserialize, Serialize};

/// Maximum team name length, in characters.
pub const MAX_NAME_LEN: usize = 10;

/// Team slot identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamId {
    /// "Us".
    Nos,
    /// "Them".
    Eles,
}

impl TeamId {
    /// Both slots, `nos` first.
    pub const ALL: [TeamId; 2] = [TeamId::Nos, TeamId::Eles];

    /// Get the slot index (0 for `nos`, 1 for `eles`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamId::Nos => 0,
            TeamId::Eles => 1,
        }
    }

    /// The opposing slot.
    #[must_use]
    pub const fn other(self) -> TeamId {
        match self {
            TeamId::Nos => TeamId::Eles,
            TeamId::Eles => TeamId::Nos,
        }
    }

    /// Name shown when the slot has no user-provided name.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            TeamId::Nos => "NÓS",
            TeamId::Eles => "ELES",
        }
    }

    /// Iterate over both slots.
    ///
    /// ```
    /// use truco_score::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all().collect();
    /// assert_eq!(teams, vec![TeamId::Nos, TeamId::Eles]);
    /// ```
    pub fn all() -> impl Iterator<Item = TeamId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamId::Nos => write!(f, "nos"),
            TeamId::Eles => write!(f, "eles"),
        }
    }
}

/// Score record for one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Display label.
    pub name: String,

    /// Points in the current round, 0..=11 between operations.
    pub points: u8,

    /// Rounds won.
    pub wins: u32,
}

impl Team {
    /// Create a team with zero points and wins under the slot's default name.
    #[must_use]
    pub fn new(id: TeamId) -> Self {
        Self {
            name: id.default_name().to_string(),
            points: 0,
            wins: 0,
        }
    }
}

/// Normalize a user-entered team name.
///
/// The name is upper-cased and cut to [`MAX_NAME_LEN`] characters. A name
/// that is blank after trimming falls back to the slot's default.
#[must_use]
pub fn normalize_name(id: TeamId, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return id.default_name().to_string();
    }
    trimmed
        .to_uppercase()
        .chars()
        .take(MAX_NAME_LEN)
        .collect()
}
