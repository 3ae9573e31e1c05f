//! Hand value ("stake") awarded by the next scoring action.
//!
//! The stake only ever takes the values 1, 3, 6, 9 and 12. It is stored as
//! an enum so every value the engine sees is valid; the integer form is used
//! on the wire and in persisted state.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Current hand value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stake {
    /// Base hand, no truco called.
    #[default]
    One,
    /// Truco.
    Three,
    /// Six.
    Six,
    /// Nine.
    Nine,
    /// Twelve, the highest raise.
    Twelve,
}

impl Stake {
    /// All stakes in escalation order.
    pub const ALL: [Stake; 5] = [Stake::One, Stake::Three, Stake::Six, Stake::Nine, Stake::Twelve];

    /// Point value of this stake.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Stake::One => 1,
            Stake::Three => 3,
            Stake::Six => 6,
            Stake::Nine => 9,
            Stake::Twelve => 12,
        }
    }

    /// Next stake in the cycle `1 → 3 → 6 → 9 → 12 → 1`.
    #[must_use]
    pub const fn next(self) -> Stake {
        match self {
            Stake::One => Stake::Three,
            Stake::Three => Stake::Six,
            Stake::Six => Stake::Nine,
            Stake::Nine => Stake::Twelve,
            Stake::Twelve => Stake::One,
        }
    }

    /// Whether a truco has been called (stake above the base value).
    #[must_use]
    pub const fn is_raised(self) -> bool {
        !matches!(self, Stake::One)
    }

    /// Whether this is the highest stake.
    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, Stake::Twelve)
    }
}

impl TryFrom<u8> for Stake {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Stake::One),
            3 => Ok(Stake::Three),
            6 => Ok(Stake::Six),
            9 => Ok(Stake::Nine),
            12 => Ok(Stake::Twelve),
            other => Err(Error::InvalidStake(other)),
        }
    }
}

impl From<Stake> for u8 {
    fn from(stake: Stake) -> Self {
        stake.value()
    }
}

impl std::fmt::Display for Stake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
