//! Engine configuration.
//!
//! The only tunable rule is what happens when a truco is raised past 12.
//! Two behaviors exist in the wild:
//! - `Cycle`: 12 wraps back to 1, so the raise control doubles as "cancel".
//! - `Clamp`: 12 is terminal; returning to 1 needs an explicit cancel.

use serde::{Deserialize, Serialize};

/// What `escalate_stake` does at the top stake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakePolicy {
    /// `12 → 1`.
    #[default]
    Cycle,
    /// `12 → 12`.
    Clamp,
}

/// Score engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Escalation behavior at the top stake.
    pub stake_policy: StakePolicy,
}

impl EngineConfig {
    /// Create the default configuration (cycling stake).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stake policy.
    #[must_use]
    pub fn with_stake_policy(mut self, policy: StakePolicy) -> Self {
        self.stake_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::new();
        assert_eq!(config.stake_policy, StakePolicy::Cycle);
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new().with_stake_policy(StakePolicy::Clamp);
        assert_eq!(config.stake_policy, StakePolicy::Clamp);
    }
}
