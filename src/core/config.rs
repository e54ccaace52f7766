//! Session configuration and rule constants.
//!
//! Table rules (hand size, pile counts, deck composition) are fixed
//! constants. Only the goal pile size, the RNG seed and the tie-break
//! presentation delay vary per session, via `SessionConfig`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Highest rank a numbered card can carry.
pub const MAX_RANK: u8 = 12;

/// Copies of each rank 1..=12 in a full set.
pub const COPIES_PER_RANK: usize = 12;

/// Wild cards in a full set.
pub const WILD_COUNT: usize = 18;

/// Total cards in play: 144 numbered + 18 wild.
pub const DECK_SIZE: usize = COPIES_PER_RANK * MAX_RANK as usize + WILD_COUNT;

/// Cards a hand is refilled to.
pub const HAND_SIZE: usize = 5;

/// Shared ascending piles in the middle of the table.
pub const SHARED_PILE_COUNT: usize = 4;

/// Discard slots per player.
pub const DISCARD_SLOT_COUNT: usize = 4;

/// Cards in one completed shared pile.
pub const COMPLETED_PILE_SIZE: usize = MAX_RANK as usize;

/// Pending cards that trigger a recycle: three completed piles.
pub const RECYCLE_THRESHOLD: usize = 3 * COMPLETED_PILE_SIZE;

/// Goal pile size used when the creator does not pick one.
pub const DEFAULT_GOAL_PILE_SIZE: usize = 20;

/// Largest goal pile that still leaves both opening hands dealable.
pub const MAX_GOAL_PILE_SIZE: usize = (DECK_SIZE - 2 * HAND_SIZE) / 2;

/// Default delay between a resolved tie-break round and its follow-up.
pub const DEFAULT_TIE_BREAK_DELAY_MS: u64 = 3_000;

/// Per-session configuration.
///
/// ```
/// use skipbo_engine::core::SessionConfig;
///
/// let config = SessionConfig::new()
///     .with_goal_pile_size(10)
///     .with_seed(42);
///
/// assert_eq!(config.goal_pile_size, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Cards dealt to each goal pile at setup.
    pub goal_pile_size: usize,

    /// Fixed seed for a reproducible deck. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Delay the caller should wait before resetting or finalizing a
    /// resolved tie-break round.
    pub tie_break_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            goal_pile_size: DEFAULT_GOAL_PILE_SIZE,
            seed: None,
            tie_break_delay_ms: DEFAULT_TIE_BREAK_DELAY_MS,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal pile size.
    #[must_use]
    pub fn with_goal_pile_size(mut self, size: usize) -> Self {
        self.goal_pile_size = size;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tie-break presentation delay.
    #[must_use]
    pub fn with_tie_break_delay(mut self, delay: Duration) -> Self {
        self.tie_break_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The tie-break presentation delay.
    #[must_use]
    pub fn tie_break_delay(&self) -> Duration {
        Duration::from_millis(self.tie_break_delay_ms)
    }

    /// Check the configuration against the table limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal_pile_size == 0 || self.goal_pile_size > MAX_GOAL_PILE_SIZE {
            return Err(ConfigError::GoalPileSize {
                got: self.goal_pile_size,
                max: MAX_GOAL_PILE_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_constants() {
        assert_eq!(DECK_SIZE, 162);
        assert_eq!(RECYCLE_THRESHOLD, 36);
        assert_eq!(MAX_GOAL_PILE_SIZE, 76);
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.goal_pile_size, 20);
        assert_eq!(config.seed, None);
        assert_eq!(config.tie_break_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_goal_pile_size(5)
            .with_seed(9)
            .with_tie_break_delay(Duration::from_millis(250));

        assert_eq!(config.goal_pile_size, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tie_break_delay_ms, 250);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(SessionConfig::new().with_goal_pile_size(1).validate().is_ok());
        assert!(SessionConfig::new().with_goal_pile_size(76).validate().is_ok());
        assert_eq!(
            SessionConfig::new().with_goal_pile_size(0).validate(),
            Err(ConfigError::GoalPileSize { got: 0, max: 76 })
        );
        assert!(SessionConfig::new().with_goal_pile_size(77).validate().is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"goalPileSize": 12}"#).unwrap();
        assert_eq!(config.goal_pile_size, 12);
        assert_eq!(config.tie_break_delay_ms, DEFAULT_TIE_BREAK_DELAY_MS);
    }
}
