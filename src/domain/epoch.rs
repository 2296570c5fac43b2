//! Genesis-relative day index ("age") used as the regression variable for every metric.

use serde::{Deserialize, Serialize};

use crate::config::ANALYSIS;
use crate::utils::TimeUtils;

/// Reference instant ages are measured from.
/// Passed explicitly so tests can swap in another epoch without touching shared state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch {
    pub genesis_ms: i64,
}

impl Default for Epoch {
    fn default() -> Self {
        Self::GENESIS
    }
}

impl Epoch {
    /// 2009-01-03T00:00:00Z
    pub const GENESIS: Epoch = Epoch {
        genesis_ms: ANALYSIS.genesis_ms,
    };

    pub const fn new(genesis_ms: i64) -> Self {
        Epoch { genesis_ms }
    }

    /// Whole days since genesis, counting the genesis day as 1. Never below 1 so `ln(age)` is defined.
    pub fn age_of(&self, timestamp_ms: i64) -> i64 {
        let elapsed = timestamp_ms.saturating_sub(self.genesis_ms);
        (elapsed.div_euclid(TimeUtils::MS_IN_D) + 1).max(1)
    }

    /// First millisecond of the day with the given age (inverse of `age_of` up to the day).
    pub fn timestamp_of_age(&self, age: i64) -> i64 {
        self.genesis_ms
            .saturating_add((age.max(1) - 1).saturating_mul(TimeUtils::MS_IN_D))
    }

    /// Fractional variant for log-axis ticks that fall between whole days.
    pub fn timestamp_of_age_f64(&self, age: f64) -> f64 {
        self.genesis_ms as f64 + (age.max(1.0) - 1.0) * TimeUtils::MS_IN_D as f64
    }
}

/// Age against the process-wide genesis constant
pub fn age_of(timestamp_ms: i64) -> i64 {
    Epoch::GENESIS.age_of(timestamp_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: i64 = 1_230_940_800_000;

    #[test]
    fn test_genesis_day_is_age_one() {
        assert_eq!(age_of(GENESIS), 1);
        assert_eq!(age_of(GENESIS + TimeUtils::MS_IN_D - 1), 1);
        assert_eq!(age_of(GENESIS + TimeUtils::MS_IN_D), 2);
    }

    #[test]
    fn test_before_genesis_clamps_to_one() {
        assert_eq!(age_of(GENESIS - 1), 1);
        assert_eq!(age_of(0), 1);
        assert_eq!(age_of(i64::MIN), 1);
    }

    #[test]
    fn test_substitute_epoch() {
        let epoch = Epoch::new(0);
        assert_eq!(epoch.age_of(10 * TimeUtils::MS_IN_D), 11);
        assert_eq!(epoch.timestamp_of_age(11), 10 * TimeUtils::MS_IN_D);
    }

    #[test]
    fn test_timestamp_of_age_round_trips_to_same_day() {
        let epoch = Epoch::GENESIS;
        for age in [1, 2, 365, 5000] {
            assert_eq!(epoch.age_of(epoch.timestamp_of_age(age)), age);
        }
    }
}
