//! Joins two differently-sampled series on calendar day.
//!
//! Sources sample at different times of day, so exact timestamp equality is useless;
//! the UTC date is the join key. Unmatched days are dropped silently.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::errors::{AnalysisError, AnalysisResult};
#[allow(unused_imports)]
use crate::config::debug::PRINT_ALIGNMENT_STATS;
use crate::domain::Observation;
use crate::utils::time_utils::utc_day_of;

/// One day present in both series
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AlignedPair {
    /// Timestamp of the driving-series observation
    pub timestamp: i64,
    /// Driving-series value
    pub primary: f64,
    /// Matched value from the other series
    pub secondary: f64,
}

impl AlignedPair {
    /// `(secondary, primary)`: the other metric is the regressor, the driving one the response
    pub fn as_regression_pair(&self) -> (f64, f64) {
        (self.secondary, self.primary)
    }
}

/// First observation per day wins
fn first_value_per_day(series: &[Observation]) -> HashMap<NaiveDate, f64> {
    let mut by_day: HashMap<NaiveDate, f64> = HashMap::with_capacity(series.len());
    for obs in series {
        if let Some(day) = utc_day_of(obs.timestamp) {
            by_day.entry(day).or_insert(obs.value);
        }
    }
    by_day
}

/// Pairs observations of `driving` and `other` that fall on the same UTC calendar day,
/// in the order of `driving`. Repeated days in `driving` keep only their first observation.
pub fn align_by_day(driving: &[Observation], other: &[Observation]) -> AnalysisResult<Vec<AlignedPair>> {
    if driving.is_empty() || other.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }

    let lookup = first_value_per_day(other);
    let mut last_day: Option<NaiveDate> = None;
    let mut aligned = Vec::with_capacity(driving.len().min(other.len()));

    for obs in driving {
        let Some(day) = utc_day_of(obs.timestamp) else {
            continue;
        };
        // Input is sorted, so a repeated day can only be the previous one
        if last_day == Some(day) {
            continue;
        }
        last_day = Some(day);
        if let Some(&secondary) = lookup.get(&day) {
            aligned.push(AlignedPair {
                timestamp: obs.timestamp,
                primary: obs.value,
                secondary,
            });
        }
    }

    #[cfg(debug_assertions)]
    if PRINT_ALIGNMENT_STATS {
        log::debug!(
            "Aligned {} days ({} driving, {} other observations)",
            aligned.len(),
            driving.len(),
            other.len()
        );
    }

    Ok(aligned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    const DAY0: i64 = 1_672_531_200_000; // 2023-01-01T00:00:00Z

    fn day(n: i64) -> i64 {
        DAY0 + n * TimeUtils::MS_IN_D
    }

    #[test]
    fn test_pairs_across_time_of_day_offsets() {
        let a: Vec<Observation> = (0..5).map(|d| Observation::new(day(d), d as f64)).collect();
        let b: Vec<Observation> = (0..5)
            .map(|d| Observation::new(day(d) + 12 * TimeUtils::MS_IN_H, 100.0 + d as f64))
            .collect();

        let aligned = align_by_day(&a, &b).unwrap();
        assert_eq!(aligned.len(), 5);
        for (d, pair) in aligned.iter().enumerate() {
            assert_eq!(pair.timestamp, day(d as i64));
            assert_eq!(pair.primary, d as f64);
            assert_eq!(pair.secondary, 100.0 + d as f64);
        }
    }

    #[test]
    fn test_unmatched_days_dropped() {
        let a = vec![
            Observation::new(day(0), 1.0),
            Observation::new(day(1), 2.0),
            Observation::new(day(3), 4.0),
        ];
        let b = vec![Observation::new(day(1), 20.0), Observation::new(day(2), 30.0), Observation::new(day(3), 40.0)];
        let aligned = align_by_day(&a, &b).unwrap();
        let got: Vec<(f64, f64)> = aligned.iter().map(|p| (p.primary, p.secondary)).collect();
        assert_eq!(got, vec![(2.0, 20.0), (4.0, 40.0)]);
    }

    #[test]
    fn test_first_seen_per_day_is_authoritative() {
        let a = vec![
            Observation::new(day(0) + TimeUtils::MS_IN_H, 1.0),
            Observation::new(day(0) + 2 * TimeUtils::MS_IN_H, 9.0),
        ];
        let b = vec![
            Observation::new(day(0) + 3 * TimeUtils::MS_IN_H, 10.0),
            Observation::new(day(0) + 4 * TimeUtils::MS_IN_H, 90.0),
        ];
        let aligned = align_by_day(&a, &b).unwrap();
        assert_eq!(aligned.len(), 1);
        assert_eq!(aligned[0].primary, 1.0);
        assert_eq!(aligned[0].secondary, 10.0);
        assert_eq!(aligned[0].as_regression_pair(), (10.0, 1.0));
    }

    #[test]
    fn test_empty_series() {
        let a = vec![Observation::new(day(0), 1.0)];
        assert_eq!(align_by_day(&a, &[]), Err(AnalysisError::EmptySeries));
        assert_eq!(align_by_day(&[], &a), Err(AnalysisError::EmptySeries));
    }
}
