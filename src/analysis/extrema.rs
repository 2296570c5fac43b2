//! All-time-high and trailing-window low markers.
//!
//! Ties always resolve to the earliest observation (strict comparisons, single pass).

use serde::{Deserialize, Serialize};

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::config::ANALYSIS;
use crate::domain::{Epoch, Observation};
use crate::utils::TimeUtils;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ExtremumPoint {
    pub value: f64,
    pub timestamp: i64,
    /// Days since genesis, for charts drawn on an age axis
    pub age: i64,
}

impl ExtremumPoint {
    fn from_observation(obs: &Observation, epoch: Epoch) -> Self {
        ExtremumPoint {
            value: obs.value,
            timestamp: obs.timestamp,
            age: epoch.age_of(obs.timestamp),
        }
    }
}

fn first_extremum<'a, I>(observations: I, better: fn(f64, f64) -> bool) -> Option<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut best: Option<&Observation> = None;
    for obs in observations {
        match best {
            Some(current) if !better(obs.value, current.value) => {}
            _ => best = Some(obs),
        }
    }
    best
}

fn greater(candidate: f64, current: f64) -> bool {
    candidate > current
}

fn less(candidate: f64, current: f64) -> bool {
    candidate < current
}

/// Highest value of the whole series ("all-time high")
pub fn all_time_high(series: &[Observation], epoch: Epoch) -> AnalysisResult<ExtremumPoint> {
    first_extremum(series, greater)
        .map(|obs| ExtremumPoint::from_observation(obs, epoch))
        .ok_or(AnalysisError::EmptySeries)
}

/// Lowest value of the whole series
pub fn global_low(series: &[Observation], epoch: Epoch) -> AnalysisResult<ExtremumPoint> {
    first_extremum(series, less)
        .map(|obs| ExtremumPoint::from_observation(obs, epoch))
        .ok_or(AnalysisError::EmptySeries)
}

fn window_start(now_ms: i64, window_days: i64) -> i64 {
    now_ms.saturating_sub(TimeUtils::days_to_ms(window_days))
}

/// Lowest value among points with `timestamp >= now - window_days`.
/// An empty window falls back to the global low.
pub fn windowed_low(
    series: &[Observation],
    now_ms: i64,
    window_days: i64,
    epoch: Epoch,
) -> AnalysisResult<ExtremumPoint> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries);
    }
    let start = window_start(now_ms, window_days);
    match first_extremum(series.iter().filter(|obs| obs.timestamp >= start), less) {
        Some(obs) => Ok(ExtremumPoint::from_observation(obs, epoch)),
        None => global_low(series, epoch),
    }
}

/// Trailing 365-day low
pub fn one_year_low(series: &[Observation], now_ms: i64, epoch: Epoch) -> AnalysisResult<ExtremumPoint> {
    windowed_low(series, now_ms, ANALYSIS.extremum.low_window_days, epoch)
}
