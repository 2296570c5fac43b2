//! Ticks for the horizontal axis.
//!
//! On an age axis ticks are plain day counts. On a timestamp axis a linear scale gets
//! calendar ticks (1 January, or month starts for short windows), while a log scale places
//! decade ticks in age space and maps them back onto timestamps.

use chrono::{Datelike, NaiveDate};

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::axis::labels::{LabelFormat, LabeledTicks};
use crate::axis::ticks::{TickSet, linear_ticks, log_ticks};
use crate::config::CHART;
use crate::domain::{AxisMode, Epoch, ScaleMode};
use crate::utils::TimeUtils;
use crate::utils::time_utils::{start_of_year_ms, utc_day_of, year_of};

/// Keeps every n-th tick so that at most `max_ticks` remain
fn thin(ticks: Vec<f64>, max_ticks: usize) -> Vec<f64> {
    if max_ticks == 0 || ticks.len() <= max_ticks {
        return ticks;
    }
    let stride = ticks.len().div_ceil(max_ticks);
    ticks.into_iter().step_by(stride).collect()
}

fn year_starts(min_ts: i64, max_ts: i64) -> Vec<f64> {
    (year_of(min_ts)..=year_of(max_ts))
        .filter_map(start_of_year_ms)
        .filter(|&ts| ts >= min_ts && ts <= max_ts)
        .map(|ts| ts as f64)
        .collect()
}

fn month_starts(min_ts: i64, max_ts: i64) -> Vec<f64> {
    let (Some(first_day), Some(last_day)) = (utc_day_of(min_ts), utc_day_of(max_ts)) else {
        return Vec::new();
    };
    let mut ticks = Vec::new();
    let mut cursor = NaiveDate::from_ymd_opt(first_day.year(), first_day.month(), 1);
    while let Some(month) = cursor {
        if month > last_day {
            break;
        }
        if let Some(midnight) = month.and_hms_opt(0, 0, 0) {
            let ts = midnight.and_utc().timestamp_millis();
            if ts >= min_ts && ts <= max_ts {
                ticks.push(ts as f64);
            }
        }
        cursor = month.checked_add_months(chrono::Months::new(1));
    }
    ticks
}

/// Whole-day ticks for windows too short to contain a month start
fn day_ticks(min_ts: i64, max_ts: i64, desired_count: usize) -> AnalysisResult<TickSet> {
    let first_day = min_ts.div_euclid(TimeUtils::MS_IN_D) as f64;
    let last_day = max_ts.div_euclid(TimeUtils::MS_IN_D) as f64 + 1.0;
    let by_day = linear_ticks(first_day, last_day, desired_count, false)?;
    let days: Vec<f64> = by_day
        .major
        .into_iter()
        .filter(|day| day.fract() == 0.0)
        .map(|day| day * TimeUtils::MS_IN_D as f64)
        .filter(|&ts| ts >= min_ts as f64 && ts <= max_ts as f64)
        .collect();
    Ok(TickSet::from_tiers(days, Vec::new(), Vec::new()))
}

/// Calendar ticks for a linear timestamp axis
fn calendar_ticks(min_ts: i64, max_ts: i64, desired_count: usize) -> AnalysisResult<LabeledTicks> {
    let max_ticks = CHART.ticks.max_year_ticks;
    let years = year_starts(min_ts, max_ts);
    if years.len() >= 2 {
        let ticks = TickSet::from_tiers(thin(years, max_ticks), Vec::new(), Vec::new());
        return Ok(LabeledTicks::new(ticks, LabelFormat::Year));
    }
    let months = TickSet::from_tiers(thin(month_starts(min_ts, max_ts), max_ticks), Vec::new(), Vec::new());
    if !months.is_empty() {
        return Ok(LabeledTicks::new(months, LabelFormat::Date));
    }
    Ok(LabeledTicks::new(day_ticks(min_ts, max_ts, desired_count)?, LabelFormat::Date))
}

/// Linear age ticks; ages start at 1 so nothing below is emitted
fn linear_age_ticks(min_age: f64, max_age: f64, desired_count: usize) -> AnalysisResult<TickSet> {
    let ticks = linear_ticks(min_age, max_age, desired_count, true)?;
    let ages = ticks.major.into_iter().filter(|&age| age >= 1.0).collect();
    Ok(TickSet::from_tiers(ages, Vec::new(), Vec::new()))
}

/// Ticks for the x axis spanning `[min_ts, max_ts]` (epoch ms).
/// `desired_count` applies to the linear scales that are not calendar based.
pub fn time_ticks(
    min_ts: i64,
    max_ts: i64,
    scale: ScaleMode,
    axis: AxisMode,
    epoch: Epoch,
    desired_count: usize,
) -> AnalysisResult<LabeledTicks> {
    if min_ts > max_ts {
        return Err(AnalysisError::DegenerateInput(format!(
            "time range starts after it ends ({min_ts} > {max_ts})"
        )));
    }

    let min_age = epoch.age_of(min_ts) as f64;
    let max_age = epoch.age_of(max_ts) as f64;

    let labeled = match (axis, scale) {
        (AxisMode::Age, ScaleMode::Linear) => {
            LabeledTicks::new(linear_age_ticks(min_age, max_age, desired_count)?, LabelFormat::Days)
        }
        (AxisMode::Age, ScaleMode::Log) => LabeledTicks::new(log_ticks(min_age, max_age)?, LabelFormat::Days),
        (AxisMode::Timestamp, ScaleMode::Linear) => calendar_ticks(min_ts, max_ts, desired_count)?,
        (AxisMode::Timestamp, ScaleMode::Log) => {
            let by_age = log_ticks(min_age, max_age)?;
            LabeledTicks::new(by_age.map(|age| epoch.timestamp_of_age_f64(age)), LabelFormat::Date)
        }
    };

    Ok(labeled)
}
