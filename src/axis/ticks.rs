//! Scale-aware axis tick generation.
//!
//! Linear axes get "nice" steps from {1, 2, 5} × 10^k. Log axes get a three-tier
//! decade subdivision so the renderer can style gridlines differently:
//! major at 1×10^i, intermediate at {2, 5}×10^i, minor at {3, 4, 6, 7, 8, 9}×10^i.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::config::CHART;
#[allow(unused_imports)]
use crate::config::debug::PRINT_TICK_GENERATION;
use crate::domain::ScaleMode;
use crate::utils::maths_utils::scaled_power_of_ten;

const NICE_MULTIPLIERS: [i64; 3] = [5, 2, 1];
const INTERMEDIATE_MULTIPLIERS: [i64; 2] = [2, 5];
const MAX_TICK_INDEX: f64 = (1_i64 << 52) as f64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TickSet {
    pub major: Vec<f64>,
    pub intermediate: Vec<f64>,
    pub minor: Vec<f64>,
    /// Union of the three tiers, ascending, without duplicates
    pub all: Vec<f64>,
}

impl TickSet {
    pub fn from_tiers(major: Vec<f64>, intermediate: Vec<f64>, minor: Vec<f64>) -> Self {
        let all = major
            .iter()
            .chain(&intermediate)
            .chain(&minor)
            .copied()
            .sorted_by(f64::total_cmp)
            .dedup()
            .collect();
        TickSet {
            major,
            intermediate,
            minor,
            all,
        }
    }

    /// Applies `f` to every tick of every tier (used to move age-space ticks onto a time axis)
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let apply = |ticks: &[f64]| ticks.iter().map(|&t| f(t)).collect::<Vec<f64>>();
        TickSet::from_tiers(apply(&self.major), apply(&self.intermediate), apply(&self.minor))
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }
}

/// A step expressed as `multiplier × 10^exponent` so ticks can be computed without drift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceStep {
    pub multiplier: i64,
    pub exponent: i32,
}

impl NiceStep {
    pub fn value(&self) -> f64 {
        scaled_power_of_ten(self.multiplier as f64, self.exponent)
    }

    /// `k × step`, computed in one rounding
    pub fn nth(&self, k: i64) -> f64 {
        scaled_power_of_ten((k * self.multiplier) as f64, self.exponent)
    }
}

/// Largest value of the form {1, 2, 5} × 10^k that does not exceed `raw_step`
pub fn nice_step(raw_step: f64) -> NiceStep {
    let mut exponent = raw_step.log10().floor() as i32;
    // log10 can land a hair off at exact powers of ten
    if scaled_power_of_ten(1.0, exponent + 1) <= raw_step {
        exponent += 1;
    } else if scaled_power_of_ten(1.0, exponent) > raw_step {
        exponent -= 1;
    }
    for multiplier in NICE_MULTIPLIERS {
        if scaled_power_of_ten(multiplier as f64, exponent) <= raw_step {
            return NiceStep {
                multiplier,
                exponent,
            };
        }
    }
    NiceStep {
        multiplier: 1,
        exponent,
    }
}

fn checked_bounds(min: f64, max: f64) -> AnalysisResult<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() {
        return Err(AnalysisError::DegenerateInput(format!(
            "axis range [{min}, {max}] is not finite"
        )));
    }
    Ok(if min <= max { (min, max) } else { (max, min) })
}

/// Evenly spaced ticks covering `[min, max]`, extended outward to whole steps.
/// Every linear tick is `major`. With `non_negative`, ticks below zero are dropped.
pub fn linear_ticks(min: f64, max: f64, desired_count: usize, non_negative: bool) -> AnalysisResult<TickSet> {
    let (min, max) = checked_bounds(min, max)?;

    let mut range = max - min;
    if range == 0.0 {
        range = if max.abs() > 0.0 { max.abs() } else { 1.0 };
    }
    let intervals = desired_count.max(2) - 1;
    let raw_step = range / intervals as f64;
    if !raw_step.is_finite() || raw_step < f64::MIN_POSITIVE {
        return Err(AnalysisError::DegenerateInput(format!(
            "axis range [{min}, {max}] has no usable step"
        )));
    }
    let step = nice_step(raw_step);
    let step_value = step.value();

    // Tick indices must stay exact integers in f64 and must not overflow `k * multiplier`
    let (first, last) = ((min / step_value).floor(), (max / step_value).ceil());
    if first.abs() > MAX_TICK_INDEX || last.abs() > MAX_TICK_INDEX {
        return Err(AnalysisError::DegenerateInput(format!(
            "axis range [{min}, {max}] is too narrow for its magnitude"
        )));
    }
    let (first, last) = (first as i64, last as i64);

    let major: Vec<f64> = (first..=last)
        .map(|k| step.nth(k))
        .filter(|&t| !non_negative || t >= 0.0)
        .collect();

    #[cfg(debug_assertions)]
    if PRINT_TICK_GENERATION {
        log::debug!(
            "Linear ticks [{}, {}]: step {} -> {} ticks",
            min,
            max,
            step_value,
            major.len()
        );
    }

    Ok(TickSet::from_tiers(major, Vec::new(), Vec::new()))
}

/// Base-10 logarithmic ticks for `[min, max]`. Requires `min > 0`.
pub fn log_ticks(min: f64, max: f64) -> AnalysisResult<TickSet> {
    let (min, max) = checked_bounds(min, max)?;
    if min <= 0.0 {
        return Err(AnalysisError::DegenerateInput(format!(
            "log axis needs a positive minimum, got {min}"
        )));
    }

    let margin = CHART.ticks.log_margin;
    let lower = min * (1.0 - margin);
    let upper = max * (1.0 + margin);

    let first_decade = min.log10().floor() as i32 - 1;
    let last_decade = max.log10().ceil() as i32 + 1;

    let mut major = Vec::new();
    let mut intermediate = Vec::new();
    let mut minor = Vec::new();

    for decade in first_decade..=last_decade {
        for multiplier in 1..=9_i64 {
            let tick = scaled_power_of_ten(multiplier as f64, decade);
            if tick < lower || tick > upper {
                continue;
            }
            if multiplier == 1 {
                major.push(tick);
            } else if INTERMEDIATE_MULTIPLIERS.contains(&multiplier) {
                intermediate.push(tick);
            } else {
                minor.push(tick);
            }
        }
    }

    #[cfg(debug_assertions)]
    if PRINT_TICK_GENERATION {
        log::debug!(
            "Log ticks [{}, {}]: decades {}..={} -> {} major, {} intermediate, {} minor",
            min,
            max,
            first_decade,
            last_decade,
            major.len(),
            intermediate.len(),
            minor.len()
        );
    }

    Ok(TickSet::from_tiers(major, intermediate, minor))
}

/// Dispatches on the axis scale
pub fn ticks_for(scale: ScaleMode, min: f64, max: f64, desired_count: usize, non_negative: bool) -> AnalysisResult<TickSet> {
    match scale {
        ScaleMode::Linear => linear_ticks(min, max, desired_count, non_negative),
        ScaleMode::Log => log_ticks(min, max),
    }
}
