//! Scaled projections of a fitted power-law curve (regression line + envelopes).

use serde::{Deserialize, Serialize};

use crate::analysis::power_law::FitResult;
use crate::config::BandMultipliers;
use crate::domain::{AxisMode, Epoch, Point};
use crate::utils::TimeUtils;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BandSet {
    pub regression: Vec<Point>,
    pub support: Vec<Point>,
    pub resistance: Vec<Point>,
}

impl BandSet {
    /// Every y value across the three curves (for axis-range computation)
    pub fn all_values(&self) -> Vec<f64> {
        self.regression
            .iter()
            .chain(&self.support)
            .chain(&self.resistance)
            .map(|p| p.y)
            .collect()
    }
}

/// Projects `fit * multiplier` over `timestamps`.
///
/// The y value is always computed from the genesis-relative age of the original
/// timestamp; `axis` only decides what goes into x.
pub fn project(
    fit: &FitResult,
    timestamps: &[i64],
    multiplier: f64,
    axis: AxisMode,
    epoch: Epoch,
) -> Vec<Point> {
    timestamps
        .iter()
        .map(|&ts| {
            let age = epoch.age_of(ts).max(1);
            let y = fit.predict(age as f64) * multiplier;
            Point::new(axis.x_for(ts, epoch), y)
        })
        .collect()
}

/// Regression line plus support / resistance envelopes over the same domain
pub fn band_set(
    fit: &FitResult,
    timestamps: &[i64],
    multipliers: &BandMultipliers,
    axis: AxisMode,
    epoch: Epoch,
) -> BandSet {
    BandSet {
        regression: project(fit, timestamps, multipliers.regression, axis, epoch),
        support: project(fit, timestamps, multipliers.support, axis, epoch),
        resistance: project(fit, timestamps, multipliers.resistance, axis, epoch),
    }
}

/// Future timestamps after `last_timestamp`, every `step_days`, up to `days_ahead` days out.
/// Lets the curve be drawn past the last observation.
pub fn projection_domain(last_timestamp: i64, days_ahead: i64, step_days: i64) -> Vec<i64> {
    if days_ahead <= 0 || step_days <= 0 {
        return Vec::new();
    }
    (1..=days_ahead / step_days)
        .map(|k| last_timestamp + TimeUtils::days_to_ms(k * step_days))
        .collect()
}
