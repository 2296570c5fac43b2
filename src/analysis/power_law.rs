//! Power-law fitting by ordinary least squares in log-log space.
//!
//! `y = C * x^E` becomes `ln y = ln C + E * ln x`; the straight line is fitted from
//! running sums (Σx, Σy, Σxy, Σx², Σy²) and back-transformed.
//! Points with a non-positive coordinate are excluded (never clamped) so coefficients
//! stay reproducible across implementations.

use serde::{Deserialize, Serialize};

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::config::ANALYSIS;
#[allow(unused_imports)]
use crate::config::debug::PRINT_FIT_SUMMARY;
use crate::domain::{Epoch, Observation};

/// `value ≈ coefficient * x^exponent`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub coefficient: f64,
    pub exponent: f64,
    pub r_squared: f64,
    /// Number of (positive, finite) points the fit was computed from
    pub sample_count: usize,
}

impl FitResult {
    /// Curve value at `x`. `x` is expected to be positive.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }
}

/// What the independent variable of a series fit is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regressor<'a> {
    /// Days since the given epoch (the usual power-law chart)
    Age(Epoch),
    /// Caller-supplied values, one per observation (e.g. hashrate on the same day as each price)
    Raw(&'a [f64]),
}

impl Regressor<'_> {
    /// `(independent, value)` pairs for `series`
    ///
    /// # Errors
    /// * `DegenerateInput` when raw values do not pair up one-to-one with the observations
    pub fn pairs(&self, series: &[Observation]) -> AnalysisResult<Vec<(f64, f64)>> {
        match self {
            Regressor::Age(epoch) => Ok(series
                .iter()
                .map(|obs| (epoch.age_of(obs.timestamp) as f64, obs.value))
                .collect()),
            Regressor::Raw(values) => {
                if values.len() != series.len() {
                    return Err(AnalysisError::DegenerateInput(format!(
                        "{} regressor values for {} observations",
                        values.len(),
                        series.len()
                    )));
                }
                Ok(values.iter().zip(series).map(|(&x, obs)| (x, obs.value)).collect())
            }
        }
    }
}

#[inline]
fn is_valid(x: f64, y: f64) -> bool {
    x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0
}

/// Fits `y ≈ C * x^E` to `(x, y)` pairs.
///
/// # Errors
/// * `InsufficientData` when fewer than two pairs survive the positivity filter
/// * `DegenerateInput` when every pair was filtered out, when all `x` are equal,
///   or when the back-transformed curve is not finite
pub fn fit_power_law(pairs: &[(f64, f64)]) -> AnalysisResult<FitResult> {
    let required = ANALYSIS.min_fit_points;
    if pairs.len() < required {
        return Err(AnalysisError::InsufficientData {
            required,
            actual: pairs.len(),
        });
    }

    let logs: Vec<(f64, f64)> = pairs
        .iter()
        .filter(|&&(x, y)| is_valid(x, y))
        .map(|&(x, y)| (x.ln(), y.ln()))
        .collect();

    if logs.is_empty() {
        return Err(AnalysisError::DegenerateInput(
            "all values are non-positive".to_string(),
        ));
    }
    if logs.len() < required {
        return Err(AnalysisError::InsufficientData {
            required,
            actual: logs.len(),
        });
    }

    let first_x = logs[0].0;
    if logs.iter().all(|&(lx, _)| lx == first_x) {
        return Err(AnalysisError::DegenerateInput(
            "independent variable has zero variance".to_string(),
        ));
    }

    let n = logs.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx, mut sum_yy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for &(lx, ly) in &logs {
        sum_x += lx;
        sum_y += ly;
        sum_xy += lx * ly;
        sum_xx += lx * lx;
        sum_yy += ly * ly;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator <= 0.0 {
        return Err(AnalysisError::DegenerateInput(
            "regression denominator is not positive".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;
    let first_y = logs[0].1;
    let r_squared = if logs.iter().all(|&(_, ly)| ly == first_y) {
        // Flat line through identical values is an exact fit
        1.0
    } else {
        let covariance = sum_xy - n * mean_x * mean_y;
        let variance_x = sum_xx - n * mean_x * mean_x;
        let variance_y = sum_yy - n * mean_y * mean_y;
        let ratio = (covariance * covariance) / (variance_x * variance_y);
        if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 1.0 }
    };

    let fit = FitResult {
        coefficient: intercept.exp(),
        exponent: slope,
        r_squared,
        sample_count: logs.len(),
    };

    if !fit.coefficient.is_finite() || fit.coefficient <= 0.0 || !fit.exponent.is_finite() {
        return Err(AnalysisError::DegenerateInput(format!(
            "fit is not finite (coefficient {}, exponent {})",
            fit.coefficient, fit.exponent
        )));
    }

    #[cfg(debug_assertions)]
    if PRINT_FIT_SUMMARY {
        log::debug!(
            "Power-law fit: C={:e} E={:.6} r²={:.6} from {} of {} points",
            fit.coefficient,
            fit.exponent,
            fit.r_squared,
            fit.sample_count,
            pairs.len()
        );
    }

    Ok(fit)
}

/// Fits `series` against the independent variable chosen by `regressor`
pub fn fit_series(series: &[Observation], regressor: Regressor<'_>) -> AnalysisResult<FitResult> {
    fit_power_law(&regressor.pairs(series)?)
}

/// Fits a metric against its genesis-relative age
pub fn fit_by_age(series: &[Observation], epoch: Epoch) -> AnalysisResult<FitResult> {
    fit_series(series, Regressor::Age(epoch))
}
