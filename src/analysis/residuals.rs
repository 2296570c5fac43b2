//! Price-vs-hashrate residual oscillator.
//!
//! One cross-series power law (`price ≈ a * hashrate^b`) is fitted over the entire aligned
//! history, so the curve does not move when the displayed period changes. Residuals are
//! then reported only for the displayed window.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::analysis::alignment::{AlignedPair, align_by_day};
use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::analysis::power_law::{FitResult, Regressor, fit_series};
use crate::config::ANALYSIS;
use crate::domain::Observation;
use crate::utils::maths_utils::{get_min_max, percent_deviation};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ResidualPoint {
    pub timestamp: i64,
    /// `(actual - predicted) / predicted * 100`; positive means above the curve
    pub residual_percent: f64,
}

/// Summary of the displayed residuals, used for ±1σ guide lines
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ResidualStats {
    pub mean: f64,
    /// Sample standard deviation (0 for a single point)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResidualOscillator {
    /// Cross fit over the full aligned history
    pub fit: FitResult,
    /// Aligned days available to the fit
    pub aligned_pairs: usize,
    pub points: Vec<ResidualPoint>,
    /// `None` when the window holds no residuals
    pub stats: Option<ResidualStats>,
}

/// Residual of every pair against `fit`, with the secondary metric as regressor.
/// Pairs whose prediction is not a positive finite number are skipped.
pub fn residuals(pairs: &[AlignedPair], fit: &FitResult) -> Vec<ResidualPoint> {
    pairs
        .iter()
        .filter_map(|pair| {
            let (independent, actual) = pair.as_regression_pair();
            if independent <= 0.0 {
                return None;
            }
            let predicted = fit.predict(independent);
            if !predicted.is_finite() || predicted <= 0.0 {
                return None;
            }
            let residual_percent = percent_deviation(actual, predicted);
            residual_percent.is_finite().then_some(ResidualPoint {
                timestamp: pair.timestamp,
                residual_percent,
            })
        })
        .collect()
}

pub fn residual_stats(points: &[ResidualPoint]) -> Option<ResidualStats> {
    let values: Vec<f64> = points.iter().map(|p| p.residual_percent).collect();
    let (min, max) = get_min_max(&values)?;
    let mean: f64 = values.iter().mean();
    let std_dev: f64 = if values.len() > 1 { values.iter().std_dev() } else { 0.0 };
    Some(ResidualStats {
        mean,
        std_dev,
        min,
        max,
    })
}

/// Fits `price ≈ a * hashrate^b` over all aligned days and reports residuals for days
/// at or after `window_start_ms` (all days when `None`).
///
/// # Errors
/// * `EmptySeries` when either series is empty
/// * `InsufficientData` when fewer than `ANALYSIS.residual.min_aligned_pairs` days align;
///   the oscillator is reported unavailable instead of drawing a low-confidence fit
/// * any fit error from [`fit_series`]
pub fn price_hashrate_oscillator(
    price: &[Observation],
    hashrate: &[Observation],
    window_start_ms: Option<i64>,
) -> AnalysisResult<ResidualOscillator> {
    let aligned = align_by_day(price, hashrate)?;

    let required = ANALYSIS.residual.min_aligned_pairs;
    if aligned.len() < required {
        return Err(AnalysisError::InsufficientData {
            required,
            actual: aligned.len(),
        });
    }

    let response: Vec<Observation> = aligned.iter().map(|p| Observation::new(p.timestamp, p.primary)).collect();
    let regressor: Vec<f64> = aligned.iter().map(|p| p.secondary).collect();
    let fit = fit_series(&response, Regressor::Raw(&regressor))?;

    let displayed: Vec<AlignedPair> = match window_start_ms {
        Some(start) => aligned.iter().filter(|p| p.timestamp >= start).copied().collect(),
        None => aligned.clone(),
    };
    let points = residuals(&displayed, &fit);
    let stats = residual_stats(&points);

    Ok(ResidualOscillator {
        fit,
        aligned_pairs: aligned.len(),
        points,
        stats,
    })
}
