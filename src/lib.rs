#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod axis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

// Re-export commonly used types
pub use analysis::{AnalysisError, AnalysisResult, FitResult, fit_power_law};
pub use domain::{AxisMode, Epoch, MetricKind, Observation, Point, ScaleMode, TimePeriod};
pub use models::{ChartSettings, OscillatorChart, OscillatorChartData, PowerLawChart, PowerLawChartData};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON array of `{ "timestamp": <ms>, "value": <f64> }` for the charted metric
    #[arg(long)]
    pub series: PathBuf,

    /// Metric shown by `--series` (price | hashrate | volume)
    #[arg(long, default_value_t = MetricKind::Price)]
    pub metric: MetricKind,

    /// Hashrate series; when given, the price/hashrate residual oscillator is emitted too
    #[arg(long)]
    pub hashrate: Option<PathBuf>,

    #[arg(long, default_value_t = ScaleMode::Log)]
    pub value_scale: ScaleMode,

    #[arg(long, default_value_t = ScaleMode::Linear)]
    pub time_scale: ScaleMode,

    /// What point x coordinates mean (timestamp | age)
    #[arg(long, default_value_t = AxisMode::Timestamp)]
    pub axis: AxisMode,

    /// Display window (1y | 2y | 4y | all)
    #[arg(long, default_value_t = TimePeriod::All)]
    pub period: TimePeriod,

    /// "Now" in epoch ms; defaults to the current time
    #[arg(long)]
    pub now: Option<i64>,

    /// Days to extend the regression bands past the last observation
    #[arg(long, default_value_t = config::CHART.projection_days)]
    pub projection_days: i64,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Cli {
    pub fn chart_settings(&self) -> ChartSettings {
        let now_ms = self.now.unwrap_or_else(utils::time_utils::utc_now_as_timestamp_ms);
        ChartSettings {
            value_scale: self.value_scale,
            time_scale: self.time_scale,
            axis: self.axis,
            period: self.period,
            projection_days: self.projection_days,
            ..ChartSettings::new(self.metric, now_ms)
        }
    }
}

/// Everything the binary prints
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub chart: PowerLawChartData,
    /// Present when a hashrate series was given and the oscillator could be built
    pub oscillator: Option<OscillatorChartData>,
    /// Why the oscillator is missing despite a hashrate series
    pub oscillator_unavailable: Option<String>,
}

/// Builds the report for already-loaded series.
/// An oscillator failure is reported in the output rather than failing the whole run.
pub fn build_report(
    series: &[Observation],
    hashrate: Option<&[Observation]>,
    settings: &ChartSettings,
) -> AnalysisResult<MetricsReport> {
    let chart = PowerLawChart::build(series, settings)?;

    let (oscillator, oscillator_unavailable) = match hashrate {
        None => (None, None),
        Some(hashrate) => {
            let oscillator_settings = ChartSettings {
                value_scale: ScaleMode::Linear,
                ..settings.clone()
            };
            match OscillatorChart::build(series, hashrate, &oscillator_settings) {
                Ok(osc) => (Some(osc), None),
                Err(e) => {
                    log::warn!("Residual oscillator unavailable: {}", e);
                    (None, Some(e.to_string()))
                }
            }
        }
    };

    Ok(MetricsReport {
        chart,
        oscillator,
        oscillator_unavailable,
    })
}

/// Loads the files named on the command line and builds the report
pub fn run(cli: &Cli) -> Result<MetricsReport> {
    let series = data::load_series(&cli.series)?;
    let hashrate = cli.hashrate.as_deref().map(data::load_series).transpose()?;
    let settings = cli.chart_settings();

    log::info!(
        "Charting {} observations of {} ({} / {} / {})",
        series.len(),
        settings.metric,
        settings.period,
        settings.value_scale,
        settings.axis
    );

    build_report(&series, hashrate.as_deref(), &settings)
        .context(format!("Failed to chart {}", cli.series.display()))
}
