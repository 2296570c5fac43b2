//! Price-vs-hashrate residual oscillator view.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisError, AnalysisResult, ResidualOscillator, price_hashrate_oscillator};
use crate::axis::{LabelFormat, LabeledTicks, linear_ticks, time_ticks};
use crate::domain::{Observation, Point};
use crate::models::chart_settings::ChartSettings;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OscillatorChartData {
    pub settings: ChartSettings,
    pub oscillator: ResidualOscillator,
    /// y is the residual in percent
    pub points: Vec<Point>,
    pub value_ticks: LabeledTicks,
    pub time_ticks: LabeledTicks,
}

pub struct OscillatorChart;

impl OscillatorChart {
    /// Residuals of price against the full-history price/hashrate fit, shown for `settings.period`.
    /// The value axis is always linear and symmetric around zero.
    pub fn build(
        price: &[Observation],
        hashrate: &[Observation],
        settings: &ChartSettings,
    ) -> AnalysisResult<OscillatorChartData> {
        let epoch = settings.epoch;
        let oscillator = price_hashrate_oscillator(price, hashrate, settings.window_start_ms())?;

        let (Some(first), Some(last), Some(stats)) =
            (oscillator.points.first(), oscillator.points.last(), oscillator.stats)
        else {
            return Err(AnalysisError::EmptySeries);
        };

        let points: Vec<Point> = oscillator
            .points
            .iter()
            .map(|p| Point::new(settings.axis.x_for(p.timestamp, epoch), p.residual_percent))
            .collect();

        let bound = stats.min.abs().max(stats.max.abs());
        let value_ticks = LabeledTicks::new(
            linear_ticks(-bound, bound, settings.desired_linear_ticks, false)?,
            LabelFormat::Percent,
        );
        let time_ticks = time_ticks(
            first.timestamp,
            last.timestamp,
            settings.time_scale,
            settings.axis,
            epoch,
            settings.desired_linear_ticks,
        )?;

        Ok(OscillatorChartData {
            settings: settings.clone(),
            oscillator,
            points,
            value_ticks,
            time_ticks,
        })
    }
}
