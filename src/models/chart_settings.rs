use serde::{Deserialize, Serialize};

use crate::config::{BandMultipliers, CHART};
use crate::domain::{AxisMode, Epoch, MetricKind, ScaleMode, TimePeriod};

/// Everything a chart view chooses: scales, axis meaning, window and envelopes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSettings {
    pub metric: MetricKind,
    pub value_scale: ScaleMode,
    pub time_scale: ScaleMode,
    pub axis: AxisMode,
    pub period: TimePeriod,
    /// "Now" for the display window and the trailing low; injected for determinism
    pub now_ms: i64,
    pub epoch: Epoch,
    pub bands: BandMultipliers,
    pub desired_linear_ticks: usize,
    /// Days the regression curve extends past the last observation
    pub projection_days: i64,
}

impl ChartSettings {
    pub fn new(metric: MetricKind, now_ms: i64) -> Self {
        ChartSettings {
            metric,
            value_scale: ScaleMode::Log,
            time_scale: ScaleMode::Linear,
            axis: AxisMode::Timestamp,
            period: TimePeriod::All,
            now_ms,
            epoch: Epoch::GENESIS,
            bands: BandMultipliers::default(),
            desired_linear_ticks: CHART.ticks.desired_linear_ticks,
            projection_days: CHART.projection_days,
        }
    }

    /// Lower bound of the display window
    pub fn window_start_ms(&self) -> Option<i64> {
        self.period.start_ms(self.now_ms)
    }
}
