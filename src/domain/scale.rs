use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::Epoch;

/// Axis scale, chosen independently for the value axis and the time axis
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ScaleMode {
    #[default]
    Linear,
    Log,
}

/// What the x coordinate of emitted points means
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum AxisMode {
    /// Raw epoch milliseconds
    #[default]
    Timestamp,
    /// Days since genesis
    Age,
}

impl AxisMode {
    /// x coordinate of an observation taken at `timestamp_ms`
    pub fn x_for(&self, timestamp_ms: i64, epoch: Epoch) -> f64 {
        match self {
            AxisMode::Timestamp => timestamp_ms as f64,
            AxisMode::Age => epoch.age_of(timestamp_ms) as f64,
        }
    }
}

/// Which metric a chart shows. Decides how value-axis labels read.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MetricKind {
    #[default]
    Price,
    HashRate,
    Volume,
}
