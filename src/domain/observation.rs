use serde::{Deserialize, Serialize};

/// One already-normalized sample of a metric.
/// Series are plain `&[Observation]`, ascending by timestamp, never mutated here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub value: f64,
}

impl Observation {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Observation { timestamp, value }
    }
}

/// A drawable coordinate. `x` is a timestamp or an age depending on the axis mode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}
