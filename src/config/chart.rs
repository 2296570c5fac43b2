//! Axis and tick configuration consumed by the chart assembly layer

pub struct TickConfig {
    // Target number of ticks on a linear axis (actual count follows the nice step)
    pub desired_linear_ticks: usize,
    // Relative tolerance when deciding whether a log tick sits inside [min, max]
    pub log_margin: f64,
    // Above this many yearly ticks on a timestamp axis, thin them out
    pub max_year_ticks: usize,
}

pub struct ChartConfig {
    pub ticks: TickConfig,
    // Days the regression curve is extended past the last observation
    pub projection_days: i64,
    // Spacing of the projected points, in days
    pub projection_step_days: i64,
}

pub const CHART: ChartConfig = ChartConfig {
    ticks: TickConfig {
        desired_linear_ticks: 6,
        log_margin: 1e-9,
        max_year_ticks: 12,
    },
    projection_days: 0,
    projection_step_days: 7,
};
