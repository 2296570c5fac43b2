//! Analysis and computation configuration

/// Envelope multipliers applied to the central power-law curve
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BandMultipliers {
    pub regression: f64,
    pub support: f64,
    pub resistance: f64,
}

impl Default for BandMultipliers {
    fn default() -> Self {
        ANALYSIS.bands
    }
}

/// Settings for the price-vs-hashrate residual oscillator
pub struct ResidualSettings {
    // Below this many aligned (price, hashrate) days the cross fit is reported as unavailable
    // rather than drawn from a handful of points.
    pub min_aligned_pairs: usize,
}

/// Settings for the ATH / trailing low markers
pub struct ExtremumSettings {
    pub low_window_days: i64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Reference instant all ages are measured from (Bitcoin genesis day, 2009-01-03 UTC)
    pub genesis_ms: i64,
    // Minimum points a log-log regression needs
    pub min_fit_points: usize,

    // Sub-groups
    pub bands: BandMultipliers,
    pub residual: ResidualSettings,
    pub extremum: ExtremumSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    genesis_ms: 1_230_940_800_000,
    min_fit_points: 2,

    bands: BandMultipliers {
        regression: 1.0,
        support: 0.4,
        resistance: 2.2,
    },

    residual: ResidualSettings {
        min_aligned_pairs: 10,
    },

    extremum: ExtremumSettings {
        low_window_days: 365,
    },
};
