// Power-law analytics: fitting, envelopes, residuals, extrema, alignment
pub mod alignment;
pub mod bands;
pub mod errors;
pub mod extrema;
pub mod power_law;
pub mod residuals;

// Re-export commonly used types
pub use alignment::{AlignedPair, align_by_day};
pub use bands::{BandSet, band_set, project, projection_domain};
pub use errors::{AnalysisError, AnalysisResult};
pub use extrema::{ExtremumPoint, all_time_high, global_low, one_year_low, windowed_low};
pub use power_law::{FitResult, Regressor, fit_by_age, fit_power_law, fit_series};
pub use residuals::{ResidualOscillator, ResidualPoint, ResidualStats, price_hashrate_oscillator, residuals};
