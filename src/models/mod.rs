// Chart assembly: composes the analysis and axis modules into render-ready contracts.
// These modules contain pure logic; drawing belongs to the caller.

pub mod chart_settings;
pub mod oscillator_chart;
pub mod power_law_chart;

// Re-export key types for convenience
pub use chart_settings::ChartSettings;
pub use oscillator_chart::{OscillatorChart, OscillatorChartData};
pub use power_law_chart::{PowerLawChart, PowerLawChartData};
