//! Configuration module for the power-law metrics engine.

pub mod analysis;
pub mod chart;

pub mod debug;

// Re-export commonly used items
pub use analysis::{ANALYSIS, BandMultipliers};
pub use chart::CHART;
