//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All of them are further gated by `cfg(debug_assertions)`.

/// Emit coefficient / exponent / r² after every successful power-law fit.
pub const PRINT_FIT_SUMMARY: bool = false;

/// Emit aligned/dropped counts whenever two series are joined by calendar day.
pub const PRINT_ALIGNMENT_STATS: bool = false;

/// Emit the chosen step and decade span for every generated tick set.
pub const PRINT_TICK_GENERATION: bool = false;

/// Emit a one-line summary per assembled chart (points, bands, markers).
pub const PRINT_CHART_ASSEMBLY: bool = true;
