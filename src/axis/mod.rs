// Axis ticks and labels. Emits data only; pixel mapping belongs to the renderer.
pub mod labels;
pub mod ticks;
pub mod time_ticks;

pub use labels::{LabelFormat, LabeledTicks, TickLabel};
pub use ticks::{TickSet, linear_ticks, log_ticks, ticks_for};
pub use time_ticks::time_ticks;
