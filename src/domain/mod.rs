// Domain types and value objects
pub mod epoch;
pub mod observation;
pub mod period;
pub mod scale;

// Re-export commonly used types
pub use epoch::{Epoch, age_of};
pub use observation::{Observation, Point};
pub use period::{TimePeriod, filter_period};
pub use scale::{AxisMode, MetricKind, ScaleMode};
