// File boundary for the binary: series input and JSON output
pub mod series_file;

pub use series_file::{load_series, write_json};
