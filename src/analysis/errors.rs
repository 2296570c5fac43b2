use thiserror::Error;

/// Closed set of reasons an analytics operation produces no result.
/// All are recoverable: the caller omits the overlay or shows "no data".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("insufficient data: {actual} valid points, at least {required} required")]
    InsufficientData { required: usize, actual: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("empty series")]
    EmptySeries,
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
