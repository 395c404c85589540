use thiserror::Error;

/// Error types for the compute layer. Every one of these aborts the
/// dashboard: the fitted model underlies every rendered view.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The loaded dataset has no rows to fit on.
    #[error("cannot fit a model on an empty table")]
    EmptyTable,

    /// A predictor or target value parsed as a float but is not finite.
    #[error("column `{column}` has a non-finite value at row {row}")]
    NonFiniteValue { column: &'static str, row: usize },

    /// The least-squares system could not be solved robustly.
    #[error("least-squares fit failed: {0}")]
    Fit(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
