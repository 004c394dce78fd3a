//!
//! Benchmark validation error.
//!

///
/// Benchmark validation error.
///
/// A run exceeding the threshold is not an error, see `Outcome`.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An iteration record lacks a timing required for the check.
    #[error("Benchmark record {label} (index {index}) is missing the `{field}` field")]
    MissingField {
        /// The record index in the report.
        index: usize,
        /// The record name or index.
        label: String,
        /// The missing key.
        field: &'static str,
    },
    /// Error writing the progress output.
    #[error("Writing the validation output: {0}")]
    Writing(#[from] std::io::Error),
}
