//!
//! The benchmark validation outcome.
//!

use super::violation::Violation;

///
/// The benchmark validation outcome.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every iteration run is within the threshold.
    Passed {
        /// The number of checked iteration runs.
        checked: usize,
    },
    /// The scan stopped at the first run above the threshold.
    Failed(Violation),
}

impl Outcome {
    ///
    /// Whether the validation has been successful.
    ///
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    ///
    /// Returns the process exit code for the outcome.
    ///
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed { .. } => crate::EXIT_CODE_SUCCESS,
            Self::Failed(_) => crate::EXIT_CODE_FAILURE,
        }
    }
}
