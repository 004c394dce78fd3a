//!
//! The benchmark run type.
//!

///
/// The benchmark run type.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunType {
    /// A measured run.
    Iteration,
    /// A statistic computed over repetitions, e.g. mean or stddev.
    Aggregate,
    /// Any classification unknown to the validator.
    #[serde(other)]
    Other,
}
