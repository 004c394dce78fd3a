//!
//! The threshold violation.
//!

use crate::input::record::time_unit::TimeUnit;
use crate::threshold::Threshold;

///
/// The first iteration run whose real time exceeds the threshold.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The record index in the report.
    pub index: usize,
    /// The record name or index.
    pub label: String,
    /// The offending real time.
    pub real_time: f64,
    /// The CPU time of the same run.
    pub cpu_time: f64,
    /// The unit of both timings, if reported.
    pub time_unit: Option<TimeUnit>,
    /// The threshold that has been exceeded.
    pub threshold: Threshold,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self
            .time_unit
            .map(|unit| format!(" {unit}"))
            .unwrap_or_default();
        write!(
            f,
            "Run {} (real_time {}{unit}, cpu_time {}{unit}) is too slow: real_time exceeds {}{unit}",
            self.label, self.real_time, self.cpu_time, self.threshold,
        )
    }
}
