//!
//! The benchmark record.
//!

pub mod run_type;
pub mod time_unit;

use self::run_type::RunType;
use self::time_unit::TimeUnit;

///
/// A single benchmark record.
///
/// All fields are optional at load time. The timings are only required for
/// iteration records, which is checked by the validator.
///
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Record {
    /// The benchmark name.
    #[serde(default)]
    pub name: Option<String>,
    /// The run classification.
    #[serde(default)]
    pub run_type: Option<RunType>,
    /// The wall-clock time.
    #[serde(default)]
    pub real_time: Option<f64>,
    /// The CPU time.
    #[serde(default)]
    pub cpu_time: Option<f64>,
    /// The unit of both timings.
    #[serde(default)]
    pub time_unit: Option<TimeUnit>,
}

impl Record {
    ///
    /// Whether the record is subject to validation.
    ///
    pub fn is_iteration(&self) -> bool {
        matches!(self.run_type, Some(RunType::Iteration))
    }

    ///
    /// Returns the name to display, falling back to the record index.
    ///
    pub fn label(&self, index: usize) -> String {
        match self.name.as_deref() {
            Some(name) => name.to_owned(),
            None => format!("#{index}"),
        }
    }

    ///
    /// Returns the time unit suffix, empty if the unit is not reported.
    ///
    pub fn unit_suffix(&self) -> String {
        self.time_unit
            .map(|unit| format!(" {unit}"))
            .unwrap_or_default()
    }
}
