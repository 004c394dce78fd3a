//!
//! The benchmark validator.
//!

pub mod error;
pub mod outcome;
pub mod violation;


use std::io::Write;

use colored::Colorize;

use crate::input::record::Record;
use crate::threshold::Threshold;

use self::error::Error as ValidatorError;
use self::outcome::Outcome;
use self::violation::Violation;

///
/// The benchmark validator.
///
#[derive(Debug, Default, Clone)]
pub struct Validator {
    /// The real time threshold.
    threshold: Threshold,
    /// Whether the per-run progress lines are suppressed.
    quiet: bool,
}

impl Validator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(threshold: Threshold, quiet: bool) -> Self {
        Self { threshold, quiet }
    }

    ///
    /// Checks the iteration records against the threshold, writing the progress to `output`.
    ///
    /// The scan stops at the first run above the threshold.
    ///
    pub fn check<W>(&self, records: &[Record], output: &mut W) -> Result<Outcome, ValidatorError>
    where
        W: Write,
    {
        let mut checked = 0;

        for (index, record) in records.iter().enumerate() {
            if !record.is_iteration() {
                continue;
            }

            let real_time = Self::require(record, index, "real_time", record.real_time)?;
            let cpu_time = Self::require(record, index, "cpu_time", record.cpu_time)?;
            checked += 1;

            if self.threshold.is_exceeded_by(real_time) {
                let violation = Violation {
                    index,
                    label: record.label(index),
                    real_time,
                    cpu_time,
                    time_unit: record.time_unit,
                    threshold: self.threshold,
                };
                writeln!(output, "{:>8} {violation}", "FAILED".bright_red())?;
                return Ok(Outcome::Failed(violation));
            }

            if !self.quiet {
                let unit = record.unit_suffix();
                writeln!(
                    output,
                    "{:>8} {} {}",
                    "Ok".green(),
                    record.label(index),
                    format!("(real_time {real_time}{unit}, cpu_time {cpu_time}{unit})")
                        .bright_white(),
                )?;
            }
        }

        Ok(Outcome::Passed { checked })
    }

    ///
    /// Extracts a timing mandatory for iteration records.
    ///
    fn require(
        record: &Record,
        index: usize,
        field: &'static str,
        value: Option<f64>,
    ) -> Result<f64, ValidatorError> {
        value.ok_or_else(|| ValidatorError::MissingField {
            index,
            label: record.label(index),
            field,
        })
    }
}
