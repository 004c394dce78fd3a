//!
//! Benchmark report input.
//!

pub mod error;
pub mod record;

#[cfg(test)]
mod tests;

use std::path::Path;

use self::error::Error as InputError;
use self::record::Record;

///
/// The benchmark report produced by the benchmarking tool.
///
/// Only the `benchmarks` array is read, the remaining top-level keys such as
/// `context` are ignored.
///
#[derive(Debug, Default, serde::Deserialize)]
pub struct Report {
    /// The benchmark records in document order.
    pub benchmarks: Vec<Record>,
}

impl Report {
    ///
    /// Loads the report from a JSON file.
    ///
    pub fn load(path: &Path) -> Result<Self, InputError> {
        Self::try_from(path)
    }
}

impl TryFrom<&Path> for Report {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let report: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(report)
    }
}
