//!
//! The benchmark validator library.
//!

pub mod input;
pub mod threshold;
pub mod validator;

pub use crate::input::error::Error as InputError;
pub use crate::input::record::run_type::RunType;
pub use crate::input::record::time_unit::TimeUnit;
pub use crate::input::record::Record;
pub use crate::input::Report;
pub use crate::threshold::Threshold;
pub use crate::validator::error::Error as ValidatorError;
pub use crate::validator::outcome::Outcome;
pub use crate::validator::violation::Violation;
pub use crate::validator::Validator;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code if a benchmark run is too slow.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The process exit code if the input could not be loaded or validated.
pub const EXIT_CODE_ERROR: i32 = 2;
