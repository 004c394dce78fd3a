//!
//! The benchmark real time threshold.
//!

///
/// The maximum acceptable real time of an iteration run.
///
/// The value is in the units reported by the benchmarking tool.
///
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// The default threshold.
    pub const DEFAULT: Self = Self(4000.0);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(value: f64) -> anyhow::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            anyhow::bail!("Threshold must be a finite non-negative number, found `{value}`");
        }
        Ok(Self(value))
    }

    ///
    /// Returns the raw value.
    ///
    pub fn value(&self) -> f64 {
        self.0
    }

    ///
    /// Whether the real time is strictly above the threshold.
    ///
    pub fn is_exceeded_by(&self, real_time: f64) -> bool {
        real_time > self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::str::FromStr for Threshold {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let value = string
            .trim()
            .parse::<f64>()
            .map_err(|error| anyhow::anyhow!("Invalid threshold `{string}`: {error}"))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
