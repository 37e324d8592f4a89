//! Sample count value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of paired observations drawn per strategy; always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SampleCount(usize);

impl SampleCount {
    /// Creates a SampleCount, returning error if zero.
    pub fn try_new(value: usize) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range(
                "sample count",
                1.0,
                usize::MAX as f64,
                0.0,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as usize.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for SampleCount {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<SampleCount> for usize {
    fn from(count: SampleCount) -> Self {
        count.0
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
