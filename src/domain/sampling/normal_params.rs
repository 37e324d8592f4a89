//! Parameters of a normal distribution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ensure_finite, ValidationError};

/// Mean and standard deviation of a normal distribution.
///
/// The mean must be finite and the standard deviation finite and non-negative.
/// A standard deviation of zero describes a point mass at the mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNormalParams")]
pub struct NormalParams {
    mean: f64,
    stdev: f64,
}

#[derive(Deserialize)]
struct RawNormalParams {
    mean: f64,
    stdev: f64,
}

impl TryFrom<RawNormalParams> for NormalParams {
    type Error = ValidationError;

    fn try_from(raw: RawNormalParams) -> Result<Self, Self::Error> {
        Self::new(raw.mean, raw.stdev)
    }
}

impl NormalParams {
    /// Creates validated normal parameters.
    ///
    /// # Errors
    ///
    /// - `NotFinite` if either value is NaN or infinite
    /// - `OutOfRange` if `stdev` is negative
    pub fn new(mean: f64, stdev: f64) -> Result<Self, ValidationError> {
        Self::named("mean", "stdev", mean, stdev)
    }

    /// Like [`NormalParams::new`] but reports errors under caller-chosen field names.
    pub fn named(
        mean_field: &str,
        stdev_field: &str,
        mean: f64,
        stdev: f64,
    ) -> Result<Self, ValidationError> {
        ensure_finite(mean_field, mean)?;
        ensure_finite(stdev_field, stdev)?;
        if stdev < 0.0 {
            return Err(ValidationError::out_of_range(stdev_field, 0.0, f64::MAX, stdev));
        }
        Ok(Self { mean, stdev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// True when every draw equals the mean.
    pub fn is_degenerate(&self) -> bool {
        self.stdev == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_stdev() {
        assert!(NormalParams::new(0.0, 0.0).unwrap().is_degenerate());
        let p = NormalParams::new(250_000.0, 100_000.0).unwrap();
        assert_eq!(p.mean(), 250_000.0);
        assert_eq!(p.stdev(), 100_000.0);
        assert!(!p.is_degenerate());
    }

    #[test]
    fn rejects_negative_stdev() {
        let err = NormalParams::named("cost mean", "cost stdev", 1.0, -0.1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert_eq!(err.field(), "cost stdev");
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(NormalParams::new(f64::NAN, 1.0).is_err());
        assert!(NormalParams::new(0.0, f64::INFINITY).is_err());
        assert!(NormalParams::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn negative_zero_stdev_is_degenerate() {
        assert!(NormalParams::new(3.0, -0.0).unwrap().is_degenerate());
    }

    #[test]
    fn deserialization_validates() {
        let ok: NormalParams = serde_json::from_str(r#"{"mean": 20.0, "stdev": 7.5}"#).unwrap();
        assert_eq!(ok.stdev(), 7.5);
        assert!(serde_json::from_str::<NormalParams>(r#"{"mean": 20.0, "stdev": -1}"#).is_err());
    }
}
