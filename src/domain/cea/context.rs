//! CEA analysis context.

use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::domain::foundation::{ensure_finite, ValidationError};
use crate::domain::sampling::{GeneratedSamples, StrategySpec};

/// Willingness-to-pay scan range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWtpRange")]
pub struct WtpRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawWtpRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawWtpRange> for WtpRange {
    type Error = ValidationError;

    fn try_from(raw: RawWtpRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl WtpRange {
    /// Creates a range; both ends finite and `min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        ensure_finite("wtp min", min)?;
        ensure_finite("wtp max", max)?;
        if min > max {
            return Err(ValidationError::out_of_range("wtp max", min, f64::MAX, max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for WtpRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100_000.0,
        }
    }
}

/// Everything the collaborator needs to run one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeaContext {
    /// Strategies in roster order.
    pub strategies: Vec<Strategy>,
    /// Whether observation `i` of every strategy comes from the same simulated subject.
    pub if_paired: bool,
    pub wtp_range: WtpRange,
}

impl CeaContext {
    /// Builds a context, pairing each spec with its generated samples.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if a spec has no samples or the strategies
    /// disagree on observation count while `if_paired` is set.
    pub fn from_samples(
        specs: &[StrategySpec],
        samples: &GeneratedSamples,
        if_paired: bool,
        wtp_range: WtpRange,
    ) -> Result<Self, ValidationError> {
        let strategies = specs
            .iter()
            .map(|spec| {
                samples
                    .get(spec.name.as_str())
                    .map(|set| Strategy::from_samples(spec, set))
                    .ok_or_else(|| {
                        ValidationError::invalid_format(
                            "strategies",
                            format!("no samples generated for '{}'", spec.name),
                        )
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if if_paired {
            if let Some(first) = strategies.first() {
                let n = first.observation_count();
                if let Some(odd) = strategies.iter().find(|s| s.observation_count() != n) {
                    return Err(ValidationError::invalid_format(
                        "strategies",
                        format!(
                            "paired analysis needs equal observation counts, '{}' has {} but '{}' has {}",
                            first.name,
                            n,
                            odd.name,
                            odd.observation_count()
                        ),
                    ));
                }
            }
        }

        Ok(Self {
            strategies,
            if_paired,
            wtp_range,
        })
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name.as_str()).collect()
    }
}
