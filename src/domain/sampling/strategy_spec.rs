//! Per-strategy distribution specification.

use serde::{Deserialize, Serialize};

use super::NormalParams;
use crate::domain::foundation::{DisplayColor, StrategyName, ValidationError};

/// Cost and effect distributions of one decision strategy.
///
/// Immutable once built; names are unique within a [`Roster`](super::Roster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySpec {
    pub name: StrategyName,
    pub cost: NormalParams,
    pub effect: NormalParams,
    pub color: DisplayColor,
}

impl StrategySpec {
    /// Builds a spec from raw values, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty name or color, a non-finite mean
    /// or stdev, or a negative stdev.
    pub fn new(
        name: impl Into<String>,
        cost_mean: f64,
        cost_stdev: f64,
        effect_mean: f64,
        effect_stdev: f64,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: StrategyName::new(name)?,
            cost: NormalParams::named("cost mean", "cost stdev", cost_mean, cost_stdev)?,
            effect: NormalParams::named("effect mean", "effect stdev", effect_mean, effect_stdev)?,
            color: DisplayColor::new(color)?,
        })
    }
}
