//! Paired cost/effect observations for one strategy.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StrategyName, ValidationError};

/// Cost and effect observations drawn for the same simulated subjects.
///
/// `cost_observations()[i]` and `effect_observations()[i]` belong together;
/// the sequences always have the same length and are never reordered apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleSet")]
pub struct SampleSet {
    strategy_name: StrategyName,
    cost_observations: Vec<f64>,
    effect_observations: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSampleSet {
    strategy_name: StrategyName,
    cost_observations: Vec<f64>,
    effect_observations: Vec<f64>,
}

impl TryFrom<RawSampleSet> for SampleSet {
    type Error = ValidationError;

    fn try_from(raw: RawSampleSet) -> Result<Self, Self::Error> {
        Self::new(raw.strategy_name, raw.cost_observations, raw.effect_observations)
    }
}

impl SampleSet {
    /// Creates a sample set from index-aligned sequences.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the sequences differ in length or are empty.
    pub fn new(
        strategy_name: StrategyName,
        cost_observations: Vec<f64>,
        effect_observations: Vec<f64>,
    ) -> Result<Self, ValidationError> {
        if cost_observations.len() != effect_observations.len() {
            return Err(ValidationError::invalid_format(
                "observations",
                format!(
                    "{} cost observations but {} effect observations",
                    cost_observations.len(),
                    effect_observations.len()
                ),
            ));
        }
        if cost_observations.is_empty() {
            return Err(ValidationError::empty_field("observations"));
        }
        Ok(Self {
            strategy_name,
            cost_observations,
            effect_observations,
        })
    }

    pub fn strategy_name(&self) -> &StrategyName {
        &self.strategy_name
    }

    pub fn cost_observations(&self) -> &[f64] {
        &self.cost_observations
    }

    pub fn effect_observations(&self) -> &[f64] {
        &self.effect_observations
    }

    /// Number of paired observations.
    pub fn len(&self) -> usize {
        self.cost_observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost_observations.is_empty()
    }

    /// Iterates `(cost, effect)` pairs in draw order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cost_observations
            .iter()
            .copied()
            .zip(self.effect_observations.iter().copied())
    }

    /// Sample mean of the cost observations.
    pub fn mean_cost(&self) -> f64 {
        mean(&self.cost_observations)
    }

    /// Sample mean of the effect observations.
    pub fn mean_effect(&self) -> f64 {
        mean(&self.effect_observations)
    }
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}
