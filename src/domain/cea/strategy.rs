//! Strategy record handed to the CEA collaborator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DisplayColor, StrategyName};
use crate::domain::sampling::{SampleSet, StrategySpec};

/// A strategy with its observations, ready for cost-effectiveness analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: StrategyName,
    pub cost_observations: Vec<f64>,
    pub effect_observations: Vec<f64>,
    pub color: DisplayColor,
}

impl Strategy {
    /// Bundles a spec's display color with its generated observations.
    pub fn from_samples(spec: &StrategySpec, samples: &SampleSet) -> Self {
        Self {
            name: samples.strategy_name().clone(),
            cost_observations: samples.cost_observations().to_vec(),
            effect_observations: samples.effect_observations().to_vec(),
            color: spec.color.clone(),
        }
    }

    pub fn observation_count(&self) -> usize {
        self.cost_observations.len()
    }
}
