//! Ordered, name-unique collection of strategy specifications.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Deref;

use super::StrategySpec;
use crate::domain::foundation::ValidationError;

/// (name, cost mean, cost stdev, effect mean, effect stdev, color)
type RawSpec = (&'static str, f64, f64, f64, f64, &'static str);

const DEMONSTRATION: [RawSpec; 5] = [
    ("O", 0.0, 0.0, 0.0, 0.0, "green"),
    ("A", 250_000.0, 100_000.0, 20.0, 7.5, "blue"),
    ("B", 500_000.0, 100_000.0, 10.0, 7.5, "red"),
    ("C", 750_000.0, 100_000.0, 25.0, 4.0, "orange"),
    ("D", 1_250_000.0, 150_000.0, 40.0, 5.0, "purple"),
];

static DEMONSTRATION_ROSTER: Lazy<Roster> = Lazy::new(|| {
    let specs = DEMONSTRATION
        .iter()
        .map(|&(name, cm, cs, em, es, color)| StrategySpec::new(name, cm, cs, em, es, color))
        .collect::<Result<Vec<_>, _>>()
        .expect("Invalid demonstration strategy table");
    Roster::new(specs).expect("Duplicate name in demonstration strategy table")
});

/// Strategies in iteration order; the order is part of the sampling contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StrategySpec>", into = "Vec<StrategySpec>")]
pub struct Roster {
    specs: Vec<StrategySpec>,
}

impl Roster {
    /// Creates a roster, rejecting duplicate strategy names.
    pub fn new(specs: Vec<StrategySpec>) -> Result<Self, ValidationError> {
        ensure_unique_names(&specs)?;
        Ok(Self { specs })
    }

    /// The five-strategy status-quo-plus-four roster used for demonstration runs.
    pub fn demonstration() -> Self {
        DEMONSTRATION_ROSTER.clone()
    }

    /// Parses a YAML list of strategy specs.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn specs(&self) -> &[StrategySpec] {
        &self.specs
    }

    /// Returns the spec with the given name.
    pub fn get(&self, name: &str) -> Option<&StrategySpec> {
        self.specs.iter().find(|s| s.name.as_str() == name)
    }

    /// Returns a copy with the strategies in reverse order.
    pub fn reversed(&self) -> Self {
        let mut specs = self.specs.clone();
        specs.reverse();
        Self { specs }
    }
}

impl Deref for Roster {
    type Target = [StrategySpec];

    fn deref(&self) -> &Self::Target {
        &self.specs
    }
}

impl TryFrom<Vec<StrategySpec>> for Roster {
    type Error = ValidationError;

    fn try_from(specs: Vec<StrategySpec>) -> Result<Self, Self::Error> {
        Self::new(specs)
    }
}

impl From<Roster> for Vec<StrategySpec> {
    fn from(roster: Roster) -> Self {
        roster.specs
    }
}

/// Fails on the first strategy name seen twice.
pub(crate) fn ensure_unique_names(specs: &[StrategySpec]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.name.as_str()) {
            return Err(ValidationError::duplicate("strategy name", spec.name.as_str()));
        }
    }
    Ok(())
}
