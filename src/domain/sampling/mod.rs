//! Sampling Module - Reproducible synthetic cost/effect observations.
//!
//! # Components
//!
//! - `Mt19937` / `LegacyRandomState` - Seeded word generator and Gaussian stream
//! - `NormalParams` / `StrategySpec` / `Roster` - Validated distribution inputs
//! - `SampleSet` - Index-aligned cost/effect observations for one strategy
//! - `SampleGenerator` - Draws every strategy from one shared stream
//!
//! Everything here is pure computation; file output belongs to the adapters.

mod legacy_random_state;
mod mt19937;
mod normal_params;
mod roster;
mod sample_generator;
mod sample_set;
mod strategy_spec;

pub use legacy_random_state::LegacyRandomState;
pub use mt19937::Mt19937;
pub use normal_params::NormalParams;
pub use roster::Roster;
pub use sample_generator::{GeneratedSamples, SampleGenerator, SamplingError};
pub use sample_set::SampleSet;
pub use strategy_spec::StrategySpec;
