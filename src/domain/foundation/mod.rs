//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the sampling and analysis domain.

mod display_color;
mod errors;
mod ids;
mod sample_count;
mod strategy_name;
mod timestamp;

pub use display_color::DisplayColor;
pub use errors::{ensure_finite, ValidationError};
pub use ids::JobId;
pub use sample_count::SampleCount;
pub use strategy_name::StrategyName;
pub use timestamp::Timestamp;
