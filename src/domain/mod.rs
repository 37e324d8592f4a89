//! Domain layer containing the sampling logic and analysis request types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `sampling` - Seeded random stream and paired cost/effect sample generation
//! - `cea` - Strategy records, analysis context and per-operation options

pub mod cea;
pub mod foundation;
pub mod sampling;
