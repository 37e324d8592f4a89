//! CEA Sampler - Reproducible samples for cost-effectiveness analysis
//!
//! This crate generates paired cost/effect observations for a roster of
//! decision strategies from one seeded random stream, and hands them to a
//! cost-effectiveness-analysis collaborator for plotting and table export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
