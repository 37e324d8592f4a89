//! CEA Module - The request handed to the cost-effectiveness collaborator.
//!
//! The analysis itself (frontier, ICERs, NMB, sample-size search) is done by
//! whatever implements [`crate::ports::CeaAnalyzer`]. These types only carry
//! the strategies, the context flags and the per-operation options.

mod context;
mod options;
mod path_template;
mod plan;
mod strategy;

pub use context::{CeaContext, WtpRange};
pub use options::{
    CeTableOptions, CepNmbPlotOptions, FigureSize, MinSamplesOptions, MinSamplesPlotOptions,
};
pub use path_template::PathTemplate;
pub use plan::{AnalysisPlan, OutputPaths, OutputTemplates};
pub use strategy::Strategy;
