//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cea::{
    AnalysisPlan, CeTableOptions, CepNmbPlotOptions, FigureSize, MinSamplesOptions,
    MinSamplesPlotOptions, OutputTemplates, WtpRange,
};

/// Options passed to the CEA collaborator
///
/// Flat so each value maps onto a single environment variable,
/// e.g. `CEA_SAMPLER__ANALYSIS__WTP_MAX=150000`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Observations are paired across strategies
    pub if_paired: bool,

    /// Willingness-to-pay scan range
    pub wtp_min: f64,
    pub wtp_max: f64,

    /// CE plane + NMB figure size in inches
    pub fig_width: f64,
    pub fig_height: f64,

    /// Cost scaling on the CE plane
    pub cost_multiplier: f64,

    /// NMB scaling
    pub nmb_multiplier: f64,

    pub cep_y_label: String,
    pub nmb_y_label: String,
    pub show_strategy_label_on_nmb_frontier: bool,

    /// Cost scaling in the CE table
    pub ce_table_cost_multiplier: f64,

    /// Minimum-sample search
    pub max_wtp: f64,
    #[serde(deserialize_with = "super::one_or_many::deserialize")]
    pub epsilons: Vec<f64>,
    #[serde(deserialize_with = "super::one_or_many::deserialize")]
    pub alphas: Vec<f64>,
    pub num_bootstrap_samples: usize,
}

impl AnalysisConfig {
    /// Build the analysis plan for the given output templates
    pub fn plan(&self, outputs: OutputTemplates) -> Result<AnalysisPlan, ValidationError> {
        let plan = AnalysisPlan {
            if_paired: self.if_paired,
            wtp_range: WtpRange::new(self.wtp_min, self.wtp_max)?,
            cep_nmb: CepNmbPlotOptions {
                fig_size: FigureSize::new(self.fig_width, self.fig_height)?,
                cost_multiplier: self.cost_multiplier,
                nmb_multiplier: self.nmb_multiplier,
                cep_y_label: self.cep_y_label.clone(),
                nmb_y_label: self.nmb_y_label.clone(),
                show_strategy_label_on_nmb_frontier: self.show_strategy_label_on_nmb_frontier,
            },
            ce_table: CeTableOptions {
                cost_multiplier: self.ce_table_cost_multiplier,
            },
            min_samples: MinSamplesPlotOptions {
                search: MinSamplesOptions {
                    max_wtp: self.max_wtp,
                    epsilons: self.epsilons.clone(),
                    alphas: self.alphas.clone(),
                },
                num_bootstrap_samples: self.num_bootstrap_samples,
            },
            outputs,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.plan(OutputTemplates::default()).map(|_| ())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let plan = AnalysisPlan::default();
        Self {
            if_paired: plan.if_paired,
            wtp_min: plan.wtp_range.min(),
            wtp_max: plan.wtp_range.max(),
            fig_width: plan.cep_nmb.fig_size.width,
            fig_height: plan.cep_nmb.fig_size.height,
            cost_multiplier: plan.cep_nmb.cost_multiplier,
            nmb_multiplier: plan.cep_nmb.nmb_multiplier,
            cep_y_label: plan.cep_nmb.cep_y_label,
            nmb_y_label: plan.cep_nmb.nmb_y_label,
            show_strategy_label_on_nmb_frontier: plan.cep_nmb.show_strategy_label_on_nmb_frontier,
            ce_table_cost_multiplier: plan.ce_table.cost_multiplier,
            max_wtp: plan.min_samples.search.max_wtp,
            epsilons: plan.min_samples.search.epsilons,
            alphas: plan.min_samples.search.alphas,
            num_bootstrap_samples: plan.min_samples.num_bootstrap_samples,
        }
    }
}
