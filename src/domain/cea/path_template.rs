//! Output path templates keyed by sample count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::domain::foundation::{SampleCount, ValidationError};

const PLACEHOLDER: &str = "{n}";

/// A relative path containing `{n}`, replaced by the run's sample count.
///
/// Keeps outputs of runs with different sample counts apart, e.g.
/// `figs/cep nmb N={n}.png` renders to `figs/cep nmb N=200.png`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathTemplate(pub(super) String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, ValidationError> {
        let template = template.into();
        if template.trim().is_empty() {
            return Err(ValidationError::empty_field("path template"));
        }
        if !template.contains(PLACEHOLDER) {
            return Err(ValidationError::invalid_format(
                "path template",
                format!("'{}' must contain {}", template, PLACEHOLDER),
            ));
        }
        Ok(Self(template))
    }

    /// Substitutes every `{n}` with the sample count.
    pub fn render(&self, n: SampleCount) -> PathBuf {
        PathBuf::from(self.0.replace(PLACEHOLDER, &n.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PathTemplate> for String {
    fn from(template: PathTemplate) -> Self {
        template.0
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
