//! Display color value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Color the CEA collaborator uses to draw a strategy (e.g. `"blue"`, `"#1f77b4"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayColor(String);

impl DisplayColor {
    /// Creates a DisplayColor from a named color or `#rrggbb` hex code.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ValidationError::empty_field("display color"));
        }
        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ValidationError::invalid_format(
                    "display color",
                    "hex colors must be #rrggbb",
                ));
            }
        } else if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(ValidationError::invalid_format(
                "display color",
                "named colors may only contain letters, digits, '_' or '-'",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DisplayColor> for String {
    fn from(color: DisplayColor) -> Self {
        color.0
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_named_and_hex_colors() {
        assert_eq!(DisplayColor::new("purple").unwrap().as_str(), "purple");
        assert_eq!(DisplayColor::new("#1F77b4").unwrap().as_str(), "#1F77b4");
        assert!(DisplayColor::new("tab-blue").is_ok());
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(DisplayColor::new("").is_err());
        assert!(DisplayColor::new("#12345").is_err());
        assert!(DisplayColor::new("#zzzzzz").is_err());
        assert!(DisplayColor::new("light blue").is_err());
    }
}
