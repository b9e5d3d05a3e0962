//! Error types for template lookup and argument validation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Family argument is neither "position" nor "background"
    #[error("invalid template family '{family}' (valid families: position, background)")]
    InvalidFamily { family: String },

    /// Template name not present in its family
    #[error("invalid {family} template '{name}' (valid templates: {valid})")]
    InvalidTemplate {
        family: &'static str,
        name: String,
        valid: String,
    },

    /// `size` or `margin` given with a length other than 1 or 2
    #[error("{param} must have 1 or 2 elements, got {len}")]
    InvalidArgumentShape { param: &'static str, len: usize },
}

impl TemplateError {
    pub fn invalid_family(family: impl Into<String>) -> Self {
        Self::InvalidFamily {
            family: family.into(),
        }
    }

    /// Create an invalid template error listing the family's valid names
    pub fn invalid_template(family: &'static str, name: impl Into<String>, valid: &[&str]) -> Self {
        Self::InvalidTemplate {
            family,
            name: name.into(),
            valid: valid.join(", "),
        }
    }

    pub fn invalid_shape(param: &'static str, len: usize) -> Self {
        Self::InvalidArgumentShape { param, len }
    }
}
