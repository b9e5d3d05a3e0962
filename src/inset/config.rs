//! Configuration for a single inset
//!
//! An inset is described by a position template, a background template and
//! optional size/margin values. The description can be built in code or
//! loaded from TOML:
//!
//! ```toml
//! [inset]
//! position = "tr"
//! size = [0.4, 0.3]
//! margin = 0.05
//! background = "opsq"
//!
//! [inset.override]
//! y = 0.7
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TemplateError;
use crate::template::{
    BackgroundStyle, BackgroundTemplate, PositionTemplate, DEFAULT_MARGIN, DEFAULT_SIZE,
};

use super::types::{BoundingBox, LayoutOverride, LayoutRecord, Pair};

/// Errors that can occur when loading or resolving an inset configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read inset config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse inset config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// A `size` or `margin` value as written by the user: one number or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PairSpec {
    Scalar(f64),
    List(Vec<f64>),
}

impl PairSpec {
    pub fn as_slice(&self) -> &[f64] {
        match self {
            PairSpec::Scalar(v) => std::slice::from_ref(v),
            PairSpec::List(values) => values,
        }
    }

    fn to_pair(&self, param: &'static str) -> Result<Pair, TemplateError> {
        Pair::try_from_slice(param, self.as_slice())
    }
}

impl From<f64> for PairSpec {
    fn from(v: f64) -> Self {
        PairSpec::Scalar(v)
    }
}

impl From<(f64, f64)> for PairSpec {
    fn from((x, y): (f64, f64)) -> Self {
        PairSpec::List(vec![x, y])
    }
}

impl From<Vec<f64>> for PairSpec {
    fn from(values: Vec<f64>) -> Self {
        PairSpec::List(values)
    }
}

/// Description of one inset before template resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsetConfig {
    /// Position template name
    pub position: String,

    /// Inset size, ignored by the `default` and quadrant templates
    pub size: PairSpec,

    /// Distance from the canvas edges
    pub margin: PairSpec,

    /// Background template name
    pub background: String,

    /// Fields replaced after the position template is resolved
    #[serde(rename = "override", skip_serializing_if = "LayoutOverride::is_empty")]
    pub overrides: LayoutOverride,
}

/// TOML document wrapping the `[inset]` table
#[derive(Deserialize)]
struct TomlInsetConfig {
    #[serde(default)]
    inset: InsetConfig,
}

impl Default for InsetConfig {
    fn default() -> Self {
        Self {
            position: PositionTemplate::Default.name().to_string(),
            size: PairSpec::Scalar(DEFAULT_SIZE),
            margin: PairSpec::Scalar(DEFAULT_MARGIN),
            background: BackgroundTemplate::Default.name().to_string(),
            overrides: LayoutOverride::default(),
        }
    }
}

impl InsetConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading inset config");
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing keys keep their default values.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlInsetConfig = toml::from_str(content)?;
        Ok(parsed.inset)
    }

    /// Set the position template
    pub fn with_position(mut self, name: impl Into<String>) -> Self {
        self.position = name.into();
        self
    }

    /// Set the inset size
    pub fn with_size(mut self, size: impl Into<PairSpec>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the margin
    pub fn with_margin(mut self, margin: impl Into<PairSpec>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Set the background template
    pub fn with_background(mut self, name: impl Into<String>) -> Self {
        self.background = name.into();
        self
    }

    /// Set free-form field overrides
    pub fn with_override(mut self, overrides: LayoutOverride) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve both templates and apply overrides
    pub fn resolve(&self) -> Result<ResolvedInset, ConfigError> {
        let position: PositionTemplate = self.position.parse()?;
        let background: BackgroundTemplate = self.background.parse()?;
        let size = self.size.to_pair("size")?;
        let margin = self.margin.to_pair("margin")?;

        let layout = position.resolve(size, margin).with_override(&self.overrides);
        if !layout.is_within_canvas() {
            tracing::warn!(
                position = %position,
                ?layout,
                "inset extends beyond the canvas"
            );
        }

        tracing::debug!(position = %position, background = %background, "resolved inset");
        Ok(ResolvedInset {
            layout,
            background: background.resolve(),
        })
    }
}

/// Geometry and panel style ready to hand to a compositor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedInset {
    pub layout: LayoutRecord,
    pub background: BackgroundStyle,
}

impl ResolvedInset {
    /// Pixel box of the inset on a canvas of the given size
    pub fn pixel_box(&self, canvas_width: f64, canvas_height: f64) -> BoundingBox {
        self.layout.to_pixel_box(canvas_width, canvas_height)
    }

    /// Panel corner radius in pixels on a canvas of the given size
    pub fn corner_radius_pixels(&self, canvas_width: f64, canvas_height: f64) -> f64 {
        self.background
            .corner_radius
            .to_pixels(canvas_width, canvas_height)
    }
}
