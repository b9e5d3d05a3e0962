//! Registry of the built-in template names
//!
//! Both families are closed sets. Lookups by name go through `FromStr`
//! and fail with [`TemplateError::InvalidTemplate`] rather than falling back
//! to a default.

use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;

/// The two template families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFamily {
    Position,
    Background,
}

impl TemplateFamily {
    pub const ALL: [TemplateFamily; 2] = [TemplateFamily::Position, TemplateFamily::Background];

    pub fn name(self) -> &'static str {
        match self {
            TemplateFamily::Position => "position",
            TemplateFamily::Background => "background",
        }
    }

    /// Template names of this family in display order
    pub fn names(self) -> &'static [&'static str] {
        match self {
            TemplateFamily::Position => POSITION_NAMES,
            TemplateFamily::Background => BACKGROUND_NAMES,
        }
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateFamily {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| TemplateError::invalid_family(s))
    }
}

const POSITION_NAMES: &[&str] = &[
    "default", "tl", "tr", "br", "bl", "tlq", "trq", "brq", "blq", "center",
];

const BACKGROUND_NAMES: &[&str] = &["default", "op", "sq", "opsq", "blank"];

/// List the valid template names for a family
///
/// # Example
///
/// ```rust
/// use memeplot::list_templates;
///
/// assert_eq!(list_templates("background").unwrap(), ["default", "op", "sq", "opsq", "blank"]);
/// assert!(list_templates("xyz").is_err());
/// ```
pub fn list_templates(family: &str) -> Result<&'static [&'static str], TemplateError> {
    let family: TemplateFamily = family.parse()?;
    Ok(family.names())
}

/// Position templates: where the inset sits on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionTemplate {
    /// Wide inset across the lower part of the canvas
    #[default]
    Default,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    /// Quadrant-sized variants of the corner templates
    TopLeftQuadrant,
    TopRightQuadrant,
    BottomRightQuadrant,
    BottomLeftQuadrant,
    Center,
}

impl PositionTemplate {
    pub const ALL: [PositionTemplate; 10] = [
        PositionTemplate::Default,
        PositionTemplate::TopLeft,
        PositionTemplate::TopRight,
        PositionTemplate::BottomRight,
        PositionTemplate::BottomLeft,
        PositionTemplate::TopLeftQuadrant,
        PositionTemplate::TopRightQuadrant,
        PositionTemplate::BottomRightQuadrant,
        PositionTemplate::BottomLeftQuadrant,
        PositionTemplate::Center,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PositionTemplate::Default => "default",
            PositionTemplate::TopLeft => "tl",
            PositionTemplate::TopRight => "tr",
            PositionTemplate::BottomRight => "br",
            PositionTemplate::BottomLeft => "bl",
            PositionTemplate::TopLeftQuadrant => "tlq",
            PositionTemplate::TopRightQuadrant => "trq",
            PositionTemplate::BottomRightQuadrant => "brq",
            PositionTemplate::BottomLeftQuadrant => "blq",
            PositionTemplate::Center => "center",
        }
    }
}

impl fmt::Display for PositionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PositionTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PositionTemplate::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TemplateError::invalid_template("position", s, POSITION_NAMES))
    }
}

/// Background templates: how the panel behind the inset is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundTemplate {
    /// Semi-transparent, rounded
    #[default]
    Default,
    /// Opaque, rounded
    Opaque,
    /// Semi-transparent, square corners
    Square,
    /// Opaque, square corners
    OpaqueSquare,
    /// No panel
    Blank,
}

impl BackgroundTemplate {
    pub const ALL: [BackgroundTemplate; 5] = [
        BackgroundTemplate::Default,
        BackgroundTemplate::Opaque,
        BackgroundTemplate::Square,
        BackgroundTemplate::OpaqueSquare,
        BackgroundTemplate::Blank,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BackgroundTemplate::Default => "default",
            BackgroundTemplate::Opaque => "op",
            BackgroundTemplate::Square => "sq",
            BackgroundTemplate::OpaqueSquare => "opsq",
            BackgroundTemplate::Blank => "blank",
        }
    }
}

impl fmt::Display for BackgroundTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackgroundTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackgroundTemplate::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TemplateError::invalid_template("background", s, BACKGROUND_NAMES))
    }
}
