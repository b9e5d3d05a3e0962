//! Background resolver: template name to inset panel style

use serde::Serialize;

use crate::color::Rgba;
use crate::error::TemplateError;
use crate::inset::RelativeLength;

use super::registry::BackgroundTemplate;

/// Corner radius of the rounded templates
const ROUNDED: f64 = 0.025;

/// Style of the panel drawn behind the inset plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundStyle {
    /// Panel fill, `None` hides the panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba>,
    /// Relative to the smaller canvas dimension
    pub corner_radius: RelativeLength,
}

impl BackgroundStyle {
    /// Whether the panel draws nothing at all
    pub fn is_blank(&self) -> bool {
        self.fill.is_none() && self.border_color.is_none()
    }
}

impl BackgroundTemplate {
    pub fn resolve(self) -> BackgroundStyle {
        let translucent = Rgba::WHITE.with_alpha(0.5);
        let (fill, radius) = match self {
            BackgroundTemplate::Default => (Some(translucent), ROUNDED),
            BackgroundTemplate::Opaque => (Some(Rgba::WHITE), ROUNDED),
            BackgroundTemplate::Square => (Some(translucent), 0.0),
            BackgroundTemplate::OpaqueSquare => (Some(Rgba::WHITE), 0.0),
            BackgroundTemplate::Blank => (None, 0.0),
        };
        BackgroundStyle {
            fill,
            border_color: None,
            corner_radius: RelativeLength::snpc(radius),
        }
    }
}

/// Resolve a background template by name
///
/// # Example
///
/// ```rust
/// use memeplot::resolve_background;
///
/// let style = resolve_background("opsq").unwrap();
/// assert!(style.fill.unwrap().is_opaque());
/// assert!(style.corner_radius.is_zero());
/// ```
pub fn resolve_background(name: &str) -> Result<BackgroundStyle, TemplateError> {
    let template: BackgroundTemplate = name.parse()?;
    let style = template.resolve();
    tracing::trace!(template = name, ?style, "resolved background template");
    Ok(style)
}
