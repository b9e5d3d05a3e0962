//! Default visual theme for the overlaid plot
//!
//! The inset plot is drawn on top of a meme image, so the theme keeps the
//! plot itself transparent and leaves the panel behind it to the background
//! template. Any field can be overridden from TOML:
//!
//! ```toml
//! [theme]
//! base_size = 14
//! text_color = "#ffffff"
//! legend_position = "bottom"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgba;

/// Errors that can occur when loading or parsing a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the plot legend goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    /// Legend hidden
    #[default]
    None,
    Top,
    Right,
    Bottom,
    Left,
}

/// Visual theme applied to the inset plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsetTheme {
    /// Base font size in points
    pub base_size: f64,

    /// Font family, `None` leaves it to the renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    pub text_color: Rgba,

    /// Axis lines and ticks
    pub axis_color: Rgba,

    /// Major grid lines, `None` draws no grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<Rgba>,

    /// Plot area fill, `None` keeps it transparent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_background: Option<Rgba>,

    pub legend_position: LegendPosition,
}

/// TOML document wrapping the `[theme]` table
#[derive(Deserialize)]
struct TomlTheme {
    #[serde(default)]
    theme: InsetTheme,
}

impl Default for InsetTheme {
    fn default() -> Self {
        Self {
            base_size: 11.0,
            font_family: None,
            text_color: Rgba::BLACK,
            axis_color: Rgba::opaque(0x33, 0x33, 0x33),
            grid_color: None,
            plot_background: None,
            legend_position: LegendPosition::None,
        }
    }
}

impl InsetTheme {
    /// Load theme overrides from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        tracing::debug!(path = %path.display(), "loading inset theme");
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme overrides from a TOML string
    ///
    /// Fields missing from the `[theme]` table keep their default values.
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        Ok(parsed.theme)
    }

    /// Set the base font size
    pub fn with_base_size(mut self, size: f64) -> Self {
        self.base_size = size;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the text colour
    pub fn with_text_color(mut self, color: Rgba) -> Self {
        self.text_color = color;
        self
    }

    /// Set the legend position
    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    /// Whether the plot area is left see-through
    pub fn is_transparent(&self) -> bool {
        self.plot_background.map_or(true, |c| c.is_transparent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_theme() {
        let theme = InsetTheme::default();
        assert_eq!(theme.base_size, 11.0);
        assert_eq!(theme.text_color, Rgba::BLACK);
        assert_eq!(theme.grid_color, None);
        assert_eq!(theme.legend_position, LegendPosition::None);
        assert!(theme.is_transparent());
    }

    #[test]
    fn test_builder_pattern() {
        let theme = InsetTheme::default()
            .with_base_size(14.0)
            .with_font_family("Impact")
            .with_text_color(Rgba::WHITE)
            .with_legend(LegendPosition::Bottom);

        assert_eq!(theme.base_size, 14.0);
        assert_eq!(theme.font_family, Some("Impact".to_string()));
        assert_eq!(theme.text_color, Rgba::WHITE);
        assert_eq!(theme.legend_position, LegendPosition::Bottom);
    }

    #[test]
    fn test_parse_toml_overrides() {
        let toml_str = r##"
[theme]
base_size = 14.0
text_color = "#fff"
grid_color = "#00000033"
legend_position = "bottom"
"##;
        let theme = InsetTheme::from_str(toml_str).expect("Should parse");
        assert_eq!(theme.base_size, 14.0);
        assert_eq!(theme.text_color, Rgba::WHITE);
        assert_eq!(theme.grid_color, Some(Rgba::new(0, 0, 0, 0x33)));
        assert_eq!(theme.legend_position, LegendPosition::Bottom);
        // Untouched fields keep their defaults
        assert_eq!(theme.axis_color, InsetTheme::default().axis_color);
    }

    #[test]
    fn test_parse_without_theme_table() {
        let theme = InsetTheme::from_str("").expect("Should parse");
        assert_eq!(theme, InsetTheme::default());
    }

    #[test]
    fn test_opaque_plot_background() {
        let theme = InsetTheme::from_str("[theme]\nplot_background = \"white\"\n").unwrap();
        assert!(!theme.is_transparent());
    }

    #[test]
    fn test_invalid_color_error() {
        let result = InsetTheme::from_str("[theme]\ntext_color = \"not-a-color\"\n");
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_missing_theme_file() {
        let result = InsetTheme::from_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ThemeError::Io(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = InsetTheme::from_str(invalid);
        assert!(result.is_err());
    }
}
