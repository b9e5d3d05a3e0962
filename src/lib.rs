//! memeplot - layout templates for plots overlaid on meme images
//!
//! This library computes where a data plot sits on top of a meme image and
//! how the panel behind it is styled. Everything is pure geometry and
//! style: the values it returns are handed to whatever renders the image.
//!
//! # Example
//!
//! ```rust
//! use memeplot::{resolve_inset, InsetConfig};
//!
//! let inset = resolve_inset(&InsetConfig::new().with_position("tlq")).unwrap();
//! assert!((inset.layout.w - 0.45).abs() < 1e-12);
//! assert!(inset.background.fill.is_some());
//! ```

pub mod color;
pub mod error;
pub mod inset;
pub mod template;
pub mod theme;

pub use color::Rgba;
pub use error::TemplateError;
pub use inset::{
    ConfigError, InsetConfig, LayoutOverride, LayoutRecord, Pair, RelativeLength, ResolvedInset,
};
pub use template::{
    list_templates, resolve_background, resolve_position, resolve_position_default,
    BackgroundStyle, BackgroundTemplate, PositionTemplate, TemplateFamily,
};
pub use theme::{InsetTheme, LegendPosition};

/// Resolve an inset configuration into layout and background values
///
/// # Example
///
/// ```rust
/// use memeplot::{resolve_inset, InsetConfig};
///
/// let config = InsetConfig::new().with_position("center").with_background("blank");
/// let inset = resolve_inset(&config).unwrap();
/// assert_eq!((inset.layout.x, inset.layout.y), (0.5, 0.5));
/// assert!(inset.background.is_blank());
/// ```
pub fn resolve_inset(config: &InsetConfig) -> Result<ResolvedInset, ConfigError> {
    config.resolve()
}
