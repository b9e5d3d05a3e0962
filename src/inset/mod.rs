//! Inset geometry and configuration
//!
//! Values here are expressed in the canvas unit square: `(0, 0)` is the
//! bottom-left corner of the meme image and `(1, 1)` the top-right,
//! independent of its pixel dimensions.

pub mod config;
pub mod types;

pub use config::{ConfigError, InsetConfig, PairSpec, ResolvedInset};
pub use types::{BoundingBox, LayoutOverride, LayoutRecord, Pair, RelativeLength};
