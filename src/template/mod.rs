//! Built-in layout templates for inset plots
//!
//! Two families of named templates resolve to plain values:
//!
//! - position templates produce a [`LayoutRecord`](crate::inset::LayoutRecord)
//!   in canvas unit-square coordinates
//! - background templates produce a [`BackgroundStyle`] for the panel drawn
//!   behind the inset
//!
//! # Example
//!
//! ```rust
//! use memeplot::template::{list_templates, resolve_background, resolve_position_default};
//!
//! for name in list_templates("position").unwrap() {
//!     let layout = resolve_position_default(name).unwrap();
//!     assert!(layout.is_within_canvas());
//! }
//!
//! let panel = resolve_background("blank").unwrap();
//! assert!(panel.is_blank());
//! ```

mod background;
mod position;
mod registry;

pub use background::{resolve_background, BackgroundStyle};
pub use position::{resolve_position, resolve_position_default, DEFAULT_MARGIN, DEFAULT_SIZE};
pub use registry::{list_templates, BackgroundTemplate, PositionTemplate, TemplateFamily};
