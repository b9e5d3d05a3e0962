//! Position resolver: template name to normalized inset placement

use crate::error::TemplateError;
use crate::inset::{LayoutRecord, Pair};

use super::registry::PositionTemplate;

/// Default inset size on both axes
pub const DEFAULT_SIZE: f64 = 0.2;

/// Default distance from the canvas edges on both axes
pub const DEFAULT_MARGIN: f64 = 0.025;

/// Fixed layout of the `default` template
const DEFAULT_LAYOUT: LayoutRecord = LayoutRecord::new(0.95, 0.6, 0.5, 0.325);

/// Size of one canvas quadrant before margins
const QUADRANT: Pair = Pair::splat(0.5);

/// Which centre coordinate a corner uses on each axis
#[derive(Clone, Copy)]
enum Anchor {
    Low,
    High,
}

impl PositionTemplate {
    /// Compute the layout for this template
    ///
    /// `size` and `margin` are ignored by `default`; `center` ignores
    /// `margin`. Inputs are not clamped.
    pub fn resolve(self, size: Pair, margin: Pair) -> LayoutRecord {
        use Anchor::{High, Low};

        match self {
            PositionTemplate::Default => DEFAULT_LAYOUT,
            PositionTemplate::TopLeft => corner(size, margin, Low, High),
            PositionTemplate::TopRight => corner(size, margin, High, High),
            PositionTemplate::BottomRight => corner(size, margin, High, Low),
            PositionTemplate::BottomLeft => corner(size, margin, Low, Low),
            PositionTemplate::TopLeftQuadrant => quadrant(margin, Low, High),
            PositionTemplate::TopRightQuadrant => quadrant(margin, High, High),
            PositionTemplate::BottomRightQuadrant => quadrant(margin, High, Low),
            PositionTemplate::BottomLeftQuadrant => quadrant(margin, Low, Low),
            PositionTemplate::Center => LayoutRecord::from_parts(size, Pair::splat(0.5)),
        }
    }

    /// Compute the layout with the default size and margin
    pub fn resolve_default(self) -> LayoutRecord {
        self.resolve(Pair::splat(DEFAULT_SIZE), Pair::splat(DEFAULT_MARGIN))
    }
}

/// Inset of `size` anchored to a corner, `margin` away from the edges
fn corner(size: Pair, margin: Pair, x: Anchor, y: Anchor) -> LayoutRecord {
    let lower = size.half().add(margin);
    let upper = lower.complement();
    let center = Pair::new(pick(x, lower.x, upper.x), pick(y, lower.y, upper.y));
    LayoutRecord::from_parts(size, center)
}

/// Quarter-canvas inset; the margin shrinks it and offsets it from the edges
fn quadrant(margin: Pair, x: Anchor, y: Anchor) -> LayoutRecord {
    let qsize = Pair::new(QUADRANT.x - 2.0 * margin.x, QUADRANT.y - 2.0 * margin.y);
    corner(qsize, margin, x, y)
}

fn pick(anchor: Anchor, low: f64, high: f64) -> f64 {
    match anchor {
        Anchor::Low => low,
        Anchor::High => high,
    }
}

/// Resolve a position template by name
///
/// `size` and `margin` take one value (used for both axes) or two
/// (x, y); any other length is an error.
///
/// # Example
///
/// ```rust
/// use memeplot::resolve_position;
///
/// let layout = resolve_position("tr", &[0.4], &[0.025]).unwrap();
/// assert_eq!(layout.w, 0.4);
/// assert!((layout.x - 0.775).abs() < 1e-12);
///
/// assert!(resolve_position("nope", &[0.2], &[0.025]).is_err());
/// ```
pub fn resolve_position(
    name: &str,
    size: &[f64],
    margin: &[f64],
) -> Result<LayoutRecord, TemplateError> {
    let template: PositionTemplate = name.parse()?;
    let size = Pair::try_from_slice("size", size)?;
    let margin = Pair::try_from_slice("margin", margin)?;
    let layout = template.resolve(size, margin);
    tracing::trace!(template = name, ?layout, "resolved position template");
    Ok(layout)
}

/// Resolve a position template by name with the default size and margin
pub fn resolve_position_default(name: &str) -> Result<LayoutRecord, TemplateError> {
    resolve_position(name, &[DEFAULT_SIZE], &[DEFAULT_MARGIN])
}
