//! Core value types for inset geometry

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Tolerance used when checking whether a record stays on the canvas
const CANVAS_EPSILON: f64 = 1e-9;

/// A value given per axis, normalized from a scalar or a pair
///
/// Scalars broadcast to both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub x: f64,
    pub y: f64,
}

impl Pair {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same value on both axes
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Normalize a 1- or 2-element argument
    ///
    /// `param` names the argument in the error for any other length.
    pub fn try_from_slice(param: &'static str, values: &[f64]) -> Result<Self, TemplateError> {
        match *values {
            [v] => Ok(Self::splat(v)),
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(TemplateError::invalid_shape(param, values.len())),
        }
    }

    pub(crate) fn half(self) -> Self {
        Self::new(self.x / 2.0, self.y / 2.0)
    }

    pub(crate) fn add(self, other: Pair) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// `1 - self` on each axis
    pub(crate) fn complement(self) -> Self {
        Self::new(1.0 - self.x, 1.0 - self.y)
    }
}

impl From<f64> for Pair {
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<(f64, f64)> for Pair {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Pair {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Normalized placement of an inset on the canvas unit square
///
/// `(x, y)` is the centre of a `w` × `h` rectangle; `(0, 0)` is the
/// bottom-left corner of the canvas and `(1, 1)` the top-right. Values are
/// not clamped, so oversized inputs can describe a rectangle that leaves
/// the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutRecord {
    pub w: f64,
    pub h: f64,
    pub x: f64,
    pub y: f64,
}

impl LayoutRecord {
    pub const fn new(w: f64, h: f64, x: f64, y: f64) -> Self {
        Self { w, h, x, y }
    }

    /// Build a record from a size and a centre point
    pub(crate) fn from_parts(size: Pair, center: Pair) -> Self {
        Self::new(size.x, size.y, center.x, center.y)
    }

    pub fn left(&self) -> f64 {
        self.x - self.w / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.w / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y - self.h / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Check whether all four fields are finite numbers
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.x.is_finite() && self.y.is_finite()
    }

    /// Check whether the rectangle lies inside `[0, 1] × [0, 1]`
    pub fn is_within_canvas(&self) -> bool {
        self.left() >= -CANVAS_EPSILON
            && self.bottom() >= -CANVAS_EPSILON
            && self.right() <= 1.0 + CANVAS_EPSILON
            && self.top() <= 1.0 + CANVAS_EPSILON
    }

    /// Convert to a pixel box on a canvas of the given size
    ///
    /// The returned box uses raster conventions: origin at the top-left,
    /// y growing downwards.
    pub fn to_pixel_box(&self, canvas_width: f64, canvas_height: f64) -> BoundingBox {
        BoundingBox::new(
            self.left() * canvas_width,
            (1.0 - self.top()) * canvas_height,
            self.w * canvas_width,
            self.h * canvas_height,
        )
    }

    /// Replace the fields set in `overrides`
    pub fn with_override(self, overrides: &LayoutOverride) -> Self {
        Self {
            w: overrides.w.unwrap_or(self.w),
            h: overrides.h.unwrap_or(self.h),
            x: overrides.x.unwrap_or(self.x),
            y: overrides.y.unwrap_or(self.y),
        }
    }
}

/// Free-form replacement for individual layout fields
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl LayoutOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, w: f64) -> Self {
        self.w = Some(w);
        self
    }

    pub fn with_height(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    /// Set the centre point
    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.w.is_none() && self.h.is_none() && self.x.is_none() && self.y.is_none()
    }
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A length relative to the smaller canvas dimension
///
/// `0.025` on an 800×600 canvas is 15 pixels. Deserialized values go
/// through [`RelativeLength::snpc`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RelativeLength(f64);

impl RelativeLength {
    pub const ZERO: RelativeLength = RelativeLength(0.0);

    /// Negative values are treated as zero
    pub fn snpc(value: f64) -> Self {
        Self(value.max(0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn to_pixels(&self, canvas_width: f64, canvas_height: f64) -> f64 {
        self.0 * canvas_width.min(canvas_height)
    }
}

impl From<f64> for RelativeLength {
    fn from(value: f64) -> Self {
        Self::snpc(value)
    }
}

impl From<RelativeLength> for f64 {
    fn from(length: RelativeLength) -> Self {
        length.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pair_broadcast() {
        assert_eq!(Pair::try_from_slice("size", &[0.4]), Ok(Pair::new(0.4, 0.4)));
        assert_eq!(Pair::from(0.4), Pair::from((0.4, 0.4)));
        assert_eq!(Pair::from([0.1, 0.2]), Pair::new(0.1, 0.2));
    }

    #[test]
    fn test_pair_rejects_bad_lengths() {
        assert_eq!(
            Pair::try_from_slice("size", &[]),
            Err(TemplateError::InvalidArgumentShape {
                param: "size",
                len: 0
            })
        );
        assert_eq!(
            Pair::try_from_slice("margin", &[0.1, 0.2, 0.3]),
            Err(TemplateError::InvalidArgumentShape {
                param: "margin",
                len: 3
            })
        );
    }

    #[test]
    fn test_record_edges() {
        let r = LayoutRecord::new(0.2, 0.4, 0.5, 0.5);
        assert!((r.left() - 0.4).abs() < 1e-12);
        assert!((r.right() - 0.6).abs() < 1e-12);
        assert!((r.bottom() - 0.3).abs() < 1e-12);
        assert!((r.top() - 0.7).abs() < 1e-12);
        assert!(r.is_within_canvas());
    }

    #[test]
    fn test_record_off_canvas() {
        let r = LayoutRecord::new(0.8, 0.8, 0.9, 0.5);
        assert!(!r.is_within_canvas());
    }

    #[test]
    fn test_pixel_box_flips_y() {
        // Inset in the top-left quarter of an 800x600 canvas
        let r = LayoutRecord::new(0.5, 0.5, 0.25, 0.75);
        let bbox = r.to_pixel_box(800.0, 600.0);
        assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(bbox.right(), 400.0);
        assert_eq!(bbox.bottom(), 300.0);
    }

    #[test]
    fn test_override_replaces_only_set_fields() {
        let r = LayoutRecord::new(0.2, 0.2, 0.125, 0.875);
        let o = LayoutOverride::new().with_width(0.3);
        assert_eq!(r.with_override(&o), LayoutRecord::new(0.3, 0.2, 0.125, 0.875));
        assert_eq!(r.with_override(&LayoutOverride::default()), r);
        assert!(LayoutOverride::default().is_empty());
        assert!(!o.is_empty());
    }

    #[test]
    fn test_relative_length_pixels() {
        let radius = RelativeLength::snpc(0.025);
        assert!((radius.to_pixels(800.0, 600.0) - 15.0).abs() < 1e-9);
        assert_eq!(RelativeLength::snpc(-1.0), RelativeLength::ZERO);
        assert!(RelativeLength::ZERO.is_zero());
    }

    #[test]
    fn test_relative_length_deserialize_clamps_negative() {
        #[derive(Deserialize)]
        struct Radius {
            radius: RelativeLength,
        }

        let parsed: Radius = toml::from_str("radius = -0.5").unwrap();
        assert_eq!(parsed.radius, RelativeLength::ZERO);

        let parsed: Radius = toml::from_str("radius = 0.025").unwrap();
        assert_eq!(parsed.radius, RelativeLength::snpc(0.025));
    }
}
