//! Colour values for inset backgrounds and themes
//!
//! Colours are plain sRGB with an 8-bit alpha channel. They serialize as
//! `#rrggbbaa` strings so TOML documents stay readable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when parsing a colour string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// An sRGB colour with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque colour
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same colour with alpha given as a fraction in `0.0..=1.0`
    ///
    /// `0.5` maps to alpha 128.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Alpha as a fraction in `0.0..=1.0`
    pub fn alpha_fraction(&self) -> f64 {
        self.a as f64 / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Lowercase `#rrggbbaa`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// Parse any CSS colour: names, hex forms and `rgb()`/`rgba()`/`hsl()`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = csscolorparser::parse(s.trim()).map_err(|e| ColorError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Rgba::new(r, g, b, a))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
