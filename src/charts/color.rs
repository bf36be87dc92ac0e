//! Hex color parsing
//!
//! Accepts exactly six hex digits with an optional leading `#`, in either
//! case. Anything else degrades to black at the requested alpha.

use std::fmt;

/// An RGB color with an alpha channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` / `RRGGBB` triplet
    pub fn parse_hex(hex: &str, alpha: f64) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// CSS-style fill color string for `hex` at `alpha`
///
/// Unparseable input yields the compact `rgba(0,0,0,a)` form.
pub fn hex_to_fill_color(hex: &str, alpha: f64) -> String {
    match Rgba::parse_hex(hex, alpha) {
        Some(color) => color.to_string(),
        None => {
            tracing::trace!(hex, "unparseable hex color, using black fallback");
            format!("rgba(0,0,0,{})", alpha)
        }
    }
}
