use std::fmt;
use std::str::FromStr;

use palette::{FromColor, LinSrgba, Srgba};
use thiserror::Error;

use crate::scene::ColorLinPremul;

// sRGB <-> linear premultiplied conversions.
impl ColorLinPremul {
    /// Convenience alias matching Color::rgba(...) widely used in UI code.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Create from sRGB u8 RGBA array (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Convert back to sRGB u8 RGBA array (unpremultiplied).
    #[inline]
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        // Unpremultiply
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };

        // Convert linear to sRGB
        let lin = LinSrgba::new(r, g, b, self.a);
        let srgb: Srgba = Srgba::from_color(lin);

        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized color specification: {input:?}")]
pub struct ParseColorError {
    pub input: String,
}

/// Straight-alpha sRGB color as authored by users and scene code.
///
/// This is the value type that flows through figure definitions and controls;
/// painting converts it to [`ColorLinPremul`] at the last moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse any CSS color: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `hsl(...)` or a named color.
    pub fn parse(input: &str) -> Result<Self, ParseColorError> {
        let trimmed = input.trim();
        csscolorparser::parse(trimmed)
            .map(|c| {
                let [r, g, b, a] = c.to_rgba8();
                Self { r, g, b, a }
            })
            .map_err(|_| ParseColorError {
                input: input.to_string(),
            })
    }

    /// `#RRGGBB` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_lin_premul(&self) -> ColorLinPremul {
        ColorLinPremul::from_srgba_u8(self.to_array())
    }

    /// Relative luminance in [0, 1], used to pick readable overlay colors.
    pub fn luminance(&self) -> f32 {
        let lin = self.to_lin_premul();
        0.2126 * lin.r + 0.7152 * lin.g + 0.0722 * lin.b
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(Color::parse("#FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("#0f0").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::parse(" white ").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("brown").unwrap(), Color::rgb(0xa5, 0x2a, 0x2a));
    }

    #[test]
    fn rejects_garbage() {
        let err = Color::parse("not-a-color").unwrap_err();
        assert_eq!(err.input, "not-a-color");
        assert!(Color::parse("#12345").is_err());
    }

    #[test]
    fn hex_is_uppercase_rrggbb() {
        assert_eq!(Color::rgb(0xff, 0xdb, 0xac).to_hex(), "#FFDBAC");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn linear_premul_round_trips_srgb_bytes() {
        for c in [Color::rgb(255, 0, 0), Color::rgb(0xff, 0xdb, 0xac), Color::rgb(0xa5, 0x2a, 0x2a)] {
            assert_eq!(c.to_lin_premul().to_srgba_u8(), c.to_array());
        }
    }

    #[test]
    fn luminance_orders_black_below_white() {
        assert!(Color::BLACK.luminance() < 0.01);
        assert!(Color::WHITE.luminance() > 0.99);
    }
}
