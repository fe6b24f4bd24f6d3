//! Color primitives
//!
//! Plain RGBA colors with `f32` channels in `0.0..=1.0`, gamma-encoded sRGB.
//! Everything the token engine needs from a color lives here: hex parsing and
//! formatting, blending, a luma measure and HSV conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors produced when parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color length {0}, expected 3, 6 or 8 digits")]
    InvalidLength(usize),

    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (gamma-encoded sRGB)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from `0xRRGGBB` plus an explicit alpha
    pub fn from_hex_alpha(hex: u32, alpha: f32) -> Self {
        Self::from_hex(hex).with_alpha(alpha)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }

        // All digits are ASCII hex at this point
        let nibble = |i: usize| (digits.as_bytes()[i] as char).to_digit(16).unwrap_or(0);
        let byte = |i: usize| nibble(i) * 16 + nibble(i + 1);

        match digits.len() {
            3 => {
                let r = nibble(0) * 17;
                let g = nibble(1) * 17;
                let b = nibble(2) * 17;
                Ok(Self::from_hex((r << 16) | (g << 8) | b))
            }
            6 => Ok(Self::from_hex((byte(0) << 16) | (byte(2) << 8) | byte(4))),
            8 => {
                let rgb = (byte(0) << 16) | (byte(2) << 8) | byte(4);
                Ok(Self::from_hex_alpha(rgb, byte(6) as f32 / 255.0))
            }
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels quantized to 8 bits
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (sanitize_channel(c) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Color {
            r: lerp_channel(a.r, b.r, t),
            g: lerp_channel(a.g, b.g, t),
            b: lerp_channel(a.b, b.b, t),
            a: lerp_channel(a.a, b.a, t),
        }
    }

    /// Move this color toward `other` by `amount` (0 keeps `self`, 1 gives `other`)
    pub fn mix(&self, other: Color, amount: f32) -> Color {
        Color::lerp(self, &other, amount)
    }

    /// Perceived lightness estimate (Rec. 709 weights on the encoded channels).
    ///
    /// Not a color-science-correct lightness; it is the ordering measure used
    /// to keep color ramps monotonic.
    pub fn luma(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Replace NaN channels with 0 and clamp everything into `0.0..=1.0`
    pub fn sanitized(&self) -> Color {
        Color {
            r: sanitize_channel(self.r),
            g: sanitize_channel(self.g),
            b: sanitize_channel(self.b),
            a: sanitize_channel(self.a),
        }
    }

    /// True when every channel is finite and within `0.0..=1.0`
    pub fn is_valid(&self) -> bool {
        self.to_array()
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    pub fn to_hsv(&self) -> Hsv {
        let c = self.sanitized();
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;

        let h = if delta <= f32::EPSILON {
            0.0
        } else if max == c.r {
            60.0 * ((c.g - c.b) / delta).rem_euclid(6.0)
        } else if max == c.g {
            60.0 * ((c.b - c.r) / delta + 2.0)
        } else {
            60.0 * ((c.r - c.g) / delta + 4.0)
        };
        let s = if max <= 0.0 { 0.0 } else { delta / max };

        Hsv { h, s, v: max }
    }

    pub fn from_hsv(hsv: Hsv) -> Color {
        hsv.to_color()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

fn sanitize_channel(c: f32) -> f32 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

fn lerp_channel(from: f32, to: f32, t: f32) -> f32 {
    let value = from + (to - from) * t;
    // Rounding must never overshoot either endpoint
    value.clamp(from.min(to), from.max(to))
}

// ─────────────────────────────────────────────────────────────────────────────
// HSV
// ─────────────────────────────────────────────────────────────────────────────

/// Hue in degrees `0.0..360.0`, saturation and value in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert to an opaque color. Hue wraps, saturation and value clamp.
    pub fn to_color(&self) -> Color {
        let h = if self.h.is_finite() {
            self.h.rem_euclid(360.0)
        } else {
            0.0
        };
        let s = sanitize_channel(self.s);
        let v = sanitize_channel(self.v);

        let c = v * s;
        let sector = h / 60.0;
        let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::rgb(r + m, g + m, b + m).sanitized()
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        hsv.to_color()
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        color.to_hsv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.002
    }

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse_hex("#1677ff").unwrap(), Color::from_hex(0x1677FF));
        assert_eq!(Color::parse_hex("1677FF").unwrap(), Color::from_hex(0x1677FF));
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);

        let translucent = Color::parse_hex("#00000080").unwrap();
        assert!(close(translucent.a, 128.0 / 255.0));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(Color::parse_hex(""), Err(ColorParseError::Empty));
        assert_eq!(Color::parse_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(Color::parse_hex("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert_eq!(Color::parse_hex("#12345g"), Err(ColorParseError::InvalidDigit('g')));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::from_hex(0x1677FF).to_hex(), "#1677ff");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_hex(), "#00000080");
        assert_eq!("#52c41a".parse::<Color>().unwrap().to_string(), "#52c41a");
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::from_hex(0x141414);
        let b = Color::from_hex(0x1677FF);
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
        assert_eq!(a.mix(b, 2.0), b);

        let mid = a.mix(Color::WHITE, 0.5);
        assert!(mid.luma() > a.luma());
        assert!(mid.luma() < 1.0);
    }

    #[test]
    fn test_luma_ordering() {
        assert_eq!(Color::WHITE.luma(), 1.0);
        assert_eq!(Color::BLACK.luma(), 0.0);
        assert!(Color::from_hex(0x00FF00).luma() > Color::from_hex(0xFF0000).luma());
    }

    #[test]
    fn test_sanitized() {
        let c = Color::rgba(f32::NAN, 1.5, -0.25, 1.0).sanitized();
        assert_eq!(c, Color::rgb(0.0, 1.0, 0.0));
        assert!(c.is_valid());
        assert!(!Color::rgb(f32::INFINITY, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_hsv_conversion() {
        let blue = Color::from_hex(0x1677FF);
        let hsv = blue.to_hsv();
        assert!(close(hsv.h, 215.0), "hue was {}", hsv.h);
        assert!(close(hsv.s, 0.914), "saturation was {}", hsv.s);
        assert!(close(hsv.v, 1.0));

        let back = hsv.to_color();
        assert!(close(back.r, blue.r));
        assert!(close(back.g, blue.g));
        assert!(close(back.b, blue.b));
    }

    #[test]
    fn test_hsv_clamps_and_wraps() {
        let red = Hsv::new(360.0, 1.0, 1.0).to_color();
        assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));

        let over = Hsv::new(-120.0, 2.0, 5.0).to_color();
        assert!(over.is_valid());
        assert!(close(over.b, 1.0));

        let gray = Color::rgb(0.5, 0.5, 0.5).to_hsv();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0xFAAD14)).unwrap();
        assert_eq!(json, "\"#faad14\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::from_hex(0xFAAD14));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
