//! Color types and conversion functions for langcolors.
//!
//! Provides three color types (`Rgb`, `Xyz`, `Lab`) and the pure conversion
//! chain between them: hex string -> 8-bit sRGB -> CIE XYZ -> CIELAB.
//! Uses `f64` throughout for precision.
//!
//! Formulas follow the easyrgb.com reference math. Lab is computed against the
//! CIE 1964 10° observer with illuminant F5 as the reference white.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit sRGB color, as written in a `#RRGGBB` hex string.
///
/// Serializes as a lowercase hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CIE 1931 XYZ tristimulus values, scaled so that Y of white is ~100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIELAB color: lightness `l` in [0, 100] and unbounded `a`/`b` axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Reference white of a perfect reflecting diffuser, CIE 1964 10° observer,
/// illuminant F5 (daylight fluorescent).
pub const REFERENCE_WHITE: Xyz = Xyz {
    x: 93.369,
    y: 100.000,
    z: 98.636,
};

impl Rgb {
    /// Parses a `#RRGGBB` hex string. See [`parse_hex`].
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        parse_hex(hex)
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses a hex color string of exactly the form `#RRGGBB` (case insensitive).
///
/// Returns `ColorError::InvalidFormat` if the input is not 7 bytes long or
/// does not start with `#`, and `ColorError::InvalidHex` if the six trailing
/// characters are not hexadecimal digits.
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let digits = match s.strip_prefix('#') {
        Some(digits) if s.len() == 7 => digits,
        _ => return Err(ColorError::InvalidFormat(s.to_string())),
    };
    // from_str_radix tolerates a leading '+', so validate the digits up front.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
    };
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Applies inverse sRGB gamma to a single component in [0, 1].
fn srgb_component_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Converts 8-bit sRGB to CIE XYZ via gamma expansion and the sRGB matrix.
pub fn rgb_to_xyz(c: Rgb) -> Xyz {
    let r = srgb_component_to_linear(f64::from(c.r) / 255.0) * 100.0;
    let g = srgb_component_to_linear(f64::from(c.g) / 255.0) * 100.0;
    let b = srgb_component_to_linear(f64::from(c.b) / 255.0) * 100.0;

    Xyz {
        x: r * 0.4124 + g * 0.3576 + b * 0.1805,
        y: r * 0.2126 + g * 0.7152 + b * 0.0722,
        z: r * 0.0193 + g * 0.1192 + b * 0.9505,
    }
}

/// The CIE Lab companding function applied to a white-relative ratio.
fn lab_f(n: f64) -> f64 {
    if n > 0.008856 {
        n.cbrt()
    } else {
        7.787 * n + 16.0 / 116.0
    }
}

/// Converts CIE XYZ to CIELAB relative to [`REFERENCE_WHITE`].
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = lab_f(c.x / REFERENCE_WHITE.x);
    let fy = lab_f(c.y / REFERENCE_WHITE.y);
    let fz = lab_f(c.z / REFERENCE_WHITE.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convenience: sRGB to Lab via the chain sRGB -> XYZ -> Lab.
pub fn rgb_to_lab(c: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(c))
}

/// Convenience: hex string to Lab.
pub fn hex_to_lab(s: &str) -> Result<Lab, ColorError> {
    parse_hex(s).map(rgb_to_lab)
}
