//! Color space conversion utilities
//!
//! Provides pure conversions between the representations used by the engine:
//! - RGB to/from HSL and HSV (percentages at the API, unit floats inside)
//! - RGB to/from CIE XYZ and CIE L*a*b* under D65
//! - RGB to/from CMYK
//! - Hex parsing and formatting
//!
//! All numeric inputs are clamped to their domain before conversion, so these
//! functions never fail. Validation happens at the [`Color`](crate::Color) boundary.

use palette::{white_point::D65, FromColor, Srgb};

use crate::color::model::{Cmyk, Hsl, Hsv};
use crate::{ColorError, Result};

/// CIE L*a*b* under the D65 reference white
pub type Lab = palette::Lab<D65, f64>;

/// CIE XYZ under the D65 reference white (Y of white = 1.0)
pub type Xyz = palette::Xyz<D65, f64>;

type SrgbHsl = palette::Hsl<palette::encoding::Srgb, f64>;
type SrgbHsv = palette::Hsv<palette::encoding::Srgb, f64>;

/// Stateless color space converter
pub struct ColorConverter;

impl ColorConverter {
    /// Convert RGB (0-255) to HSL
    ///
    /// Grayscale input (r = g = b) yields hue 0 and saturation 0.
    ///
    /// # Returns
    ///
    /// HSL with hue in [0, 360) and saturation/lightness in [0, 100]
    pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
        let hsl = SrgbHsl::from_color(srgb(r, g, b));
        if r == g && g == b {
            return Hsl::new(0.0, 0.0, hsl.lightness * 100.0);
        }
        Hsl::new(
            Self::normalize_hue(hsl.hue.into_positive_degrees()),
            hsl.saturation * 100.0,
            hsl.lightness * 100.0,
        )
    }

    /// Convert HSL to RGB (0-255)
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees, wrapped into [0, 360)
    /// * `s`, `l` - Saturation and lightness in percent, clamped to [0, 100]
    pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
        let hsl = SrgbHsl::new(
            Self::normalize_hue(h),
            clamp_percent(s) / 100.0,
            clamp_percent(l) / 100.0,
        );
        srgb_to_bytes(Srgb::from_color(hsl))
    }

    /// Convert RGB (0-255) to HSV
    pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
        let hsv = SrgbHsv::from_color(srgb(r, g, b));
        if r == g && g == b {
            return Hsv::new(0.0, 0.0, hsv.value * 100.0);
        }
        Hsv::new(
            Self::normalize_hue(hsv.hue.into_positive_degrees()),
            hsv.saturation * 100.0,
            hsv.value * 100.0,
        )
    }

    /// Convert HSV to RGB (0-255)
    ///
    /// Saturation and value are percentages clamped to [0, 100].
    pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
        let hsv = SrgbHsv::new(
            Self::normalize_hue(h),
            clamp_percent(s) / 100.0,
            clamp_percent(v) / 100.0,
        );
        srgb_to_bytes(Srgb::from_color(hsv))
    }

    /// Convert RGB (0-255) to CIE XYZ (D65)
    ///
    /// Applies the sRGB-to-linear transfer function (threshold 0.04045)
    /// before the linear RGB to XYZ matrix.
    pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
        Xyz::from_color(srgb(r, g, b))
    }

    /// Convert CIE XYZ (D65) to RGB (0-255), clamped to the sRGB gamut
    pub fn xyz_to_rgb(xyz: Xyz) -> [u8; 3] {
        srgb_to_bytes(Srgb::from_color(xyz))
    }

    /// Convert RGB (0-255) to CIE L*a*b* (D65)
    ///
    /// The nonlinear Lab transform switches between its cube-root and linear
    /// regimes at ε = (6/29)³ with κ = (29/3)³.
    pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
        Lab::from_color(srgb(r, g, b))
    }

    /// Convert CIE L*a*b* (D65) to RGB (0-255), clamped to the sRGB gamut
    pub fn lab_to_rgb(lab: Lab) -> [u8; 3] {
        srgb_to_bytes(Srgb::from_color(lab))
    }

    /// Convert CIE XYZ to CIE L*a*b*
    pub fn xyz_to_lab(xyz: Xyz) -> Lab {
        Lab::from_color(xyz)
    }

    /// Convert CIE L*a*b* to CIE XYZ
    pub fn lab_to_xyz(lab: Lab) -> Xyz {
        Xyz::from_color(lab)
    }

    /// Convert RGB (0-255) to CMYK percentages
    ///
    /// Pure black (k = 100) reports c = m = y = 0.
    pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
        let max = unit(r.max(g).max(b));
        let k = 1.0 - max;

        if max == 0.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }

        let ink = |channel: u8| (1.0 - unit(channel) - k) / (1.0 - k) * 100.0;
        Cmyk::new(ink(r), ink(g), ink(b), k * 100.0)
    }

    /// Convert CMYK percentages (each clamped to [0, 100]) to RGB (0-255)
    pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> [u8; 3] {
        let k = clamp_percent(k) / 100.0;
        let channel = |ink: f64| to_byte((1.0 - clamp_percent(ink) / 100.0) * (1.0 - k));
        [channel(c), channel(m), channel(y)]
    }

    /// Parse a hexadecimal color string
    ///
    /// Accepts `#rgb`, `#rrggbb`, `rgb` and `rrggbb` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` for empty input, any length other
    /// than 3 or 6 digits, or non-hex characters.
    pub fn parse_hex(input: &str) -> Result<[u8; 3]> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        let invalid = |reason: String| ColorError::InvalidHex {
            input: input.to_string(),
            reason,
        };

        if digits.is_empty() {
            return Err(invalid("empty color".to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("non-hex character".to_string()));
        }

        let nibble = |c: u8| (c as char).to_digit(16).unwrap_or(0) as u8;
        let bytes = digits.as_bytes();

        match bytes.len() {
            3 => Ok([
                nibble(bytes[0]) * 17,
                nibble(bytes[1]) * 17,
                nibble(bytes[2]) * 17,
            ]),
            6 => Ok([
                nibble(bytes[0]) << 4 | nibble(bytes[1]),
                nibble(bytes[2]) << 4 | nibble(bytes[3]),
                nibble(bytes[4]) << 4 | nibble(bytes[5]),
            ]),
            n => Err(invalid(format!("expected 3 or 6 digits, got {}", n))),
        }
    }

    /// Format RGB (0-255) as `#rrggbb` with lowercase digits
    pub fn to_hex(r: u8, g: u8, b: u8) -> String {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Wrap a hue in degrees into [0, 360)
    ///
    /// Non-finite input maps to 0.
    pub fn normalize_hue(h: f64) -> f64 {
        if !h.is_finite() {
            return 0.0;
        }
        let wrapped = h.rem_euclid(360.0);
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }
}

fn unit(channel: u8) -> f64 {
    channel as f64 / 255.0
}

fn to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

fn srgb(r: u8, g: u8, b: u8) -> Srgb<f64> {
    Srgb::new(unit(r), unit(g), unit(b))
}

fn srgb_to_bytes(color: Srgb<f64>) -> [u8; 3] {
    [to_byte(color.red), to_byte(color.green), to_byte(color.blue)]
}
