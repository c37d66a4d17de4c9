//! The `Color` value type and its derived representations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::analysis::ColorAnalyzer;
use crate::color::conversion::{ColorConverter, Lab, Xyz};
use crate::color::manipulation::ColorManipulator;
use crate::{ColorError, Result};

/// HSL coordinates: hue in degrees [0, 360), saturation and lightness in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// HSV coordinates: hue in degrees [0, 360), saturation and value in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// CMYK coordinates, each in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

/// An immutable 8-bit sRGB color
///
/// Only the (r, g, b) triple is stored; every other representation is
/// computed on demand. Equality and hashing use the triple. Serializes as
/// its `#rrggbb` hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from 8-bit channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from integer channels, validating each against [0, 255]
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ComponentOutOfRange` naming the first offending channel
    pub fn try_rgb(r: i32, g: i32, b: i32) -> Result<Self> {
        let channel = |component: &'static str, value: i32| {
            u8::try_from(value).map_err(|_| ColorError::ComponentOutOfRange {
                component,
                value: value as f64,
                min: 0.0,
                max: 255.0,
            })
        };
        Ok(Self::new(channel("r", r)?, channel("g", g)?, channel("b", b)?))
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional)
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` if the string is malformed
    pub fn from_hex(hex: &str) -> Result<Self> {
        let [r, g, b] = ColorConverter::parse_hex(hex)?;
        Ok(Self::new(r, g, b))
    }

    /// Create a color from HSL
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees, any finite value (wrapped into [0, 360))
    /// * `s`, `l` - Saturation and lightness in percent [0, 100]
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ComponentOutOfRange` if a component is outside its domain
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Result<Self> {
        check_hue(h)?;
        check_percent("s", s)?;
        check_percent("l", l)?;
        Ok(Self::from_hsl_clamped(h, s, l))
    }

    /// Create a color from HSV (hue in degrees, saturation and value in percent)
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ComponentOutOfRange` if a component is outside its domain
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Result<Self> {
        check_hue(h)?;
        check_percent("s", s)?;
        check_percent("v", v)?;
        let [r, g, b] = ColorConverter::hsv_to_rgb(h, s, v);
        Ok(Self::new(r, g, b))
    }

    /// Create a color from CMYK percentages
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ComponentOutOfRange` if a component is outside [0, 100]
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Result<Self> {
        check_percent("c", c)?;
        check_percent("m", m)?;
        check_percent("y", y)?;
        check_percent("k", k)?;
        let [r, g, b] = ColorConverter::cmyk_to_rgb(c, m, y, k);
        Ok(Self::new(r, g, b))
    }

    /// Create a color from CIE Lab, clamping to the sRGB gamut
    pub fn from_lab(lab: Lab) -> Self {
        let [r, g, b] = ColorConverter::lab_to_rgb(lab);
        Self::new(r, g, b)
    }

    /// Create a color from CIE XYZ, clamping to the sRGB gamut
    pub fn from_xyz(xyz: Xyz) -> Self {
        let [r, g, b] = ColorConverter::xyz_to_rgb(xyz);
        Self::new(r, g, b)
    }

    /// HSL construction that clamps instead of validating
    pub(crate) fn from_hsl_clamped(h: f64, s: f64, l: f64) -> Self {
        let [r, g, b] = ColorConverter::hsl_to_rgb(h, s, l);
        Self::new(r, g, b)
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`, lowercase
    pub fn to_hex(&self) -> String {
        ColorConverter::to_hex(self.r, self.g, self.b)
    }

    pub fn hsl(&self) -> Hsl {
        ColorConverter::rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn hsv(&self) -> Hsv {
        ColorConverter::rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn lab(&self) -> Lab {
        ColorConverter::rgb_to_lab(self.r, self.g, self.b)
    }

    pub fn xyz(&self) -> Xyz {
        ColorConverter::rgb_to_xyz(self.r, self.g, self.b)
    }

    pub fn cmyk(&self) -> Cmyk {
        ColorConverter::rgb_to_cmyk(self.r, self.g, self.b)
    }

    /// Increase HSL lightness by `amount * 100`
    pub fn lighten(&self, amount: f64) -> Self {
        ColorManipulator::lighten(*self, amount)
    }

    /// Decrease HSL lightness by `amount * 100`
    pub fn darken(&self, amount: f64) -> Self {
        ColorManipulator::darken(*self, amount)
    }

    /// Increase HSL saturation by `amount * 100`
    pub fn saturate(&self, amount: f64) -> Self {
        ColorManipulator::saturate(*self, amount)
    }

    /// Decrease HSL saturation by `amount * 100`
    pub fn desaturate(&self, amount: f64) -> Self {
        ColorManipulator::desaturate(*self, amount)
    }

    /// Rotate the hue by `degrees`
    pub fn rotate(&self, degrees: f64) -> Self {
        ColorManipulator::rotate(*self, degrees)
    }

    /// Blend with `other`; `weight` is the share of `self`
    pub fn mix(&self, other: Color, weight: f64) -> Self {
        ColorManipulator::mix(*self, other, weight)
    }

    /// Set HSL lightness to `target * 100`
    pub fn with_lightness(&self, target: f64) -> Self {
        ColorManipulator::with_lightness(*self, target)
    }

    pub fn complement(&self) -> Self {
        ColorManipulator::rotate(*self, 180.0)
    }

    pub fn invert(&self) -> Self {
        ColorManipulator::invert(*self)
    }

    pub fn grayscale(&self) -> Self {
        ColorManipulator::grayscale(*self)
    }

    /// Perceptual brightness on a 0-255 scale
    pub fn brightness(&self) -> f64 {
        ColorAnalyzer::brightness(*self)
    }

    pub fn is_light(&self) -> bool {
        ColorAnalyzer::is_light(*self)
    }

    pub fn is_dark(&self) -> bool {
        !ColorAnalyzer::is_light(*self)
    }

    /// WCAG relative luminance in [0, 1]
    pub fn luminance(&self) -> f64 {
        ColorAnalyzer::relative_luminance(*self)
    }

    /// WCAG contrast ratio against `other`, in [1, 21]
    pub fn contrast_ratio(&self, other: Color) -> f64 {
        ColorAnalyzer::contrast_ratio(*self, other)
    }

    /// CIE76 ΔE against `other`
    pub fn delta_e(&self, other: Color) -> f64 {
        ColorAnalyzer::delta_e(*self, other)
    }

    pub fn is_warm(&self) -> bool {
        ColorAnalyzer::is_warm(*self)
    }

    pub fn is_cool(&self) -> bool {
        ColorAnalyzer::is_cool(*self)
    }

    pub fn is_vibrant(&self) -> bool {
        ColorAnalyzer::is_vibrant(*self)
    }

    pub fn is_muted(&self) -> bool {
        ColorAnalyzer::is_muted(*self)
    }
}

fn check_hue(h: f64) -> Result<()> {
    if h.is_finite() {
        Ok(())
    } else {
        Err(ColorError::ComponentOutOfRange {
            component: "h",
            value: h,
            min: 0.0,
            max: 360.0,
        })
    }
}

fn check_percent(component: &'static str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::ComponentOutOfRange {
            component,
            value,
            min: 0.0,
            max: 100.0,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.rgb()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}
