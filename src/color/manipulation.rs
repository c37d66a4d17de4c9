//! Color manipulation operators
//!
//! Every operator takes a color and returns a new one. Lightness and
//! saturation operators work in HSL space with fractional amounts
//! (`0.2` shifts by 20 percentage points) and clamp instead of failing.

use std::str::FromStr;

use crate::color::conversion::ColorConverter;
use crate::{Color, ColorError, Result};

/// Stateless color manipulator
pub struct ColorManipulator;

impl ColorManipulator {
    pub fn lighten(color: Color, amount: f64) -> Color {
        let hsl = color.hsl();
        Color::from_hsl_clamped(hsl.h, hsl.s, hsl.l + amount * 100.0)
    }

    pub fn darken(color: Color, amount: f64) -> Color {
        Self::lighten(color, -amount)
    }

    pub fn saturate(color: Color, amount: f64) -> Color {
        let hsl = color.hsl();
        Color::from_hsl_clamped(hsl.h, hsl.s + amount * 100.0, hsl.l)
    }

    pub fn desaturate(color: Color, amount: f64) -> Color {
        Self::saturate(color, -amount)
    }

    /// Rotate the hue; the result wraps into [0, 360)
    pub fn rotate(color: Color, degrees: f64) -> Color {
        let hsl = color.hsl();
        Color::from_hsl_clamped(ColorConverter::normalize_hue(hsl.h + degrees), hsl.s, hsl.l)
    }

    /// Per-channel linear interpolation
    ///
    /// `weight` (clamped to [0, 1]) is the share of `first`: 1 returns
    /// `first`, 0 returns `second`.
    pub fn mix(first: Color, second: Color, weight: f64) -> Color {
        let w = if weight.is_nan() { 0.5 } else { weight.clamp(0.0, 1.0) };
        let blend = |a: u8, b: u8| {
            (a as f64 * w + b as f64 * (1.0 - w)).round().clamp(0.0, 255.0) as u8
        };
        Color::new(
            blend(first.red(), second.red()),
            blend(first.green(), second.green()),
            blend(first.blue(), second.blue()),
        )
    }

    /// Set lightness to `target * 100`, keeping hue and saturation
    pub fn with_lightness(color: Color, target: f64) -> Color {
        let hsl = color.hsl();
        Color::from_hsl_clamped(hsl.h, hsl.s, target * 100.0)
    }

    pub fn invert(color: Color) -> Color {
        Color::new(255 - color.red(), 255 - color.green(), 255 - color.blue())
    }

    pub fn grayscale(color: Color) -> Color {
        Self::desaturate(color, 1.0)
    }

    /// Apply a named manipulation
    pub fn apply(color: Color, manipulation: Manipulation) -> Color {
        match manipulation {
            Manipulation::Lighten(amount) => Self::lighten(color, amount),
            Manipulation::Darken(amount) => Self::darken(color, amount),
            Manipulation::Saturate(amount) => Self::saturate(color, amount),
            Manipulation::Desaturate(amount) => Self::desaturate(color, amount),
            Manipulation::Rotate(degrees) => Self::rotate(color, degrees),
            Manipulation::Lightness(target) => Self::with_lightness(color, target),
            Manipulation::Complement => Self::rotate(color, 180.0),
            Manipulation::Invert => Self::invert(color),
            Manipulation::Grayscale => Self::grayscale(color),
        }
    }
}

/// A single-color operation selected by name, as front-ends receive it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Manipulation {
    Lighten(f64),
    Darken(f64),
    Saturate(f64),
    Desaturate(f64),
    Rotate(f64),
    Lightness(f64),
    Complement,
    Invert,
    Grayscale,
}

/// Operation names without their parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManipulationKind {
    Lighten,
    Darken,
    Saturate,
    Desaturate,
    Rotate,
    Lightness,
    Complement,
    Invert,
    Grayscale,
}

impl FromStr for ManipulationKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lighten" => Ok(Self::Lighten),
            "darken" => Ok(Self::Darken),
            "saturate" => Ok(Self::Saturate),
            "desaturate" => Ok(Self::Desaturate),
            "rotate" | "hue" => Ok(Self::Rotate),
            "lightness" | "with_lightness" => Ok(Self::Lightness),
            "complement" => Ok(Self::Complement),
            "invert" => Ok(Self::Invert),
            "grayscale" | "greyscale" => Ok(Self::Grayscale),
            _ => Err(ColorError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

impl Manipulation {
    /// Build a manipulation from its name and parameter
    ///
    /// The parameter is a fraction for lightness/saturation operations and
    /// degrees for `rotate`; parameterless operations ignore it.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::UnknownOperation` for unrecognized names
    pub fn parse(name: &str, amount: f64) -> Result<Self> {
        let kind: ManipulationKind = name.parse()?;
        Ok(match kind {
            ManipulationKind::Lighten => Self::Lighten(amount),
            ManipulationKind::Darken => Self::Darken(amount),
            ManipulationKind::Saturate => Self::Saturate(amount),
            ManipulationKind::Desaturate => Self::Desaturate(amount),
            ManipulationKind::Rotate => Self::Rotate(amount),
            ManipulationKind::Lightness => Self::Lightness(amount),
            ManipulationKind::Complement => Self::Complement,
            ManipulationKind::Invert => Self::Invert,
            ManipulationKind::Grayscale => Self::Grayscale,
        })
    }
}
