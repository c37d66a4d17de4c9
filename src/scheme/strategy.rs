//! Palette generation strategies
//!
//! Each strategy derives a palette from a single base color. Generation is
//! pure: the same base color and options always produce the same palette.
//!
//! | Strategy | Colors |
//! |---|---|
//! | Monochromatic, Shades, Tints | `count` (default 5, 1..=50) |
//! | Complementary | 2 |
//! | Analogous, Triadic, SplitComplementary | 3 |
//! | Tetradic | 4 |
//! | Pastel, Vibrant | 5 |
//! | WebsiteTheme | 5, keyed |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collection::ColorPalette;
use crate::color::ColorConverter;
use crate::constants::generation;
use crate::{Color, ColorError, Result};

/// Closed set of palette generation algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Monochromatic,
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Shades,
    Tints,
    Pastel,
    Vibrant,
    WebsiteTheme,
}

/// Options shared by every strategy
///
/// Only the counted strategies read `count`; the others ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl GenerationOptions {
    pub fn with_count(count: usize) -> Self {
        Self { count: Some(count) }
    }
}

impl Strategy {
    pub const ALL: [Strategy; 11] = [
        Strategy::Monochromatic,
        Strategy::Complementary,
        Strategy::Analogous,
        Strategy::Triadic,
        Strategy::Tetradic,
        Strategy::SplitComplementary,
        Strategy::Shades,
        Strategy::Tints,
        Strategy::Pastel,
        Strategy::Vibrant,
        Strategy::WebsiteTheme,
    ];

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Monochromatic => "monochromatic",
            Strategy::Complementary => "complementary",
            Strategy::Analogous => "analogous",
            Strategy::Triadic => "triadic",
            Strategy::Tetradic => "tetradic",
            Strategy::SplitComplementary => "split_complementary",
            Strategy::Shades => "shades",
            Strategy::Tints => "tints",
            Strategy::Pastel => "pastel",
            Strategy::Vibrant => "vibrant",
            Strategy::WebsiteTheme => "website_theme",
        }
    }

    /// Whether the strategy reads the `count` option
    pub fn accepts_count(&self) -> bool {
        matches!(
            self,
            Strategy::Monochromatic | Strategy::Shades | Strategy::Tints
        )
    }

    /// Number of colors the strategy produces for the given options
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidCount` if a counted strategy receives a
    /// count outside `1..=50`
    pub fn output_count(&self, options: &GenerationOptions) -> Result<usize> {
        match self {
            Strategy::Monochromatic | Strategy::Shades | Strategy::Tints => {
                let count = options.count.unwrap_or(generation::DEFAULT_COUNT);
                validate_count(count)?;
                Ok(count)
            }
            Strategy::Complementary => Ok(2),
            Strategy::Analogous | Strategy::Triadic | Strategy::SplitComplementary => Ok(3),
            Strategy::Tetradic => Ok(4),
            Strategy::Pastel | Strategy::Vibrant | Strategy::WebsiteTheme => {
                Ok(generation::WHEEL_SIZE)
            }
        }
    }

    /// Generate a palette from `base`
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidCount` if a counted strategy receives a
    /// count outside `1..=50`
    pub fn generate(&self, base: Color, options: &GenerationOptions) -> Result<ColorPalette> {
        let count = self.output_count(options)?;
        if options.count.is_some() && !self.accepts_count() {
            tracing::debug!(strategy = self.name(), "count option ignored by fixed-size strategy");
        }

        let palette = match self {
            Strategy::Monochromatic => ColorPalette::new(monochromatic(base, count)),
            Strategy::Complementary => ColorPalette::new(rotations(base, &[0.0, 180.0])),
            Strategy::Analogous => ColorPalette::new(rotations(base, &[-30.0, 0.0, 30.0])),
            Strategy::Triadic => ColorPalette::new(rotations(base, &[0.0, 120.0, 240.0])),
            Strategy::Tetradic => {
                ColorPalette::new(rotations(base, &[0.0, 90.0, 180.0, 270.0]))
            }
            Strategy::SplitComplementary => {
                ColorPalette::new(rotations(base, &[0.0, 150.0, 210.0]))
            }
            Strategy::Shades => ColorPalette::new(stepped(base, count, |c, amount| c.darken(amount))),
            Strategy::Tints => ColorPalette::new(stepped(base, count, |c, amount| c.lighten(amount))),
            Strategy::Pastel => ColorPalette::new(wheel(base, 25.0, 90.0)),
            Strategy::Vibrant => ColorPalette::new(wheel(base, 100.0, 50.0)),
            Strategy::WebsiteTheme => website_theme(base),
        };
        Ok(palette)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ColorError;

    /// Case-insensitive; `-`, `_` and spaces are ignored, so
    /// `"split-complementary"`, `"SplitComplementary"` and
    /// `"split_complementary"` all parse.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().replace('_', "") == normalized)
            .ok_or_else(|| ColorError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}

fn validate_count(count: usize) -> Result<()> {
    if (generation::MIN_COUNT..=generation::MAX_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(ColorError::InvalidCount {
            count,
            min: generation::MIN_COUNT,
            max: generation::MAX_COUNT,
        })
    }
}

/// Per-step amount spreading `LIGHTNESS_SPAN` over `count` colors
fn lightness_step(count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        generation::LIGHTNESS_SPAN / (count - 1) as f64
    }
}

/// Base first, then lightness raised by one step per color (clamped at 100)
fn monochromatic(base: Color, count: usize) -> Vec<Color> {
    let hsl = base.hsl();
    let step = lightness_step(count) * 100.0;
    (0..count)
        .map(|i| {
            if i == 0 {
                base
            } else {
                Color::from_hsl_clamped(hsl.h, hsl.s, hsl.l + step * i as f64)
            }
        })
        .collect()
}

fn rotations(base: Color, degrees: &[f64]) -> Vec<Color> {
    degrees
        .iter()
        .map(|&d| if d == 0.0 { base } else { base.rotate(d) })
        .collect()
}

fn stepped<F>(base: Color, count: usize, shift: F) -> Vec<Color>
where
    F: Fn(Color, f64) -> Color,
{
    let step = lightness_step(count);
    (0..count)
        .map(|i| if i == 0 { base } else { shift(base, step * i as f64) })
        .collect()
}

/// Five hues 72° apart at fixed saturation and lightness
fn wheel(base: Color, saturation: f64, lightness: f64) -> Vec<Color> {
    let hue = base.hsl().h;
    (0..generation::WHEEL_SIZE)
        .map(|i| {
            let h = ColorConverter::normalize_hue(hue + generation::WHEEL_STEP * i as f64);
            Color::from_hsl_clamped(h, saturation, lightness)
        })
        .collect()
}

fn website_theme(base: Color) -> ColorPalette {
    ColorPalette::from_static_keys([
        ("primary", base),
        ("secondary", base.rotate(30.0).desaturate(0.2)),
        ("accent", base.rotate(180.0).saturate(0.2)),
        ("background", Color::from_hsl_clamped(0.0, 0.0, 98.0)),
        ("surface", Color::from_hsl_clamped(0.0, 0.0, 100.0)),
    ])
}
