//! # Colorsmith
//!
//! A Rust crate for color math, palette generation and dominant color
//! extraction.
//!
//! This library provides:
//! - Conversions between RGB, HSL, HSV, CIE Lab, CIE XYZ, CMYK and hex
//! - Manipulation (lighten, darken, saturate, rotate, mix)
//! - WCAG contrast analysis and perceptual classification
//! - Histogram-based dominant color extraction from images
//! - Eleven palette generation strategies and theme derivation
//!
//! ## Example
//!
//! ```rust
//! use colorsmith::{Color, ColorPaletteBuilder, Role, Strategy, ThemeGenerator};
//!
//! let mut builder = ColorPaletteBuilder::new();
//! builder
//!     .with_base_color(Color::from_hex("#2196f3")?)
//!     .with_strategy(Strategy::Triadic);
//! let palette = builder.build()?;
//! assert_eq!(palette.count(), 3);
//!
//! let theme = ThemeGenerator::new().generate(&palette, &[Role::Primary, Role::Accent])?;
//! println!("{}", serde_json::to_string(&theme).unwrap());
//! # Ok::<(), colorsmith::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod collection;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod image_loader;
pub mod scheme;
pub mod theme;

pub use collection::{ColorPalette, ColorPaletteBuilder, PaletteEntry, PaletteKey};
pub use color::{
    Cmyk, Color, ColorAnalyzer, ColorConverter, ColorManipulator, Hsl, Hsv, Lab, Manipulation,
    WcagCompliance, WcagLevel, WcagResult, TextSize, Xyz,
};
pub use config::{EngineConfig, ExtractionConfig, LoaderConfig};
pub use error::{ColorError, Result};
pub use extraction::{ColorExtractor, DominantColor};
pub use image_loader::{Channels, PixelSource, RgbaBuffer};
pub use scheme::{GenerationOptions, Strategy};
pub use theme::{Role, Theme, ThemeGenerator};

/// RGB channels as front-ends receive them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbInfo {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL coordinates rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslInfo {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Display-oriented summary of a color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    /// Lowercase `#rrggbb`
    pub hex: String,
    pub rgb: RgbInfo,
    pub hsl: HslInfo,
    /// Perceptual brightness (0-255)
    pub brightness: f64,
    pub is_light: bool,
    pub is_dark: bool,
}

impl From<Color> for ColorInfo {
    fn from(color: Color) -> Self {
        let round = |v: f64| (v * 10.0).round() / 10.0;
        let hsl = color.hsl();
        Self {
            hex: color.to_hex(),
            rgb: RgbInfo {
                r: color.red(),
                g: color.green(),
                b: color.blue(),
            },
            hsl: HslInfo {
                h: round(hsl.h),
                s: round(hsl.s),
                l: round(hsl.l),
            },
            brightness: round(color.brightness()),
            is_light: color.is_light(),
            is_dark: color.is_dark(),
        }
    }
}

/// [`ColorInfo`] for one palette entry, with its key if the palette is keyed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub info: ColorInfo,
}

/// Contrast report for a foreground/background pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityCheck {
    /// WCAG contrast ratio (1.0-21.0), rounded to two decimals
    pub contrast_ratio: f64,
    pub wcag: WcagCompliance,
    /// Black or white hex, whichever reads better on the background
    pub suggested_text_color: String,
}

/// Check the contrast of two hex colors
///
/// # Errors
///
/// Returns `ColorError::InvalidHex` if either color does not parse
pub fn check_accessibility(foreground: &str, background: &str) -> Result<AccessibilityCheck> {
    let foreground = Color::from_hex(foreground)?;
    let background = Color::from_hex(background)?;
    let ratio = foreground.contrast_ratio(background);
    Ok(AccessibilityCheck {
        contrast_ratio: (ratio * 100.0).round() / 100.0,
        wcag: WcagCompliance::from_ratio(ratio),
        suggested_text_color: ColorAnalyzer::suggested_text_color(background).to_hex(),
    })
}

/// Generate a palette from a hex base color and a strategy name
///
/// # Arguments
///
/// * `base_hex` - Base color, `#rgb` or `#rrggbb`
/// * `scheme` - Strategy name such as `"triadic"` or `"website-theme"`
/// * `count` - Color count for the counted strategies
///
/// # Errors
///
/// Returns a validation error for a malformed hex, an unknown strategy or
/// an out-of-range count
pub fn generate_palette(base_hex: &str, scheme: &str, count: Option<usize>) -> Result<ColorPalette> {
    let base = Color::from_hex(base_hex)?;
    let strategy: Strategy = scheme.parse()?;
    strategy.generate(base, &GenerationOptions { count })
}

/// Extract `count` dominant colors with the default extractor
///
/// # Errors
///
/// Returns `ColorError::InvalidCount` if `count` is outside `1..=32`
pub fn extract_palette<S>(source: &S, count: usize) -> Result<ColorPalette>
where
    S: PixelSource + ?Sized,
{
    let colors = ColorExtractor::new().extract(source, count)?;
    Ok(ColorPalette::new(colors))
}
