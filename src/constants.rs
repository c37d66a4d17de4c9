//! Reference values and thresholds for color analysis and palette generation
//!
//! This module contains compile-time constants for accessibility checks,
//! color classification, extraction and palette generation bounds.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 is the reference white used for all
/// XYZ and Lab conversions in this crate.
pub mod d65 {
    /// D65 white point in CIE XYZ color space (Xn, Yn, Zn)
    /// Source: CIE 15:2004 Colorimetry, 3rd edition
    pub const WHITE_POINT_XYZ: [f64; 3] = [0.95047, 1.00000, 1.08883];
}

/// WCAG 2.x contrast requirements
pub mod wcag {
    /// Level AA, normal text
    pub const AA_NORMAL: f64 = 4.5;

    /// Level AA, large text (18pt, or 14pt bold)
    pub const AA_LARGE: f64 = 3.0;

    /// Level AAA, normal text
    pub const AAA_NORMAL: f64 = 7.0;

    /// Level AAA, large text
    pub const AAA_LARGE: f64 = 4.5;

    /// Channel threshold of the relative luminance gamma curve
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Luminance offset applied to both sides of the contrast ratio
    pub const FLARE: f64 = 0.05;
}

/// Perceptual classification bands
pub mod classification {
    /// Brightness at or above this value is considered light
    pub const LIGHT_BRIGHTNESS: f64 = 128.0;

    /// Minimum HSL saturation (percent) for a vibrant color
    pub const VIBRANT_MIN_SATURATION: f64 = 70.0;

    /// Lightness band (percent) for a vibrant color
    pub const VIBRANT_MIN_LIGHTNESS: f64 = 30.0;
    pub const VIBRANT_MAX_LIGHTNESS: f64 = 70.0;

    /// HSL saturation (percent) below which a color is muted
    pub const MUTED_MAX_SATURATION: f64 = 40.0;

    /// Cool hues lie in [COOL_HUE_START, COOL_HUE_END], warm hues everywhere else
    pub const COOL_HUE_START: f64 = 90.0;
    pub const COOL_HUE_END: f64 = 270.0;
}

/// Palette generation parameters
pub mod generation {
    /// Accepted range of the `count` option
    pub const MIN_COUNT: usize = 1;
    pub const MAX_COUNT: usize = 50;

    /// Count used when a counted strategy receives none
    pub const DEFAULT_COUNT: usize = 5;

    /// Total lightness span covered by the stepped strategies (fraction)
    pub const LIGHTNESS_SPAN: f64 = 0.8;

    /// Hue step of the pastel and vibrant wheels (degrees)
    pub const WHEEL_STEP: f64 = 72.0;

    /// Number of colors on the pastel and vibrant wheels
    pub const WHEEL_SIZE: usize = 5;

    /// Lightness shift (fraction) for light/dark surface variants
    pub const SURFACE_VARIANT_DELTA: f64 = 0.15;

    /// Primary (#2196f3) used for surface suggestions on an empty palette
    pub const DEFAULT_PRIMARY: [u8; 3] = [0x21, 0x96, 0xf3];
}

/// Dominant color extraction parameters
pub mod extraction {
    /// Accepted range of the requested color count
    pub const MIN_COUNT: usize = 1;
    pub const MAX_COUNT: usize = 32;

    /// Default number of extracted colors
    pub const DEFAULT_COUNT: usize = 5;

    /// Channel bucket granularity for the frequency histogram
    pub const QUANTIZATION_STEP: u8 = 16;

    /// Buckets below this HSL saturation (percent) are treated as gray
    pub const MIN_SATURATION: f64 = 15.0;

    /// Buckets closer than this ΔE76 to a selected color are merged into it
    pub const MERGE_DELTA_E: f64 = 12.0;

    /// Upper bound on sampled pixels; larger images are strided
    pub const MAX_SAMPLES: usize = 40_000;

    /// Hue rotation (degrees) applied each time the fallback palette is cycled
    pub const FALLBACK_CYCLE_ROTATION: f64 = 15.0;

    /// Deterministic palette used to pad short extraction results
    pub const FALLBACK_PALETTE: [&str; 10] = [
        "#2196f3", "#f44336", "#4caf50", "#ffc107", "#9c27b0",
        "#00bcd4", "#ff5722", "#3f51b5", "#8bc34a", "#e91e63",
    ];
}

/// Image loading limits
pub mod loader {
    /// Largest accepted encoded input (bytes)
    pub const MAX_BYTES: usize = 10 * 1024 * 1024;

    /// Largest accepted decoded image (pixels)
    pub const MAX_PIXELS: u64 = 40_000_000;

    /// Accepted MIME types
    pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_fallback_palette_parses() {
        for hex in extraction::FALLBACK_PALETTE {
            assert!(Color::from_hex(hex).is_ok(), "{hex}");
        }
    }
}
