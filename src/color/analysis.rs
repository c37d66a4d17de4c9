//! Color analysis and accessibility metrics
//!
//! Provides:
//! - Perceptual brightness and light/dark classification
//! - WCAG relative luminance and contrast ratio
//! - CIE76 ΔE distance in Lab space
//! - Warm/cool/vibrant/muted classification
//! - WCAG AA/AAA pass/fail checks

use serde::{Deserialize, Serialize};

use crate::constants::{classification, wcag};
use crate::Color;

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    AA,
    AAA,
}

/// WCAG text size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Normal,
    Large,
}

/// Pass/fail for both text sizes at one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagResult {
    pub normal: bool,
    pub large: bool,
}

/// Pass/fail for every WCAG level and text size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagCompliance {
    pub aa: WcagResult,
    pub aaa: WcagResult,
}

impl WcagCompliance {
    /// Evaluate all thresholds against a contrast ratio
    pub fn from_ratio(ratio: f64) -> Self {
        let check = |level| WcagResult {
            normal: ColorAnalyzer::passes(ratio, level, TextSize::Normal),
            large: ColorAnalyzer::passes(ratio, level, TextSize::Large),
        };
        Self {
            aa: check(WcagLevel::AA),
            aaa: check(WcagLevel::AAA),
        }
    }
}

/// Stateless color analyzer
pub struct ColorAnalyzer;

impl ColorAnalyzer {
    /// Fast perceptual brightness: `(299 r + 587 g + 114 b) / 1000`
    pub fn brightness(color: Color) -> f64 {
        (299.0 * color.red() as f64 + 587.0 * color.green() as f64 + 114.0 * color.blue() as f64)
            / 1000.0
    }

    /// Brightness at or above 128
    pub fn is_light(color: Color) -> bool {
        Self::brightness(color) >= classification::LIGHT_BRIGHTNESS
    }

    /// WCAG relative luminance
    ///
    /// Each channel is linearized (threshold 0.03928, divisor 12.92,
    /// otherwise `((c + 0.055) / 1.055)^2.4`) and weighted by
    /// (0.2126, 0.7152, 0.0722).
    pub fn relative_luminance(color: Color) -> f64 {
        let linear = |channel: u8| {
            let c = channel as f64 / 255.0;
            if c <= wcag::LINEAR_THRESHOLD {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };

        0.2126 * linear(color.red()) + 0.7152 * linear(color.green()) + 0.0722 * linear(color.blue())
    }

    /// WCAG contrast ratio, symmetric in its arguments and always >= 1
    pub fn contrast_ratio(first: Color, second: Color) -> f64 {
        let l1 = Self::relative_luminance(first);
        let l2 = Self::relative_luminance(second);
        (l1.max(l2) + wcag::FLARE) / (l1.min(l2) + wcag::FLARE)
    }

    /// CIE76 color difference: Euclidean distance in Lab
    pub fn delta_e(first: Color, second: Color) -> f64 {
        let a = first.lab();
        let b = second.lab();
        let dl = a.l - b.l;
        let da = a.a - b.a;
        let db = a.b - b.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// High saturation with mid-band lightness
    pub fn is_vibrant(color: Color) -> bool {
        let hsl = color.hsl();
        hsl.s > classification::VIBRANT_MIN_SATURATION
            && (classification::VIBRANT_MIN_LIGHTNESS..=classification::VIBRANT_MAX_LIGHTNESS)
                .contains(&hsl.l)
    }

    pub fn is_muted(color: Color) -> bool {
        color.hsl().s < classification::MUTED_MAX_SATURATION
    }

    /// Hue in [0, 90) or (270, 360)
    pub fn is_warm(color: Color) -> bool {
        !Self::is_cool(color)
    }

    /// Hue in [90, 270]
    pub fn is_cool(color: Color) -> bool {
        (classification::COOL_HUE_START..=classification::COOL_HUE_END).contains(&color.hsl().h)
    }

    /// Threshold comparison of a contrast ratio against a WCAG requirement
    pub fn passes(ratio: f64, level: WcagLevel, size: TextSize) -> bool {
        let required = match (level, size) {
            (WcagLevel::AA, TextSize::Normal) => wcag::AA_NORMAL,
            (WcagLevel::AA, TextSize::Large) => wcag::AA_LARGE,
            (WcagLevel::AAA, TextSize::Normal) => wcag::AAA_NORMAL,
            (WcagLevel::AAA, TextSize::Large) => wcag::AAA_LARGE,
        };
        ratio >= required
    }

    /// Full WCAG report for a foreground/background pair
    pub fn wcag(foreground: Color, background: Color) -> WcagCompliance {
        WcagCompliance::from_ratio(Self::contrast_ratio(foreground, background))
    }

    /// Candidate with the highest contrast against `background`
    ///
    /// Ties keep the earliest candidate. Returns `None` for an empty slice.
    pub fn most_readable(background: Color, candidates: &[Color]) -> Option<Color> {
        let mut best: Option<(Color, f64)> = None;
        for &candidate in candidates {
            let ratio = Self::contrast_ratio(candidate, background);
            match best {
                Some((_, best_ratio)) if ratio <= best_ratio => {}
                _ => best = Some((candidate, ratio)),
            }
        }
        best.map(|(color, _)| color)
    }

    /// Black or white, whichever contrasts more with `background`
    pub fn suggested_text_color(background: Color) -> Color {
        Self::most_readable(background, &[Color::BLACK, Color::WHITE]).unwrap_or(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_brightness() {
        assert_eq!(ColorAnalyzer::brightness(Color::WHITE), 255.0);
        assert_eq!(ColorAnalyzer::brightness(Color::BLACK), 0.0);
        assert!((ColorAnalyzer::brightness(hex("#ff0000")) - 76.245).abs() < 1e-9);
    }

    #[test]
    fn test_light_threshold() {
        assert!(ColorAnalyzer::is_light(Color::new(128, 128, 128)));
        assert!(!ColorAnalyzer::is_light(Color::new(127, 127, 127)));
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert!(ColorAnalyzer::relative_luminance(Color::BLACK).abs() < 1e-12);
        assert!((ColorAnalyzer::relative_luminance(Color::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = ColorAnalyzer::contrast_ratio(Color::WHITE, Color::BLACK);
        assert!(ratio > 20.0);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_symmetry() {
        let a = hex("#2196f3");
        let b = hex("#fafafa");
        assert_eq!(ColorAnalyzer::contrast_ratio(a, b), ColorAnalyzer::contrast_ratio(b, a));
        assert_eq!(ColorAnalyzer::contrast_ratio(a, a), 1.0);
    }

    #[test]
    fn test_delta_e() {
        assert!(ColorAnalyzer::delta_e(hex("#336699"), hex("#336699")) < 1e-9);
        assert!(ColorAnalyzer::delta_e(Color::BLACK, Color::WHITE) > 99.0);
    }

    #[test]
    fn test_classification() {
        assert!(ColorAnalyzer::is_vibrant(hex("#ff0000")));
        assert!(!ColorAnalyzer::is_vibrant(hex("#ffcccc")));
        assert!(ColorAnalyzer::is_muted(hex("#808080")));
        assert!(ColorAnalyzer::is_warm(hex("#ff8800")));
        assert!(ColorAnalyzer::is_warm(hex("#ff0080")));
        assert!(ColorAnalyzer::is_cool(hex("#0000ff")));
        assert!(ColorAnalyzer::is_cool(hex("#00ff00")));
    }

    #[test]
    fn test_wcag_thresholds() {
        assert!(ColorAnalyzer::passes(4.5, WcagLevel::AA, TextSize::Normal));
        assert!(!ColorAnalyzer::passes(4.49, WcagLevel::AA, TextSize::Normal));
        assert!(ColorAnalyzer::passes(3.0, WcagLevel::AA, TextSize::Large));
        assert!(!ColorAnalyzer::passes(6.9, WcagLevel::AAA, TextSize::Normal));
        assert!(ColorAnalyzer::passes(4.5, WcagLevel::AAA, TextSize::Large));

        let report = WcagCompliance::from_ratio(5.0);
        assert!(report.aa.normal && report.aa.large);
        assert!(!report.aaa.normal && report.aaa.large);
    }

    #[test]
    fn test_suggested_text_color() {
        assert_eq!(ColorAnalyzer::suggested_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(ColorAnalyzer::suggested_text_color(hex("#0d47a1")), Color::WHITE);
        assert_eq!(ColorAnalyzer::suggested_text_color(hex("#ffeb3b")), Color::BLACK);
    }

    #[test]
    fn test_most_readable_prefers_first_on_tie() {
        let bg = hex("#777777");
        let pick = ColorAnalyzer::most_readable(bg, &[Color::WHITE, Color::BLACK, Color::BLACK]);
        assert_eq!(pick, Some(Color::BLACK));
        let pick = ColorAnalyzer::most_readable(bg, &[Color::WHITE, Color::WHITE]);
        assert_eq!(pick, Some(Color::WHITE));
        assert!(ColorAnalyzer::most_readable(bg, &[]).is_none());
    }
}
