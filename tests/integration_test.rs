//! Integration tests for the public colorsmith API
//!
//! These tests validate the end-to-end workflows including:
//! - Hex parsing and color space round trips
//! - Contrast and WCAG checks
//! - Dominant color extraction from decoded images
//! - Palette generation, builder priority and theme derivation
//! - Error handling for invalid input

use colorsmith::image_loader::{load_image, load_image_from_memory};
use colorsmith::{
    check_accessibility, generate_palette, Color, ColorError, ColorExtractor, ColorPalette,
    ColorPaletteBuilder, GenerationOptions, LoaderConfig, RgbaBuffer, Role, Strategy,
    ThemeGenerator,
};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap()
}

fn channel_distance(a: Color, b: Color) -> u8 {
    let [ar, ag, ab] = a.rgb();
    let [br, bg, bb] = b.rgb();
    ar.abs_diff(br).max(ag.abs_diff(bg)).max(ab.abs_diff(bb))
}

fn sample_colors() -> Vec<Color> {
    let mut colors = Vec::new();
    for r in (0..=255u16).step_by(51) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(85) {
                colors.push(Color::new(r as u8, g as u8, b as u8));
            }
        }
    }
    colors
}

fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

// ============================================================================
// Color Value Tests
// ============================================================================

#[test]
fn test_hex_roundtrip() {
    for color in sample_colors() {
        assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
    }
    assert_eq!(hex("#ABC"), hex("#aabbcc"));
    assert_eq!(hex("#2196F3").to_hex(), "#2196f3");
}

#[test]
fn test_invalid_hex_rejected() {
    for input in ["", "#", "#12", "#12345", "#1234567", "#gggggg", "zz"] {
        assert!(
            matches!(Color::from_hex(input), Err(ColorError::InvalidHex { .. })),
            "{input:?} should fail"
        );
    }
}

#[test]
fn test_hsl_roundtrip_within_tolerance() {
    for color in sample_colors() {
        let hsl = color.hsl();
        let back = Color::from_hsl(hsl.h, hsl.s, hsl.l).unwrap();
        assert!(channel_distance(color, back) <= 5, "{} -> {}", color, back);
    }
}

#[test]
fn test_hsv_lab_xyz_cmyk_roundtrips() {
    for color in sample_colors() {
        let hsv = color.hsv();
        let via_hsv = Color::from_hsv(hsv.h, hsv.s, hsv.v).unwrap();
        assert!(channel_distance(color, via_hsv) <= 5);

        assert!(channel_distance(color, Color::from_lab(color.lab())) <= 5);
        assert!(channel_distance(color, Color::from_xyz(color.xyz())) <= 5);

        let cmyk = color.cmyk();
        let via_cmyk = Color::from_cmyk(cmyk.c, cmyk.m, cmyk.y, cmyk.k).unwrap();
        assert!(channel_distance(color, via_cmyk) <= 5);
    }
}

#[test]
fn test_component_ranges_validated() {
    assert!(matches!(
        Color::try_rgb(256, 0, 0),
        Err(ColorError::ComponentOutOfRange { .. })
    ));
    assert!(Color::try_rgb(-1, 0, 0).is_err());
    assert!(Color::from_hsl(0.0, 101.0, 50.0).is_err());
    assert!(Color::from_hsl(0.0, 50.0, -0.1).is_err());
}

#[test]
fn test_manipulation_examples() {
    let red = hex("#ff0000");
    assert_eq!(red.lighten(0.2).to_hex(), "#ff6666");
    assert_eq!(red.darken(0.2).to_hex(), "#990000");
    assert_eq!(red.rotate(180.0).to_hex(), "#00ffff");
    assert_eq!(red.rotate(540.0), red.rotate(180.0));
    assert_eq!(Color::BLACK.mix(Color::WHITE, 0.5).to_hex(), "#808080");
}

// ============================================================================
// Analysis Tests
// ============================================================================

#[test]
fn test_contrast_symmetry_and_bounds() {
    let colors = sample_colors();
    for pair in colors.windows(2) {
        let forward = pair[0].contrast_ratio(pair[1]);
        let backward = pair[1].contrast_ratio(pair[0]);
        assert!((forward - backward).abs() < 1e-12);
        assert!((1.0..=21.0 + 1e-9).contains(&forward));
    }
    assert!(Color::BLACK.contrast_ratio(Color::WHITE) > 20.0);
    assert!((hex("#777777").contrast_ratio(hex("#777777")) - 1.0).abs() < 1e-12);
}

#[test]
fn test_accessibility_report() {
    let check = check_accessibility("#767676", "#ffffff").unwrap();
    assert!(check.wcag.aa.normal);
    assert!(!check.wcag.aaa.normal);
    assert_eq!(check.suggested_text_color, "#000000");
}

// ============================================================================
// Extraction Tests
// ============================================================================

#[test]
fn test_extract_uniform_red_png() {
    let image = RgbImage::from_pixel(100, 100, Rgb([255, 0, 0]));
    let bytes = encode_png(&image);

    let decoded = load_image_from_memory(&bytes, Some("image/png"), &LoaderConfig::default()).unwrap();
    let colors = ColorExtractor::new().extract(&decoded, 1).unwrap();

    assert_eq!(colors.len(), 1);
    assert!(channel_distance(colors[0], hex("#ff0000")) <= 5);
}

#[test]
fn test_extraction_returns_exact_count() {
    let mut image = RgbImage::new(64, 64);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 4) as u8, (y * 4) as u8, 128]);
    }
    let extractor = ColorExtractor::new();
    for count in [1, 5, 10, 15, 32] {
        let colors = extractor.extract(&image, count).unwrap();
        assert_eq!(colors.len(), count);
        assert_eq!(colors, extractor.extract(&image, count).unwrap());
    }
}

#[test]
fn test_extraction_count_bounds() {
    let image = RgbaBuffer::solid(4, 4, [10, 200, 30]);
    let extractor = ColorExtractor::new();
    assert!(matches!(extractor.extract(&image, 0), Err(ColorError::InvalidCount { .. })));
    assert!(matches!(extractor.extract(&image, 33), Err(ColorError::InvalidCount { .. })));
}

#[test]
fn test_load_image_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("green.png");
    RgbImage::from_pixel(8, 8, Rgb([0, 200, 0])).save(&path).unwrap();

    let image = load_image(&path, &LoaderConfig::default()).unwrap();
    let colors = ColorExtractor::new().extract(&image, 1).unwrap();
    assert_eq!(colors[0], Color::new(0, 200, 0));
}

#[test]
fn test_load_image_file_not_found() {
    let result = load_image(
        std::path::Path::new("nonexistent_file.png"),
        &LoaderConfig::default(),
    );
    assert!(matches!(result, Err(ColorError::ImageLoadError { .. })));
}

#[test]
fn test_loader_rejects_unsupported_mime() {
    let bytes = encode_png(&RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])));
    let result = load_image_from_memory(&bytes, Some("image/tiff"), &LoaderConfig::default());
    assert!(matches!(result, Err(ColorError::UnsupportedSource { .. })));
}

// ============================================================================
// Palette Generation Tests
// ============================================================================

#[test]
fn test_monochromatic_first_color_is_base() {
    let palette = Strategy::Monochromatic
        .generate(hex("#2196F3"), &GenerationOptions::with_count(5))
        .unwrap();
    assert_eq!(palette.count(), 5);
    assert_eq!(palette.to_array()[0], "#2196f3");
}

#[test]
fn test_strategy_output_counts() {
    let base = hex("#e91e63");
    let expected = [
        ("monochromatic", 5),
        ("complementary", 2),
        ("analogous", 3),
        ("triadic", 3),
        ("tetradic", 4),
        ("split-complementary", 3),
        ("shades", 5),
        ("tints", 5),
        ("pastel", 5),
        ("vibrant", 5),
        ("website-theme", 5),
    ];
    for (name, count) in expected {
        let palette = generate_palette(&base.to_hex(), name, None).unwrap();
        assert_eq!(palette.count(), count, "{name}");
    }
}

#[test]
fn test_count_option_bounds() {
    for count in [0, 51] {
        assert!(matches!(
            generate_palette("#2196f3", "tints", Some(count)),
            Err(ColorError::InvalidCount { .. })
        ));
    }
}

// ============================================================================
// Builder and Theme Tests
// ============================================================================

#[test]
fn test_builder_manual_color_wins() {
    let mut builder = ColorPaletteBuilder::new();
    builder
        .add_color(hex("#336699"))
        .with_image(RgbImage::from_pixel(10, 10, Rgb([255, 0, 0])))
        .unwrap()
        .with_base_color(hex("#00ff00"))
        .with_strategy(Strategy::Tetradic);

    let palette = builder.build().unwrap();
    assert_eq!(palette.count(), 1);
    assert_eq!(palette.get_index(0), Some(hex("#336699")));
}

#[test]
fn test_builder_image_channel() {
    let mut builder = ColorPaletteBuilder::new();
    builder.with_image(RgbImage::from_pixel(20, 20, Rgb([0, 0, 255]))).unwrap();
    builder.with_count(4).unwrap();

    let palette = builder.build().unwrap();
    assert_eq!(palette.count(), 4);
    assert_eq!(palette.get_index(0), Some(hex("#0000ff")));
}

#[test]
fn test_theme_from_website_palette() {
    let palette = generate_palette("#2196f3", "website_theme", None).unwrap();
    let theme = ThemeGenerator::new().generate_default(&palette);

    assert_eq!(theme.len(), 5);
    assert_eq!(theme.get(Role::Primary), palette.get("primary"));
    assert_eq!(theme.on(Role::Background), Some(Color::BLACK));

    let pairs = theme.to_array();
    assert_eq!(pairs.len(), 10);
    assert!(pairs.iter().any(|(key, _)| key == "on_accent"));
}

#[test]
fn test_surface_colors_from_generated_palette() {
    let palette = generate_palette("#4caf50", "triadic", None).unwrap();
    let surfaces = palette.suggested_surface_colors();
    let keys: Vec<String> = surfaces.colors().iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "primary",
            "primary_light",
            "primary_dark",
            "secondary",
            "secondary_light",
            "secondary_dark"
        ]
    );
}

#[test]
fn test_palette_json_contract() {
    let palette = ColorPalette::new([hex("#ff0000"), hex("#00ff00")]);
    let json = serde_json::to_value(palette.to_info()).unwrap();
    assert_eq!(json[1]["hex"], "#00ff00");
    assert_eq!(json[1]["rgb"]["g"], 255);
    assert!(json[1].get("isLight").is_some());
}
