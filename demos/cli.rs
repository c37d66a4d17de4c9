//! Command-line interface for colorsmith
//!
//! Basic CLI tool for trying out extraction, palette generation and
//! contrast checks. Set `RUST_LOG=colorsmith=debug` to see engine events.

use colorsmith::image_loader::{is_supported_extension, load_image};
use colorsmith::{
    check_accessibility, Color, ColorError, ColorExtractor, ColorPalette, ColorPaletteBuilder,
    EngineConfig, ThemeGenerator,
};
use serde_json::json;
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Options {
    image_path: Option<String>,
    base: Option<String>,
    scheme: Option<String>,
    count: Option<usize>,
    config: Option<String>,
    contrast: Option<(String, String)>,
    theme: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    if let Err(error) = run(&options) {
        eprintln!("Error: {}", error);
        if error.is_validation() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();
    let mut i = 1;
    let value = |i: usize, flag: &str| -> String {
        match args.get(i) {
            Some(v) if !v.starts_with("--") => v.clone(),
            _ => {
                eprintln!("Error: {} requires a value", flag);
                process::exit(1);
            }
        }
    };

    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                let raw = value(i, "--count");
                options.count = match raw.parse() {
                    Ok(n) => Some(n),
                    Err(_) => {
                        eprintln!("Error: --count expects a number, got '{}'", raw);
                        process::exit(1);
                    }
                };
            }
            "--base" => {
                i += 1;
                options.base = Some(value(i, "--base"));
            }
            "--scheme" => {
                i += 1;
                options.scheme = Some(value(i, "--scheme"));
            }
            "--config" => {
                i += 1;
                options.config = Some(value(i, "--config"));
            }
            "--contrast" => {
                let foreground = value(i + 1, "--contrast");
                let background = value(i + 2, "--contrast");
                options.contrast = Some((foreground, background));
                i += 2;
            }
            "--theme" => options.theme = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if options.image_path.is_some() {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
                options.image_path = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if options.image_path.is_none() && options.base.is_none() && options.contrast.is_none() {
        print_help(&args[0]);
        process::exit(1);
    }
    options
}

fn run(options: &Options) -> colorsmith::Result<()> {
    if let Some((foreground, background)) = &options.contrast {
        let check = check_accessibility(foreground, background)?;
        print_json(&json!(check));
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => EngineConfig::from_json_file(Path::new(path))?,
        None => EngineConfig::default(),
    };

    let mut builder = ColorPaletteBuilder::new();
    builder.with_extractor(ColorExtractor::with_config(config.extraction.clone())?);
    if let Some(count) = options.count {
        builder.with_count(count)?;
    }

    if let Some(path) = &options.image_path {
        let path = Path::new(path);
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !is_supported_extension(extension) {
            return Err(ColorError::unsupported(format!(
                "unsupported file extension '{}'",
                extension
            )));
        }
        builder.with_image(load_image(path, &config.loader)?)?;
    }
    if let Some(base) = &options.base {
        builder.with_base_color(Color::from_hex(base)?);
    }
    if let Some(scheme) = &options.scheme {
        builder.with_scheme_name(scheme)?;
    }

    let palette = builder.build()?;
    print_palette(&palette, options.theme);
    Ok(())
}

fn print_palette(palette: &ColorPalette, with_theme: bool) {
    let mut output = json!({
        "colors": palette.to_info(),
        "surfaces": palette.suggested_surface_colors().to_array(),
    });
    if with_theme {
        output["theme"] = json!(ThemeGenerator::new().generate_default(palette));
    }
    print_json(&output);

    // Summary for human reading
    eprintln!();
    eprintln!("Palette Summary:");
    for (key, color) in palette.colors() {
        let tag = if color.is_light() { "light" } else { "dark" };
        eprintln!("  {:>12}: {} ({}, text {})", key.to_string(), color, tag, palette.suggested_text_color(color));
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] [image_path]", program_name);
    eprintln!();
    eprintln!("Extract or generate color palettes.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --count N              Number of colors (image: 1-32, schemes: 1-50)");
    eprintln!("  --base HEX             Base color for palette generation");
    eprintln!("  --scheme NAME          Generation strategy (default: monochromatic)");
    eprintln!("  --theme                Also print a theme derived from the palette");
    eprintln!("  --contrast FG BG       Print a WCAG report for two colors");
    eprintln!("  --config FILE          Load engine settings from a JSON file");
    eprintln!("  --help, -h             Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg --count 8", program_name);
    eprintln!("  {} --base '#2196f3' --scheme triadic --theme", program_name);
    eprintln!("  {} --contrast '#767676' '#ffffff'", program_name);
}
