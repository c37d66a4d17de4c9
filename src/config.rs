//! Configuration structures for extraction and image loading.
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use colorsmith::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("colorsmith.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), colorsmith::ColorError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ExtractionConfig`]: quantization, gray filtering, duplicate merging, padding
//! - [`LoaderConfig`]: limits applied before an image is decoded

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{extraction, loader};
use crate::{Color, ColorError, Result};

/// Complete engine configuration.
///
/// Every field has a default, so partial JSON files are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dominant color extraction settings
    pub extraction: ExtractionConfig,

    /// Image loading limits
    pub loader: LoaderConfig,
}

/// Dominant color extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Channel bucket granularity (1 keeps full precision)
    pub quantization_step: u8,

    /// Buckets whose average HSL saturation (percent) is below this are dropped
    pub min_saturation: f64,

    /// ΔE76 below which a bucket is merged into an already selected color
    pub merge_delta_e: f64,

    /// Maximum number of sampled pixels before striding kicks in
    pub max_samples: usize,

    /// Skip samples with alpha 0
    pub skip_transparent: bool,

    /// Colors used, in order, to pad short results
    pub fallback_palette: Vec<Color>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            quantization_step: extraction::QUANTIZATION_STEP,
            min_saturation: extraction::MIN_SATURATION,
            merge_delta_e: extraction::MERGE_DELTA_E,
            max_samples: extraction::MAX_SAMPLES,
            skip_transparent: true,
            fallback_palette: extraction::FALLBACK_PALETTE
                .iter()
                .filter_map(|hex| Color::from_hex(hex).ok())
                .collect(),
        }
    }
}

/// Limits enforced at the image loading boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Largest accepted encoded input in bytes
    pub max_bytes: usize,

    /// Largest accepted decoded image in pixels
    pub max_pixels: u64,

    /// Accepted MIME types for in-memory input
    pub allowed_mime_types: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_bytes: loader::MAX_BYTES,
            max_pixels: loader::MAX_PIXELS,
            allowed_mime_types: loader::ALLOWED_MIME_TYPES
                .iter()
                .map(|mime| mime.to_string())
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ColorError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ColorError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }

    /// Check that every parameter is usable
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        if self.loader.max_bytes == 0 || self.loader.max_pixels == 0 {
            return Err(invalid("loader limits must be positive"));
        }
        Ok(())
    }
}

impl ExtractionConfig {
    /// Check that the extraction parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.quantization_step == 0 {
            return Err(invalid("extraction.quantization_step must be at least 1"));
        }
        if !(0.0..=100.0).contains(&self.min_saturation) {
            return Err(invalid("extraction.min_saturation must be within 0..=100"));
        }
        if !self.merge_delta_e.is_finite() || self.merge_delta_e < 0.0 {
            return Err(invalid("extraction.merge_delta_e must be a non-negative number"));
        }
        if self.max_samples == 0 {
            return Err(invalid("extraction.max_samples must be at least 1"));
        }
        if self.fallback_palette.is_empty() {
            return Err(invalid("extraction.fallback_palette must not be empty"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ColorError {
    ColorError::ConfigError {
        message: message.to_string(),
        source: None,
    }
}
