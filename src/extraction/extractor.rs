//! Dominant color extraction
//!
//! Quantizes the pixels of a [`PixelSource`] into a frequency histogram and
//! returns the most frequent colors:
//! 1. Sample pixels, striding on large images
//! 2. Skip fully transparent samples
//! 3. Quantize channels and count bucket populations
//! 4. Drop near-gray buckets
//! 5. Walk buckets by descending population, merging near-duplicates (ΔE76)
//! 6. Re-rank the merged colors by population and keep the first `n`
//! 7. Pad with the fallback palette when fewer than `n` survive
//!
//! Extraction never fails on a readable source; only the requested count is
//! validated.

use serde::{Deserialize, Serialize};

use crate::color::ColorAnalyzer;
use crate::config::ExtractionConfig;
use crate::constants::extraction;
use crate::extraction::histogram::{Bucket, Histogram};
use crate::image_loader::PixelSource;
use crate::{Color, ColorError, Result};

/// An extracted color with its weight in the sampled image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    pub color: Color,
    /// Samples represented by this color (0 for padding)
    pub population: u64,
    /// Fraction of all sampled pixels (0.0-1.0)
    pub share: f64,
}

/// Histogram-based dominant color extractor
#[derive(Debug, Clone, Default)]
pub struct ColorExtractor {
    config: ExtractionConfig,
}

impl ColorExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom parameters
    ///
    /// # Errors
    ///
    /// Returns `ColorError::ConfigError` if the configuration is unusable
    pub fn with_config(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract exactly `count` colors in descending frequency order
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidCount` if `count` is outside
    /// `1..=32`
    pub fn extract<S>(&self, source: &S, count: usize) -> Result<Vec<Color>>
    where
        S: PixelSource + ?Sized,
    {
        Ok(self
            .extract_weighted(source, count)?
            .into_iter()
            .map(|dominant| dominant.color)
            .collect())
    }

    /// Extract exactly `count` colors together with their populations
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidCount` if `count` is outside
    /// `1..=32`
    pub fn extract_weighted<S>(&self, source: &S, count: usize) -> Result<Vec<DominantColor>>
    where
        S: PixelSource + ?Sized,
    {
        validate_count(count)?;

        let histogram = self.build_histogram(source);
        let samples = histogram.samples();
        let buckets = histogram.len();

        let mut selected = self.select(histogram.into_ranked(), count, samples);
        let extracted = selected.len();
        if extracted < count {
            tracing::warn!(
                requested = count,
                extracted,
                "too few qualifying colors, padding with fallback palette"
            );
            self.pad(&mut selected, count);
        }

        tracing::debug!(
            width = source.width(),
            height = source.height(),
            samples,
            buckets,
            extracted,
            "dominant colors extracted"
        );
        Ok(selected)
    }

    /// Sampling stride that keeps the sample count near `max_samples`
    fn stride(&self, width: u32, height: u32) -> u32 {
        let total = width as f64 * height as f64;
        let limit = self.config.max_samples.max(1) as f64;
        if total <= limit {
            1
        } else {
            (total / limit).sqrt().ceil() as u32
        }
    }

    fn build_histogram<S>(&self, source: &S) -> Histogram
    where
        S: PixelSource + ?Sized,
    {
        let mut histogram = Histogram::new(self.config.quantization_step);
        let (width, height) = (source.width(), source.height());
        let stride = self.stride(width, height) as usize;
        let check_alpha = self.config.skip_transparent && source.has_alpha();

        for y in (0..height).step_by(stride) {
            for x in (0..width).step_by(stride) {
                let [r, g, b, a] = source.pixel(x, y);
                if check_alpha && a == 0 {
                    continue;
                }
                histogram.add(r, g, b);
            }
        }
        histogram
    }

    /// Keep the `count` most populous saturated, mutually distinct colors
    ///
    /// Every bucket is merged before ranking, so a color's population does
    /// not depend on `count`.
    fn select(&self, ranked: Vec<Bucket>, count: usize, samples: u64) -> Vec<DominantColor> {
        let mut selected: Vec<DominantColor> = Vec::new();

        for bucket in ranked {
            let color = bucket.average();
            if color.hsl().s < self.config.min_saturation {
                continue;
            }

            let duplicate = selected
                .iter_mut()
                .find(|chosen| ColorAnalyzer::delta_e(chosen.color, color) < self.config.merge_delta_e);
            match duplicate {
                Some(chosen) => chosen.population += bucket.population,
                None => selected.push(DominantColor {
                    color,
                    population: bucket.population,
                    share: 0.0,
                }),
            }
        }

        // Stable, so equal populations keep histogram order
        selected.sort_by(|a, b| b.population.cmp(&a.population));
        selected.truncate(count);

        if samples > 0 {
            for dominant in &mut selected {
                dominant.share = dominant.population as f64 / samples as f64;
            }
        }
        selected
    }

    /// Fill up to `count` from the fallback palette
    ///
    /// Fallback colors close to an already selected color are skipped while
    /// distinct candidates remain.
    fn pad(&self, selected: &mut Vec<DominantColor>, count: usize) {
        let padding = |color| DominantColor {
            color,
            population: 0,
            share: 0.0,
        };

        let limit = count + 2 * self.config.fallback_palette.len().max(1);
        let mut index = 0;
        while selected.len() < count && index < limit {
            let candidate = self.fallback_color(index);
            index += 1;
            let distinct = selected
                .iter()
                .all(|chosen| ColorAnalyzer::delta_e(chosen.color, candidate) >= self.config.merge_delta_e);
            if distinct {
                selected.push(padding(candidate));
            }
        }

        while selected.len() < count {
            selected.push(padding(self.fallback_color(index)));
            index += 1;
        }
    }

    /// Deterministic fallback sequence: the palette, then hue-rotated repeats
    fn fallback_color(&self, index: usize) -> Color {
        let palette = &self.config.fallback_palette;
        if palette.is_empty() {
            return Color::from_hsl_clamped(index as f64 * 72.0, 70.0, 50.0);
        }
        let cycle = (index / palette.len()) as f64;
        palette[index % palette.len()].rotate(cycle * extraction::FALLBACK_CYCLE_ROTATION)
    }
}

fn validate_count(count: usize) -> Result<()> {
    if (extraction::MIN_COUNT..=extraction::MAX_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(ColorError::InvalidCount {
            count,
            min: extraction::MIN_COUNT,
            max: extraction::MAX_COUNT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::{Channels, RgbaBuffer};

    fn stripes(colors: &[([u8; 3], u32)], height: u32) -> RgbaBuffer {
        let width: u32 = colors.iter().map(|(_, w)| w).sum();
        let mut data = Vec::new();
        for _ in 0..height {
            for (rgb, w) in colors {
                for _ in 0..*w {
                    data.extend_from_slice(rgb);
                }
            }
        }
        RgbaBuffer::new(width, height, Channels::Rgb, data).unwrap()
    }

    #[test]
    fn test_uniform_red_single_color() {
        let image = RgbaBuffer::solid(100, 100, [255, 0, 0]);
        let colors = ColorExtractor::new().extract(&image, 1).unwrap();
        assert_eq!(colors.len(), 1);
        let [r, g, b] = colors[0].rgb();
        assert!(r >= 250 && g <= 5 && b <= 5);
    }

    #[test]
    fn test_frequency_order() {
        let image = stripes(&[([0, 0, 255], 10), ([255, 0, 0], 30), ([0, 200, 0], 20)], 10);
        let colors = ColorExtractor::new().extract_weighted(&image, 3).unwrap();
        assert_eq!(colors[0].color, Color::new(255, 0, 0));
        assert_eq!(colors[1].color, Color::new(0, 200, 0));
        assert_eq!(colors[2].color, Color::new(0, 0, 255));
        assert!((colors[0].share - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_near_duplicates_merged() {
        let image = stripes(&[([255, 0, 0], 30), ([235, 0, 0], 20), ([0, 0, 255], 10)], 4);
        let colors = ColorExtractor::new().extract_weighted(&image, 2).unwrap();
        assert_eq!(colors[0].color, Color::new(255, 0, 0));
        assert_eq!(colors[0].population, 200);
        assert_eq!(colors[1].color, Color::new(0, 0, 255));
    }

    #[test]
    fn test_merged_population_reorders_result() {
        let image = stripes(
            &[([0, 0, 255], 10), ([255, 0, 0], 9), ([235, 0, 0], 8), ([0, 200, 0], 1)],
            4,
        );
        let extractor = ColorExtractor::new();
        let colors = extractor.extract_weighted(&image, 3).unwrap();

        assert_eq!(colors[0].color, Color::new(255, 0, 0));
        assert_eq!(colors[0].population, 68);
        assert_eq!(colors[1].color, Color::new(0, 0, 255));
        assert_eq!(colors[1].population, 40);
        assert_eq!(colors[2].color, Color::new(0, 200, 0));
        assert_eq!(colors[2].population, 4);
        for pair in colors.windows(2) {
            assert!(pair[0].population >= pair[1].population);
            assert!(pair[0].share >= pair[1].share);
        }

        let two = extractor.extract_weighted(&image, 2).unwrap();
        assert_eq!(two[0].population, 68);
        assert_eq!(two[1].color, Color::new(0, 0, 255));
    }

    #[test]
    fn test_gray_image_pads_to_count() {
        let image = RgbaBuffer::solid(20, 20, [128, 128, 128]);
        let colors = ColorExtractor::new().extract_weighted(&image, 4).unwrap();
        assert_eq!(colors.len(), 4);
        assert!(colors.iter().all(|c| c.population == 0));
        assert_eq!(colors[0].color, Color::from_hex("#2196f3").unwrap());
    }

    #[test]
    fn test_padding_is_deterministic_and_exact() {
        let image = RgbaBuffer::solid(8, 8, [255, 0, 0]);
        let extractor = ColorExtractor::new();
        for count in [1, 5, 10, 15, 32] {
            let first = extractor.extract(&image, count).unwrap();
            let second = extractor.extract(&image, count).unwrap();
            assert_eq!(first.len(), count);
            assert_eq!(first, second);
            assert_eq!(first[0], Color::new(255, 0, 0));
        }
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let mut data = Vec::new();
        for i in 0..100 {
            if i < 70 {
                data.extend_from_slice(&[0, 255, 0, 0]);
            } else {
                data.extend_from_slice(&[0, 0, 255, 255]);
            }
        }
        let image = RgbaBuffer::new(10, 10, Channels::Rgba, data).unwrap();
        let colors = ColorExtractor::new().extract_weighted(&image, 1).unwrap();
        assert_eq!(colors[0].color, Color::new(0, 0, 255));
        assert!((colors[0].share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_source_degrades() {
        let image = RgbaBuffer::new(0, 0, Channels::Rgb, Vec::new()).unwrap();
        let colors = ColorExtractor::new().extract(&image, 3).unwrap();
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_count_validation() {
        let image = RgbaBuffer::solid(2, 2, [255, 0, 0]);
        let extractor = ColorExtractor::new();
        assert!(matches!(extractor.extract(&image, 0), Err(ColorError::InvalidCount { .. })));
        assert!(matches!(extractor.extract(&image, 33), Err(ColorError::InvalidCount { .. })));
    }

    #[test]
    fn test_stride_bounds_samples() {
        let extractor = ColorExtractor::new();
        assert_eq!(extractor.stride(100, 100), 1);
        assert_eq!(extractor.stride(400, 400), 2);
        assert_eq!(extractor.stride(4000, 3000), 18);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractionConfig {
            quantization_step: 0,
            ..ExtractionConfig::default()
        };
        assert!(ColorExtractor::with_config(config).is_err());
    }
}
