//! Priority-ordered palette assembly
//!
//! A [`ColorPaletteBuilder`] accumulates three kinds of input and resolves
//! them at [`build`](ColorPaletteBuilder::build) time. Only the highest
//! priority non-empty channel contributes:
//! 1. Manually added colors
//! 2. Colors extracted from an image source
//! 3. A base color expanded by a generation strategy

use std::fmt;

use crate::collection::ColorPalette;
use crate::constants::{extraction, generation};
use crate::extraction::ColorExtractor;
use crate::image_loader::PixelSource;
use crate::scheme::{GenerationOptions, Strategy};
use crate::{Color, ColorError, Result};

/// Mutable accumulator for palette inputs
///
/// `build` does not consume the builder; every call re-resolves from the
/// current state.
#[derive(Default)]
pub struct ColorPaletteBuilder {
    colors: Vec<Color>,
    image: Option<Box<dyn PixelSource>>,
    count: Option<usize>,
    base_color: Option<Color>,
    strategy: Option<Strategy>,
    extractor: ColorExtractor,
}

impl fmt::Debug for ColorPaletteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPaletteBuilder")
            .field("colors", &self.colors)
            .field("image", &self.image.as_ref().map(|s| (s.width(), s.height())))
            .field("count", &self.count)
            .field("base_color", &self.base_color)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl ColorPaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom extractor for the image channel
    pub fn with_extractor(&mut self, extractor: ColorExtractor) -> &mut Self {
        self.extractor = extractor;
        self
    }

    pub fn add_color(&mut self, color: Color) -> &mut Self {
        self.colors.push(color);
        self
    }

    /// Parse and add a hex color
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` if `hex` does not parse
    pub fn add_hex(&mut self, hex: &str) -> Result<&mut Self> {
        let color = Color::from_hex(hex)?;
        Ok(self.add_color(color))
    }

    pub fn add_colors<I>(&mut self, colors: I) -> &mut Self
    where
        I: IntoIterator<Item = Color>,
    {
        self.colors.extend(colors);
        self
    }

    /// Set the image channel, replacing any previous source
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidCount` if a count above the extraction
    /// limit of 32 was already set
    pub fn with_image<S>(&mut self, source: S) -> Result<&mut Self>
    where
        S: PixelSource + 'static,
    {
        if let Some(count) = self.count {
            validate_count(count, extraction::MIN_COUNT, extraction::MAX_COUNT)?;
        }
        self.image = Some(Box::new(source));
        Ok(self)
    }

    /// Number of colors for the image and counted strategy channels
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidCount` if `count` is outside `1..=32`
    /// while an image is set, or outside `1..=50` otherwise.
    pub fn with_count(&mut self, count: usize) -> Result<&mut Self> {
        if self.image.is_some() {
            validate_count(count, extraction::MIN_COUNT, extraction::MAX_COUNT)?;
        } else {
            validate_count(count, generation::MIN_COUNT, generation::MAX_COUNT)?;
        }
        self.count = Some(count);
        Ok(self)
    }

    pub fn with_base_color(&mut self, color: Color) -> &mut Self {
        self.base_color = Some(color);
        self
    }

    pub fn with_strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = Some(strategy);
        self
    }

    /// Select a strategy by name
    ///
    /// # Errors
    ///
    /// Returns `ColorError::UnknownStrategy` if the name is not recognized
    pub fn with_scheme_name(&mut self, name: &str) -> Result<&mut Self> {
        let strategy: Strategy = name.parse()?;
        Ok(self.with_strategy(strategy))
    }

    /// Resolve the highest-priority channel into a palette
    ///
    /// A base color without a strategy expands monochromatically; a
    /// strategy without a base color yields an empty palette.
    ///
    /// # Errors
    ///
    /// Propagates count validation failures from extraction or generation
    pub fn build(&self) -> Result<ColorPalette> {
        if !self.colors.is_empty() {
            if self.image.is_some() || self.base_color.is_some() || self.strategy.is_some() {
                tracing::warn!("manual colors present, ignoring image and strategy inputs");
            }
            tracing::debug!(channel = "manual", colors = self.colors.len(), "palette resolved");
            return Ok(ColorPalette::new(self.colors.iter().copied()));
        }

        if let Some(source) = &self.image {
            if self.base_color.is_some() || self.strategy.is_some() {
                tracing::warn!("image source present, ignoring strategy inputs");
            }
            let count = self.count.unwrap_or(extraction::DEFAULT_COUNT);
            let colors = self.extractor.extract(source.as_ref(), count)?;
            tracing::debug!(channel = "image", colors = colors.len(), "palette resolved");
            return Ok(ColorPalette::new(colors));
        }

        match (self.base_color, self.strategy) {
            (Some(base), strategy) => {
                let strategy = strategy.unwrap_or(Strategy::Monochromatic);
                let options = GenerationOptions { count: self.count };
                let palette = strategy.generate(base, &options)?;
                tracing::debug!(
                    channel = "strategy",
                    strategy = strategy.name(),
                    colors = palette.count(),
                    "palette resolved"
                );
                Ok(palette)
            }
            (None, Some(strategy)) => {
                tracing::warn!(strategy = strategy.name(), "strategy set without a base color");
                Ok(ColorPalette::default())
            }
            (None, None) => Ok(ColorPalette::default()),
        }
    }
}

fn validate_count(count: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&count) {
        Ok(())
    } else {
        Err(ColorError::InvalidCount { count, min, max })
    }
}
