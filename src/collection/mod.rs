//! Color palettes and palette assembly
//!
//! This module provides the immutable [`ColorPalette`] collection and the
//! [`ColorPaletteBuilder`] that assembles one from manual colors, an image
//! or a generation strategy.

pub mod builder;
pub mod color_palette;

pub use builder::ColorPaletteBuilder;
pub use color_palette::{ColorPalette, PaletteEntry, PaletteKey};
