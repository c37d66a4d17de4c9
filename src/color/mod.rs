//! Color value type, conversion, manipulation and analysis
//!
//! This module holds the `Color` value type together with the stateless
//! converters, manipulators and analyzers it delegates to.

pub mod analysis;
pub mod conversion;
pub mod manipulation;
pub mod model;

pub use analysis::{ColorAnalyzer, TextSize, WcagCompliance, WcagLevel, WcagResult};
pub use conversion::{ColorConverter, Lab, Xyz};
pub use manipulation::{ColorManipulator, Manipulation, ManipulationKind};
pub use model::{Cmyk, Color, Hsl, Hsv};
