//! Dominant color extraction module
//!
//! This module quantizes pixel samples into a frequency histogram and
//! ranks the resulting buckets into a fixed-size list of dominant colors.

pub mod extractor;
pub mod histogram;

pub use extractor::{ColorExtractor, DominantColor};
pub use histogram::{Bucket, Histogram};
