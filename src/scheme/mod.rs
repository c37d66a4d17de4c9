//! Palette generation schemes
//!
//! A scheme turns one base color into a palette following a color-wheel
//! or lightness rule.

pub mod strategy;

pub use strategy::{GenerationOptions, Strategy};
