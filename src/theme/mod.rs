//! Theme generation module
//!
//! This module maps palette colors onto UI roles and derives a readable
//! foreground for each role.

pub mod generator;

pub use generator::{Role, Theme, ThemeEntry, ThemeGenerator};
