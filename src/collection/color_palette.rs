//! Ordered, optionally keyed color collections

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorAnalyzer;
use crate::constants::generation;
use crate::{Color, ColorError, PaletteColorInfo, Result};

/// One palette slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    color: Color,
}

impl PaletteEntry {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Palette position: its name if keyed, its index otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl fmt::Display for PaletteKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteKey::Index(index) => write!(f, "{}", index),
            PaletteKey::Name(name) => f.write_str(name),
        }
    }
}

/// An immutable ordered sequence of colors, each optionally keyed
///
/// Insertion order is preserved and keys are unique. Empty palettes are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    #[serde(deserialize_with = "deserialize_entries")]
    entries: Vec<PaletteEntry>,
}

fn deserialize_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<PaletteEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Vec::<PaletteEntry>::deserialize(deserializer)?;
    check_unique_keys(&entries).map_err(serde::de::Error::custom)?;
    Ok(entries)
}

fn check_unique_keys(entries: &[PaletteEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for key in entries.iter().filter_map(PaletteEntry::key) {
        if !seen.insert(key) {
            return Err(ColorError::DuplicateKey {
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

impl ColorPalette {
    /// Unkeyed palette in the given order
    pub fn new<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        Self {
            entries: colors
                .into_iter()
                .map(|color| PaletteEntry { key: None, color })
                .collect(),
        }
    }

    /// Keyed palette in the given order
    ///
    /// # Errors
    ///
    /// Returns `ColorError::DuplicateKey` if a key repeats
    pub fn named<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Color)>,
        K: Into<String>,
    {
        let entries: Vec<PaletteEntry> = pairs
            .into_iter()
            .map(|(key, color)| PaletteEntry {
                key: Some(key.into()),
                color,
            })
            .collect();
        check_unique_keys(&entries)?;
        Ok(Self { entries })
    }

    /// Keyed palette from static, known-distinct keys
    pub(crate) fn from_static_keys<const N: usize>(pairs: [(&'static str, Color); N]) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, color)| PaletteEntry {
                    key: Some(key.to_string()),
                    color,
                })
                .collect(),
        }
    }

    /// Ordered key → color mapping
    pub fn colors(&self) -> Vec<(PaletteKey<'_>, Color)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let key = match entry.key() {
                    Some(name) => PaletteKey::Name(name),
                    None => PaletteKey::Index(index),
                };
                (key, entry.color)
            })
            .collect()
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Colors in order, without keys
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(|entry| entry.color)
    }

    pub fn get(&self, key: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|entry| entry.key() == Some(key))
            .map(|entry| entry.color)
    }

    pub fn get_index(&self, index: usize) -> Option<Color> {
        self.entries.get(index).map(|entry| entry.color)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hex strings in order
    pub fn to_array(&self) -> Vec<String> {
        self.iter().map(|color| color.to_hex()).collect()
    }

    /// Front-end color info for every entry
    pub fn to_info(&self) -> Vec<PaletteColorInfo> {
        self.entries
            .iter()
            .map(|entry| PaletteColorInfo {
                key: entry.key.clone(),
                info: entry.color.into(),
            })
            .collect()
    }

    /// Black or white, whichever contrasts more with `background`
    pub fn suggested_text_color(&self, background: Color) -> Color {
        ColorAnalyzer::suggested_text_color(background)
    }

    /// Palette color with the highest contrast against `background`
    pub fn most_readable(&self, background: Color) -> Option<Color> {
        let candidates: Vec<Color> = self.iter().collect();
        ColorAnalyzer::most_readable(background, &candidates)
    }

    /// Light and dark variants of the first two colors
    ///
    /// Keys: `primary`, `primary_light`, `primary_dark`, `secondary`,
    /// `secondary_light`, `secondary_dark`. A missing primary falls back to
    /// #2196f3 and a missing secondary to the primary rotated by 30°.
    pub fn suggested_surface_colors(&self) -> ColorPalette {
        let [r, g, b] = generation::DEFAULT_PRIMARY;
        let primary = self.get_index(0).unwrap_or(Color::new(r, g, b));
        let secondary = self.get_index(1).unwrap_or_else(|| primary.rotate(30.0));
        let delta = generation::SURFACE_VARIANT_DELTA;

        Self::from_static_keys([
            ("primary", primary),
            ("primary_light", primary.lighten(delta)),
            ("primary_dark", primary.darken(delta)),
            ("secondary", secondary),
            ("secondary_light", secondary.lighten(delta)),
            ("secondary_dark", secondary.darken(delta)),
        ])
    }
}

impl FromIterator<Color> for ColorPalette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_unkeyed_palette_uses_indices() {
        let palette = ColorPalette::new([hex("#ff0000"), hex("#00ff00")]);
        let colors = palette.colors();
        assert_eq!(colors[0], (PaletteKey::Index(0), hex("#ff0000")));
        assert_eq!(colors[1].0.to_string(), "1");
        assert_eq!(palette.to_array(), vec!["#ff0000", "#00ff00"]);
    }

    #[test]
    fn test_named_palette_preserves_order() {
        let palette =
            ColorPalette::named([("zeta", hex("#000000")), ("alpha", hex("#ffffff"))]).unwrap();
        assert_eq!(palette.colors()[0].0, PaletteKey::Name("zeta"));
        assert_eq!(palette.get("alpha"), Some(Color::WHITE));
        assert_eq!(palette.get("missing"), None);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = ColorPalette::named([("primary", Color::BLACK), ("primary", Color::WHITE)]);
        assert!(matches!(result, Err(ColorError::DuplicateKey { .. })));
    }

    #[test]
    fn test_empty_palette() {
        let palette = ColorPalette::default();
        assert_eq!(palette.count(), 0);
        assert!(palette.is_empty());
        assert!(palette.to_array().is_empty());
        assert_eq!(palette.most_readable(Color::WHITE), None);
    }

    #[test]
    fn test_suggested_text_color() {
        let palette = ColorPalette::default();
        assert_eq!(palette.suggested_text_color(hex("#111111")), Color::WHITE);
        assert_eq!(palette.suggested_text_color(hex("#eeeeee")), Color::BLACK);
    }

    #[test]
    fn test_suggested_surface_colors() {
        let palette = ColorPalette::new([hex("#2196f3"), hex("#ff5722"), hex("#4caf50")]);
        let surfaces = palette.suggested_surface_colors();
        assert_eq!(surfaces.count(), 6);
        assert_eq!(surfaces.get("primary"), Some(hex("#2196f3")));
        assert_eq!(surfaces.get("secondary"), Some(hex("#ff5722")));

        let light = surfaces.get("primary_light").unwrap();
        let dark = surfaces.get("primary_dark").unwrap();
        assert!(light.hsl().l > hex("#2196f3").hsl().l);
        assert!(dark.hsl().l < hex("#2196f3").hsl().l);
    }

    #[test]
    fn test_surface_colors_on_short_palettes() {
        assert_eq!(ColorPalette::default().suggested_surface_colors().count(), 6);

        let single = ColorPalette::new([hex("#ff0000")]);
        let surfaces = single.suggested_surface_colors();
        assert_eq!(surfaces.get("secondary"), Some(hex("#ff0000").rotate(30.0)));
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let palette = ColorPalette::named([("primary", hex("#2196f3"))]).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"[{"key":"primary","color":"#2196f3"}]"##);

        let back: ColorPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);

        let duplicate = r##"[{"key":"a","color":"#000000"},{"key":"a","color":"#ffffff"}]"##;
        assert!(serde_json::from_str::<ColorPalette>(duplicate).is_err());
    }

    #[test]
    fn test_to_info() {
        let palette = ColorPalette::new([Color::WHITE]);
        let info = palette.to_info();
        assert_eq!(info.len(), 1);
        assert!(info[0].key.is_none());
        assert!(info[0].info.is_light);
    }
}
