//! Theme derivation from palettes
//!
//! Palette colors are assigned positionally to the requested roles and each
//! role gets an `on_<role>` foreground chosen for maximum contrast.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::collection::ColorPalette;
use crate::color::ColorAnalyzer;
use crate::{Color, ColorError, Result};

/// UI role a theme color fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Background,
        Role::Surface,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Background => "background",
            Role::Surface => "surface",
        }
    }

    /// Key of the matching foreground, e.g. `on_primary`
    pub fn on_name(&self) -> String {
        format!("on_{}", self.name())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.name() == normalized)
            .ok_or_else(|| ColorError::UnknownRole {
                name: s.to_string(),
            })
    }
}

/// A role with its color and derived foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeEntry {
    pub role: Role,
    pub color: Color,
    pub on_color: Color,
}

/// Immutable role → color assignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    entries: Vec<ThemeEntry>,
}

impl Theme {
    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.entries.iter().map(|entry| entry.role)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, role: Role) -> Option<&ThemeEntry> {
        self.entries.iter().find(|entry| entry.role == role)
    }

    pub fn get(&self, role: Role) -> Option<Color> {
        self.entry(role).map(|entry| entry.color)
    }

    /// Foreground color for `role`
    pub fn on(&self, role: Role) -> Option<Color> {
        self.entry(role).map(|entry| entry.on_color)
    }

    /// Contrast ratio between a role color and its foreground
    pub fn contrast(&self, role: Role) -> Option<f64> {
        self.entry(role)
            .map(|entry| ColorAnalyzer::contrast_ratio(entry.color, entry.on_color))
    }

    /// Role and `on_<role>` hex pairs, roles first in assignment order
    pub fn to_array(&self) -> Vec<(String, String)> {
        let roles = self
            .entries
            .iter()
            .map(|entry| (entry.role.name().to_string(), entry.color.to_hex()));
        let foregrounds = self
            .entries
            .iter()
            .map(|entry| (entry.role.on_name(), entry.on_color.to_hex()));
        roles.chain(foregrounds).collect()
    }
}

impl Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let pairs = self.to_array();
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (key, hex) in &pairs {
            map.serialize_entry(key, hex)?;
        }
        map.end()
    }
}

/// Assigns palette colors to roles and derives readable foregrounds
#[derive(Debug, Clone)]
pub struct ThemeGenerator {
    candidates: Vec<Color>,
}

impl Default for ThemeGenerator {
    fn default() -> Self {
        Self {
            candidates: vec![Color::BLACK, Color::WHITE],
        }
    }
}

impl ThemeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom foreground candidate set
    ///
    /// An empty set falls back to black and white.
    pub fn with_candidates(candidates: Vec<Color>) -> Self {
        if candidates.is_empty() {
            return Self::default();
        }
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Color] {
        &self.candidates
    }

    /// Assign `palette` colors to `roles` by position
    ///
    /// Roles past the end of the palette are left out of the theme.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::DuplicateRole` if a role is requested twice
    pub fn generate(&self, palette: &ColorPalette, roles: &[Role]) -> Result<Theme> {
        for (i, role) in roles.iter().enumerate() {
            if roles[..i].contains(role) {
                return Err(ColorError::DuplicateRole {
                    role: role.name().to_string(),
                });
            }
        }

        if roles.len() > palette.count() {
            tracing::debug!(
                roles = roles.len(),
                colors = palette.count(),
                "palette shorter than role list, trailing roles omitted"
            );
        }

        let entries = roles
            .iter()
            .zip(palette.iter())
            .map(|(&role, color)| ThemeEntry {
                role,
                color,
                on_color: self.foreground(color),
            })
            .collect();
        Ok(Theme { entries })
    }

    /// Assign `palette` colors to every role in [`Role::ALL`] order
    pub fn generate_default(&self, palette: &ColorPalette) -> Theme {
        let entries = Role::ALL
            .into_iter()
            .zip(palette.iter())
            .map(|(role, color)| ThemeEntry {
                role,
                color,
                on_color: self.foreground(color),
            })
            .collect();
        Theme { entries }
    }

    /// Like [`generate`](Self::generate) with role names
    ///
    /// # Errors
    ///
    /// Returns `ColorError::UnknownRole` for an unrecognized name and
    /// `ColorError::DuplicateRole` for a repeated one
    pub fn generate_named(&self, palette: &ColorPalette, names: &[&str]) -> Result<Theme> {
        let roles = names
            .iter()
            .map(|name| name.parse::<Role>())
            .collect::<Result<Vec<_>>>()?;
        self.generate(palette, &roles)
    }

    fn foreground(&self, background: Color) -> Color {
        ColorAnalyzer::most_readable(background, &self.candidates)
            .unwrap_or_else(|| ColorAnalyzer::suggested_text_color(background))
    }
}
