//! Theme support for the room map view.
//!
//! This module provides the fixed set of color palettes a floor-plan view can be
//! drawn with, and the immutable registry used to resolve a theme name into its
//! palette. Three themes are built in: dark, light and high contrast.
//!
//! # Examples
//!
//! ```
//! use roomview::theme::{ThemeName, ThemeRegistry};
//!
//! let registry = ThemeRegistry::global();
//! let light = registry.get_by_key("light").unwrap();
//! assert_eq!(light.colors.background, roomview::theme::hex_to_color32("#f5f5f5"));
//! assert!(registry.get_by_key("sepia").is_none());
//! assert_eq!(ThemeName::default(), ThemeName::Dark);
//! ```

use egui::Color32;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the built-in themes.
///
/// The string keys (`"dark"`, `"light"`, `"highContrast"`) are the only names
/// accepted from callers; lookups are exact, with no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeName {
    /// All built-in themes in registry order.
    pub const ALL: [ThemeName; 3] = [ThemeName::Dark, ThemeName::Light, ThemeName::HighContrast];

    /// Returns the key this theme is registered under.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
            ThemeName::HighContrast => "highContrast",
        }
    }

    /// Looks up a theme by its registry key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == key)
    }

    fn index(self) -> usize {
        match self {
            ThemeName::Dark => 0,
            ThemeName::Light => 1,
            ThemeName::HighContrast => 2,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a registered theme key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Theme '{}' not found", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// The six color roles used to draw a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Canvas behind the plan
    pub background: Color32,
    /// Default room fill
    pub fill: Color32,
    /// Room outlines and walls
    pub stroke: Color32,
    /// Room labels
    pub text: Color32,
    /// Fill of the highlighted room
    pub highlight: Color32,
    /// Fill of a room under the pointer
    pub hover: Color32,
}

/// Palette colors rendered as `#rrggbb` strings, ready for SVG attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteHex {
    pub background: String,
    pub fill: String,
    pub stroke: String,
    pub text: String,
    pub highlight: String,
    pub hover: String,
}

impl ThemePalette {
    /// Builds a palette from six hex strings in role order.
    fn from_hex(roles: [&str; 6]) -> Self {
        let [background, fill, stroke, text, highlight, hover] = roles.map(hex_to_color32);
        Self {
            background,
            fill,
            stroke,
            text,
            highlight,
            hover,
        }
    }

    /// Returns the palette as hex strings.
    pub fn to_hex(&self) -> PaletteHex {
        PaletteHex {
            background: color32_to_hex(self.background),
            fill: color32_to_hex(self.fill),
            stroke: color32_to_hex(self.stroke),
            text: color32_to_hex(self.text),
            highlight: color32_to_hex(self.highlight),
            hover: color32_to_hex(self.hover),
        }
    }
}

/// A built-in theme with its metadata and palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub description: &'static str,
    pub colors: ThemePalette,
}

/// Immutable lookup table from theme name to palette.
///
/// Built once on first use and shared for the rest of the process.
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: [Theme; 3],
}

static REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

impl ThemeRegistry {
    fn new() -> Self {
        Self {
            themes: [dark_theme(), light_theme(), high_contrast_theme()],
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static ThemeRegistry {
        &REGISTRY
    }

    /// Retrieves a theme by name.
    pub fn get(&self, name: ThemeName) -> &Theme {
        &self.themes[name.index()]
    }

    /// Returns the palette for a theme.
    pub fn palette(&self, name: ThemeName) -> &ThemePalette {
        &self.get(name).colors
    }

    /// Retrieves a theme by its string key, or `None` if no such theme exists.
    pub fn get_by_key(&self, key: &str) -> Option<&Theme> {
        ThemeName::from_key(key).map(|name| self.get(name))
    }

    /// Returns true if `key` names a registered theme.
    pub fn contains_key(&self, key: &str) -> bool {
        ThemeName::from_key(key).is_some()
    }

    /// Returns the keys of all registered themes.
    pub fn names(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        description: "Dark plan on a charcoal canvas",
        colors: ThemePalette::from_hex(["#2d2d2d", "#3a3a3a", "#4a4a4a", "#ffffff", "#ff4444", "#4a6fa5"]),
    }
}

fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        description: "Light plan on an off-white canvas",
        colors: ThemePalette::from_hex(["#f5f5f5", "#ffffff", "#cccccc", "#333333", "#ff4444", "#6fa5ff"]),
    }
}

fn high_contrast_theme() -> Theme {
    Theme {
        name: ThemeName::HighContrast,
        description: "White outlines on black with neon accents",
        colors: ThemePalette::from_hex(["#000000", "#1a1a1a", "#ffffff", "#ffffff", "#00ff00", "#00ffff"]),
    }
}

/// Converts a hex color string (like "#2d2d2d") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Formats the RGB channels of a color as `#rrggbb`, ignoring alpha.
pub fn color32_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Sets the alpha channel of an opaque color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Scales the alpha of an opaque color by `factor` in `[0, 1]`.
pub fn scale_alpha(color: Color32, factor: f32) -> Color32 {
    let alpha = (factor.clamp(0.0, 1.0) * 255.0).round() as u8;
    with_alpha(color, alpha)
}
