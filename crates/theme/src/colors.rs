//! Color roles and color modes
//!
//! The base palette maps semantic roles (`body`, `background`, `primary`, ...)
//! to concrete colors. Each named mode overrides a subset of those roles; the
//! effective palette for a mode is the base palette with the mode's overrides
//! applied on top.
//!
//! # Usage
//!
//! ```rust
//! use theme::colors::default_colors;
//!
//! let colors = default_colors();
//! let dark = colors.resolve("dark", "light").unwrap();
//! assert_eq!(dark.get("body"), Some("#fff"));
//! assert_eq!(dark.get("accent"), Some("#c0f"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a CSS color string (e.g., "#fff" or "#ededff")
pub type Color = String;

/// Parse a hex color string (`#rgb` or `#rrggbb`) to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| {
                let digit = c.to_digit(16).unwrap_or(0) as u8;
                digit * 16 + digit
            });
            Some((channels.next()?, channels.next()?, channels.next()?))
        }
        6 | 8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// CSS keywords that are valid wherever a color is expected
pub const CSS_COLOR_KEYWORDS: &[&str] = &[
    "inherit",
    "initial",
    "unset",
    "revert",
    "currentColor",
    "currentcolor",
    "transparent",
    "none",
];

/// Check whether a color-valued string is a literal CSS color rather than a role name
pub fn is_color_literal(value: &str) -> bool {
    parse_hex_color(value).is_some()
        || CSS_COLOR_KEYWORDS.contains(&value)
        || value.contains('(')
        || value.contains(' ')
}

// =============================================================================
// Base Color Roles
// =============================================================================

/// Base (light) color role values
pub mod base {
    /// Body text
    pub const BODY: &str = "#000";
    /// Page background
    pub const BACKGROUND: &str = "#fff";
    /// Primary / link color
    pub const PRIMARY: &str = "#00f";
    /// Secondary / hover color
    pub const SECONDARY: &str = "#00a";
    /// Highlighted background
    pub const HIGHLIGHT: &str = "#ededff";
    /// Accent color
    pub const ACCENT: &str = "#c0f";
    /// Neutral gray
    pub const GRAY: &str = "#eee";
    /// Light gray (code blocks)
    pub const LIGHTGRAY: &str = "#fafafa";
    /// Mid gray (comments, punctuation)
    pub const MIDGRAY: &str = "#777";
}

// =============================================================================
// Color Palette
// =============================================================================

/// An ordered mapping of color role name to color value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    roles: IndexMap<String, Color>,
}

impl ColorPalette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role, returning the palette (builder style)
    pub fn with(mut self, role: impl Into<String>, color: impl Into<Color>) -> Self {
        self.insert(role, color);
        self
    }

    /// Set a role's color
    pub fn insert(&mut self, role: impl Into<String>, color: impl Into<Color>) {
        self.roles.insert(role.into(), color.into());
    }

    /// Get a role's color
    pub fn get(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(String::as_str)
    }

    /// Check whether a role is defined
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Iterate roles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Role names in declaration order
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Number of roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the palette has no roles
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Return a copy of this palette with another palette's roles applied on top
    pub fn overlay(&self, overrides: &ColorPalette) -> ColorPalette {
        let mut roles = self.roles.clone();
        for (role, color) in &overrides.roles {
            if let Some(slot) = roles.get_mut(role) {
                *slot = color.clone();
            } else {
                roles.insert(role.clone(), color.clone());
            }
        }
        ColorPalette { roles }
    }
}

// =============================================================================
// Color Modes
// =============================================================================

/// Base palette plus named partial overrides
///
/// Serializes in the theme-ui shape: base roles at the top level and the
/// mode overrides under a `modes` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorModes {
    /// Base color roles (the initial mode)
    #[serde(flatten)]
    pub base: ColorPalette,
    /// Named mode overrides, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub modes: IndexMap<String, ColorPalette>,
}

impl ColorModes {
    /// Create color modes from a base palette
    pub fn new(base: ColorPalette) -> Self {
        Self {
            base,
            modes: IndexMap::new(),
        }
    }

    /// Add a mode override, returning self (builder style)
    pub fn with_mode(mut self, name: impl Into<String>, overrides: ColorPalette) -> Self {
        self.modes.insert(name.into(), overrides);
        self
    }

    /// Names of the declared (non-base) modes in declaration order
    pub fn mode_names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    /// Effective palette for `mode`, where `base_name` names the base palette
    ///
    /// Returns `None` when `mode` is neither the base nor a declared mode.
    pub fn resolve(&self, mode: &str, base_name: &str) -> Option<ColorPalette> {
        if mode == base_name {
            return Some(self.base.clone());
        }
        self.modes
            .get(mode)
            .map(|overrides| self.base.overlay(overrides))
    }

    /// `(mode, role)` pairs where a mode overrides a role the base does not define
    pub fn unknown_override_roles(&self) -> Vec<(String, String)> {
        self.modes
            .iter()
            .flat_map(|(mode, overrides)| {
                overrides
                    .role_names()
                    .filter(|role| !self.base.contains(role))
                    .map(move |role| (mode.clone(), role.to_string()))
            })
            .collect()
    }
}

// =============================================================================
// Default Colors
// =============================================================================

/// The base palette
pub fn base_palette() -> ColorPalette {
    ColorPalette::new()
        .with("body", base::BODY)
        .with("background", base::BACKGROUND)
        .with("primary", base::PRIMARY)
        .with("secondary", base::SECONDARY)
        .with("highlight", base::HIGHLIGHT)
        .with("accent", base::ACCENT)
        .with("gray", base::GRAY)
        .with("lightgray", base::LIGHTGRAY)
        .with("midgray", base::MIDGRAY)
}

/// Dark mode overrides
pub fn dark_mode() -> ColorPalette {
    ColorPalette::new()
        .with("body", "#fff")
        .with("background", "#000")
        .with("primary", "#0cf")
        .with("secondary", "#f0e")
        .with("gray", "#222")
        .with("lightgray", "#111")
        .with("highlight", "#001119")
}

/// Cyan mode overrides
pub fn cyan_mode() -> ColorPalette {
    ColorPalette::new()
        .with("body", "#023")
        .with("background", "#0ff")
        .with("primary", "#03c")
        .with("secondary", "#01a")
        .with("gray", "#0cc")
        .with("lightgray", "#0ee")
        .with("highlight", "#0de")
}

/// Gray mode overrides
pub fn gray_mode() -> ColorPalette {
    ColorPalette::new()
        .with("body", "#eef")
        .with("background", "#333336")
        .with("primary", "#09f")
        .with("secondary", "#0bf")
        .with("gray", "#55555a")
        .with("lightgray", "#444448")
        .with("highlight", "#33444c")
}

/// Book mode overrides (warm paper tones)
pub fn book_mode() -> ColorPalette {
    ColorPalette::new()
        .with("body", "#322")
        .with("background", "#fff9f9")
        .with("primary", "#c30")
        .with("secondary", "#400")
        .with("gray", "#e9e6e6")
        .with("lightgray", "#f9f6f6")
}

/// Magenta mode overrides
pub fn magenta_mode() -> ColorPalette {
    ColorPalette::new()
        .with("body", "#203")
        .with("background", "#f3f")
        .with("primary", "#208")
        .with("secondary", "#106")
        .with("gray", "#c0c")
        .with("lightgray", "#e0e")
}

/// The full default color table: base palette plus every mode
pub fn default_colors() -> ColorModes {
    ColorModes::new(base_palette())
        .with_mode("dark", dark_mode())
        .with_mode("cyan", cyan_mode())
        .with_mode("gray", gray_mode())
        .with_mode("book", book_mode())
        .with_mode("magenta", magenta_mode())
}
