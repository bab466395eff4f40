//! Design token scales
//!
//! This module provides the typographic and spacing scales, breakpoints,
//! and the scale lookup used when a prop value is a token reference.

use crate::value::ScaleValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Scale
// =============================================================================

/// A token scale: either an ordered list indexed by number, or a named map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scale {
    /// Ordered scale (`fontSizes`, `space`)
    List(Vec<ScaleValue>),
    /// Named scale (`fonts`, `fontWeights`, `lineHeights`)
    Map(IndexMap<String, ScaleValue>),
}

impl Scale {
    /// Build a list scale from numbers
    pub fn numbers(values: &[f64]) -> Self {
        Scale::List(values.iter().map(|v| ScaleValue::Number(*v)).collect())
    }

    /// Build a map scale from `(name, value)` pairs
    pub fn named<V: Into<ScaleValue> + Clone>(entries: &[(&str, V)]) -> Self {
        Scale::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone().into()))
                .collect(),
        )
    }

    /// Look up a token value by a prop value
    ///
    /// Numbers index list scales; strings key map scales. A numeric string
    /// also indexes a list scale (`"2"` and `2` are the same token).
    pub fn get(&self, token: &ScaleValue) -> Option<&ScaleValue> {
        match (self, token) {
            (Scale::List(values), ScaleValue::Number(_)) => token.as_index().and_then(|i| values.get(i)),
            (Scale::List(values), ScaleValue::Str(s)) => {
                s.parse::<usize>().ok().and_then(|i| values.get(i))
            }
            (Scale::Map(entries), ScaleValue::Str(s)) => entries.get(s.as_str()),
            (Scale::Map(entries), ScaleValue::Number(n)) => {
                entries.get(crate::value::format_number(*n).as_str())
            }
        }
    }

    /// Look up a token by name
    pub fn get_key(&self, key: &str) -> Option<&ScaleValue> {
        self.get(&ScaleValue::Str(key.to_string()))
    }

    /// Look up a token by index
    pub fn get_index(&self, index: usize) -> Option<&ScaleValue> {
        match self {
            Scale::List(values) => values.get(index),
            Scale::Map(entries) => entries.get(index.to_string().as_str()),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            Scale::List(values) => values.len(),
            Scale::Map(entries) => entries.len(),
        }
    }

    /// Whether the scale has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Names of the theme scales a prop may resolve against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleKey {
    /// Color roles (resolved against the active mode's palette)
    Colors,
    /// Margin, padding and offsets
    Space,
    /// Font stacks
    Fonts,
    /// Font sizes
    FontSizes,
    /// Font weights
    FontWeights,
    /// Line heights
    LineHeights,
    /// Letter spacings
    LetterSpacings,
    /// Widths and heights
    Sizes,
    /// Border radii
    Radii,
    /// Border shorthands
    Borders,
    /// Box and text shadows
    Shadows,
    /// Stacking order
    ZIndices,
}

impl ScaleKey {
    /// The theme-ui key for this scale
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleKey::Colors => "colors",
            ScaleKey::Space => "space",
            ScaleKey::Fonts => "fonts",
            ScaleKey::FontSizes => "fontSizes",
            ScaleKey::FontWeights => "fontWeights",
            ScaleKey::LineHeights => "lineHeights",
            ScaleKey::LetterSpacings => "letterSpacings",
            ScaleKey::Sizes => "sizes",
            ScaleKey::Radii => "radii",
            ScaleKey::Borders => "borders",
            ScaleKey::Shadows => "shadows",
            ScaleKey::ZIndices => "zIndices",
        }
    }
}

impl std::fmt::Display for ScaleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font stacks
pub mod fonts {
    /// Body text font stack
    pub const BODY: &str = "system-ui, sans-serif";
    /// Code font stack
    pub const MONOSPACE: &str = "Menlo, monospace";
}

/// Font size scale in pixels, indexed 0..=8
pub mod font_size {
    /// The full scale
    pub const SCALE: [f64; 9] = [12.0, 14.0, 16.0, 18.0, 24.0, 32.0, 48.0, 64.0, 72.0];
}

/// Font weight values
pub mod font_weight {
    /// Body text (400)
    pub const BODY: f64 = 400.0;
    /// Headings (700)
    pub const HEADING: f64 = 700.0;
    /// Bold (700)
    pub const BOLD: f64 = 700.0;
}

/// Line height multipliers
pub mod line_height {
    /// Body text (1.75)
    pub const BODY: f64 = 1.75;
    /// Headings (1.25)
    pub const HEADING: f64 = 1.25;
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels, indexed 0..=8
pub mod space {
    /// The full scale
    pub const SCALE: [f64; 9] = [0.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0];
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Responsive breakpoints
///
/// Breakpoint 0 is the unscoped base; breakpoint `i >= 1` applies from
/// `min-width: DEFAULT[i - 1]` upward.
pub mod breakpoints {
    /// Default breakpoint widths
    pub const DEFAULT: [&str; 3] = ["40em", "52em", "64em"];

    /// Default breakpoint widths as owned strings
    pub fn defaults() -> Vec<String> {
        DEFAULT.iter().map(|s| s.to_string()).collect()
    }

    /// Media query for a min-width breakpoint
    pub fn min_width_query(width: &str) -> String {
        format!("@media screen and (min-width: {})", width)
    }
}

// =============================================================================
// Default Scales
// =============================================================================

/// Default font stacks
pub fn default_fonts() -> Scale {
    Scale::named(&[("body", fonts::BODY), ("monospace", fonts::MONOSPACE)])
}

/// Default font size scale
pub fn default_font_sizes() -> Scale {
    Scale::numbers(&font_size::SCALE)
}

/// Default font weights
pub fn default_font_weights() -> Scale {
    Scale::named(&[
        ("body", font_weight::BODY),
        ("heading", font_weight::HEADING),
        ("bold", font_weight::BOLD),
    ])
}

/// Default line heights
pub fn default_line_heights() -> Scale {
    Scale::named(&[("body", line_height::BODY), ("heading", line_height::HEADING)])
}

/// Default space scale
pub fn default_space() -> Scale {
    Scale::numbers(&space::SCALE)
}
