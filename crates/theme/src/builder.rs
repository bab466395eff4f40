//! Theme definition and builder
//!
//! The theme is built once from literal token tables, validated, and then
//! shared read-only. Validation splits problems into warnings (logged and
//! kept on the theme) and errors (returned from [`ThemeBuilder::build`]).
//!
//! # Usage
//!
//! ```rust
//! use theme::{ThemeBuilder, StyleConfig};
//!
//! let theme = ThemeBuilder::new()
//!     .config(&StyleConfig::default().with_initial_color_mode("dark"))
//!     .build()
//!     .unwrap();
//! assert_eq!(theme.initial_color_mode_name, "dark");
//! assert_eq!(theme.breakpoint_count(), 4);
//! ```

use crate::colors::{default_colors, ColorModes, ColorPalette};
use crate::config::StyleConfig;
use crate::error::{ConfigWarning, Result, ThemeError};
use crate::scales::{
    breakpoints, default_font_sizes, default_font_weights, default_fonts, default_line_heights,
    default_space, Scale, ScaleKey,
};
use crate::styles::{
    color_references, default_button_variants, default_element_styles, ElementStyles, StyleObject,
};
use crate::syntax::{flatten, prism_groups, SyntaxGroup};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the base color mode in the default theme
pub const BASE_MODE_NAME: &str = "light";

// =============================================================================
// Theme
// =============================================================================

/// The complete token table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Name of the base color mode, active at startup
    pub initial_color_mode_name: String,
    /// Base colors and mode overrides
    pub colors: ColorModes,
    /// Font stacks
    pub fonts: Scale,
    /// Font size scale
    pub font_sizes: Scale,
    /// Font weights
    pub font_weights: Scale,
    /// Line heights
    pub line_heights: Scale,
    /// Space scale
    pub space: Scale,
    /// Breakpoint widths, ascending
    #[serde(default = "breakpoints::defaults")]
    pub breakpoints: Vec<String>,
    /// Letter spacings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacings: Option<Scale>,
    /// Widths and heights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Scale>,
    /// Border radii
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radii: Option<Scale>,
    /// Border shorthands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Scale>,
    /// Shadows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Scale>,
    /// Stacking order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_indices: Option<Scale>,
    /// Button variants
    #[serde(default)]
    pub buttons: IndexMap<String, StyleObject>,
    /// Element styles
    #[serde(default)]
    pub styles: ElementStyles,
    #[serde(skip)]
    warnings: Vec<ConfigWarning>,
}

impl Theme {
    /// The base palette (the initial mode's colors before any mode switch)
    pub fn base_palette(&self) -> &ColorPalette {
        &self.colors.base
    }

    /// All mode names, base first, then declared modes in order
    pub fn mode_names(&self) -> Vec<&str> {
        std::iter::once(self.base_mode_name())
            .chain(
                self.colors
                    .mode_names()
                    .filter(|name| *name != self.base_mode_name()),
            )
            .collect()
    }

    /// The name the base palette answers to
    ///
    /// When the initial mode is one of the declared modes the base palette is
    /// still reachable as `light`.
    pub fn base_mode_name(&self) -> &str {
        if self.colors.modes.contains_key(&self.initial_color_mode_name) {
            BASE_MODE_NAME
        } else {
            &self.initial_color_mode_name
        }
    }

    /// Whether `name` is the base mode or a declared mode
    pub fn has_mode(&self, name: &str) -> bool {
        name == self.base_mode_name() || self.colors.modes.contains_key(name)
    }

    /// Effective palette for a mode
    pub fn palette(&self, mode: &str) -> Option<ColorPalette> {
        self.colors.resolve(mode, self.base_mode_name())
    }

    /// Look up a non-color scale
    pub fn scale(&self, key: ScaleKey) -> Option<&Scale> {
        match key {
            ScaleKey::Colors => None,
            ScaleKey::Space => Some(&self.space),
            ScaleKey::Fonts => Some(&self.fonts),
            ScaleKey::FontSizes => Some(&self.font_sizes),
            ScaleKey::FontWeights => Some(&self.font_weights),
            ScaleKey::LineHeights => Some(&self.line_heights),
            ScaleKey::LetterSpacings => self.letter_spacings.as_ref(),
            ScaleKey::Sizes => self.sizes.as_ref(),
            ScaleKey::Radii => self.radii.as_ref(),
            ScaleKey::Borders => self.borders.as_ref(),
            ScaleKey::Shadows => self.shadows.as_ref(),
            ScaleKey::ZIndices => self.z_indices.as_ref(),
        }
    }

    /// Look up a variant style in a named variant scale (e.g. `buttons`)
    pub fn variant(&self, scale: &str, name: &str) -> Option<&StyleObject> {
        match scale {
            "buttons" => self.buttons.get(name),
            _ => None,
        }
    }

    /// Number of breakpoints including the unscoped base
    pub fn breakpoint_count(&self) -> usize {
        self.breakpoints.len() + 1
    }

    /// Media query for breakpoint `index` (`None` for the base breakpoint)
    pub fn media_query(&self, index: usize) -> Option<String> {
        index
            .checked_sub(1)
            .and_then(|i| self.breakpoints.get(i))
            .map(|width| breakpoints::min_width_query(width))
    }

    /// Warnings recorded during construction
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Re-run validation; warnings are logged and stored on the theme
    pub fn validate(&mut self, strict: bool) -> Result<()> {
        let warnings = collect_warnings(self);
        check(self, strict, &warnings)?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        self.warnings = warnings;
        Ok(())
    }

    /// Serialize to theme-ui shaped JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed theme-ui shaped JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a theme from JSON
    pub fn from_json(json: &str, strict: bool) -> Result<Self> {
        let mut theme: Theme = serde_json::from_str(json)?;
        theme.validate(strict)?;
        Ok(theme)
    }
}

// =============================================================================
// Validation
// =============================================================================

fn collect_warnings(theme: &Theme) -> Vec<ConfigWarning> {
    let mut warnings: Vec<ConfigWarning> = theme
        .colors
        .unknown_override_roles()
        .into_iter()
        .map(|(mode, role)| ConfigWarning::UnknownModeRole { mode, role })
        .collect();

    let variant_styles = theme.buttons.iter().map(|(name, obj)| (format!("buttons.{}", name), obj));
    let element_styles = theme.styles.iter().map(|(key, obj)| (key.clone(), obj));
    for (element, object) in element_styles.chain(variant_styles) {
        for reference in color_references(object) {
            if !theme.colors.base.contains(&reference.role) {
                warnings.push(ConfigWarning::UnknownColorReference {
                    element: element.clone(),
                    selector: reference.selector,
                    property: reference.property,
                    role: reference.role,
                });
            }
        }
    }
    warnings
}

fn check(theme: &Theme, strict: bool, warnings: &[ConfigWarning]) -> Result<()> {
    if !theme.has_mode(&theme.initial_color_mode_name) {
        return Err(ThemeError::UnknownInitialMode(
            theme.initial_color_mode_name.clone(),
        ));
    }
    if let Some(index) = theme.breakpoints.iter().position(|bp| bp.trim().is_empty()) {
        return Err(ThemeError::InvalidBreakpoint(index));
    }
    if strict {
        for warning in warnings {
            if let ConfigWarning::UnknownModeRole { mode, role } = warning {
                return Err(ThemeError::UnknownModeRole {
                    mode: mode.clone(),
                    role: role.clone(),
                });
            }
        }
    }
    Ok(())
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Theme`], starting from the default token tables
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    initial_color_mode_name: String,
    colors: ColorModes,
    breakpoints: Vec<String>,
    syntax: Vec<SyntaxGroup>,
    element_overrides: ElementStyles,
    buttons: IndexMap<String, StyleObject>,
    strict: bool,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeBuilder {
    /// Start from the default token tables
    pub fn new() -> Self {
        Self {
            initial_color_mode_name: BASE_MODE_NAME.to_string(),
            colors: default_colors(),
            breakpoints: breakpoints::defaults(),
            syntax: prism_groups(),
            element_overrides: ElementStyles::new(),
            buttons: default_button_variants(),
            strict: false,
        }
    }

    /// Replace the color table
    pub fn colors(mut self, colors: ColorModes) -> Self {
        self.colors = colors;
        self
    }

    /// Add or replace a color mode
    pub fn mode(mut self, name: impl Into<String>, overrides: ColorPalette) -> Self {
        self.colors.modes.insert(name.into(), overrides);
        self
    }

    /// Set the initial color mode
    pub fn initial_color_mode(mut self, name: impl Into<String>) -> Self {
        self.initial_color_mode_name = name.into();
        self
    }

    /// Set the breakpoint widths
    pub fn breakpoints(mut self, widths: Vec<String>) -> Self {
        self.breakpoints = widths;
        self
    }

    /// Replace the syntax-highlighting groups
    pub fn syntax(mut self, groups: Vec<SyntaxGroup>) -> Self {
        self.syntax = groups;
        self
    }

    /// Add or replace an element style
    pub fn element_style(mut self, key: impl Into<String>, style: StyleObject) -> Self {
        self.element_overrides.insert(key.into(), style);
        self
    }

    /// Add or replace a button variant
    pub fn button_variant(mut self, name: impl Into<String>, style: StyleObject) -> Self {
        self.buttons.insert(name.into(), style);
        self
    }

    /// Treat unknown mode roles as errors
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Apply a [`StyleConfig`]
    pub fn config(mut self, config: &StyleConfig) -> Self {
        self.breakpoints = config.breakpoints.clone();
        if let Some(mode) = &config.initial_color_mode {
            self.initial_color_mode_name = mode.clone();
        }
        self.strict = config.strict_modes;
        self
    }

    fn assemble(self) -> (Theme, bool) {
        let syntax_rules = flatten(&self.syntax);
        let mut styles = default_element_styles(&syntax_rules);
        for (key, style) in self.element_overrides {
            styles.insert(key, style);
        }

        let theme = Theme {
            initial_color_mode_name: self.initial_color_mode_name,
            colors: self.colors,
            fonts: default_fonts(),
            font_sizes: default_font_sizes(),
            font_weights: default_font_weights(),
            line_heights: default_line_heights(),
            space: default_space(),
            breakpoints: self.breakpoints,
            letter_spacings: None,
            sizes: None,
            radii: None,
            borders: None,
            shadows: None,
            z_indices: None,
            buttons: self.buttons,
            styles,
            warnings: Vec::new(),
        };
        (theme, self.strict)
    }

    /// Build and validate the theme
    pub fn build(self) -> Result<Theme> {
        let (mut theme, strict) = self.assemble();
        theme.validate(strict)?;
        tracing::debug!(
            modes = theme.colors.modes.len(),
            element_styles = theme.styles.len(),
            breakpoints = theme.breakpoints.len(),
            warnings = theme.warnings.len(),
            "Built theme"
        );
        Ok(theme)
    }
}

/// The default theme
///
/// The default tables always pass the fatal checks, so only warnings are
/// computed here. Each one is logged like a `build` warning.
pub fn default_theme() -> Theme {
    let (mut theme, _) = ThemeBuilder::new().assemble();
    theme.warnings = collect_warnings(&theme);
    for warning in &theme.warnings {
        tracing::warn!("{}", warning);
    }
    theme
}
