//! stylekit
//!
//! Styled UI primitives and a design-token theme. [`StyleEngine`] wires the
//! theme, the active color mode, and the prop resolver together; the
//! rendering runtime consumes the declarations and CSS text it produces.
//!
//! # Example
//!
//! ```rust
//! use stylekit::{Primitive, Props, StyleEngine};
//!
//! let engine = StyleEngine::new().unwrap();
//! let button = engine.style(Primitive::Button, &Props::new().with("variant", "secondary"));
//! assert_eq!(button.get("backgroundColor", 0).as_deref(), Some("#00a"));
//!
//! engine.set_mode("dark").unwrap();
//! let text = engine.style(Primitive::Text, &Props::new());
//! assert_eq!(text.get("color", 0).as_deref(), Some("#fff"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub use color_mode::{ActiveMode, ColorModeContext, ModeError};
pub use style_props::{
    Declaration, PropContract, PropValue, Primitive, Props, PropsError, ResolvedStyle,
    ScopedDeclaration, StyleResolver,
};
pub use theme::{default_theme, StyleConfig, Theme, ThemeBuilder, ThemeError};

/// Errors surfaced by the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Theme construction or configuration failed
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    /// A primitive contract is invalid
    #[error("Prop contract error: {0}")]
    Props(#[from] PropsError),

    /// A color mode switch was rejected
    #[error("Color mode error: {0}")]
    Mode(#[from] ModeError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Theme, active color mode, and resolver in one place
#[derive(Debug)]
pub struct StyleEngine {
    modes: ColorModeContext,
}

impl StyleEngine {
    /// Engine over the default theme
    pub fn new() -> Result<Self> {
        Self::with_theme(ThemeBuilder::new().build()?)
    }

    /// Engine over the default theme with a configuration applied
    pub fn from_config(config: &StyleConfig) -> Result<Self> {
        Self::with_theme(ThemeBuilder::new().config(config).build()?)
    }

    /// Engine configured from a JSON file
    pub fn load_config(path: impl AsRef<Path>) -> Result<Self> {
        let config = StyleConfig::load(path)?;
        Self::from_config(&config)
    }

    /// Engine over an already built theme
    ///
    /// Primitive contracts are checked here, so a bad default prop fails
    /// at startup rather than at render time.
    pub fn with_theme(theme: Theme) -> Result<Self> {
        style_props::validate_contracts()?;
        let modes = ColorModeContext::new(Arc::new(theme))?;
        tracing::info!(mode = %modes.mode_name(), "Style engine ready");
        Ok(Self { modes })
    }

    /// The shared, read-only theme
    pub fn theme(&self) -> &Arc<Theme> {
        self.modes.theme()
    }

    /// The color mode context
    pub fn modes(&self) -> &ColorModeContext {
        &self.modes
    }

    /// Name of the active color mode
    pub fn mode_name(&self) -> String {
        self.modes.mode_name()
    }

    /// Switch the active color mode
    pub fn set_mode(&self, name: &str) -> Result<()> {
        self.modes.set_mode(name)?;
        Ok(())
    }

    /// Advance to the next color mode, returning its name
    pub fn cycle_mode(&self) -> Result<String> {
        Ok(self.modes.cycle()?.name.clone())
    }

    /// Resolve caller props for a primitive under the active mode
    pub fn style(&self, primitive: Primitive, props: &Props) -> ResolvedStyle {
        let active = self.modes.current();
        StyleResolver::new(self.theme(), &active.palette).resolve_primitive(primitive, props)
    }

    /// Effective declarations of a primitive at one breakpoint
    pub fn style_at(&self, primitive: Primitive, props: &Props, breakpoint: usize) -> Vec<Declaration> {
        self.style(primitive, props).at(breakpoint)
    }

    /// A primitive's namespaces and default props
    pub fn contract(&self, primitive: Primitive) -> PropContract {
        primitive.contract()
    }

    /// CSS text for every element style under the active mode
    pub fn global_styles(&self) -> String {
        let active = self.modes.current();
        StyleResolver::new(self.theme(), &active.palette).render_element_styles()
    }
}
