//! Design tokens and theme for stylekit
//!
//! This crate provides the token table consumed by the style-prop resolver:
//! color roles with alternate modes, typographic and spacing scales,
//! breakpoints, button variants, and element styles including the
//! syntax-highlighting sub-theme.
//!
//! # Modules
//!
//! - [`colors`] - Color roles, palettes, and modes
//! - [`scales`] - Font, weight, line-height, and space scales; breakpoints
//! - [`styles`] - Element style rules
//! - [`syntax`] - Syntax-highlighting groups and flattening
//! - [`config`] - JSON configuration
//!
//! # Example
//!
//! ```rust
//! use theme::default_theme;
//!
//! let theme = default_theme();
//! let dark = theme.palette("dark").unwrap();
//! assert_eq!(dark.get("background"), Some("#000"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
pub mod colors;
pub mod config;
mod error;
pub mod scales;
pub mod styles;
pub mod syntax;
pub mod value;

pub use builder::{default_theme, Theme, ThemeBuilder, BASE_MODE_NAME};
pub use colors::{Color, ColorModes, ColorPalette};
pub use config::StyleConfig;
pub use error::{ConfigWarning, Result, ThemeError};
pub use scales::{Scale, ScaleKey};
pub use styles::{ElementStyles, StyleObject, StyleValue};
pub use syntax::SyntaxGroup;
pub use value::ScaleValue;
