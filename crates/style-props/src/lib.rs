//! Style props for stylekit primitives
//!
//! This crate turns component props into CSS declarations:
//!
//! - [`namespace`] - Prop tables grouped by namespace
//! - [`responsive`] - Breakpoint expansion, token lookup, unit transforms
//! - [`primitives`] - Box, Text, Heading, Flexbox, and Button contracts
//! - [`engine`] - The resolver walking contracts and style objects
//! - [`css`] - Resolved declarations and CSS text
//!
//! # Example
//!
//! ```rust
//! use style_props::{Primitive, Props, StyleResolver};
//! use theme::default_theme;
//!
//! let theme = default_theme();
//! let palette = theme.palette("light").unwrap();
//! let resolver = StyleResolver::new(&theme, &palette);
//!
//! let style = resolver.resolve_primitive(Primitive::Text, &Props::new().with("color", "primary"));
//! assert_eq!(style.get("color", 0).as_deref(), Some("#00f"));
//! assert_eq!(style.get("fontSize", 1).as_deref(), Some("18px"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod css;
pub mod engine;
mod error;
pub mod namespace;
pub mod primitives;
pub mod responsive;
mod value;

pub use css::{Declaration, ResolvedStyle, ScopedDeclaration};
pub use engine::StyleResolver;
pub use error::{PropsError, Result};
pub use namespace::{lookup_prop, Namespace, PropConfig, Transform};
pub use primitives::{validate_contracts, Primitive, PropContract};
pub use responsive::ThemeView;
pub use value::{PropValue, Props};
