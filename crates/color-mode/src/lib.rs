//! Active color mode for stylekit
//!
//! [`ColorModeContext`] is passed to whatever renders styles; it is not a
//! global. Switching modes swaps the effective palette atomically.
//!
//! # Example
//!
//! ```rust
//! use color_mode::ColorModeContext;
//! use std::sync::Arc;
//! use theme::default_theme;
//!
//! let ctx = ColorModeContext::new(Arc::new(default_theme())).unwrap();
//! ctx.set_mode("dark").unwrap();
//! assert_eq!(ctx.resolve_color("body").as_deref(), Some("#fff"));
//! assert!(ctx.set_mode("sepia").is_err());
//! assert_eq!(ctx.mode_name(), "dark");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod context;
mod error;

pub use context::{ActiveMode, ColorModeContext};
pub use error::{ModeError, Result};
