//! Active color mode
//!
//! The context owns the only mutable state in stylekit: which palette is
//! active. A switch computes the new palette first and then replaces the
//! shared `Arc<ActiveMode>` in one assignment, so a reader holding a
//! snapshot never sees a half-applied mode.

use crate::error::{ModeError, Result};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use theme::{ColorPalette, Theme};

/// A color mode together with its effective palette
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveMode {
    /// Mode name
    pub name: String,
    /// Base palette with the mode's overrides applied
    pub palette: ColorPalette,
}

impl ActiveMode {
    /// Resolve a color role, `None` if the role is unknown
    pub fn color(&self, role: &str) -> Option<&str> {
        self.palette.get(role)
    }
}

/// Injectable holder of the active color mode
#[derive(Debug)]
pub struct ColorModeContext {
    theme: Arc<Theme>,
    active: RwLock<Arc<ActiveMode>>,
}

impl ColorModeContext {
    /// Create a context starting in the theme's initial mode
    pub fn new(theme: Arc<Theme>) -> Result<Self> {
        let initial = theme.initial_color_mode_name.clone();
        Self::with_initial(theme, &initial)
    }

    /// Create a context starting in `mode`
    pub fn with_initial(theme: Arc<Theme>, mode: &str) -> Result<Self> {
        let active = activate(&theme, mode)?;
        Ok(Self {
            theme,
            active: RwLock::new(Arc::new(active)),
        })
    }

    /// The shared theme
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// Snapshot of the active mode
    pub fn current(&self) -> Arc<ActiveMode> {
        Arc::clone(&self.active.read())
    }

    /// Name of the active mode
    pub fn mode_name(&self) -> String {
        self.active.read().name.clone()
    }

    /// Mode names in declared order, base first
    pub fn mode_names(&self) -> Vec<String> {
        self.theme.mode_names().into_iter().map(str::to_string).collect()
    }

    /// Switch to a mode
    ///
    /// Unknown names are rejected and leave the active mode unchanged.
    pub fn set_mode(&self, name: &str) -> Result<Arc<ActiveMode>> {
        let next = match activate(&self.theme, name) {
            Ok(mode) => Arc::new(mode),
            Err(e) => {
                tracing::warn!(mode = name, active = %self.mode_name(), "Rejected color mode switch");
                return Err(e);
            }
        };
        let previous = std::mem::replace(&mut *self.active.write(), Arc::clone(&next));
        tracing::info!(from = %previous.name, to = %next.name, "Switched color mode");
        Ok(next)
    }

    /// Return to the theme's initial mode
    pub fn reset(&self) -> Result<Arc<ActiveMode>> {
        let initial = self.theme.initial_color_mode_name.clone();
        self.set_mode(&initial)
    }

    /// Advance to the next mode in declared order, wrapping around
    pub fn cycle(&self) -> Result<Arc<ActiveMode>> {
        let names = self.theme.mode_names();
        let current = self.mode_name();
        let index = names.iter().position(|n| *n == current).unwrap_or(0);
        let next = names[(index + 1) % names.len()].to_string();
        self.set_mode(&next)
    }

    /// Resolve a color role under the active mode
    pub fn resolve_color(&self, role: &str) -> Option<String> {
        self.active.read().color(role).map(str::to_string)
    }
}

fn activate(theme: &Theme, name: &str) -> Result<ActiveMode> {
    let palette = theme
        .palette(name)
        .ok_or_else(|| ModeError::UnknownMode(name.to_string()))?;
    Ok(ActiveMode {
        name: name.to_string(),
        palette,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::{default_theme, ThemeBuilder};

    fn context() -> ColorModeContext {
        ColorModeContext::new(Arc::new(default_theme())).unwrap()
    }

    // ==========================================================================
    // Construction Tests
    // ==========================================================================

    #[test]
    fn test_starts_in_initial_mode() {
        let ctx = context();
        assert_eq!(ctx.mode_name(), "light");
        assert_eq!(ctx.resolve_color("body").as_deref(), Some("#000"));
    }

    #[test]
    fn test_with_initial() {
        let ctx = ColorModeContext::with_initial(Arc::new(default_theme()), "book").unwrap();
        assert_eq!(ctx.mode_name(), "book");

        let err = ColorModeContext::with_initial(Arc::new(default_theme()), "sepia").unwrap_err();
        assert_eq!(err, ModeError::UnknownMode("sepia".to_string()));
    }

    #[test]
    fn test_initial_mode_from_theme() {
        let theme = ThemeBuilder::new().initial_color_mode("dark").build().unwrap();
        let ctx = ColorModeContext::new(Arc::new(theme)).unwrap();
        assert_eq!(ctx.mode_name(), "dark");
        assert_eq!(ctx.resolve_color("background").as_deref(), Some("#000"));
    }

    // ==========================================================================
    // Switching Tests
    // ==========================================================================

    #[test]
    fn test_round_trip() {
        let ctx = context();
        let original = ctx.resolve_color("body");

        ctx.set_mode("dark").unwrap();
        assert_eq!(ctx.resolve_color("body").as_deref(), Some("#fff"));

        ctx.set_mode("light").unwrap();
        assert_eq!(ctx.resolve_color("body"), original);
    }

    #[test]
    fn test_unknown_mode_leaves_active_unchanged() {
        let ctx = context();
        ctx.set_mode("cyan").unwrap();
        let before = ctx.current();

        let err = ctx.set_mode("sepia").unwrap_err();
        assert_eq!(err, ModeError::UnknownMode("sepia".to_string()));
        assert_eq!(ctx.current(), before);
        assert_eq!(ctx.mode_name(), "cyan");
    }

    #[test]
    fn test_snapshot_survives_switch() {
        let ctx = context();
        let snapshot = ctx.current();

        ctx.set_mode("magenta").unwrap();
        assert_eq!(snapshot.name, "light");
        assert_eq!(snapshot.color("body"), Some("#000"));
        assert_eq!(ctx.current().name, "magenta");
    }

    #[test]
    fn test_unoverridden_roles_fall_back_to_base() {
        let ctx = context();
        ctx.set_mode("dark").unwrap();
        assert_eq!(ctx.resolve_color("accent").as_deref(), Some("#c0f"));
        assert_eq!(ctx.resolve_color("midgray").as_deref(), Some("#777"));
    }

    #[test]
    fn test_cycle_wraps() {
        let ctx = context();
        let names = ctx.mode_names();
        assert_eq!(names[0], "light");

        for expected in names.iter().skip(1) {
            assert_eq!(&ctx.cycle().unwrap().name, expected);
        }
        assert_eq!(ctx.cycle().unwrap().name, "light");
    }

    #[test]
    fn test_reset() {
        let ctx = context();
        ctx.set_mode("gray").unwrap();
        ctx.reset().unwrap();
        assert_eq!(ctx.mode_name(), "light");
    }

    #[test]
    fn test_concurrent_readers() {
        let ctx = Arc::new(context());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let ctx = Arc::clone(&ctx);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        if i == 0 {
                            ctx.cycle().unwrap();
                        }
                        let snapshot = ctx.current();
                        let expected = ctx.theme().palette(&snapshot.name).unwrap();
                        assert_eq!(snapshot.palette, expected);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
