//! Responsive value resolution
//!
//! Turns a prop value into one value per breakpoint, looks tokens up in
//! the theme, and applies the prop's unit transform.

use crate::namespace::{PropConfig, Transform, UNITLESS_PROPERTIES};
use crate::value::PropValue;
use theme::value::format_number;
use theme::{ColorPalette, ScaleKey, ScaleValue, Theme};

// =============================================================================
// Theme View
// =============================================================================

/// The theme as seen under one color mode
#[derive(Debug, Clone, Copy)]
pub struct ThemeView<'a> {
    /// Token table
    pub theme: &'a Theme,
    /// Effective palette of the active mode
    pub palette: &'a ColorPalette,
}

impl<'a> ThemeView<'a> {
    /// Create a view over a theme and an effective palette
    pub fn new(theme: &'a Theme, palette: &'a ColorPalette) -> Self {
        Self { theme, palette }
    }

    /// Look up a token in a scale; colors resolve against the palette
    pub fn lookup(&self, scale: ScaleKey, token: &ScaleValue) -> Option<ScaleValue> {
        match scale {
            ScaleKey::Colors => token
                .as_str()
                .and_then(|role| self.palette.get(role))
                .map(ScaleValue::from),
            other => self.theme.scale(other).and_then(|s| s.get(token)).cloned(),
        }
    }

    /// Number of breakpoints including the unscoped base
    pub fn breakpoint_count(&self) -> usize {
        self.theme.breakpoint_count()
    }
}

// =============================================================================
// Breakpoint Expansion
// =============================================================================

/// Expand a prop value to one entry per breakpoint
///
/// Breakpoint `i` takes the last non-null entry at an index no greater than
/// `i`; entries past `count` are ignored. A scalar fills every breakpoint.
pub fn expand(value: &PropValue, count: usize) -> Vec<Option<&ScaleValue>> {
    match value {
        PropValue::Scalar(v) => vec![Some(v); count],
        PropValue::Responsive(values) => {
            let mut current = None;
            (0..count)
                .map(|i| {
                    if let Some(Some(v)) = values.get(i) {
                        current = Some(v);
                    }
                    current
                })
                .collect()
        }
    }
}

/// The explicit entries of a prop value, with their breakpoint index
///
/// Null entries and entries past `count` are skipped.
pub fn explicit_entries(value: &PropValue, count: usize) -> Vec<(usize, &ScaleValue)> {
    match value {
        PropValue::Scalar(v) if count > 0 => vec![(0, v)],
        PropValue::Scalar(_) => Vec::new(),
        PropValue::Responsive(values) => values
            .iter()
            .take(count)
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (i, v)))
            .collect(),
    }
}

// =============================================================================
// Token Resolution
// =============================================================================

/// Resolve a token against a scale, passing misses through unchanged
pub fn resolve_token(scale: Option<ScaleKey>, token: &ScaleValue, view: &ThemeView<'_>) -> ScaleValue {
    let Some(key) = scale else {
        return token.clone();
    };
    match view.lookup(key, token) {
        Some(found) => found,
        None => {
            tracing::trace!(scale = %key, token = %token, "Token not in scale, using literal");
            token.clone()
        }
    }
}

/// Resolve a prop value to one scale value per breakpoint
pub fn resolve(
    value: &PropValue,
    count: usize,
    scale: Option<ScaleKey>,
    view: &ThemeView<'_>,
) -> Vec<Option<ScaleValue>> {
    expand(value, count)
        .into_iter()
        .map(|entry| entry.map(|token| resolve_token(scale, token, view)))
        .collect()
}

/// Resolve one token to a CSS value for `property`
pub fn resolve_value(config: &PropConfig, property: &str, token: &ScaleValue, view: &ThemeView<'_>) -> String {
    if config.transform == Transform::Space {
        if let Some(n) = token.as_number().filter(|n| *n < 0.0) {
            return negative_space(config.scale, n, view);
        }
    }
    let resolved = resolve_token(config.scale, token, view);
    apply_transform(config.transform, property, &resolved)
}

/// Resolve a prop value to CSS values, one per breakpoint
pub fn resolve_css(
    value: &PropValue,
    count: usize,
    config: &PropConfig,
    property: &str,
    view: &ThemeView<'_>,
) -> Vec<Option<String>> {
    expand(value, count)
        .into_iter()
        .map(|entry| entry.map(|token| resolve_value(config, property, token, view)))
        .collect()
}

fn negative_space(scale: Option<ScaleKey>, n: f64, view: &ThemeView<'_>) -> String {
    let positive = ScaleValue::Number(-n);
    match scale.and_then(|key| view.lookup(key, &positive)) {
        Some(ScaleValue::Number(found)) => px(-found),
        Some(ScaleValue::Str(found)) => format!("-{}", found),
        None => px(n),
    }
}

// =============================================================================
// Unit Transforms
// =============================================================================

/// Apply a unit transform to a resolved value
pub fn apply_transform(transform: Transform, property: &str, value: &ScaleValue) -> String {
    let n = match value {
        ScaleValue::Str(s) => return s.clone(),
        ScaleValue::Number(n) => *n,
    };
    match transform {
        Transform::Unitless => format_number(n),
        Transform::Px | Transform::Space => px(n),
        Transform::Size if n > 0.0 && n <= 1.0 => format!("{}%", format_number(n * 100.0)),
        Transform::Size => px(n),
        Transform::Auto if UNITLESS_PROPERTIES.contains(&property) => format_number(n),
        Transform::Auto => px(n),
    }
}

fn px(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", format_number(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{lookup_prop, Namespace};
    use theme::default_theme;

    fn sv(n: i32) -> ScaleValue {
        ScaleValue::from(n)
    }

    // ==========================================================================
    // Expansion Tests
    // ==========================================================================

    #[test]
    fn test_expand_trailing_value_inheritance() {
        let value = PropValue::from(vec![2, 3, 3]);
        let expanded = expand(&value, 4);
        assert_eq!(expanded, vec![Some(&sv(2)), Some(&sv(3)), Some(&sv(3)), Some(&sv(3))]);
    }

    #[test]
    fn test_expand_null_entries() {
        let value = PropValue::Responsive(vec![Some(sv(1)), None, Some(sv(4))]);
        let expanded = expand(&value, 4);
        assert_eq!(expanded, vec![Some(&sv(1)), Some(&sv(1)), Some(&sv(4)), Some(&sv(4))]);

        let leading = PropValue::Responsive(vec![None, Some(sv(2))]);
        assert_eq!(expand(&leading, 3), vec![None, Some(&sv(2)), Some(&sv(2))]);
    }

    #[test]
    fn test_expand_ignores_extra_entries() {
        let value = PropValue::from(vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(expand(&value, 4).len(), 4);
        assert_eq!(expand(&value, 4)[3], Some(&sv(4)));
    }

    #[test]
    fn test_expand_scalar() {
        let value = PropValue::from("body");
        assert_eq!(expand(&value, 4), vec![Some(&ScaleValue::from("body")); 4]);
    }

    #[test]
    fn test_explicit_entries() {
        let value = PropValue::Responsive(vec![Some(sv(2)), None, Some(sv(4)), Some(sv(5)), Some(sv(6))]);
        let entries = explicit_entries(&value, 4);
        assert_eq!(entries, vec![(0, &sv(2)), (2, &sv(4)), (3, &sv(5))]);
        assert_eq!(explicit_entries(&PropValue::from(3), 4), vec![(0, &sv(3))]);
    }

    // ==========================================================================
    // Resolution Tests
    // ==========================================================================

    #[test]
    fn test_resolve_font_sizes() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let view = ThemeView::new(&theme, &palette);

        let resolved = resolve(&PropValue::from(vec![2, 3, 3]), 4, Some(ScaleKey::FontSizes), &view);
        assert_eq!(resolved, vec![Some(sv(16)), Some(sv(18)), Some(sv(18)), Some(sv(18))]);

        let font_size = lookup_prop("fontSize").unwrap();
        let css = resolve_css(&PropValue::from(vec![2, 3, 3]), 4, font_size, "fontSize", &view);
        assert_eq!(
            css,
            vec![
                Some("16px".to_string()),
                Some("18px".to_string()),
                Some("18px".to_string()),
                Some("18px".to_string())
            ]
        );
    }

    #[test]
    fn test_resolve_colors_against_palette() {
        let theme = default_theme();
        let dark = theme.palette("dark").unwrap();
        let view = ThemeView::new(&theme, &dark);
        let color = lookup_prop("color").unwrap();

        assert_eq!(resolve_value(color, "color", &"body".into(), &view), "#fff");
        assert_eq!(resolve_value(color, "color", &"tomato".into(), &view), "tomato");
    }

    #[test]
    fn test_resolve_named_scales() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let view = ThemeView::new(&theme, &palette);

        let weight = Namespace::Typography.find("fontWeight").unwrap();
        assert_eq!(resolve_value(weight, "fontWeight", &"heading".into(), &view), "700");
        let lh = Namespace::Typography.find("lineHeight").unwrap();
        assert_eq!(resolve_value(lh, "lineHeight", &"body".into(), &view), "1.75");
        let family = Namespace::Typography.find("fontFamily").unwrap();
        assert_eq!(
            resolve_value(family, "fontFamily", &"monospace".into(), &view),
            "Menlo, monospace"
        );
    }

    #[test]
    fn test_literal_passthrough() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let view = ThemeView::new(&theme, &palette);
        let font_size = lookup_prop("fontSize").unwrap();

        assert_eq!(resolve_value(font_size, "fontSize", &"87.5%".into(), &view), "87.5%");
        assert_eq!(resolve_value(font_size, "fontSize", &sv(20), &view), "20px");
    }

    #[test]
    fn test_space_values() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let view = ThemeView::new(&theme, &palette);
        let m = lookup_prop("m").unwrap();
        let p = lookup_prop("p").unwrap();

        assert_eq!(resolve_value(m, "margin", &sv(0), &view), "0");
        assert_eq!(resolve_value(m, "margin", &sv(3), &view), "16px");
        assert_eq!(resolve_value(m, "margin", &sv(-2), &view), "-8px");
        assert_eq!(resolve_value(m, "margin", &sv(-20), &view), "-20px");
        assert_eq!(resolve_value(m, "margin", &"auto".into(), &view), "auto");
        assert_eq!(resolve_value(p, "padding", &sv(2), &view), "8px");
    }

    // ==========================================================================
    // Transform Tests
    // ==========================================================================

    #[test]
    fn test_transforms() {
        assert_eq!(apply_transform(Transform::Px, "height", &sv(0)), "0");
        assert_eq!(apply_transform(Transform::Px, "height", &sv(10)), "10px");
        assert_eq!(apply_transform(Transform::Size, "width", &ScaleValue::from(0.5)), "50%");
        assert_eq!(apply_transform(Transform::Size, "width", &sv(1)), "100%");
        assert_eq!(apply_transform(Transform::Size, "width", &sv(320)), "320px");
        assert_eq!(apply_transform(Transform::Unitless, "fontWeight", &sv(700)), "700");
        assert_eq!(apply_transform(Transform::Auto, "zIndex", &sv(2)), "2");
        assert_eq!(apply_transform(Transform::Auto, "paddingTop", &sv(4)), "4px");
        assert_eq!(apply_transform(Transform::Auto, "paddingTop", &"4px".into()), "4px");
    }

    #[test]
    fn test_resolution_does_not_touch_theme() {
        let theme = default_theme();
        let before = theme.clone();
        let palette = theme.palette("light").unwrap();
        let view = ThemeView::new(&theme, &palette);
        let font_size = lookup_prop("fontSize").unwrap();

        let first = resolve_css(&PropValue::from(vec![2, 3, 3]), 4, font_size, "fontSize", &view);
        let second = resolve_css(&PropValue::from(vec![2, 3, 3]), 4, font_size, "fontSize", &view);
        assert_eq!(first, second);
        assert_eq!(theme, before);
    }
}
