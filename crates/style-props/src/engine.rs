//! Primitive and style-object resolution
//!
//! The resolver walks a primitive's namespaces in order and emits
//! breakpoint-scoped declarations. Element styles and variant bundles go
//! through the same path as raw style objects.

use crate::css::ResolvedStyle;
use crate::namespace::{lookup_prop, Namespace, PropConfig, Transform};
use crate::primitives::{PropContract, Primitive};
use crate::responsive::{explicit_entries, resolve_value, ThemeView};
use crate::value::{PropValue, Props};
use theme::styles::{element_selector, nest_selector};
use theme::{ColorPalette, StyleObject, StyleValue, Theme};

const RAW_PROPERTY: PropConfig = PropConfig {
    prop: "",
    properties: &[],
    scale: None,
    transform: Transform::Auto,
};

/// Resolves props and style objects against a theme under one palette
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    view: ThemeView<'a>,
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver over a theme and the active mode's palette
    pub fn new(theme: &'a Theme, palette: &'a ColorPalette) -> Self {
        Self {
            view: ThemeView::new(theme, palette),
        }
    }

    /// The theme view
    pub fn view(&self) -> &ThemeView<'a> {
        &self.view
    }

    fn empty(&self) -> ResolvedStyle {
        let theme = self.view.theme;
        let media = (1..theme.breakpoint_count())
            .filter_map(|i| theme.media_query(i))
            .collect();
        ResolvedStyle::new(media)
    }

    /// Resolve caller props for a primitive
    pub fn resolve_primitive(&self, primitive: Primitive, props: &Props) -> ResolvedStyle {
        self.resolve_contract(&primitive.contract(), props)
    }

    /// Resolve caller props against an explicit contract
    ///
    /// Props are merged over the defaults, then each namespace emits its
    /// props in table order. Base styles come last.
    pub fn resolve_contract(&self, contract: &PropContract, props: &Props) -> ResolvedStyle {
        let merged = contract.merge(props);
        let mut out = self.empty();
        let mut done: Vec<&str> = Vec::new();

        for namespace in contract.namespaces {
            out.next_segment();
            if *namespace == Namespace::Variant {
                if let Some(value) = merged.get("variant") {
                    self.emit_variant(contract, value, &mut out);
                }
                continue;
            }
            for config in namespace.props() {
                if done.contains(&config.prop) {
                    continue;
                }
                if let Some(value) = merged.get(config.prop) {
                    self.emit(config, value, None, &mut out);
                    done.push(config.prop);
                }
            }
        }

        for (name, _) in contract.unsupported(&merged) {
            tracing::trace!(primitive = %contract.primitive, prop = name, "Prop not in any namespace");
        }

        out.next_segment();
        self.emit_object(&contract.base_styles, None, &mut out);
        out
    }

    fn emit_variant(&self, contract: &PropContract, value: &PropValue, out: &mut ResolvedStyle) {
        let Some(scale) = contract.variant_scale else {
            return;
        };
        let Some(name) = value.first().and_then(|v| v.as_str()) else {
            return;
        };
        match self.view.theme.variant(scale, name) {
            Some(object) => self.emit_object(object, None, out),
            None => tracing::trace!(scale, variant = name, "Variant not in scale"),
        }
    }

    fn emit(&self, config: &PropConfig, value: &PropValue, selector: Option<&str>, out: &mut ResolvedStyle) {
        let count = out.breakpoint_count();
        for (breakpoint, token) in explicit_entries(value, count) {
            for property in config.properties {
                let css = resolve_value(config, property, token, &self.view);
                out.push(breakpoint, selector, *property, css);
            }
        }
    }

    // Properties outside every namespace keep their name and guess their unit.
    fn emit_raw(&self, property: &str, value: &PropValue, selector: Option<&str>, out: &mut ResolvedStyle) {
        let count = out.breakpoint_count();
        for (breakpoint, token) in explicit_entries(value, count) {
            let css = resolve_value(&RAW_PROPERTY, property, token, &self.view);
            out.push(breakpoint, selector, property, css);
        }
    }

    /// Resolve a style object such as an element style or a variant bundle
    pub fn resolve_style_object(&self, object: &StyleObject) -> ResolvedStyle {
        let mut out = self.empty();
        self.emit_object(object, None, &mut out);
        out
    }

    fn emit_object(&self, object: &StyleObject, selector: Option<&str>, out: &mut ResolvedStyle) {
        for (key, value) in object {
            match value {
                StyleValue::Nested(inner) => {
                    let nested = nest_selector(selector, key);
                    self.emit_object(inner, Some(&nested), out);
                }
                other => {
                    let Some(prop_value) = PropValue::from_style(other) else {
                        continue;
                    };
                    match lookup_prop(key) {
                        Some(config) => self.emit(config, &prop_value, selector, out),
                        None => self.emit_raw(key, &prop_value, selector, out),
                    }
                }
            }
        }
    }

    /// Render every element style as CSS text
    pub fn render_element_styles(&self) -> String {
        self.view
            .theme
            .styles
            .iter()
            .map(|(key, object)| self.resolve_style_object(object).to_css(&element_selector(key)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Declaration;
    use theme::{default_theme, ScaleValue, ThemeBuilder};

    fn decl(property: &str, value: &str) -> Declaration {
        Declaration::new(property, value)
    }

    // ==========================================================================
    // Primitive Tests
    // ==========================================================================

    #[test]
    fn test_box_defaults() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let style = resolver.resolve_primitive(Primitive::Box, &Props::new());
        assert_eq!(
            style.at(0),
            vec![
                decl("color", "#000"),
                decl("background", "#fff"),
                decl("fontSize", "16px"),
                decl("fontWeight", "400"),
                decl("lineHeight", "1.75"),
            ]
        );
        assert_eq!(style.get("fontSize", 1).as_deref(), Some("18px"));
        assert_eq!(style.get("fontSize", 3).as_deref(), Some("18px"));
    }

    #[test]
    fn test_heading_defaults() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let style = resolver.resolve_primitive(Primitive::Heading, &Props::new());
        assert_eq!(style.get("fontSize", 0).as_deref(), Some("32px"));
        assert_eq!(style.get("fontSize", 2).as_deref(), Some("48px"));
        assert_eq!(style.get("fontWeight", 0).as_deref(), Some("700"));
        assert_eq!(style.get("lineHeight", 0).as_deref(), Some("1.25"));
        assert_eq!(style.get("display", 0).as_deref(), Some("inline-block"));
        let line_heights = style
            .declarations()
            .iter()
            .filter(|d| d.declaration.property == "lineHeight")
            .count();
        assert_eq!(line_heights, 1);
    }

    #[test]
    fn test_button_variants() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let primary = resolver.resolve_primitive(Primitive::Button, &Props::new());
        assert_eq!(primary.get("backgroundColor", 0).as_deref(), Some("#00f"));
        assert_eq!(primary.get("color", 0).as_deref(), Some("#fff"));
        assert_eq!(primary.get("border", 0).as_deref(), Some("0"));
        assert_eq!(primary.get("borderRadius", 0).as_deref(), Some("2px"));
        assert_eq!(primary.get("padding", 0).as_deref(), Some("8px"));
        assert_eq!(primary.get("padding", 1).as_deref(), Some("16px"));
        assert_eq!(primary.get("minWidth", 0).as_deref(), Some("100px"));
        assert_eq!(primary.nested_at("&:hover", 0), vec![decl("cursor", "pointer")]);

        let secondary =
            resolver.resolve_primitive(Primitive::Button, &Props::new().with("variant", "secondary"));
        assert_eq!(secondary.get("backgroundColor", 0).as_deref(), Some("#00a"));
    }

    #[test]
    fn test_variant_overrides_responsive_color() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let style = resolver.resolve_primitive(
            Primitive::Button,
            &Props::new().with("color", vec!["primary", "accent"]),
        );
        for bp in 0..4 {
            assert_eq!(style.get("color", bp).as_deref(), Some("#fff"), "breakpoint {}", bp);
        }

        let css = style.to_css(".btn");
        let responsive = css.find("color: #c0f;").unwrap();
        let variant = css.rfind("color: #fff;").unwrap();
        assert!(responsive < variant);
    }

    #[test]
    fn test_unknown_variant_emits_nothing() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let style = resolver.resolve_primitive(Primitive::Button, &Props::new().with("variant", "ghost"));
        assert_eq!(style.get("backgroundColor", 0), None);
        assert_eq!(style.get("minWidth", 0).as_deref(), Some("100px"));
    }

    #[test]
    fn test_caller_props_and_order() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let props = Props::new()
            .with("mx", -1)
            .with("color", "primary")
            .with("width", vec![Some(ScaleValue::from(1)), Some(ScaleValue::from(0.5))]);
        let style = resolver.resolve_primitive(Primitive::Box, &props);

        assert_eq!(style.declarations()[0].declaration, decl("color", "#00f"));
        assert_eq!(style.get("marginLeft", 0).as_deref(), Some("-4px"));
        assert_eq!(style.get("marginRight", 0).as_deref(), Some("-4px"));
        assert_eq!(style.get("width", 0).as_deref(), Some("100%"));
        assert_eq!(style.get("width", 1).as_deref(), Some("50%"));
    }

    #[test]
    fn test_unsupported_prop_ignored() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let style =
            resolver.resolve_primitive(Primitive::Heading, &Props::new().with("boxShadow", "none"));
        assert_eq!(style.get("boxShadow", 0), None);
    }

    #[test]
    fn test_flexbox() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let style = resolver.resolve_primitive(
            Primitive::Flexbox,
            &Props::new().with("justifyContent", "space-between").with("flexGrow", 1),
        );
        assert_eq!(style.get("display", 0).as_deref(), Some("flex"));
        assert_eq!(style.get("justifyContent", 0).as_deref(), Some("space-between"));
        assert_eq!(style.get("flexGrow", 0).as_deref(), Some("1"));
    }

    #[test]
    fn test_palette_changes_output() {
        let theme = default_theme();
        let dark = theme.palette("dark").unwrap();
        let resolver = StyleResolver::new(&theme, &dark);

        let style = resolver.resolve_primitive(Primitive::Text, &Props::new());
        assert_eq!(style.get("color", 0).as_deref(), Some("#fff"));
    }

    // ==========================================================================
    // Style Object Tests
    // ==========================================================================

    #[test]
    fn test_element_style_resolution() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let h1 = resolver.resolve_style_object(&theme.styles["h1"]);
        assert_eq!(h1.get("fontSize", 0).as_deref(), Some("32px"));
        assert_eq!(h1.get("fontSize", 1).as_deref(), Some("48px"));
        assert_eq!(h1.get("lineHeight", 0).as_deref(), Some("1.25"));
        assert_eq!(
            h1.nested_at("& a", 0),
            vec![decl("color", "inherit"), decl("textDecoration", "none")]
        );
    }

    #[test]
    fn test_pre_syntax_rules() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let pre = resolver.resolve_style_object(&theme.styles["pre"]);
        assert_eq!(pre.nested_at("& .comment", 0), vec![decl("color", "#777")]);
        assert_eq!(pre.nested_at("& .prolog", 0), vec![decl("color", "#777")]);
        let css = pre.to_css("pre");
        assert!(css.contains("pre .comment {"));
    }

    #[test]
    fn test_raw_property_units() {
        let theme = default_theme();
        let palette = theme.palette("light").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let object = theme::styles::style([
            ("outlineWidth", 2.into()),
            ("zIndex", 3.into()),
            ("textDecoration", "underline".into()),
        ]);
        let style = resolver.resolve_style_object(&object);
        assert_eq!(style.get("outlineWidth", 0).as_deref(), Some("2px"));
        assert_eq!(style.get("zIndex", 0).as_deref(), Some("3"));
        assert_eq!(style.get("textDecoration", 0).as_deref(), Some("underline"));
    }

    #[test]
    fn test_render_element_styles() {
        let theme = ThemeBuilder::new().build().unwrap();
        let palette = theme.palette("cyan").unwrap();
        let resolver = StyleResolver::new(&theme, &palette);

        let css = resolver.render_element_styles();
        assert!(css.starts_with("body {"));
        assert!(css.contains(":not(pre) > code {"));
        assert!(css.contains("@media screen and (min-width: 40em) {"));
        assert!(css.contains("pre .comment {"));
        assert!(!css.contains("undefined"));
    }
}
