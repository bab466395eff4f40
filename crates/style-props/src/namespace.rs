//! Style prop namespaces
//!
//! Each namespace is a fixed, ordered table of props. A prop maps to one or
//! more CSS properties, optionally resolves against a theme scale, and
//! carries the unit transform applied to numeric values.

use serde::{Deserialize, Serialize};
use theme::ScaleKey;

// =============================================================================
// Prop Configuration
// =============================================================================

/// How numeric values are turned into CSS values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Numbers are emitted bare (`fontWeight: 700`)
    Unitless,
    /// Numbers get `px`, zero stays `0`
    Px,
    /// Like `Px`, and negative numbers negate the scale value (margins)
    Space,
    /// Numbers in `(0, 1]` become percentages, others get `px` (width)
    Size,
    /// `Px` unless the property is unitless in CSS
    Auto,
}

/// CSS properties that take bare numbers
pub const UNITLESS_PROPERTIES: &[&str] = &[
    "lineHeight",
    "fontWeight",
    "opacity",
    "zIndex",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
];

/// One style prop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropConfig {
    /// Prop name as written by callers (`bg`, `mx`, `fontSize`)
    pub prop: &'static str,
    /// CSS properties it sets, camelCase
    pub properties: &'static [&'static str],
    /// Scale its tokens resolve against
    pub scale: Option<ScaleKey>,
    /// Numeric unit transform
    pub transform: Transform,
}

const fn prop(
    prop: &'static str,
    properties: &'static [&'static str],
    scale: Option<ScaleKey>,
    transform: Transform,
) -> PropConfig {
    PropConfig {
        prop,
        properties,
        scale,
        transform,
    }
}

use ScaleKey::{
    Borders, Colors, FontSizes, FontWeights, Fonts, LetterSpacings, LineHeights, Radii, Shadows,
    Sizes, Space, ZIndices,
};
use Transform::{Px, Size, Space as Spacing, Unitless};

// =============================================================================
// Namespace Tables
// =============================================================================

const COLOR_PROPS: &[PropConfig] = &[
    prop("color", &["color"], Some(Colors), Unitless),
    prop("bg", &["backgroundColor"], Some(Colors), Unitless),
    prop("backgroundColor", &["backgroundColor"], Some(Colors), Unitless),
    prop("background", &["background"], Some(Colors), Unitless),
    prop("opacity", &["opacity"], None, Unitless),
];

const SPACE_PROPS: &[PropConfig] = &[
    prop("m", &["margin"], Some(Space), Spacing),
    prop("margin", &["margin"], Some(Space), Spacing),
    prop("mt", &["marginTop"], Some(Space), Spacing),
    prop("marginTop", &["marginTop"], Some(Space), Spacing),
    prop("mr", &["marginRight"], Some(Space), Spacing),
    prop("marginRight", &["marginRight"], Some(Space), Spacing),
    prop("mb", &["marginBottom"], Some(Space), Spacing),
    prop("marginBottom", &["marginBottom"], Some(Space), Spacing),
    prop("ml", &["marginLeft"], Some(Space), Spacing),
    prop("marginLeft", &["marginLeft"], Some(Space), Spacing),
    prop("mx", &["marginLeft", "marginRight"], Some(Space), Spacing),
    prop("marginX", &["marginLeft", "marginRight"], Some(Space), Spacing),
    prop("my", &["marginTop", "marginBottom"], Some(Space), Spacing),
    prop("marginY", &["marginTop", "marginBottom"], Some(Space), Spacing),
    prop("p", &["padding"], Some(Space), Px),
    prop("padding", &["padding"], Some(Space), Px),
    prop("pt", &["paddingTop"], Some(Space), Px),
    prop("paddingTop", &["paddingTop"], Some(Space), Px),
    prop("pr", &["paddingRight"], Some(Space), Px),
    prop("paddingRight", &["paddingRight"], Some(Space), Px),
    prop("pb", &["paddingBottom"], Some(Space), Px),
    prop("paddingBottom", &["paddingBottom"], Some(Space), Px),
    prop("pl", &["paddingLeft"], Some(Space), Px),
    prop("paddingLeft", &["paddingLeft"], Some(Space), Px),
    prop("px", &["paddingLeft", "paddingRight"], Some(Space), Px),
    prop("paddingX", &["paddingLeft", "paddingRight"], Some(Space), Px),
    prop("py", &["paddingTop", "paddingBottom"], Some(Space), Px),
    prop("paddingY", &["paddingTop", "paddingBottom"], Some(Space), Px),
];

const LAYOUT_PROPS: &[PropConfig] = &[
    prop("width", &["width"], Some(Sizes), Size),
    prop("height", &["height"], Some(Sizes), Px),
    prop("minWidth", &["minWidth"], Some(Sizes), Px),
    prop("minHeight", &["minHeight"], Some(Sizes), Px),
    prop("maxWidth", &["maxWidth"], Some(Sizes), Px),
    prop("maxHeight", &["maxHeight"], Some(Sizes), Px),
    prop("size", &["width", "height"], Some(Sizes), Px),
    prop("overflow", &["overflow"], None, Unitless),
    prop("overflowX", &["overflowX"], None, Unitless),
    prop("overflowY", &["overflowY"], None, Unitless),
    prop("display", &["display"], None, Unitless),
    prop("verticalAlign", &["verticalAlign"], None, Unitless),
];

const POSITION_PROPS: &[PropConfig] = &[
    prop("position", &["position"], None, Unitless),
    prop("zIndex", &["zIndex"], Some(ZIndices), Unitless),
    prop("top", &["top"], Some(Space), Px),
    prop("right", &["right"], Some(Space), Px),
    prop("bottom", &["bottom"], Some(Space), Px),
    prop("left", &["left"], Some(Space), Px),
];

const BORDER_PROPS: &[PropConfig] = &[
    prop("border", &["border"], Some(Borders), Px),
    prop("borderWidth", &["borderWidth"], None, Px),
    prop("borderStyle", &["borderStyle"], None, Unitless),
    prop("borderColor", &["borderColor"], Some(Colors), Unitless),
    prop("borderRadius", &["borderRadius"], Some(Radii), Px),
    prop("borderTop", &["borderTop"], Some(Borders), Px),
    prop("borderRight", &["borderRight"], Some(Borders), Px),
    prop("borderBottom", &["borderBottom"], Some(Borders), Px),
    prop("borderLeft", &["borderLeft"], Some(Borders), Px),
    prop("borderX", &["borderLeft", "borderRight"], Some(Borders), Px),
    prop("borderY", &["borderTop", "borderBottom"], Some(Borders), Px),
    prop("borderTopWidth", &["borderTopWidth"], None, Px),
    prop("borderRightWidth", &["borderRightWidth"], None, Px),
    prop("borderBottomWidth", &["borderBottomWidth"], None, Px),
    prop("borderLeftWidth", &["borderLeftWidth"], None, Px),
    prop("borderTopStyle", &["borderTopStyle"], None, Unitless),
    prop("borderRightStyle", &["borderRightStyle"], None, Unitless),
    prop("borderBottomStyle", &["borderBottomStyle"], None, Unitless),
    prop("borderLeftStyle", &["borderLeftStyle"], None, Unitless),
    prop("borderTopColor", &["borderTopColor"], Some(Colors), Unitless),
    prop("borderRightColor", &["borderRightColor"], Some(Colors), Unitless),
    prop("borderBottomColor", &["borderBottomColor"], Some(Colors), Unitless),
    prop("borderLeftColor", &["borderLeftColor"], Some(Colors), Unitless),
];

const SHADOW_PROPS: &[PropConfig] = &[
    prop("boxShadow", &["boxShadow"], Some(Shadows), Unitless),
    prop("textShadow", &["textShadow"], Some(Shadows), Unitless),
];

const TYPOGRAPHY_PROPS: &[PropConfig] = &[
    prop("fontFamily", &["fontFamily"], Some(Fonts), Unitless),
    prop("fontSize", &["fontSize"], Some(FontSizes), Px),
    prop("fontWeight", &["fontWeight"], Some(FontWeights), Unitless),
    prop("lineHeight", &["lineHeight"], Some(LineHeights), Unitless),
    prop("letterSpacing", &["letterSpacing"], Some(LetterSpacings), Px),
    prop("textAlign", &["textAlign"], None, Unitless),
    prop("fontStyle", &["fontStyle"], None, Unitless),
];

const TEXT_TRANSFORM_PROPS: &[PropConfig] =
    &[prop("textTransform", &["textTransform"], None, Unitless)];

const LINE_HEIGHT_PROPS: &[PropConfig] =
    &[prop("lineHeight", &["lineHeight"], Some(LineHeights), Unitless)];

const FLEXBOX_PROPS: &[PropConfig] = &[
    prop("alignItems", &["alignItems"], None, Unitless),
    prop("alignContent", &["alignContent"], None, Unitless),
    prop("justifyItems", &["justifyItems"], None, Unitless),
    prop("justifyContent", &["justifyContent"], None, Unitless),
    prop("flexWrap", &["flexWrap"], None, Unitless),
    prop("flexDirection", &["flexDirection"], None, Unitless),
    prop("flex", &["flex"], None, Unitless),
    prop("flexGrow", &["flexGrow"], None, Unitless),
    prop("flexShrink", &["flexShrink"], None, Unitless),
    prop("flexBasis", &["flexBasis"], None, Px),
    prop("justifySelf", &["justifySelf"], None, Unitless),
    prop("alignSelf", &["alignSelf"], None, Unitless),
    prop("order", &["order"], None, Unitless),
];

// =============================================================================
// Namespace
// =============================================================================

/// A named group of style props resolved together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Namespace {
    /// Text, background, and opacity
    Color,
    /// Margin and padding
    Space,
    /// Size, overflow, and display
    Layout,
    /// Positioning and offsets
    Position,
    /// Borders and radii
    Border,
    /// Box and text shadows
    Shadow,
    /// Font family, size, weight, line height, and alignment
    Typography,
    /// The `textTransform` prop
    TextTransform,
    /// The `lineHeight` prop on its own
    LineHeight,
    /// Flex container and item props
    Flexbox,
    /// The `variant` prop, resolved against a variant scale
    Variant,
}

impl Namespace {
    /// Every namespace, in the order used for unqualified prop lookup
    pub const ALL: [Namespace; 11] = [
        Namespace::Color,
        Namespace::Space,
        Namespace::Layout,
        Namespace::Position,
        Namespace::Border,
        Namespace::Shadow,
        Namespace::Typography,
        Namespace::TextTransform,
        Namespace::LineHeight,
        Namespace::Flexbox,
        Namespace::Variant,
    ];

    /// The namespace's prop table, in resolution order
    ///
    /// `Variant` has no table; its single prop is handled by the resolver.
    pub fn props(&self) -> &'static [PropConfig] {
        match self {
            Namespace::Color => COLOR_PROPS,
            Namespace::Space => SPACE_PROPS,
            Namespace::Layout => LAYOUT_PROPS,
            Namespace::Position => POSITION_PROPS,
            Namespace::Border => BORDER_PROPS,
            Namespace::Shadow => SHADOW_PROPS,
            Namespace::Typography => TYPOGRAPHY_PROPS,
            Namespace::TextTransform => TEXT_TRANSFORM_PROPS,
            Namespace::LineHeight => LINE_HEIGHT_PROPS,
            Namespace::Flexbox => FLEXBOX_PROPS,
            Namespace::Variant => &[],
        }
    }

    /// Whether this namespace resolves `prop`
    pub fn accepts(&self, prop: &str) -> bool {
        match self {
            Namespace::Variant => prop == "variant",
            _ => self.find(prop).is_some(),
        }
    }

    /// Find a prop in this namespace
    pub fn find(&self, prop: &str) -> Option<&'static PropConfig> {
        self.props().iter().find(|config| config.prop == prop)
    }

    /// Namespace name as written in prop-type tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Color => "color",
            Namespace::Space => "space",
            Namespace::Layout => "layout",
            Namespace::Position => "position",
            Namespace::Border => "border",
            Namespace::Shadow => "shadow",
            Namespace::Typography => "typography",
            Namespace::TextTransform => "textTransform",
            Namespace::LineHeight => "lineHeight",
            Namespace::Flexbox => "flexbox",
            Namespace::Variant => "variant",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Find a prop in any namespace
pub fn lookup_prop(prop: &str) -> Option<&'static PropConfig> {
    Namespace::ALL.iter().find_map(|ns| ns.find(prop))
}
