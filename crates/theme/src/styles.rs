//! Element style rules
//!
//! Element styles map an element key (`h1`, `pre`, `table`, ...) to an
//! ordered set of declarations. A declaration value is a scalar, a responsive
//! array, or a nested rule for a pseudo-class or descendant selector.

use crate::colors::is_color_literal;
use crate::value::ScaleValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Style Values
// =============================================================================

/// A declaration value inside a style object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Single value for every breakpoint
    Value(ScaleValue),
    /// One value per breakpoint; `None` entries inherit the previous value
    Responsive(Vec<Option<ScaleValue>>),
    /// Nested rule (`&:hover`, `a`, `.comment`)
    Nested(StyleObject),
}

/// An ordered mapping of property (or nested selector) to value
pub type StyleObject = IndexMap<String, StyleValue>;

/// Element key to style object
pub type ElementStyles = IndexMap<String, StyleObject>;

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Value(value.into())
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Value(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Value(value.into())
    }
}

impl From<Vec<i32>> for StyleValue {
    fn from(values: Vec<i32>) -> Self {
        StyleValue::Responsive(values.into_iter().map(|v| Some(v.into())).collect())
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        StyleValue::Nested(value)
    }
}

/// Build a style object from `(key, value)` pairs, keeping their order
pub fn style<const N: usize>(entries: [(&str, StyleValue); N]) -> StyleObject {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

// =============================================================================
// Selectors
// =============================================================================

/// CSS selector for an element style key
///
/// `root` styles the document body and `inlineCode` targets code outside of
/// preformatted blocks; every other key is used as the selector itself.
pub fn element_selector(key: &str) -> String {
    match key {
        "root" => "body".to_string(),
        "inlineCode" => ":not(pre) > code".to_string(),
        other => other.to_string(),
    }
}

/// Combine a nested rule key with its parent selector template
///
/// Templates use `&` for the element the style is attached to. Keys that
/// contain `&` substitute the parent; other keys are descendant selectors.
pub fn nest_selector(parent: Option<&str>, key: &str) -> String {
    let parent = parent.unwrap_or("&");
    if key.contains('&') {
        key.replace('&', parent)
    } else {
        format!("{} {}", parent, key)
    }
}

// =============================================================================
// Color References
// =============================================================================

/// Properties whose values resolve against the color palette
pub const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "bg",
    "backgroundColor",
    "background",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "outlineColor",
    "fill",
    "stroke",
];

/// A color role referenced from a style object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorReference {
    /// Selector template of the rule holding the reference (`&` for the element)
    pub selector: String,
    /// Property name
    pub property: String,
    /// Referenced role name
    pub role: String,
}

/// Collect every color-role reference in a style object, including nested rules
pub fn color_references(object: &StyleObject) -> Vec<ColorReference> {
    let mut found = Vec::new();
    collect_color_references(object, None, &mut found);
    found
}

fn collect_color_references(
    object: &StyleObject,
    selector: Option<&str>,
    found: &mut Vec<ColorReference>,
) {
    for (key, value) in object {
        match value {
            StyleValue::Nested(inner) => {
                let child = nest_selector(selector, key);
                collect_color_references(inner, Some(&child), found);
            }
            StyleValue::Value(v) if COLOR_PROPERTIES.contains(&key.as_str()) => {
                push_role(key, v, selector, found);
            }
            StyleValue::Responsive(values) if COLOR_PROPERTIES.contains(&key.as_str()) => {
                for v in values.iter().flatten() {
                    push_role(key, v, selector, found);
                }
            }
            _ => {}
        }
    }
}

fn push_role(
    property: &str,
    value: &ScaleValue,
    selector: Option<&str>,
    found: &mut Vec<ColorReference>,
) {
    if let ScaleValue::Str(role) = value {
        if !is_color_literal(role) {
            found.push(ColorReference {
                selector: selector.unwrap_or("&").to_string(),
                property: property.to_string(),
                role: role.clone(),
            });
        }
    }
}

// =============================================================================
// Default Element Styles
// =============================================================================

fn heading(font_size: StyleValue) -> StyleObject {
    style([
        ("fontSize", font_size),
        ("lineHeight", "heading".into()),
        (
            "a",
            style([("color", "inherit".into()), ("textDecoration", "none".into())]).into(),
        ),
    ])
}

fn cell(vertical_align: &str, border_bottom_width: &str) -> StyleObject {
    style([
        ("textAlign", "left".into()),
        ("verticalAlign", vertical_align.into()),
        ("paddingTop", "4px".into()),
        ("paddingBottom", "4px".into()),
        ("paddingRight", "4px".into()),
        ("paddingLeft", 0.into()),
        ("borderColor", "inherit".into()),
        ("borderBottomWidth", border_bottom_width.into()),
        ("borderBottomStyle", "solid".into()),
    ])
}

/// The default element styles, with the flattened syntax rules nested under `pre`
pub fn default_element_styles(syntax_rules: &IndexMap<String, StyleObject>) -> ElementStyles {
    let mut pre = style([
        ("fontFamily", "monospace".into()),
        ("fontSize", 1.into()),
        ("p", 3.into()),
        ("my", 3.into()),
        ("bg", "lightgray".into()),
        ("overflowX", "auto".into()),
    ]);
    for (selector, declarations) in syntax_rules {
        pre.insert(selector.clone(), StyleValue::Nested(declarations.clone()));
    }

    let mut styles = ElementStyles::new();
    styles.insert(
        "root".to_string(),
        style([("fontFamily", "body".into()), ("lineHeight", "body".into())]),
    );
    styles.insert(
        "a".to_string(),
        style([
            ("color", "primary".into()),
            ("&:hover", style([("color", "secondary".into())]).into()),
        ]),
    );
    styles.insert("h1".to_string(), heading(vec![5, 6].into()));
    styles.insert("h2".to_string(), heading(vec![4, 5].into()));
    styles.insert("h3".to_string(), heading(3.into()));
    styles.insert("h4".to_string(), heading(2.into()));
    styles.insert("h5".to_string(), heading(1.into()));
    styles.insert("h6".to_string(), heading(0.into()));
    styles.insert("pre".to_string(), pre);
    styles.insert("code".to_string(), style([("fontFamily", "monospace".into())]));
    styles.insert(
        "inlineCode".to_string(),
        style([
            ("fontFamily", "monospace".into()),
            ("color", "secondary".into()),
            ("fontSize", "87.5%".into()),
        ]),
    );
    styles.insert(
        "ul".to_string(),
        style([("pl", 3.into()), ("ul", StyleValue::Nested(StyleObject::new()))]),
    );
    styles.insert(
        "table".to_string(),
        style([
            ("width", "100%".into()),
            ("my", 4.into()),
            ("borderCollapse", "separate".into()),
            ("borderSpacing", 0.into()),
        ]),
    );
    styles.insert("th".to_string(), cell("bottom", "2px"));
    styles.insert("td".to_string(), cell("top", "1px"));
    styles.insert(
        "hr".to_string(),
        style([
            ("border", 0.into()),
            ("borderBottom", "1px solid".into()),
            ("borderColor", "lightgray".into()),
        ]),
    );
    styles
}

/// Default button variants (the `buttons` scale)
pub fn default_button_variants() -> IndexMap<String, StyleObject> {
    let mut buttons = IndexMap::new();
    buttons.insert(
        "primary".to_string(),
        style([("color", "background".into()), ("bg", "primary".into())]),
    );
    buttons.insert(
        "secondary".to_string(),
        style([("color", "background".into()), ("bg", "secondary".into())]),
    );
    buttons
}
