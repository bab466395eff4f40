//! Styled primitives and their prop contracts
//!
//! Every primitive has a tag, a closed ordered list of namespaces, default
//! props applied when the caller omits them, and fixed base styles.
//!
//! # Usage
//!
//! ```rust
//! use style_props::{Primitive, PropValue, Props};
//!
//! let contract = Primitive::Button.contract();
//! let merged = contract.merge(&Props::new().with("variant", "secondary"));
//! assert_eq!(merged.get("variant"), Some(&PropValue::from("secondary")));
//! assert!(contract.validate().is_ok());
//! ```

use crate::error::{PropsError, Result};
use crate::namespace::Namespace;
use crate::value::{PropValue, Props};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use theme::styles::style;
use theme::StyleObject;

// =============================================================================
// Primitive
// =============================================================================

/// The styled UI primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// Generic container (`div`)
    Box,
    /// Inline text (`span`)
    Text,
    /// Heading (`h1`)
    Heading,
    /// Flex container, a Box with flexbox props
    Flexbox,
    /// Button with theme variants
    Button,
}

const BOX_NAMESPACES: &[Namespace] = &[
    Namespace::Color,
    Namespace::Space,
    Namespace::Layout,
    Namespace::Position,
    Namespace::Border,
    Namespace::Shadow,
    Namespace::Typography,
];

const TEXT_NAMESPACES: &[Namespace] = &[
    Namespace::Color,
    Namespace::Space,
    Namespace::Typography,
    Namespace::TextTransform,
    Namespace::Border,
    Namespace::Shadow,
    Namespace::Layout,
];

const HEADING_NAMESPACES: &[Namespace] = &[
    Namespace::Color,
    Namespace::Space,
    Namespace::Typography,
    Namespace::TextTransform,
    Namespace::LineHeight,
    Namespace::Layout,
];

const FLEXBOX_NAMESPACES: &[Namespace] = &[
    Namespace::Color,
    Namespace::Space,
    Namespace::Layout,
    Namespace::Position,
    Namespace::Border,
    Namespace::Shadow,
    Namespace::Typography,
    Namespace::Flexbox,
];

const BUTTON_NAMESPACES: &[Namespace] = &[
    Namespace::Color,
    Namespace::Space,
    Namespace::Layout,
    Namespace::Position,
    Namespace::Border,
    Namespace::Typography,
    Namespace::Shadow,
    Namespace::Variant,
];

/// Variant scale used by the Button's `variant` prop
pub const BUTTON_VARIANT_SCALE: &str = "buttons";

impl Primitive {
    /// Every primitive
    pub const ALL: [Primitive; 5] = [
        Primitive::Box,
        Primitive::Text,
        Primitive::Heading,
        Primitive::Flexbox,
        Primitive::Button,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Box => "Box",
            Primitive::Text => "Text",
            Primitive::Heading => "Heading",
            Primitive::Flexbox => "Flexbox",
            Primitive::Button => "Button",
        }
    }

    /// HTML tag the primitive renders as
    pub fn tag(&self) -> &'static str {
        match self {
            Primitive::Box | Primitive::Flexbox => "div",
            Primitive::Text => "span",
            Primitive::Heading => "h1",
            Primitive::Button => "button",
        }
    }

    /// Namespaces in resolution order
    pub fn namespaces(&self) -> &'static [Namespace] {
        match self {
            Primitive::Box => BOX_NAMESPACES,
            Primitive::Text => TEXT_NAMESPACES,
            Primitive::Heading => HEADING_NAMESPACES,
            Primitive::Flexbox => FLEXBOX_NAMESPACES,
            Primitive::Button => BUTTON_NAMESPACES,
        }
    }

    /// Props applied when the caller omits them
    pub fn default_props(&self) -> Props {
        match self {
            Primitive::Box => Props::new()
                .with("fontSize", vec![2, 3, 3])
                .with("fontWeight", "body")
                .with("color", "body")
                .with("background", "background")
                .with("lineHeight", "body"),
            Primitive::Text => Props::new()
                .with("display", "inline-block")
                .with("fontSize", vec![2, 3, 3])
                .with("fontWeight", "body")
                .with("color", "body")
                .with("lineHeight", "body"),
            Primitive::Heading => Props::new()
                .with("display", "inline-block")
                .with("fontSize", vec![5, 5, 6])
                .with("fontWeight", "heading")
                .with("lineHeight", "heading")
                .with("color", "body"),
            Primitive::Flexbox => Primitive::Box.default_props().with("display", "flex"),
            Primitive::Button => Props::new()
                .with("variant", "primary")
                .with("border", 0)
                .with("borderRadius", 2)
                .with("p", vec![2, 3])
                .with("minWidth", "100px")
                .with("fontSize", vec![2, 3, 3]),
        }
    }

    /// Fixed style rules emitted after every namespace
    pub fn base_styles(&self) -> StyleObject {
        match self {
            Primitive::Button => style([("&:hover", style([("cursor", "pointer".into())]).into())]),
            _ => StyleObject::new(),
        }
    }

    /// Variant scale the `variant` prop looks up, if any
    pub fn variant_scale(&self) -> Option<&'static str> {
        match self {
            Primitive::Button => Some(BUTTON_VARIANT_SCALE),
            _ => None,
        }
    }

    /// The primitive's full contract
    pub fn contract(&self) -> PropContract {
        PropContract {
            primitive: *self,
            tag: self.tag(),
            namespaces: self.namespaces(),
            defaults: self.default_props(),
            base_styles: self.base_styles(),
            variant_scale: self.variant_scale(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Primitive {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self> {
        Primitive::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PropsError::UnknownPrimitive(s.to_string()))
    }
}

// =============================================================================
// Prop Contract
// =============================================================================

/// Tag, namespaces, defaults, and base styles of one primitive
#[derive(Debug, Clone, PartialEq)]
pub struct PropContract {
    /// The primitive this contract belongs to
    pub primitive: Primitive,
    /// HTML tag
    pub tag: &'static str,
    /// Namespaces in resolution order
    pub namespaces: &'static [Namespace],
    /// Default props
    pub defaults: Props,
    /// Fixed styles emitted last
    pub base_styles: StyleObject,
    /// Variant scale for the `variant` prop
    pub variant_scale: Option<&'static str>,
}

impl PropContract {
    /// Whether any namespace of the contract resolves `prop`
    pub fn supports(&self, prop: &str) -> bool {
        self.namespaces.iter().any(|ns| ns.accepts(prop))
    }

    /// Check that every default prop is resolvable
    pub fn validate(&self) -> Result<()> {
        match self.defaults.names().find(|name| !self.supports(name)) {
            Some(prop) => Err(PropsError::DefaultOutsideNamespaces {
                primitive: self.primitive.to_string(),
                prop: prop.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Merge caller props over the defaults, caller winning per key
    pub fn merge(&self, caller: &Props) -> Props {
        caller.over(&self.defaults)
    }

    /// The merged props the contract will not resolve
    pub fn unsupported<'a>(&self, props: &'a Props) -> Vec<(&'a str, &'a PropValue)> {
        props.iter().filter(|(name, _)| !self.supports(name)).collect()
    }
}

/// Validate the contract of every primitive
pub fn validate_contracts() -> Result<()> {
    for primitive in Primitive::ALL {
        primitive.contract().validate()?;
    }
    tracing::debug!(primitives = Primitive::ALL.len(), "Validated prop contracts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Contract Tests
    // ==========================================================================

    #[test]
    fn test_every_default_is_resolvable() {
        assert!(validate_contracts().is_ok());
        for primitive in Primitive::ALL {
            let contract = primitive.contract();
            for name in contract.defaults.names() {
                assert!(contract.supports(name), "{} default {} unsupported", primitive, name);
            }
        }
    }

    #[test]
    fn test_default_outside_namespaces_is_error() {
        let mut contract = Primitive::Heading.contract();
        contract.defaults.insert("boxShadow", "none");
        let err = contract.validate().unwrap_err();
        assert_eq!(
            err,
            PropsError::DefaultOutsideNamespaces {
                primitive: "Heading".to_string(),
                prop: "boxShadow".to_string()
            }
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(Primitive::Box.tag(), "div");
        assert_eq!(Primitive::Text.tag(), "span");
        assert_eq!(Primitive::Heading.tag(), "h1");
        assert_eq!(Primitive::Flexbox.tag(), "div");
        assert_eq!(Primitive::Button.tag(), "button");
    }

    #[test]
    fn test_namespace_order() {
        assert_eq!(Primitive::Heading.namespaces()[4], Namespace::LineHeight);
        assert_eq!(Primitive::Button.namespaces().last(), Some(&Namespace::Variant));
        assert_eq!(Primitive::Flexbox.namespaces().last(), Some(&Namespace::Flexbox));
        assert!(Primitive::Box.namespaces().contains(&Namespace::Shadow));
        assert!(Primitive::Button.namespaces().contains(&Namespace::Shadow));
    }

    #[test]
    fn test_flexbox_extends_box_defaults() {
        let defaults = Primitive::Flexbox.default_props();
        assert_eq!(defaults.get("display"), Some(&PropValue::from("flex")));
        assert_eq!(defaults.get("color"), Some(&PropValue::from("body")));
        assert_eq!(defaults.len(), Primitive::Box.default_props().len() + 1);
    }

    // ==========================================================================
    // Merge Tests
    // ==========================================================================

    #[test]
    fn test_button_variant_override() {
        let contract = Primitive::Button.contract();
        assert_eq!(contract.defaults.get("variant"), Some(&PropValue::from("primary")));

        let merged = contract.merge(&Props::new().with("variant", "secondary"));
        assert_eq!(merged.get("variant"), Some(&PropValue::from("secondary")));
        assert_eq!(merged.get("borderRadius"), Some(&PropValue::from(2)));
    }

    #[test]
    fn test_unsupported_props() {
        let contract = Primitive::Heading.contract();
        let props = Props::new().with("color", "primary").with("boxShadow", "none");
        let unsupported = contract.unsupported(&props);
        assert_eq!(unsupported.len(), 1);
        assert_eq!(unsupported[0].0, "boxShadow");
    }

    #[test]
    fn test_button_base_styles() {
        let base = Primitive::Button.base_styles();
        assert!(base.contains_key("&:hover"));
        assert!(Primitive::Box.base_styles().is_empty());
        assert_eq!(Primitive::Button.variant_scale(), Some("buttons"));
        assert_eq!(Primitive::Text.variant_scale(), None);
    }

    #[test]
    fn test_primitive_from_str() {
        assert_eq!("Button".parse::<Primitive>().unwrap(), Primitive::Button);
        assert_eq!("flexbox".parse::<Primitive>().unwrap(), Primitive::Flexbox);
        assert_eq!(
            "Card".parse::<Primitive>().unwrap_err(),
            PropsError::UnknownPrimitive("Card".to_string())
        );
    }
}
