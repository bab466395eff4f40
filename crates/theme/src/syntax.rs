//! Syntax-highlighting sub-theme
//!
//! Token classes emitted by the code highlighter share declaration blocks in
//! groups. Groups are flattened once into one rule per selector before they
//! are attached to the `pre` element style.

use crate::styles::{style, StyleObject};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Several class selectors sharing one declaration block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxGroup {
    /// Class selectors (e.g. `.comment`)
    pub selectors: Vec<String>,
    /// Declarations applied to every selector
    pub declarations: StyleObject,
}

impl SyntaxGroup {
    /// Create a group from selectors and declarations
    pub fn new(selectors: &[&str], declarations: StyleObject) -> Self {
        Self {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            declarations,
        }
    }
}

/// Expand grouped rules into one rule per selector
///
/// A selector listed in several groups keeps the position of its first
/// appearance and takes the declarations of its last group.
pub fn flatten(groups: &[SyntaxGroup]) -> IndexMap<String, StyleObject> {
    let mut rules = IndexMap::new();
    for group in groups {
        for selector in &group.selectors {
            rules.insert(selector.clone(), group.declarations.clone());
        }
    }
    rules
}

fn color(role: &str) -> StyleObject {
    style([("color", role.into())])
}

/// Token colors for highlighted code blocks
pub fn prism_groups() -> Vec<SyntaxGroup> {
    vec![
        SyntaxGroup::new(&[".comment", ".prolog", ".doctype", ".cdata"], color("midgray")),
        SyntaxGroup::new(&[".punctuation"], color("midgray")),
        SyntaxGroup::new(
            &[".property", ".tag", ".constant", ".symbol", ".deleted"],
            color("primary"),
        ),
        SyntaxGroup::new(&[".boolean", ".number"], color("secondary")),
        SyntaxGroup::new(
            &[".selector", ".attr-name", ".string", ".char", ".builtin", ".inserted"],
            color("accent"),
        ),
        SyntaxGroup::new(
            &[".operator", ".entity", ".url", ".string", ".variable"],
            color("accent"),
        ),
        SyntaxGroup::new(&[".atrule", ".attr-value", ".function"], color("primary")),
        SyntaxGroup::new(&[".keyword"], color("primary")),
        SyntaxGroup::new(&[".regex"], StyleObject::new()),
        SyntaxGroup::new(&[".important"], StyleObject::new()),
    ]
}
