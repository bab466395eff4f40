//! Resolved declarations and CSS text output

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One CSS declaration, property in camelCase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Property name (`fontSize`)
    pub property: String,
    /// CSS value (`16px`)
    pub value: String,
}

impl Declaration {
    /// Create a declaration
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// The declaration as CSS text (`font-size: 16px`)
    pub fn to_css(&self) -> String {
        format!("{}: {}", kebab_case(&self.property), self.value)
    }
}

/// A declaration scoped to a breakpoint and, for nested rules, a selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedDeclaration {
    /// Emission group (one per namespace); later groups win at every breakpoint
    #[serde(default)]
    pub segment: usize,
    /// Breakpoint index; 0 is unscoped
    pub breakpoint: usize,
    /// Nested selector template (`&:hover`), `None` for the element itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// The declaration
    pub declaration: Declaration,
}

/// The ordered output of resolving a primitive or style object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    declarations: Vec<ScopedDeclaration>,
    media: Vec<String>,
    #[serde(skip)]
    segment: usize,
}

impl ResolvedStyle {
    /// Create an empty style; `media[i]` is the query for breakpoint `i + 1`
    pub fn new(media: Vec<String>) -> Self {
        Self {
            declarations: Vec::new(),
            media,
            segment: 0,
        }
    }

    /// Start a new emission group
    ///
    /// Each group renders as its own base block followed by its media
    /// blocks, so a later group overrides an earlier one at every breakpoint.
    pub fn next_segment(&mut self) {
        if self.declarations.last().is_some_and(|d| d.segment == self.segment) {
            self.segment += 1;
        }
    }

    /// Append a declaration
    pub fn push(
        &mut self,
        breakpoint: usize,
        selector: Option<&str>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.declarations.push(ScopedDeclaration {
            segment: self.segment,
            breakpoint,
            selector: selector.map(str::to_string),
            declaration: Declaration::new(property, value),
        });
    }

    /// Every declaration in emission order
    pub fn declarations(&self) -> &[ScopedDeclaration] {
        &self.declarations
    }

    /// Number of breakpoints including the unscoped base
    pub fn breakpoint_count(&self) -> usize {
        self.media.len() + 1
    }

    /// Whether nothing was emitted
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Effective declarations of the element itself at a breakpoint
    pub fn at(&self, breakpoint: usize) -> Vec<Declaration> {
        self.cascade(None, breakpoint)
    }

    /// Effective declarations of a nested rule at a breakpoint
    pub fn nested_at(&self, selector: &str, breakpoint: usize) -> Vec<Declaration> {
        self.cascade(Some(selector), breakpoint)
    }

    /// Effective value of one property of the element at a breakpoint
    pub fn get(&self, property: &str, breakpoint: usize) -> Option<String> {
        self.at(breakpoint)
            .into_iter()
            .find(|d| d.property == property)
            .map(|d| d.value)
    }

    /// Nested selector templates in first-appearance order
    pub fn nested_selectors(&self) -> Vec<&str> {
        let mut selectors: Vec<&str> = Vec::new();
        for d in &self.declarations {
            if let Some(s) = d.selector.as_deref() {
                if !selectors.contains(&s) {
                    selectors.push(s);
                }
            }
        }
        selectors
    }

    fn segments(&self) -> Vec<usize> {
        let mut segments: Vec<usize> = self.declarations.iter().map(|d| d.segment).collect();
        segments.sort_unstable();
        segments.dedup();
        segments
    }

    // Within a group, media blocks follow the base block; groups follow each
    // other in emission order. Later declarations win.
    fn cascade(&self, selector: Option<&str>, breakpoint: usize) -> Vec<Declaration> {
        let mut effective: IndexMap<&str, &str> = IndexMap::new();
        for segment in self.segments() {
            for bp in 0..=breakpoint {
                for d in self.rule(segment, selector, bp) {
                    effective.insert(&d.declaration.property, &d.declaration.value);
                }
            }
        }
        effective
            .into_iter()
            .map(|(property, value)| Declaration::new(property, value))
            .collect()
    }

    fn rule<'a>(
        &'a self,
        segment: usize,
        selector: Option<&'a str>,
        breakpoint: usize,
    ) -> impl Iterator<Item = &'a ScopedDeclaration> + 'a {
        self.declarations.iter().filter(move |d| {
            d.segment == segment && d.breakpoint == breakpoint && d.selector.as_deref() == selector
        })
    }

    /// Render CSS text for `selector`
    ///
    /// Output order: for each emission group, its base block then its media
    /// blocks by ascending breakpoint; then each nested rule the same way.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::new();
        self.write_rule(&mut css, selector, None);
        for nested in self.nested_selectors() {
            let full = nested.replace('&', selector);
            self.write_rule(&mut css, &full, Some(nested));
        }
        css
    }

    fn write_rule(&self, css: &mut String, full_selector: &str, selector: Option<&str>) {
        for segment in self.segments() {
            self.write_segment(css, full_selector, segment, selector);
        }
    }

    fn write_segment(
        &self,
        css: &mut String,
        full_selector: &str,
        segment: usize,
        selector: Option<&str>,
    ) {
        for bp in 0..self.breakpoint_count() {
            let body: Vec<String> = self
                .rule(segment, selector, bp)
                .map(|d| d.declaration.to_css())
                .collect();
            if body.is_empty() {
                continue;
            }
            match bp.checked_sub(1).and_then(|i| self.media.get(i)) {
                None => write_block(css, full_selector, &body, ""),
                Some(query) => {
                    let _ = writeln!(css, "{} {{", query);
                    write_block(css, full_selector, &body, "  ");
                    let _ = writeln!(css, "}}");
                }
            }
        }
    }
}

fn write_block(css: &mut String, selector: &str, body: &[String], indent: &str) {
    let _ = writeln!(css, "{}{} {{", indent, selector);
    for line in body {
        let _ = writeln!(css, "{}  {};", indent, line);
    }
    let _ = writeln!(css, "{}}}", indent);
}

/// Convert a camelCase property to CSS kebab-case
///
/// Custom properties (`--x`) and names that are already kebab-case are
/// returned unchanged.
pub fn kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
