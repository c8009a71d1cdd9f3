//! Compound selectors.
//!
//! Supports one compound selector, no combinators:
//!
//! ```text
//! a[href^="#"]          tag + attribute prefix
//! [data-landing-form]   attribute presence
//! #features             id
//! nav.menu.open         tag + classes
//! ```

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

use super::DomError;
use super::node::{NodeId, Page};

/// Attribute value operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOp {
    /// `[a=v]`
    Equals,
    /// `[a^=v]`
    Prefix,
    /// `[a$=v]`
    Suffix,
    /// `[a*=v]`
    Contains,
    /// `[a~=v]` whitespace-separated word
    Word,
}

impl AttrOp {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "=" => Some(Self::Equals),
            "^=" => Some(Self::Prefix),
            "$=" => Some(Self::Suffix),
            "*=" => Some(Self::Contains),
            "~=" => Some(Self::Word),
            _ => None,
        }
    }

    fn matches(self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Equals => actual == expected,
            Self::Prefix => !expected.is_empty() && actual.starts_with(expected),
            Self::Suffix => !expected.is_empty() && actual.ends_with(expected),
            Self::Contains => !expected.is_empty() && actual.contains(expected),
            Self::Word => actual.split_ascii_whitespace().any(|w| w == expected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrSelector {
    name: String,
    test: Option<(AttrOp, String)>,
}

/// A compound selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrSelector>,
}

impl Selector {
    /// Match elements with the given tag.
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_ascii_lowercase()),
            ..Self::default()
        }
    }

    /// Match elements carrying attribute `name`.
    pub fn has_attr(name: &str) -> Self {
        Self::default().with_attr(name)
    }

    /// Add an attribute presence test.
    pub fn with_attr(mut self, name: &str) -> Self {
        self.attrs.push(AttrSelector {
            name: name.to_ascii_lowercase(),
            test: None,
        });
        self
    }

    /// Add an attribute value test.
    pub fn with_attr_value(mut self, name: &str, op: AttrOp, value: &str) -> Self {
        self.attrs.push(AttrSelector {
            name: name.to_ascii_lowercase(),
            test: Some((op, value.to_string())),
        });
        self
    }

    /// Whether `node` is an element matching every part of the selector.
    pub fn matches(&self, page: &Page, node: NodeId) -> bool {
        let Some(tag) = page.tag(node) else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|t| t != tag) {
            return false;
        }
        if let Some(id) = &self.id
            && page.attr(node, "id") != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|c| page.has_class(node, c)) {
            return false;
        }
        self.attrs.iter().all(|attr| match (page.attr(node, &attr.name), &attr.test) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(actual), Some((op, expected))) => op.matches(actual, expected),
        })
    }
}

/// One simple selector at the start of the remaining input.
static RE_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?:(?P<tag>[A-Za-z][A-Za-z0-9-]*)"#,
        r#"|#(?P<id>[A-Za-z0-9_-]+)"#,
        r#"|\.(?P<class>[A-Za-z0-9_-]+)"#,
        r#"|\[[ \t]*(?P<attr>[A-Za-z_:][A-Za-z0-9_:.-]*)[ \t]*"#,
        r#"(?:(?P<op>[\^$*~]?=)[ \t]*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\] \t"']+))[ \t]*)?\])"#,
    ))
    .unwrap()
});

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = |reason: &str| DomError::Selector {
            selector: input.to_string(),
            reason: reason.to_string(),
        };

        let mut selector = Selector::default();
        let mut rest = input.trim();
        if rest.is_empty() {
            return Err(error("empty selector"));
        }

        while !rest.is_empty() {
            let caps = RE_PART
                .captures(rest)
                .ok_or_else(|| error(&format!("unexpected input at `{rest}`")))?;

            if let Some(tag) = caps.name("tag") {
                if selector.tag.is_some() || rest.len() != input.trim().len() {
                    return Err(error("tag name must come first"));
                }
                selector.tag = Some(tag.as_str().to_ascii_lowercase());
            } else if let Some(id) = caps.name("id") {
                selector.id = Some(id.as_str().to_string());
            } else if let Some(class) = caps.name("class") {
                selector.classes.push(class.as_str().to_string());
            } else if let Some(attr) = caps.name("attr") {
                let test = match caps.name("op") {
                    Some(op) => {
                        let op = AttrOp::parse(op.as_str())
                            .ok_or_else(|| error("unknown attribute operator"))?;
                        let value = caps
                            .name("dq")
                            .or_else(|| caps.name("sq"))
                            .or_else(|| caps.name("bare"))
                            .map_or("", |m| m.as_str());
                        Some((op, value.to_string()))
                    }
                    None => None,
                };
                selector.attrs.push(AttrSelector {
                    name: attr.as_str().to_ascii_lowercase(),
                    test,
                });
            }

            rest = &rest[caps[0].len()..];
        }

        Ok(selector)
    }
}

impl Page {
    /// Elements matching `selector`, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendant_elements(self.root())
            .into_iter()
            .filter(|id| selector.matches(self, *id))
            .collect()
    }

    /// First element matching `selector`.
    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.descendant_elements(self.root())
            .into_iter()
            .find(|id| selector.matches(self, *id))
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        Ok(self.select(&selector.parse()?))
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.select_first(&selector.parse()?))
    }
}
