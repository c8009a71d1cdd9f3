//! HTML parsing and rendering.
//!
//! Parsing goes through `tl` and copies its nodes into the page arena.
//! Comments are dropped; text keeps its source form so untouched content is
//! written back as it was read.

use std::borrow::Cow;

use super::DomError;
use super::node::{NodeId, NodeKind, Page};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Page {
    /// Parse an HTML document.
    pub fn parse(html: &str) -> Result<Self, DomError> {
        let mut page = Page::new();
        let (doctype, body) = split_doctype(html);
        page.doctype = doctype.map(str::to_string);

        let dom = tl::parse(body, tl::ParserOptions::default())
            .map_err(|e| DomError::Parse(e.to_string()))?;
        let parser = dom.parser();
        let root = page.root();
        for handle in dom.children() {
            page.import_tl_node(*handle, parser, root);
        }
        Ok(page)
    }

    /// Copy a tl node (and its subtree) under `parent`.
    fn import_tl_node(&mut self, handle: tl::NodeHandle, parser: &tl::Parser, parent: NodeId) {
        let Some(node) = handle.get(parser) else {
            return;
        };

        match node {
            tl::Node::Tag(tag) => {
                let tag_name = tag.name().as_utf8_str().to_lowercase();
                if tag_name.starts_with('!') {
                    return;
                }

                let element = self.create_element(&tag_name);
                let tag_attrs = tag.attributes();
                for (key, value) in tag_attrs.iter() {
                    let key_str: &str = key.as_ref();
                    let value_str = value
                        .map(|v| decode_entities(&v).into_owned())
                        .unwrap_or_default();
                    self.set_attr(element, key_str, &value_str);
                }
                // id and class are stored apart from the other attributes
                for special in ["id", "class"] {
                    if !self.has_attr(element, special)
                        && let Some(Some(value)) = tag_attrs.get(special)
                    {
                        let value_str = decode_entities(&value.as_utf8_str()).into_owned();
                        self.set_attr(element, special, &value_str);
                    }
                }
                self.append_child(parent, element);

                for child_handle in tag.children().top().iter() {
                    self.import_tl_node(*child_handle, parser, element);
                }
            }
            tl::Node::Raw(bytes) => {
                let text = bytes.as_utf8_str();
                if !text.is_empty() {
                    let text = self.create_raw_text(&text);
                    self.append_child(parent, text);
                }
            }
            tl::Node::Comment(_) => {}
        }
    }

    /// Render the document back to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(doctype) = &self.doctype {
            out.push_str(doctype);
            out.push('\n');
        }
        for child in self.children(self.root()) {
            self.render_node(*child, &mut out);
        }
        out
    }

    /// Render a single node and its subtree.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.render_node(node, &mut out);
        out
    }

    fn render_node(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Document => {
                for child in self.children(node) {
                    self.render_node(*child, out);
                }
            }
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in self.children(node) {
                    self.render_node(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Split a leading `<!DOCTYPE ...>` off the document.
fn split_doctype(html: &str) -> (Option<&str>, &str) {
    let trimmed = html.trim_start();
    let is_doctype = trimmed
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));
    if !is_doctype {
        return (None, html);
    }
    match trimmed.find('>') {
        Some(end) => (Some(&trimmed[..=end]), &trimmed[end + 1..]),
        None => (None, html),
    }
}

/// Characters escaped in text content.
const TEXT_ESCAPES: [char; 3] = ['&', '<', '>'];

/// Characters escaped in double-quoted attribute values.
const ATTR_ESCAPES: [char; 4] = ['&', '"', '<', '>'];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

#[inline]
pub(super) fn escape_text(text: &str) -> Cow<'_, str> {
    escape_with(text, &TEXT_ESCAPES)
}

#[inline]
pub(super) fn escape_attr(value: &str) -> Cow<'_, str> {
    escape_with(value, &ATTR_ESCAPES)
}

/// Borrows when nothing needs escaping.
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c).filter(|_| chars.contains(&c)) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Decode the named entities `escape_text`/`escape_attr` produce, plus
/// numeric references.
pub(super) fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let decoded = rest.find(';').and_then(|end| {
            let entity = &rest[1..end];
            decode_entity(entity).map(|c| (c, end + 1))
        });
        match decoded {
            Some((c, len)) => {
                out.push(c);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title>Old</title><meta name="description" content="old &amp; stale"></head>
<body><nav id="menu" class="menu main" data-mobile-menu><a href="#features">Features</a></nav></body>
</html>"##;

    #[test]
    fn test_parse_structure() {
        let page = Page::parse(PAGE).unwrap();
        let html = page.document_element().unwrap();
        assert_eq!(page.tag(html), Some("html"));
        assert_eq!(page.attr(html, "lang"), Some("en"));
        assert_eq!(page.title(), "Old");

        let menu = page.element_by_id("menu").unwrap();
        assert!(page.has_class(menu, "main"));
        assert!(page.has_attr(menu, "data-mobile-menu"));
    }

    #[test]
    fn test_parse_decodes_attribute_entities() {
        let page = Page::parse(PAGE).unwrap();
        let meta = page.first_by_tag("meta").unwrap();
        assert_eq!(page.attr(meta, "content"), Some("old & stale"));
    }

    #[test]
    fn test_render_keeps_doctype_and_void_elements() {
        let page = Page::parse(PAGE).unwrap();
        let out = page.to_html();
        assert!(out.starts_with("<!DOCTYPE html>\n"));
        assert!(out.contains("content=\"old &amp; stale\""));
        assert!(!out.contains("</meta>"));
        assert!(out.contains("<title>Old</title>"));
    }

    #[test]
    fn test_render_built_tree() {
        let mut page = Page::new();
        let root = page.root();
        let p = page.append_element(root, "p", &[("title", "a \"quote\"")]);
        let text = page.create_text("1 < 2");
        page.append_child(p, text);
        assert_eq!(
            page.outer_html(p),
            "<p title=\"a &quot;quote&quot;\">1 &lt; 2</p>"
        );
    }

    #[test]
    fn test_split_doctype() {
        assert_eq!(split_doctype("<p>x</p>"), (None, "<p>x</p>"));
        assert_eq!(
            split_doctype("  <!doctype html><p>x</p>"),
            (Some("<!doctype html>"), "<p>x</p>")
        );
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape_text("plain"), Cow::Borrowed("plain")));
        assert!(matches!(escape_attr("#3b82f6"), Cow::Borrowed(_)));
        assert_eq!(escape_text("a \"b\" < c"), "a \"b\" &lt; c");
        assert_eq!(escape_attr("a \"b\""), "a &quot;b&quot;");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("&unknown; &"), "&unknown; &");
    }
}
