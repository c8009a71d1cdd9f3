//! Page arena and tree operations.

use std::collections::HashSet;

use super::event::{Listener, Window};
use super::html::{decode_entities, escape_text};

/// Handle to a node inside a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

#[derive(Debug, Clone)]
pub(super) enum NodeKind {
    Document,
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    /// Text as it appears in HTML source (entities not decoded).
    Text(String),
}

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) kind: NodeKind,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    /// Vertical position of the element's top edge, in css pixels.
    pub(super) offset_top: f64,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            offset_top: 0.0,
        }
    }
}

/// A loaded page: document tree, listeners and window state.
pub struct Page {
    pub(super) nodes: Vec<Node>,
    pub(super) doctype: Option<String>,
    pub(super) listeners: Vec<Listener>,
    /// `(node, key)` pairs already wired by a setup function.
    pub(super) wired: HashSet<(NodeId, &'static str)>,
    pub(super) window: Window,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Empty document.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
            doctype: None,
            listeners: Vec::new(),
            wired: HashSet::new(),
            window: Window::default(),
        }
    }

    /// The document node.
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    // ========================================================================
    // tree construction
    // ========================================================================

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        })
    }

    /// Create a text node; `text` is escaped.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(escape_text(text).into_owned()))
    }

    /// Create a text node from already-escaped HTML source.
    pub(super) fn create_raw_text(&mut self, source: &str) -> NodeId {
        self.push(NodeKind::Text(source.to_string()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    /// Create an element with attributes and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.create_element(tag);
        for (name, value) in attrs {
            self.set_attr(id, name, value);
        }
        self.append_child(parent, id);
        id
    }

    // ========================================================================
    // navigation
    // ========================================================================

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map_or(&[][..], |n| n.children.as_slice())
    }

    /// `node` followed by its ancestors up to the document.
    pub fn ancestors_inclusive(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Descendant nodes of `node` in document order (excluding `node`).
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Descendant elements of `node` in document order.
    pub fn descendant_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|id| self.is_element(*id))
            .collect()
    }

    /// The `<html>` element (first element child of the document).
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.root())
            .iter()
            .copied()
            .find(|id| self.is_element(*id))
    }

    /// First `<head>` element.
    pub fn head(&self) -> Option<NodeId> {
        self.first_by_tag("head")
    }

    pub fn first_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.descendant_elements(self.root())
            .into_iter()
            .find(|id| self.tag(*id) == Some(tag))
    }

    /// Element whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.descendant_elements(self.root())
            .into_iter()
            .find(|node| self.attr(*node, "id") == Some(id))
    }

    // ========================================================================
    // element data
    // ========================================================================

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(
            self.nodes.get(node.0).map(|n| &n.kind),
            Some(NodeKind::Element { .. })
        )
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attrs(&self, node: NodeId) -> &[(String, String)] {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Element { attrs, .. }) => attrs,
            _ => &[],
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attrs(node)
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    /// Set an attribute, replacing an existing one in place. No-op on
    /// non-element nodes.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(NodeKind::Element { attrs, .. }) = self.nodes.get_mut(node.0).map(|n| &mut n.kind)
        else {
            return;
        };
        match attrs.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attrs.push((name.to_ascii_lowercase(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(NodeKind::Element { attrs, .. }) = self.nodes.get_mut(node.0).map(|n| &mut n.kind)
        {
            attrs.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        }
    }

    // ========================================================================
    // classes
    // ========================================================================

    pub fn classes(&self, node: NodeId) -> Vec<&str> {
        self.attr(node, "class")
            .map(|c| c.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).contains(&class)
    }

    /// Toggle `class` on `node`. Returns whether the class is now present.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        let mut classes: Vec<String> = self.classes(node).into_iter().map(String::from).collect();
        let present = if let Some(pos) = classes.iter().position(|c| c == class) {
            classes.remove(pos);
            false
        } else {
            classes.push(class.to_string());
            true
        };

        if classes.is_empty() {
            self.remove_attr(node, "class");
        } else {
            self.set_attr(node, "class", &classes.join(" "));
        }
        present
    }

    // ========================================================================
    // text
    // ========================================================================

    /// Concatenated text of `node` and its descendants, entities decoded.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeKind::Text(text)) = self.nodes.get(node.0).map(|n| &n.kind) {
            out.push_str(text);
        }
        for id in self.descendants(node) {
            if let NodeKind::Text(text) = &self.nodes[id.0].kind {
                out.push_str(text);
            }
        }
        decode_entities(&out).into_owned()
    }

    /// Replace the children of `node` with a single text node.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
        }
        if !text.is_empty() {
            let text = self.create_text(text);
            self.append_child(node, text);
        }
    }

    // ========================================================================
    // document title
    // ========================================================================

    /// Text of the first `<title>`, whitespace collapsed.
    pub fn title(&self) -> String {
        self.first_by_tag("title")
            .map(|t| {
                self.text_content(t)
                    .split_ascii_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Set the document title.
    ///
    /// Updates the first `<title>`; creates one in `<head>` only when the
    /// page has none. Without a `<head>` nothing happens.
    pub fn set_title(&mut self, title: &str) {
        let element = match self.first_by_tag("title") {
            Some(element) => element,
            None => {
                let Some(head) = self.head() else {
                    return;
                };
                let element = self.create_element("title");
                self.append_child(head, element);
                element
            }
        };
        self.set_text_content(element, title);
    }

    // ========================================================================
    // layout
    // ========================================================================

    /// Vertical offset of the element's top edge.
    pub fn offset_top(&self, node: NodeId) -> f64 {
        self.nodes.get(node.0).map_or(0.0, |n| n.offset_top)
    }

    /// Record where layout put an element (no layout engine runs here).
    pub fn set_offset_top(&mut self, node: NodeId, top: f64) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.offset_top = top;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skeleton() -> (Page, NodeId, NodeId) {
        let mut page = Page::new();
        let root = page.root();
        let html = page.append_element(root, "html", &[]);
        let head = page.append_element(html, "head", &[]);
        let body = page.append_element(html, "body", &[]);
        (page, head, body)
    }

    #[test]
    fn test_document_element_and_head() {
        let (page, head, _) = skeleton();
        assert_eq!(page.tag(page.document_element().unwrap()), Some("html"));
        assert_eq!(page.head(), Some(head));
    }

    #[test]
    fn test_attributes_case_insensitive() {
        let (mut page, _, body) = skeleton();
        page.set_attr(body, "Data-Mode", "dark");
        assert_eq!(page.attr(body, "data-mode"), Some("dark"));
        page.set_attr(body, "data-mode", "light");
        assert_eq!(page.attrs(body).len(), 1);
        page.remove_attr(body, "DATA-MODE");
        assert!(!page.has_attr(body, "data-mode"));
    }

    #[test]
    fn test_toggle_class() {
        let (mut page, _, body) = skeleton();
        let menu = page.append_element(body, "nav", &[("class", "menu")]);
        assert!(page.toggle_class(menu, "active"));
        assert_eq!(page.attr(menu, "class"), Some("menu active"));
        assert!(!page.toggle_class(menu, "active"));
        assert_eq!(page.attr(menu, "class"), Some("menu"));
    }

    #[test]
    fn test_set_title_creates_in_head_once() {
        let (mut page, head, _) = skeleton();
        page.set_title("First");
        page.set_title("Second & more");
        let titles: Vec<_> = page
            .descendant_elements(head)
            .into_iter()
            .filter(|id| page.tag(*id) == Some("title"))
            .collect();
        assert_eq!(titles.len(), 1);
        assert_eq!(page.title(), "Second & more");
    }

    #[test]
    fn test_set_title_without_head_is_noop() {
        let mut page = Page::new();
        let root = page.root();
        page.append_element(root, "div", &[]);
        page.set_title("Nowhere");
        assert_eq!(page.title(), "");
    }

    #[test]
    fn test_element_by_id_and_descendants_order() {
        let (mut page, _, body) = skeleton();
        let a = page.append_element(body, "section", &[("id", "a")]);
        let b = page.append_element(a, "div", &[("id", "b")]);
        let c = page.append_element(body, "section", &[("id", "c")]);
        assert_eq!(page.element_by_id("b"), Some(b));
        assert_eq!(page.element_by_id(""), None);
        assert_eq!(page.descendant_elements(body), vec![a, b, c]);
        assert_eq!(page.ancestors_inclusive(b)[..2], [b, a]);
    }
}
