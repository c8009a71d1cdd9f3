//! Inline `style` declarations.
//!
//! Custom properties set here (`--primary-500`) behave like
//! `element.style.setProperty`: the declaration is updated in place or
//! appended, other declarations are left alone.

use super::node::{NodeId, Page};

/// One `;`-separated piece of a style attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Declaration { name: String, value: String },
    /// Anything that is not `name: value`, written back as it was.
    Raw(String),
}

/// Split on `;` outside quotes and parentheses.
fn split_top_level(style: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                pieces.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&style[start..]);
    pieces
}

fn parse_pieces(style: &str) -> Vec<Piece> {
    split_top_level(style)
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() && !value.trim().is_empty() => {
                Piece::Declaration {
                    name: name.trim().to_string(),
                    value: value.trim().to_string(),
                }
            }
            _ => Piece::Raw(piece.to_string()),
        })
        .collect()
}

fn render_pieces(pieces: &[Piece]) -> String {
    pieces
        .iter()
        .map(|piece| match piece {
            Piece::Declaration { name, value } => format!("{name}: {value};"),
            Piece::Raw(text) => format!("{text};"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn declares(piece: &Piece, property: &str) -> bool {
    matches!(piece, Piece::Declaration { name, .. } if same_property(name, property))
}

/// Custom properties are case-sensitive, regular ones are not.
fn same_property(a: &str, b: &str) -> bool {
    if a.starts_with("--") || b.starts_with("--") {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

impl Page {
    /// Value of an inline style property.
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<String> {
        let style = self.attr(node, "style")?;
        parse_pieces(style).into_iter().find_map(|piece| match piece {
            Piece::Declaration { name: n, value } if same_property(&n, name) => Some(value),
            _ => None,
        })
    }

    /// Set an inline style property. An empty value removes it.
    ///
    /// Other declarations are written back unchanged, including ones this
    /// parser does not understand.
    pub fn set_style_property(&mut self, node: NodeId, name: &str, value: &str) {
        if !self.is_element(node) {
            return;
        }
        let mut pieces = self.attr(node, "style").map(parse_pieces).unwrap_or_default();

        let value = value.trim();
        let position = pieces.iter().position(|piece| declares(piece, name));
        let declaration = Piece::Declaration {
            name: name.to_string(),
            value: value.to_string(),
        };
        match (position, value.is_empty()) {
            (Some(i), true) => {
                pieces.remove(i);
            }
            (Some(i), false) => pieces[i] = declaration,
            (None, true) => {}
            (None, false) => pieces.push(declaration),
        }

        if pieces.is_empty() {
            self.remove_attr(node, "style");
        } else {
            self.set_attr(node, "style", &render_pieces(&pieces));
        }
    }
}
