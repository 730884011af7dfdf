//! Markup parsing
//!
//! Parses the serialization of a document root and collects its text nodes.
//! The editor writes element tags around text it never escapes, so the parser
//! is lenient in the way an HTML parser is: a `<` that does not start a tag
//! is text, a closing tag with no open element of that name is text, and
//! entity references are left as written. A fragment serializes to a
//! sequence of sibling elements, so more than one top-level element is
//! accepted.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

/// Start, end or self-closing tag; attribute values are double-quoted
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(/?)([A-Za-z_][\w:.-]*)((?:\s+[^\s=<>/"]+(?:\s*=\s*"[^"]*")?)*)\s*(/?)>"#)
        .expect("tag pattern is valid")
});

/// Text content of a parsed markup string, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupTree {
    text_nodes: Vec<String>,
}

impl MarkupTree {
    /// Parse a markup string
    ///
    /// Fails only when elements are still open at the end of the markup.
    pub fn parse(markup: &str) -> Result<Self, ParseError> {
        let mut text_nodes = Vec::new();
        let mut open: Vec<&str> = Vec::new();
        let mut text_start = 0;

        for tag in TAG.captures_iter(markup) {
            let (Some(span), Some(name)) = (tag.get(0), tag.get(2)) else {
                continue;
            };
            let closing = tag.get(1).is_some_and(|m| !m.is_empty());
            let self_closing = tag.get(4).is_some_and(|m| !m.is_empty());

            if closing {
                // `</x/>` or a closing tag for nothing open stays part of the text
                let Some(position) = open
                    .iter()
                    .rposition(|element| *element == name.as_str())
                else {
                    continue;
                };
                if self_closing {
                    continue;
                }
                open.truncate(position);
            } else if !self_closing {
                open.push(name.as_str());
            }

            push_text(&mut text_nodes, &markup[text_start..span.start()]);
            text_start = span.end();
        }
        push_text(&mut text_nodes, &markup[text_start..]);

        if !open.is_empty() {
            return Err(ParseError(format!(
                "{} unclosed element(s) at end of markup: {}",
                open.len(),
                open.join(", ")
            )));
        }

        Ok(Self { text_nodes })
    }

    /// Raw text nodes, in document order
    pub fn text_nodes(&self) -> &[String] {
        &self.text_nodes
    }

    /// Join all non-blank text nodes with `separator`
    ///
    /// Each node is trimmed first, so adjacent nodes are always separated by
    /// exactly one separator and blank documents produce an empty string.
    pub fn text(&self, separator: &str) -> String {
        self.text_nodes
            .iter()
            .map(|node| node.trim())
            .filter(|node| !node.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
            .trim()
            .to_string()
    }
}

fn push_text(text_nodes: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        text_nodes.push(text.to_string());
    }
}
