use std::collections::HashMap;
use std::ops::Range;

use scraper::{ElementRef, Html};

use super::text::normalize;

/// Position of an element in document order (pre-order over all elements).
pub type NodeIndex = usize;

pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
pub const PARAGRAPH_TAGS: &[&str] = &["p", "div"];
pub const INLINE_TAGS: &[&str] = &["span", "font", "b", "strong", "i", "em", "u", "a"];
/// Containers whose flattened text counts as body content.
pub const CONTENT_TAGS: &[&str] = &["p", "div", "span", "td", "li"];

/// Read-only, index-addressed view of a parsed HTML document.
///
/// Elements are stored in pre-order, so "next node in document order" is
/// `index + 1` and a node's descendants occupy `index + 1..subtree_end`.
pub struct DocumentTree<'a> {
    nodes: Vec<ElementRef<'a>>,
    parents: Vec<Option<NodeIndex>>,
    subtree_end: Vec<NodeIndex>,
}

impl<'a> DocumentTree<'a> {
    pub fn new(html: &'a Html) -> Self {
        let nodes: Vec<ElementRef<'a>> = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();

        let position: HashMap<_, NodeIndex> = nodes
            .iter()
            .enumerate()
            .map(|(i, el)| (el.id(), i))
            .collect();
        let parents: Vec<Option<NodeIndex>> = nodes
            .iter()
            .map(|el| el.parent().and_then(|p| position.get(&p.id()).copied()))
            .collect();

        // Children come after their parent, so a reverse sweep sees every
        // descendant before its ancestors.
        let mut subtree_end: Vec<NodeIndex> = (1..=nodes.len()).collect();
        for i in (0..nodes.len()).rev() {
            if let Some(p) = parents[i] {
                subtree_end[p] = subtree_end[p].max(subtree_end[i]);
            }
        }

        DocumentTree {
            nodes,
            parents,
            subtree_end,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn tag(&self, node: NodeIndex) -> &'a str {
        self.nodes[node].value().name()
    }

    pub fn has_tag(&self, node: NodeIndex, tags: &[&str]) -> bool {
        tags.contains(&self.tag(node))
    }

    /// Descendant text pieces, each trimmed, joined with single spaces and
    /// normalized.
    pub fn text(&self, node: NodeIndex) -> String {
        self.joined_text(node, " ")
    }

    /// Like [`text`](Self::text) but with the pieces glued together, so a
    /// heading set in split runs (`<font>I</font>TEM 1A`) reads as one word.
    pub fn heading_text(&self, node: NodeIndex) -> String {
        self.joined_text(node, "")
    }

    fn joined_text(&self, node: NodeIndex, separator: &str) -> String {
        let joined = self.nodes[node]
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(separator);
        normalize(&joined)
    }

    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.parents[node]
    }

    /// Every node after `node` in document order, descendants included.
    pub fn following(&self, node: NodeIndex) -> Range<NodeIndex> {
        (node + 1).min(self.nodes.len())..self.nodes.len()
    }

    /// First index past `node` and all of its descendants.
    pub fn subtree_end(&self, node: NodeIndex) -> NodeIndex {
        self.subtree_end[node]
    }

    pub fn contains(&self, ancestor: NodeIndex, node: NodeIndex) -> bool {
        ancestor < node && node < self.subtree_end[ancestor]
    }
}
