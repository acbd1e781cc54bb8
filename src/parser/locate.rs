use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::score::score;
use super::tree::{DocumentTree, NodeIndex};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(ITEM\s*1A\.?\s*RISK\s*FACTORS\.?)\s*$").unwrap());
static SECTION_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*ITEM\s*(?:1B|2(?:[^0-9]|$))").unwrap());

/// Elements that may carry the Item 1A heading.
const CANDIDATE_TAGS: &[&str] = &[
    "p", "div", "span", "td", "li", "h1", "h2", "h3", "h4", "h5", "h6", "font", "b", "strong",
    "i", "em", "u", "a",
];
/// Elements inspected for the next major section heading.
const BOUNDARY_TAGS: &[&str] = &[
    "p", "div", "span", "td", "h1", "h2", "h3", "h4", "h5", "h6",
];

#[derive(Debug, Clone)]
pub struct HeadingCandidate {
    pub node: NodeIndex,
    pub tag: String,
    pub text: String,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: NodeIndex,
    /// `None` runs the section to the end of the document.
    pub end: Option<NodeIndex>,
}

/// All heading matches, scored, best first. Equal scores keep document order.
pub fn candidates(tree: &DocumentTree) -> Vec<HeadingCandidate> {
    let mut found: Vec<HeadingCandidate> = (0..tree.len())
        .filter(|&node| tree.has_tag(node, CANDIDATE_TAGS))
        .filter_map(|node| {
            let text = tree.heading_text(node);
            let matched = HEADING_RE.captures(&text)?.get(1)?.as_str().to_string();
            let score = score(tree, node, &matched);
            debug!(node, tag = tree.tag(node), score, "heading candidate");
            Some(HeadingCandidate {
                node,
                tag: tree.tag(node).to_string(),
                text,
                score,
            })
        })
        .collect();

    found.sort_by(|a, b| b.score.cmp(&a.score));
    found
}

pub fn find_start(tree: &DocumentTree) -> Option<NodeIndex> {
    best_start(&candidates(tree))
}

/// Head of an already ranked candidate list, if it scored above zero.
fn best_start(ranked: &[HeadingCandidate]) -> Option<NodeIndex> {
    let best = ranked.first()?;
    (best.score > 0).then_some(best.node)
}

/// First "Item 1B" / "Item 2" heading after `start` in document order.
pub fn find_end(tree: &DocumentTree, start: NodeIndex) -> Option<NodeIndex> {
    tree.following(start)
        .filter(|&node| tree.has_tag(node, BOUNDARY_TAGS))
        .find(|&node| SECTION_END_RE.is_match(&tree.heading_text(node)))
}

pub fn locate(tree: &DocumentTree) -> Option<SectionBounds> {
    let start = find_start(tree)?;
    let end = find_end(tree, start);
    Some(SectionBounds { start, end })
}

/// Bounds for a list already produced by [`candidates`], without scoring again.
pub fn bounds_from(tree: &DocumentTree, ranked: &[HeadingCandidate]) -> Option<SectionBounds> {
    let start = best_start(ranked)?;
    let end = find_end(tree, start);
    Some(SectionBounds { start, end })
}
