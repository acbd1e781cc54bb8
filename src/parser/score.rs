use std::sync::LazyLock;

use regex::Regex;

use super::text::{char_len, contains_any};
use super::tree::{DocumentTree, NodeIndex, CONTENT_TAGS, HEADING_TAGS, INLINE_TAGS, PARAGRAPH_TAGS};

/// Somewhere ahead there is an "Item 1B" or "Item 2" heading (not "Item 20").
pub static NEXT_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bITEM\s*(?:1B|2(?:[^0-9]|$))").unwrap());

/// "see" as a whole word, so "foreseeable" and "overseen" do not count.
static SEE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bsee\b").unwrap());

/// Phrases that mark a heading mention as a cross-reference rather than the
/// heading itself. Lowercase. "see" is matched separately by `SEE_RE`.
pub const CROSS_REFERENCE_PHRASES: &[&str] = &[
    "described in",
    "refer to",
    "discussed in",
    "forward-looking",
    "annual report on form",
    "set forth in",
    "included in",
    "contained in",
    "under the heading",
    "under the caption",
    "as discussed",
    "in this report",
    "incorporated by reference",
    "reference is made",
];

pub const RISK_KEYWORDS: &[&str] = &[
    "risk",
    "uncertain",
    "could",
    "may",
    "might",
    "adverse",
    "factor",
    "subject to",
    "depend",
    "fail",
];

const LENGTH_SLACK: usize = 15;
const PARENT_TEXT_LIMIT: usize = 500;
const LOOKAHEAD_NODES: usize = 20;
const LOOKAHEAD_MIN_NODE_CHARS: usize = 20;
const LOOKAHEAD_MAX_CHARS: usize = 2000;

/// Confidence that `node` (whose text matched the heading pattern as
/// `matched`) is where the Risk Factors section really starts.
///
/// Flat sum of independent rules; only a strictly positive total is a
/// usable section start.
pub fn score(tree: &DocumentTree, node: NodeIndex, matched: &str) -> i32 {
    let text = tree.text(node);
    let mut score = 0;

    // Node is essentially just the heading.
    if char_len(&tree.heading_text(node)).abs_diff(char_len(matched)) <= LENGTH_SLACK {
        score += 50;
    }

    if tree.has_tag(node, HEADING_TAGS) {
        score += 30;
    } else if tree.has_tag(node, PARAGRAPH_TAGS) {
        score += 20;
    } else if tree.has_tag(node, INLINE_TAGS) {
        score -= 20;
    }

    if is_cross_reference(&text) {
        score -= 100;
    }

    if let Some(parent) = tree.parent(node) {
        let parent_text = tree.text(parent);
        if char_len(&parent_text) < PARENT_TEXT_LIMIT
            && is_cross_reference(&parent_text)
        {
            score -= 80;
        }
    }

    let ahead = lookahead_text(tree, node);
    let ahead_lower = ahead.to_lowercase();
    let keyword_hits = RISK_KEYWORDS
        .iter()
        .filter(|kw| ahead_lower.contains(*kw))
        .count();
    score += 5 * keyword_hits as i32;

    let ahead_len = char_len(&ahead);
    if ahead_len > 1000 {
        score += 30;
    } else if ahead_len > 500 {
        score += 15;
    }

    if NEXT_SECTION_RE.is_match(&ahead) {
        score += 20;
    }

    score
}

fn is_cross_reference(text: &str) -> bool {
    contains_any(text, CROSS_REFERENCE_PHRASES) || SEE_RE.is_match(text)
}

/// Text of the substantive content blocks among the next few nodes, capped.
pub fn lookahead_text(tree: &DocumentTree, node: NodeIndex) -> String {
    let mut collected = String::new();
    for next in tree.following(node).take(LOOKAHEAD_NODES) {
        if !tree.has_tag(next, CONTENT_TAGS) {
            continue;
        }
        let text = tree.text(next);
        if char_len(&text) <= LOOKAHEAD_MIN_NODE_CHARS {
            continue;
        }
        if !collected.is_empty() {
            collected.push(' ');
        }
        collected.push_str(&text);
        if char_len(&collected) >= LOOKAHEAD_MAX_CHARS {
            break;
        }
    }
    collected.chars().take(LOOKAHEAD_MAX_CHARS).collect()
}
