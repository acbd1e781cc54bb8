use std::sync::LazyLock;

use regex::Regex;

use super::locate::SectionBounds;
use super::text::{char_len, normalize};
use super::tree::{DocumentTree, CONTENT_TAGS};

static PAGE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\s*$").unwrap());

const MIN_FRAGMENT_CHARS: usize = 10;
const TOC_MARKER: &str = "Table of Contents";

/// Flattened text of every content block between the section bounds,
/// joined with single spaces and normalized. Empty when nothing survives.
///
/// The heading's own subtree is skipped, and a taken block's descendants
/// are not visited again. A rejected block, or one that encloses the end
/// heading, is walked into so its children are still considered.
pub fn extract(tree: &DocumentTree, bounds: SectionBounds) -> String {
    let stop = bounds.end.unwrap_or(tree.len());
    let mut parts: Vec<String> = Vec::new();
    let mut node = tree.subtree_end(bounds.start);

    while node < stop {
        let encloses_end = bounds.end.is_some_and(|end| tree.contains(node, end));
        if tree.has_tag(node, CONTENT_TAGS) && !encloses_end {
            let text = tree.text(node);
            if is_substantive(&text) {
                parts.push(text);
                node = tree.subtree_end(node);
                continue;
            }
        }
        node += 1;
    }

    normalize(&parts.join(" "))
}

/// Drops page numbers, running "Table of Contents" links and short scraps.
fn is_substantive(text: &str) -> bool {
    char_len(text) > MIN_FRAGMENT_CHARS
        && !PAGE_NUMBER_RE.is_match(text)
        && !text.contains(TOC_MARKER)
}
