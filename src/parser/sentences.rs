use super::text::char_len;

/// Glyphs that start a new list item inside flattened text.
const BULLETS: &[char] = &['•', '·', '▪'];
const MIN_SENTENCE_CHARS: usize = 3;

/// Split section text into sentences and bullet items, in source order.
///
/// Every bullet starts a new segment. Inside a segment a sentence ends at
/// `.`, `?` or `!` followed by the end of the segment or by whitespace and an
/// upper-case letter. Abbreviations followed by a capital ("U.S. Government")
/// are split too.
pub fn split(text: &str) -> Vec<String> {
    text.split(BULLETS)
        .flat_map(split_segment)
        .map(str::trim)
        .filter(|s| char_len(s) > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

fn split_segment(segment: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in segment.char_indices() {
        if !matches!(c, '.' | '?' | '!') {
            continue;
        }
        let end = i + c.len_utf8();
        let rest = &segment[end..];
        let next = rest.trim_start();
        let gap = rest.len() - next.len();
        if gap > 0 && next.starts_with(|n: char| n.is_ascii_uppercase()) {
            pieces.push(&segment[start..end]);
            start = end + gap;
        }
    }

    pieces.push(&segment[start..]);
    pieces
}
