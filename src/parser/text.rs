/// Collapse every whitespace run (non-breaking spaces included) into a single
/// ASCII space and trim the ends.
pub fn normalize(text: &str) -> String {
    text.split(char::is_whitespace)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive substring test against a lowercase needle list.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs() {
        assert_eq!(normalize("  Risk \n\t factors  "), "Risk factors");
    }

    #[test]
    fn strips_nbsp() {
        assert_eq!(normalize("Item\u{a0}1A.\u{a0}\u{a0}Risk"), "Item 1A. Risk");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \u{a0}\n "), "");
    }

    #[test]
    fn idempotent() {
        for s in [
            "",
            "a",
            "  a  b  ",
            "\u{a0}x\u{2003}y\r\nz",
            "Risk.\n\n• Supply chain.",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn contains_any_ignores_case() {
        assert!(contains_any("As DESCRIBED IN Item 7", &["described in"]));
        assert!(!contains_any("Item 1A. Risk Factors", &["described in", "see "]));
    }
}
