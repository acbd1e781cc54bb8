pub mod content;
pub mod literal;
pub mod locate;
pub mod score;
pub mod sentences;
pub mod text;
pub mod tree;

use scraper::Html;

use crate::error::DocumentError;
use locate::{HeadingCandidate, SectionBounds};
use tree::DocumentTree;

/// Four-stage pipeline: locate bounds → extract text → normalize → split.
pub fn process_html(html: &str) -> Result<Vec<String>, DocumentError> {
    let doc = Html::parse_document(html);
    let tree = DocumentTree::new(&doc);

    let bounds = locate::locate(&tree).ok_or(DocumentError::SectionNotFound)?;
    let section = content::extract(&tree, bounds);
    let sentences = sentences::split(&section);
    if sentences.is_empty() {
        return Err(DocumentError::EmptyExtraction);
    }
    Ok(sentences)
}

/// What the locator saw in one document, for the `candidates` command.
pub struct Inspection {
    pub candidates: Vec<HeadingCandidate>,
    pub bounds: Option<SectionBounds>,
    pub end_text: Option<String>,
    pub section_chars: usize,
    pub sentences: usize,
}

pub fn inspect(html: &str) -> Inspection {
    let doc = Html::parse_document(html);
    let tree = DocumentTree::new(&doc);

    let candidates = locate::candidates(&tree);
    let bounds = locate::bounds_from(&tree, &candidates);
    let end_text = bounds.and_then(|b| b.end).map(|end| tree.heading_text(end));
    let section = bounds
        .map(|b| content::extract(&tree, b))
        .unwrap_or_default();

    Inspection {
        candidates,
        bounds,
        end_text,
        section_chars: text::char_len(&section),
        sentences: sentences::split(&section).len(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use literal::format_literal;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    fn assert_clean(sentences: &[String]) {
        for s in sentences {
            assert_eq!(s.trim(), s, "untrimmed: {:?}", s);
            assert!(s.chars().count() > 3, "too short: {:?}", s);
            assert!(!s.contains('\u{a0}'), "nbsp in: {:?}", s);
        }
    }

    #[test]
    fn single_heading_section() {
        let sentences = process_html(&fixture("single_heading")).unwrap();
        assert_eq!(
            sentences,
            vec![
                "Our business faces significant risk from changes in market demand.",
                "Demand could fall sharply in a downturn.",
                "We depend on a small number of suppliers, and this concentration of risk may disrupt production.",
                "Regulatory risk could increase our costs.",
                "New rules may require expensive compliance programs.",
            ]
        );
        assert_clean(&sentences);
    }

    #[test]
    fn toc_entry_skipped_for_real_heading() {
        let sentences = process_html(&fixture("toc_and_heading")).unwrap();
        assert_eq!(sentences.len(), 12, "{:#?}", sentences);
        assert_eq!(
            sentences[0],
            "Our operating results may fluctuate significantly from quarter to quarter."
        );
        assert_eq!(
            sentences[11],
            "The outcome of pending legislation is uncertain, and new rules could require significant capital investment at our plants."
        );
        assert!(sentences.iter().all(|s| !s.contains("Table of Contents")));
        assert!(sentences.iter().all(|s| !s.contains("Item ")));
        assert!(sentences.iter().all(|s| !s.contains("headquarters")));
        assert_clean(&sentences);

        let mut unique = sentences.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), sentences.len());
    }

    #[test]
    fn inline_markup_and_bullets() {
        let sentences = process_html(&fixture("edgar_inline")).unwrap();
        assert_eq!(
            sentences,
            vec![
                "The Company's results may vary.",
                "Risks include:",
                "Supply chain disruption that could delay our product launches.",
                "Regulatory changes in the U.S.",
                "Government procurement rules.",
            ]
        );
        assert_clean(&sentences);
        assert!(format_literal(&sentences).starts_with(r"['The Company\'s results may vary.', "));
    }

    #[test]
    fn page_div_with_toc_link_is_kept() {
        let html = "<h2>Item 1A. Risk Factors</h2>\
            <div><p><a href=\"#toc\">Table of Contents</a></p>\
            <p>Our operating results may fluctuate significantly from quarter to quarter.</p>\
            <p>Competition could reduce our market share.</p></div>\
            <h2>Item 1B. Unresolved Staff Comments</h2>";
        assert_eq!(
            process_html(html).unwrap(),
            vec![
                "Our operating results may fluctuate significantly from quarter to quarter.",
                "Competition could reduce our market share.",
            ]
        );
    }

    #[test]
    fn small_caps_headings() {
        let html = "<p><font>I</font><font size=\"1\">TEM 1A. </font><font>R</font><font size=\"1\">ISK FACTORS</font></p>\
            <p>Our operating results may fluctuate significantly from quarter to quarter.</p>\
            <p><b>I</b>TEM 2. PROPERTIES</p>\
            <p>We lease a single office building in Austin, Texas.</p>";
        assert_eq!(
            process_html(html).unwrap(),
            vec!["Our operating results may fluctuate significantly from quarter to quarter."]
        );
    }

    #[test]
    fn missing_section() {
        assert!(matches!(
            process_html(&fixture("no_heading")),
            Err(DocumentError::SectionNotFound)
        ));
        assert!(matches!(
            process_html(&fixture("cross_reference")),
            Err(DocumentError::SectionNotFound)
        ));
        assert!(matches!(process_html(""), Err(DocumentError::SectionNotFound)));
    }

    #[test]
    fn heading_without_content() {
        let html = "<h2>Item 1A. Risk Factors</h2><p>None.</p><h2>Item 2. Properties</h2>";
        assert!(matches!(
            process_html(html),
            Err(DocumentError::EmptyExtraction)
        ));
    }

    #[test]
    fn inspection_reports_ranking() {
        let report = inspect(&fixture("toc_and_heading"));
        assert_eq!(report.candidates.len(), 2);
        assert_eq!(report.bounds.map(|b| b.start), Some(report.candidates[0].node));
        assert_eq!(report.end_text.as_deref(), Some("Item 1B. Unresolved Staff Comments"));
        assert_eq!(report.sentences, 12);
        assert!(report.section_chars > 1000);
    }
}
