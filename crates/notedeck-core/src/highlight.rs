use regex::RegexBuilder;

use crate::model::Segment;

/// Split `text` into matched and unmatched runs for the given query.
///
/// The query is taken literally and compared case-insensitively. Occurrences
/// are found left to right without overlap, and empty runs are dropped, so
/// concatenating the segments always reproduces `text`.
///
/// # Examples
///
/// ```
/// use notedeck_core::highlight;
///
/// let segments = highlight("React Hooks Guide", "react");
/// assert_eq!(segments[0].text, "React");
/// assert!(segments[0].matched);
/// assert_eq!(segments[1].text, " Hooks Guide");
/// ```
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.trim().is_empty() {
        return vec![Segment::plain(text)];
    }

    // The query is not trimmed here: surrounding spaces are part of what gets marked.
    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("Highlight pattern rejected, rendering unmarked: {}", e);
            return vec![Segment::plain(text)];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::plain(&text[last..found.start()]));
        }
        if !found.as_str().is_empty() {
            segments.push(Segment::matched(found.as_str()));
        }
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_blank_query_is_identity() {
        assert_eq!(highlight("Some title", ""), vec![Segment::plain("Some title")]);
        assert_eq!(highlight("Some title", "  "), vec![Segment::plain("Some title")]);
    }

    #[test]
    fn test_marks_every_occurrence_preserving_case() {
        let segments = highlight("Rust and rust and RUST", "rust");
        assert_eq!(
            segments,
            vec![
                Segment::matched("Rust"),
                Segment::plain(" and "),
                Segment::matched("rust"),
                Segment::plain(" and "),
                Segment::matched("RUST"),
            ]
        );
    }

    #[test]
    fn test_no_match_yields_single_plain_segment() {
        assert_eq!(highlight("Grid Layout", "flex"), vec![Segment::plain("Grid Layout")]);
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        let segments = highlight("aaaa", "aa");
        assert_eq!(segments, vec![Segment::matched("aa"), Segment::matched("aa")]);
    }

    #[test]
    fn test_empty_text_yields_no_segments() {
        assert!(highlight("", "query").is_empty());
    }

    #[test]
    fn test_pattern_syntax_in_query_is_literal() {
        let segments = highlight("Use a.*b or (x|y)?", "(x|y)?");
        assert_eq!(
            segments,
            vec![Segment::plain("Use a.*b or "), Segment::matched("(x|y)?")]
        );
        let segments = highlight("path\\to\\file", "\\");
        assert_eq!(segments.iter().filter(|s| s.matched).count(), 2);
    }

    #[test]
    fn test_query_whitespace_is_kept() {
        let segments = highlight("React Hooks", " hooks");
        assert_eq!(segments, vec![Segment::plain("React"), Segment::matched(" Hooks")]);
    }

    proptest! {
        #[test]
        fn test_segments_concatenate_to_original(
            text in "[a-zA-Z .*+?^${}()|\\[\\]\\\\é你]{0,40}",
            query in "[a-zA-Z .*+?^${}()|\\[\\]\\\\é你]{0,6}",
        ) {
            let segments = highlight(&text, &query);
            prop_assert_eq!(joined(&segments), text);
            if !query.trim().is_empty() {
                prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
            }
        }
    }
}
