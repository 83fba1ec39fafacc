//! Text chunking — splits résumé text into word-aligned fragments that fit the
//! extraction backend's context budget.

/// Default character budget per fragment.
pub const DEFAULT_MAX_CHARS: usize = 2800;

/// Splits `text` into an ordered list of fragments of at most `max_chars` characters.
///
/// - Fragments break only on whitespace; whitespace inside a fragment is kept as-is
///   so line structure survives, whitespace at fragment boundaries is dropped.
/// - A single word longer than `max_chars` becomes its own fragment, untruncated.
/// - Empty or whitespace-only text yields no fragments.
///
/// Lengths are counted in `char`s, not bytes.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut fragments = Vec::new();

    // Byte span of the open fragment, plus its length in chars.
    let mut open: Option<(usize, usize)> = None;
    let mut open_chars = 0usize;

    for (start, end) in word_spans(text) {
        let word_chars = text[start..end].chars().count();

        match open {
            None => {
                open = Some((start, end));
                open_chars = word_chars;
            }
            Some((frag_start, frag_end)) => {
                let gap_chars = text[frag_end..start].chars().count();
                if open_chars + gap_chars + word_chars <= max_chars {
                    open = Some((frag_start, end));
                    open_chars += gap_chars + word_chars;
                } else {
                    fragments.push(text[frag_start..frag_end].to_string());
                    open = Some((start, end));
                    open_chars = word_chars;
                }
            }
        }
    }

    if let Some((frag_start, frag_end)) = open {
        fragments.push(text[frag_start..frag_end].to_string());
    }

    fragments
}

/// Byte ranges of each maximal run of non-whitespace characters.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match (ch.is_whitespace(), word_start) {
            (true, Some(start)) => {
                spans.push((start, idx));
                word_start = None;
            }
            (false, None) => word_start = Some(idx),
            _ => {}
        }
    }

    if let Some(start) = word_start {
        spans.push((start, text.len()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("  \n\t ", 100).is_empty());
    }

    #[test]
    fn test_short_text_is_single_fragment() {
        let text = "Senior Engineer\n- Built systems";
        assert_eq!(chunk_text(text, 2800), vec![text.to_string()]);
    }

    #[test]
    fn test_fragments_respect_budget() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";
        for max in [5, 8, 11, 20, 33] {
            for fragment in chunk_text(text, max) {
                // A single word longer than the budget is emitted whole.
                assert!(
                    fragment.chars().count() <= max || !fragment.contains(char::is_whitespace),
                    "fragment {fragment:?} exceeds {max}"
                );
            }
        }
    }

    #[test]
    fn test_word_order_preserved() {
        let text = "Product Manager at Acme\n• Led roadmap for 3 teams\n• Grew revenue 20%\n\nEducation\nBSc University of Somewhere";
        for max in [6, 10, 25, 60] {
            let fragments = chunk_text(text, max);
            let rejoined = fragments.join(" ");
            assert_eq!(words(&rejoined), words(text));
        }
    }

    #[test]
    fn test_never_splits_inside_word() {
        let text = "one two three four five six";
        let fragments = chunk_text(text, 9);
        assert_eq!(fragments, vec!["one two", "three", "four five", "six"]);
    }

    #[test]
    fn test_long_word_emitted_whole() {
        let long = "x".repeat(30);
        let text = format!("short {long} tail");
        let fragments = chunk_text(&text, 10);
        assert_eq!(fragments, vec!["short".to_string(), long, "tail".to_string()]);
    }

    #[test]
    fn test_budget_counts_chars_not_bytes() {
        // Each "é" is two bytes but one char.
        let text = "éééé éééé";
        assert_eq!(chunk_text(text, 9), vec![text.to_string()]);
        assert_eq!(chunk_text(text, 8), vec!["éééé", "éééé"]);
    }

    #[test]
    fn test_internal_newlines_kept() {
        let text = "Engineer\n- Built systems";
        assert_eq!(chunk_text(text, 100), vec![text.to_string()]);
    }

    #[test]
    fn test_zero_budget_treated_as_one() {
        assert_eq!(chunk_text("a b", 0), vec!["a", "b"]);
    }
}
