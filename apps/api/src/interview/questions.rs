//! Parsing of generated output into the interview question list.

/// How many questions the prompt asks for. The parser accepts whatever the
/// model actually returns; a mismatch is logged by the caller, not rejected.
pub const EXPECTED_QUESTION_COUNT: usize = 5;

/// Splits generated output into questions: one per line, trimmed, empty lines
/// discarded, original order kept.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_blank_and_whitespace_lines() {
        let output = "1. First question?\n\n   \n2. Second question?\n";
        assert_eq!(
            parse_questions(output),
            vec!["1. First question?", "2. Second question?"]
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(parse_questions("  padded?  "), vec!["padded?"]);
    }

    #[test]
    fn test_keeps_original_order() {
        let output = "c?\na?\nb?";
        assert_eq!(parse_questions(output), vec!["c?", "a?", "b?"]);
    }

    #[test]
    fn test_empty_output_yields_no_questions() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("\n\n  \n").is_empty());
    }

    #[test]
    fn test_count_is_not_forced_to_five() {
        let output = "1?\n2?\n3?\n4?\n5?\n6?\n7?";
        assert_eq!(parse_questions(output).len(), 7);
    }
}
