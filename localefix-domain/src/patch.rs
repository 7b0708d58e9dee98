//! The two text patches applied to unparsable content.

/// Replace every single quote with a double quote, globally and with no
/// context sensitivity. Corrupts string values that legitimately contain
/// an apostrophe.
pub fn normalize_quotes(content: &str) -> String {
    content.replace('\'', "\"")
}

/// Remove trailing commas sitting directly before a closing brace or
/// bracket. One replacement pass per pattern, not iterative: `,\n}` and
/// other separated forms are left alone.
pub fn strip_trailing_commas(content: &str) -> String {
    content.replace(",}", "}").replace(",]", "]")
}

/// Both patches, in the order the repair applies them.
pub(crate) fn patch_source(content: &str) -> String {
    strip_trailing_commas(&normalize_quotes(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_swapped_everywhere() {
        assert_eq!(normalize_quotes("{'a': 'b'}"), r#"{"a": "b"}"#);
    }

    #[test]
    fn quote_swap_hits_embedded_apostrophes_too() {
        // The corruption risk is the point: there is no string-awareness.
        assert_eq!(
            normalize_quotes(r#"{"note": "it's fine"}"#),
            r#"{"note": "it"s fine"}"#
        );
    }

    #[test]
    fn trailing_commas_are_removed_when_adjacent() {
        assert_eq!(strip_trailing_commas(r#"{"a": 1,}"#), r#"{"a": 1}"#);
        assert_eq!(strip_trailing_commas("[1,2,]"), "[1,2]");
    }

    #[test]
    fn separated_trailing_commas_are_left_alone() {
        assert_eq!(strip_trailing_commas("[1, 2, ]"), "[1, 2, ]");
        assert_eq!(strip_trailing_commas("{\"a\": 1,\n}"), "{\"a\": 1,\n}");
    }
}
