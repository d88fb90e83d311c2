//! Property tests for field escaping.

use proptest::prelude::*;

use perflog::domain::services::{escape_field, LineBuilder};

fn is_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Strings made of letters, quotes and line breaks, without spaces
fn spaceless_with_breaks() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z\"\r\n]{0,64}").unwrap()
}

/// Number of break runs that are followed by more content
fn inner_break_runs(s: &str) -> usize {
    let mut runs = 0;
    let mut pending = false;
    for c in s.chars() {
        if is_break(c) {
            pending = true;
        } else if pending {
            runs += 1;
            pending = false;
        }
    }
    runs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A field is wrapped in exactly one pair of quotes and every
    /// inner quote is doubled.
    #[test]
    fn property_quotes_are_doubled(s in "(?s).{0,128}") {
        let field = escape_field(Some(&s));
        prop_assert!(field.len() >= 2);
        prop_assert!(field.starts_with('"') && field.ends_with('"'));

        let inner = &field[1..field.len() - 1];
        prop_assert_eq!(inner.matches('"').count(), 2 * s.matches('"').count());
        prop_assert!(!inner.replace("\"\"", "").contains('"'));
    }

    /// PROPERTY: Escaped fields never contain line breaks.
    #[test]
    fn property_no_line_breaks(s in "(?s).{0,128}") {
        let field = escape_field(Some(&s));
        prop_assert!(!field.contains(is_break));
    }

    /// PROPERTY: Each break run with content after it becomes exactly one
    /// space; no double spaces come from collapsing.
    #[test]
    fn property_break_runs_collapse_to_one_space(s in spaceless_with_breaks()) {
        let field = escape_field(Some(&s));
        prop_assert_eq!(field.matches(' ').count(), inner_break_runs(&s));
        prop_assert!(!field.contains("  "));
    }

    /// PROPERTY: Escaping keeps every non-break character in order.
    #[test]
    fn property_content_preserved(s in "(?s).{0,128}") {
        let field = escape_field(Some(&s));
        let unescaped = field[1..field.len() - 1].replace("\"\"", "\"");
        let strip = |t: &str| t.chars().filter(|c| !is_break(*c) && *c != ' ').collect::<String>();
        prop_assert_eq!(strip(&unescaped), strip(&s));
    }

    /// PROPERTY: A line is its escaped fields joined by `;`.
    #[test]
    fn property_line_is_joined_fields(
        values in proptest::collection::vec(proptest::option::of("(?s).{0,32}"), 1..8)
    ) {
        let mut builder = LineBuilder::new();
        for v in &values {
            builder.field(v.as_deref());
        }
        let expected = values
            .iter()
            .map(|v| escape_field(v.as_deref()))
            .collect::<Vec<_>>()
            .join(";");
        prop_assert_eq!(builder.finish(), expected);
    }
}
