//! Property-based tests for the canonical form
//!
//! Any reference list, rendered canonically and parsed again, comes back equal; rendering
//! that result again yields the same text.

use proptest::prelude::*;
use refrange_parser::{format_references, parse_references, Range, Reference};

fn range_strategy() -> impl Strategy<Value = Range> {
    prop_oneof![
        Just(Range::Any),
        (0u32..500).prop_map(|left| Range::Number { left }),
        (0u32..500).prop_map(|left| Range::NumberToAny { left }),
        (0u32..500, 0u32..500).prop_map(|(left, right)| Range::NumberToNumber { left, right }),
    ]
}

fn reference_strategy() -> impl Strategy<Value = Reference> {
    (
        prop::collection::vec(range_strategy(), 1..4),
        prop::collection::vec(range_strategy(), 0..4),
    )
        .prop_map(|(chapters, verses)| Reference::new(chapters, verses))
}

/// Expressions written the way people type them: optional blanks, `+`, optional separators
fn expression_strategy() -> impl Strategy<Value = String> {
    let range = prop_oneof![
        Just("*".to_string()),
        (1u32..200).prop_map(|n| n.to_string()),
        (1u32..200).prop_map(|n| format!("{n}-*")),
        (1u32..200, 1u32..200).prop_map(|(a, b)| format!("{a} - {b}")),
        (1u32..200, 0u32..20).prop_map(|(a, k)| format!("{a}+{k}")),
    ];
    let list = prop::collection::vec(range, 1..4).prop_map(|ranges| ranges.join(","));
    let reference = (list.clone(), prop::option::of(list)).prop_map(|(chapters, verses)| {
        match verses {
            Some(verses) => format!("{chapters}:{verses}"),
            None => chapters,
        }
    });
    (
        prop::collection::vec(reference, 1..4),
        prop_oneof![Just("; "), Just(";"), Just(" ")],
    )
        .prop_map(|(references, separator)| references.join(separator))
}

proptest! {
    #[test]
    fn canonical_form_round_trips(references in prop::collection::vec(reference_strategy(), 0..4)) {
        let text = format_references(&references);
        let parsed = parse_references(&text).expect("canonical form to parse");
        prop_assert_eq!(&parsed, &references);
        prop_assert_eq!(format_references(&parsed), text);
    }

    #[test]
    fn written_expressions_are_idempotent(expression in expression_strategy()) {
        let parsed = parse_references(&expression).expect("expression to parse");
        let canonical = format_references(&parsed);
        let reparsed = parse_references(&canonical).expect("canonical form to parse");
        prop_assert_eq!(reparsed, parsed);
    }

    #[test]
    fn lexer_never_panics(input in "[0-9*:;,+\\- a#]{0,24}") {
        let _ = parse_references(&input);
    }
}
