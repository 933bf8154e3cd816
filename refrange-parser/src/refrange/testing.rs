//! Testing utilities for parsed references
//!
//!     Parser tests should assert on the full structure of what was parsed, not on a
//!     rendering of it: two different reference lists can print the same way (`2` and `2:*`
//!     do), and a test that only compares strings would not notice which one it got.
//!
//!     [assert_references] gives a fluent API over a parsed list:
//!
//!     ```rust,ignore
//!     let refs = parse_references("2,3-4;49").unwrap();
//!     assert_references(&refs)
//!         .count(2)
//!         .reference(0, |r| {
//!             r.chapters(&[Range::Number { left: 2 }, Range::NumberToNumber { left: 3, right: 4 }])
//!                 .all_verses();
//!         });
//!     ```
//!
//!     Resolution tests take a bounds table; [uniform_table] builds the common case of every
//!     chapter having the same number of verses.

use crate::refrange::ast::{Range, Reference};
use crate::refrange::resolving::VerseTable;

/// Create an assertion builder for a reference list
pub fn assert_references(references: &[Reference]) -> ReferencesAssertion<'_> {
    ReferencesAssertion { references }
}

/// A table of `chapters` chapters with `verses` verses each
pub fn uniform_table(chapters: usize, verses: usize) -> VerseTable {
    VerseTable::new(vec![verses; chapters])
}

pub struct ReferencesAssertion<'a> {
    references: &'a [Reference],
}

impl<'a> ReferencesAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        let actual = self.references.len();
        assert_eq!(
            actual, expected,
            "Expected {} references, found {}: [{}]",
            expected,
            actual,
            summarize(self.references)
        );
        self
    }

    pub fn reference<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(ReferenceAssertion<'a>),
    {
        let reference = self.references.get(index).unwrap_or_else(|| {
            panic!(
                "Reference index {} out of bounds ({} references)",
                index,
                self.references.len()
            )
        });
        check(ReferenceAssertion {
            reference,
            context: format!("references[{}]", index),
        });
        self
    }
}

pub struct ReferenceAssertion<'a> {
    reference: &'a Reference,
    context: String,
}

impl ReferenceAssertion<'_> {
    pub fn chapters(self, expected: &[Range]) -> Self {
        assert_eq!(
            self.reference.chapters(),
            expected,
            "{}: chapter ranges differ (reference is '{}')",
            self.context,
            self.reference
        );
        self
    }

    pub fn verses(self, expected: &[Range]) -> Self {
        assert_eq!(
            self.reference.verses(),
            expected,
            "{}: verse ranges differ (reference is '{}')",
            self.context,
            self.reference
        );
        self
    }

    /// The verse list is the `[Any]` default.
    pub fn all_verses(self) -> Self {
        assert!(
            self.reference.selects_all_verses(),
            "{}: expected all verses, found [{}]",
            self.context,
            self.reference
                .verses()
                .iter()
                .map(|range| range.to_string())
                .collect::<Vec<_>>()
                .join(",")
        );
        self
    }
}

fn summarize(references: &[Reference]) -> String {
    references
        .iter()
        .map(|reference| format!("'{}'", reference))
        .collect::<Vec<_>>()
        .join(", ")
}
