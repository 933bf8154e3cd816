//! Resolution
//!
//!     Expands parsed ranges into zero-based chapter and verse indices. The resolver does not
//!     know the document; the chapter count and per-chapter verse counts come from a [Bounds]
//!     implementation supplied by the caller.
//!
//! Chapter expansion
//!
//!     A chapter number `n` is in bounds iff `1 <= n <= chapter_count`. `*` selects every
//!     chapter, a single number selects itself when in bounds, `N-*` runs from `N` to the last
//!     chapter when `N` is in bounds, and `N-M` requires both ends in bounds.
//!
//! Verse expansion
//!
//!     Verses are clamped rather than checked: `N` selects itself when `N <= V`, `N-*` runs to
//!     the last verse, and `N-M` is cut at `min(M, V)`. Verse numbers are not checked against
//!     1 the way chapter numbers are. The one consequence is verse `0`, whose index would be
//!     -1; that index is dropped, so `0` selects nothing and `0-5` selects the same verses as
//!     `1-5`.
//!
//! Every range expands to a contiguous run of indices. Runs are concatenated in range-list
//! order with no deduplication, so overlapping ranges produce repeated indices. Out-of-bounds
//! ranges contribute nothing and are not errors; a `debug` event records each one.

use crate::refrange::ast::{Range, Reference};
use std::ops;
use tracing::debug;

/// Chapter and verse counts of the document being addressed
pub trait Bounds {
    fn chapter_count(&self) -> usize;

    /// Number of verses in the chapter at zero-based `chapter`.
    fn verse_count(&self, chapter: usize) -> usize;
}

impl<B: Bounds + ?Sized> Bounds for &B {
    fn chapter_count(&self) -> usize {
        (**self).chapter_count()
    }

    fn verse_count(&self, chapter: usize) -> usize {
        (**self).verse_count(chapter)
    }
}

/// Bounds backed by a table of verse counts, one entry per chapter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseTable {
    verse_counts: Vec<usize>,
}

impl VerseTable {
    pub fn new(verse_counts: Vec<usize>) -> Self {
        Self { verse_counts }
    }

    pub fn verse_counts(&self) -> &[usize] {
        &self.verse_counts
    }
}

impl From<Vec<usize>> for VerseTable {
    fn from(verse_counts: Vec<usize>) -> Self {
        Self::new(verse_counts)
    }
}

impl Bounds for VerseTable {
    fn chapter_count(&self) -> usize {
        self.verse_counts.len()
    }

    /// Chapters past the end of the table have no verses.
    fn verse_count(&self, chapter: usize) -> usize {
        self.verse_counts.get(chapter).copied().unwrap_or(0)
    }
}

/// Bounds from a chapter count and a verse-count lookup
pub struct FnBounds<F> {
    chapter_count: usize,
    verse_count: F,
}

impl<F> FnBounds<F>
where
    F: Fn(usize) -> usize,
{
    pub fn new(chapter_count: usize, verse_count: F) -> Self {
        Self {
            chapter_count,
            verse_count,
        }
    }
}

impl<F> Bounds for FnBounds<F>
where
    F: Fn(usize) -> usize,
{
    fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    fn verse_count(&self, chapter: usize) -> usize {
        (self.verse_count)(chapter)
    }
}

impl Range {
    /// Zero-based chapter indices selected by this range.
    pub fn chapter_span(&self, chapter_count: usize) -> ops::Range<usize> {
        let in_bounds = |n: u32| (1..=chapter_count).contains(&(n as usize));
        match *self {
            Range::Any => 0..chapter_count,
            Range::Number { left } if in_bounds(left) => left as usize - 1..left as usize,
            Range::NumberToAny { left } if in_bounds(left) => left as usize - 1..chapter_count,
            Range::NumberToNumber { left, right } if in_bounds(left) && in_bounds(right) => {
                left as usize - 1..(right as usize).max(left as usize - 1)
            }
            Range::Number { .. } | Range::NumberToAny { .. } | Range::NumberToNumber { .. } => {
                0..0
            }
        }
    }

    /// Zero-based verse indices selected by this range in a chapter of `verse_count` verses.
    pub fn verse_span(&self, verse_count: usize) -> ops::Range<usize> {
        let first = |left: u32| (left as usize).saturating_sub(1);
        match *self {
            Range::Any => 0..verse_count,
            Range::Number { left: 0 } => 0..0,
            Range::Number { left } if left as usize <= verse_count => {
                left as usize - 1..left as usize
            }
            Range::Number { .. } => 0..0,
            Range::NumberToAny { left } => first(left)..verse_count.max(first(left)),
            Range::NumberToNumber { left, right } => {
                let end = (right as usize).min(verse_count);
                first(left)..end.max(first(left))
            }
        }
    }
}

impl Reference {
    /// Zero-based chapter indices, in range-list order, duplicates preserved.
    pub fn chapter_indices(&self, bounds: &impl Bounds) -> Vec<usize> {
        let chapter_count = bounds.chapter_count();
        let mut indices = Vec::new();
        for range in self.chapters() {
            let span = range.chapter_span(chapter_count);
            if span.is_empty() {
                debug!(%range, chapter_count, "chapter range selects nothing");
            }
            indices.extend(span);
        }
        indices
    }

    /// Zero-based verse indices for the chapter at zero-based `chapter`.
    pub fn verse_indices(&self, chapter: usize, bounds: &impl Bounds) -> Vec<usize> {
        let verse_count = bounds.verse_count(chapter);
        let mut indices = Vec::new();
        for range in self.verses() {
            let span = range.verse_span(verse_count);
            if span.is_empty() {
                debug!(%range, chapter, verse_count, "verse range selects nothing");
            }
            indices.extend(span);
        }
        indices
    }

    /// Every selected `(chapter, verse)` index pair, chapter-major.
    pub fn chapter_verse_pairs(&self, bounds: &impl Bounds) -> Vec<(usize, usize)> {
        self.chapter_indices(bounds)
            .into_iter()
            .flat_map(|chapter| {
                self.verse_indices(chapter, bounds)
                    .into_iter()
                    .map(move |verse| (chapter, verse))
            })
            .collect()
    }
}

/// Resolve a whole reference list into `(chapter, verse)` index pairs, reference by reference.
pub fn resolve_references(references: &[Reference], bounds: &impl Bounds) -> Vec<(usize, usize)> {
    references
        .iter()
        .flat_map(|reference| reference.chapter_verse_pairs(bounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refrange::parsing::parse_references;

    fn single(input: &str) -> Reference {
        let mut refs = parse_references(input).expect("input to parse");
        assert_eq!(refs.len(), 1, "expected one reference in {:?}", input);
        refs.remove(0)
    }

    fn uniform(chapters: usize, verses: usize) -> VerseTable {
        VerseTable::new(vec![verses; chapters])
    }

    #[test]
    fn test_any_chapter() {
        assert_eq!(single("*").chapter_indices(&uniform(3, 1)), vec![0, 1, 2]);
    }

    #[test]
    fn test_single_chapter() {
        let reference = single("2:44");
        assert_eq!(reference.chapter_indices(&uniform(3, 50)), vec![1]);
        assert_eq!(reference.verse_indices(1, &uniform(3, 50)), vec![43]);
    }

    #[test]
    fn test_chapter_span() {
        assert_eq!(single("5-8").chapter_indices(&uniform(10, 1)), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_chapter_to_end() {
        assert_eq!(single("8-*").chapter_indices(&uniform(10, 1)), vec![7, 8, 9]);
    }

    #[test]
    fn test_out_of_bounds_chapters_select_nothing() {
        let bounds = uniform(10, 1);
        assert!(single("999").chapter_indices(&bounds).is_empty());
        assert!(single("0").chapter_indices(&bounds).is_empty());
        assert!(single("11-*").chapter_indices(&bounds).is_empty());
        // both ends must be in bounds; no clamping for chapters
        assert!(single("8-11").chapter_indices(&bounds).is_empty());
    }

    #[test]
    fn test_reversed_span_selects_nothing() {
        assert!(single("9-3").chapter_indices(&uniform(10, 1)).is_empty());
        assert!(single("1:9-3").verse_indices(0, &uniform(1, 10)).is_empty());
    }

    #[test]
    fn test_verse_list() {
        let reference = single("*:3-4,9,12-*");
        let expected: Vec<usize> = [2, 3, 8].into_iter().chain(11..20).collect();
        assert_eq!(reference.verse_indices(0, &uniform(1, 20)), expected);
    }

    #[test]
    fn test_verse_span_is_clamped() {
        assert_eq!(single("1:5-99").verse_indices(0, &uniform(1, 7)), vec![4, 5, 6]);
    }

    #[test]
    fn test_verse_number_past_end() {
        assert!(single("1:8").verse_indices(0, &uniform(1, 7)).is_empty());
        assert!(single("1:8-*").verse_indices(0, &uniform(1, 7)).is_empty());
    }

    #[test]
    fn test_verse_zero_is_dropped() {
        let bounds = uniform(1, 5);
        assert!(single("1:0").verse_indices(0, &bounds).is_empty());
        assert_eq!(single("1:0-2").verse_indices(0, &bounds), vec![0, 1]);
        assert_eq!(single("1:0-*").verse_indices(0, &bounds), (0..5).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let reference = single("2,1-3,2:1,1");
        let bounds = uniform(3, 4);
        assert_eq!(reference.chapter_indices(&bounds), vec![1, 0, 1, 2, 1]);
        assert_eq!(reference.verse_indices(0, &bounds), vec![0, 0]);
    }

    #[test]
    fn test_verse_count_depends_on_chapter() {
        let bounds = VerseTable::new(vec![2, 4]);
        let reference = single("*:2-*");
        assert_eq!(reference.verse_indices(0, &bounds), vec![1]);
        assert_eq!(reference.verse_indices(1, &bounds), vec![1, 2, 3]);
        assert!(reference.verse_indices(7, &bounds).is_empty());
    }

    #[test]
    fn test_fn_bounds() {
        let bounds = FnBounds::new(3, |chapter| chapter + 1);
        let reference = single("*");
        assert_eq!(
            reference.chapter_verse_pairs(&bounds),
            vec![(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_resolve_references() {
        let refs = parse_references("2:1-2; 1:3").unwrap();
        let pairs = resolve_references(&refs, &uniform(2, 3));
        assert_eq!(pairs, vec![(1, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_one_reference_many_tables() {
        let reference = single("1:3-*");
        assert_eq!(reference.verse_indices(0, &uniform(1, 4)), vec![2, 3]);
        assert_eq!(reference.verse_indices(0, &uniform(1, 6)), vec![2, 3, 4, 5]);
    }
}
