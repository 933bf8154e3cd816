//! Intermediate form of a parsed expression
//!
//!     A [Reference] is what the parser produces and what the resolver consumes. It is built
//!     once and never mutated; resolving it against a bounds table borrows it, so the same
//!     Reference can be resolved against any number of tables.
//!
//!     Numbers in a [Range] are the user-facing 1-based chapter or verse numbers. Nothing at
//!     this level checks them: `0`, or a span whose right end is below its left end, parses
//!     fine and is dealt with (by producing no indices) at resolution time.

use serde::{Deserialize, Serialize};

/// An interval over chapter or verse numbers, prior to bounds resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Range {
    /// `*`
    Any,
    /// `N`
    Number { left: u32 },
    /// `N-*`
    NumberToAny { left: u32 },
    /// `N-M`, and `N+K` normalized to `N-(N+K)`
    NumberToNumber { left: u32, right: u32 },
}

impl Range {
    /// The left-hand number, if the range has one.
    pub fn left(&self) -> Option<u32> {
        match *self {
            Range::Any => None,
            Range::Number { left }
            | Range::NumberToAny { left }
            | Range::NumberToNumber { left, .. } => Some(left),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Range::Any)
    }
}

/// One parsed selection: a chapter range list and a verse range list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawReference")]
pub struct Reference {
    chapters: Vec<Range>,
    verses: Vec<Range>,
}

impl Reference {
    /// Build a reference. An empty verse list means "all verses" and is stored as `[Any]`.
    ///
    /// The parser always supplies at least one chapter range.
    pub fn new(chapters: Vec<Range>, verses: Vec<Range>) -> Self {
        let verses = if verses.is_empty() {
            vec![Range::Any]
        } else {
            verses
        };
        Self { chapters, verses }
    }

    pub fn chapters(&self) -> &[Range] {
        &self.chapters
    }

    pub fn verses(&self) -> &[Range] {
        &self.verses
    }

    /// True when the verse list selects every verse and nothing else.
    pub fn selects_all_verses(&self) -> bool {
        matches!(self.verses.as_slice(), [Range::Any])
    }
}

/// Unchecked wire shape of a [Reference].
#[derive(Deserialize)]
struct RawReference {
    chapters: Vec<Range>,
    #[serde(default)]
    verses: Vec<Range>,
}

impl TryFrom<RawReference> for Reference {
    type Error = String;

    fn try_from(raw: RawReference) -> Result<Self, Self::Error> {
        if raw.chapters.is_empty() {
            return Err("a reference needs at least one chapter range".to_string());
        }
        Ok(Reference::new(raw.chapters, raw.verses))
    }
}
