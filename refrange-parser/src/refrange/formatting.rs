//! Canonical form
//!
//!     Renders Ranges and References back into expression syntax. The output is canonical:
//!     `N+K` comes out as `N-M`, separators are normalized, and a verse list of exactly `*`
//!     is omitted (`2:*` and `2` parse to the same Reference). Parsing the canonical form
//!     yields an equal reference list.

use crate::refrange::ast::{Range, Reference};
use std::fmt;

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::Any => f.write_str("*"),
            Range::Number { left } => write!(f, "{}", left),
            Range::NumberToAny { left } => write!(f, "{}-*", left),
            Range::NumberToNumber { left, right } => write!(f, "{}-{}", left, right),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, ranges: &[Range]) -> fmt::Result {
    for (i, range) in ranges.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", range)?;
    }
    Ok(())
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.chapters())?;
        if !self.selects_all_verses() {
            f.write_str(":")?;
            write_list(f, self.verses())?;
        }
        Ok(())
    }
}

/// Render a reference list, references separated by `; `.
pub fn format_references(references: &[Reference]) -> String {
    references
        .iter()
        .map(|reference| reference.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
