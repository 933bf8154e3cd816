//! Parse errors
//!
//!     Lexing and parsing share one error type. Both stop at the first problem: there is no
//!     recovery and no partial reference list. The error keeps the whole input so callers can
//!     point at the offending character without holding on to the source themselves.

use serde::Serialize;
use std::fmt;

/// Which stage rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// An illegal character, or a number that does not fit
    Lex,
    /// A token sequence the grammar does not accept
    Grammar,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Lex => f.write_str("Lex"),
            ParseErrorKind::Grammar => f.write_str("Grammar"),
        }
    }
}

/// Error raised while lexing or parsing a reference expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// The complete original input
    pub input: String,
    /// Zero-based offset of the offending character or token
    pub position: usize,
}

impl ParseError {
    pub(crate) fn lex(message: impl Into<String>, input: &str, position: usize) -> Self {
        Self {
            kind: ParseErrorKind::Lex,
            message: message.into(),
            input: input.to_string(),
            position,
        }
    }

    pub(crate) fn grammar(message: impl Into<String>, input: &str, position: usize) -> Self {
        Self {
            kind: ParseErrorKind::Grammar,
            message: message.into(),
            input: input.to_string(),
            position,
        }
    }

    /// Render the input with a caret under the offending position:
    ///
    ///     2:#3
    ///       ^
    ///     Error in reference list: illegal token found: '#'
    pub fn render(&self) -> String {
        // position is a byte offset, the caret column is in chars
        let column = self
            .input
            .get(..self.position)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(self.position);
        format!(
            "{}\n{}^\nError in reference list: {}",
            self.input,
            " ".repeat(column),
            self.message
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error at position {}: {}",
            self.kind, self.position, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for String {
    fn from(err: ParseError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_position() {
        let err = ParseError::grammar("number or '*' expected, not end of input", "2-", 2);
        assert_eq!(
            err.to_string(),
            "Grammar error at position 2: number or '*' expected, not end of input"
        );
    }

    #[test]
    fn test_render_points_at_position() {
        let err = ParseError::lex("illegal token found: '#'", "2:#3", 2);
        insta::assert_snapshot!(err.render(), @r"
        2:#3
          ^
        Error in reference list: illegal token found: '#'
        ");
    }

    #[test]
    fn test_render_at_end_of_input() {
        let err = ParseError::grammar("number or '*' expected, not end of input", "5-", 2);
        let rendered = err.render();
        let caret_line = rendered.lines().nth(1).expect("caret line");
        assert_eq!(caret_line, "  ^");
    }
}
