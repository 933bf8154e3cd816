//! Token types shared by the lexer and the parser.
//!
//!     A reference expression has a tiny vocabulary: decimal numbers and the six symbols
//!     `- + , : ; *`. Whitespace never becomes a token. The lexer terminates every stream
//!     with a single [TokenKind::EndOfInput] so the parser can treat the end of the input
//!     as an ordinary lookahead instead of a bounds check.
//!
//!     Tokens carry the zero-based offset of their source text, which is what error
//!     messages point at. For numbers this is the offset of the LAST digit of the run.

use serde::Serialize;
use std::fmt;

/// The kind of a token. Only numbers carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Dash,
    Plus,
    Comma,
    Colon,
    Semicolon,
    Wildcard,
    Number(u32),
    EndOfInput,
}

impl TokenKind {
    /// Name used in diagnostics ("number or '*' expected, not colon").
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Dash => "dash",
            TokenKind::Plus => "plus",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Wildcard => "wildcard",
            TokenKind::Number(_) => "number",
            TokenKind::EndOfInput => "end of input",
        }
    }

    /// The numeric value, present only for [TokenKind::Number].
    pub fn value(&self) -> Option<u32> {
        match self {
            TokenKind::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit and where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number(value) => write!(f, "number({})@{}", value, self.position),
            kind => write!(f, "{}@{}", kind, self.position),
        }
    }
}
