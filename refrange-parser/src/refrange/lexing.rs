//! Lexer
//!
//!     Tokenization is done by the logos lexer library. Logos handles the character-level
//!     work (skipping blanks, grouping digit runs, recognizing the six symbols); [Lexer] wraps
//!     it to add what the grammar needs on top:
//!
//!         - positions in the convention the rest of the crate uses (numbers are positioned at
//!           their last digit, symbols at their own offset)
//!         - a single EndOfInput token once the input runs out
//!         - conversion of logos errors into [ParseError]s pointing at the offending character
//!
//!     The cursor lives inside the [Lexer] value. Two lexers over the same input never share
//!     state, and a fresh lexer always starts at offset 0.

use crate::refrange::error::ParseError;
use crate::refrange::token::{Token, TokenKind};
use logos::Logos;
use tracing::trace;

/// Why logos rejected a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexFailure {
    #[default]
    IllegalCharacter,
    NumberTooLarge,
}

fn parse_number(lex: &mut logos::Lexer<RawToken>) -> Result<u32, LexFailure> {
    lex.slice()
        .parse::<u32>()
        .map_err(|_| LexFailure::NumberTooLarge)
}

/// Raw tokens as produced by logos, before positions are assigned
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
#[logos(error = LexFailure)]
enum RawToken {
    #[token("-")]
    Dash,
    #[token("+")]
    Plus,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("*")]
    Wildcard,
    #[regex(r"[0-9]+", parse_number)]
    Number(u32),
}

impl RawToken {
    fn into_kind(self) -> TokenKind {
        match self {
            RawToken::Dash => TokenKind::Dash,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Wildcard => TokenKind::Wildcard,
            RawToken::Number(value) => TokenKind::Number(value),
        }
    }
}

/// Lazy token stream over a reference expression
///
/// As an iterator it yields every token up to and including EndOfInput, or stops right
/// after the first error.
pub struct Lexer<'a> {
    input: &'a str,
    inner: logos::Lexer<'a, RawToken>,
    exhausted: bool,
    fused: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            inner: RawToken::lexer(input),
            exhausted: false,
            fused: false,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Scan the next token.
    ///
    /// Once the input is exhausted this keeps returning EndOfInput, so the parser can look
    /// at the end marker as often as it needs to.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        if self.exhausted {
            return Ok(self.end_token());
        }
        let token = match self.inner.next() {
            None => {
                self.exhausted = true;
                self.end_token()
            }
            Some(Ok(raw)) => {
                let span = self.inner.span();
                let position = match raw {
                    RawToken::Number(_) => span.end - 1,
                    _ => span.start,
                };
                Token::new(raw.into_kind(), position)
            }
            Some(Err(failure)) => return Err(self.failure_to_error(failure)),
        };
        trace!(%token, "scanned token");
        Ok(token)
    }

    fn end_token(&self) -> Token {
        Token::new(TokenKind::EndOfInput, self.input.len())
    }

    fn failure_to_error(&self, failure: LexFailure) -> ParseError {
        let span = self.inner.span();
        match failure {
            LexFailure::IllegalCharacter => {
                let found = self.inner.slice().chars().next().unwrap_or('\0');
                ParseError::lex(
                    format!("illegal token found: '{}'", found.escape_debug()),
                    self.input,
                    span.start,
                )
            }
            LexFailure::NumberTooLarge => {
                ParseError::lex("number too large", self.input, span.end - 1)
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if !token.is_end() => {}
            _ => self.fused = true,
        }
        Some(result)
    }
}

/// Tokenize the whole input, including the trailing EndOfInput token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(input).collect()
}
