//! Parser
//!
//!     Recursive descent over the token stream, one function per grammar rule:
//!
//!         references := reference ( ';'? reference )* ';'?
//!         reference  := rangelist ( ':' rangelist )?
//!         rangelist  := range ( ',' range )*
//!         range      := '*' | NUMBER | NUMBER '-' '*' | NUMBER '-' NUMBER | NUMBER '+' NUMBER
//!
//!     Separators between references are optional: when a reference ends and the next token
//!     is a number or `*`, the next reference starts right there. That is how `3:45 2:232`
//!     reads as two references, since blanks never reach the parser.
//!
//!     The parser holds exactly one token of lookahead (`token`). Every rule is entered with
//!     `token` at its first token and leaves `token` at the first token it did not consume.
//!     The first error aborts the whole parse.

use crate::refrange::ast::{Range, Reference};
use crate::refrange::error::ParseError;
use crate::refrange::lexing::Lexer;
use crate::refrange::token::{Token, TokenKind};
use tracing::debug;

/// Parse a reference expression into its list of References.
///
/// Empty or blank input yields an empty list.
pub fn parse_references(input: &str) -> Result<Vec<Reference>, ParseError> {
    let references = Parser::new(input)?.parse()?;
    debug!(input, count = references.len(), "parsed reference list");
    Ok(references)
}

pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    token: Token,
}

impl<'a> Parser<'a> {
    /// Create a parser primed with the first token of `input`.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token()?;
        Ok(Self {
            input,
            lexer,
            token,
        })
    }

    /// Consume the whole token stream.
    pub fn parse(mut self) -> Result<Vec<Reference>, ParseError> {
        let mut references = Vec::new();
        while !self.token.is_end() {
            references.push(self.reference()?);
            match self.token.kind {
                TokenKind::Number(_) | TokenKind::Wildcard | TokenKind::EndOfInput => {}
                TokenKind::Semicolon => self.advance()?,
                found => {
                    return Err(self.error(format!(
                        "expected number, semicolon or end of input, but found {}",
                        found
                    )))
                }
            }
        }
        Ok(references)
    }

    fn reference(&mut self) -> Result<Reference, ParseError> {
        let chapters = self.range_list()?;
        let verses = if self.token.kind == TokenKind::Colon {
            self.advance()?;
            self.range_list()?
        } else {
            Vec::new()
        };
        Ok(Reference::new(chapters, verses))
    }

    fn range_list(&mut self) -> Result<Vec<Range>, ParseError> {
        let mut ranges = vec![self.range()?];
        while self.token.kind == TokenKind::Comma {
            self.advance()?;
            ranges.push(self.range()?);
        }
        Ok(ranges)
    }

    fn range(&mut self) -> Result<Range, ParseError> {
        let left = match self.token.kind {
            TokenKind::Wildcard => {
                self.advance()?;
                return Ok(Range::Any);
            }
            TokenKind::Number(left) => left,
            _ => return Err(self.range_expected()),
        };
        self.advance()?;

        match self.token.kind {
            TokenKind::Dash => {
                self.advance()?;
                let range = match self.token.kind {
                    TokenKind::Number(right) => Range::NumberToNumber { left, right },
                    TokenKind::Wildcard => Range::NumberToAny { left },
                    _ => return Err(self.range_expected()),
                };
                self.advance()?;
                Ok(range)
            }
            TokenKind::Plus => {
                self.advance()?;
                let TokenKind::Number(count) = self.token.kind else {
                    return Err(self.range_expected());
                };
                let right = left
                    .checked_add(count)
                    .ok_or_else(|| self.error("number too large"))?;
                self.advance()?;
                Ok(Range::NumberToNumber { left, right })
            }
            // the number stands alone; the current token belongs to the caller
            _ => Ok(Range::Number { left }),
        }
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    fn range_expected(&self) -> ParseError {
        self.error(format!("number or '*' expected, not {}", self.token.kind))
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::grammar(message, self.input, self.token.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refrange::error::ParseErrorKind;

    fn num(left: u32) -> Range {
        Range::Number { left }
    }

    fn span(left: u32, right: u32) -> Range {
        Range::NumberToNumber { left, right }
    }

    #[test]
    fn test_wildcard() {
        let refs = parse_references("*").unwrap();
        assert_eq!(refs, vec![Reference::new(vec![Range::Any], vec![Range::Any])]);
    }

    #[test]
    fn test_chapter_and_verse() {
        let refs = parse_references("2:44").unwrap();
        assert_eq!(refs, vec![Reference::new(vec![num(2)], vec![num(44)])]);
    }

    #[test]
    fn test_plus_is_normalized() {
        let refs = parse_references("5+3").unwrap();
        assert_eq!(refs[0].chapters(), &[span(5, 8)]);
    }

    #[test]
    fn test_number_to_any() {
        let refs = parse_references("12-*").unwrap();
        assert_eq!(refs[0].chapters(), &[Range::NumberToAny { left: 12 }]);
    }

    #[test]
    fn test_semicolon_separated() {
        let refs = parse_references("2,3-4;49").unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].chapters(), &[num(2), span(3, 4)]);
        assert_eq!(refs[1].chapters(), &[num(49)]);
    }

    #[test]
    fn test_blank_separated() {
        let refs = parse_references("3:45 2:232").unwrap();
        assert_eq!(
            refs,
            vec![
                Reference::new(vec![num(3)], vec![num(45)]),
                Reference::new(vec![num(2)], vec![num(232)]),
            ]
        );
    }

    #[test]
    fn test_trailing_semicolon() {
        let refs = parse_references("*:3-4,9,12-*;").unwrap();
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_references("").unwrap(), vec![]);
        assert_eq!(parse_references("   ").unwrap(), vec![]);
    }

    #[test]
    fn test_dash_without_number() {
        let err = parse_references("2-").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Grammar);
        assert_eq!(err.position, 2);
        assert_eq!(err.message, "number or '*' expected, not end of input");
    }

    #[test]
    fn test_plus_requires_number() {
        let err = parse_references("2+*").unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(err.message, "number or '*' expected, not wildcard");
    }

    #[test]
    fn test_plus_overflow() {
        let err = parse_references("4294967295+1").unwrap_err();
        assert_eq!(err.message, "number too large");
        assert_eq!(err.position, 11);
    }

    #[test]
    fn test_unexpected_token_after_reference() {
        let err = parse_references("2:3:4").unwrap_err();
        assert_eq!(err.position, 3);
        assert_eq!(
            err.message,
            "expected number, semicolon or end of input, but found colon"
        );
    }

    #[test]
    fn test_double_semicolon() {
        let err = parse_references("2;;3").unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(err.message, "number or '*' expected, not semicolon");
    }

    #[test]
    fn test_lex_error_surfaces_from_parser() {
        let err = parse_references("2:#3").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Lex);
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_malformed_span_survives() {
        let refs = parse_references("9-3").unwrap();
        assert_eq!(refs[0].chapters(), &[span(9, 3)]);
    }
}
