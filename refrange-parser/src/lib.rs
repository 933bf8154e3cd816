//! # refrange
//!
//! A parser and resolver for chapter:verse reference range expressions.
//!
//! File Layout
//!
//!     src/refrange
//!       ├── token       Token kinds and positioned tokens
//!       ├── lexing      The logos-backed lexer producing a lazy token stream
//!       ├── parsing     Recursive descent over the token stream into References
//!       ├── ast         Range and Reference, the immutable intermediate form
//!       ├── resolving   Expansion of References into zero-based indices under Bounds
//!       ├── formatting  Canonical re-serialization of References
//!       ├── error       ParseError and its caret rendering
//!       └── testing     Fluent assertions for parsed References
//!
//! The pipeline runs strictly lexing -> parsing -> resolving. Parsing and resolving are
//! decoupled: a parsed [Reference](refrange::ast::Reference) can be resolved any number of
//! times against different bounds tables without re-parsing.
//!
//! For testing guidelines, see the [testing module](refrange::testing).

pub mod refrange;

pub use refrange::ast::{Range, Reference};
pub use refrange::error::{ParseError, ParseErrorKind};
pub use refrange::formatting::format_references;
pub use refrange::lexing::{tokenize, Lexer};
pub use refrange::parsing::{parse_references, Parser};
pub use refrange::resolving::{resolve_references, Bounds, FnBounds, VerseTable};
pub use refrange::token::{Token, TokenKind};
