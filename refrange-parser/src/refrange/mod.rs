//! Main module for refrange library functionality

pub mod ast;
pub mod error;
pub mod formatting;
pub mod lexing;
pub mod parsing;
pub mod resolving;
pub mod testing;
pub mod token;
