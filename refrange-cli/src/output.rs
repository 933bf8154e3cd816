//! Rendering of command results in the configured output format

use refrange_config::OutputFormat;
use refrange_parser::{format_references, Reference, Token};
use serde::Serialize;
use std::fmt;

/// A resolved position, as printed by `resolve`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub chapter: usize,
    pub verse: usize,
}

impl Position {
    /// Shift zero-based indices to user-facing numbers when `one_based` is set.
    pub fn from_indices((chapter, verse): (usize, usize), one_based: bool) -> Self {
        let offset = usize::from(one_based);
        Self {
            chapter: chapter + offset,
            verse: verse + offset,
        }
    }
}

#[derive(Debug)]
pub enum OutputError {
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Json(err) => write!(f, "Error formatting JSON: {}", err),
            OutputError::Yaml(err) => write!(f, "Error formatting YAML: {}", err),
        }
    }
}

impl std::error::Error for OutputError {}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(OutputError::Json)
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    serde_yaml::to_string(value).map_err(OutputError::Yaml)
}

fn lines<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    items.into_iter().map(|item| format!("{}\n", item)).collect()
}

pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(lines(tokens)),
        OutputFormat::Json => to_json(tokens),
        OutputFormat::Yaml => to_yaml(tokens),
    }
}

pub fn render_references(
    references: &[Reference],
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", format_references(references))),
        OutputFormat::Json => to_json(references),
        OutputFormat::Yaml => to_yaml(references),
    }
}

pub fn render_positions(
    positions: &[Position],
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(lines(
            positions
                .iter()
                .map(|p| format!("{}:{}", p.chapter, p.verse)),
        )),
        OutputFormat::Json => to_json(positions),
        OutputFormat::Yaml => to_yaml(positions),
    }
}
