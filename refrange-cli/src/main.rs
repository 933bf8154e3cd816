//! Command-line interface for refrange
//! This binary parses reference range expressions and resolves them against a verse table.
//!
//! Usage:
//!   refrange tokens `<expr>`                 - List the tokens of an expression
//!   refrange parse `<expr>`                  - Print the parsed references (canonical form by default)
//!   refrange resolve `<expr>`                - Print the selected chapter:verse positions
//!
//! Global options layer over the embedded defaults: `--config <file>`, `--verse-counts 7,286,...`,
//! `--format text|json|yaml`, `--zero-based`, `--log-level <filter>`.

mod logging;
mod output;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use output::{OutputError, Position};
use refrange_config::{Loader, RefrangeConfig};
use refrange_parser::{parse_references, resolve_references, tokenize, Bounds, ParseError};
use std::fmt;
use tracing::{debug, warn};

/// Errors that end a CLI run with a non-zero status
#[derive(Debug)]
enum CliError {
    Parse(ParseError),
    Config(config::ConfigError),
    Output(OutputError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Parse(err) => write!(f, "{}", err.render()),
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Output(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        CliError::Parse(err)
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<OutputError> for CliError {
    fn from(err: OutputError) -> Self {
        CliError::Output(err)
    }
}

fn expression_arg() -> Arg {
    Arg::new("expression")
        .help("Reference expression, e.g. '2:44', '5-8:19-20' or '*:3-4,9,12-*'")
        .required(true)
        .index(1)
}

fn build_command() -> Command {
    Command::new("refrange")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and resolve chapter:verse reference ranges")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verse-counts")
                .long("verse-counts")
                .global(true)
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .action(ArgAction::Append)
                .help("Verses per chapter, comma separated (overrides document.verse_counts)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .value_parser(["text", "json", "yaml"])
                .help("Output format (overrides output.format)"),
        )
        .arg(
            Arg::new("zero-based")
                .long("zero-based")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print zero-based indices instead of chapter and verse numbers"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter, e.g. 'debug' (defaults to RUST_LOG, then 'warn')"),
        )
        .subcommand(
            Command::new("tokens")
                .about("List the tokens of an expression")
                .arg(expression_arg()),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an expression and print its references")
                .arg(expression_arg()),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve an expression against the verse table")
                .arg(expression_arg()),
        )
}

fn main() {
    let matches = build_command().get_matches();
    let Some((name, sub)) = matches.subcommand() else {
        unreachable!("clap requires a subcommand")
    };
    // global args are propagated down, so everything is read from the subcommand
    logging::init_logging(sub.get_one::<String>("log-level").map(String::as_str));

    match run_subcommand(name, sub) {
        Ok(text) => print!("{}", text),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn run_subcommand(name: &str, matches: &ArgMatches) -> Result<String, CliError> {
    let config = load_config(matches)?;
    let input = expression(matches);
    match name {
        "tokens" => handle_tokens_command(input, &config),
        "parse" => handle_parse_command(input, &config),
        "resolve" => handle_resolve_command(input, &config),
        _ => unreachable!("unknown subcommand {}", name),
    }
}

fn expression(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("expression")
        .map(String::as_str)
        .unwrap_or_default()
}

/// Layer the config file and flag overrides over the defaults.
fn load_config(matches: &ArgMatches) -> Result<RefrangeConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path = path.as_str(), "loading configuration file");
        loader = loader.with_file(path);
    }
    if let Some(counts) = matches.get_many::<usize>("verse-counts") {
        let counts: Vec<usize> = counts.copied().collect();
        loader = loader.with_verse_counts(&counts)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("zero-based") {
        loader = loader.set_override("output.one_based", false)?;
    }
    Ok(loader.build()?)
}

/// Handle the tokens command
fn handle_tokens_command(expression: &str, config: &RefrangeConfig) -> Result<String, CliError> {
    let tokens = tokenize(expression)?;
    Ok(output::render_tokens(&tokens, config.output.format)?)
}

/// Handle the parse command
fn handle_parse_command(expression: &str, config: &RefrangeConfig) -> Result<String, CliError> {
    let references = parse_references(expression)?;
    Ok(output::render_references(&references, config.output.format)?)
}

/// Handle the resolve command
fn handle_resolve_command(expression: &str, config: &RefrangeConfig) -> Result<String, CliError> {
    let references = parse_references(expression)?;
    let table = config.verse_table();
    if table.chapter_count() == 0 {
        warn!("no verse table configured; every reference resolves to nothing");
    }
    let positions: Vec<Position> = resolve_references(&references, &table)
        .into_iter()
        .map(|pair| Position::from_indices(pair, config.output.one_based))
        .collect();
    debug!(count = positions.len(), "resolved positions");
    Ok(output::render_positions(&positions, config.output.format)?)
}
