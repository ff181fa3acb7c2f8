//! Error types.
//!
//! Definition errors come from building a [`Command`](crate::Command) and are
//! returned to the caller. Parse errors come from a single input line; the
//! reporting entry point turns them into error-channel messages.

use thiserror::Error;

/// A command definition could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("a command needs a non-empty name")]
    MissingCommandName,

    #[error("invalid option flags '{0}' (expected e.g. \"-f\", \"-f, --foo\" or \"--foo []\")")]
    InvalidFlagSyntax(String),

    #[error("option '{0}' is already defined")]
    DuplicateOption(String),

    #[error("invalid argument '{0}' (expected \"<name>\" or \"[name]\")")]
    InvalidArgumentSyntax(String),

    #[error("argument '{0}' is already defined")]
    DuplicateArgument(String),

    #[error("unknown diagnostics channel '{0}' (expected info, error or all)")]
    UnknownChannel(String),
}

/// A matched line could not be parsed against the command definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} requires an argument")]
    MissingOptionArgument(String),

    #[error("missing required {}: {}", plural(.0.len()), format_missing(.0))]
    MissingArguments(Vec<String>),

    #[error("too many arguments: {}", format_tokens(.0))]
    TooManyArguments(Vec<String>),
}

impl ParseError {
    /// Human-readable message, as sent to the error channel.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "argument" } else { "arguments" }
}

fn format_missing(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("<{n}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_tokens(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| format!("{t:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type DefinitionResult<T> = Result<T, DefinitionError>;

pub type ParseResult<T> = Result<T, ParseError>;
