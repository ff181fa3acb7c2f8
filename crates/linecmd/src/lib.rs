//! Match chat-style command lines and parse their options and arguments.
//!
//! A [`Command`] is declared once (name, aliases, prefix, options, positional
//! arguments) and then asked whether a raw line invokes it:
//!
//! ```
//! use linecmd::{Command, CommandConfig};
//!
//! let mut greet = Command::new("greet", CommandConfig::new().prefix("!"))?;
//! greet.option("-l, --loud", "Shout the greeting")?.argument("<name>")?;
//!
//! let args = greet.parse("!greet -l world").unwrap();
//! assert!(args.is_present("loud"));
//! assert_eq!(args.get_str("name"), Some("world"));
//!
//! assert!(greet.parse("!wave").is_none());
//! # Ok::<(), linecmd::DefinitionError>(())
//! ```
//!
//! Parsing runs in four stages: the line is matched against the prefix and
//! names, the remainder is split into tokens (expanding `-abc` clusters),
//! option tokens are resolved against the declared options, and what is left
//! is bound to the positional arguments.

mod config;
mod definition;
mod diagnostics;
mod error;
mod help;
mod matcher;
mod matches;
mod resolve;
mod tokenizer;

use std::sync::Arc;

pub use config::{CommandConfig, TokenMode};
pub use definition::{ArgumentSpec, OptionSpec};
pub use diagnostics::Channel;
pub use error::{DefinitionError, DefinitionResult, ParseError, ParseResult};
pub use matcher::is_help_requested;
pub use matches::{ParsedArgs, Value};
pub use tokenizer::tokenize;

use diagnostics::Diagnostics;
use matcher::Matcher;

/// What a line turned out to be for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The line does not invoke this command.
    NotMatched,
    /// The line asked for help; carries the rendered help text.
    Help(String),
    Matches(ParsedArgs),
}

/// A command definition plus its diagnostics listeners.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    aliases: Vec<String>,
    token_mode: TokenMode,
    matcher: Matcher,
    options: Vec<OptionSpec>,
    arguments: Vec<ArgumentSpec>,
    diagnostics: Diagnostics,
}

impl Command {
    /// Create a command named `name`.
    ///
    /// # Errors
    ///
    /// [`DefinitionError::MissingCommandName`] when `name` is blank.
    pub fn new(name: impl Into<String>, config: CommandConfig) -> DefinitionResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DefinitionError::MissingCommandName);
        }
        let matcher = Matcher::new(&config.prefix, &name, &config.aliases);
        Ok(Self {
            name,
            aliases: config.aliases,
            token_mode: config.token_mode,
            matcher,
            options: Vec::new(),
            arguments: Vec::new(),
            diagnostics: Diagnostics::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn token_mode(&self) -> TokenMode {
        self.token_mode
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Declare an option from a flag string such as `"-o, --output []"`.
    ///
    /// See [`OptionSpec::parse`] for the accepted syntax.
    ///
    /// # Errors
    ///
    /// [`DefinitionError::InvalidFlagSyntax`] for a malformed flag string,
    /// [`DefinitionError::DuplicateOption`] when the short or long form is
    /// already declared.
    pub fn option(&mut self, flags: &str, description: &str) -> DefinitionResult<&mut Self> {
        let spec = OptionSpec::parse(flags, description)?;
        for form in [spec.short(), spec.long()].into_iter().flatten() {
            if self.options.iter().any(|o| o.matches(form)) {
                return Err(DefinitionError::DuplicateOption(form.to_string()));
            }
        }
        self.options.push(spec);
        Ok(self)
    }

    /// Declare a positional argument, `"<name>"` (required) or `"[name]"`.
    ///
    /// Required and optional arguments may be declared in any order; required
    /// ones are always bound first.
    pub fn argument(&mut self, spec: &str) -> DefinitionResult<&mut Self> {
        let spec = ArgumentSpec::parse(spec)?;
        if self.arguments.iter().any(|a| a.name() == spec.name()) {
            return Err(DefinitionError::DuplicateArgument(spec.name().to_string()));
        }
        self.arguments.push(spec);
        Ok(self)
    }

    /// Register a listener for help text ([`Channel::Info`]), parse errors
    /// ([`Channel::Error`]) or both.
    pub fn on<F>(&mut self, channel: Channel, listener: F) -> &mut Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.diagnostics.register(channel, Arc::new(listener));
        self
    }

    /// Render the help text.
    pub fn help(&self) -> String {
        help::render(&self.name, &self.aliases, &self.options, &self.arguments)
    }

    /// Parse `line`, reporting help and errors to the registered listeners.
    ///
    /// Returns `None` when the line does not invoke this command, when it
    /// asks for help, and when it fails to parse.
    pub fn parse(&self, line: &str) -> Option<ParsedArgs> {
        match self.try_parse(line) {
            Ok(ParseOutcome::Matches(args)) => Some(args),
            Ok(ParseOutcome::NotMatched) => None,
            Ok(ParseOutcome::Help(text)) => {
                self.diagnostics.info(&text);
                None
            }
            Err(err) => {
                self.diagnostics.error(&err.message());
                None
            }
        }
    }

    /// Parse `line` without notifying listeners.
    pub fn try_parse(&self, line: &str) -> ParseResult<ParseOutcome> {
        let Some(remainder) = self.matcher.remainder(line) else {
            return Ok(ParseOutcome::NotMatched);
        };

        if is_help_requested(remainder, self.token_mode) {
            tracing::debug!(command = %self.name, "help requested");
            return Ok(ParseOutcome::Help(self.help()));
        }

        let tokens = tokenize(remainder, self.token_mode);
        tracing::debug!(command = %self.name, tokens = tokens.len(), "line matched");

        let mut args = ParsedArgs::default();
        let outcome = resolve::resolve_options(&tokens, &self.options, self.token_mode, &mut args)
            .and_then(|positionals| {
                resolve::resolve_arguments(&positionals, &self.arguments, &mut args)
            });
        if let Err(err) = outcome {
            tracing::debug!(command = %self.name, error = %err, "parse failed");
            return Err(err);
        }

        Ok(ParseOutcome::Matches(args))
    }
}
