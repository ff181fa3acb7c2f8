//! Option and argument declarations.

use crate::error::{DefinitionError, DefinitionResult};

/// A declared option, e.g. `-o, --output [file]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short: Option<String>,
    long: Option<String>,
    takes_argument: bool,
    value_name: Option<String>,
    description: String,
}

impl OptionSpec {
    /// Short form including the dash (`-o`).
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// Long form including both dashes (`--output`).
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn takes_argument(&self) -> bool {
        self.takes_argument
    }

    pub fn value_name(&self) -> Option<&str> {
        self.value_name.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Result key for the short form (`o`).
    pub fn short_key(&self) -> Option<&str> {
        self.short.as_deref().map(|s| &s[1..])
    }

    /// Result key for the long form (`output`).
    pub fn long_key(&self) -> Option<&str> {
        self.long.as_deref().map(|l| &l[2..])
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.short.as_deref() == Some(token) || self.long.as_deref() == Some(token)
    }

    /// Parse a flag specification.
    ///
    /// Accepted shapes, in this order and separated by spaces (a comma may
    /// follow the short form): an optional `-x`, an optional `--word`, and an
    /// optional `[]` or `[name]` marking that the option consumes the next
    /// token. At least one of the two forms is required.
    pub fn parse(flags: &str, description: &str) -> DefinitionResult<Self> {
        let invalid = || DefinitionError::InvalidFlagSyntax(flags.to_string());

        let mut parts = flags
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .peekable();

        // A comma is only allowed directly after the short form.
        if let Some(pos) = flags.find(',') {
            let before = flags[..pos].trim();
            if !is_short_form(before) || flags.matches(',').count() > 1 {
                return Err(invalid());
            }
        }

        let short = parts.next_if(|p| is_short_form(p)).map(str::to_string);
        let long = parts.next_if(|p| is_long_form(p)).map(str::to_string);
        let marker = parts.next_if(|p| p.starts_with('[') && p.ends_with(']'));

        if parts.next().is_some() || (short.is_none() && long.is_none()) {
            return Err(invalid());
        }

        let (takes_argument, value_name) = match marker {
            None => (false, None),
            Some("[]") => (true, None),
            Some(m) => {
                let name = &m[1..m.len() - 1];
                if !is_word(name) {
                    return Err(invalid());
                }
                (true, Some(name.to_string()))
            }
        };

        Ok(Self {
            short,
            long,
            takes_argument,
            value_name,
            description: description.trim().to_string(),
        })
    }
}

/// A declared positional argument, `<name>` or `[name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    name: String,
    required: bool,
}

impl ArgumentSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn parse(spec: &str) -> DefinitionResult<Self> {
        let spec = spec.trim();
        let (name, required) = if let Some(inner) = spec.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            (inner, true)
        } else if let Some(inner) = spec.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            (inner, false)
        } else {
            return Err(DefinitionError::InvalidArgumentSyntax(spec.to_string()));
        };

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(DefinitionError::InvalidArgumentSyntax(spec.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            required,
        })
    }
}

fn is_short_form(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 2 && b[0] == b'-' && b[1].is_ascii_alphabetic()
}

fn is_long_form(s: &str) -> bool {
    s.strip_prefix("--").is_some_and(is_word)
}

/// At least two of `[a-z0-9-]`, starting with a lowercase letter.
fn is_word(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && s.len() >= 2
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
