use serde::Deserialize;

/// How flag-like text is recognized in a matched line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenMode {
    /// Substring tests: any token containing `-` is an option, and `-h`
    /// anywhere in the remainder requests help.
    #[default]
    Compatible,
    /// Token tests: options start with `-`, help needs a `-h`/`--help` token.
    Strict,
}

/// Construction-time settings of a [`Command`](crate::Command).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandConfig {
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Literal text every invocation starts with, e.g. `!`.
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub token_mode: TokenMode,
}

impl CommandConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn token_mode(mut self, mode: TokenMode) -> Self {
        self.token_mode = mode;
        self
    }
}
