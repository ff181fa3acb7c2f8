use anyhow::{Context, Result};
use linecmd::{Command, CommandConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_DEFINITION_NAME: &str = "linecmd.json";

/// A command definition as stored on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub name: String,

    #[serde(flatten)]
    pub config: CommandConfig,

    #[serde(default)]
    pub options: Vec<OptionEntry>,

    /// `<name>` for required arguments, `[name]` for optional ones.
    #[serde(default)]
    pub arguments: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionEntry {
    /// Flag string, e.g. `-o, --output [file]`.
    pub flags: String,

    #[serde(default)]
    pub description: String,
}

impl Definition {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read definition: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse definition JSON: {}", path.display()))
    }

    pub fn into_command(self) -> Result<Command> {
        let mut command = Command::new(&self.name, self.config)
            .context("invalid command definition")?;
        for opt in &self.options {
            command
                .option(&opt.flags, &opt.description)
                .with_context(|| format!("invalid option in '{}'", self.name))?;
        }
        for arg in &self.arguments {
            command
                .argument(arg)
                .with_context(|| format!("invalid argument in '{}'", self.name))?;
        }
        Ok(command)
    }
}
