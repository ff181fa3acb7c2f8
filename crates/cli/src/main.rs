mod definition;

use anyhow::{Context, Result};
use clap::Parser;
use linecmd::{Channel, Command, TokenMode};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

use crate::definition::{DEFAULT_DEFINITION_NAME, Definition};

#[derive(Parser)]
#[command(name = "linecmd")]
#[command(version, about = "Parse command lines against a JSON command definition", long_about = None)]
struct Cli {
    /// Path to the command definition
    #[arg(short, long, default_value = DEFAULT_DEFINITION_NAME, value_name = "FILE")]
    definition: PathBuf,

    /// Detect options and help flags by whole tokens instead of substrings
    #[arg(long)]
    strict: bool,

    /// Print the command help and exit
    #[arg(long)]
    print_help: bool,

    /// Lines to parse (default: read lines from stdin)
    #[arg(value_name = "LINE")]
    lines: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut definition = Definition::from_file(&cli.definition)?;
    if cli.strict {
        definition.config.token_mode = TokenMode::Strict;
    }
    let mut command = definition.into_command()?;

    if cli.print_help {
        print!("{}", command.help());
        return Ok(());
    }

    let failed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&failed);
    command
        .on(Channel::Info, |text| print!("{text}"))
        .on(Channel::Error, move |text| {
            flag.store(true, Ordering::Relaxed);
            eprintln!("error: {text}");
        });

    if cli.lines.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read stdin")?;
            parse_line(&command, &line)?;
        }
    } else {
        for line in &cli.lines {
            parse_line(&command, line)?;
        }
    }

    if failed.load(Ordering::Relaxed) {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_line(command: &Command, line: &str) -> Result<()> {
    tracing::debug!(line, "parsing line");
    let Some(args) = command.parse(line) else {
        return Ok(());
    };
    let json = serde_json::to_string(&args).context("failed to serialize result")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write to stdout")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
