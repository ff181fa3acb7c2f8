use crate::definition::{ArgumentSpec, OptionSpec};

const HELP_SHORT: &str = "-h";
const HELP_LONG: &str = "--help";
const HELP_DESCRIPTION: &str = "Show help information";

fn format_option_left(opt: &OptionSpec) -> String {
    let names: Vec<&str> = opt.short().into_iter().chain(opt.long()).collect();
    let mut out = names.join(", ");
    if opt.takes_argument() {
        out.push_str(&format!(" <{}>", opt.value_name().unwrap_or("value")));
    }
    out
}

fn format_usage(name: &str, arguments: &[ArgumentSpec]) -> String {
    let mut out = format!("Usage: {name} [options]");
    let required = arguments.iter().filter(|a| a.required());
    let optional = arguments.iter().filter(|a| !a.required());
    for arg in required {
        out.push_str(&format!(" <{}>", arg.name()));
    }
    for arg in optional {
        out.push_str(&format!(" [{}]", arg.name()));
    }
    out
}

/// Render the help text of a command.
pub(crate) fn render(
    name: &str,
    aliases: &[String],
    options: &[OptionSpec],
    arguments: &[ArgumentSpec],
) -> String {
    let mut out = format_usage(name, arguments);
    out.push('\n');

    if !aliases.is_empty() {
        out.push_str(&format!("Aliases: {}\n", aliases.join(", ")));
    }

    let mut rows: Vec<(String, &str)> = options
        .iter()
        .map(|o| (format_option_left(o), o.description()))
        .collect();
    let declares_help = options
        .iter()
        .any(|o| o.short() == Some(HELP_SHORT) || o.long() == Some(HELP_LONG));
    if !declares_help {
        rows.push((format!("{HELP_SHORT}, {HELP_LONG}"), HELP_DESCRIPTION));
    }

    out.push_str("\nOptions:\n");
    let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {}\n", left));
        } else {
            out.push_str(&format!("  {:width$}  {}\n", left, help, width = width));
        }
    }

    out
}
