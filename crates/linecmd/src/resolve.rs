//! Binds tokens to declared options, then to positional arguments.

use crate::config::TokenMode;
use crate::definition::{ArgumentSpec, OptionSpec};
use crate::error::{ParseError, ParseResult};
use crate::matches::{ParsedArgs, Value};

fn is_option_like(token: &str, mode: TokenMode) -> bool {
    match mode {
        TokenMode::Compatible => token.contains('-'),
        TokenMode::Strict => token.starts_with('-') && token.len() > 1,
    }
}

/// Resolve option tokens left to right.
///
/// An option taking an argument consumes the token after it, whatever that
/// token looks like. Returns the tokens not consumed by any option, in order.
pub(crate) fn resolve_options<'t>(
    tokens: &'t [String],
    options: &[OptionSpec],
    mode: TokenMode,
    out: &mut ParsedArgs,
) -> ParseResult<Vec<&'t str>> {
    let mut positionals = Vec::new();
    let mut i = 0usize;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        if !is_option_like(token, mode) {
            positionals.push(token);
            i += 1;
            continue;
        }

        let Some(spec) = options.iter().find(|o| o.matches(token)) else {
            return Err(ParseError::UnknownOption(token.to_string()));
        };

        let value = if spec.takes_argument() {
            let Some(arg) = tokens.get(i + 1) else {
                return Err(ParseError::MissingOptionArgument(token.to_string()));
            };
            i += 2;
            Value::Text(arg.clone())
        } else {
            i += 1;
            Value::Flag
        };

        tracing::trace!(option = token, ?value, "resolved option");
        if let Some(key) = spec.short_key() {
            out.insert(key, value.clone());
        }
        if let Some(key) = spec.long_key() {
            out.insert(key, value);
        }
    }

    Ok(positionals)
}

/// Bind positional tokens: every required argument first, then the optional
/// ones, each group in declaration order. Empty tokens are skipped.
pub(crate) fn resolve_arguments(
    tokens: &[&str],
    arguments: &[ArgumentSpec],
    out: &mut ParsedArgs,
) -> ParseResult<()> {
    let tokens: Vec<&str> = tokens.iter().copied().filter(|t| !t.is_empty()).collect();
    let (required, optional): (Vec<&ArgumentSpec>, Vec<&ArgumentSpec>) =
        arguments.iter().partition(|a| a.required());

    if required.len() > tokens.len() {
        let missing = required[tokens.len()..]
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        return Err(ParseError::MissingArguments(missing));
    }

    let mut rest = tokens.into_iter();
    for spec in required.into_iter().chain(optional) {
        let Some(token) = rest.next() else {
            break;
        };
        tracing::trace!(argument = spec.name(), value = token, "resolved argument");
        out.insert(spec.name(), Value::Text(token.to_string()));
    }

    let leftover: Vec<String> = rest.map(str::to_string).collect();
    if !leftover.is_empty() {
        return Err(ParseError::TooManyArguments(leftover));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn options(flags: &[&str]) -> Vec<OptionSpec> {
        flags.iter().map(|f| OptionSpec::parse(f, "").unwrap()).collect()
    }

    fn arguments(specs: &[&str]) -> Vec<ArgumentSpec> {
        specs.iter().map(|s| ArgumentSpec::parse(s).unwrap()).collect()
    }

    #[test]
    fn options_are_removed_and_recorded_under_both_keys() {
        let toks = tokens(&["a", "-v", "b", "--output", "out.txt", "c"]);
        let opts = options(&["-v, --verbose", "-o, --output []"]);
        let mut out = ParsedArgs::default();

        let rest = resolve_options(&toks, &opts, TokenMode::Compatible, &mut out).unwrap();
        assert_eq!(rest, vec!["a", "b", "c"]);
        assert_eq!(out.get("v"), Some(&Value::Flag));
        assert_eq!(out.get("verbose"), Some(&Value::Flag));
        assert_eq!(out.get_str("o"), Some("out.txt"));
        assert_eq!(out.get_str("output"), Some("out.txt"));
    }

    #[test]
    fn option_argument_is_taken_verbatim() {
        let toks = tokens(&["-o", "-v"]);
        let opts = options(&["-o []", "-v"]);
        let mut out = ParsedArgs::default();

        let rest = resolve_options(&toks, &opts, TokenMode::Compatible, &mut out).unwrap();
        assert!(rest.is_empty());
        assert_eq!(out.get_str("o"), Some("-v"));
        assert!(!out.is_present("v"));
    }

    #[test]
    fn unknown_and_unfinished_options_fail() {
        let opts = options(&["-o []"]);
        let mut out = ParsedArgs::default();

        let err = resolve_options(&tokens(&["-x"]), &opts, TokenMode::Compatible, &mut out)
            .unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("-x".to_string()));

        let err = resolve_options(&tokens(&["a", "-o"]), &opts, TokenMode::Compatible, &mut out)
            .unwrap_err();
        assert_eq!(err, ParseError::MissingOptionArgument("-o".to_string()));
    }

    #[test]
    fn dashed_values_depend_on_mode() {
        let toks = tokens(&["2024-01-01"]);
        let mut out = ParsedArgs::default();

        let err = resolve_options(&toks, &[], TokenMode::Compatible, &mut out).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("2024-01-01".to_string()));

        let rest = resolve_options(&toks, &[], TokenMode::Strict, &mut out).unwrap();
        assert_eq!(rest, vec!["2024-01-01"]);

        let dash = tokens(&["-"]);
        let rest = resolve_options(&dash, &[], TokenMode::Strict, &mut out).unwrap();
        assert_eq!(rest, vec!["-"]);
    }

    #[test]
    fn required_arguments_bind_before_optional_ones() {
        let args = arguments(&["[b]", "<a>"]);

        let mut out = ParsedArgs::default();
        resolve_arguments(&["x", "y"], &args, &mut out).unwrap();
        assert_eq!(out.get_str("a"), Some("x"));
        assert_eq!(out.get_str("b"), Some("y"));

        let mut out = ParsedArgs::default();
        resolve_arguments(&["x"], &args, &mut out).unwrap();
        assert_eq!(out.get_str("a"), Some("x"));
        assert!(!out.is_present("b"));
    }

    #[test]
    fn missing_and_excess_arguments_fail() {
        let args = arguments(&["<a>", "<b>", "[c]"]);
        let mut out = ParsedArgs::default();
        let err = resolve_arguments(&["x"], &args, &mut out).unwrap_err();
        assert_eq!(err, ParseError::MissingArguments(vec!["b".to_string()]));

        let mut out = ParsedArgs::default();
        let err = resolve_arguments(&["x", "y", "z", "w"], &args, &mut out).unwrap_err();
        assert_eq!(err, ParseError::TooManyArguments(vec!["w".to_string()]));

        let mut out = ParsedArgs::default();
        let err = resolve_arguments(&["x"], &[], &mut out).unwrap_err();
        assert_eq!(err, ParseError::TooManyArguments(vec!["x".to_string()]));
    }

    #[test]
    fn empty_token_is_ignored() {
        let mut out = ParsedArgs::default();
        resolve_arguments(&[""], &[], &mut out).unwrap();
        assert!(out.is_empty());

        let args = arguments(&["<x>"]);
        let err = resolve_arguments(&[""], &args, &mut out).unwrap_err();
        assert_eq!(err, ParseError::MissingArguments(vec!["x".to_string()]));
    }
}
