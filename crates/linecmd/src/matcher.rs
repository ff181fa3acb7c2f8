//! Decides whether a line belongs to a command.

use crate::config::TokenMode;
use crate::tokenizer::split_words;

#[derive(Debug, Clone)]
pub(crate) struct Matcher {
    prefix: String,
    /// Command name first, then aliases in declaration order.
    names: Vec<String>,
}

impl Matcher {
    pub(crate) fn new(prefix: &str, name: &str, aliases: &[String]) -> Self {
        let names = std::iter::once(name.to_string())
            .chain(aliases.iter().filter(|a| !a.is_empty()).cloned())
            .collect();
        Self {
            prefix: prefix.to_string(),
            names,
        }
    }

    /// Text following `prefix + name` (or an alias), if the line starts with it.
    ///
    /// The first name that matches wins. A remainder spanning a line break
    /// never matches.
    pub(crate) fn remainder<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.strip_prefix(self.prefix.as_str())?;
        let remainder = self.names.iter().find_map(|n| rest.strip_prefix(n.as_str()))?;
        if remainder.contains(is_line_terminator) {
            return None;
        }
        Some(remainder)
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whether a remainder asks for help (`-h` or `--help`).
///
/// In [`TokenMode::Compatible`] this is a substring test on the trimmed text,
/// so `-hello` or `a-h` count as well. [`TokenMode::Strict`] looks for a
/// standalone word, before any cluster expansion.
pub fn is_help_requested(remainder: &str, mode: TokenMode) -> bool {
    match mode {
        TokenMode::Compatible => {
            let trimmed = remainder.trim();
            trimmed.contains("-h") || trimmed.contains("--help")
        }
        TokenMode::Strict => split_words(remainder).any(|t| t == "-h" || t == "--help"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(prefix: &str, name: &str, aliases: &[&str]) -> Matcher {
        let aliases: Vec<String> = aliases.iter().map(|a| a.to_string()).collect();
        Matcher::new(prefix, name, &aliases)
    }

    #[test]
    fn matches_name_and_aliases() {
        let m = matcher("!", "play", &["p", "start"]);
        assert_eq!(m.remainder("!play song"), Some(" song"));
        assert_eq!(m.remainder("!start"), Some(""));
        assert_eq!(m.remainder("!p -v"), Some(" -v"));
        assert_eq!(m.remainder("play song"), None);
        assert_eq!(m.remainder("!stop"), None);
        assert_eq!(m.remainder(""), None);
    }

    #[test]
    fn name_needs_no_word_boundary() {
        let m = matcher("", "greet", &[]);
        assert_eq!(m.remainder("greetings"), Some("ings"));
    }

    #[test]
    fn earlier_names_win() {
        let m = matcher("", "g", &["greet"]);
        assert_eq!(m.remainder("greet you"), Some("reet you"));
    }

    #[test]
    fn prefix_and_names_are_literal() {
        let m = matcher(".", "a+b", &[]);
        assert_eq!(m.remainder(".a+b x"), Some(" x"));
        assert_eq!(m.remainder("xaab x"), None);
    }

    #[test]
    fn rejects_multiline_remainder() {
        let m = matcher("", "greet", &[]);
        assert_eq!(m.remainder("greet a\nb"), None);
        assert_eq!(m.remainder("greet a\r"), None);
    }

    #[test]
    fn help_detection_by_mode() {
        assert!(is_help_requested(" -h", TokenMode::Compatible));
        assert!(is_help_requested(" world --help", TokenMode::Compatible));
        assert!(is_help_requested(" -hello", TokenMode::Compatible));
        assert!(is_help_requested(" a-h", TokenMode::Compatible));
        assert!(!is_help_requested(" hello", TokenMode::Compatible));

        assert!(is_help_requested(" world -h", TokenMode::Strict));
        assert!(is_help_requested(" --help", TokenMode::Strict));
        assert!(!is_help_requested(" -vh", TokenMode::Strict));
        assert!(!is_help_requested(" -hello", TokenMode::Strict));
        assert!(!is_help_requested(" a-h", TokenMode::Strict));
        assert!(!is_help_requested(" --hello", TokenMode::Strict));
    }
}
