//! Splits a remainder into tokens and expands short-option clusters.

use crate::config::TokenMode;

/// Space-separated words of `remainder`, trimmed, without empty words.
pub(crate) fn split_words(remainder: &str) -> impl Iterator<Item = &str> {
    remainder.trim().split(' ').filter(|w| !w.is_empty())
}

/// Tokenize the text following a command name.
///
/// Clustered short options are expanded (`-tar` becomes `-t -a -r`).
/// An empty remainder yields a single empty token, which later stages
/// ignore.
pub fn tokenize(remainder: &str, mode: TokenMode) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in split_words(remainder) {
        if is_cluster(word, mode) {
            tokens.extend(word.chars().skip(1).map(|c| format!("-{c}")));
        } else {
            tokens.push(word.to_string());
        }
    }
    if tokens.is_empty() {
        tokens.push(String::new());
    }
    tokens
}

fn is_cluster(word: &str, mode: TokenMode) -> bool {
    let long_enough = word.chars().count() > 2;
    match mode {
        TokenMode::Compatible => word.contains('-') && !word.contains("--") && long_enough,
        TokenMode::Strict => word.starts_with('-') && !word.starts_with("--") && long_enough,
    }
}
