//! Token extraction for raw simulator log lines.
//!
//! Every function here is a pure function of its input line. Regex patterns are
//! compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

/// Separator between an optional timestamp-like tag and the player name.
pub const TAG_DELIMITER: &str = ": ";

fn game_number_regex() -> &'static Regex {
    static GAME_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"Starting Game (\d+)").unwrap()
    });
    &GAME_NUMBER
}

fn card_code_regex() -> &'static Regex {
    static CARD_CODE: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"'([^']*)'").unwrap()
    });
    &CARD_CODE
}

/// Extracts the integer following `Starting Game `.
///
/// Returns `None` when the pattern is absent or the number does not fit a `u32`.
///
/// ```
/// use tricklog_engine::tokens::game_number;
///
/// assert_eq!(game_number("Starting Game 12"), Some(12));
/// assert_eq!(game_number("Starting Game"), None);
/// ```
pub fn game_number(line: &str) -> Option<u32> {
    game_number_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extracts every single-quoted token in order of appearance, duplicates preserved.
///
/// ```
/// use tricklog_engine::tokens::card_codes;
///
/// assert_eq!(card_codes("played: '3D' '3D' '4H'"), vec!["3D", "3D", "4H"]);
/// assert!(card_codes("no cards here").is_empty());
/// ```
pub fn card_codes(line: &str) -> Vec<String> {
    card_code_regex()
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Drops a leading tag separated by `": "`; a no-op when the delimiter is absent.
///
/// When several delimiters are present the text after the last one is kept.
pub fn strip_tag(label: &str) -> &str {
    match label.rsplit_once(TAG_DELIMITER) {
        Some((_, name)) => name,
        None => label,
    }
}

/// Cleans a raw label prefix: trailing colons and whitespace go, then the tag is stripped.
pub fn normalize_label(raw: &str) -> Option<String> {
    let head = raw.trim().trim_end_matches(':').trim_end();
    let name = strip_tag(head).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Player label taken from the substring before the first occurrence of `marker`.
pub fn label_before(line: &str, marker: &str) -> Option<String> {
    let idx = line.find(marker)?;
    normalize_label(&line[..idx])
}

/// Player label made of the whitespace tokens preceding the word `word`.
///
/// A token matches when it equals `word` with any trailing colon removed, so both
/// `played` and `played:` are found.
pub fn label_before_word(line: &str, word: &str) -> Option<String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let idx = tokens
        .iter()
        .position(|tok| tok.trim_end_matches(':') == word)?;
    normalize_label(&tokens[..idx].join(" "))
}

/// Player label taken from the first whitespace token of the line.
pub fn first_token_label(line: &str) -> Option<String> {
    line.split_whitespace().next().and_then(normalize_label)
}
