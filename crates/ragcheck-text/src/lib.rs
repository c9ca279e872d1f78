//! Text heuristics used by feature extraction and the evaluators.
//!
//! These are deliberately small, standalone functions so that stricter
//! implementations (a real sentence tokenizer, a stricter numeric parser)
//! can be substituted later without touching evaluator logic.

use std::sync::OnceLock;

use regex::Regex;

/// Lower-case, collapse whitespace runs to single spaces, and trim.
///
/// Empty input yields an empty string; never fails.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into sentence-like units on `.`/`?` followed by whitespace.
///
/// Two guards avoid breaking on single-letter abbreviations and honorifics:
/// a `<letter>.<letter>.` tail (as in "e.g." or "U.S.") and a
/// `<Capital><lowercase>.` tail (as in "Dr."). Empty fragments are dropped
/// after trimming. This is a heuristic, not a full sentence tokenizer; its
/// known misses on unusual abbreviations are accepted.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        if !chars[i].is_whitespace() {
            continue;
        }
        let prev = chars[i - 1];
        if prev != '.' && prev != '?' {
            continue;
        }
        if abbreviation_guard(&chars, i) {
            continue;
        }
        push_trimmed(&mut sentences, &chars[start..i]);
        start = i + 1;
    }
    push_trimmed(&mut sentences, &chars[start..]);

    sentences
}

/// True when the characters immediately before the break position look like
/// an abbreviation rather than a sentence end.
fn abbreviation_guard(chars: &[char], pos: usize) -> bool {
    let word = |c: char| c.is_alphanumeric() || c == '_';

    // <letter>.<letter>. as in "e.g." or "U.S."
    if pos >= 4 && word(chars[pos - 4]) && chars[pos - 3] == '.' && word(chars[pos - 2]) {
        return true;
    }
    // <Capital><lowercase>. as in "Dr." or "Mr."
    if pos >= 3
        && chars[pos - 3].is_ascii_uppercase()
        && chars[pos - 2].is_ascii_lowercase()
        && chars[pos - 1] == '.'
    {
        return true;
    }
    false
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &[char]) {
    let fragment: String = fragment.iter().collect();
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

static SCORE_RE: OnceLock<Regex> = OnceLock::new();

/// Extract the first decimal score from free text.
///
/// Matches, in order of preference at each position: `0.<digits>`, `1.0`,
/// bare `1`, bare `0`. Returns `0.0` when nothing matches, which is the
/// most conservative score. Multi-number answers resolve to the first match;
/// this is a known imprecision of the heuristic.
pub fn extract_score(text: &str) -> f64 {
    let re = SCORE_RE.get_or_init(|| Regex::new(r"0\.\d+|1\.0|1|0").expect("score pattern"));
    re.find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Truncate to the first `max_chars` characters, respecting UTF-8
/// boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
