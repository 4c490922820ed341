//! Character-class helpers shared by catalog derivation and query translation.
//!
//! Card fields and query input are reduced to a restricted alphabet before
//! tokenizing: card name/artist fields keep letters only, query input keeps
//! letters and digits. Whitespace always survives the reduction so the result
//! can still be split into words.

/// Remove every character that is not an ASCII letter or whitespace.
#[must_use]
pub fn keep_letters(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Remove every character that is not an ASCII letter, digit, or whitespace.
#[must_use]
pub fn keep_alphanumeric(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// True if `s` is empty or contains only whitespace.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Upper-cased letter words of `s`, punctuation stripped.
#[must_use]
pub fn letter_words(s: &str) -> Vec<String> {
    keep_letters(s)
        .to_uppercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
