//! Text normalizers: entity decoding, escape stripping and compound splitting.
//!
//! None of these fail. When an expected delimiter is missing the dependent
//! part comes back as `None`.

use scraper::Html;

/// Decodes HTML character references such as `&amp;` or `&#39;`.
///
/// Strings without `&` are returned unchanged, which keeps decoding
/// idempotent on text that is already decoded.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    // Literal angle brackets must stay text rather than open a tag.
    let escaped = input.replace('<', "&lt;");
    let fragment = Html::parse_fragment(&escaped);
    fragment.root_element().text().collect()
}

/// Removes every literal backslash.
pub fn strip_escapes(input: &str) -> String {
    input.replace('\\', "")
}

/// Last whitespace-separated token, e.g. `"Chapters 12"` gives `"12"`.
pub fn last_token(input: &str) -> Option<&str> {
    input.split_whitespace().last()
}

/// Splits `"Chapters 12 - Volumes 3"` into `("12", "3")`.
///
/// The left side always exists when the input has any token; the right side
/// is `None` without a `-`.
pub fn split_counts(input: &str) -> (Option<String>, Option<String>) {
    let (left, right) = split_pair(input, '-');
    let pick = |part: Option<String>| part.as_deref().and_then(last_token).map(str::to_string);
    (pick(left), pick(right))
}

/// Splits on the first `delimiter` and trims both sides.
///
/// Without the delimiter the whole input is the left side and the right side
/// is `None`.
pub fn split_pair(input: &str, delimiter: char) -> (Option<String>, Option<String>) {
    match input.split_once(delimiter) {
        Some((left, right)) => (
            Some(left.trim().to_string()),
            Some(right.trim().to_string()),
        ),
        None => (Some(input.trim().to_string()), None),
    }
}

/// Value after a `Label:` prefix, e.g. `"Status: Completed"` gives `"Completed"`.
pub fn after_label(input: &str) -> Option<String> {
    input
        .split_once(':')
        .map(|(_, value)| value.trim().to_string())
}

/// Text after the last `:`, or the whole text when there is none.
pub fn after_last_colon(input: &str) -> String {
    input.rsplit(':').next().unwrap_or(input).trim().to_string()
}

/// Splits on `delimiter`, trims each part and drops empty ones.
pub fn split_list(input: &str, delimiter: char) -> Vec<String> {
    input
        .split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// The `index`-th whitespace-separated word.
pub fn word(input: &str, index: usize) -> Option<String> {
    input.split_whitespace().nth(index).map(str::to_string)
}
