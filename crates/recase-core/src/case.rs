// Recase Case Transformations
// Pure functions for whole-string case changes

/// Map every character to its uppercase form.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Map every character to its lowercase form.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Uppercase the first character of `word` and lowercase the rest.
///
/// Characters whose uppercase form expands (e.g. `ß` -> `SS`) are expanded.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Capitalize every whitespace-delimited word.
///
/// Words are rejoined with a single space, so leading and trailing whitespace
/// is dropped and inner runs collapse:
///
/// ```
/// use recase_core::case::to_capitalized;
/// assert_eq!(to_capitalized("  hELLO   wORLD "), "Hello World");
/// ```
pub fn to_capitalized(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of the whole string, lowercase the rest.
pub fn to_sentence_case(text: &str) -> String {
    capitalize(text)
}
