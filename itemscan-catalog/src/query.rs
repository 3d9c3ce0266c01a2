//! Turning a spoken request into a catalog search term

/// Request phrases stripped from the front of a query, tried in order
const REQUEST_PHRASES: [&str; 5] = [
    "i want to find",
    "i want to search",
    "find",
    "search for",
    "looking for",
];

const ARTICLES: [&str; 3] = ["a", "an", "the"];

/// Normalize a transcribed request such as "I want to find a cup".
///
/// The text is lowercased, then at most one leading request phrase and at
/// most one leading article are removed (each only when followed by
/// whitespace), and the result is trimmed.
pub fn normalize_spoken_query(text: &str) -> String {
    let lowered = text.trim_start().to_lowercase();
    let rest = strip_leading_word(&lowered, &REQUEST_PHRASES);
    let rest = strip_leading_word(rest, &ARTICLES);
    rest.trim().to_string()
}

/// Remove the first of `prefixes` that starts `text` and is followed by
/// whitespace, along with that whitespace
fn strip_leading_word<'a>(text: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = text.strip_prefix(prefix) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    text
}
