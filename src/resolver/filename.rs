//! File name derivation from titles.

/// Characters that are not allowed in file names on common platforms.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Turn a title into a file name stem.
///
/// Illegal and control characters act as separators, whitespace runs collapse
/// to a single `_`, and leading or trailing dots are dropped. An empty result becomes
/// `untitled`.
pub fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if ILLEGAL_CHARS.contains(&c) || c.is_control() {
                ' '
            } else {
                c
            }
        })
        .collect();

    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    let name = joined.trim_matches('.');

    if name.is_empty() {
        return "untitled".to_string();
    }

    name.to_string()
}
