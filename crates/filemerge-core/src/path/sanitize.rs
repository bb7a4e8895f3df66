/// Characters that are invalid in file names on at least one platform
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Name returned when nothing usable is left after sanitizing
pub const FALLBACK_NAME: &str = "unnamed";

/// Sanitize `raw`, returning `None` when nothing is left
///
/// Invalid characters become `_`; leading and trailing whitespace and dots
/// are stripped. No extension is added.
pub fn try_sanitize_filename(raw: &str) -> Option<String> {
    let replaced: String = raw
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Sanitize `raw` into a file name, falling back to [`FALLBACK_NAME`]
pub fn sanitize_filename(raw: &str) -> String {
    try_sanitize_filename(raw).unwrap_or_else(|| FALLBACK_NAME.to_string())
}
