//! Scheme normalization applied before any parsing or network use.

/// Scheme prepended when the input has neither `http://` nor `https://`.
const DEFAULT_PREFIX: &str = "https://";

/// Trims surrounding whitespace and makes sure the result starts with
/// `http://` or `https://`.
///
/// No other validation happens here; the prefix check is case-sensitive.
///
/// # Examples
///
/// - `normalize("example.com")` → `"https://example.com"`
/// - `normalize("http://x.com")` → `"http://x.com"`
/// - `normalize("  ")` → `"https://"`
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_PREFIX}{trimmed}")
    }
}
