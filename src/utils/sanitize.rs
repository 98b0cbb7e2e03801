use regex::Regex;
use std::sync::LazyLock;

static FORBIDDEN_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-_]").unwrap());

/// Sanitize a quiz id or topic down to `[a-zA-Z0-9-_]`.
///
/// This is a silent filter, not a validation step: non-conforming characters
/// are dropped without error, so two ids differing only in stripped
/// characters resolve to the same record set. Keeps the id safe to embed in
/// a file name.
pub fn sanitize_id(input: &str) -> String {
    FORBIDDEN_ID_CHARS.replace_all(input, "").into_owned()
}

/// Truncate a quiz title to at most `max` characters, on a char boundary.
pub fn truncate_title(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_specials() {
        assert_eq!(sanitize_id("abc!@# -1"), "abc-1");
        assert_eq!(sanitize_id("rust_basics-2"), "rust_basics-2");
        assert_eq!(sanitize_id("../../etc/passwd"), "etcpasswd");
    }

    #[test]
    fn test_sanitize_can_yield_empty() {
        assert_eq!(sanitize_id("!!!"), "");
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("short", 100), "short");
        let long = "x".repeat(150);
        assert_eq!(truncate_title(&long, 100).chars().count(), 100);
    }

    #[test]
    fn test_truncate_title_multibyte() {
        // Must cut on char boundaries, not bytes
        let title = "é".repeat(120);
        assert_eq!(truncate_title(&title, 100).chars().count(), 100);
    }
}
