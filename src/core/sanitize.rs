//! Path-segment sanitizing and hostname extraction for secret names.

use url::Url;

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '.' | '-')
}

/// Turn arbitrary text into a single safe path segment.
///
/// Characters outside `[A-Za-z0-9_@.-]` become `_`. Leading `_`/`.` and
/// trailing `_` are trimmed, so the result is never `.` or `..` and never
/// contains a separator. Applying it twice yields the same string.
pub fn sanitize(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if is_safe_char(c) { c } else { '_' })
        .collect();
    replaced
        .trim_start_matches(['_', '.'])
        .trim_end_matches('_')
        .to_string()
}

/// Extract a filepath-safe hostname from a URL-like string.
///
/// Input without `://` is parsed as `http://` so bare hosts still parse.
/// Falls back to sanitizing the raw input when no host can be parsed.
pub fn extract_hostname(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    };
    if let Ok(url) = Url::parse(&candidate) {
        if let Some(host) = url.host_str() {
            let cleaned = sanitize(host);
            if !cleaned.is_empty() {
                return cleaned;
            }
        }
    }
    sanitize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_safe_chars() {
        assert_eq!(sanitize("bob@example.com"), "bob@example.com");
        assert_eq!(sanitize("my-key_1.2"), "my-key_1.2");
    }

    #[test]
    fn test_sanitize_replaces_separators() {
        assert_eq!(sanitize("foo/bar"), "foo_bar");
        assert_eq!(sanitize("foo\\bar"), "foo_bar");
        assert_eq!(sanitize("Credit Card"), "Credit_Card");
    }

    #[test]
    fn test_sanitize_trims_edges() {
        assert_eq!(sanitize("  padded  "), "padded");
        assert_eq!(sanitize("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize(".."), "");
        assert_eq!(sanitize(".hidden"), "hidden");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("///"), "");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let inputs = [
            "",
            "plain",
            "with space",
            "a/b/c",
            "._weird_.",
            "_.._a",
            "ünïcödé",
            "!!!not a url!!!",
            ". _ . _",
            "x@y.z/../..",
            "tab\tand\nnewline",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", input);
            assert!(!once.contains('/'), "separator survived for {:?}", input);
            assert!(!once.contains('\\'), "separator survived for {:?}", input);
        }
    }

    #[test]
    fn test_extract_hostname_empty() {
        assert_eq!(extract_hostname(""), "");
    }

    #[test]
    fn test_extract_hostname_without_scheme() {
        assert_eq!(extract_hostname("example.com/path"), "example.com");
    }

    #[test]
    fn test_extract_hostname_with_scheme() {
        assert_eq!(extract_hostname("https://Example.com/login"), "example.com");
        assert_eq!(extract_hostname("ftp://files.example.org:2121/x"), "files.example.org");
    }

    #[test]
    fn test_extract_hostname_strips_credentials() {
        assert_eq!(extract_hostname("https://user:pw@host.example/"), "host.example");
    }

    #[test]
    fn test_extract_hostname_fallback() {
        let host = extract_hostname("!!!not a url!!!");
        assert!(!host.is_empty());
        assert_eq!(host, sanitize("!!!not a url!!!"));
    }
}
