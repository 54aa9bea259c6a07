//! Body normalization

/// Markdown artifacts that break the entry grammar
const STRIPPED_CHARS: [char; 5] = ['`', '\'', '"', ']', '['];

/// Normalize a raw promotion body.
///
/// Trims surrounding whitespace, drops quotes, backticks and square brackets,
/// and rewrites `\r\n` and lone `\r` to `\n`. Never fails; an empty result is
/// left for the caller to reject.
pub fn normalize(body: &str) -> String {
    let cleaned: String = body
        .trim()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();

    cleaned.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup_characters() {
        assert_eq!(
            normalize("[#10](https://x/pull/10) `code` 'a' \"b\""),
            "#10(https://x/pull/10) code a b"
        );
    }

    #[test]
    fn test_unifies_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("\n\t  # Changes\n  "), "# Changes");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \r\n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  - @a [X-1] `fix`\r\n");
        assert_eq!(normalize(&once), once);
    }
}
