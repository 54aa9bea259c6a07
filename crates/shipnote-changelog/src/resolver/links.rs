//! Link definitions found below the bot signature

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Matches `[CODE]: URL`, or `CODE: URL` once brackets are normalized away
static DEFINITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[?(?P<code>[A-Za-z][A-Za-z0-9_]+-[0-9]+)\]?\s*:\s*(?P<url>\S+)\s*$")
        .expect("Invalid regex")
});

/// Case-insensitive map from tracker code to URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    links: HashMap<String, String>,
}

impl LinkTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from link definition lines.
    ///
    /// Lines that are not definitions are ignored. When a code is defined
    /// more than once the first definition wins.
    pub fn parse(footer: &str) -> Self {
        let mut table = Self::new();
        for line in footer.lines() {
            if let Some(caps) = DEFINITION_REGEX.captures(line) {
                table.insert(&caps["code"], &caps["url"]);
            }
        }
        debug!(definitions = table.len(), "link definitions parsed");
        table
    }

    /// Insert a definition unless the code is already present
    pub fn insert(&mut self, code: &str, url: &str) {
        self.links
            .entry(code.to_uppercase())
            .or_insert_with(|| url.to_string());
    }

    /// Look up a code, ignoring case
    pub fn get(&self, code: &str) -> Option<&str> {
        self.links.get(&code.to_uppercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracketed_and_normalized() {
        let footer = "\n\n[CXJD-147]: https://t/browse/CXJD-147?x=1\nSAR-9: https://t/browse/SAR-9\n";
        let table = LinkTable::parse(footer);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("CXJD-147"), Some("https://t/browse/CXJD-147?x=1"));
        assert_eq!(table.get("sar-9"), Some("https://t/browse/SAR-9"));
    }

    #[test]
    fn test_first_definition_wins() {
        let table = LinkTable::parse("A1-1: https://first\nA1-1: https://second   ");
        assert_eq!(table.get("A1-1"), Some("https://first"));
    }

    #[test]
    fn test_ignores_other_lines() {
        let table = LinkTable::parse("some text\n- @a item\nnot-a-code: x");
        assert!(table.is_empty());
        assert_eq!(table.get("ZZ-1"), None);
    }
}
