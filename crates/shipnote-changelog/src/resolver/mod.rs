//! Issue tracker reference resolution

mod links;

pub use links::LinkTable;

use std::sync::LazyLock;

use regex::Regex;
use shipnote_core::config::{LinkConfig, LinkMode};

use crate::types::ChangeRecord;

/// Tracker code anywhere in a description, e.g. `CXJD-147`, including
/// codes glued to other text such as `feature/CXJD-147_fix`
static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z0-9_]+-[0-9]+").expect("Invalid regex")
});

// Edge stripping only removes codes that stand alone as a word.
static LEADING_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]+-[0-9]+\b").expect("Invalid regex")
});

static TRAILING_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z][A-Za-z0-9_]+-[0-9]+$").expect("Invalid regex")
});

/// Label used for the sentinel fragment
const UNKNOWN_LABEL: &str = "Unknown";

/// Find tracker codes in a description, upper-cased, deduplicated, in order
pub fn find_codes(description: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for m in CODE_REGEX.find_iter(description) {
        let code = m.as_str().to_uppercase();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | ':' | '/' | '|' | ',')
}

/// Remove tracker codes at the start or end of a description.
///
/// `CXJD-149 - Add params` becomes `Add params` and `fix: bump SRE-642`
/// becomes `fix: bump`. Codes in the middle of the text are kept.
pub fn strip_edge_codes(description: &str) -> String {
    let mut text = description.trim();
    loop {
        let before = text.len();
        if let Some(m) = LEADING_CODE_REGEX.find(text) {
            text = text[m.end()..].trim_start_matches(is_separator);
        }
        if let Some(m) = TRAILING_CODE_REGEX.find(text) {
            text = text[..m.start()].trim_end_matches(is_separator);
        }
        if text.len() == before {
            break;
        }
    }
    text.to_string()
}

/// Maps tracker codes to URLs and renders link fragments
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    mode: LinkMode,
    tracker_base_url: String,
    unknown_url: String,
    links: LinkTable,
}

impl ReferenceResolver {
    /// Create a resolver; `footer` is only read in footer mode
    pub fn new(config: &LinkConfig, footer: &str) -> Self {
        let links = match config.mode {
            LinkMode::Footer => LinkTable::parse(footer),
            LinkMode::Direct => LinkTable::new(),
        };

        Self {
            mode: config.mode,
            tracker_base_url: config.tracker_base_url.clone(),
            unknown_url: config.unknown_url.clone(),
            links,
        }
    }

    /// Resolve a single code. Never fails: misses yield the sentinel URL.
    pub fn resolve(&self, code: &str) -> String {
        let code = code.to_uppercase();
        match self.mode {
            LinkMode::Direct => format!("{}{}", self.tracker_base_url, code),
            LinkMode::Footer => self
                .links
                .get(&code)
                .map(str::to_string)
                .unwrap_or_else(|| self.unknown_url.clone()),
        }
    }

    /// Render `<URL|[CODE]>` fragments for every code of a record.
    ///
    /// Records without codes get `<unknown-url|[Unknown]>` so missing ticket
    /// links stay visible.
    pub fn fragments(&self, record: &ChangeRecord) -> String {
        if record.reference_codes.is_empty() {
            return self.unknown_fragment();
        }

        record
            .reference_codes
            .iter()
            .map(|code| format!("<{}|[{}]>", self.resolve(code), code.to_uppercase()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn unknown_fragment(&self) -> String {
        format!("<{}|[{}]>", self.unknown_url, UNKNOWN_LABEL)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(codes: &[&str]) -> ChangeRecord {
        ChangeRecord {
            owner: "@ a".to_string(),
            description: "d".to_string(),
            reference_codes: codes.iter().map(|c| c.to_string()).collect(),
            external_code: "1".to_string(),
            external_url: "https://github.com/o/r/pull/1".to_string(),
        }
    }

    #[test]
    fn test_find_codes() {
        assert_eq!(
            find_codes("cxjd-147 and AH-7/Create, again CXJD-147 plus ZT_1-3"),
            vec!["CXJD-147", "AH-7", "ZT_1-3"]
        );
        assert!(find_codes("nomad-env updates").is_empty());
        assert!(find_codes("A-1 single letter prefix").is_empty());
    }

    #[test]
    fn test_find_codes_glued_to_text() {
        assert_eq!(find_codes("feature/CXJD-147_fix thing"), vec!["CXJD-147"]);
        assert_eq!(find_codes("CXJD-147a fix"), vec!["CXJD-147"]);
        assert_eq!(find_codes("1AH-7 fix"), vec!["AH-7"]);
    }

    #[test]
    fn test_strip_edge_codes_keeps_glued_codes() {
        assert_eq!(strip_edge_codes("CXJD-147a fix"), "CXJD-147a fix");
    }

    #[test]
    fn test_strip_edge_codes() {
        assert_eq!(strip_edge_codes("CXJD-149 - Add params"), "Add params");
        assert_eq!(strip_edge_codes("AH-28/Migration to update"), "Migration to update");
        assert_eq!(strip_edge_codes("fix: bump nomad-env SRE-642"), "fix: bump nomad-env");
        assert_eq!(strip_edge_codes("Fix bug CXJD-1"), "Fix bug");
        assert_eq!(strip_edge_codes("ZT-1 ZT-2 Refactor"), "Refactor");
        assert_eq!(strip_edge_codes("Keep ZT-1 inside"), "Keep ZT-1 inside");
        assert_eq!(strip_edge_codes("SAR-1"), "");
    }

    #[test]
    fn test_direct_mode() {
        let resolver = ReferenceResolver::new(&LinkConfig::default(), "");
        assert_eq!(
            resolver.resolve("cxjd-1"),
            "https://nomadhealth.atlassian.net/browse/CXJD-1"
        );
        assert_eq!(
            resolver.fragments(&record(&["CXJD-1", "AH-2"])),
            "<https://nomadhealth.atlassian.net/browse/CXJD-1|[CXJD-1]> \
             <https://nomadhealth.atlassian.net/browse/AH-2|[AH-2]>"
        );
    }

    #[test]
    fn test_footer_mode_with_fallback() {
        let config = LinkConfig {
            mode: LinkMode::Footer,
            ..LinkConfig::default()
        };
        let resolver = ReferenceResolver::new(&config, "SAR-1: https://t/SAR-1\n");
        assert_eq!(resolver.resolve("sar-1"), "https://t/SAR-1");
        assert_eq!(resolver.resolve("SAR-2"), "http://unknown");
        assert_eq!(
            resolver.fragments(&record(&["SAR-1", "SAR-2"])),
            "<https://t/SAR-1|[SAR-1]> <http://unknown|[SAR-2]>"
        );
    }

    #[test]
    fn test_unknown_fragment() {
        let resolver = ReferenceResolver::new(&LinkConfig::default(), "");
        assert_eq!(resolver.fragments(&record(&[])), "<http://unknown|[Unknown]>");
    }
}
