//! Change entry extraction

pub mod grammar;
mod types;

pub use types::*;

use shipnote_core::config::{CountPolicy, ExtractionConfig, LinkConfig};
use tracing::{debug, instrument, warn};

use crate::outcome::FormatError;
use crate::resolver::{find_codes, strip_edge_codes};
use crate::types::{ChangeRecord, Counts, UNKNOWN_OWNER};

/// Trait for entry parsers
pub trait EntryParser: Send + Sync {
    /// Extract every change record from an entries region
    fn parse(&self, region: &str) -> Result<Extraction, FormatError>;

    /// Heuristic upper bound of the entries in a region
    fn expected_count(&self, region: &str) -> usize;
}

/// Parser for `- @owner description #123(url)` entries
pub struct GrammarParser {
    config: ExtractionConfig,
    url_prefix: String,
    unknown_url: String,
}

impl GrammarParser {
    /// Create a parser with default configuration
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default(), &LinkConfig::default())
    }

    /// Create a parser with custom configuration
    pub fn with_config(extraction: &ExtractionConfig, links: &LinkConfig) -> Self {
        Self {
            config: extraction.clone(),
            url_prefix: links.change_url_prefix.clone(),
            unknown_url: links.unknown_url.clone(),
        }
    }

    /// Turn a decomposed entry into a record
    fn build_record(&self, entry: &RawEntry<'_>) -> ChangeRecord {
        let owner = entry
            .owner
            .map(|o| o.replacen('@', "@ ", 1))
            .unwrap_or_else(|| UNKNOWN_OWNER.to_string());

        let collapsed = entry
            .description
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let reference_codes = find_codes(&collapsed);
        let description = if self.config.strip_reference_codes {
            strip_edge_codes(&collapsed)
        } else {
            collapsed
        };

        let external_url = match url::Url::parse(entry.url) {
            Ok(_) => entry.url.to_string(),
            Err(e) => {
                debug!(url = entry.url, error = %e, "unparseable change url");
                self.unknown_url.clone()
            }
        };

        ChangeRecord {
            owner,
            description,
            reference_codes,
            external_code: entry.code.to_string(),
            external_url,
        }
    }
}

impl Default for GrammarParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryParser for GrammarParser {
    #[instrument(skip(self, region), fields(region_len = region.len(), strict = self.config.strict))]
    fn parse(&self, region: &str) -> Result<Extraction, FormatError> {
        let candidates = grammar::split_candidates(region, &self.url_prefix);
        if candidates.is_empty() {
            debug!("no candidate entries found");
            return Err(FormatError::PatternNotFound);
        }

        let mut records = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            match grammar::decompose(candidate.text, &self.url_prefix) {
                Ok(entry) if entry.owner.is_none() && self.config.strict => {
                    debug!(line = candidate.line, "entry without owner rejected");
                    return Err(FormatError::PatternNotFound);
                }
                Ok(entry) => records.push(self.build_record(&entry)),
                Err(reason) if self.config.strict => {
                    debug!(line = candidate.line, ?reason, "entry rejected");
                    return Err(FormatError::PatternNotFound);
                }
                Err(reason) => {
                    warn!(line = candidate.line, ?reason, "skipping malformed entry");
                }
            }
        }

        if records.is_empty() {
            return Err(FormatError::PatternNotFound);
        }

        let counts = Counts {
            matched: records.len(),
            expected: self.expected_count(region),
        };
        debug!(
            matched = counts.matched,
            expected = counts.expected,
            "entries extracted"
        );

        Ok(Extraction { records, counts })
    }

    fn expected_count(&self, region: &str) -> usize {
        match self.config.count_policy {
            CountPolicy::Newlines => region.matches('\n').count(),
            CountPolicy::DashLines => region.split('\n').filter(|l| grammar::is_dash_line(l)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> GrammarParser {
        GrammarParser::with_config(
            &ExtractionConfig {
                strict: false,
                ..ExtractionConfig::default()
            },
            &LinkConfig::default(),
        )
    }

    #[test]
    fn test_entry_without_change_number_is_rejected() {
        let parser = GrammarParser::new();
        assert_eq!(
            parser.parse("- @a Fix #(https://github.com/o/r/pull/1)"),
            Err(FormatError::PatternNotFound)
        );
    }

    #[test]
    fn test_parse_single_entry() {
        let parser = GrammarParser::new();
        let extraction = parser
            .parse("- @alice Fix bug CXJD-1 #10(https://github.com/Org/repo/pull/10)")
            .unwrap();

        assert_eq!(
            extraction.records,
            vec![ChangeRecord {
                owner: "@ alice".to_string(),
                description: "Fix bug".to_string(),
                reference_codes: vec!["CXJD-1".to_string()],
                external_code: "10".to_string(),
                external_url: "https://github.com/Org/repo/pull/10".to_string(),
            }]
        );
        assert_eq!(extraction.counts, Counts { matched: 1, expected: 0 });
    }

    #[test]
    fn test_parse_keeps_codes_when_not_stripping() {
        let parser = GrammarParser::with_config(
            &ExtractionConfig {
                strip_reference_codes: false,
                ..ExtractionConfig::default()
            },
            &LinkConfig::default(),
        );
        let extraction = parser
            .parse("- @a sar-3 Typo fix #1(https://github.com/o/r/pull/1)")
            .unwrap();
        assert_eq!(extraction.records[0].description, "sar-3 Typo fix");
        assert_eq!(extraction.records[0].reference_codes, vec!["SAR-3"]);
    }

    #[test]
    fn test_parse_wrapped_description_collapses() {
        let parser = GrammarParser::new();
        let extraction = parser
            .parse("- @a Long\n   wrapped   text #1(https://github.com/o/r/pull/1)\n- @b Short #2(https://github.com/o/r/pull/2)")
            .unwrap();
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].description, "Long wrapped text");
        assert_eq!(extraction.counts.expected, 2);
    }

    #[test]
    fn test_strict_missing_owner_fails_whole_extraction() {
        let parser = GrammarParser::new();
        let result = parser.parse(
            "- @a Good #1(https://github.com/o/r/pull/1)\n- No owner #2(https://github.com/o/r/pull/2)",
        );
        assert_eq!(result, Err(FormatError::PatternNotFound));
    }

    #[test]
    fn test_lenient_missing_owner_uses_sentinel() {
        let extraction = lenient()
            .parse("- @a Good #1(https://github.com/o/r/pull/1)\n- No owner #2(https://github.com/o/r/pull/2)")
            .unwrap();
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[1].owner, UNKNOWN_OWNER);
    }

    #[test]
    fn test_lenient_skips_entries_without_reference() {
        let extraction = lenient()
            .parse("- @a Good #1(https://github.com/o/r/pull/1)\n- @b no link\n- @c Also #3(https://github.com/o/r/pull/3)")
            .unwrap();
        assert_eq!(extraction.counts, Counts { matched: 2, expected: 2 });
    }

    #[test]
    fn test_no_candidates() {
        let parser = GrammarParser::new();
        assert_eq!(
            parser.parse("just some prose"),
            Err(FormatError::PatternNotFound)
        );
        assert_eq!(lenient().parse("- @a no link"), Err(FormatError::PatternNotFound));
    }

    #[test]
    fn test_url_prefix_restricts_hosts() {
        let parser = GrammarParser::with_config(
            &ExtractionConfig::default(),
            &LinkConfig {
                change_url_prefix: "https://github.com/NomadHealth".to_string(),
                ..LinkConfig::default()
            },
        );
        assert_eq!(
            parser.parse("- @a x #1(https://github.com/Other/r/pull/1)"),
            Err(FormatError::PatternNotFound)
        );
        assert!(parser
            .parse("- @a x #1(https://github.com/NomadHealth/r/pull/1)")
            .is_ok());
    }

    #[test]
    fn test_expected_count_policies() {
        let region = "- @a one\n  wrapped\n- @b two";
        assert_eq!(GrammarParser::new().expected_count(region), 2);

        let parser = GrammarParser::with_config(
            &ExtractionConfig {
                count_policy: CountPolicy::DashLines,
                ..ExtractionConfig::default()
            },
            &LinkConfig::default(),
        );
        assert_eq!(parser.expected_count(region), 2);
        assert_eq!(parser.expected_count("- @a one\n- @b two\n- @c three"), 3);
    }
}
