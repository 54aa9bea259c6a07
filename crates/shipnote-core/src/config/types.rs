//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for shipnote
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Structural marker literals
    pub markers: MarkerConfig,

    /// Link resolution configuration
    pub links: LinkConfig,

    /// Entry extraction configuration
    pub extraction: ExtractionConfig,

    /// Message rendering configuration
    pub message: MessageConfig,
}

/// Literals that delimit the changelog region of a promotion body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Bot signature that closes the entries region
    pub signature: String,

    /// Heading that opens the entries region
    pub changes_header: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            signature: ":robot: auto generated pull request".to_string(),
            changes_header: "# Changes".to_string(),
        }
    }
}

/// How tracker codes are turned into URLs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMode {
    /// Interpolate the code onto `tracker_base_url`
    #[default]
    Direct,
    /// Look the code up in the link definitions below the signature
    Footer,
}

/// Link resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Resolution mode
    pub mode: LinkMode,

    /// Issue tracker browse URL; the upper-cased code is appended to it
    pub tracker_base_url: String,

    /// Sentinel URL used whenever a link cannot be resolved
    pub unknown_url: String,

    /// Prefix every pull request URL in an entry must start with
    pub change_url_prefix: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            mode: LinkMode::Direct,
            tracker_base_url: "https://nomadhealth.atlassian.net/browse/".to_string(),
            unknown_url: "http://unknown".to_string(),
            change_url_prefix: "https://github.com/".to_string(),
        }
    }
}

/// Policy for the expected-entry heuristic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// Count newline characters in the entries region
    #[default]
    Newlines,
    /// Count top-level lines that start with a dash
    DashLines,
}

/// Entry extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fail the whole extraction when any entry cannot be decomposed
    pub strict: bool,

    /// How the expected entry count is estimated
    pub count_policy: CountPolicy,

    /// Remove tracker codes from the edges of descriptions
    pub strip_reference_codes: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strict: true,
            count_policy: CountPolicy::Newlines,
            strip_reference_codes: true,
        }
    }
}

/// Message rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Bullet prefix for each entry line
    pub bullet: String,

    /// chrono format string for the deployment timestamp
    pub date_format: String,

    /// Default notification title for block messages
    pub title: Option<String>,

    /// Render field labels in upper case
    pub uppercase_field_labels: bool,

    /// Organization prepended to repository names taken from promotion titles
    pub organization: String,

    /// Largest body accepted by the CLI
    pub max_body_bytes: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            bullet: "•".to_string(),
            date_format: "%m/%d/%Y at %H:%M".to_string(),
            title: None,
            uppercase_field_labels: false,
            organization: "NomadHealth".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}
