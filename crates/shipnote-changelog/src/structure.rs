//! Structural validation of a normalized body
//!
//! A promotion body looks like:
//!
//! ```text
//! # Changes
//! - @owner description #123(https://github.com/org/repo/pull/123)
//!
//! :robot: auto generated pull request
//!
//! CODE-1: https://tracker/browse/CODE-1
//! ```
//!
//! The entries region sits between the header and the signature; anything
//! after the signature is treated as link definitions.

use shipnote_core::config::MarkerConfig;
use tracing::debug;

use crate::outcome::FormatError;

/// The two regions of a structurally valid body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Text between the changes header and the signature, trimmed
    pub entries: &'a str,
    /// Text after the signature
    pub footer: &'a str,
}

/// Split a normalized body into its entries and footer regions.
///
/// Both markers are matched at their first occurrence. The header must
/// appear before the signature.
pub fn split_sections<'a>(
    text: &'a str,
    markers: &MarkerConfig,
) -> Result<Sections<'a>, FormatError> {
    if text.is_empty() {
        return Err(FormatError::EmptyBody);
    }

    let (head, footer) = text
        .split_once(markers.signature.as_str())
        .ok_or(FormatError::RobotSignMissing)?;

    let (_, entries) = head
        .split_once(markers.changes_header.as_str())
        .ok_or(FormatError::TitleMissing)?;

    let entries = entries.trim();
    debug!(
        entries_len = entries.len(),
        footer_len = footer.len(),
        "body sections located"
    );

    Ok(Sections { entries, footer })
}
