//! Deployment note types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::outcome::Outcome;

/// Owner shown when an entry carries no `@handle`
pub const UNKNOWN_OWNER: &str = "@ Unknown";

/// One promoted change parsed from the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// Author handle with the mention defused, e.g. `@ alice`
    pub owner: String,
    /// Summary text without structural tokens
    pub description: String,
    /// Upper-cased tracker codes in order of first appearance
    pub reference_codes: Vec<String>,
    /// Pull request number without the leading `#`
    pub external_code: String,
    /// Absolute pull request URL
    pub external_url: String,
}

/// A record together with its rendered tracker link fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRecord {
    #[serde(flatten)]
    pub record: ChangeRecord,
    /// `<URL|[CODE]>` fragments joined by a space
    pub links: String,
}

/// Expected-versus-matched entry counts of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Entries successfully decomposed
    pub matched: usize,
    /// Heuristic upper bound of entries in the body
    pub expected: usize,
}

impl Counts {
    pub fn is_incomplete(&self) -> bool {
        self.matched < self.expected
    }
}

/// Everything a renderer needs about one body
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The body exactly as submitted
    pub body: String,
    /// Extracted records, empty on failure
    pub records: Vec<ResolvedRecord>,
    pub counts: Counts,
    pub outcome: Outcome,
}

impl Report {
    /// Report for a run that stopped before extraction finished
    pub fn failed(body: impl Into<String>, outcome: Outcome, counts: Counts) -> Self {
        Self {
            body: body.into(),
            records: Vec::new(),
            counts,
            outcome,
        }
    }
}

/// Header parameters of a rendered message
#[derive(Debug, Clone)]
pub struct MessageContext {
    /// Deployment time shown in the header line
    pub deployed_at: DateTime<Utc>,
    /// Notification title (block messages only)
    pub title: Option<String>,
    /// Ordered label/value pairs for the fields block
    pub params: Vec<(String, String)>,
}

impl MessageContext {
    /// Create a context for the given deployment time
    pub fn new(deployed_at: DateTime<Utc>) -> Self {
        Self {
            deployed_at,
            title: None,
            params: Vec::new(),
        }
    }

    /// Set the notification title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add or replace a field
    pub fn with_param(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_param(label, value);
        self
    }

    /// Set a field, keeping the position of an existing label
    pub fn set_param(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.params.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.params.push((label, value)),
        }
    }
}
