//! Parser intermediate types

use crate::types::{ChangeRecord, Counts};

/// A dash line plus its continuation lines, cut after the first reference pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Candidate text, starting at the dash
    pub text: &'a str,
    /// 1-based line number of the dash line within the entries region
    pub line: usize,
}

/// `#123(https://...)` at the end of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePair<'a> {
    /// Byte offset of the `#`
    pub start: usize,
    /// Byte offset just past the closing parenthesis
    pub end: usize,
    /// Digits after the `#`
    pub code: &'a str,
    /// Text between the parentheses
    pub url: &'a str,
}

/// The four fields of a candidate, before cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// `@handle`, absent when the dash is not followed by one
    pub owner: Option<&'a str>,
    pub description: &'a str,
    pub code: &'a str,
    pub url: &'a str,
}

/// Why a candidate could not be decomposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecomposeError {
    /// The candidate does not start with `-` and whitespace
    MissingDash,
    /// `@` not followed by a handle and whitespace
    MalformedOwner,
    /// No `#digits(url)` pair with the expected URL prefix
    MissingReference,
}

/// Records extracted from an entries region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<ChangeRecord>,
    pub counts: Counts,
}
