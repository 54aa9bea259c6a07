//! Formatting outcomes and their classification
//!
//! Every run ends in exactly one [`Outcome`]. Codes and descriptions are
//! stable: they are shown to operators in the status banner of a message.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Severity of an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing to report
    Informative,
    /// Output was produced but is incomplete
    Warning,
    /// The body could not be formatted
    Error,
}

/// A failure that stops a formatting run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormatError {
    #[error("Error :: Empty body: PR has an empty body")]
    EmptyBody,

    #[error("Error :: Missing sign: robot: auto generated pull request")]
    RobotSignMissing,

    #[error("Error :: Missing title: Missing # Changes")]
    TitleMissing,

    #[error("Error :: Pattern not found: - @user ... [GithubCode](GithubUrl)")]
    PatternNotFound,

    /// Only raised when resolving a repository from a promotion title
    #[error("Error :: Repository name not found: - Promote <repo-name>")]
    RepoNameMissing,
}

impl FormatError {
    /// Numeric code shown in status banners
    pub fn code(&self) -> u16 {
        match self {
            Self::EmptyBody => 300,
            Self::RobotSignMissing => 320,
            Self::TitleMissing => 340,
            Self::PatternNotFound => 360,
            Self::RepoNameMissing => 380,
        }
    }

    /// Stable identifier used in JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmptyBody => "empty_body",
            Self::RobotSignMissing => "robot_sign_missing",
            Self::TitleMissing => "title_missing",
            Self::PatternNotFound => "pattern_not_found",
            Self::RepoNameMissing => "repo_name_missing",
        }
    }
}

/// Result of a formatting run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every expected entry was extracted
    Success,
    /// Fewer entries matched than the heuristic expected
    NotAllProcessed { matched: usize, expected: usize },
    /// The run stopped at the given error
    Failed(FormatError),
}

impl Outcome {
    /// Numeric code shown in status banners
    pub fn code(&self) -> u16 {
        match self {
            Self::Success => 0,
            Self::NotAllProcessed { .. } => 100,
            Self::Failed(err) => err.code(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Success => Severity::Informative,
            Self::NotAllProcessed { .. } => Severity::Warning,
            Self::Failed(_) => Severity::Error,
        }
    }

    /// Human readable description
    pub fn description(&self) -> String {
        match self {
            Self::Success => "Formatting successful".to_string(),
            Self::NotAllProcessed { .. } => {
                "Warning :: Not all the PRs in the body matched the expected format".to_string()
            }
            Self::Failed(err) => err.to_string(),
        }
    }

    /// Stable identifier used in JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotAllProcessed { .. } => "not_all_processed",
            Self::Failed(err) => err.name(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether extracted records may be rendered
    pub fn has_records(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Banner line appended to messages, e.g. `[ 360 ] Error :: Pattern not found: ...`
    pub fn status_line(&self) -> String {
        format!("[ {} ] {}", self.code(), self.description())
    }
}

impl From<FormatError> for Outcome {
    fn from(err: FormatError) -> Self {
        Self::Failed(err)
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Outcome", 4)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("severity", &self.severity())?;
        state.serialize_field("description", &self.description())?;
        state.end()
    }
}
