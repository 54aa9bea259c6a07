//! Repository names from promotion pull request titles

use std::sync::LazyLock;

use regex::Regex;

use crate::outcome::FormatError;

/// `Promote <repo-name> ...`
static PROMOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Promote\s+([a-z/_-]+)").expect("Invalid regex"));

/// Resolve `Promote nomad-flask to production` into `Org/nomad-flask`
pub fn resolve_repository(promotion_title: &str, organization: &str) -> Result<String, FormatError> {
    let caps = PROMOTE_REGEX
        .captures(promotion_title.trim())
        .ok_or(FormatError::RepoNameMissing)?;
    Ok(format!("{}/{}", organization, caps[1].to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_repository() {
        assert_eq!(
            resolve_repository("Promote nomad-flask to production", "NomadHealth").unwrap(),
            "NomadHealth/nomad-flask"
        );
        assert_eq!(
            resolve_repository("promote Web_App", "Org").unwrap(),
            "Org/web_app"
        );
    }

    #[test]
    fn test_resolve_repository_missing() {
        assert_eq!(
            resolve_repository("Release v1.2", "Org"),
            Err(FormatError::RepoNameMissing)
        );
        assert_eq!(
            resolve_repository("Promote 123", "Org"),
            Err(FormatError::RepoNameMissing)
        );
        assert_eq!(resolve_repository("", "Org"), Err(FormatError::RepoNameMissing));
    }
}
