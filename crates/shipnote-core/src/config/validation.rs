//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_markers(config)?;
    validate_links(config)?;
    validate_message(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Characters removed from bodies before markers are searched for
const NORMALIZED_AWAY: [char; 5] = ['`', '\'', '"', '[', ']'];

fn validate_markers(config: &Config) -> Result<()> {
    let markers = [
        ("markers.signature", &config.markers.signature),
        ("markers.changes_header", &config.markers.changes_header),
    ];

    for (field, value) in markers {
        if value.trim().is_empty() {
            return Err(invalid(field, "marker cannot be empty").into());
        }

        if let Some(c) = value.chars().find(|c| NORMALIZED_AWAY.contains(c)) {
            return Err(invalid(
                field,
                format!("'{}' is stripped from bodies, so this marker can never match", c),
            )
            .into());
        }
    }

    Ok(())
}

fn validate_links(config: &Config) -> Result<()> {
    let urls = [
        ("links.tracker_base_url", &config.links.tracker_base_url),
        ("links.unknown_url", &config.links.unknown_url),
        ("links.change_url_prefix", &config.links.change_url_prefix),
    ];

    for (field, value) in urls {
        if let Err(e) = url::Url::parse(value) {
            return Err(invalid(field, format!("must be an absolute URL ({})", e)).into());
        }
    }

    Ok(())
}

fn validate_message(config: &Config) -> Result<()> {
    if config.message.bullet.is_empty() {
        return Err(invalid("message.bullet", "bullet cannot be empty").into());
    }

    if config.message.date_format.trim().is_empty() {
        return Err(invalid("message.date_format", "date format cannot be empty").into());
    }

    if config.message.max_body_bytes == 0 {
        return Err(invalid("message.max_body_bytes", "must be greater than zero").into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_header() {
        let mut config = Config::default();
        config.markers.changes_header = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_marker_with_stripped_character() {
        let mut config = Config::default();
        config.markers.signature = "`:robot:` auto generated".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("markers.signature"));

        let mut config = Config::default();
        config.markers.changes_header = "# [Changes]".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("markers.changes_header"));
    }

    #[test]
    fn test_validate_relative_tracker_url() {
        let mut config = Config::default();
        config.links.tracker_base_url = "browse/".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("links.tracker_base_url"));
    }

    #[test]
    fn test_validate_zero_body_limit() {
        let mut config = Config::default();
        config.message.max_body_bytes = 0;
        assert!(validate_config(&config).is_err());
    }
}
