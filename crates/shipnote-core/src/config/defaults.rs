//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "shipnote.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "shipnote.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".shipnote.toml",
        ".shipnote.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# shipnote configuration

[markers]
signature = ":robot: auto generated pull request"
changes_header = "# Changes"

[links]
# "direct" builds tracker URLs from tracker_base_url,
# "footer" reads "[CODE]: URL" definitions below the signature
mode = "direct"
tracker_base_url = "https://nomadhealth.atlassian.net/browse/"
unknown_url = "http://unknown"
change_url_prefix = "https://github.com/"

[extraction]
strict = true
# "newlines" or "dash_lines"
count_policy = "newlines"
strip_reference_codes = true

[message]
bullet = "•"
date_format = "%m/%d/%Y at %H:%M"
uppercase_field_labels = false
organization = "NomadHealth"
max_body_bytes = 1048576
"##;
