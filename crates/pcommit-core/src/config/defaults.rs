//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "pcommit.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "pcommit.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".pcommit.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".pcommit.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# pcommit configuration

changelog:
  file: CHANGELOG.md
  # since: "1.0.0"
  skip_unknown: true
  sections:
    fix:
      include: true
      long_description: true
      files: true
    feat:
      include: true
      long_description: true
      files: true
    ref:
      include: true
      long_description: true
      files: true
    test:
      include: true
      long_description: true
      files: true

message:
  dry_run: false
"#;
