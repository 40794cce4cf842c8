//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    let file = config.changelog.file.to_string_lossy();
    if file.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    if file.ends_with('/') || file.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "must name a file, not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_file_rejected() {
        let mut config = Config::default();
        config.changelog.file = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_directory_file_rejected() {
        let mut config = Config::default();
        config.changelog.file = PathBuf::from("docs/");
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_blank_since_accepted() {
        let mut config = Config::default();
        config.changelog.since = Some("  ".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
