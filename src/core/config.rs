use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Start with mixed payment turned on.
    #[serde(default)]
    pub mixed_payment: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("bg", "kasa", "kasa")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        // An empty file deserializes to null, treat it as all defaults
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
mixed_payment: true
output: json
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert!(config.mixed_payment);
        assert_eq!(config.output, OutputFormat::Json);

        let partial: AppConfig = serde_yaml::from_str("output: plain").unwrap();
        assert!(!partial.mixed_payment);
        assert_eq!(partial.output, OutputFormat::Plain);
    }

    #[test]
    fn test_invalid_output_is_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("output: xml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), "mixed_payment: true\n")?;
        let config = AppConfig::load_from_path(file.path())?;
        assert!(config.mixed_payment);
        assert_eq!(config.output, OutputFormat::Table);

        fs::write(file.path(), "")?;
        assert_eq!(AppConfig::load_from_path(file.path())?, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = AppConfig::load_from_path("/definitely/not/here/config.yaml");
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }
}
