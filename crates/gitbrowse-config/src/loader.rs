// GitBrowse - Literate Browsing for Git Objects
// Copyright (C) 2025 GitBrowse Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use crate::validation::Validator;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "GITBROWSE_";

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML
    Toml,
    /// YAML
    Yaml,
    /// JSON
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::InvalidPath(path.to_path_buf())),
        }
    }

    /// Get format name as string
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Json => "JSON",
        }
    }
}

/// Configuration loader
#[derive(Debug)]
pub struct ConfigLoader {
    validate: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        ConfigLoader { validate: true }
    }

    /// Create a loader without validation
    pub fn without_validation() -> Self {
        ConfigLoader { validate: false }
    }

    /// Load configuration from a file
    pub async fn load_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Config> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).await?;

        info!(
            "Loaded {} configuration file: {}",
            format.name(),
            path.display()
        );

        self.load_from_string(&content, format)
    }

    /// Load configuration from a string
    pub fn load_from_string(&self, content: &str, format: ConfigFormat) -> ConfigResult<Config> {
        let config: Config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };

        debug!("Configuration loaded from {}", format.name());

        if self.validate {
            config.validate()?;
        }

        Ok(config)
    }

    /// Load configuration from a file, then apply `GITBROWSE_*` overrides
    ///
    /// Validation runs after the overrides so the effective values are checked.
    pub async fn load_with_overrides<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Config> {
        let mut config = Self::without_validation().load_file(path).await?;
        self.apply_env_overrides(&mut config)?;
        if self.validate {
            config.validate()?;
        }
        Ok(config)
    }

    /// Defaults plus `GITBROWSE_*` overrides, for runs without a config file
    pub fn load_from_env(&self) -> ConfigResult<Config> {
        let mut config = Config::default();
        self.apply_env_overrides(&mut config)?;
        if self.validate {
            config.validate()?;
        }
        Ok(config)
    }

    /// Apply environment variable overrides from the process environment
    pub fn apply_env_overrides(&self, config: &mut Config) -> ConfigResult<()> {
        self.apply_overrides_from(config, |name| std::env::var(name).ok())
    }

    /// Apply overrides read through `lookup`, keyed by full variable name
    pub fn apply_overrides_from<F>(&self, config: &mut Config, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{}{}", ENV_PREFIX, suffix);
            lookup(&name).map(|value| (name, value))
        };

        // Store settings
        if let Some((_, value)) = var("STORE_URL") {
            config.store.url = Some(value);
        }
        if let Some((_, value)) = var("STORE_FIXTURE") {
            config.store.fixture = Some(PathBuf::from(value));
        }
        if let Some((name, value)) = var("STORE_TIMEOUT_SECS") {
            config.store.timeout_secs = value.parse().map_err(|_| {
                ConfigError::env_var_parsing_error(&name, &value, "expected a positive integer")
            })?;
        }

        // Browse settings
        if let Some((_, value)) = var("DEFAULT_BRANCH") {
            config.browse.default_branch = value;
        }

        // Render settings
        if let Some((name, value)) = var("DOC_WIDTH") {
            config.render.doc_width = value.parse().map_err(|_| {
                ConfigError::env_var_parsing_error(&name, &value, "expected a column count")
            })?;
        }

        // Observability settings
        if let Some((_, value)) = var("LOG_LEVEL") {
            config.observability.log_level = value;
        }
        if let Some((_, value)) = var("LOG_FORMAT") {
            config.observability.log_format = value;
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path("config.toml").unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("config.yaml").unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("config.yml").unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("config.json").unwrap(), ConfigFormat::Json);
    }

    #[test]
    fn test_format_detection_error() {
        assert!(matches!(
            ConfigFormat::from_path("config.xml"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ConfigFormat::from_path("config"),
            Err(ConfigError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_parse_each_format() {
        let loader = ConfigLoader::new();

        let toml = "[render]\ndoc_width = 60\n";
        let config = loader.load_from_string(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.render.doc_width, 60);

        let yaml = "browse:\n  default_branch: main\n";
        let config = loader.load_from_string(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.browse.default_branch, "main");

        let json = r#"{"store": {"url": "http://localhost:5984/gitbrowser"}}"#;
        let config = loader.load_from_string(json, ConfigFormat::Json).unwrap();
        assert_eq!(config.store.url.as_deref(), Some("http://localhost:5984/gitbrowser"));
    }

    #[test]
    fn test_validation_can_be_skipped() {
        let json = r#"{"render": {"doc_width": 5}}"#;
        assert!(ConfigLoader::new().load_from_string(json, ConfigFormat::Json).is_err());
        assert!(ConfigLoader::without_validation()
            .load_from_string(json, ConfigFormat::Json)
            .is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars = env(&[
            ("GITBROWSE_STORE_FIXTURE", "/tmp/repo.json"),
            ("GITBROWSE_STORE_TIMEOUT_SECS", "5"),
            ("GITBROWSE_DEFAULT_BRANCH", "dev"),
            ("GITBROWSE_DOC_WIDTH", "72"),
            ("GITBROWSE_LOG_LEVEL", "debug"),
            ("GITBROWSE_LOG_FORMAT", "json"),
        ]);
        let mut config = Config::default();
        ConfigLoader::new()
            .apply_overrides_from(&mut config, |name| vars.get(name).cloned())
            .unwrap();

        assert_eq!(config.store.fixture, Some(PathBuf::from("/tmp/repo.json")));
        assert_eq!(config.store.timeout_secs, 5);
        assert_eq!(config.browse.default_branch, "dev");
        assert_eq!(config.render.doc_width, 72);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, "json");
    }

    #[test]
    fn test_bad_numeric_override() {
        let vars = env(&[("GITBROWSE_DOC_WIDTH", "wide")]);
        let mut config = Config::default();
        let err = ConfigLoader::new()
            .apply_overrides_from(&mut config, |name| vars.get(name).cloned())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EnvVarParsingError { ref variable_name, .. } if variable_name == "GITBROWSE_DOC_WIDTH"
        ));
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let mut config = Config::default();
        ConfigLoader::new()
            .apply_overrides_from(&mut config, |_| None)
            .unwrap();
        assert_eq!(config, Config::default());
    }
}
