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
use crate::schema::*;

/// Validator for configuration settings
pub trait Validator {
    /// Check the settings, reporting the first problem found
    fn validate(&self) -> ConfigResult<()>;
}

/// Accepted values of `render.color`
pub const COLOR_CHOICES: [&str; 3] = ["auto", "always", "never"];

/// Accepted values of `observability.log_format`
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Accepted values of `observability.log_level`
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted range of `render.doc_width`
pub const DOC_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 16..=200;

impl Validator for Config {
    fn validate(&self) -> ConfigResult<()> {
        self.store.validate()?;
        self.browse.validate()?;
        self.render.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

impl Validator for StoreConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.url.is_some() && self.fixture.is_some() {
            return Err(ConfigError::ConflictingValues(
                "store.url and store.fixture are mutually exclusive".to_string(),
            ));
        }

        if let Some(url) = &self.url {
            if !is_http_url(url) {
                return Err(ConfigError::invalid_value(
                    "store.url",
                    format!("must be an http:// or https:// URL, got {}", url),
                ));
            }
        }

        if self.branch_index_id.is_empty() {
            return Err(ConfigError::MissingRequired(
                "store.branch_index_id".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "store.timeout_secs",
                "timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validator for BrowseConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_branch.is_empty() {
            return Err(ConfigError::MissingRequired(
                "browse.default_branch".to_string(),
            ));
        }
        if self.default_revision.is_empty() {
            return Err(ConfigError::MissingRequired(
                "browse.default_revision".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validator for RenderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !DOC_WIDTH_RANGE.contains(&self.doc_width) {
            return Err(ConfigError::invalid_value(
                "render.doc_width",
                format!(
                    "must be between {} and {}, got {}",
                    DOC_WIDTH_RANGE.start(),
                    DOC_WIDTH_RANGE.end(),
                    self.doc_width
                ),
            ));
        }

        if !COLOR_CHOICES.contains(&self.color.as_str()) {
            return Err(ConfigError::invalid_value(
                "render.color",
                format!("must be one of: {}", COLOR_CHOICES.join(", ")),
            ));
        }

        Ok(())
    }
}

impl Validator for ObservabilityConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_level",
                format!("must be one of: {}", LOG_LEVELS.join(", ")),
            ));
        }

        if !LOG_FORMATS.contains(&self.log_format.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "observability.log_format",
                format!("must be one of: {}", LOG_FORMATS.join(", ")),
            ));
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    matches!(rest, Some(rest) if !rest.is_empty() && !rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_url_and_fixture_conflict() {
        let mut config = Config::default();
        config.store.url = Some("http://localhost:5984/gitbrowser".to_string());
        assert!(config.validate().is_ok());

        config.store.fixture = Some(PathBuf::from("repo.json"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConflictingValues(_))
        ));
    }

    #[test]
    fn test_url_must_be_http() {
        for bad in ["localhost:5984", "ftp://host/db", "http://", "https:///db"] {
            let mut config = Config::default();
            config.store.url = Some(bad.to_string());
            assert!(config.validate().is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_timeout_must_be_positive() {
        let mut config = Config::default();
        config.store.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_doc_width_range() {
        let mut config = Config::default();
        config.render.doc_width = 16;
        assert!(config.validate().is_ok());
        config.render.doc_width = 200;
        assert!(config.validate().is_ok());
        config.render.doc_width = 15;
        assert!(config.validate().is_err());
        config.render.doc_width = 201;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enumerated_fields() {
        let mut config = Config::default();
        config.render.color = "sometimes".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.observability.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
        config.observability.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_branch_index_id() {
        let mut config = Config::default();
        config.store.branch_index_id = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired(ref field)) if field == "store.branch_index_id"
        ));
    }
}
