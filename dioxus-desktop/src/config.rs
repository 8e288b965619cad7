//! Build-time site configuration.
//!
//! The site can be served from a sub-path, so every absolute asset path goes
//! through [`SiteConfig::with_base`].

use thiserror::Error;

pub const BASE_PATH_VAR: &str = "YURIOS_BASE_PATH";
pub const ANALYTICS_VAR: &str = "YURIOS_ANALYTICS";
pub const ANALYTICS_SRC_VAR: &str = "YURIOS_ANALYTICS_SRC";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("YURIOS_ANALYTICS is enabled but YURIOS_ANALYTICS_SRC is not set")]
    MissingAnalyticsSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    /// Normalized prefix: empty, or a leading slash with no trailing slash
    pub base_path: String,
    pub analytics: bool,
    pub analytics_src: Option<String>,
}

impl SiteConfig {
    /// Configuration baked in by the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| {
            match name {
                BASE_PATH_VAR => option_env!("YURIOS_BASE_PATH"),
                ANALYTICS_VAR => option_env!("YURIOS_ANALYTICS"),
                ANALYTICS_SRC_VAR => option_env!("YURIOS_ANALYTICS_SRC"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_path = normalize_base_path(lookup(BASE_PATH_VAR).as_deref().unwrap_or(""))?;
        let analytics = match lookup(ANALYTICS_VAR) {
            Some(value) => parse_flag(ANALYTICS_VAR, &value)?,
            None => false,
        };
        let analytics_src = lookup(ANALYTICS_SRC_VAR)
            .map(|src| src.trim().to_string())
            .filter(|src| !src.is_empty());

        if analytics && analytics_src.is_none() {
            return Err(ConfigError::MissingAnalyticsSource);
        }

        Ok(Self {
            base_path,
            analytics,
            analytics_src,
        })
    }

    /// Prefix an absolute path with the base path. Relative paths and full URLs
    /// are returned unchanged.
    pub fn with_base(&self, path: &str) -> String {
        if path.starts_with('/') && !path.starts_with("//") {
            format!("{}{}", self.base_path, path)
        } else {
            path.to_string()
        }
    }

    pub fn analytics_script(&self) -> Option<&str> {
        if self.analytics {
            self.analytics_src.as_deref()
        } else {
            None
        }
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.contains("://") || trimmed.contains(char::is_whitespace) || trimmed.contains('?') {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }
    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn empty_environment_serves_from_root() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.base_path, "");
        assert!(!config.analytics);
        assert_eq!(config.with_base("/media/whisper.mp3"), "/media/whisper.mp3");
    }

    #[test]
    fn base_path_is_normalized() {
        let config = config_from(&[(BASE_PATH_VAR, "yurios/")]).unwrap();
        assert_eq!(config.base_path, "/yurios");
        assert_eq!(config.with_base("/fileicon.png"), "/yurios/fileicon.png");
    }

    #[test]
    fn with_base_leaves_relative_and_external_paths() {
        let config = config_from(&[(BASE_PATH_VAR, "/site")]).unwrap();
        assert_eq!(config.with_base("media/a.mp3"), "media/a.mp3");
        assert_eq!(
            config.with_base("https://tenor.com/embed.js"),
            "https://tenor.com/embed.js"
        );
        assert_eq!(config.with_base("//cdn.example/x.js"), "//cdn.example/x.js");
    }

    #[test]
    fn rejects_url_as_base_path() {
        let err = config_from(&[(BASE_PATH_VAR, "https://example.com/x")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBasePath(_)));
    }

    #[test]
    fn analytics_toggle_requires_source() {
        let err = config_from(&[(ANALYTICS_VAR, "on")]).unwrap_err();
        assert_eq!(err, ConfigError::MissingAnalyticsSource);

        let config = config_from(&[
            (ANALYTICS_VAR, "TRUE"),
            (ANALYTICS_SRC_VAR, "/_insights/script.js"),
        ])
        .unwrap();
        assert_eq!(config.analytics_script(), Some("/_insights/script.js"));
    }

    #[test]
    fn analytics_source_ignored_when_disabled() {
        let config = config_from(&[
            (ANALYTICS_VAR, "0"),
            (ANALYTICS_SRC_VAR, "/_insights/script.js"),
        ])
        .unwrap();
        assert_eq!(config.analytics_script(), None);
    }

    #[test]
    fn invalid_flag_is_reported() {
        let err = config_from(&[(ANALYTICS_VAR, "maybe")]).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }
}
