//! Application configuration.
//!
//! # Responsibility
//! - Parse the optional TOML configuration file into `AppConfig`.
//! - Validate values before anything is initialised from them.
//!
//! # Invariants
//! - Every key is optional; missing keys take their default.
//! - Unknown keys are rejected, not ignored.
//! - A validated config carries a normalised log level.

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

labeled_enum! {
    pub enum Theme {
        Light => "light",
        Dark => "dark",
    }
}

labeled_enum! {
    /// Interface languages offered by the language switcher.
    pub enum Language {
        En => "en",
        Fr => "fr",
        Ch => "ch",
        Ar => "ar",
        Sw => "sw",
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl Language {
    /// Arabic is laid out right to left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid { field, message } => write!(f, "invalid config `{field}`: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Settings read at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub log_level: String,
    /// Absolute directory for rolling log files; stderr when unset.
    pub log_dir: Option<PathBuf>,
    /// SQLite file holding compliance frameworks and alerts.
    pub compliance_db: Option<PathBuf>,
    pub theme: Theme,
    pub language: Language,
    pub sidebar_collapsed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            compliance_db: None,
            theme: Theme::default(),
            language: Language::default(),
            sidebar_collapsed: false,
        }
    }
}

impl AppConfig {
    /// Reads and validates a config file.
    ///
    /// # Errors
    /// - `Io` when the file cannot be read.
    /// - `Parse` for malformed TOML, wrong value types or unknown keys.
    /// - `Invalid` when a value fails validation.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates config text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validated()
    }

    /// Replaces the log level, re-running validation.
    pub fn with_log_level(mut self, level: &str) -> ConfigResult<Self> {
        self.log_level = level.to_string();
        self.validated()
    }

    fn validated(mut self) -> ConfigResult<Self> {
        self.log_level = normalize_level(&self.log_level)
            .map_err(|message| ConfigError::Invalid {
                field: "log_level",
                message,
            })?
            .to_string();

        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid {
                    field: "log_dir",
                    message: format!("must be an absolute path, got `{}`", dir.display()),
                });
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, Language, Theme};

    #[test]
    fn empty_text_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn level_is_normalised() {
        let config = AppConfig::from_toml_str("log_level = \"WARNING\"").unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn rtl_language() {
        assert!(Language::Ar.is_rtl());
        assert!(!Language::Sw.is_rtl());
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = AppConfig::from_toml_str("log_dir = \"logs\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "log_dir", .. }));
    }
}
