//! User configuration loaded from `config.toml`.
//!
//! Looked up at `$XDG_CONFIG_HOME/zcalc/config.toml` unless a path is given.
//! A missing file yields the defaults; every field is optional.
//!
//! ```toml
//! angle_mode = "rad"
//! max_digits = 16
//! percent_resets_entry = false
//! panel_width = 24
//! ```

use crate::calculator::{AngleMode, CalculatorOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const DEFAULT_PANEL_WIDTH: usize = 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub angle_mode: AngleMode,
    pub max_digits: Option<usize>,
    pub percent_resets_entry: bool,
    pub panel_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Deg,
            max_digits: None,
            percent_resets_entry: false,
            panel_width: DEFAULT_PANEL_WIDTH,
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(contents)?;
        if config.max_digits == Some(0) {
            warn!("max_digits = 0 would block all input, treating as unbounded");
            config.max_digits = None;
        }
        Ok(config)
    }

    pub fn calculator_options(&self) -> CalculatorOptions {
        CalculatorOptions {
            angle_mode: self.angle_mode,
            max_digits: self.max_digits,
            percent_resets_entry: self.percent_resets_entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::parse(
            r#"
            angle_mode = "rad"
            max_digits = 12
            percent_resets_entry = true
            panel_width = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.angle_mode, AngleMode::Rad);
        assert_eq!(config.max_digits, Some(12));
        assert!(config.percent_resets_entry);
        assert_eq!(config.panel_width, 30);

        let options = config.calculator_options();
        assert_eq!(options.angle_mode, AngleMode::Rad);
        assert_eq!(options.max_digits, Some(12));
    }

    #[test]
    fn test_zero_max_digits_is_unbounded() {
        let config = Config::parse("max_digits = 0").unwrap();
        assert_eq!(config.max_digits, None);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(Config::parse("colour = \"blue\"").is_err());
        assert!(Config::parse("angle_mode = \"grad\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "angle_mode = \"rad\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.angle_mode, AngleMode::Rad);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
