//! Configuration file handling for edgeglyph.
//!
//! Loads configuration from `<config dir>/edgeglyph/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ascii::{ConversionOptions, DEFAULT_CHAR_ASPECT, DEFAULT_EDGE_SENSITIVITY};
use crate::renderer::{RenderSettings, DEFAULT_TARGET_WIDTH};

/// Configuration file structure for edgeglyph.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub conversion: ConversionConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Output width in characters
    #[serde(default = "default_target_width")]
    pub target_width: u32,
    #[serde(default)]
    pub enable_edge_detection: bool,
    /// Higher values suppress more edges
    #[serde(default = "default_edge_sensitivity")]
    pub edge_sensitivity: f64,
    /// Vertical scale for character cells
    #[serde(default = "default_char_aspect")]
    pub char_aspect: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            target_width: default_target_width(),
            enable_edge_detection: false,
            edge_sensitivity: default_edge_sensitivity(),
            char_aspect: default_char_aspect(),
        }
    }
}

fn default_target_width() -> u32 {
    DEFAULT_TARGET_WIDTH
}

fn default_edge_sensitivity() -> f64 {
    DEFAULT_EDGE_SENSITIVITY
}

fn default_char_aspect() -> f64 {
    DEFAULT_CHAR_ASPECT
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render_settings()
            .validate()
            .map_err(ConfigError::Invalid)
    }

    /// Rendering settings described by this config.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            target_width: self.conversion.target_width,
            char_aspect: self.conversion.char_aspect,
            conversion: ConversionOptions {
                enable_edge_detection: self.conversion.enable_edge_detection,
                edge_sensitivity: self.conversion.edge_sensitivity,
            },
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("edgeglyph").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/edgeglyph/config.toml")
        })
}

/// Contents written by `edgeglyph config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# edgeglyph configuration

[conversion]
# Output width in characters
target_width = 100
# Draw - \ | / where the image has strong edges
enable_edge_detection = false
# Gradient magnitude needed for an edge glyph (higher = fewer edges)
edge_sensitivity = 100.0
# Row scale for character cells (characters are taller than wide)
char_aspect = 0.55
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.conversion.target_width, 100);
        assert!(!config.conversion.enable_edge_detection);
        assert_eq!(config.conversion.edge_sensitivity, 100.0);
        assert_eq!(config.conversion.char_aspect, 0.55);
    }

    #[test]
    fn test_default_toml_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("[conversion]\nenable_edge_detection = true\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.conversion.enable_edge_detection);
        assert_eq!(config.conversion.target_width, 100);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_explicit(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[conversion\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_zero_width_invalid() {
        let file = write_config("[conversion]\ntarget_width = 0\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_char_aspect_out_of_range() {
        for value in ["0.0", "-1.0", "nan", "1e9"] {
            let file = write_config(&format!("[conversion]\nchar_aspect = {}\n", value));
            assert!(
                matches!(Config::load(Some(file.path())), Err(ConfigError::Invalid(_))),
                "char_aspect = {}",
                value
            );
        }
    }

    #[test]
    fn test_negative_sensitivity_allowed() {
        let file = write_config("[conversion]\nedge_sensitivity = -5.0\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.render_settings().conversion.edge_sensitivity, -5.0);
    }
}
