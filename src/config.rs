//! Configuration file handling for mccs.
//!
//! Loads configuration from `~/.config/mccs/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::MAX_SCALE;

/// Configuration file structure for mccs.
/// Loaded from ~/.config/mccs/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Directory holding the art files.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Extension tried when a name does not match a file as given.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            dir: None,
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_scale() -> u32 {
    1
}

/// Contents written by `mccs config init`.
pub const DEFAULT_CONFIG: &str = r#"# mccs configuration

[library]
# Directory containing the art files
# dir = "/home/me/colorscripts"
# Extension tried when a name is given without one
extension = "txt"

[render]
# Default scale factor, 1 to 64 (1 = no scaling)
scale = 1
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user asked for explicitly.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !(1..=MAX_SCALE).contains(&config.render.scale) {
            return Err(ConfigError::InvalidScale {
                path: path.to_path_buf(),
            });
        }
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The art directory: the configured one, or the platform default.
    pub fn art_dir(&self) -> PathBuf {
        self.library.dir.clone().unwrap_or_else(default_art_dir)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidScale {
        path: PathBuf,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' does not exist", path.display())
            }
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
            ConfigError::InvalidScale { path } => {
                write!(
                    f,
                    "Invalid config file '{}': render.scale must be between 1 and {}",
                    path.display(),
                    MAX_SCALE
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("mccs").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/mccs/config.toml")
        })
}

/// Get the default art directory.
/// Default: ~/.local/share/mccs/colorscripts/ (platform data dir)
pub fn default_art_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("mccs").join("colorscripts"))
        .unwrap_or_else(|| PathBuf::from("colorscripts"))
}
