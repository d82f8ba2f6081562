use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for distpack-config operations
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Missing required option: {0}")]
  MissingField(&'static str),

  #[error("Invalid substitutions: {0}")]
  Substitutions(String),

  #[error("Failed to read config file {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("Failed to parse JSON config from {}: {source}", path.display())]
  Json {
    path:   PathBuf,
    source: serde_json::Error,
  },

  #[error("Failed to parse TOML config from {}: {source}", path.display())]
  Toml {
    path:   PathBuf,
    source: toml::de::Error,
  },

  #[error("Unsupported config file format: {}", .0.display())]
  UnsupportedFormat(PathBuf),
}
