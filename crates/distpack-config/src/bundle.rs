use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Ordered source file lists for each asset category of a bundle.
///
/// Every path listed here is copied into `assets/`. Whether a path also
/// contributes markup depends on its category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSources {
  /// Style sheets, linked when the filename ends in `.css`.
  pub css: Vec<PathBuf>,

  /// Scripts, loaded as modules when the filename ends in `.js`.
  pub js: Vec<PathBuf>,

  /// Binary modules, always preloaded as `application/wasm`.
  pub wasm: Vec<PathBuf>,

  /// Fonts, always preloaded with a `font/<ext>` type.
  pub fonts: Vec<PathBuf>,

  /// Generic assets, copied without any markup.
  pub assets: Vec<PathBuf>,
}

impl AssetSources {
  /// Append another set of sources after this one, keeping order.
  pub fn extend(&mut self, other: Self) {
    self.css.extend(other.css);
    self.js.extend(other.js);
    self.wasm.extend(other.wasm);
    self.fonts.extend(other.fonts);
    self.assets.extend(other.assets);
  }

  /// Iterate over every source path in processing order.
  pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
    self
      .css
      .iter()
      .chain(&self.js)
      .chain(&self.wasm)
      .chain(&self.fonts)
      .chain(&self.assets)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.css.len()
      + self.js.len()
      + self.wasm.len()
      + self.fonts.len()
      + self.assets.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Partial bundle configuration, as read from a config file or assembled from
/// command line flags.
///
/// Every field is optional here so that several layers can be merged before
/// the result is validated into a [`Bundle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
  /// Destination root. `assets/` and `index.html` are written below it.
  pub output_dir: Option<PathBuf>,

  /// Document title.
  pub title: Option<String>,

  /// Text of the `<h1>` element.
  pub header: Option<String>,

  /// Text of the `<p>` element.
  pub content: Option<String>,

  /// URL prefix for generated asset references.
  pub public_path: Option<String>,

  /// Custom index template replacing the embedded one.
  pub template_path: Option<PathBuf>,

  #[serde(flatten)]
  pub sources: AssetSources,
}

/// A validated bundle request.
///
/// Unlike [`BundleConfig`], the required fields are guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
  pub output_dir:    PathBuf,
  pub title:         String,
  pub header:        String,
  pub content:       String,
  pub public_path:   String,
  pub template_path: Option<PathBuf>,
  pub sources:       AssetSources,
}

impl Bundle {
  /// Directory that receives the copied source files.
  #[must_use]
  pub fn assets_dir(&self) -> PathBuf {
    self.output_dir.join("assets")
  }

  /// Path of the generated document.
  #[must_use]
  pub fn index_path(&self) -> PathBuf {
    self.output_dir.join("index.html")
  }
}

impl BundleConfig {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unknown extension, or
  /// does not parse.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
      ConfigError::Read {
        path: path.to_path_buf(),
        source,
      }
    })?;

    let ext = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match ext.as_deref() {
      Some("json") => {
        serde_json::from_str(&content).map_err(|source| {
          ConfigError::Json {
            path: path.to_path_buf(),
            source,
          }
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|source| {
          ConfigError::Toml {
            path: path.to_path_buf(),
            source,
          }
        })
      },
      _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
  }

  /// Load and merge config files in order, then apply `KEY=VALUE` overrides.
  ///
  /// With no files and no overrides this is [`BundleConfig::default`].
  ///
  /// # Errors
  ///
  /// Returns an error if a file fails to load or an override is malformed.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    for config_path in config_files {
      let layer = Self::from_file(config_path)?;
      log::debug!("Loaded config file {}", config_path.display());
      config.merge(layer);
    }

    if config_files.len() > 1 {
      log::info!("Loaded and merged {} config files", config_files.len());
    }

    config.apply_overrides(config_overrides)?;

    Ok(config)
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - [`Vec<T>`] fields: Other's vec is appended to this config's vec
  pub fn merge(&mut self, other: Self) {
    if other.output_dir.is_some() {
      self.output_dir = other.output_dir;
    }
    if other.title.is_some() {
      self.title = other.title;
    }
    if other.header.is_some() {
      self.header = other.header;
    }
    if other.content.is_some() {
      self.content = other.content;
    }
    if other.public_path.is_some() {
      self.public_path = other.public_path;
    }
    if other.template_path.is_some() {
      self.template_path = other.template_path;
    }
    self.sources.extend(other.sources);
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if an override string is not in KEY=VALUE format or the
  /// key is not recognized.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value)?;
    }

    Ok(())
  }

  // Values are kept untrimmed; leading spaces may be meaningful in content.
  fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "output_dir" => self.output_dir = Some(PathBuf::from(value)),
      "title" => self.title = Some(value.to_string()),
      "header" => self.header = Some(value.to_string()),
      "content" => self.content = Some(value.to_string()),
      "public_path" => self.public_path = Some(value.to_string()),
      "template_path" => self.template_path = Some(PathBuf::from(value)),
      "css" => self.sources.css.push(PathBuf::from(value)),
      "js" => self.sources.js.push(PathBuf::from(value)),
      "wasm" => self.sources.wasm.push(PathBuf::from(value)),
      "fonts" => self.sources.fonts.push(PathBuf::from(value)),
      "assets" => self.sources.assets.push(PathBuf::from(value)),
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }
    Ok(())
  }

  /// Check that every required option is present and produce a [`Bundle`].
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::MissingField`] naming the first absent option.
  pub fn validate(self) -> Result<Bundle, ConfigError> {
    Ok(Bundle {
      output_dir:    self
        .output_dir
        .ok_or(ConfigError::MissingField("output_dir"))?,
      title:         self.title.ok_or(ConfigError::MissingField("title"))?,
      header:        self.header.ok_or(ConfigError::MissingField("header"))?,
      content:       self.content.ok_or(ConfigError::MissingField("content"))?,
      public_path:   self.public_path.unwrap_or_default(),
      template_path: self.template_path,
      sources:       self.sources,
    })
  }
}
