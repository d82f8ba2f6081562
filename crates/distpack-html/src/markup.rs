use std::path::PathBuf;

use distpack_config::AssetSources;

/// Separator between elements inside the head or body region.
const ELEMENT_SEPARATOR: &str = "\n    ";

/// Asset categories, in the order a bundle processes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  Stylesheet,
  Script,
  Wasm,
  Font,
  Asset,
}

impl AssetKind {
  pub const ALL: [Self; 5] = [
    Self::Stylesheet,
    Self::Script,
    Self::Wasm,
    Self::Font,
    Self::Asset,
  ];

  /// The source list holding this category.
  #[must_use]
  pub fn sources(self, sources: &AssetSources) -> &[PathBuf] {
    match self {
      Self::Stylesheet => &sources.css,
      Self::Script => &sources.js,
      Self::Wasm => &sources.wasm,
      Self::Font => &sources.fonts,
      Self::Asset => &sources.assets,
    }
  }

  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Stylesheet => "stylesheet",
      Self::Script => "script",
      Self::Wasm => "wasm module",
      Self::Font => "font",
      Self::Asset => "asset",
    }
  }
}

/// Build the URL an asset is served from.
///
/// With an empty `public_path` this is `assets/<filename>`. Otherwise the
/// prefix and `assets/<filename>` are joined with a single `/` unless the
/// prefix already ends in one, and backslashes become forward slashes.
///
/// ```
/// use distpack_html::asset_url;
///
/// assert_eq!(asset_url("", "style.css"), "assets/style.css");
/// assert_eq!(asset_url("/app", "style.css"), "/app/assets/style.css");
/// assert_eq!(asset_url("/app/", "style.css"), "/app/assets/style.css");
/// ```
#[must_use]
pub fn asset_url(public_path: &str, filename: &str) -> String {
  let relative_path = format!("assets/{filename}");
  if public_path.is_empty() {
    return relative_path;
  }

  let joined = if public_path.ends_with('/') {
    format!("{public_path}{relative_path}")
  } else {
    format!("{public_path}/{relative_path}")
  };
  joined.replace('\\', "/")
}

fn has_extension(filename: &str, extension: &str) -> bool {
  filename.to_lowercase().ends_with(extension)
}

/// Markup collected for the head and body of the generated document.
#[derive(Debug, Clone, Default)]
pub struct Markup {
  public_path: String,
  stylesheets: Vec<String>,
  preloads:    Vec<String>,
  scripts:     Vec<String>,
}

impl Markup {
  #[must_use]
  pub fn new(public_path: &str) -> Self {
    Self {
      public_path: public_path.to_string(),
      ..Self::default()
    }
  }

  /// Record the markup for one asset file, if its category produces any.
  ///
  /// Returns `true` when an element was added.
  pub fn add(&mut self, kind: AssetKind, filename: &str) -> bool {
    let url = asset_url(&self.public_path, filename);
    match kind {
      AssetKind::Stylesheet if has_extension(filename, ".css") => {
        self.stylesheets.push(url);
      },
      AssetKind::Script if has_extension(filename, ".js") => {
        self.scripts.push(url);
      },
      AssetKind::Wasm => {
        self.preloads.push(format!(
          r#"<link rel="preload" href="{url}" as="fetch" type="application/wasm" crossorigin>"#
        ));
      },
      AssetKind::Font => {
        // Whatever follows the last dot, even if it is not a real extension.
        let ext = filename.rsplit('.').next().unwrap_or(filename);
        self.preloads.push(format!(
          r#"<link rel="preload" href="{url}" as="font" type="font/{ext}" crossorigin>"#
        ));
      },
      AssetKind::Stylesheet | AssetKind::Script | AssetKind::Asset => {
        return false;
      },
    }
    true
  }

  /// URLs of the linked style sheets.
  #[must_use]
  pub fn stylesheets(&self) -> &[String] {
    &self.stylesheets
  }

  /// URLs of the module scripts.
  #[must_use]
  pub fn scripts(&self) -> &[String] {
    &self.scripts
  }

  /// Preload elements for binary modules and fonts.
  #[must_use]
  pub fn preloads(&self) -> &[String] {
    &self.preloads
  }

  /// Stylesheet links followed by preload hints.
  #[must_use]
  pub fn head_content(&self) -> String {
    self
      .stylesheets
      .iter()
      .map(|url| format!(r#"<link rel="stylesheet" href="{url}">"#))
      .chain(self.preloads.iter().cloned())
      .collect::<Vec<_>>()
      .join(ELEMENT_SEPARATOR)
  }

  /// Module script elements.
  #[must_use]
  pub fn body_content(&self) -> String {
    self
      .scripts
      .iter()
      .map(|url| format!(r#"<script type="module" src="{url}"></script>"#))
      .collect::<Vec<_>>()
      .join(ELEMENT_SEPARATOR)
  }
}
