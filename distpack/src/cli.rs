use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use distpack_config::{AssetSources, BundleConfig};

/// Flatten files and directories into a freshly recreated output directory.
///
/// Each input is placed at `<OUTPUT_DIR>/<basename>`. Directories are merged
/// recursively; when inputs share a basename the last one wins.
#[derive(Parser, Debug)]
#[command(name = "assemble", author, version)]
pub struct AssembleCli {
  #[command(flatten)]
  pub verbose: Verbosity<InfoLevel>,

  /// Directory to recreate and fill. Any existing contents are removed.
  #[arg(value_name = "OUTPUT_DIR")]
  pub output_dir: PathBuf,

  /// Files or directories to copy, in order.
  #[arg(value_name = "INPUT_PATH", required = true, num_args = 1..)]
  pub inputs: Vec<PathBuf>,
}

/// Copy categorized assets into `assets/` and write an `index.html` that
/// references them.
#[derive(Parser, Debug)]
#[command(name = "gen_html", author, version)]
pub struct GenHtmlCli {
  #[command(flatten)]
  pub verbose: Verbosity<InfoLevel>,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones.
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,

  /// Output directory for the bundle.
  #[arg(long = "output_dir", visible_alias = "output-dir")]
  pub output_dir: Option<PathBuf>,

  /// Document title, inserted verbatim.
  #[arg(long, allow_hyphen_values = true)]
  pub title: Option<String>,

  /// Heading text, inserted verbatim.
  #[arg(long, allow_hyphen_values = true)]
  pub header: Option<String>,

  /// Paragraph text, inserted verbatim.
  #[arg(long, allow_hyphen_values = true)]
  pub content: Option<String>,

  /// URL prefix for asset references (e.g. `/app`).
  #[arg(
    long = "public_path",
    visible_alias = "public-path",
    allow_hyphen_values = true
  )]
  pub public_path: Option<String>,

  /// Custom Tera template to render instead of the built-in `index.html`.
  #[arg(long = "template")]
  pub template_path: Option<PathBuf>,

  /// Style sheets. Files ending in `.css` are linked.
  #[arg(long, num_args = 0.., value_name = "PATH")]
  pub css: Vec<PathBuf>,

  /// Scripts. Files ending in `.js` are loaded as modules.
  #[arg(long, num_args = 0.., value_name = "PATH")]
  pub js: Vec<PathBuf>,

  /// WebAssembly modules, preloaded.
  #[arg(long, num_args = 0.., value_name = "PATH")]
  pub wasm: Vec<PathBuf>,

  /// Fonts, preloaded.
  #[arg(long, num_args = 0.., value_name = "PATH")]
  pub fonts: Vec<PathBuf>,

  /// Other files, copied without markup.
  #[arg(long, num_args = 0.., value_name = "PATH")]
  pub assets: Vec<PathBuf>,
}

impl GenHtmlCli {
  /// The bundle options given directly on the command line, as a config
  /// layer.
  #[must_use]
  pub fn to_config(&self) -> BundleConfig {
    BundleConfig {
      output_dir:    self.output_dir.clone(),
      title:         self.title.clone(),
      header:        self.header.clone(),
      content:       self.content.clone(),
      public_path:   self.public_path.clone(),
      template_path: self.template_path.clone(),
      sources:       AssetSources {
        css:    self.css.clone(),
        js:     self.js.clone(),
        wasm:   self.wasm.clone(),
        fonts:  self.fonts.clone(),
        assets: self.assets.clone(),
      },
    }
  }
}

/// Replace literal placeholder keys in a text file.
///
/// Substitutions are applied one after another over the accumulating text, in
/// the order they appear in the JSON object.
#[derive(Parser, Debug)]
#[command(name = "replace", author, version)]
pub struct ReplaceCli {
  #[command(flatten)]
  pub verbose: Verbosity<InfoLevel>,

  /// Template file to read.
  #[arg(value_name = "TEMPLATE_PATH")]
  pub template: PathBuf,

  /// File to write. Created or overwritten.
  #[arg(value_name = "OUTPUT_PATH")]
  pub output: PathBuf,

  /// JSON object mapping literal keys to replacement strings.
  #[arg(value_name = "JSON_SUBSTITUTIONS", allow_hyphen_values = true)]
  pub substitutions: String,
}

impl AssembleCli {
  /// Parse command line arguments into an [`AssembleCli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

impl GenHtmlCli {
  /// Parse command line arguments into a [`GenHtmlCli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

impl ReplaceCli {
  /// Parse command line arguments into a [`ReplaceCli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
