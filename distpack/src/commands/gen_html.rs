use color_eyre::eyre::{Context, Result};
use distpack_config::{Bundle, BundleConfig};
use distpack_html::{BundleReport, generate_bundle};

use crate::cli::GenHtmlCli;

/// Layer config files, `--config` overrides and explicit flags into a
/// validated [`Bundle`].
///
/// # Errors
///
/// Returns an error if a config file or override is malformed, or a required
/// option is missing from every layer.
pub fn resolve(cli: &GenHtmlCli) -> Result<Bundle> {
  let mut config = BundleConfig::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")?;
  config.merge(cli.to_config());

  config
    .validate()
    .wrap_err("Invalid bundle configuration")
}

/// Run the bundle generator for a parsed command line.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the bundle cannot be
/// written.
pub fn run(cli: &GenHtmlCli) -> Result<BundleReport> {
  let bundle = resolve(cli)?;
  log::debug!("Resolved bundle: {bundle:?}");

  generate_bundle(&bundle).wrap_err_with(|| {
    format!("Failed to generate bundle in {}", bundle.output_dir.display())
  })
}
