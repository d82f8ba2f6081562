use color_eyre::eyre::{Context, Result};
use distpack_config::Substitutions;
use distpack_utils::render_template_file;

use crate::cli::ReplaceCli;

/// Run the template substituter for a parsed command line.
///
/// The mapping is parsed before any file is touched.
///
/// # Errors
///
/// Returns an error if the mapping is malformed, the template is missing, or
/// the output cannot be written.
pub fn run(cli: &ReplaceCli) -> Result<()> {
  let substitutions = Substitutions::from_json(&cli.substitutions)
    .wrap_err("Failed to parse substitutions")?;

  render_template_file(&cli.template, &cli.output, &substitutions)
    .wrap_err_with(|| {
      format!(
        "Failed to render {} to {}",
        cli.template.display(),
        cli.output.display()
      )
    })
}
