use color_eyre::eyre::{Context, Result};
use distpack_utils::{AssembleReport, assemble};
use log::info;

use crate::cli::AssembleCli;

/// Run the assembler for a parsed command line.
///
/// # Errors
///
/// Returns an error if any input is missing or a copy fails.
pub fn run(cli: &AssembleCli) -> Result<AssembleReport> {
  let report = assemble(&cli.output_dir, &cli.inputs).wrap_err_with(|| {
    format!("Failed to assemble {}", cli.output_dir.display())
  })?;

  info!(
    "Assembled {} file(s) from {} input(s) ({} directories merged)",
    report.files,
    cli.inputs.len(),
    report.directories
  );

  Ok(report)
}
