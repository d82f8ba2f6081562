use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{error::FsError, fs};

/// Summary of an [`assemble`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssembleReport {
  /// Inputs that were directories and got merged.
  pub directories: usize,

  /// Files written, counting files inside merged directories.
  pub files: usize,
}

/// Flatten `inputs` into a freshly recreated `output_dir`.
///
/// Each input lands at `output_dir/<basename>`: files are copied, directories
/// are merged recursively. Inputs sharing a basename overwrite each other in
/// order, so the last one wins.
///
/// All inputs are checked before `output_dir` is touched, so a missing input
/// leaves any previous output in place.
///
/// # Errors
///
/// Returns an error if an input is missing or has no file name, or if any
/// filesystem operation fails. Output written before the failure is left as
/// is.
pub fn assemble(
  output_dir: &Path,
  inputs: &[PathBuf],
) -> Result<AssembleReport, FsError> {
  fs::ensure_exists(inputs)?;
  for input in inputs {
    fs::file_name(input)?;
  }

  fs::recreate_dir(output_dir)?;
  info!(
    "Assembling {} input(s) into {}",
    inputs.len(),
    output_dir.display()
  );

  let mut report = AssembleReport::default();

  for input in inputs {
    let dest_path = output_dir.join(fs::file_name(input)?);

    if input.is_dir() {
      debug!(
        "Merging directory {} into {}",
        input.display(),
        dest_path.display()
      );
      report.files += fs::merge_dir(input, &dest_path)?;
      report.directories += 1;
    } else {
      fs::copy_file(input, &dest_path)?;
      report.files += 1;
    }
  }

  Ok(report)
}
