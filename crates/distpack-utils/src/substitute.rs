use std::{fs, io, path::Path};

use distpack_config::Substitutions;
use log::{debug, info};

use crate::error::FsError;

/// Read `template`, apply `substitutions` in order and write the result to
/// `output`, creating or truncating it.
///
/// The output's parent directory must already exist.
///
/// # Errors
///
/// Returns [`FsError::NotFound`] if the template does not exist, and an I/O
/// error if it is not valid UTF-8 or the output cannot be written.
pub fn render_template_file(
  template: &Path,
  output: &Path,
  substitutions: &Substitutions,
) -> Result<(), FsError> {
  let text = fs::read_to_string(template).map_err(|source| {
    if source.kind() == io::ErrorKind::NotFound {
      FsError::NotFound {
        path: template.to_path_buf(),
      }
    } else {
      FsError::Io {
        action: "read template",
        path: template.to_path_buf(),
        source,
      }
    }
  })?;

  debug!("Read {} byte(s) from {}", text.len(), template.display());
  let rendered = substitutions.apply(&text);

  fs::write(output, rendered).map_err(FsError::io("write", output))?;
  info!(
    "Wrote {} with {} substitution(s) applied",
    output.display(),
    substitutions.len()
  );

  Ok(())
}
