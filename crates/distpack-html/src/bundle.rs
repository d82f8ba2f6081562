use std::{fs, path::PathBuf};

use color_eyre::eyre::{Context, Result};
use distpack_config::Bundle;
use distpack_utils::fs as fsutil;
use log::{debug, info};

use crate::{
  markup::{AssetKind, Markup},
  template,
};

/// Summary of a [`generate_bundle`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
  /// Number of source files copied into `assets/`.
  pub copied: usize,

  /// Number of elements emitted into the document.
  pub linked: usize,

  /// Path of the written document.
  pub index_path: PathBuf,
}

/// Copy every source of `bundle` into `<output_dir>/assets/` and write
/// `<output_dir>/index.html` referencing the recognized ones.
///
/// Sources are checked and the document is rendered before anything is
/// written, so a missing source or a broken custom template leaves the output
/// directory untouched. Existing files under `assets/` are kept unless a
/// source with the same name replaces them.
///
/// # Errors
///
/// Returns an error if a source or the custom template is missing, rendering
/// fails, or any file cannot be copied or written.
pub fn generate_bundle(bundle: &Bundle) -> Result<BundleReport> {
  fsutil::ensure_exists(
    bundle.sources.iter().chain(bundle.template_path.as_ref()),
  )?;

  let mut markup = Markup::new(&bundle.public_path);
  let mut planned = Vec::with_capacity(bundle.sources.len());
  let mut linked = 0;

  for kind in AssetKind::ALL {
    for source in kind.sources(&bundle.sources) {
      let file_name = fsutil::file_name(source)?;
      let filename = file_name.to_string_lossy();

      if markup.add(kind, &filename) {
        linked += 1;
      } else {
        debug!(
          "Copying {} {} without markup",
          kind.label(),
          source.display()
        );
      }
      planned.push((source, file_name));
    }
  }

  let html = template::render(bundle, &markup)?;

  let assets_dir = bundle.assets_dir();
  fs::create_dir_all(&assets_dir).wrap_err_with(|| {
    format!("Failed to create assets directory {}", assets_dir.display())
  })?;

  for (source, file_name) in &planned {
    fsutil::copy_file(source, &assets_dir.join(file_name))?;
  }

  let index_path = bundle.index_path();
  fs::write(&index_path, html).wrap_err_with(|| {
    format!("Failed to write {}", index_path.display())
  })?;

  info!(
    "Bundled {} asset(s) into {} ({} referenced)",
    planned.len(),
    bundle.output_dir.display(),
    linked
  );

  Ok(BundleReport {
    copied: planned.len(),
    linked,
    index_path,
  })
}
