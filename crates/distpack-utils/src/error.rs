use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the filesystem operations in this crate.
#[derive(Debug, Error)]
pub enum FsError {
  /// A named input does not exist.
  #[error("input path does not exist: `{}`", .path.display())]
  NotFound { path: PathBuf },

  /// The path has no final component to use as a destination name.
  #[error("path has no file name: `{}`", .path.display())]
  NoFileName { path: PathBuf },

  /// An underlying I/O operation failed.
  #[error("failed to {action} `{}`: {source}", .path.display())]
  Io {
    action: &'static str,
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  /// Walking a source directory failed.
  #[error("failed to walk `{}`: {source}", .path.display())]
  Walk {
    path:   PathBuf,
    #[source]
    source: walkdir::Error,
  },
}

impl FsError {
  pub(crate) fn io(
    action: &'static str,
    path: impl Into<PathBuf>,
  ) -> impl FnOnce(io::Error) -> Self {
    let path = path.into();
    move |source| Self::Io {
      action,
      path,
      source,
    }
  }
}
