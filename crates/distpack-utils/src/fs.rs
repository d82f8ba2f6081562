//! Copy helpers shared by the assembler and the bundle generator.
//!
//! File copies carry the source's permissions and access/modification times
//! over to the destination.

use std::{
  ffi::OsStr,
  fs,
  path::{Path, PathBuf},
};

use filetime::{FileTime, set_file_times};
use log::debug;
use walkdir::WalkDir;

use crate::error::FsError;

/// Return the final component of `path`.
///
/// # Errors
///
/// Returns [`FsError::NoFileName`] for paths such as `/` or `..`.
pub fn file_name(path: &Path) -> Result<&OsStr, FsError> {
  path.file_name().ok_or_else(|| {
    FsError::NoFileName {
      path: path.to_path_buf(),
    }
  })
}

/// Check that every path exists, failing on the first one that does not.
///
/// # Errors
///
/// Returns [`FsError::NotFound`] naming the missing path.
pub fn ensure_exists<'a, I>(paths: I) -> Result<(), FsError>
where
  I: IntoIterator<Item = &'a PathBuf>,
{
  for path in paths {
    if !path.exists() {
      return Err(FsError::NotFound { path: path.clone() });
    }
  }
  Ok(())
}

/// Remove `dir` if it exists, then create it empty (with parents).
///
/// # Errors
///
/// Returns an error if the directory cannot be removed or created.
pub fn recreate_dir(dir: &Path) -> Result<(), FsError> {
  if dir.exists() {
    debug!("Removing existing directory {}", dir.display());
    fs::remove_dir_all(dir).map_err(FsError::io("remove directory", dir))?;
  }
  fs::create_dir_all(dir).map_err(FsError::io("create directory", dir))
}

/// Copy a single file, preserving permissions and timestamps.
///
/// An existing file at `dst` is overwritten.
///
/// # Errors
///
/// Returns an error if the file cannot be copied or its metadata applied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<(), FsError> {
  debug!("Copying {} -> {}", src.display(), dst.display());

  // fs::copy already carries the permission bits over.
  fs::copy(src, dst).map_err(FsError::io("copy", src))?;

  let meta = fs::metadata(src).map_err(FsError::io("read metadata of", src))?;
  set_file_times(
    dst,
    FileTime::from_last_access_time(&meta),
    FileTime::from_last_modification_time(&meta),
  )
  .map_err(FsError::io("set timestamps on", dst))
}

/// Recursively merge the contents of `src` into `dst`.
///
/// `dst` is created if needed. Entries already under `dst` survive unless a
/// source entry with the same relative path overwrites them. Symbolic links
/// are followed. Returns the number of files copied.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or any entry fails to copy.
pub fn merge_dir(src: &Path, dst: &Path) -> Result<usize, FsError> {
  let mut copied = 0;

  for entry in WalkDir::new(src).follow_links(true) {
    let entry = entry.map_err(|source| {
      FsError::Walk {
        path: src.to_path_buf(),
        source,
      }
    })?;

    // Entries always live under the walk root.
    let Ok(rel_path) = entry.path().strip_prefix(src) else {
      continue;
    };
    let dest_path = dst.join(rel_path);

    if entry.file_type().is_dir() {
      fs::create_dir_all(&dest_path)
        .map_err(FsError::io("create directory", &dest_path))?;
    } else {
      // Parent directory already created by walkdir's depth-first traversal
      copy_file(entry.path(), &dest_path)?;
      copied += 1;
    }
  }

  Ok(copied)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use std::time::{Duration, SystemTime};

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_file_name_rejects_root_and_parent() {
    assert!(file_name(Path::new("/")).is_err());
    assert!(file_name(Path::new("a/..")).is_err());
    assert_eq!(
      file_name(Path::new("dir/sub/")).expect("has a name"),
      OsStr::new("sub")
    );
  }

  #[test]
  fn test_ensure_exists_names_missing_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let present = dir.path().join("present");
    fs::write(&present, "x").expect("Failed to write file");
    let missing = dir.path().join("missing");

    let err = ensure_exists(&[present, missing.clone()])
      .expect_err("missing path should be reported");
    assert!(matches!(err, FsError::NotFound { path } if path == missing));
  }

  #[test]
  fn test_recreate_dir_clears_contents() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("out");
    fs::create_dir_all(target.join("nested")).expect("Failed to create dir");
    fs::write(target.join("nested/stale.txt"), "old")
      .expect("Failed to write file");

    recreate_dir(&target).expect("recreate should succeed");

    assert!(target.is_dir());
    assert_eq!(fs::read_dir(&target).expect("readable").count(), 0);
  }

  #[test]
  fn test_recreate_dir_creates_parents() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("a/b/c");
    recreate_dir(&target).expect("recreate should succeed");
    assert!(target.is_dir());
  }

  #[test]
  fn test_copy_file_preserves_mtime() {
    let dir = tempdir().expect("Failed to create temp dir");
    let src = dir.path().join("src.bin");
    let dst = dir.path().join("dst.bin");
    fs::write(&src, [0_u8, 159, 146, 150]).expect("Failed to write file");

    let past = FileTime::from_system_time(
      SystemTime::now() - Duration::from_secs(86_400),
    );
    set_file_times(&src, past, past).expect("Failed to set times");

    copy_file(&src, &dst).expect("copy should succeed");

    assert_eq!(fs::read(&dst).expect("readable"), [0_u8, 159, 146, 150]);
    let src_meta = fs::metadata(&src).expect("metadata");
    let dst_meta = fs::metadata(&dst).expect("metadata");
    assert_eq!(
      FileTime::from_last_modification_time(&dst_meta),
      FileTime::from_last_modification_time(&src_meta)
    );
  }

  #[cfg(unix)]
  #[test]
  fn test_copy_file_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("Failed to create temp dir");
    let src = dir.path().join("run.sh");
    let dst = dir.path().join("copied.sh");
    fs::write(&src, "#!/bin/sh\n").expect("Failed to write file");
    fs::set_permissions(&src, fs::Permissions::from_mode(0o755))
      .expect("Failed to set permissions");

    copy_file(&src, &dst).expect("copy should succeed");

    let mode = fs::metadata(&dst).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
  }

  #[cfg(unix)]
  #[test]
  fn test_merge_dir_follows_symlinked_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("target");
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::create_dir_all(&target).expect("Failed to create dir");
    fs::create_dir_all(&src).expect("Failed to create dir");
    fs::write(target.join("f.txt"), "x").expect("Failed to write file");
    std::os::unix::fs::symlink(&target, src.join("link"))
      .expect("Failed to create symlink");

    let copied = merge_dir(&src, &dst).expect("merge should succeed");

    assert_eq!(copied, 1);
    let link = dst.join("link");
    assert!(
      !fs::symlink_metadata(&link)
        .expect("metadata")
        .file_type()
        .is_symlink()
    );
    assert!(link.is_dir());
    assert_eq!(
      fs::read_to_string(link.join("f.txt")).expect("readable"),
      "x"
    );
  }

  #[test]
  fn test_merge_dir_keeps_unrelated_entries() {
    let dir = tempdir().expect("Failed to create temp dir");
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::create_dir_all(src.join("sub")).expect("Failed to create dir");
    fs::create_dir_all(&dst).expect("Failed to create dir");
    fs::write(src.join("shared.txt"), "new").expect("Failed to write file");
    fs::write(src.join("sub/deep.txt"), "deep").expect("Failed to write file");
    fs::write(dst.join("shared.txt"), "old").expect("Failed to write file");
    fs::write(dst.join("kept.txt"), "kept").expect("Failed to write file");

    let copied = merge_dir(&src, &dst).expect("merge should succeed");

    assert_eq!(copied, 2);
    assert_eq!(
      fs::read_to_string(dst.join("shared.txt")).expect("readable"),
      "new"
    );
    assert_eq!(
      fs::read_to_string(dst.join("kept.txt")).expect("readable"),
      "kept"
    );
    assert_eq!(
      fs::read_to_string(dst.join("sub/deep.txt")).expect("readable"),
      "deep"
    );
  }
}
