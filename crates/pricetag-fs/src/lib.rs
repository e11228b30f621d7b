//! Small filesystem helpers for the generator's output tree.
//!
//! Output documents are whole-string writes; [`write_atomic`] stages them
//! in a temp file in the destination directory (avoids cross-device
//! renames) and renames into place, so a crash mid-run leaves either the
//! previous file or nothing, never a truncated document.
//! [`copy_dir_all`] mirrors the image asset tree next to generated pages.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

fn parent_dir_or_dot(path: &Path) -> &Path {
    // `Path::parent` returns `Some("")` for bare relative file names;
    // treat that as the current directory.
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Write `contents` to `dest` atomically, creating parent directories as
/// needed.
pub fn write_atomic(dest: impl AsRef<Path>, contents: &[u8]) -> io::Result<()> {
    let dest = dest.as_ref();
    let dir = parent_dir_or_dot(dest);
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Recursively copy `src` into `dst`, creating `dst` as needed. Returns the
/// number of files copied. Existing files are overwritten.
pub fn copy_dir_all(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> io::Result<usize> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir_all(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }

    log::debug!("copied {copied} files from {} to {}", src.display(), dst.display());
    Ok(copied)
}
