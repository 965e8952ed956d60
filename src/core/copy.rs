use crate::utils::error::{PresentError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively copies `src` into `dest`, which must not exist yet.
/// Symlinks are followed and their targets copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    if dest.exists() {
        return Err(PresentError::CopyError {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        });
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let from = e.path().map(Path::to_path_buf).unwrap_or_else(|| src.to_path_buf());
            PresentError::CopyError {
                from,
                to: dest.to_path_buf(),
                source: e.into(),
            }
        })?;

        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| PresentError::CopyError {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source,
            })?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    tracing::debug!("Copied {} files from {} to {}", copied, src.display(), dest.display());
    Ok(copied)
}

/// Copies `file` into `dir`, keeping its file name.
pub fn copy_into(file: &Path, dir: &Path) -> Result<PathBuf> {
    let name = file.file_name().ok_or_else(|| PresentError::not_found(file))?;
    let target = dir.join(name);
    copy_file(file, &target)?;
    Ok(target)
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|source| PresentError::CopyError {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    Ok(())
}
