use crate::core::copy::{copy_into, copy_tree};
use crate::domain::model::StaticSelection;
use crate::utils::error::{PresentError, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const STAGE_PREFIX: &str = "ipynb_present_";
pub const SLIDES_DIR_NAME: &str = "slides";

/// Owns the staging directory for one run.
///
/// Restores the working directory the process started in and removes the
/// temp tree, either through [`StageGuard::cleanup`] or on drop.
#[derive(Debug)]
pub struct StageGuard {
    temp_dir: Option<TempDir>,
    root: PathBuf,
    slides_dir: PathBuf,
    original_dir: PathBuf,
}

impl StageGuard {
    pub fn create(original_dir: PathBuf) -> Result<Self> {
        let temp_dir = tempfile::Builder::new().prefix(STAGE_PREFIX).tempdir()?;
        let root = temp_dir.path().to_path_buf();
        tracing::info!("🗂️ Working on temp dir {}", root.display());

        Ok(Self {
            slides_dir: root.clone(),
            root,
            temp_dir: Some(temp_dir),
            original_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slides_dir(&self) -> &Path {
        &self.slides_dir
    }

    /// Copies the template tree into `<root>/slides` and makes that the slides dir.
    /// Without a template tree the root itself stays the slides dir.
    pub fn seed_template(&mut self, static_dir: Option<&StaticSelection>) -> Result<()> {
        if let Some(selection) = static_dir {
            let slides_dir = self.root.join(SLIDES_DIR_NAME);
            copy_tree(&selection.path, &slides_dir)?;
            self.slides_dir = slides_dir;
        }
        Ok(())
    }

    pub fn enter(&self) -> Result<()> {
        std::env::set_current_dir(&self.slides_dir)?;
        tracing::debug!("Changed directory to {}", self.slides_dir.display());
        Ok(())
    }

    pub fn cleanup(mut self) -> Result<()> {
        let restored = self.restore_dir();
        let removed = match self.temp_dir.take() {
            Some(temp_dir) => temp_dir.close().map_err(PresentError::from),
            None => Ok(()),
        };
        if removed.is_ok() {
            tracing::info!("🧹 Removed temp dir {}", self.root.display());
        }
        restored.and(removed)
    }

    fn restore_dir(&self) -> Result<()> {
        std::env::set_current_dir(&self.original_dir)?;
        Ok(())
    }
}

impl Drop for StageGuard {
    fn drop(&mut self) {
        if self.temp_dir.is_none() {
            return;
        }
        if let Err(e) = self.restore_dir() {
            tracing::warn!("Could not restore working directory {}: {}", self.original_dir.display(), e);
        }
        if let Some(temp_dir) = self.temp_dir.take() {
            if let Err(e) = temp_dir.close() {
                tracing::warn!("Could not remove temp dir {}: {}", self.root.display(), e);
            }
        }
    }
}

/// Copies the notebook and then each auxiliary file into `slides_dir`.
/// The first missing auxiliary file stops the copy.
pub fn stage_inputs(slides_dir: &Path, notebook: &Path, others: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut staged = Vec::with_capacity(others.len() + 1);
    staged.push(copy_into(notebook, slides_dir)?);

    for other in others {
        if !other.exists() {
            tracing::error!("❌ Could not find file {}", other.display());
            return Err(PresentError::not_found(other));
        }
        staged.push(copy_into(other, slides_dir)?);
    }

    tracing::debug!("Staged {} files into {}", staged.len(), slides_dir.display());
    Ok(staged)
}
