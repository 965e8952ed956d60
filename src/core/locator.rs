use crate::core::ConfigProvider;
use crate::domain::model::{StaticCandidate, StaticSelection, StaticSource};
use std::path::{Path, PathBuf};

pub const STATIC_DIR_NAME: &str = "static";

/// The four static-folder candidates, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidates {
    pub override_dir: Option<PathBuf>,
    pub notebook_adjacent: Option<PathBuf>,
    pub working_directory: Option<PathBuf>,
    pub home_fallback: Option<PathBuf>,
}

impl StaticCandidates {
    /// Builds the list for `config`, resolving the notebook folder through
    /// symlinks so a linked notebook picks up its real neighbour `static/`.
    pub fn resolve<C: ConfigProvider>(config: &C, cwd: &Path) -> Self {
        let notebook_adjacent = std::fs::canonicalize(config.notebook())
            .ok()
            .and_then(|real| real.parent().map(|dir| dir.join(STATIC_DIR_NAME)));

        Self {
            override_dir: config.static_override().map(Path::to_path_buf),
            notebook_adjacent,
            working_directory: Some(cwd.join(STATIC_DIR_NAME)),
            home_fallback: config.fallback_static(),
        }
    }

    pub fn ordered(&self) -> Vec<StaticCandidate> {
        [
            (StaticSource::Override, &self.override_dir),
            (StaticSource::NotebookAdjacent, &self.notebook_adjacent),
            (StaticSource::WorkingDirectory, &self.working_directory),
            (StaticSource::HomeFallback, &self.home_fallback),
        ]
        .into_iter()
        .filter_map(|(source, path)| {
            path.as_ref().map(|path| StaticCandidate {
                source,
                path: path.clone(),
            })
        })
        .collect()
    }
}

/// First candidate that exists as a directory; `None` means run without a template tree.
pub fn locate_static_dir(candidates: &[StaticCandidate]) -> Option<StaticSelection> {
    let selection = candidates
        .iter()
        .find(|candidate| candidate.path.is_dir())
        .map(|candidate| StaticSelection {
            source: candidate.source,
            path: candidate.path.clone(),
        });

    match &selection {
        Some(found) => {
            tracing::info!("📁 Using static folder from: {} ({})", found.path.display(), found.source)
        }
        None => tracing::warn!(
            "⚠️ Could not find a \"static\" folder. Using the standard configuration."
        ),
    }

    selection
}
