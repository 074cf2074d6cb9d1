//! Filesystem repository discovery by marker entries.

use super::{Repository, RepositoryLocator};
use crate::config::GitlocConfig;
use crate::error::RepositoryError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A repository rooted at a directory containing one of the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsRepository {
    root: PathBuf,
}

impl FsRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Repository for FsRepository {
    fn repository_path(&self) -> &Path {
        &self.root
    }
}

/// Walks up from a path until a directory holds a marker such as `.git`.
#[derive(Debug, Clone)]
pub struct FsRepositoryLocator {
    markers: Vec<String>,
    max_depth: Option<usize>,
}

impl Default for FsRepositoryLocator {
    fn default() -> Self {
        Self::from_config(&GitlocConfig::default())
    }
}

impl FsRepositoryLocator {
    pub fn new(markers: Vec<String>, max_depth: Option<usize>) -> Self {
        Self { markers, max_depth }
    }

    pub fn from_config(cfg: &GitlocConfig) -> Self {
        Self::new(cfg.repository_markers.clone(), cfg.max_depth())
    }

    fn has_marker(&self, dir: &Path) -> Result<bool, RepositoryError> {
        for marker in &self.markers {
            let candidate = dir.join(marker);
            match fs::symlink_metadata(&candidate) {
                Ok(_) => return Ok(true),
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    return Err(RepositoryError::Io {
                        path: candidate,
                        source: e,
                    });
                }
                // NotFound, or a file sitting where a directory was expected.
                Err(_) => {}
            }
        }
        Ok(false)
    }
}

impl RepositoryLocator for FsRepositoryLocator {
    type Repository = FsRepository;

    /// The walk starts at `path` itself, so paths that do not exist yet
    /// (files about to be written) still find their repository.
    fn open(&self, path: &Path) -> Result<Arc<FsRepository>, RepositoryError> {
        let not_found = || RepositoryError::RepositoryNotFound {
            path: path.to_path_buf(),
        };
        if !path.is_absolute() {
            return Err(not_found());
        }

        let limit = self.max_depth.map_or(usize::MAX, |d| d.saturating_add(1));
        for dir in path.ancestors().take(limit) {
            if self.has_marker(dir)? {
                tracing::debug!(path = %path.display(), root = %dir.display(), "found repository");
                return Ok(Arc::new(FsRepository::new(dir)));
            }
        }
        Err(not_found())
    }
}
