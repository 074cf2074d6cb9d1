//! Repository collaborator interface.
//!
//! Path resolution only needs two things from a repository layer: finding
//! the root that encloses a path, and expressing a path relative to that
//! root. [`FsRepositoryLocator`] does this by looking for marker entries
//! such as `.git` on disk.

mod fs;

pub use fs::{FsRepository, FsRepositoryLocator};

use crate::error::RepositoryError;
use std::path::Path;
use std::sync::Arc;

/// Handle to a discovered repository root.
pub trait Repository {
    /// Absolute path of the repository root.
    fn repository_path(&self) -> &Path;

    /// Expresses `full_path` relative to the root, `/`-separated.
    ///
    /// The root itself resolves to `""`.
    fn resolve_local_path(&self, full_path: &Path) -> Result<String, RepositoryError> {
        let root = self.repository_path();
        let relative = full_path.strip_prefix(root).map_err(|_| {
            RepositoryError::PathOutsideRepository {
                path: full_path.to_path_buf(),
                root: root.to_path_buf(),
            }
        })?;
        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Ok(segments.join("/"))
    }
}

/// Discovers the repository enclosing a path.
pub trait RepositoryLocator {
    type Repository: Repository;

    /// Returns the nearest repository whose root is `path` or one of its ancestors.
    fn open(&self, path: &Path) -> Result<Arc<Self::Repository>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct Fixed(PathBuf);

    impl Repository for Fixed {
        fn repository_path(&self) -> &Path {
            &self.0
        }
    }

    #[test]
    fn local_path_uses_forward_slashes() {
        let repo = Fixed(PathBuf::from("/srv/repo"));
        let local = repo
            .resolve_local_path(Path::new("/srv/repo/src/lib.rs"))
            .unwrap();
        assert_eq!(local, "src/lib.rs");
    }

    #[test]
    fn root_resolves_to_empty() {
        let repo = Fixed(PathBuf::from("/srv/repo"));
        assert_eq!(repo.resolve_local_path(Path::new("/srv/repo")).unwrap(), "");
        assert_eq!(repo.resolve_local_path(Path::new("/srv/repo/")).unwrap(), "");
    }

    #[test]
    fn outside_root_is_rejected() {
        let repo = Fixed(PathBuf::from("/srv/repo"));
        let err = repo
            .resolve_local_path(Path::new("/srv/repository/file"))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::PathOutsideRepository { .. }));
    }
}
