//! Resolved view of a locator: repository, paths, ref and arguments.

use crate::error::{LocatorError, LocatorResult, RepositoryError};
use crate::locator::{parse_locator, Arguments};
use crate::repository::{Repository, RepositoryLocator};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Ref used when the locator carries no fragment.
pub const DEFAULT_REF: &str = "HEAD";

/// Characters that would be read as delimiters when the canonical URL is parsed again.
const CANONICAL_ESCAPES: &AsciiSet = &CONTROLS.add(b'%').add(b'#').add(b'?');

/// Immutable result of resolving a locator against its repository.
#[derive(Debug, Clone)]
pub struct PathInformation<R> {
    repository: Arc<R>,
    url: String,
    full_path: String,
    local_path: String,
    reference: String,
    arguments: Arguments,
}

impl<R: Repository> PathInformation<R> {
    /// Parses `raw` and resolves it with `locator`.
    ///
    /// Performs one discovery and one local-path resolution; both may touch
    /// the filesystem.
    pub fn from_locator<L>(raw: &str, scheme: &str, locator: &L) -> LocatorResult<Self>
    where
        L: RepositoryLocator<Repository = R>,
    {
        let components = parse_locator(raw, scheme)?;
        if !components.scheme.eq_ignore_ascii_case(scheme) {
            return Err(LocatorError::SchemeMismatch {
                expected: scheme.to_string(),
                found: components.scheme,
            });
        }
        let full_path = components
            .path
            .ok_or_else(|| LocatorError::InvalidLocator(raw.to_string()))?;

        let repository = locator.open(Path::new(&full_path))?;
        let local_path = repository.resolve_local_path(Path::new(&full_path))?;

        let root = repository.repository_path();
        if root.join(&local_path) != Path::new(&full_path) {
            tracing::warn!(
                path = %full_path,
                root = %root.display(),
                "resolved path does not lie under repository root"
            );
            return Err(RepositoryError::PathOutsideRepository {
                path: full_path.into(),
                root: root.to_path_buf(),
            }
            .into());
        }

        let reference = components
            .fragment
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_REF.to_string());
        let arguments = components
            .query
            .as_deref()
            .map(Arguments::parse_query_string)
            .unwrap_or_default();

        // The `?` is always written, even with no arguments.
        let url = format!(
            "{}://{}#{}?{}",
            scheme,
            utf8_percent_encode(&full_path, CANONICAL_ESCAPES),
            utf8_percent_encode(&reference, CANONICAL_ESCAPES),
            arguments.to_query_string()
        );
        tracing::debug!(%url, local_path = %local_path, "resolved locator");

        Ok(Self {
            repository,
            url,
            full_path,
            local_path,
            reference,
            arguments,
        })
    }

    /// Absolute path of the repository root.
    pub fn repository_path(&self) -> &Path {
        self.repository.repository_path()
    }
}

impl<R> PathInformation<R> {
    /// Canonical locator string: `scheme://full_path#ref?query`.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Absolute path of the addressed resource.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// The full path relative to the repository root.
    pub fn local_path(&self) -> &str {
        &self.local_path
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains(name)
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name)
    }
}

impl<R> fmt::Display for PathInformation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl<R: Repository> Serialize for PathInformation<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PathInformation", 6)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("repository_path", self.repository_path())?;
        state.serialize_field("full_path", &self.full_path)?;
        state.serialize_field("local_path", &self.local_path)?;
        state.serialize_field("ref", &self.reference)?;
        state.serialize_field("arguments", &self.arguments)?;
        state.end()
    }
}
