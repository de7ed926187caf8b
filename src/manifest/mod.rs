use crate::core::{StrataError, StrataResult};
use std::fs;
use std::path::{Path, PathBuf};

pub mod checksum;
pub mod diff;

pub use checksum::{ChecksumAlgorithm, ChecksumComputer};
pub use diff::ChangeDetector;

/// A project's dependency manifest, loaded once and read-only thereafter.
///
/// The content is opaque text: Strata never parses dependency entries out of
/// it, it only compares and hashes the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    content: String,
    path: PathBuf,
}

impl Manifest {
    pub fn new(content: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            content: content.into(),
            path: path.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads the local dependency manifest from disk.
pub struct ManifestStore;

impl ManifestStore {
    /// Read the manifest at `path`, resolved against the current working
    /// directory.
    ///
    /// A missing or unreadable manifest is a configuration error, fatal to
    /// the current packaging run; there is nothing to retry.
    pub fn load(path: &Path) -> StrataResult<Manifest> {
        let content = fs::read_to_string(path).map_err(|source| StrataError::ManifestNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded manifest");
        Ok(Manifest::new(content, path))
    }
}
