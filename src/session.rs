use crate::config::Config;
use crate::core::{CompatibilityResult, StrataResult};
use crate::di::{ProcessRunner, RemoteManifestStore};
use crate::manifest::{ChangeDetector, ChecksumAlgorithm, ChecksumComputer, Manifest, ManifestStore};
use crate::runtime::CompatibilityChecker;
use std::path::Path;
use std::sync::Arc;

/// One packaging session over one project.
///
/// The manifest is loaded exactly once, at construction; every later
/// operation reads the same immutable value, so there is no order-of-call
/// hazard between change detection and checksum computation. A session that
/// fails to construct has no manifest and exposes nothing downstream.
pub struct PackagingSession {
    manifest: Manifest,
    detector: ChangeDetector,
    checker: CompatibilityChecker,
    algorithm: ChecksumAlgorithm,
}

impl std::fmt::Debug for PackagingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackagingSession")
            .field("manifest", &self.manifest)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl PackagingSession {
    /// Load the manifest named by `config` and assemble the session.
    ///
    /// Fails with `ManifestNotFound` when the manifest is absent; the caller
    /// must treat that as fatal for the current command.
    pub fn initialize(
        config: &Config,
        remote: Arc<dyn RemoteManifestStore>,
        runner: Arc<dyn ProcessRunner>,
    ) -> StrataResult<Self> {
        let algorithm = ChecksumAlgorithm::from_name(&config.checksum_algorithm)?;
        let manifest = ManifestStore::load(Path::new(&config.dependencies_path))?;

        Ok(Self {
            manifest,
            detector: ChangeDetector::new(remote),
            checker: CompatibilityChecker::new(runner, config.version_query.clone()),
            algorithm,
        })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Whether dependencies must be reinstalled: true when no remote manifest
    /// exists, or when the remote content differs from the local bytes.
    pub async fn has_dependencies_changed(&self) -> StrataResult<bool> {
        self.detector.has_changed(&self.manifest).await
    }

    /// Cache key for the packaged dependency layer: lowercase hex digest of
    /// the local manifest content.
    pub fn dependencies_checksum(&self) -> String {
        ChecksumComputer::checksum_with_algorithm(&self.manifest, self.algorithm)
    }

    /// Check the host runtime against `specifier` (e.g., "python3.11").
    pub async fn is_compatible_runtime_version(
        &self,
        specifier: &str,
    ) -> StrataResult<CompatibilityResult> {
        self.checker.is_compatible(specifier).await
    }
}
