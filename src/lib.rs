//! Strata: dependency change detection for runtime layer packaging
//!
//! Given a project's dependency manifest (e.g. a pinned `requirements.txt`),
//! Strata decides whether the previously published remote copy differs from
//! the local one, derives a deterministic checksum of the manifest to key a
//! cached dependency layer, and verifies the host runtime satisfies a declared
//! version requirement before any install step runs.
//!
//! Installation itself, archive packaging, and upload transport live outside
//! this crate; they are reached only through the collaborator traits in
//! [`di`].

pub use strata_core::{CompatibilityResult, RuntimeVersion, StrataError, StrataResult};

/// Core module re-exported from strata-core.
pub mod core {
    pub use strata_core::core::*;
    pub use strata_core::*;
}

/// Configuration management.
pub mod config;

/// Manifest loading, change detection, and checksum computation.
pub mod manifest;

/// Runtime version compatibility checking.
pub mod runtime;

/// Dependency injection infrastructure.
pub mod di;

/// Packaging session: the orchestration surface consumed by a pipeline.
pub mod session;

pub use manifest::{ChangeDetector, ChecksumAlgorithm, ChecksumComputer, Manifest, ManifestStore};
pub use runtime::CompatibilityChecker;
pub use session::PackagingSession;
