//! Trait definitions for dependency injection

use crate::core::StrataResult;
use crate::manifest::Manifest;
use async_trait::async_trait;

/// Trait for fetching the previously published remote manifest
///
/// `Ok(None)` means no manifest has ever been published (first publish, or
/// the remote store is empty). Transport and storage failures are errors,
/// distinct from the absent case. Implementations should be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait RemoteManifestStore: Send + Sync {
    /// Fetch the remote manifest, if one exists.
    async fn fetch(&self) -> StrataResult<Option<Manifest>>;
}

/// Trait for running an external process and capturing its standard output
///
/// Used for the runtime version query, and by outer layers for the package
/// manager install command. A launch failure or non-zero exit must surface
/// as an error, never as empty output.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` and return its stdout as text.
    async fn run(&self, program: &str, args: &[String]) -> StrataResult<String>;
}
