use crate::core::StrataResult;
use crate::di::RemoteManifestStore;
use crate::manifest::Manifest;
use std::sync::Arc;

/// Decides whether dependencies must be reinstalled.
///
/// The comparison is deliberately syntactic: exact byte equality of manifest
/// content, no whitespace normalization, no version-range resolution. Any
/// formatting difference counts as a real change, which at worst costs one
/// redundant install.
pub struct ChangeDetector {
    remote: Arc<dyn RemoteManifestStore>,
}

impl ChangeDetector {
    pub fn new(remote: Arc<dyn RemoteManifestStore>) -> Self {
        Self { remote }
    }

    /// Pure comparison of a possibly-absent remote manifest against the local
    /// one. Absent remote means there is nothing to compare against, so a
    /// fresh install is always required.
    pub fn is_diff(remote: Option<&Manifest>, local: &Manifest) -> bool {
        match remote {
            None => true,
            Some(remote) => remote.content() != local.content(),
        }
    }

    /// Fetch the remote manifest and compare it against `local`.
    ///
    /// A fetch transport failure propagates as `RemoteFetch`; it is never
    /// folded into "assume changed", so a broken remote store cannot be
    /// mistaken for a first publish.
    pub async fn has_changed(&self, local: &Manifest) -> StrataResult<bool> {
        let remote = self.remote.fetch().await?;

        if remote.is_some() {
            tracing::info!(path = %local.path().display(), "comparing dependencies");
        } else {
            tracing::info!("no remote manifest published yet, dependencies treated as changed");
        }

        Ok(Self::is_diff(remote.as_ref(), local))
    }
}
