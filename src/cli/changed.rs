use std::path::Path;
use std::sync::Arc;
use strata::config::Config;
use strata::core::{StrataError, StrataResult};
use strata::di::HttpManifestStore;
use strata::manifest::{ChangeDetector, ManifestStore};

/// Compare the local manifest against the published remote copy.
///
/// Prints "changed" or "unchanged"; a missing remote manifest counts as
/// changed, a remote transport failure is an error.
pub async fn run() -> StrataResult<()> {
    let config = Config::load()?;

    let url = config.remote_manifest_url.as_deref().ok_or_else(|| {
        StrataError::Config(
            "remote_manifest_url is not set in strata.yaml; nothing to compare against".to_string(),
        )
    })?;

    let local = ManifestStore::load(Path::new(&config.dependencies_path))?;
    let detector = ChangeDetector::new(Arc::new(HttpManifestStore::new(url)?));

    if detector.has_changed(&local).await? {
        println!("changed");
    } else {
        println!("unchanged");
    }

    Ok(())
}
