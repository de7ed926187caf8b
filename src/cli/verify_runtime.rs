use std::sync::Arc;
use strata::config::Config;
use strata::core::{StrataError, StrataResult};
use strata::di::TokioProcessRunner;
use strata::runtime::CompatibilityChecker;

/// Check the host runtime against the required specifier.
///
/// Exits non-zero on an incompatible version so install scripts can gate
/// on it directly.
pub async fn run(specifier: Option<String>) -> StrataResult<()> {
    let config = Config::load()?;
    let specifier = specifier.unwrap_or_else(|| config.runtime.clone());

    let checker = CompatibilityChecker::new(Arc::new(TokioProcessRunner), config.version_query);
    let result = checker.is_compatible(&specifier).await?;

    if result.compatible {
        println!("✓ runtime {} satisfies '{}'", result.version, specifier);
        Ok(())
    } else {
        Err(StrataError::Version(format!(
            "installed runtime version {} does not satisfy '{}'",
            result.version, specifier
        )))
    }
}
