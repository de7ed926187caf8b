use crate::config::VersionQuery;
use crate::core::{CompatibilityResult, RuntimeVersion, StrataError, StrataResult};
use crate::di::ProcessRunner;
use regex::Regex;
use std::sync::{Arc, OnceLock};

static VERSION_TOKEN: OnceLock<Regex> = OnceLock::new();

fn version_token() -> &'static Regex {
    VERSION_TOKEN.get_or_init(|| Regex::new(r"([0-9]+)\.([0-9]+)").expect("version token pattern"))
}

/// Verifies that the locally available runtime executable satisfies a
/// declared version requirement before dependency installation proceeds.
///
/// The check is structural: the requirement's `major.minor` token is compared
/// against the (major, minor) the interpreter actually reports. The patch
/// component is intentionally ignored.
pub struct CompatibilityChecker {
    runner: Arc<dyn ProcessRunner>,
    query: VersionQuery,
}

impl CompatibilityChecker {
    pub fn new(runner: Arc<dyn ProcessRunner>, query: VersionQuery) -> Self {
        Self { runner, query }
    }

    /// Extract the required `major.minor` version from a runtime specifier
    /// such as "python3.11".
    ///
    /// A specifier with no such token is a configuration error, not an
    /// incompatible runtime.
    pub fn required_version(specifier: &str) -> StrataResult<RuntimeVersion> {
        let captures = version_token()
            .captures(specifier)
            .ok_or_else(|| StrataError::InvalidRuntimeSpecifier(specifier.to_string()))?;

        // Both capture groups are all-digit by construction
        let major = captures[1]
            .parse()
            .map_err(|_| StrataError::InvalidRuntimeSpecifier(specifier.to_string()))?;
        let minor = captures[2]
            .parse()
            .map_err(|_| StrataError::InvalidRuntimeSpecifier(specifier.to_string()))?;

        Ok(RuntimeVersion::new(major, minor, 0))
    }

    /// Run the runtime's version query once and check the reported version
    /// against `specifier`.
    ///
    /// The specifier is validated before anything is launched, so a bad
    /// specifier never costs a subprocess. Launch failures and abnormal exits
    /// surface as `RuntimeUnavailable`, never as an incompatible verdict.
    pub async fn is_compatible(&self, specifier: &str) -> StrataResult<CompatibilityResult> {
        let required = Self::required_version(specifier)?;

        let output = self
            .runner
            .run(&self.query.program, &self.query.args)
            .await?;

        // Version info is on the first line ("Python 3.11.4")
        let first_line = output.lines().next().unwrap_or("").trim();
        let observed = RuntimeVersion::parse(first_line).map_err(|_| {
            StrataError::RuntimeUnavailable(format!(
                "unrecognized version output from '{}': '{}'",
                self.query.program, first_line
            ))
        })?;

        let compatible = observed.satisfies_minor(&required);
        tracing::debug!(
            required = %required.major_minor(),
            observed = %observed,
            compatible,
            "runtime version check"
        );

        Ok(CompatibilityResult {
            version: observed,
            compatible,
        })
    }
}
