use crate::core::error::{StrataError, StrataResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A runtime interpreter version, as reported by its version query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuntimeVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl RuntimeVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version out of version-query output.
    ///
    /// Handles formats like:
    /// - "Python 3.11.4"
    /// - "Python 3.9.18"
    /// - "3.12"
    ///
    /// Any leading runtime name is skipped; only the first dotted numeric
    /// token is read. Missing minor/patch components default to 0.
    pub fn parse(version_str: &str) -> StrataResult<Self> {
        let version_str = version_str.trim();

        // Skip a leading runtime name ("Python", "python3", ...) and land on
        // the first digit of the version token itself.
        let start = version_str
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .ok_or_else(|| {
                StrataError::Version(format!(
                    "no version token in runtime output: '{}'",
                    version_str
                ))
            })?;
        let token: &str = version_str[start..]
            .split(|c: char| c.is_whitespace())
            .next()
            .unwrap_or("");

        let parts: Vec<&str> = token.split('.').collect();

        let major = parts[0]
            .parse()
            .map_err(|_| StrataError::Version(format!("invalid major version: '{}'", parts[0])))?;

        // A present-but-unreadable minor must not silently become 0: it would
        // turn "3.11rc1" into 3.0 and flip the compatibility verdict.
        let minor = match parts.get(1) {
            None => 0,
            Some(part) => numeric_prefix(part).ok_or_else(|| {
                StrataError::Version(format!("invalid minor version: '{}'", part))
            })?,
        };

        let patch = parts.get(2).and_then(|s| numeric_prefix(s)).unwrap_or(0);

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    /// Get major.minor version (e.g., "3.11")
    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Check this version against a required one on (major, minor) only.
    ///
    /// The patch component is intentionally ignored: a layer built for
    /// 3.11 works on any 3.11.x interpreter.
    pub fn satisfies_minor(&self, required: &RuntimeVersion) -> bool {
        self.major == required.major && self.minor == required.minor
    }
}

/// Leading digits of a version component ("11rc1" -> 11); `None` when the
/// component carries none.
fn numeric_prefix(part: &str) -> Option<u64> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

/// Outcome of a runtime compatibility check: the version the host actually
/// reported, paired with the verdict against the requested specifier.
/// Created fresh per check, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityResult {
    pub version: RuntimeVersion,
    pub compatible: bool,
}
