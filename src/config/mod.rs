use crate::core::StrataResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "strata.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the dependency manifest, relative to the working directory
    #[serde(default = "default_dependencies_path")]
    pub dependencies_path: String,

    /// Required runtime specifier (e.g., "python3.11")
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// URL of the previously published manifest; unset means change
    /// detection cannot run and always-install callers may skip it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_manifest_url: Option<String>,

    /// Checksum algorithm for layer cache keys
    /// - "blake3": BLAKE3 (default, faster)
    /// - "sha256": SHA-256
    #[serde(default = "default_checksum_algorithm")]
    pub checksum_algorithm: String,

    /// Command used to query the runtime's version
    #[serde(default)]
    pub version_query: VersionQuery,
}

/// The version-query subcommand for the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionQuery {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for VersionQuery {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec!["--version".to_string()],
        }
    }
}

fn default_dependencies_path() -> String {
    "requirements.txt".to_string()
}

fn default_runtime() -> String {
    "python3.11".to_string()
}

fn default_checksum_algorithm() -> String {
    "blake3".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dependencies_path: default_dependencies_path(),
            runtime: default_runtime(),
            remote_manifest_url: None,
            checksum_algorithm: default_checksum_algorithm(),
            version_query: VersionQuery::default(),
        }
    }
}

impl Config {
    /// Load `strata.yaml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> StrataResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load config from a specific path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> StrataResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
