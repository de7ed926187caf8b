use std::path::PathBuf;
use thiserror::Error;

pub type StrataResult<T> = Result<T, StrataError>;

#[derive(Error, Debug)]
pub enum StrataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The local dependency manifest is missing or unreadable.
    /// Fatal for the current packaging run; nothing downstream may run
    /// against a stale or empty manifest.
    #[error("cannot find manifest at {path}: {source}")]
    ManifestNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Transport or storage failure while retrieving the remote manifest.
    /// Distinct from "no remote manifest published yet", which is not an error.
    #[error("failed to fetch remote manifest: {0}")]
    RemoteFetch(String),

    /// The requirement string carries no extractable `major.minor` token.
    /// A configuration mistake, never a runtime condition.
    #[error("no version token in runtime specifier '{0}'")]
    InvalidRuntimeSpecifier(String),

    /// The version-query subprocess could not be launched or exited abnormally.
    /// Not the same thing as an incompatible version.
    #[error("runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    #[error("version error: {0}")]
    Version(String),

    #[error("configuration error: {0}")]
    Config(String),
}
