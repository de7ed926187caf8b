use crate::core::{StrataError, StrataResult};
use crate::manifest::Manifest;
use sha2::{Digest, Sha256};

/// Checksum algorithm for manifest identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumAlgorithm {
    /// BLAKE3 (default, faster)
    #[default]
    Blake3,
    /// SHA-256 (for callers that need a FIPS-friendly digest)
    Sha256,
}

impl ChecksumAlgorithm {
    /// Parse an algorithm name from configuration
    pub fn from_name(name: &str) -> StrataResult<Self> {
        match name {
            "blake3" => Ok(Self::Blake3),
            "sha256" => Ok(Self::Sha256),
            other => Err(StrataError::Config(format!(
                "unknown checksum algorithm '{}' (expected 'blake3' or 'sha256')",
                other
            ))),
        }
    }
}

/// Derives a stable identifier for a manifest's content, used as the cache
/// key for packaged dependency layers.
pub struct ChecksumComputer;

impl ChecksumComputer {
    /// Digest the manifest content with `algorithm`, encoded as lowercase hex.
    ///
    /// A pure function of the content bytes: same bytes in, same digest out,
    /// on every call, process, and platform. File metadata and the manifest
    /// path never participate.
    pub fn checksum_with_algorithm(manifest: &Manifest, algorithm: ChecksumAlgorithm) -> String {
        let data = manifest.content().as_bytes();
        match algorithm {
            ChecksumAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(data);
                hex::encode(hasher.finalize())
            }
            ChecksumAlgorithm::Blake3 => blake3::hash(data).to_hex().to_string(),
        }
    }

    /// Digest with the default algorithm (BLAKE3).
    pub fn checksum(manifest: &Manifest) -> String {
        Self::checksum_with_algorithm(manifest, ChecksumAlgorithm::default())
    }
}
