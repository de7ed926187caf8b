use std::path::Path;
use strata::config::Config;
use strata::core::StrataResult;
use strata::manifest::{ChecksumAlgorithm, ChecksumComputer, ManifestStore};

/// Print the layer cache key for the local manifest.
pub fn run() -> StrataResult<()> {
    let config = Config::load()?;
    let algorithm = ChecksumAlgorithm::from_name(&config.checksum_algorithm)?;

    let manifest = ManifestStore::load(Path::new(&config.dependencies_path))?;
    println!("{}", ChecksumComputer::checksum_with_algorithm(&manifest, algorithm));

    Ok(())
}
