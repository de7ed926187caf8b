//! Dependency injection infrastructure for Strata
//!
//! The core never talks to the network or spawns processes directly; it goes
//! through the traits defined here. Production implementations live in
//! [`remote`] and [`process`], in-memory test doubles in [`mocks`].

pub mod mocks;
pub mod process;
pub mod remote;
pub mod traits;

// Re-export key types
pub use process::TokioProcessRunner;
pub use remote::HttpManifestStore;
pub use traits::{ProcessRunner, RemoteManifestStore};
