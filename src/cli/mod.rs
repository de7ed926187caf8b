//! CLI command implementations

pub mod changed;
pub mod checksum;
pub mod verify_runtime;
