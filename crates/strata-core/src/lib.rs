//! Core types for Strata.
//!
//! This crate holds the pieces of Strata with no I/O of their own: the shared
//! error type and the runtime version model. The root `strata` crate builds
//! the manifest, checksum, and compatibility machinery on top of these.

pub mod core;

pub use core::error::{StrataError, StrataResult};
pub use core::version::{CompatibilityResult, RuntimeVersion};
