//! Integration tests for the strata CLI

mod changed;
mod checksum;
mod common;
mod verify_runtime;
