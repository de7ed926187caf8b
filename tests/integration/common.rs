//! Common utilities for integration tests

use assert_cmd::Command;
use std::path::Path;

pub fn strata_command(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.current_dir(dir);
    cmd
}
