//! Subprocess runner on the Tokio runtime

use crate::core::{StrataError, StrataResult};
use crate::di::traits::ProcessRunner;
use async_trait::async_trait;
use tokio::process::Command;

/// Runs external commands and captures their stdout.
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> StrataResult<String> {
        let output = Command::new(program).args(args).output().await.map_err(|e| {
            StrataError::RuntimeUnavailable(format!("failed to run '{}': {}", program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StrataError::RuntimeUnavailable(format!(
                "'{}' exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = std::str::from_utf8(&output.stdout).map_err(|e| {
            StrataError::RuntimeUnavailable(format!("invalid UTF-8 in '{}' output: {}", program, e))
        })?;

        Ok(stdout.to_string())
    }
}
