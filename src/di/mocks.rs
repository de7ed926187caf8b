//! Mock implementations of collaborator traits for testing

use super::traits::{ProcessRunner, RemoteManifestStore};
use crate::core::{StrataError, StrataResult};
use crate::manifest::Manifest;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock remote manifest store for testing
///
/// # Example
///
/// ```
/// use strata::di::mocks::MockRemoteManifestStore;
///
/// let published = MockRemoteManifestStore::with_manifest("requests==2.31.0\n");
/// let empty = MockRemoteManifestStore::empty();
/// let broken = MockRemoteManifestStore::failing("connection reset");
/// # let _ = (published, empty, broken);
/// ```
pub struct MockRemoteManifestStore {
    manifest: Option<String>,
    error: Option<String>,
}

impl MockRemoteManifestStore {
    /// A store holding one published manifest with the given content
    pub fn with_manifest(content: impl Into<String>) -> Self {
        Self {
            manifest: Some(content.into()),
            error: None,
        }
    }

    /// A store with no manifest published yet
    pub fn empty() -> Self {
        Self {
            manifest: None,
            error: None,
        }
    }

    /// A store whose fetch always fails with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            manifest: None,
            error: Some(message.into()),
        }
    }
}

#[async_trait]
impl RemoteManifestStore for MockRemoteManifestStore {
    async fn fetch(&self) -> StrataResult<Option<Manifest>> {
        if let Some(message) = &self.error {
            return Err(StrataError::RemoteFetch(message.clone()));
        }

        Ok(self
            .manifest
            .as_ref()
            .map(|content| Manifest::new(content.clone(), PathBuf::from("remote/requirements.txt"))))
    }
}

/// Mock process runner for testing
///
/// Returns canned stdout (or a canned failure) and records every invocation
/// so tests can assert what was, or was not, launched.
pub struct MockProcessRunner {
    stdout: String,
    error: Option<String>,
    invocations: Arc<Mutex<Vec<String>>>,
}

impl MockProcessRunner {
    /// A runner whose subprocess always prints `stdout` and exits cleanly
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            error: None,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A runner whose subprocess always fails to launch
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            error: Some(message.into()),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle on the recorded command lines
    pub fn invocations(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.invocations)
    }
}

#[async_trait]
impl ProcessRunner for MockProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> StrataResult<String> {
        let mut invocations = self
            .invocations
            .lock()
            .map_err(|_| StrataError::Config("mock invocation log poisoned".to_string()))?;
        invocations.push(format!("{} {}", program, args.join(" ")));
        drop(invocations);

        if let Some(message) = &self.error {
            return Err(StrataError::RuntimeUnavailable(message.clone()));
        }

        Ok(self.stdout.clone())
    }
}
