//! HTTP-backed remote manifest store

use crate::core::{StrataError, StrataResult};
use crate::di::traits::RemoteManifestStore;
use crate::manifest::Manifest;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::path::PathBuf;
use std::time::Duration;

/// Fetches the previously published manifest over HTTP.
///
/// The layer store publishes the manifest alongside each packaged layer; a
/// 404 means nothing has been published yet and maps to `Ok(None)`. Every
/// other failure is a transport error the caller must see.
pub struct HttpManifestStore {
    http_client: HttpClient,
    url: String,
}

impl HttpManifestStore {
    pub fn new(url: impl Into<String>) -> StrataResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("strata-packager"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StrataError::RemoteFetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RemoteManifestStore for HttpManifestStore {
    async fn fetch(&self) -> StrataResult<Option<Manifest>> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| StrataError::RemoteFetch(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => Ok(None),
            status if status.is_success() => {
                let content = response
                    .text()
                    .await
                    .map_err(|e| StrataError::RemoteFetch(e.to_string()))?;
                Ok(Some(Manifest::new(content, PathBuf::from(&self.url))))
            }
            status => Err(StrataError::RemoteFetch(format!(
                "unexpected status {} from {}",
                status, self.url
            ))),
        }
    }
}
