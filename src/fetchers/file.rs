use crate::error::FetchError;
use crate::fetchers::fetcher::{FetchResponse, Fetcher};
use async_trait::async_trait;
use std::io::ErrorKind;
use url::Url;

/// Reads `file://` resources, answering like a static file server would
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        let path = url
            .to_file_path()
            .map_err(|_| FetchError::NotAFilePath(url.to_string()))?;
        ::log::debug!("Reading {}", path.display());

        match tokio::fs::read(&path).await {
            Ok(body) => Ok(FetchResponse::new(url.as_str(), 200, body)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Ok(FetchResponse::new(url.as_str(), 404, Vec::new()))
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Ok(FetchResponse::new(url.as_str(), 403, Vec::new()))
            }
            Err(source) => Err(FetchError::Io { path, source }),
        }
    }
}
