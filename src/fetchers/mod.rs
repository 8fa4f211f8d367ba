pub mod fetcher;
pub mod file;
pub mod http;

pub use fetcher::{FetchResponse, Fetcher};
pub use file::FileFetcher;
pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

/// Dispatches to the right fetcher based on the URL scheme
#[derive(Debug, Clone)]
pub struct SchemeFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl SchemeFetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpFetcher::new(user_agent)?,
            file: FileFetcher,
        })
    }
}

#[async_trait]
impl Fetcher for SchemeFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        match url.scheme() {
            "http" | "https" => self.http.fetch(url).await,
            "file" => self.file.fetch(url).await,
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let fetcher = SchemeFetcher::new("data-view-test").unwrap();
        let url = Url::parse("ftp://example.com/data.json").unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(ref s) if s == "ftp"));
    }
}
