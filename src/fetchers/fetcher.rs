use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

/// Raw response to a single GET-style request
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Final URL of the resource
    pub url: String,
    /// Status code (file reads report 200/403/404)
    pub status: u16,
    /// Unparsed body
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Base trait for anything that can retrieve a resource by URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue one request and wait for the whole body
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}
