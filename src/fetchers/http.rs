use crate::error::FetchError;
use crate::fetchers::fetcher::{FetchResponse, Fetcher};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Fetches `http`/`https` resources with a shared reqwest client.
///
/// No timeout is configured: a hung request waits indefinitely.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher that identifies itself with the given user agent
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        ::log::debug!("GET {}", url);
        let res = self.client.get(url.clone()).send().await?;
        let status = res.status().as_u16();
        let final_url = res.url().to_string();
        let body = res.bytes().await?.to_vec();

        ::log::debug!("{} answered {} ({} bytes)", final_url, status, body.len());
        Ok(FetchResponse::new(final_url, status, body))
    }
}
