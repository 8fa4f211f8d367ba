use crate::error::LoadError;
use crate::fetchers::Fetcher;
use crate::results::{LoadResult, Payload};
use crate::utils::resolve_locator;
use std::sync::Arc;
use url::Url;

/// Issues the single request for the page's data and parses the answer
pub struct DataLoader {
    fetcher: Arc<dyn Fetcher>,
    base_url: Url,
}

impl DataLoader {
    /// Create a loader resolving locators against `base_url`
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: Url) -> Self {
        Self { fetcher, base_url }
    }

    /// Fetch `locator` once and parse the body as JSON.
    ///
    /// Any non-2xx status fails with the fixed network diagnostic without
    /// looking at the body. No retry, no timeout.
    pub async fn load(&self, locator: &str) -> LoadResult {
        self.try_load(locator).await.into()
    }

    async fn try_load(&self, locator: &str) -> Result<Payload, LoadError> {
        let url = resolve_locator(&self.base_url, locator)?;
        ::log::info!("Loading {}", url);

        let response = self.fetcher.fetch(&url).await?;
        if !response.is_ok() {
            ::log::debug!("{} returned status {}", response.url, response.status);
            return Err(LoadError::not_ok());
        }

        let body = strip_bom(&response.body);
        let payload: Payload = serde_json::from_slice(body)?;
        Ok(payload)
    }
}

/// Drops a leading UTF-8 byte order mark, as browsers do before decoding JSON
fn strip_bom(body: &[u8]) -> &[u8] {
    body.strip_prefix(UTF8_BOM).unwrap_or(body)
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
