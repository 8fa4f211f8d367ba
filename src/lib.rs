pub mod config;
pub mod error;
pub mod fetchers;
pub mod flow;
pub mod loader;
pub mod render;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ViewerConfig;
pub use error::{LoadError, ViewerError};
pub use flow::{Flow, FlowState};
pub use loader::DataLoader;
pub use render::{ErrorPresenter, Page, Renderer};
pub use results::{LoadResult, Payload};

use fetchers::{Fetcher, SchemeFetcher};
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Final state of a page after its single load
#[derive(Debug)]
pub struct Outcome {
    pub state: FlowState,
    pub page: Page,
}

/// Main builder: binds the page, then runs the load flow once
pub struct Viewer {
    config: ViewerConfig,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl Viewer {
    /// Create a viewer from a configuration
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            fetcher: None,
        }
    }

    /// Set the URL the resource locator is resolved against
    pub fn with_base_url(mut self, base_url: &Url) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Set the resource locator
    pub fn with_resource(mut self, resource: &str) -> Self {
        self.config.resource = resource.to_string();
        self
    }

    /// Set the host HTML page
    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.config.template = Some(template.into());
        self
    }

    /// Use a specific fetcher instead of scheme-based dispatch
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Bind the page (the page-ready point), then load and display once
    pub async fn run(self) -> Result<Outcome, ViewerError> {
        let base_url = Url::parse(&self.config.base_url).map_err(|source| {
            ViewerError::BaseUrl {
                url: self.config.base_url.clone(),
                source,
            }
        })?;

        let mut page = self.load_page().await?;

        let fetcher: Arc<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(SchemeFetcher::new(&self.config.user_agent)?),
        };

        ::log::info!("Page ready; base URL {}", base_url);
        let loader = DataLoader::new(fetcher, base_url);
        let mut flow = Flow::new(loader, self.config.resource.clone());
        let state = flow.on_ready(&mut page).await?;

        Ok(Outcome { state, page })
    }

    async fn load_page(&self) -> Result<Page, ViewerError> {
        let ids = self.config.page_ids();
        let page = match &self.config.template {
            Some(path) => {
                ::log::debug!("Reading page template {}", path.display());
                let source = tokio::fs::read_to_string(path).await.map_err(|source| {
                    ViewerError::Io {
                        path: path.clone(),
                        source,
                    }
                })?;
                Page::from_html(&source, &ids)?
            }
            None => Page::blank(&ids),
        };
        Ok(page.with_error_class(&self.config.error_class))
    }
}
