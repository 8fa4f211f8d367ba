use crate::error::ViewerError;
use crate::render::PageIds;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `base_url`
pub const BASE_URL_ENV: &str = "DATA_VIEW_BASE_URL";

/// Configuration for loading and displaying the scraped data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// URL the resource locator is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Relative (or absolute) locator of the JSON resource
    #[serde(default = "default_resource")]
    pub resource: String,

    /// Id of the container that receives rendered output
    #[serde(default = "default_content_id")]
    pub content_id: String,

    /// Id of the loading/status element
    #[serde(default = "default_loading_id")]
    pub loading_id: String,

    /// Class added to the status element on failure
    #[serde(default = "default_error_class")]
    pub error_class: String,

    /// Host HTML page; a built-in page is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Where to write the rendered page; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_resource() -> String {
    "data.json".to_string()
}

fn default_content_id() -> String {
    "content".to_string()
}

fn default_loading_id() -> String {
    "loading".to_string()
}

fn default_error_class() -> String {
    "error".to_string()
}

fn default_user_agent() -> String {
    format!("data-view/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource: default_resource(),
            content_id: default_content_id(),
            loading_id: default_loading_id(),
            error_class: default_error_class(),
            template: None,
            output: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let io_err = |source| ViewerError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_err)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply the `DATA_VIEW_BASE_URL` override if it is set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                ::log::debug!("{} overrides base URL with {}", BASE_URL_ENV, base_url);
                self.base_url = base_url;
            }
        }
        self
    }

    pub fn page_ids(&self) -> PageIds {
        PageIds {
            content: self.content_id.clone(),
            loading: self.loading_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/");
        assert_eq!(config.resource, "data.json");
        assert_eq!(config.page_ids(), PageIds::default());
        assert_eq!(config.error_class, "error");
        assert!(config.user_agent.starts_with("data-view/"));
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = ViewerConfig::from_json(
            r#"{"base_url": "file:///srv/client/", "loading_id": "status", "template": "index.html"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "file:///srv/client/");
        assert_eq!(config.loading_id, "status");
        assert_eq!(config.content_id, "content");
        assert_eq!(config.template, Some(PathBuf::from("index.html")));
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_invalid_json() {
        let err = ViewerConfig::from_json("{base_url").unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = ViewerConfig::from_file("/nonexistent/data-view.json").unwrap_err();
        assert!(matches!(err, ViewerError::Io { .. }));
    }
}
