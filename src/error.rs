use crate::flow::FlowState;
use std::path::PathBuf;
use thiserror::Error;

/// Diagnostic carried by a load that failed on a non-success status.
pub const NETWORK_NOT_OK: &str = "Network response was not ok";

/// Why a single load attempt failed.
///
/// Only the log channel sees the difference between these; the page always
/// shows the same message.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Non-success status, or the request never produced a response
    #[error("{0}")]
    Network(String),

    /// Success status but the body is not JSON
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// A failure caused by a non-2xx status
    pub fn not_ok() -> Self {
        LoadError::Network(NETWORK_NOT_OK.to_string())
    }

    pub fn is_network(&self) -> bool {
        matches!(self, LoadError::Network(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse(_))
    }
}

impl From<FetchError> for LoadError {
    fn from(err: FetchError) -> Self {
        LoadError::Network(err.to_string())
    }
}

/// Transport-level failures raised by a fetcher before any status exists
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid resource locator '{locator}': {source}")]
    Locator {
        locator: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Not a local file URL: {0}")]
    NotAFilePath(String),
}

/// Problems binding the host page before the flow can start
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Page has no element with id '{0}'")]
    MissingElement(String),

    #[error("Invalid selector: {0}")]
    Selector(String),
}

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Load already started; flow is {0:?}")]
    AlreadyStarted(FlowState),
}

/// Setup failures surfaced by the `Viewer` and the CLI
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to read configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
