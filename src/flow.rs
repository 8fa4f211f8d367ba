use crate::error::FlowError;
use crate::loader::DataLoader;
use crate::render::{ErrorPresenter, Renderer};
use crate::results::{LoadResult, describe};

/// Lifecycle of the single load a page performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Loading,
    /// Terminal: payload displayed
    Rendered,
    /// Terminal: error message displayed
    ErrorShown,
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Rendered | FlowState::ErrorShown)
    }
}

/// Drives `Idle -> Loading -> {Rendered, ErrorShown}` for one page
pub struct Flow {
    loader: DataLoader,
    locator: String,
    state: FlowState,
}

impl Flow {
    pub fn new(loader: DataLoader, locator: impl Into<String>) -> Self {
        Self {
            loader,
            locator: locator.into(),
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Page-ready handler: load once and hand the outcome to `view`.
    ///
    /// Both outcomes are handled here; the view sees exactly one call.
    pub async fn on_ready<V>(&mut self, view: &mut V) -> Result<FlowState, FlowError>
    where
        V: Renderer + ErrorPresenter,
    {
        if self.state != FlowState::Idle {
            ::log::warn!("Ignoring page-ready: flow is already {:?}", self.state);
            return Err(FlowError::AlreadyStarted(self.state));
        }

        self.state = FlowState::Loading;
        self.state = match self.loader.load(&self.locator).await {
            LoadResult::Success(payload) => {
                ::log::info!("Loaded {} ({})", self.locator, describe(&payload));
                view.render(&payload);
                FlowState::Rendered
            }
            LoadResult::Failure(err) => {
                view.show(&err.to_string());
                FlowState::ErrorShown
            }
        };

        Ok(self.state)
    }
}
