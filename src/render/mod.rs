pub mod html;
pub mod page;


pub use page::{Element, Page, PageIds};

use crate::results::Payload;

/// Message shown to the end user for every kind of load failure
pub const USER_ERROR_MESSAGE: &str = "Error loading data. Have you run the scraper?";

/// Displays a successfully loaded payload
pub trait Renderer {
    /// Hide the loading indicator and insert the indented payload text.
    ///
    /// Appends: a second call adds a second block next to the first.
    fn render(&mut self, payload: &Payload);
}

/// Turns the loading indicator into an error display
pub trait ErrorPresenter {
    /// `message` is the developer diagnostic; it goes to the log, never to
    /// the page
    fn show(&mut self, message: &str);
}
