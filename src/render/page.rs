use crate::error::PageError;
use crate::render::{ErrorPresenter, Renderer, USER_ERROR_MESSAGE, html};
use crate::results::Payload;
use crate::utils::to_pretty_json;
use html_escape::encode_text;
use scraper::{ElementRef, Html, Selector};

/// Identifiers of the two elements the loader writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIds {
    /// Container that receives rendered output
    pub content: String,
    /// Status element reused for loading and error messages
    pub loading: String,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            loading: "loading".to_string(),
        }
    }
}

/// One element of the host page that the flow may touch
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: String,
    tag: String,
    classes: Vec<String>,
    hidden: bool,
    /// Inner markup as found in the template
    markup: String,
    text: String,
    text_replaced: bool,
    /// Preformatted blocks appended after the initial markup
    blocks: Vec<String>,
}

impl Element {
    /// Create an empty element
    pub fn new(id: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            classes: Vec::new(),
            hidden: false,
            markup: String::new(),
            text: String::new(),
            text_replaced: false,
            blocks: Vec::new(),
        }
    }

    /// Create an element holding plain text
    pub fn with_text(id: &str, tag: &str, text: &str) -> Self {
        let mut element = Self::new(id, tag);
        element.markup = encode_text(text).into_owned();
        element.text = text.to_string();
        element
    }

    fn from_ref(node: ElementRef<'_>) -> Self {
        let value = node.value();
        let hidden = value.attr("hidden").is_some()
            || value
                .attr("style")
                .map(|style| style.replace(' ', "").contains("display:none"))
                .unwrap_or(false);

        Self {
            id: value.id().unwrap_or_default().to_string(),
            tag: value.name().to_string(),
            classes: value.classes().map(str::to_string).collect(),
            hidden,
            markup: node.inner_html(),
            text: node.text().collect::<String>(),
            text_replaced: false,
            blocks: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Current text content, excluding appended blocks
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Texts of the appended preformatted blocks, in insertion order
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Inner markup as it will be serialized
    pub fn inner_html(&self) -> String {
        let mut out = if self.text_replaced {
            encode_text(&self.text).into_owned()
        } else {
            self.markup.clone()
        };
        for block in &self.blocks {
            out.push_str(&html::preformatted(block));
        }
        out
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Replace all content with plain text
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.text_replaced = true;
        self.blocks.clear();
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Append a preformatted text block as the last child
    pub fn append_preformatted(&mut self, text: String) {
        self.blocks.push(text);
    }
}

/// The host page, bound to its two elements once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    title: Option<String>,
    content: Element,
    loading: Element,
    error_class: String,
}

impl Page {
    /// Built-in page used when no template is given
    pub fn blank(ids: &PageIds) -> Self {
        Self {
            title: None,
            content: Element::new(&ids.content, "div"),
            loading: Element::with_text(&ids.loading, "p", "Loading..."),
            error_class: "error".to_string(),
        }
    }

    /// Parse a host HTML document and look up both elements by id
    pub fn from_html(source: &str, ids: &PageIds) -> Result<Self, PageError> {
        let doc = Html::parse_document(source);
        let with_id = parse_selector("[id]")?;
        let title_selector = parse_selector("title")?;

        let find = |id: &str| {
            doc.select(&with_id)
                .find(|node| node.value().id() == Some(id))
                .map(Element::from_ref)
                .ok_or_else(|| PageError::MissingElement(id.to_string()))
        };

        let content = find(ids.content.as_str())?;
        let loading = find(ids.loading.as_str())?;

        let title = doc
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        ::log::debug!(
            "Bound page elements: container <{}> #{}, status <{}> #{}",
            content.tag(),
            content.id(),
            loading.tag(),
            loading.id()
        );

        Ok(Self {
            title,
            content,
            loading,
            error_class: "error".to_string(),
        })
    }

    /// Set the class that marks the status element as an error
    pub fn with_error_class(mut self, class: &str) -> Self {
        self.error_class = class.to_string();
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn loading(&self) -> &Element {
        &self.loading
    }

    pub fn error_class(&self) -> &str {
        &self.error_class
    }

    /// Serialize the current state of the page
    pub fn to_html(&self) -> String {
        html::write_page(self)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, PageError> {
    Selector::parse(selector).map_err(|e| PageError::Selector(format!("{selector}: {e:?}")))
}

impl Renderer for Page {
    fn render(&mut self, payload: &Payload) {
        self.loading.hide();
        self.content.append_preformatted(to_pretty_json(payload));
    }
}

impl ErrorPresenter for Page {
    fn show(&mut self, message: &str) {
        ::log::error!("Error loading data: {}", message);
        self.loading.set_text(USER_ERROR_MESSAGE);
        self.loading.add_class(&self.error_class);
    }
}
