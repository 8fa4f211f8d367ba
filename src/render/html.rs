use crate::render::page::{Element, Page};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// `<pre>` block holding escaped text
pub fn preformatted(text: &str) -> String {
    format!("<pre>{}</pre>", encode_text(text))
}

/// Serializes one bound element with its current state
pub fn write_element(element: &Element) -> String {
    let mut open = format!(
        "<{} id=\"{}\"",
        element.tag(),
        encode_double_quoted_attribute(element.id())
    );
    if !element.classes().is_empty() {
        open.push_str(&format!(
            " class=\"{}\"",
            encode_double_quoted_attribute(&element.classes().join(" "))
        ));
    }
    if element.is_hidden() {
        open.push_str(" style=\"display: none\"");
    }
    open.push('>');

    format!("{}{}</{}>", open, element.inner_html(), element.tag())
}

/// Serializes a snapshot of the whole page
pub fn write_page(page: &Page) -> String {
    let title = page.title().unwrap_or("Data View");
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", encode_text(title)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&write_element(page.loading()));
    out.push('\n');
    out.push_str(&write_element(page.content()));
    out.push_str("\n</body>\n</html>\n");
    out
}
