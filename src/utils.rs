use crate::error::{FetchError, ViewerError};
use crate::results::Payload;
use std::path::Path;
use url::Url;

/// Resolves a resource locator against the page's base URL, the way a
/// relative `fetch` path is resolved against the document URL
pub fn resolve_locator(base: &Url, locator: &str) -> Result<Url, FetchError> {
    base.join(locator).map_err(|source| FetchError::Locator {
        locator: locator.to_string(),
        source,
    })
}

/// Interprets a base given on the command line: a URL when it parses as
/// one, otherwise a local directory
pub fn base_from_arg(arg: &str) -> Result<Url, ViewerError> {
    if let Ok(url) = Url::parse(arg) {
        return Ok(url);
    }

    let path = Path::new(arg);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| ViewerError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };

    Url::from_directory_path(&absolute).map_err(|_| ViewerError::BaseUrl {
        url: arg.to_string(),
        source: url::ParseError::RelativeUrlWithoutBase,
    })
}

/// Indented (two-space) JSON text of a payload
pub fn to_pretty_json(payload: &Payload) -> String {
    // serde_json only fails on non-string map keys, which a Value cannot hold
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_relative_locator() {
        let base = Url::parse("http://localhost:8000/client/index.html").unwrap();
        let url = resolve_locator(&base, "data.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/client/data.json");

        let base = Url::parse("http://localhost:8000/client/").unwrap();
        let url = resolve_locator(&base, "data.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/client/data.json");
    }

    #[test]
    fn test_resolve_absolute_locator_wins() {
        let base = Url::parse("http://localhost:8000/").unwrap();
        let url = resolve_locator(&base, "https://example.com/x.json").unwrap();
        assert_eq!(url.as_str(), "https://example.com/x.json");
    }

    #[test]
    fn test_base_from_arg() {
        let url = base_from_arg("http://example.com/").unwrap();
        assert_eq!(url.scheme(), "http");

        let url = base_from_arg("client").unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/client/"));
    }

    #[test]
    fn test_pretty_json_matches_two_space_indent() {
        assert_eq!(to_pretty_json(&json!({"a": 1})), "{\n  \"a\": 1\n}");
        assert_eq!(to_pretty_json(&json!([1, 2])), "[\n  1,\n  2\n]");
        assert_eq!(to_pretty_json(&json!({})), "{}");
        assert_eq!(to_pretty_json(&json!("x")), "\"x\"");
    }

    #[test]
    fn test_pretty_json_keeps_document_key_order() {
        let payload: Payload =
            serde_json::from_str(r#"{"status":"success","course_id":1,"posts":[]}"#).unwrap();
        assert_eq!(
            to_pretty_json(&payload),
            "{\n  \"status\": \"success\",\n  \"course_id\": 1,\n  \"posts\": []\n}"
        );
    }
}
