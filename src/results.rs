use crate::error::LoadError;
use serde_json::Value;

/// Untyped JSON value produced by the scraper. No schema is assumed.
pub type Payload = Value;

/// Outcome of exactly one load attempt
#[derive(Debug)]
pub enum LoadResult {
    Success(Payload),
    Failure(LoadError),
}

impl LoadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, LoadResult::Success(_))
    }

    /// Diagnostic message of a failed load
    pub fn error_message(&self) -> Option<String> {
        match self {
            LoadResult::Success(_) => None,
            LoadResult::Failure(err) => Some(err.to_string()),
        }
    }

    pub fn into_result(self) -> Result<Payload, LoadError> {
        match self {
            LoadResult::Success(payload) => Ok(payload),
            LoadResult::Failure(err) => Err(err),
        }
    }
}

impl From<Result<Payload, LoadError>> for LoadResult {
    fn from(result: Result<Payload, LoadError>) -> Self {
        match result {
            Ok(payload) => LoadResult::Success(payload),
            Err(err) => LoadResult::Failure(err),
        }
    }
}

/// Short description of a payload's top-level shape, for logs
pub fn describe(payload: &Payload) -> String {
    match payload {
        Value::Object(map) => format!("object with {} keys", map.len()),
        Value::Array(items) => format!("array of {} items", items.len()),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_scraper_output() {
        let payload = json!({
            "status": "success",
            "course_id": 84647,
            "scraped_at": "2025-01-01 00:00:00",
            "post_count": 2,
            "posts": [{}, {}]
        });
        assert_eq!(describe(&payload), "object with 5 keys");
        assert_eq!(describe(&payload["posts"]), "array of 2 items");
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!(1.5)), "number");
    }

    #[test]
    fn test_into_result() {
        let ok = LoadResult::Success(json!({"a": 1}));
        assert!(ok.is_success());
        assert_eq!(ok.error_message(), None);
        assert_eq!(ok.into_result().unwrap(), json!({"a": 1}));

        let failed = LoadResult::Failure(LoadError::not_ok());
        assert!(!failed.is_success());
        assert_eq!(
            failed.error_message().as_deref(),
            Some("Network response was not ok")
        );
        assert!(failed.into_result().unwrap_err().is_network());
    }
}
