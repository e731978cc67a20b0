//! The `greeting://{name}` resource.
//!
//! Pure formatting: reading `greeting://Ada` returns a greeting for Ada and
//! never touches the leave ledger.

use rmcp::model::{ReadResourceResult, ResourceContents, ResourceTemplate};
use serde_json::json;

use crate::mcp::error::LeaveError;

pub const GREETING_URI_PREFIX: &str = "greeting://";
pub const GREETING_URI_TEMPLATE: &str = "greeting://{name}";

#[must_use]
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}! How can I assist you with leave management today?")
}

pub fn greeting_resource_template() -> Result<ResourceTemplate, LeaveError> {
    Ok(serde_json::from_value(json!({
        "uriTemplate": GREETING_URI_TEMPLATE,
        "name": "getGreeting",
        "description": "A greeting for the named person, e.g. greeting://Ada",
        "mimeType": "text/plain",
    }))?)
}

/// Extracts the name from a `greeting://<name>` URI. Names are a single
/// non-empty path segment.
#[must_use]
pub fn greeting_name(uri: &str) -> Option<&str> {
    uri.strip_prefix(GREETING_URI_PREFIX)
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

pub fn read_greeting(uri: &str) -> Result<ReadResourceResult, LeaveError> {
    let name = greeting_name(uri).ok_or_else(|| LeaveError::ResourceNotFound(uri.to_string()))?;
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(greeting(name), uri)],
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(
            greeting("Ada"),
            "Hello, Ada! How can I assist you with leave management today?"
        );
    }

    #[test]
    fn name_comes_from_the_uri() {
        assert_eq!(greeting_name("greeting://Ada"), Some("Ada"));
        assert_eq!(greeting_name("greeting://"), None);
        assert_eq!(greeting_name("greeting://Ada/extra"), None);
        assert_eq!(greeting_name("hello://Ada"), None);
    }

    #[test]
    fn reading_an_unknown_uri_is_not_found() {
        assert!(matches!(
            read_greeting("memo://insights"),
            Err(LeaveError::ResourceNotFound(uri)) if uri == "memo://insights"
        ));
    }

    #[test]
    fn reads_greeting_text() {
        let result = read_greeting("greeting://Ada").unwrap();
        let contents = serde_json::to_value(&result).unwrap();
        assert_eq!(contents["contents"][0]["uri"], "greeting://Ada");
        assert_eq!(
            contents["contents"][0]["text"],
            "Hello, Ada! How can I assist you with leave management today?"
        );
    }

    #[test]
    fn template_advertises_uri_pattern() {
        let template = serde_json::to_value(greeting_resource_template().unwrap()).unwrap();
        assert_eq!(template["uriTemplate"], "greeting://{name}");
        assert_eq!(template["mimeType"], "text/plain");
    }
}
