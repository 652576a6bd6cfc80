//! Shared data types: result items returned by the comments API and the
//! widget's status variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SearchError;
use crate::text::truncate_text;

// ---------------------------------------------------------------------------
// Result items
// ---------------------------------------------------------------------------

/// One comment returned by the comments API.
///
/// Items are passed through as decoded. Unknown fields are ignored and any of
/// the known fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl SearchResultItem {
    /// Build an item from any JSON value without rejecting it.
    ///
    /// Fields that are absent or of the wrong type become `None`; non-object
    /// values yield an empty item.
    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            id: value.get("id").and_then(Value::as_i64),
            name: text("name"),
            email: text("email"),
            body: text("body"),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// Body shortened for list display.
    pub fn body_preview(&self, max_length: usize) -> String {
        truncate_text(self.body.as_deref().unwrap_or(""), max_length)
    }
}

// ---------------------------------------------------------------------------
// Widget status
// ---------------------------------------------------------------------------

/// What the results area currently shows. Exactly one of these is visible at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing searched yet, or the last search was cleared.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last search failed; no results are kept.
    Failed(SearchError),
    /// The last search finished. May be empty ("no results").
    Loaded(Vec<SearchResultItem>),
}

impl SearchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchStatus::Loading)
    }

    /// User-facing error notice, or `None` when no error is shown.
    pub fn error_notice(&self) -> Option<String> {
        match self {
            SearchStatus::Failed(err) => Some(err.notice()),
            _ => None,
        }
    }

    /// Current result list; empty unless the last search loaded results.
    pub fn results(&self) -> &[SearchResultItem] {
        match self {
            SearchStatus::Loaded(items) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ignores_extra_and_missing_fields() {
        let item: SearchResultItem =
            serde_json::from_str(r#"{"id": 7, "name": "n", "postId": 2}"#).unwrap();
        assert_eq!(item.id, Some(7));
        assert_eq!(item.name(), "n");
        assert_eq!(item.email(), "");
        assert_eq!(item.body, None);
        assert_eq!(item.body_preview(64), "");
    }

    #[test]
    fn test_from_json_tolerates_wrong_types() {
        let value = serde_json::json!({"id": "x", "name": 5, "email": "a@b.c", "body": null});
        let item = SearchResultItem::from_json(&value);
        assert_eq!(item.id, None);
        assert_eq!(item.name, None);
        assert_eq!(item.email(), "a@b.c");
        assert_eq!(item.body, None);
    }

    #[test]
    fn test_from_json_non_object_is_empty() {
        assert_eq!(SearchResultItem::from_json(&serde_json::json!(42)), SearchResultItem::default());
        assert_eq!(SearchResultItem::from_json(&Value::Null), SearchResultItem::default());
    }

    #[test]
    fn test_body_preview_truncates() {
        let item = SearchResultItem { body: Some("x".repeat(80)), ..Default::default() };
        let preview = item.body_preview(64);
        assert_eq!(preview.chars().count(), 67);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_status_accessors() {
        assert!(SearchStatus::Loading.is_loading());
        assert!(SearchStatus::Loading.results().is_empty());
        assert_eq!(SearchStatus::Idle.error_notice(), None);

        let failed = SearchStatus::Failed(SearchError::Network { message: "refused".into() });
        assert!(failed.error_notice().unwrap().contains("Network error"));
        assert!(failed.results().is_empty());

        let loaded = SearchStatus::Loaded(vec![SearchResultItem::default()]);
        assert_eq!(loaded.results().len(), 1);
        assert!(!loaded.is_loading());
    }
}
