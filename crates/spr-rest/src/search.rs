//! Entity search types and cursor handling.
//!
//! A search issues one POST and yields a [`SearchPage`]: the parsed
//! response plus the opaque cursor the backend returned inside
//! `data.cursor`, if any. Each page owns its cursor, so multiple searches
//! over different entity types can paginate independently from one client.
//! A cursor is only meaningful for the entity type that produced it; the
//! page remembers that type and reuses it for the next fetch.

use serde::Serialize;
use serde_json::Value;

/// An entity type searchable through `api/v2/search/{TYPE}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Case,
    Campaign,
    /// Digital assets (the SAM library).
    Sam,
}

impl EntityType {
    /// The upper-case path segment for this entity type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Case => "CASE",
            EntityType::Campaign => "CAMPAIGN",
            EntityType::Sam => "SAM",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// A search request document.
///
/// The filter is an opaque JSON object whose shape is defined by the
/// Sprinklr search API; this library does not validate it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub filter: Value,
    pub sort_key: String,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl SearchRequest {
    /// Create a request with the default sort (ascending by id) and the
    /// backend's default page size.
    pub fn new(filter: Value) -> Self {
        Self {
            filter,
            sort_key: "id".to_string(),
            sort_order: SortOrder::Asc,
            page_size: None,
        }
    }

    /// Set the sort key and order.
    pub fn with_sort(mut self, key: impl Into<String>, order: SortOrder) -> Self {
        self.sort_key = key.into();
        self.sort_order = order;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }
}

/// One page of search results with its pagination state.
#[derive(Debug, Clone)]
pub struct SearchPage {
    entity: EntityType,
    result: Value,
    cursor: Option<String>,
}

impl SearchPage {
    pub(crate) fn new(entity: EntityType, result: Value) -> Self {
        let cursor = extract_cursor(&result);
        Self {
            entity,
            result,
            cursor,
        }
    }

    /// The entity type this page (and its cursor) belongs to.
    pub fn entity(&self) -> EntityType {
        self.entity
    }

    /// The parsed response document.
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// The opaque cursor for the following page, if the backend returned
    /// one.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Returns true if another page can be fetched.
    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }
}

/// Pull `data.cursor` out of a parsed search response.
fn extract_cursor(result: &Value) -> Option<String> {
    result["data"]["cursor"].as_str().map(|s| s.to_string())
}
